//! Snapshot tests using the insta crate.
//!
//! These pin the exact textual shape of the display tree and the HTML
//! export, which is easier to review as a whole than field-by-field
//! assertions.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use dataviewer::data::sample_table;
use dataviewer::export::export_html;
use dataviewer::hierarchy::{render, NodePath, NodeStateStore, RenderNode};

/// Flatten a display tree into one indented line per node.
fn flatten(node: &RenderNode, out: &mut String) {
    for _ in 0..node.depth {
        out.push_str("    ");
    }
    out.push_str(&node.label);
    out.push('\n');
    for child in &node.children {
        flatten(child, out);
    }
}

fn render_row(index: usize, store: &NodeStateStore) -> String {
    let table = sample_table();
    let root = NodePath::row(index);
    let mut out = String::new();
    for (key, value) in table.rows[index].entries(&table.columns) {
        let node = render(key, value, &root.child(key), store);
        flatten(&node, &mut out);
    }
    out
}

#[test]
fn snapshot_sample_row_collapsed() {
    let rendered = render_row(0, &NodeStateStore::new());
    insta::assert_snapshot!(rendered, @r"
    Name: Alice
    ▶ Details
    ");
}

#[test]
fn snapshot_sample_row_fully_expanded() {
    let mut store = NodeStateStore::new();
    let details = NodePath::row(1).child("Details");
    store.toggle_expanded(&details);
    store.toggle_expanded(&details.child("Address"));

    let rendered = render_row(1, &store);
    insta::assert_snapshot!(rendered, @r"
    Name: Bob
    ▼ Details
        Age: 30
        ▼ Address
            City: San Francisco
            ZIP: 94105
        Hobbies: [Gaming, Traveling]
    ");
}

#[test]
fn snapshot_sample_table_html_export() {
    let html = export_html(&sample_table()).unwrap();
    insta::assert_snapshot!(html, @"<html><body><h1>Sample</h1><table border='1'><tr><th>Name</th><th>Details</th></tr><tr><td>Alice</td><td>{Age=25, Address={City=New York, ZIP=10001}, Hobbies=[Reading, Cycling]}</td></tr><tr><td>Bob</td><td>{Age=30, Address={City=San Francisco, ZIP=94105}, Hobbies=[Gaming, Traveling]}</td></tr></table></body></html>");
}
