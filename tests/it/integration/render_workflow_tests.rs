//! Workflow tests over the display tree: loading a nested source and
//! interacting with it the way the card view does.

use dataviewer::data::{parse_json_content, sample_table};
use dataviewer::hierarchy::{render, NodeKind, NodePath, NodeStateStore, RenderNode};
use dataviewer::images::ImageStore;
use dataviewer::types::TableSource;

/// Render every (column, value) pair of every row, like the card view.
fn render_table(table: &TableSource, store: &NodeStateStore) -> Vec<Vec<RenderNode>> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let root = NodePath::row(index);
            row.entries(&table.columns)
                .map(|(key, value)| render(key, value, &root.child(key), store))
                .collect()
        })
        .collect()
}

fn collect_image_references(node: &RenderNode, out: &mut Vec<String>) {
    if let NodeKind::Image { reference } = &node.kind {
        out.push(reference.clone());
    }
    for child in &node.children {
        collect_image_references(child, out);
    }
}

#[test]
fn expanding_one_row_leaves_the_other_rows_collapsed() {
    let table = sample_table();
    let mut store = NodeStateStore::new();

    store.toggle_expanded(&NodePath::row(0).child("Details"));
    let trees = render_table(&table, &store);

    let alice_details = &trees[0][1];
    let bob_details = &trees[1][1];
    assert_eq!(alice_details.children.len(), 3);
    assert!(bob_details.children.is_empty());
}

#[test]
fn deep_toggle_survives_re_rendering_the_whole_table() {
    let table = sample_table();
    let mut store = NodeStateStore::new();

    let details = NodePath::row(1).child("Details");
    store.toggle_expanded(&details);
    store.toggle_expanded(&details.child("Address"));

    // Re-render twice; stored state is path-keyed, not positional.
    let _ = render_table(&table, &store);
    let trees = render_table(&table, &store);

    let address = &trees[1][1].children[1];
    assert!(matches!(address.kind, NodeKind::Branch { expanded: true }));
    assert_eq!(address.children[0].label, "City: San Francisco");
}

#[test]
fn loaded_json_with_image_urls_yields_one_slot_per_reference() {
    let json = r#"[
        {"name": "Alice", "avatar": "http://example.com/alice.png"},
        {"name": "Bob", "avatar": "/bob.png"}
    ]"#;
    let table = parse_json_content(json).unwrap();
    let trees = render_table(&table, &NodeStateStore::new());

    let mut references = Vec::new();
    for tree in &trees {
        for node in tree {
            collect_image_references(node, &mut references);
        }
    }
    assert_eq!(
        references,
        vec!["http://example.com/alice.png".to_string(), "/bob.png".to_string()]
    );

    // The card view begins one fetch per reference, at most.
    let mut images = ImageStore::new();
    let mut started = 0;
    for reference in references.iter().chain(references.iter()) {
        if images.begin(reference) {
            started += 1;
        }
    }
    assert_eq!(started, 2);
}

#[test]
fn nested_image_reference_appears_after_expansion() {
    let json = r#"[{"profile": {"photo": "/deep/photo.png"}}]"#;
    let table = parse_json_content(json).unwrap();

    let mut store = NodeStateStore::new();
    let profile_path = NodePath::row(0).child("profile");

    let collapsed = render_table(&table, &store);
    let mut references = Vec::new();
    collect_image_references(&collapsed[0][0], &mut references);
    assert!(references.is_empty(), "collapsed branches hide their slots");

    store.toggle_expanded(&profile_path);
    let expanded = render_table(&table, &store);
    collect_image_references(&expanded[0][0], &mut references);
    assert_eq!(references, vec!["/deep/photo.png".to_string()]);
}
