//! Schema view: column names and their declared types.

use crate::app::DataViewer;
use crate::constants::CONTENT_PADDING;
use gpui::*;
use gpui_component::v_flex;

impl DataViewer {
    pub(crate) fn render_schema(&mut self, _cx: &mut Context<Self>) -> AnyElement {
        let lines: Vec<AnyElement> = self
            .table
            .columns
            .iter()
            .map(|column| {
                div()
                    .text_sm()
                    .child(format!("- {}: {}", column.name, column.data_type.label()))
                    .into_any_element()
            })
            .collect();

        div()
            .id("schema")
            .flex_1()
            .overflow_y_scroll()
            .p(px(CONTENT_PADDING))
            .child(
                v_flex()
                    .gap(px(2.0))
                    .child(div().text_sm().font_weight(FontWeight::BOLD).child("Schema"))
                    .children(lines),
            )
            .into_any_element()
    }
}
