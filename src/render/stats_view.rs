//! Statistics view: mean, median, and variance per integer column.

use crate::app::DataViewer;
use crate::constants::CONTENT_PADDING;
use crate::stats::{compute_statistics, ColumnStats};
use gpui::*;
use gpui_component::{v_flex, ActiveTheme as _};

fn stat_line(label: &str, value: f64) -> String {
    if value.is_nan() {
        format!("{}: undefined", label)
    } else {
        format!("{}: {}", label, value)
    }
}

impl DataViewer {
    pub(crate) fn render_statistics(&mut self, cx: &mut Context<Self>) -> AnyElement {
        let stats = compute_statistics(&self.table);

        let body: AnyElement = if stats.is_empty() {
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child("No integer columns to analyze")
                .into_any_element()
        } else {
            v_flex()
                .gap(px(CONTENT_PADDING))
                .children(
                    stats
                        .into_iter()
                        .map(|(name, column_stats)| render_column(name, column_stats))
                        .collect::<Vec<_>>(),
                )
                .into_any_element()
        };

        div()
            .id("statistics")
            .flex_1()
            .overflow_y_scroll()
            .p(px(CONTENT_PADDING))
            .child(
                v_flex()
                    .gap(px(4.0))
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::BOLD)
                            .child("Statistics"),
                    )
                    .child(body),
            )
            .into_any_element()
    }
}

fn render_column(name: String, stats: ColumnStats) -> AnyElement {
    v_flex()
        .gap(px(1.0))
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .child(name),
        )
        .child(div().text_sm().child(stat_line("  Mean", stats.mean)))
        .child(div().text_sm().child(stat_line("  Median", stats.median)))
        .child(div().text_sm().child(stat_line("  Variance", stats.variance)))
        .into_any_element()
}
