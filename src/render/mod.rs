//! Window rendering - toolbar, content views, and the error banner.

mod card_view;
mod schema_view;
mod stats_view;

use crate::app::{DataViewer, ViewMode};
use crate::constants::{CONTENT_PADDING, TOOLBAR_HEIGHT};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, ActiveTheme as _};

impl Render for DataViewer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Apply any completions that arrived since the last frame.
        self.drain_background(cx);

        let content = match self.view_mode {
            ViewMode::Cards => self.render_cards(cx),
            ViewMode::Schema => self.render_schema(cx),
            ViewMode::Statistics => self.render_statistics(cx),
        };
        let error_message = self.error_message.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.render_toolbar(cx))
            .child(content)
            .when_some(error_message, |el, message| {
                el.child(
                    div()
                        .p(px(CONTENT_PADDING))
                        .border_t_1()
                        .border_color(cx.theme().border)
                        .text_color(cx.theme().danger)
                        .child(message),
                )
            })
    }
}

/// Render a single toolbar button
fn toolbar_button(
    id: impl Into<ElementId>,
    label: String,
    active: bool,
    cx: &Context<DataViewer>,
) -> Stateful<Div> {
    let bg = if active {
        cx.theme().primary
    } else {
        cx.theme().secondary
    };
    let fg = if active {
        cx.theme().primary_foreground
    } else {
        cx.theme().foreground
    };
    let hover_bg = cx.theme().muted;

    div()
        .id(id)
        .px(px(10.0))
        .py(px(5.0))
        .rounded(px(6.0))
        .bg(bg)
        .hover(move |s| s.bg(if active { bg } else { hover_bg }))
        .cursor_pointer()
        .text_sm()
        .text_color(fg)
        .child(label)
}

impl DataViewer {
    fn render_toolbar(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let schema_active = self.view_mode == ViewMode::Schema;
        let stats_active = self.view_mode == ViewMode::Statistics;
        let can_reload = self.table.origin.path().is_some();
        let busy = self.background.has_pending();
        let title = format!("{} ({} rows)", self.table.name, self.table.row_count());

        h_flex()
            .h(px(TOOLBAR_HEIGHT))
            .px(px(CONTENT_PADDING))
            .gap(px(8.0))
            .items_center()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .child(title),
            )
            .child(div().flex_1())
            .when(busy, |el| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("Working..."),
                )
            })
            .child(
                toolbar_button(
                    "toggle-schema",
                    if schema_active { "Hide Schema" } else { "Show Schema" }.to_string(),
                    schema_active,
                    cx,
                )
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| this.toggle_schema(cx)),
                ),
            )
            .child(
                toolbar_button(
                    "toggle-stats",
                    if stats_active { "Hide Analysis" } else { "Show Analysis" }.to_string(),
                    stats_active,
                    cx,
                )
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| this.toggle_statistics(cx)),
                ),
            )
            .child(
                toolbar_button("export-html", "Export to HTML".to_string(), false, cx)
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, _, cx| this.export_html_action(cx)),
                    ),
            )
            .child(
                toolbar_button("export-pdf", "Export to PDF".to_string(), false, cx)
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, _, cx| this.export_pdf_action(cx)),
                    ),
            )
            .when(can_reload, |el| {
                el.child(
                    toolbar_button("reload", "Reload".to_string(), false, cx).on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, _, cx| this.reload_current(cx)),
                    ),
                )
            })
    }
}
