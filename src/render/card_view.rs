//! Card view: one card per row, each value rendered through the
//! hierarchy module and mapped onto gpui elements.
//!
//! The display tree is pure data; this file only wires up styling,
//! click handlers, and image slots. Toggles go through the path-keyed
//! state store, so re-rendering after a click flips exactly one node.

use crate::app::DataViewer;
use crate::constants::{
    CARD_PADDING, CONTENT_PADDING, IMAGE_SLOT_SIZE, NEST_INDENT, NODE_PADDING,
};
use crate::hierarchy::{self, NodeKind, NodePath, RenderNode};
use crate::images::ImageSlotState;
use gpui::*;
use gpui_component::{v_flex, ActiveTheme as _};

impl DataViewer {
    pub(crate) fn render_cards(&mut self, cx: &mut Context<Self>) -> AnyElement {
        let columns = self.table.columns.clone();
        let rows = self.table.rows.clone();

        // Build all display trees first; the state store borrow ends
        // before image requests need &mut self.
        let trees: Vec<Vec<RenderNode>> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let root = NodePath::row(index);
                row.entries(&columns)
                    .map(|(key, value)| {
                        hierarchy::render(key, value, &root.child(key), &self.node_states)
                    })
                    .collect()
            })
            .collect();

        for tree in &trees {
            for node in tree {
                self.request_images_in(node, cx);
            }
        }

        let cards: Vec<AnyElement> = trees
            .into_iter()
            .enumerate()
            .map(|(index, nodes)| self.render_card(index, nodes, cx))
            .collect();

        div()
            .id("cards")
            .flex_1()
            .overflow_y_scroll()
            .p(px(CONTENT_PADDING))
            .child(v_flex().gap(px(CONTENT_PADDING)).children(cards))
            .into_any_element()
    }

    fn render_card(
        &self,
        index: usize,
        nodes: Vec<RenderNode>,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        v_flex()
            .id(ElementId::Name(format!("card-{}", index).into()))
            .p(px(CARD_PADDING))
            .gap(px(NODE_PADDING))
            .rounded(px(8.0))
            .bg(cx.theme().secondary)
            .border_1()
            .border_color(cx.theme().border)
            .children(
                nodes
                    .iter()
                    .map(|node| self.render_node(node, cx))
                    .collect::<Vec<_>>(),
            )
            .into_any_element()
    }

    /// Map one display node (and, for expanded branches, its subtree)
    /// onto elements.
    fn render_node(&self, node: &RenderNode, cx: &mut Context<Self>) -> AnyElement {
        match &node.kind {
            NodeKind::Error => div()
                .py(px(NODE_PADDING / 2.0))
                .text_sm()
                .text_color(cx.theme().danger)
                .child(node.label.clone())
                .into_any_element(),

            NodeKind::Static => div()
                .py(px(NODE_PADDING / 2.0))
                .text_sm()
                .child(node.label.clone())
                .into_any_element(),

            NodeKind::Truncatable { .. } => {
                let path = node.path.clone();
                div()
                    .id(ElementId::Name(format!("trunc-{}", node.path).into()))
                    .py(px(NODE_PADDING / 2.0))
                    .text_sm()
                    .text_color(cx.theme().primary)
                    .cursor_pointer()
                    .child(node.label.clone())
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _, _, cx| {
                            this.node_states.toggle_truncated(&path);
                            cx.notify();
                        }),
                    )
                    .into_any_element()
            }

            NodeKind::Branch { expanded } => {
                let path = node.path.clone();
                let label = div()
                    .id(ElementId::Name(format!("branch-{}", node.path).into()))
                    .py(px(NODE_PADDING / 2.0))
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .cursor_pointer()
                    .child(node.label.clone())
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _, _, cx| {
                            this.node_states.toggle_expanded(&path);
                            cx.notify();
                        }),
                    );

                let mut wrapper = v_flex().child(label);
                if *expanded {
                    wrapper = wrapper.child(
                        v_flex().pl(px(NEST_INDENT)).children(
                            node.children
                                .iter()
                                .map(|child| self.render_node(child, cx))
                                .collect::<Vec<_>>(),
                        ),
                    );
                }
                wrapper.into_any_element()
            }

            NodeKind::Image { reference } => {
                let slot = match self.images.state(reference) {
                    Some(ImageSlotState::Loaded(path)) => img(path.clone())
                        .w(px(IMAGE_SLOT_SIZE))
                        .h(px(IMAGE_SLOT_SIZE))
                        .rounded(px(4.0))
                        .into_any_element(),
                    Some(ImageSlotState::Failed(_)) => div()
                        .text_sm()
                        .text_color(cx.theme().danger)
                        .child("Image failed to load")
                        .into_any_element(),
                    _ => div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("Loading image...")
                        .into_any_element(),
                };
                v_flex()
                    .py(px(NODE_PADDING / 2.0))
                    .gap(px(NODE_PADDING))
                    .child(div().text_sm().child(node.label.clone()))
                    .child(slot)
                    .into_any_element()
            }
        }
    }

    /// Kick off resolution for every image slot in a display tree.
    fn request_images_in(&mut self, node: &RenderNode, cx: &mut Context<Self>) {
        if let NodeKind::Image { reference } = &node.kind {
            self.request_image(reference, cx);
        }
        for child in &node.children {
            self.request_images_in(child, cx);
        }
    }
}
