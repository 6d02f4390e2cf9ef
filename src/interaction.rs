//! Pointer gesture state machine.
//!
//! A gesture starts on pointer-down and ends on pointer-up. Pressing on an
//! anchor starts a connector; pressing on a shape body starts a move. Anchors
//! win over bodies, so a press near an edge midpoint always draws a connector.

use crate::editor::Editor;
use crate::model::{Anchor, NodeKey, Point};

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A shape is following the pointer.
    MovingNode {
        node: NodeKey,
        /// Pointer position relative to the node's top-left at press time.
        grab_offset: Point,
    },
    /// A rubber-band connector is being pulled out of an anchor.
    DrawingConnector {
        source: NodeKey,
        anchor: Anchor,
        cursor: Point,
    },
}

/// Pointer cursor the host should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorHint {
    #[default]
    Default,
    Crosshair,
    Grab,
    Grabbing,
    /// Over a connector, which can be hovered but not dragged.
    PointingHand,
}

/// What the host should do after an input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub repaint: bool,
    pub cursor: CursorHint,
}

impl Editor {
    pub fn pointer_down(&mut self, point: Point) -> Response {
        if self.drag != DragState::Idle {
            return self.idle_response(point);
        }

        if let Some((source, anchor)) = self.diagram.anchor_at(point, self.settings.snap_hitbox) {
            tracing::debug!(?source, ?anchor, "start connector");
            self.drag = DragState::DrawingConnector {
                source,
                anchor,
                cursor: point,
            };
            return Response {
                repaint: true,
                cursor: CursorHint::Crosshair,
            };
        }

        if let Some(node) = self.diagram.hit_test_draggable(point) {
            if let Some(position) = self.diagram.get(node).and_then(|n| n.position()) {
                tracing::debug!(?node, "start move");
                self.drag = DragState::MovingNode {
                    node,
                    grab_offset: point - position,
                };
                return Response {
                    repaint: true,
                    cursor: CursorHint::Grabbing,
                };
            }
        }

        self.idle_response(point)
    }

    pub fn pointer_move(&mut self, point: Point) -> Response {
        match self.drag {
            DragState::Idle => self.idle_response(point),
            DragState::DrawingConnector { source, anchor, .. } => {
                self.drag = DragState::DrawingConnector {
                    source,
                    anchor,
                    cursor: point,
                };
                Response {
                    repaint: true,
                    cursor: CursorHint::Crosshair,
                }
            }
            DragState::MovingNode { node, grab_offset } => {
                self.diagram.move_node(node, point - grab_offset);
                Response {
                    repaint: true,
                    cursor: CursorHint::Grabbing,
                }
            }
        }
    }

    pub fn pointer_up(&mut self, point: Point) -> Response {
        let previous = std::mem::take(&mut self.drag);
        match previous {
            DragState::Idle => return self.idle_response(point),
            DragState::MovingNode { node, .. } => {
                tracing::debug!(?node, "end move");
            }
            DragState::DrawingConnector { source, anchor, .. } => {
                self.finish_connector(source, anchor, point);
            }
        }
        Response {
            repaint: true,
            ..self.idle_response(point)
        }
    }

    /// Abandons the current gesture without creating anything.
    pub fn cancel(&mut self) -> Response {
        let repaint = self.drag != DragState::Idle;
        self.drag = DragState::Idle;
        Response {
            repaint,
            cursor: CursorHint::Default,
        }
    }

    fn finish_connector(&mut self, source: NodeKey, anchor: Anchor, release: Point) {
        let Some((dest, dest_anchor)) = self.diagram.anchor_at(release, self.settings.snap_hitbox) else {
            tracing::debug!(?source, "connector released away from any anchor");
            return;
        };
        if dest == source {
            tracing::debug!(?source, "connector released on its own node");
            return;
        }
        match self.diagram.connect(source, anchor, dest, dest_anchor) {
            Ok(key) => tracing::info!(?key, "connector added"),
            Err(e) => tracing::warn!(error = %e, "connector rejected"),
        }
    }

    /// Cursor for a pointer hovering with no gesture in progress.
    fn idle_response(&self, point: Point) -> Response {
        let cursor = if self.diagram.anchor_at(point, self.settings.snap_hitbox).is_some() {
            CursorHint::Crosshair
        } else if self.diagram.hit_test_draggable(point).is_some() {
            CursorHint::Grab
        } else if self.diagram.hit_test(point, self.settings.arrow_padding).is_some() {
            CursorHint::PointingHand
        } else {
            CursorHint::Default
        };
        Response {
            repaint: false,
            cursor,
        }
    }
}
