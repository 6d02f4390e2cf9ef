//! The ordered node collection.
//!
//! Insertion order is paint order and hit-test priority: the first node that
//! matches a point wins. Connectors are ordinary nodes tagged
//! [`NodeKind::Edge`]; each endpoint records the anchor it is glued to so that
//! moving a node drags its connectors along without any proximity search.

use crate::model::{Anchor, Arrow, Attachment, Node, NodeKey, NodeKind, Point, Rgba};
use crate::shape;

#[cfg(test)]
#[path = "diagram_test.rs"]
mod diagram_test;

/// Max distance at which a seeded arrow endpoint is treated as sitting on an anchor.
pub const COINCIDENCE_TOLERANCE: f32 = 0.5;

/// Connector color used by [`Diagram::connect`].
pub const CONNECTOR_COLOR: Rgba = Rgba::rgb(255, 255, 255);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("no node with key {0:?}")]
    UnknownNode(NodeKey),
    #[error("node {0:?} has no anchor points")]
    NoAnchors(String),
}

#[derive(Clone, Debug)]
pub struct Diagram {
    nodes: Vec<Node>,
    coincidence_tolerance: f32,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    pub fn new() -> Self {
        Self::with_tolerance(COINCIDENCE_TOLERANCE)
    }

    pub fn with_tolerance(coincidence_tolerance: f32) -> Self {
        Self {
            nodes: Vec::new(),
            coincidence_tolerance,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeKey(i), n))
    }

    /// Appends a node. Binding happens once, here: free endpoints of an edge
    /// node glue to any anchor they coincide with, and a placed node claims the
    /// free endpoints already sitting on its anchors.
    pub fn add_node(&mut self, mut node: Node) -> NodeKey {
        let key = NodeKey(self.nodes.len());
        match &mut node.kind {
            NodeKind::Edge(arrow) => {
                if arrow.from_attachment == Attachment::Free {
                    arrow.from_attachment = self.coincident_anchor(arrow.from);
                }
                if arrow.to_attachment == Attachment::Free {
                    arrow.to_attachment = self.coincident_anchor(arrow.to);
                }
            }
            NodeKind::Placed { position, shape } => {
                let anchors = shape::anchor_points(&shape.kind, *position);
                self.claim_free_endpoints(key, &anchors);
            }
        }
        tracing::debug!(id = %node.id, ?key, "node added");
        self.nodes.push(node);
        key
    }

    /// Appends a connector placed by raw coordinates.
    pub fn add_arrow(&mut self, id: impl Into<String>, from: Point, to: Point, color: Rgba) -> NodeKey {
        self.add_node(Node::edge(id, Arrow::new(from, to, color)))
    }

    /// Creates a connector from `source`'s anchor to `dest`'s anchor, glued to both.
    pub fn connect(
        &mut self,
        source: NodeKey,
        source_anchor: Anchor,
        dest: NodeKey,
        dest_anchor: Anchor,
    ) -> Result<NodeKey, DiagramError> {
        let from = self.anchor_position(source, source_anchor)?;
        let to = self.anchor_position(dest, dest_anchor)?;
        let id = format!("{}->{}", self.node(source)?.id, self.node(dest)?.id);
        let arrow = Arrow {
            from,
            to,
            color: CONNECTOR_COLOR,
            from_attachment: Attachment::Anchored {
                node: source,
                anchor: source_anchor,
            },
            to_attachment: Attachment::Anchored {
                node: dest,
                anchor: dest_anchor,
            },
        };
        let key = self.add_node(Node::edge(id, arrow));
        tracing::debug!(?source, ?source_anchor, ?dest, ?dest_anchor, ?key, "connector created");
        Ok(key)
    }

    fn node(&self, key: NodeKey) -> Result<&Node, DiagramError> {
        self.nodes.get(key.0).ok_or(DiagramError::UnknownNode(key))
    }

    pub fn anchor_position(&self, key: NodeKey, anchor: Anchor) -> Result<Point, DiagramError> {
        let node = self.node(key)?;
        match &node.kind {
            NodeKind::Placed { position, shape } => {
                Ok(shape::anchor_point(&shape.kind, *position, anchor))
            }
            NodeKind::Edge(_) => Err(DiagramError::NoAnchors(node.id.clone())),
        }
    }

    /// First node in paint order whose shape contains `point`.
    pub fn hit_test(&self, point: Point, arrow_padding: f32) -> Option<NodeKey> {
        self.iter()
            .find(|(_, node)| match &node.kind {
                NodeKind::Placed { position, shape } => shape::contains(&shape.kind, *position, point),
                NodeKind::Edge(arrow) => shape::arrow_contains(arrow, point, arrow_padding),
            })
            .map(|(key, _)| key)
    }

    /// Like [`Diagram::hit_test`] but connectors are never picked.
    pub fn hit_test_draggable(&self, point: Point) -> Option<NodeKey> {
        self.iter()
            .find(|(_, node)| match &node.kind {
                NodeKind::Placed { position, shape } => shape::contains(&shape.kind, *position, point),
                NodeKind::Edge(_) => false,
            })
            .map(|(key, _)| key)
    }

    /// Every anchor within `radius` of `point`, scanning placed nodes in paint order.
    pub fn anchors_near(&self, point: Point, radius: f32) -> impl Iterator<Item = (NodeKey, Anchor)> + '_ {
        self.iter()
            .filter_map(|(key, node)| match &node.kind {
                NodeKind::Placed { position, shape } => {
                    Some((key, shape::anchor_points(&shape.kind, *position)))
                }
                NodeKind::Edge(_) => None,
            })
            .flat_map(move |(key, anchors)| {
                Anchor::ALL
                    .into_iter()
                    .filter(move |a| anchors[a.index()].distance(point) <= radius)
                    .map(move |a| (key, a))
            })
    }

    /// First anchor, scanning placed nodes in paint order, within `radius` of `point`.
    pub fn anchor_at(&self, point: Point, radius: f32) -> Option<(NodeKey, Anchor)> {
        self.anchors_near(point, radius).next()
    }

    fn coincident_anchor(&self, point: Point) -> Attachment {
        self.anchor_at(point, self.coincidence_tolerance)
            .map_or(Attachment::Free, |(node, anchor)| Attachment::Anchored { node, anchor })
    }

    fn claim_free_endpoints(&mut self, key: NodeKey, anchors: &[Point; 4]) {
        let tolerance = self.coincidence_tolerance;
        let bind = |point: Point| {
            Anchor::ALL
                .into_iter()
                .find(|a| anchors[a.index()].distance(point) <= tolerance)
                .map(|anchor| Attachment::Anchored { node: key, anchor })
        };
        for node in &mut self.nodes {
            let NodeKind::Edge(arrow) = &mut node.kind else {
                continue;
            };
            if arrow.from_attachment == Attachment::Free {
                if let Some(att) = bind(arrow.from) {
                    arrow.from_attachment = att;
                }
            }
            if arrow.to_attachment == Attachment::Free {
                if let Some(att) = bind(arrow.to) {
                    arrow.to_attachment = att;
                }
            }
        }
    }

    /// Moves a placed node and translates every connector endpoint attached to it
    /// by the same delta. Returns `false` if `key` is unknown or names a connector.
    pub fn move_node(&mut self, key: NodeKey, new_position: Point) -> bool {
        let Some(node) = self.nodes.get_mut(key.0) else {
            return false;
        };
        let NodeKind::Placed { position, .. } = &mut node.kind else {
            return false;
        };
        let delta = new_position - *position;
        *position = new_position;

        let attached = |att: Attachment| matches!(att, Attachment::Anchored { node, .. } if node == key);
        for node in &mut self.nodes {
            let NodeKind::Edge(arrow) = &mut node.kind else {
                continue;
            };
            if attached(arrow.from_attachment) {
                arrow.from = arrow.from + delta;
            }
            if attached(arrow.to_attachment) {
                arrow.to = arrow.to + delta;
            }
        }
        true
    }
}
