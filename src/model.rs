use eframe::egui;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Add, Sub};

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_pos2(p: egui::Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let byte = |i: usize| {
            let bad = || ColorError::BadDigit(s.to_string());
            let pair = digits.get(i..i + 2).ok_or_else(bad)?;
            u8::from_str_radix(pair, 16).map_err(|_| bad())
        };
        let a = if digits.len() == 8 { byte(6)? } else { 255 };
        Ok(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a,
        })
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Fixed anchor slots shared by every shape that exposes anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Bottom = 0,
    Right = 1,
    Top = 2,
    Left = 3,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [Anchor::Bottom, Anchor::Right, Anchor::Top, Anchor::Left];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Anchor> {
        Self::ALL.get(index).copied()
    }
}

/// Stable handle to a node. Nodes are never removed, so the insertion index is stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub(crate) usize);

impl NodeKey {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Rgba,
}

impl Shape {
    pub fn rectangle(width: f32, height: f32, color: Rgba) -> Self {
        Self {
            kind: ShapeKind::Rectangle {
                width: width.max(0.0),
                height: height.max(0.0),
            },
            color,
        }
    }

    pub fn square(size: f32, color: Rgba) -> Self {
        Self::rectangle(size, size, color)
    }

    pub fn circle(radius: f32, color: Rgba) -> Self {
        Self {
            kind: ShapeKind::Circle {
                radius: radius.max(0.0),
            },
            color,
        }
    }
}

/// Where a connector endpoint is glued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attachment {
    #[default]
    Free,
    Anchored { node: NodeKey, anchor: Anchor },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
    pub from_attachment: Attachment,
    pub to_attachment: Attachment,
}

impl Arrow {
    pub fn new(from: Point, to: Point, color: Rgba) -> Self {
        Self {
            from,
            to,
            color,
            from_attachment: Attachment::Free,
            to_attachment: Attachment::Free,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// A shape whose geometry is computed from its top-left placement point.
    Placed { position: Point, shape: Shape },
    /// A connector; its geometry is fully described by its endpoints.
    Edge(Arrow),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn placed(id: impl Into<String>, position: Point, shape: Shape) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Placed { position, shape },
        }
    }

    pub fn edge(id: impl Into<String>, arrow: Arrow) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Edge(arrow),
        }
    }

    pub fn is_edge(&self) -> bool {
        matches!(self.kind, NodeKind::Edge(_))
    }

    pub fn position(&self) -> Option<Point> {
        match &self.kind {
            NodeKind::Placed { position, .. } => Some(*position),
            NodeKind::Edge(_) => None,
        }
    }

    pub fn arrow(&self) -> Option<&Arrow> {
        match &self.kind {
            NodeKind::Edge(arrow) => Some(arrow),
            NodeKind::Placed { .. } => None,
        }
    }
}
