//! Core of a minimal diagram editor: shapes with four edge anchors, connectors
//! glued to those anchors, and the pointer state machine that moves shapes and
//! draws new connectors.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Points, colors, shapes, connectors and nodes |
//! | [`shape`] | Hit-testing and anchor geometry per shape variant |
//! | [`diagram`] | Ordered node collection, connector creation, node moves |
//! | [`interaction`] | Pointer gesture state machine |
//! | [`editor`] | Context object owning the diagram and the active gesture |
//! | [`render`] | Per-frame drawing against a [`surface::Surface`] |
//! | [`surface`] | Drawing capability trait and the egui painter adapter |
//! | [`settings`] | Tunables loaded from TOML or JSON |
//! | [`scene`] | Demo scene |

pub mod diagram;
pub mod editor;
pub mod interaction;
pub mod model;
pub mod render;
pub mod scene;
pub mod settings;
pub mod shape;
pub mod surface;
