//! Scene primitives the viewer mutates in place, plus the renderer seam.
//!
//! Nodes here are retained-mode: built once, then updated field by field.
//! The GPU backend consumes them by group handle; this crate never talks to
//! the GPU itself.
//!
//! # Invariants
//! - A [`MeshGroup`] holds exactly one shape and one label as named fields;
//!   nothing addresses children positionally.
//! - [`GroupId`] is assigned at group creation and never changes.

pub mod node;
pub mod renderer;

pub use node::{
    Alignment, BoxGeometry, Color, GroupId, LabelNode, LabelStyle, Material, MeshGroup, ShapeNode,
};
pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "taskview-scene v0.1.0"
}
