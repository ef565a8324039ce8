//! Task visuals: one 3D proxy per task entity in the viewer.
//!
//! Construction builds the shape, label, and parent group once; every later
//! snapshot only mutates pose, color, and label text in place.
//!
//! # Invariants
//! - Geometry, material identity, and primitive count are fixed at
//!   construction; update never rebuilds or re-parents anything.
//! - The initial demand captured at construction stays the denominator for
//!   percent-complete for the visual's whole lifetime.
//! - Z position is frozen after construction; tasks do not move vertically.

pub mod registry;
pub mod task;

pub use registry::VisualRegistry;
pub use task::{TaskVisual, VisualError, demand_color, percent_complete};

pub fn crate_info() -> &'static str {
    "taskview-visual v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("visual"));
    }
}
