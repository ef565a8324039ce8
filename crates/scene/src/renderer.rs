use glam::Vec3;

use crate::node::{Color, MeshGroup};

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 10.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads mesh groups and a view configuration, then produces
/// output. It never mutates the groups — group state is visual-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given groups and view.
    fn render(&self, groups: &[&MeshGroup], view: &RenderView) -> Self::Output;
}

/// Debug text renderer — stand-in for a GPU backend.
///
/// Produces a human-readable string representation of the scene. Useful for
/// CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn color_name(color: Color) -> &'static str {
    if color == Color::GREEN {
        "green"
    } else if color == Color::RED {
        "red"
    } else {
        "other"
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, groups: &[&MeshGroup], view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Scene (groups={}) ===\n", groups.len()));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        for group in groups {
            let p = group.position;
            out.push_str(&format!(
                "  [{:.8}] pos=({:.2}, {:.2}, {:.2}) label={} color={}\n",
                &group.id().0.to_string()[..8],
                p.x,
                p.y,
                p.z,
                group.label.text(),
                color_name(group.shape.material.color),
            ));
        }

        out
    }
}
