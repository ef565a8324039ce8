use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Surface material of a shape. Color is mutable; opacity is fixed when the
/// material is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
}

impl Material {
    /// Half-transparent material, so overlapping visuals stay legible.
    pub fn translucent(color: Color) -> Self {
        Self {
            color,
            opacity: 0.5,
        }
    }
}

/// Box mesh dimensions in world units. Built once; never rebuilt afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub width: f32,
    pub depth: f32,
    pub thickness: f32,
    /// Upward translation baked into the geometry so the box rests above
    /// ground instead of straddling z = 0.
    pub lift: f32,
}

/// The volumetric mesh representing an entity's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    pub geometry: BoxGeometry,
    pub material: Material,
    pub rotation: Quat,
}

/// Horizontal text alignment for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Typography settings for a label. Fixed at label creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub alignment: Alignment,
    pub color: Color,
    pub font_family: String,
    pub font_size: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            alignment: Alignment::Center,
            color: Color::BLACK,
            font_family: "serif".into(),
            font_size: 8.0,
        }
    }
}

/// Billboard text element. Identity, style, and offset are fixed at
/// creation; only the text content changes afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelNode {
    text: String,
    pub style: LabelStyle,
    /// Offset from the group origin, in the group's local frame.
    pub offset: Vec3,
}

impl LabelNode {
    pub fn new(text: impl Into<String>, offset: Vec3) -> Self {
        Self {
            text: text.into(),
            style: LabelStyle::default(),
            offset,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Stable handle for a mesh group. The scene owner tracks groups by this id
/// for insertion and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub Uuid);

impl GroupId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

/// Parent node holding one shape and one label together; its transform
/// places the whole visual in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshGroup {
    id: GroupId,
    /// World position of the group.
    pub position: Vec3,
    pub shape: ShapeNode,
    pub label: LabelNode,
}

impl MeshGroup {
    pub fn new(position: Vec3, shape: ShapeNode, label: LabelNode) -> Self {
        Self {
            id: GroupId::new(),
            position,
            shape,
            label,
        }
    }

    /// The group's handle. Never changes after creation.
    pub fn id(&self) -> GroupId {
        self.id
    }
}
