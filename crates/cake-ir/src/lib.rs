//! Scene intermediate representation for the cake visualizer.
//!
//! This crate defines the node tree that a built cake is described with:
//! parametric primitives, Phong-style materials, local transforms and the
//! viewport settings a renderer needs to display them.
//!
//! The IR is purely declarative: no mesh data, just a tree of shapes.
//! Tessellation and drawing are left to whichever rendering engine consumes it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::fmt;

pub mod outline;

/// Unique identifier for a node in the scene tree.
pub type NodeId = u64;

/// 3D vector with f64 components (scene units, Y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// The all-ones vector (identity scale).
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
}

/// 24-bit RGB color stored as `0xRRGGBB`.
///
/// Serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    /// Create a color from a `0xRRGGBB` value. Bits above 24 are dropped.
    pub const fn hex(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }

    /// The `0xRRGGBB` value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Red channel, 0–255.
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    /// Green channel, 0–255.
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    /// Blue channel, 0–255.
    pub const fn b(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Channels normalized to `0.0..=1.0`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r()) / 255.0,
            f64::from(self.g()) / 255.0,
            f64::from(self.b()) / 255.0,
        ]
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s}")))
    }
}

/// Parametric primitive shape, centered at the node origin.
///
/// Cylinders and cones are aligned with the Y axis; the torus lies in the
/// XY plane and sweeps `arc` radians starting from +X.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Cylinder (or frustum) along Y.
    Cylinder {
        /// Radius of the top cap.
        radius_top: f64,
        /// Radius of the bottom cap.
        radius_bottom: f64,
        /// Height along Y.
        height: f64,
        /// Segments around the circumference.
        radial_segments: u32,
        /// Omit both caps, leaving only the side wall.
        open_ended: bool,
    },
    /// UV sphere.
    Sphere {
        /// Sphere radius.
        radius: f64,
        /// Horizontal segments.
        width_segments: u32,
        /// Vertical segments.
        height_segments: u32,
    },
    /// Cone with its apex at +Y.
    Cone {
        /// Base radius.
        radius: f64,
        /// Height along Y.
        height: f64,
        /// Segments around the base.
        radial_segments: u32,
    },
    /// Torus, possibly partial.
    Torus {
        /// Distance from the torus center to the tube center.
        radius: f64,
        /// Tube radius.
        tube: f64,
        /// Segments around the tube.
        radial_segments: u32,
        /// Segments along the sweep.
        tubular_segments: u32,
        /// Swept angle in radians, `(0, 2π]`.
        arc: f64,
    },
    /// Axis-aligned box.
    Box {
        /// Size along X.
        width: f64,
        /// Size along Y.
        height: f64,
        /// Size along Z.
        depth: f64,
    },
}

impl Geometry {
    /// Closed cylinder with equal radii.
    pub fn cylinder(radius: f64, height: f64, radial_segments: u32) -> Self {
        Geometry::Cylinder {
            radius_top: radius,
            radius_bottom: radius,
            height,
            radial_segments,
            open_ended: false,
        }
    }

    /// Sphere with the same segment count in both directions.
    pub fn sphere(radius: f64, segments: u32) -> Self {
        Geometry::Sphere {
            radius,
            width_segments: segments,
            height_segments: segments,
        }
    }

    /// Short name of the primitive kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Cylinder { .. } => "cylinder",
            Geometry::Sphere { .. } => "sphere",
            Geometry::Cone { .. } => "cone",
            Geometry::Torus { .. } => "torus",
            Geometry::Box { .. } => "box",
        }
    }

    /// Check that every parameter can be turned into a mesh.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match *self {
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                ..
            } => {
                non_negative("radius_top", radius_top)?;
                non_negative("radius_bottom", radius_bottom)?;
                if radius_top == 0.0 && radius_bottom == 0.0 {
                    return Err(GeometryError::new("radius", "both radii are zero"));
                }
                positive("height", height)?;
                segments("radial_segments", radial_segments, 3)
            }
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => {
                positive("radius", radius)?;
                segments("width_segments", width_segments, 3)?;
                segments("height_segments", height_segments, 2)
            }
            Geometry::Cone {
                radius,
                height,
                radial_segments,
            } => {
                positive("radius", radius)?;
                positive("height", height)?;
                segments("radial_segments", radial_segments, 3)
            }
            Geometry::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
                arc,
            } => {
                positive("radius", radius)?;
                positive("tube", tube)?;
                segments("radial_segments", radial_segments, 3)?;
                segments("tubular_segments", tubular_segments, 3)?;
                positive("arc", arc)?;
                if arc > TAU + 1e-9 {
                    return Err(GeometryError::new("arc", format!("{arc} exceeds a full turn")));
                }
                Ok(())
            }
            Geometry::Box {
                width,
                height,
                depth,
            } => {
                positive("width", width)?;
                positive("height", height)?;
                positive("depth", depth)
            }
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::new(field, format!("expected a positive size, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::new(field, format!("expected a non-negative size, got {value}")))
    }
}

fn segments(field: &'static str, value: u32, min: u32) -> Result<(), GeometryError> {
    if value >= min {
        Ok(())
    } else {
        Err(GeometryError::new(field, format!("needs at least {min} segments, got {value}")))
    }
}

/// A primitive parameter that cannot produce a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryError {
    /// Offending parameter.
    pub field: &'static str,
    /// Description of the problem.
    pub message: String,
}

impl GeometryError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for GeometryError {}

/// Phong-style material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Diffuse color.
    pub color: Rgb,
    /// Specular exponent.
    pub shininess: f64,
    /// Self-illumination color, if any.
    pub emissive: Option<Rgb>,
}

impl MaterialDef {
    /// Default shininess used by the rendering engine when none is given.
    pub const DEFAULT_SHININESS: f64 = 30.0;

    /// Non-emissive material.
    pub fn new(color: Rgb, shininess: f64) -> Self {
        Self {
            color,
            shininess,
            emissive: None,
        }
    }

    /// Material with the engine's default shininess.
    pub fn plain(color: Rgb) -> Self {
        Self::new(color, Self::DEFAULT_SHININESS)
    }

    /// Add an emissive color.
    pub fn with_emissive(mut self, emissive: Rgb) -> Self {
        self.emissive = Some(emissive);
        self
    }
}

/// Local transform relative to the parent node.
///
/// Rotation is Euler angles in radians applied in X, Y, Z order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, rotation or scale.
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Self::IDENTITY
        }
    }

    /// Replace the rotation.
    pub fn rotated(mut self, x: f64, y: f64, z: f64) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    /// Replace the scale.
    pub fn scaled(mut self, x: f64, y: f64, z: f64) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NodeKind {
    /// Transform-only grouping node.
    Group,
    /// Primitive shape with a material.
    Mesh {
        /// Shape parameters.
        geometry: Geometry,
        /// Surface material.
        material: MaterialDef,
    },
}

/// A node in the scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Optional human-readable name.
    pub name: Option<String>,
    /// Parent node, `None` for detached nodes and roots.
    pub parent: Option<NodeId>,
    /// Children in insertion order.
    pub children: Vec<NodeId>,
    /// Local transform.
    pub transform: Transform,
    /// Group or mesh payload.
    pub kind: NodeKind,
}

impl Node {
    /// Geometry of a mesh node.
    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.kind {
            NodeKind::Mesh { geometry, .. } => Some(geometry),
            NodeKind::Group => None,
        }
    }

    /// Material of a mesh node.
    pub fn material(&self) -> Option<&MaterialDef> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Group => None,
        }
    }
}

/// Kind of light source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LightKind {
    /// Uniform light from every direction.
    Ambient,
    /// Parallel rays shining from `position` toward the origin.
    Directional {
        /// Light position.
        position: Vec3,
    },
}

/// A light in the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Light color.
    pub color: Rgb,
    /// Intensity multiplier.
    pub intensity: f64,
    /// Light type.
    pub kind: LightKind,
}

/// Perspective camera placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at (orbit center).
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Near clip plane.
    pub near: f64,
    /// Far clip plane.
    pub far: f64,
}

/// Viewport settings shared by every cake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    /// Clear color.
    pub background: Rgb,
    /// Initial camera.
    pub camera: Camera,
    /// Lights.
    pub lights: Vec<Light>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            background: Rgb::hex(0xf0f0f0),
            camera: Camera {
                position: Vec3::new(0.0, 0.0, 5.0),
                target: Vec3::ZERO,
                fov: 75.0,
                near: 0.1,
                far: 1000.0,
            },
            lights: vec![
                Light {
                    color: Rgb::hex(0xffffff),
                    intensity: 0.5,
                    kind: LightKind::Ambient,
                },
                Light {
                    color: Rgb::hex(0xffffff),
                    intensity: 0.8,
                    kind: LightKind::Directional {
                        position: Vec3::new(1.0, 1.0, 1.0),
                    },
                },
            ],
        }
    }
}

/// A scene document: the full node tree plus viewport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Format version string (e.g. "0.1").
    pub version: String,
    /// All nodes, keyed by [`NodeId`].
    pub nodes: HashMap<NodeId, Node>,
    /// Nodes attached to the scene, in attach order.
    pub roots: Vec<NodeId>,
    /// Background, camera and lights.
    pub settings: SceneSettings,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: "0.1".to_string(),
            nodes: HashMap::new(),
            roots: Vec::new(),
            settings: SceneSettings::default(),
        }
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of mesh nodes.
    pub fn mesh_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|n| matches!(n.kind, NodeKind::Mesh { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(id: NodeId, name: &str, geometry: Geometry) -> Node {
        Node {
            id,
            name: Some(name.to_string()),
            parent: None,
            children: Vec::new(),
            transform: Transform::IDENTITY,
            kind: NodeKind::Mesh {
                geometry,
                material: MaterialDef::new(Rgb::hex(0xf7d795), 30.0),
            },
        }
    }

    #[test]
    fn roundtrip_document() {
        let mut doc = Document::new();

        let mut group = Node {
            id: 1,
            name: Some("cake".to_string()),
            parent: None,
            children: vec![2],
            transform: Transform::IDENTITY,
            kind: NodeKind::Group,
        };
        group.transform.rotation.y = 0.5;
        doc.nodes.insert(1, group);

        let mut body = mesh(2, "tier-0-body", Geometry::cylinder(1.5, 0.5, 32));
        body.parent = Some(1);
        body.transform = Transform::at(0.0, 0.25, 0.0);
        doc.nodes.insert(2, body);
        doc.roots.push(1);

        let json = doc.to_json().expect("serialize");
        let restored = Document::from_json(&json).expect("deserialize");

        assert_eq!(doc, restored);
        assert_eq!(restored.nodes.len(), 2);
        assert_eq!(restored.mesh_count(), 1);
        assert_eq!(restored.roots, vec![1]);
    }

    #[test]
    fn empty_document() {
        let doc = Document::new();
        assert_eq!(doc.version, "0.1");
        assert!(doc.nodes.is_empty());
        assert!(doc.roots.is_empty());
        assert_eq!(doc.settings.background, Rgb::hex(0xf0f0f0));
        assert_eq!(doc.settings.lights.len(), 2);
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::hex(0x3c1803)).unwrap();
        assert_eq!(json, r##""#3c1803""##);

        let restored: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, Rgb::hex(0x3c1803));
        assert!(serde_json::from_str::<Rgb>(r#""not-a-color""#).is_err());
    }

    #[test]
    fn color_channels() {
        let c = Rgb::hex(0xff6b8a);
        assert_eq!((c.r(), c.g(), c.b()), (0xff, 0x6b, 0x8a));
        assert_eq!(c.to_unit()[0], 1.0);
        assert_eq!(Rgb::parse("ff6b8a"), Some(c));
        assert_eq!(Rgb::parse("#fff"), None);
    }

    #[test]
    fn color_stays_within_24_bits() {
        let c = Rgb::hex(0xab12_3456);
        assert_eq!(c.value(), 0x12_3456);
        assert_eq!(c.to_string(), "#123456");
    }

    #[test]
    fn parse_requires_six_hex_digits() {
        assert_eq!(Rgb::parse("#+fffff"), None);
        assert_eq!(Rgb::parse("-fffff"), None);
        assert_eq!(Rgb::parse("#ffffff"), Some(Rgb::hex(0xffffff)));
        assert!(serde_json::from_str::<Rgb>(r##""#+00000""##).is_err());
    }

    #[test]
    fn serde_tagged_enum() {
        let geometry = Geometry::Torus {
            radius: 0.1,
            tube: 0.02,
            radial_segments: 8,
            tubular_segments: 12,
            arc: std::f64::consts::PI,
        };
        let json = serde_json::to_string(&geometry).unwrap();
        assert!(json.contains(r#""type":"Torus""#));

        let restored: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(geometry, restored);
    }

    #[test]
    fn validate_accepts_cake_primitives() {
        assert!(Geometry::cylinder(1.5, 0.5, 32).validate().is_ok());
        assert!(Geometry::sphere(0.08, 8).validate().is_ok());
        assert!(Geometry::Cylinder {
            radius_top: 0.03,
            radius_bottom: 0.0,
            height: 0.3,
            radial_segments: 8,
            open_ended: false,
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        let err = Geometry::cylinder(-0.1, 0.5, 32).validate().unwrap_err();
        assert_eq!(err.field, "radius_top");

        let err = Geometry::sphere(f64::NAN, 8).validate().unwrap_err();
        assert_eq!(err.field, "radius");

        let err = Geometry::cylinder(1.0, 0.5, 2).validate().unwrap_err();
        assert_eq!(err.field, "radial_segments");

        let err = Geometry::Torus {
            radius: 0.1,
            tube: 0.02,
            radial_segments: 8,
            tubular_segments: 12,
            arc: 7.0,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "arc");
        assert!(err.to_string().starts_with("arc:"));
    }
}
