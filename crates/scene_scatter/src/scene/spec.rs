//! Descriptor types for authoring scenes as data.
//!
//! Everything a scene consists of (geometry dimensions, material maps,
//! transforms, lights, fog, sky) is expressed here as plain values. Nothing in
//! this module performs I/O; texture paths are opaque identifiers resolved by
//! whatever renders the built scene.
use glam::Vec3;

use crate::error::{Error, Result};
use crate::sampling::PlacementSampling;
use crate::scene::color::Color;

/// Parametric geometry of a mesh instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometrySpec {
    Box {
        width: f32,
        height: f32,
        depth: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

/// Texture addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    #[default]
    Clamp,
    Repeat,
}

/// Reference to a texture asset with its sampling parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct TextureSpec {
    /// Opaque asset identifier, typically a path.
    pub path: String,
    /// UV repeat factors.
    pub repeat: (f32, f32),
    pub wrap: WrapMode,
    /// Whether the asset holds sRGB-encoded color data.
    pub srgb: bool,
}

impl TextureSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            repeat: (1.0, 1.0),
            wrap: WrapMode::default(),
            srgb: false,
        }
    }

    pub fn with_repeat(mut self, x: f32, y: f32) -> Self {
        self.repeat = (x, y);
        self
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_srgb(mut self) -> Self {
        self.srgb = true;
        self
    }
}

/// Height displacement applied on top of a material.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplacementSpec {
    pub map: TextureSpec,
    pub scale: f32,
    pub bias: f32,
}

impl DisplacementSpec {
    pub fn new(map: TextureSpec, scale: f32, bias: f32) -> Self {
        Self { map, scale, bias }
    }
}

/// A physically-based surface description.
///
/// The `arm_map` is a packed texture feeding the ambient occlusion, roughness,
/// and metalness channels at once.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct MaterialSpec {
    pub base_color: Option<Color>,
    pub color_map: Option<TextureSpec>,
    pub arm_map: Option<TextureSpec>,
    pub normal_map: Option<TextureSpec>,
    pub alpha_map: Option<TextureSpec>,
    pub displacement: Option<DisplacementSpec>,
    pub transparent: bool,
}

impl MaterialSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = Some(color);
        self
    }

    pub fn with_color_map(mut self, map: TextureSpec) -> Self {
        self.color_map = Some(map);
        self
    }

    pub fn with_arm_map(mut self, map: TextureSpec) -> Self {
        self.arm_map = Some(map);
        self
    }

    pub fn with_normal_map(mut self, map: TextureSpec) -> Self {
        self.normal_map = Some(map);
        self
    }

    pub fn with_alpha_map(mut self, map: TextureSpec) -> Self {
        self.alpha_map = Some(map);
        self.transparent = true;
        self
    }

    pub fn with_displacement(mut self, displacement: DisplacementSpec) -> Self {
        self.displacement = Some(displacement);
        self
    }
}

/// Local position, XYZ Euler rotation (radians), and scale of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformSpec {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl TransformSpec {
    pub const IDENTITY: TransformSpec = TransformSpec {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A light source in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightSpec {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
    Point {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

/// Linear distance fog.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FogSpec {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

impl FogSpec {
    pub fn new(color: Color, near: f32, far: f32) -> Self {
        Self { color, near, far }
    }

    /// Validates the fog distances, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.near.is_finite() || !self.far.is_finite() || self.near < 0.0 {
            return Err(Error::InvalidArgument(
                "fog distances must be finite and >= 0".into(),
            ));
        }
        if self.near > self.far {
            return Err(Error::InvalidArgument(format!(
                "fog near ({}) must not exceed far ({})",
                self.near, self.far
            )));
        }

        Ok(())
    }
}

/// Atmospheric sky parameters, consumed by the renderer's sky model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct SkySpec {
    pub turbidity: f32,
    pub rayleigh: f32,
    pub mie_coefficient: f32,
    pub mie_directional_g: f32,
    pub sun_position: Vec3,
}

impl SkySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sun_position(mut self, sun_position: Vec3) -> Self {
        self.sun_position = sun_position;
        self
    }

    pub fn with_turbidity(mut self, turbidity: f32) -> Self {
        self.turbidity = turbidity;
        self
    }

    pub fn with_rayleigh(mut self, rayleigh: f32) -> Self {
        self.rayleigh = rayleigh;
        self
    }

    pub fn with_mie(mut self, coefficient: f32, directional_g: f32) -> Self {
        self.mie_coefficient = coefficient;
        self.mie_directional_g = directional_g;
        self
    }

    /// Validates the scattering parameters, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("turbidity", self.turbidity),
            ("rayleigh", self.rayleigh),
            ("mie_coefficient", self.mie_coefficient),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "sky {name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if !(0.0..1.0).contains(&self.mie_directional_g) {
            return Err(Error::InvalidArgument(format!(
                "sky mie_directional_g must be in [0, 1), got {}",
                self.mie_directional_g
            )));
        }

        Ok(())
    }
}

impl Default for SkySpec {
    fn default() -> Self {
        Self {
            turbidity: 10.0,
            rayleigh: 3.0,
            mie_coefficient: 0.005,
            mie_directional_g: 0.7,
            sun_position: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

/// A node in the authored scene tree.
pub enum NodeSpec {
    Group(GroupSpec),
    Mesh(MeshSpec),
    Scatter(ScatterSpec),
}

/// A named grouping node whose transform applies to all children.
#[non_exhaustive]
pub struct GroupSpec {
    pub name: String,
    pub transform: TransformSpec,
    pub children: Vec<NodeSpec>,
}

impl GroupSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: TransformSpec::IDENTITY,
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<NodeSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A single mesh instance.
#[non_exhaustive]
pub struct MeshSpec {
    pub name: String,
    pub geometry: GeometrySpec,
    pub material: MaterialSpec,
    pub transform: TransformSpec,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshSpec {
    pub fn new(name: impl Into<String>, geometry: GeometrySpec, material: MaterialSpec) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            transform: TransformSpec::IDENTITY,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_cast_shadow(mut self, cast_shadow: bool) -> Self {
        self.cast_shadow = cast_shadow;
        self
    }

    pub fn with_receive_shadow(mut self, receive_shadow: bool) -> Self {
        self.receive_shadow = receive_shadow;
        self
    }
}

/// A repeated decorative object: one geometry/material pair instanced once per
/// placement produced by the sampling strategy.
#[non_exhaustive]
pub struct ScatterSpec {
    pub name: String,
    pub geometry: GeometrySpec,
    pub material: MaterialSpec,
    pub sampling: Box<dyn PlacementSampling>,
    pub cast_shadow: bool,
}

impl ScatterSpec {
    /// Create a new scatter node with required fields.
    pub fn new(
        name: impl Into<String>,
        geometry: GeometrySpec,
        material: MaterialSpec,
        sampling: Box<dyn PlacementSampling>,
    ) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            sampling,
            cast_shadow: false,
        }
    }

    /// Create a new scatter node with a concrete sampling strategy.
    pub fn new_with<S: PlacementSampling + 'static>(
        name: impl Into<String>,
        geometry: GeometrySpec,
        material: MaterialSpec,
        sampling: S,
    ) -> Self {
        Self::new(name, geometry, material, Box::new(sampling))
    }

    pub fn with_cast_shadow(mut self, cast_shadow: bool) -> Self {
        self.cast_shadow = cast_shadow;
        self
    }
}

/// A scene authored as descriptors: a node tree plus lights, fog, and sky.
#[derive(Default)]
#[non_exhaustive]
pub struct SceneSpec {
    pub nodes: Vec<NodeSpec>,
    pub lights: Vec<LightSpec>,
    pub fog: Option<FogSpec>,
    pub sky: Option<SkySpec>,
}

impl SceneSpec {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single node to the scene.
    pub fn with_node(mut self, node: NodeSpec) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add multiple nodes to the scene.
    pub fn with_nodes(mut self, nodes: Vec<NodeSpec>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Add a light to the scene.
    pub fn with_light(mut self, light: LightSpec) -> Self {
        self.lights.push(light);
        self
    }

    pub fn with_fog(mut self, fog: FogSpec) -> Self {
        self.fog = Some(fog);
        self
    }

    pub fn with_sky(mut self, sky: SkySpec) -> Self {
        self.sky = Some(sky);
        self
    }
}
