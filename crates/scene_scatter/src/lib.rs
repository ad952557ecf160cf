#![forbid(unsafe_code)]
//! scene_scatter: declarative 3D scene assembly with randomized decorative scattering.
//!
//! Modules:
//! - sampling: placement generation (annulus scattering around a central structure)
//! - scene: descriptor types (geometry, materials, lights, fog, sky) and the
//!   build routine that flattens them into shared-resource instances
//! - error: crate error type and result alias
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod sampling;
pub mod scene;

/// Convenient re-exports for common types. Import with `use scene_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{AnnulusScatter, PlacementSampling, PlacementTransform};
    pub use crate::scene::build::{build_scene, BuiltScene, Instance, WorldTransform};
    pub use crate::scene::color::Color;
    pub use crate::scene::spec::{
        DisplacementSpec, FogSpec, GeometrySpec, GroupSpec, LightSpec, MaterialSpec, MeshSpec,
        NodeSpec, ScatterSpec, SceneSpec, SkySpec, TextureSpec, TransformSpec, WrapMode,
    };
}
