//! Sampling strategies for generating placement transforms in a 3D scene.
//!
//! This module defines the trait and concrete strategies used to propose
//! position/rotation pairs for repeated decorative instances prior to scene
//! building.
use mint::Vector3;
use rand::rand_core::RngCore;

use crate::error::Result;

pub mod annulus;

pub use annulus::AnnulusScatter;

/// A position + rotation pair applied to one instance of a repeated object.
///
/// `rotation` is an XYZ Euler jitter in radians, small in magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementTransform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
}

/// Trait for placement sampling.
pub trait PlacementSampling: Send + Sync {
    /// Generate a batch of independent placements, drawing from `rng`.
    ///
    /// Fails with [`crate::error::Error::InvalidArgument`] when the strategy's
    /// parameters violate its contract; invalid parameters are never clamped.
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<PlacementTransform>>;
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}
