//! Annulus placement sampling strategy.
use std::f32::consts::TAU;

use glam::Vec3;
use rand::rand_core::RngCore;

use crate::error::{Error, Result};
use crate::sampling::{rand01, PlacementSampling, PlacementTransform};

/// Uniform i.i.d. scattering over a ring-shaped region around the origin.
///
/// Positions land on the ground plane between `inner_radius` and
/// `inner_radius + spread`, optionally lifted by a height jitter and tilted by a
/// small per-axis rotation jitter. Instances are independent; there is no
/// collision avoidance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnulusScatter {
    /// Number of placements to generate.
    pub count: usize,
    /// Inner radius of the ring, in world units.
    pub inner_radius: f32,
    /// Radial width of the ring, in world units.
    pub spread: f32,
    /// Upper bound for the uniform vertical offset.
    pub height_jitter: f32,
    /// Total width of the uniform per-axis rotation jitter, in radians.
    /// Each axis is sampled in `[-rotation_jitter / 2, rotation_jitter / 2)`.
    pub rotation_jitter: f32,
}

impl AnnulusScatter {
    /// Create a new annulus sampler with no height or rotation jitter.
    pub fn new(count: usize, inner_radius: f32, spread: f32) -> Self {
        Self {
            count,
            inner_radius,
            spread,
            height_jitter: 0.0,
            rotation_jitter: 0.0,
        }
    }

    /// Set the height jitter.
    pub fn with_height_jitter(mut self, height_jitter: f32) -> Self {
        self.height_jitter = height_jitter;
        self
    }

    /// Set the rotation jitter.
    pub fn with_rotation_jitter(mut self, rotation_jitter: f32) -> Self {
        self.rotation_jitter = rotation_jitter;
        self
    }

    /// Validates the parameters, returning an error if any is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("inner_radius", self.inner_radius),
            ("spread", self.spread),
            ("height_jitter", self.height_jitter),
            ("rotation_jitter", self.rotation_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }

        Ok(())
    }
}

impl PlacementSampling for AnnulusScatter {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<PlacementTransform>> {
        self.validate()?;

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let angle = rand01(rng) * TAU;
            let radius = self.inner_radius + rand01(rng) * self.spread;

            let position = Vec3::new(
                angle.sin() * radius,
                rand01(rng) * self.height_jitter,
                angle.cos() * radius,
            );
            let rotation = Vec3::new(
                (rand01(rng) - 0.5) * self.rotation_jitter,
                (rand01(rng) - 0.5) * self.rotation_jitter,
                (rand01(rng) - 0.5) * self.rotation_jitter,
            );

            out.push(PlacementTransform {
                position: position.into(),
                rotation: rotation.into(),
            });
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn reference_scatter() -> AnnulusScatter {
        AnnulusScatter::new(30, 4.0, 4.0)
            .with_height_jitter(0.4)
            .with_rotation_jitter(0.2)
    }

    #[test]
    fn new_defaults_to_zero_jitter() {
        let s = AnnulusScatter::new(10, 1.0, 2.0);
        assert_eq!(s.height_jitter, 0.0);
        assert_eq!(s.rotation_jitter, 0.0);
    }

    #[test]
    fn empty_for_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = AnnulusScatter::new(0, 4.0, 4.0);
        assert!(s.generate(&mut rng).unwrap().is_empty());
    }

    #[test]
    fn count_and_bounds_are_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = reference_scatter();
        let placements = s.generate(&mut rng).unwrap();
        assert_eq!(placements.len(), 30);

        for p in placements {
            let radial = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
            assert!(radial >= s.inner_radius - 1e-3);
            assert!(radial < s.inner_radius + s.spread + 1e-3);

            assert!(p.position.y >= 0.0 && p.position.y < s.height_jitter);

            let half = s.rotation_jitter * 0.5;
            for r in [p.rotation.x, p.rotation.y, p.rotation.z] {
                assert!(r >= -half && r <= half);
            }
        }
    }

    #[test]
    fn zero_spread_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = AnnulusScatter::new(1, 0.0, 0.0);
        let placements = s.generate(&mut rng).unwrap();
        assert_eq!(placements.len(), 1);

        let p = placements[0];
        assert_eq!(Vec3::from(p.position), Vec3::ZERO);
        assert_eq!(Vec3::from(p.rotation), Vec3::ZERO);
    }

    #[test]
    fn negative_parameters_are_rejected() {
        let mut rng = StdRng::seed_from_u64(3);

        let s = AnnulusScatter::new(4, -1.0, 4.0);
        assert!(matches!(
            s.generate(&mut rng),
            Err(Error::InvalidArgument(_))
        ));

        let s = AnnulusScatter::new(4, 4.0, 4.0).with_rotation_jitter(-0.2);
        assert!(matches!(
            s.generate(&mut rng),
            Err(Error::InvalidArgument(_))
        ));

        let s = AnnulusScatter::new(4, 4.0, f32::NAN);
        assert!(matches!(
            s.generate(&mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn determinism_for_same_seed() {
        let s = reference_scatter();

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let pa = s.generate(&mut rng_a).unwrap();
        let pb = s.generate(&mut rng_b).unwrap();
        assert_eq!(pa, pb);

        let mut rng_c = StdRng::seed_from_u64(456);
        let pc = s.generate(&mut rng_c).unwrap();
        assert_ne!(pa, pc);
    }
}
