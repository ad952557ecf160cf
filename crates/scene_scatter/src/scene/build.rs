//! Build routine that flattens scene descriptors into drawable instances.
//!
//! Walking the authored node tree depth-first, the builder composes transforms,
//! registers each node's geometry and material in shared tables, and expands
//! scatter nodes through their sampling strategy so that every generated
//! placement becomes one instance referencing the same resource pair.
use glam::{EulerRot, Quat, Vec3};
use rand::rand_core::RngCore;
use tracing::{info, warn};

use crate::error::Result;
use crate::sampling::PlacementTransform;
use crate::scene::spec::{
    FogSpec, GeometrySpec, GroupSpec, LightSpec, MaterialSpec, MeshSpec, NodeSpec, ScatterSpec,
    SceneSpec, SkySpec, TransformSpec,
};

/// World-space transform of a built instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl WorldTransform {
    pub const IDENTITY: WorldTransform = WorldTransform {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Convert an authored transform, interpreting its rotation as XYZ Euler radians.
    pub fn from_spec(spec: &TransformSpec) -> Self {
        Self {
            position: spec.position,
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                spec.rotation.x,
                spec.rotation.y,
                spec.rotation.z,
            ),
            scale: spec.scale,
        }
    }

    /// Compose with a child transform (parent applied first).
    ///
    /// Shear-free: scale composes component-wise, so non-uniform parent scale
    /// under rotation behaves like nested scene-graph nodes, not a full affine.
    pub fn compose(&self, child: &WorldTransform) -> WorldTransform {
        WorldTransform {
            position: self.position + self.rotation * (self.scale * child.position),
            rotation: self.rotation * child.rotation,
            scale: self.scale * child.scale,
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<PlacementTransform> for WorldTransform {
    fn from(placement: PlacementTransform) -> Self {
        let rotation = Vec3::from(placement.rotation);
        Self {
            position: placement.position.into(),
            rotation: Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
            scale: Vec3::ONE,
        }
    }
}

/// One drawable instance of a shared geometry/material pair.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Name derived from the authoring node (scatter instances carry an index suffix).
    pub name: String,
    /// Index into [`BuiltScene::geometries`].
    pub geometry: usize,
    /// Index into [`BuiltScene::materials`].
    pub material: usize,
    pub transform: WorldTransform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// Result of building a scene: flattened instances plus the shared resource
/// tables they index into, and the pass-through environment settings.
#[non_exhaustive]
#[derive(Default)]
pub struct BuiltScene {
    pub geometries: Vec<GeometrySpec>,
    pub materials: Vec<MaterialSpec>,
    pub instances: Vec<Instance>,
    pub lights: Vec<LightSpec>,
    pub fog: Option<FogSpec>,
    pub sky: Option<SkySpec>,
}

impl BuiltScene {
    fn register(&mut self, geometry: GeometrySpec, material: MaterialSpec) -> (usize, usize) {
        self.geometries.push(geometry);
        self.materials.push(material);
        (self.geometries.len() - 1, self.materials.len() - 1)
    }
}

/// Builds the given scene, drawing scatter placements from `rng`.
pub fn build_scene<R: RngCore>(spec: &SceneSpec, rng: &mut R) -> Result<BuiltScene> {
    if let Some(fog) = &spec.fog {
        fog.validate()?;
    }
    if let Some(sky) = &spec.sky {
        sky.validate()?;
    }

    let mut built = BuiltScene {
        lights: spec.lights.clone(),
        fog: spec.fog,
        sky: spec.sky,
        ..Default::default()
    };

    for node in &spec.nodes {
        walk(node, WorldTransform::IDENTITY, &mut built, rng)?;
    }

    info!(
        "Built scene: {} instances, {} geometries, {} lights.",
        built.instances.len(),
        built.geometries.len(),
        built.lights.len(),
    );

    Ok(built)
}

fn walk<R: RngCore>(
    node: &NodeSpec,
    parent: WorldTransform,
    built: &mut BuiltScene,
    rng: &mut R,
) -> Result<()> {
    match node {
        NodeSpec::Group(group) => walk_group(group, parent, built, rng),
        NodeSpec::Mesh(mesh) => {
            walk_mesh(mesh, parent, built);
            Ok(())
        }
        NodeSpec::Scatter(scatter) => walk_scatter(scatter, parent, built, rng),
    }
}

fn walk_group<R: RngCore>(
    group: &GroupSpec,
    parent: WorldTransform,
    built: &mut BuiltScene,
    rng: &mut R,
) -> Result<()> {
    if group.children.is_empty() {
        warn!("Group '{}' has no children; skipping.", group.name);
        return Ok(());
    }

    let world = parent.compose(&WorldTransform::from_spec(&group.transform));
    for child in &group.children {
        walk(child, world, built, rng)?;
    }

    Ok(())
}

fn walk_mesh(mesh: &MeshSpec, parent: WorldTransform, built: &mut BuiltScene) {
    let (geometry, material) = built.register(mesh.geometry, mesh.material.clone());
    built.instances.push(Instance {
        name: mesh.name.clone(),
        geometry,
        material,
        transform: parent.compose(&WorldTransform::from_spec(&mesh.transform)),
        cast_shadow: mesh.cast_shadow,
        receive_shadow: mesh.receive_shadow,
    });
}

fn walk_scatter<R: RngCore>(
    scatter: &ScatterSpec,
    parent: WorldTransform,
    built: &mut BuiltScene,
    rng: &mut R,
) -> Result<()> {
    let placements = scatter.sampling.generate(rng)?;
    if placements.is_empty() {
        warn!("Scatter '{}' produced no placements.", scatter.name);
    }

    let (geometry, material) = built.register(scatter.geometry, scatter.material.clone());
    for (index, placement) in placements.into_iter().enumerate() {
        built.instances.push(Instance {
            name: format!("{}_{}", scatter.name, index),
            geometry,
            material,
            transform: parent.compose(&placement.into()),
            cast_shadow: scatter.cast_shadow,
            receive_shadow: false,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::f32::consts::FRAC_PI_2;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::sampling::AnnulusScatter;
    use crate::scene::color::Color;

    fn unit_box() -> GeometrySpec {
        GeometrySpec::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            width_segments: 1,
            height_segments: 1,
        }
    }

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn group_transform_applies_to_children() {
        let scene = SceneSpec::new().with_node(NodeSpec::Group(
            GroupSpec::new("house")
                .with_transform(TransformSpec::from_position(Vec3::new(0.0, 1.25, 0.0)))
                .with_child(NodeSpec::Mesh(
                    MeshSpec::new("roof", unit_box(), MaterialSpec::new()).with_transform(
                        TransformSpec::from_position(Vec3::new(0.0, 2.25, 0.0)),
                    ),
                )),
        ));

        let mut rng = StdRng::seed_from_u64(1);
        let built = build_scene(&scene, &mut rng).unwrap();
        assert_eq!(built.instances.len(), 1);
        assert!(approx_eq(
            built.instances[0].transform.position,
            Vec3::new(0.0, 3.5, 0.0)
        ));
    }

    #[test]
    fn rotated_parent_rotates_child_offsets() {
        let scene = SceneSpec::new().with_node(NodeSpec::Group(
            GroupSpec::new("pivot")
                .with_transform(
                    TransformSpec::default().with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0)),
                )
                .with_child(NodeSpec::Mesh(
                    MeshSpec::new("arm", unit_box(), MaterialSpec::new())
                        .with_transform(TransformSpec::from_position(Vec3::X)),
                )),
        ));

        let mut rng = StdRng::seed_from_u64(1);
        let built = build_scene(&scene, &mut rng).unwrap();
        assert!(approx_eq(
            built.instances[0].transform.position,
            Vec3::new(0.0, 0.0, -1.0)
        ));
    }

    #[test]
    fn scatter_instances_share_one_resource_pair() {
        let scene = SceneSpec::new().with_node(NodeSpec::Scatter(ScatterSpec::new_with(
            "graves",
            unit_box(),
            MaterialSpec::new(),
            AnnulusScatter::new(30, 4.0, 4.0)
                .with_height_jitter(0.4)
                .with_rotation_jitter(0.2),
        )));

        let mut rng = StdRng::seed_from_u64(9);
        let built = build_scene(&scene, &mut rng).unwrap();

        assert_eq!(built.instances.len(), 30);
        assert_eq!(built.geometries.len(), 1);
        assert_eq!(built.materials.len(), 1);

        let resource_pairs: HashSet<_> = built
            .instances
            .iter()
            .map(|i| (i.geometry, i.material))
            .collect();
        assert_eq!(resource_pairs.len(), 1);

        let names: HashSet<_> = built.instances.iter().map(|i| i.name.clone()).collect();
        assert!(names.contains("graves_0"));
        assert!(names.contains("graves_29"));
    }

    #[test]
    fn invalid_scatter_parameters_fail_the_build() {
        let scene = SceneSpec::new().with_node(NodeSpec::Scatter(ScatterSpec::new_with(
            "graves",
            unit_box(),
            MaterialSpec::new(),
            AnnulusScatter::new(4, 4.0, -1.0),
        )));

        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            build_scene(&scene, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn invalid_fog_fails_the_build() {
        let scene = SceneSpec::new().with_fog(FogSpec::new(Color::WHITE, 10.0, 1.0));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_scene(&scene, &mut rng).is_err());
    }

    #[test]
    fn environment_settings_pass_through() {
        let scene = SceneSpec::new()
            .with_light(LightSpec::Ambient {
                color: Color::from_hex("#86cdff").unwrap(),
                intensity: 0.275,
            })
            .with_fog(FogSpec::new(Color::from_hex("#02343f").unwrap(), 1.0, 13.0));

        let mut rng = StdRng::seed_from_u64(1);
        let built = build_scene(&scene, &mut rng).unwrap();
        assert_eq!(built.lights.len(), 1);
        assert!(built.fog.is_some());
        assert!(built.sky.is_none());
    }

    #[test]
    fn same_seed_builds_identical_instances() {
        let scene = || {
            SceneSpec::new().with_node(NodeSpec::Scatter(ScatterSpec::new_with(
                "graves",
                unit_box(),
                MaterialSpec::new(),
                AnnulusScatter::new(12, 3.5, 4.5).with_rotation_jitter(0.3),
            )))
        };

        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);
        let built_a = build_scene(&scene(), &mut rng_a).unwrap();
        let built_b = build_scene(&scene(), &mut rng_b).unwrap();

        assert_eq!(built_a.instances, built_b.instances);
    }
}
