use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec3;
use scene_scatter::prelude::*;
use scene_scatter_examples::{init_tracing, render_scene_to_png, NodeStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let scene = SceneSpec::new()
        .with_light(LightSpec::Ambient {
            color: Color::from_hex("#86cdff")?,
            intensity: 0.275,
        })
        .with_light(LightSpec::Directional {
            color: Color::from_hex("#86cdff")?,
            intensity: 1.0,
            position: Vec3::new(3.0, 2.0, -8.0),
        })
        // Lantern over the door
        .with_light(LightSpec::Point {
            color: Color::from_hex("#ff7d46")?,
            intensity: 5.0,
            position: Vec3::new(0.0, 2.2, 2.4),
        })
        .with_fog(FogSpec::new(Color::from_hex("#04343f")?, 1.0, 13.0))
        .with_sky(
            SkySpec::new()
                .with_turbidity(10.0)
                .with_rayleigh(3.0)
                .with_mie(0.1, 0.95)
                .with_sun_position(Vec3::new(0.3, -0.038, -0.95)),
        )
        .with_node(NodeSpec::Mesh(floor()))
        .with_node(NodeSpec::Group(house()))
        .with_node(NodeSpec::Mesh(door()))
        .with_node(NodeSpec::Scatter(graves()));

    // A fresh graveyard every run.
    let mut rng = rand::rng();
    let built = build_scene(&scene, &mut rng)?;

    let mut rc = RenderConfig::new((1000, 1000), 20.0).with_background([10, 16, 24]);
    rc.set_node_style("floor", NodeStyle::Footprint { color: [24, 36, 40] });
    rc.set_node_style("walls", NodeStyle::Footprint { color: [96, 84, 72] });
    rc.set_node_style("roof", NodeStyle::Circle {
        color: [120, 56, 40],
        radius: 6,
    });
    rc.set_node_style("door", NodeStyle::Circle {
        color: [255, 125, 70],
        radius: 4,
    });
    rc.set_node_style("graves", NodeStyle::Footprint { color: [180, 180, 185] });

    render_scene_to_png(&built, &rc, "scene-haunted-house.png")?;

    Ok(())
}

fn floor() -> MeshSpec {
    let material = MaterialSpec::new()
        .with_alpha_map(TextureSpec::new("floor/alpha.jpg"))
        .with_color_map(
            TextureSpec::new("floor/aerial_rocks_04_1k/aerial_rocks_04_diff_1k.jpg")
                .with_repeat(4.0, 4.0)
                .with_wrap(WrapMode::Repeat)
                .with_srgb(),
        )
        .with_arm_map(
            TextureSpec::new("floor/aerial_rocks_04_1k/aerial_rocks_04_arm_1k.jpg")
                .with_repeat(4.0, 4.0)
                .with_wrap(WrapMode::Repeat),
        )
        .with_normal_map(
            TextureSpec::new("floor/aerial_rocks_04_1k/aerial_rocks_04_nor_gl_1k.png")
                .with_repeat(4.0, 4.0)
                .with_wrap(WrapMode::Repeat),
        )
        .with_displacement(DisplacementSpec::new(
            TextureSpec::new("floor/aerial_rocks_04_1k/aerial_rocks_04_disp_1k.jpg")
                .with_repeat(4.0, 4.0)
                .with_wrap(WrapMode::Repeat),
            0.215,
            0.015,
        ));

    MeshSpec::new(
        "floor",
        GeometrySpec::Plane {
            width: 20.0,
            height: 20.0,
            width_segments: 100,
            height_segments: 100,
        },
        material,
    )
    .with_transform(TransformSpec::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)))
    .with_receive_shadow(true)
}

fn house() -> GroupSpec {
    let wall_material = MaterialSpec::new()
        .with_color_map(
            TextureSpec::new("wall/rock_wall_10_1k/rock_wall_10_diff_1k.jpg")
                .with_repeat(1.5, 1.5)
                .with_wrap(WrapMode::Repeat)
                .with_srgb(),
        )
        .with_arm_map(
            TextureSpec::new("wall/rock_wall_10_1k/rock_wall_10_arm_1k.jpg")
                .with_repeat(1.5, 1.5)
                .with_wrap(WrapMode::Repeat),
        )
        .with_normal_map(
            TextureSpec::new("wall/rock_wall_10_1k/rock_wall_10_nor_gl_1k.jpg")
                .with_repeat(1.5, 1.5)
                .with_wrap(WrapMode::Repeat),
        );

    let walls = MeshSpec::new(
        "walls",
        GeometrySpec::Box {
            width: 4.0,
            height: 2.5,
            depth: 4.0,
            width_segments: 10,
            height_segments: 10,
        },
        wall_material,
    )
    .with_cast_shadow(true)
    .with_receive_shadow(true);

    let roof_material = MaterialSpec::new()
        .with_color_map(
            TextureSpec::new("roof/clay_roof_tiles_02_1k/clay_roof_tiles_02_diff_1k.jpg")
                .with_repeat(4.0, 1.0)
                .with_wrap(WrapMode::Repeat)
                .with_srgb(),
        )
        .with_arm_map(
            TextureSpec::new("roof/clay_roof_tiles_02_1k/clay_roof_tiles_02_arm_1k.jpg")
                .with_repeat(4.0, 1.0)
                .with_wrap(WrapMode::Repeat),
        )
        .with_normal_map(
            TextureSpec::new("roof/clay_roof_tiles_02_1k/clay_roof_tiles_02_nor_gl_1k.jpg")
                .with_repeat(4.0, 1.0)
                .with_wrap(WrapMode::Repeat),
        );

    let roof = MeshSpec::new(
        "roof",
        GeometrySpec::Cone {
            radius: 4.015,
            height: 2.0,
            radial_segments: 4,
        },
        roof_material,
    )
    .with_transform(
        TransformSpec::from_position(Vec3::new(0.0, 2.25, 0.0))
            .with_rotation(Vec3::new(0.0, FRAC_PI_4, 0.0)),
    )
    .with_cast_shadow(true);

    GroupSpec::new("house")
        .with_transform(TransformSpec::from_position(Vec3::new(0.0, 1.25, 0.0)))
        .with_child(NodeSpec::Mesh(walls))
        .with_child(NodeSpec::Mesh(roof))
}

fn door() -> MeshSpec {
    let material = MaterialSpec::new()
        .with_color_map(TextureSpec::new("door/color.jpg").with_srgb())
        .with_alpha_map(TextureSpec::new("door/alpha.jpg"))
        .with_arm_map(TextureSpec::new("door/ambientOcclusion.jpg"))
        .with_normal_map(TextureSpec::new("door/normal.jpg"))
        .with_displacement(DisplacementSpec::new(
            TextureSpec::new("door/height.jpg"),
            0.15,
            -0.04,
        ));

    MeshSpec::new(
        "door",
        GeometrySpec::Plane {
            width: 1.75,
            height: 2.0,
            width_segments: 100,
            height_segments: 100,
        },
        material,
    )
    .with_transform(TransformSpec::from_position(Vec3::new(0.0, 1.15, 2.01)))
}

fn graves() -> ScatterSpec {
    let material = MaterialSpec::new()
        .with_color_map(
            TextureSpec::new("tomb/plastered_stone_wall_1k/plastered_stone_wall_diff_1k.jpg")
                .with_wrap(WrapMode::Repeat)
                .with_srgb(),
        )
        .with_arm_map(
            TextureSpec::new("tomb/plastered_stone_wall_1k/plastered_stone_wall_arm_1k.jpg")
                .with_wrap(WrapMode::Repeat),
        )
        .with_normal_map(
            TextureSpec::new("tomb/plastered_stone_wall_1k/plastered_stone_wall_nor_gl_1k.jpg")
                .with_wrap(WrapMode::Repeat),
        );

    ScatterSpec::new_with(
        "graves",
        GeometrySpec::Box {
            width: 0.6,
            height: 0.8,
            depth: 0.2,
            width_segments: 1,
            height_segments: 1,
        },
        material,
        AnnulusScatter::new(30, 4.0, 4.0)
            .with_height_jitter(0.4)
            .with_rotation_jitter(0.2),
    )
    .with_cast_shadow(true)
}
