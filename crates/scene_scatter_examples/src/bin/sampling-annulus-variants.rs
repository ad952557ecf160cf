use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_scatter::prelude::*;
use scene_scatter_examples::{init_tracing, render_scene_to_png, NodeStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Three graveyard configurations at different densities and jitters.
    let variants = [
        ("sampling-annulus-variants-a.png", [40, 120, 240], 30, 4.0, 4.0, 0.4, 0.2),
        ("sampling-annulus-variants-b.png", [240, 140, 40], 24, 3.5, 4.5, 0.3, 0.3),
        ("sampling-annulus-variants-c.png", [90, 200, 120], 40, 4.0, 5.0, 0.5, 0.15),
    ];

    let mut rng = StdRng::seed_from_u64(42);
    for (out_path, color, count, inner_radius, spread, height_jitter, rotation_jitter) in variants {
        let scatter = AnnulusScatter::new(count, inner_radius, spread)
            .with_height_jitter(height_jitter)
            .with_rotation_jitter(rotation_jitter);
        let scene = SceneSpec::new().with_node(NodeSpec::Scatter(ScatterSpec::new_with(
            "graves",
            grave_geometry(),
            MaterialSpec::new(),
            scatter,
        )));

        let built = build_scene(&scene, &mut rng)?;
        render_variant(&built, color, out_path)?;
    }

    Ok(())
}

fn grave_geometry() -> GeometrySpec {
    GeometrySpec::Box {
        width: 0.6,
        height: 0.8,
        depth: 0.2,
        width_segments: 1,
        height_segments: 1,
    }
}

fn render_variant(built: &BuiltScene, color: [u8; 3], out_path: &str) -> anyhow::Result<()> {
    let mut rc = RenderConfig::new((1000, 1000), 20.0).with_background([26, 26, 26]);
    rc.set_node_style("graves", NodeStyle::Footprint { color });

    render_scene_to_png(built, &rc, out_path)?;
    Ok(())
}
