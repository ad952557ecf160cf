use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_scatter::prelude::*;
use scene_scatter_examples::{init_tracing, render_scene_to_png, NodeStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A bare annulus scatter: a ring of markers around the origin.
    // Increase count to adjust density.
    let count = 400usize;
    let scene = SceneSpec::new().with_node(NodeSpec::Scatter(ScatterSpec::new_with(
        "markers",
        marker_geometry(),
        MaterialSpec::new(),
        AnnulusScatter::new(count, 4.0, 4.0),
    )));

    let mut rng = StdRng::seed_from_u64(2025);
    let built = build_scene(&scene, &mut rng)?;

    let mut rc = RenderConfig::new((1000, 1000), 20.0).with_background([26, 26, 26]);
    rc.set_node_style(
        "markers",
        NodeStyle::Circle {
            color: [235, 235, 235],
            radius: 2,
        },
    );

    let out = "sampling-annulus-basic.png";
    render_scene_to_png(&built, &rc, out)?;

    Ok(())
}

fn marker_geometry() -> GeometrySpec {
    GeometrySpec::Box {
        width: 0.2,
        height: 0.2,
        depth: 0.2,
        width_segments: 1,
        height_segments: 1,
    }
}
