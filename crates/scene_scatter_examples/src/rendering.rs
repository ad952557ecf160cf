//! Shared helpers for the example binaries: tracing setup and a schematic
//! top-down PNG renderer for built scenes.
use image::{Rgb, RgbImage};
use scene_scatter::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How to draw instances of a node in the top-down plot.
#[derive(Debug, Clone, Copy)]
pub enum NodeStyle {
    /// Fixed-radius dot at the instance position.
    Circle { color: [u8; 3], radius: i32 },
    /// Axis-aligned rectangle matching the geometry's ground footprint.
    Footprint { color: [u8; 3] },
}

/// Configuration for rendering a built scene to a PNG.
pub struct RenderConfig {
    /// Output image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// Side length of the square world region centered on the origin.
    pub world_extent: f32,
    /// Background color.
    pub background: [u8; 3],
    styles: Vec<(String, NodeStyle)>,
    default_style: NodeStyle,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), world_extent: f32) -> Self {
        Self {
            image_size,
            world_extent,
            background: [26, 26, 26],
            styles: Vec::new(),
            default_style: NodeStyle::Circle {
                color: [200, 200, 200],
                radius: 2,
            },
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Style instances whose name starts with `prefix`; the longest matching
    /// prefix wins.
    pub fn set_node_style(&mut self, prefix: &str, style: NodeStyle) {
        self.styles.push((prefix.to_owned(), style));
    }

    fn style_for(&self, name: &str) -> NodeStyle {
        self.styles
            .iter()
            .filter(|(prefix, _)| name.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, style)| *style)
            .unwrap_or(self.default_style)
    }
}

/// Render a built scene as a top-down orthographic footprint plot.
pub fn render_scene_to_png(
    scene: &BuiltScene,
    config: &RenderConfig,
    out_path: &str,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    for instance in &scene.instances {
        let position = instance.transform.position;
        let (cx, cy) = world_to_pixel(position.x, position.z, config);

        match config.style_for(&instance.name) {
            NodeStyle::Circle { color, radius } => {
                draw_disc(&mut img, cx, cy, radius, color);
            }
            NodeStyle::Footprint { color } => {
                let (fx, fz) = ground_footprint(&scene.geometries[instance.geometry]);
                let scale = instance.transform.scale;
                let half_w = to_pixels(fx * scale.x, config) / 2;
                let half_h = to_pixels(fz * scale.z, config) / 2;
                fill_rect(&mut img, cx, cy, half_w.max(1), half_h.max(1), color);
            }
        }
    }

    img.save(out_path)?;
    Ok(())
}

/// X/Z extent a geometry covers on the ground plane.
fn ground_footprint(geometry: &GeometrySpec) -> (f32, f32) {
    match *geometry {
        GeometrySpec::Box { width, depth, .. } => (width, depth),
        GeometrySpec::Cone { radius, .. } => (radius * 2.0, radius * 2.0),
        // Planes are drawn as authored; the reference scenes lay them flat.
        GeometrySpec::Plane { width, height, .. } => (width, height),
        GeometrySpec::Sphere { radius, .. } => (radius * 2.0, radius * 2.0),
    }
}

fn world_to_pixel(x: f32, z: f32, config: &RenderConfig) -> (i32, i32) {
    let (width, height) = config.image_size;
    let px = (x / config.world_extent + 0.5) * width as f32;
    let py = (z / config.world_extent + 0.5) * height as f32;
    (px as i32, py as i32)
}

fn to_pixels(length: f32, config: &RenderConfig) -> i32 {
    let (width, _) = config.image_size;
    (length / config.world_extent * width as f32) as i32
}

fn draw_disc(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: [u8; 3]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_pixel_checked(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn fill_rect(img: &mut RgbImage, cx: i32, cy: i32, half_w: i32, half_h: i32, color: [u8; 3]) {
    for y in (cy - half_h)..=(cy + half_h) {
        for x in (cx - half_w)..=(cx + half_w) {
            put_pixel_checked(img, x, y, color);
        }
    }
}

fn put_pixel_checked(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}
