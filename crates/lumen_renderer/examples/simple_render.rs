//! Simple ray tracer example.
//!
//! Renders a mirror, a glass ball and a matte ball on a ground sphere and
//! saves to PPM format.

use lumen_renderer::{render, Camera, Color, DVec3, Material, PointLight, RenderConfig, Scene, Shape};
use std::fs::File;
use std::io::BufWriter;

fn main() {
    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene();
    let camera = Camera::new().with_position(
        DVec3::new(0.0, 1.0, -1.0), // eye
        DVec3::new(0.0, 0.0, 5.0),  // target
        DVec3::new(0.0, 1.0, 0.0),  // vup
    );

    let config = RenderConfig {
        samples_per_pixel: 16,
        max_bounces: 2,
        ..RenderConfig::default()
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        config.width, config.height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let image = render(&scene, &camera, &config).expect("Render failed");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    let file = File::create(filename).expect("Failed to create output file");
    image.write_ppm(BufWriter::new(file)).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    Scene::new()
        // Ground
        .with_shape(Shape::sphere(
            DVec3::new(0.0, -100.0, 20.0),
            100.0,
            Material::lambert(Color::new(120.0, 120.0, 120.0), 0.8),
        ))
        .with_shape(Shape::sphere(
            DVec3::new(0.0, 0.0, 6.0),
            1.0,
            Material::reflective(Color::new(180.0, 160.0, 140.0), 0.8, 0.0),
        ))
        .with_shape(Shape::sphere(
            DVec3::new(-2.2, 0.0, 5.0),
            1.0,
            Material::dielectric(Color::new(200.0, 200.0, 200.0), 1.5, 0.7),
        ))
        .with_shape(Shape::sphere(
            DVec3::new(2.2, 0.0, 5.0),
            1.0,
            Material::lambert(Color::new(100.0, 50.0, 25.0), 1.0),
        ))
        .with_light(PointLight::new(DVec3::new(3.0, 4.0, 2.0), Color::splat(255.0)))
        .with_light(PointLight::new(DVec3::new(-4.0, 3.0, 1.0), Color::splat(255.0)))
}
