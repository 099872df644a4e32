//! Example: Generate a spiral sphere mesh
//!
//! Demonstrates the basic usage of the generation pipeline.

use spiral_sphere::*;

fn main() {
    println!("Spiral Sphere Generation Example");
    println!("================================\n");

    let config = SphereConfigBuilder::new()
        .point_count(2_000)
        .radius(1.0)
        .expect("radius is valid")
        .build()
        .expect("configuration is valid");

    println!("Configuration:");
    println!("  Point Count: {}", config.point_count());
    println!("  Radius: {}", config.radius);
    println!("  Fix Seams: {}", config.fix_seams);
    println!();

    println!("Generating sphere...");
    let sphere = SpiralSphere::generate(config).expect("failed to generate sphere");
    let mesh = sphere.mesh();

    println!("Generated {} vertices, {} triangles\n", mesh.vertex_count(), mesh.triangle_count());

    // Repair statistics: every vertex past the original point count is a
    // seam or pole duplicate
    let duplicates = mesh.vertex_count() - config.point_count();
    println!("Statistics:");
    println!("  Seam/pole duplicate vertices: {}", duplicates);

    let u_min = mesh.uvs.iter().map(|uv| uv.x).fold(f32::INFINITY, f32::min);
    let u_max = mesh.uvs.iter().map(|uv| uv.x).fold(f32::NEG_INFINITY, f32::max);
    println!("  u range after repair: [{:.3}, {:.3}]", u_min, u_max);
    println!();

    println!("Sample vertices:");
    for index in (0..mesh.vertex_count()).step_by(mesh.vertex_count() / 5).take(5) {
        let p = mesh.positions[index];
        let uv = mesh.uvs[index];
        println!(
            "  Vertex {}: position=({:.2}, {:.2}, {:.2}), uv=({:.3}, {:.3})",
            index, p.x, p.y, p.z, uv.x, uv.y
        );
    }

    println!("\nGeneration complete!");
}
