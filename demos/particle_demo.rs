#![allow(clippy::cast_precision_loss)]
//! Particle visualization demonstration against the in-memory host.
//!
//! This demo shows:
//! - Spawning spheres and cubes with initial positions
//! - Idempotent adoption of existing nodes
//! - Moving particles through the proxy accessors
//! - Driving a transform via the full matrix
//! - Dumping the host scene as JSON
//!
//! Run with: cargo run --example `particle_demo`

use partvis::*;

/// Ring of positions in the XZ plane at the given height.
fn ring_positions(count: usize, radius: f32, height: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let theta = 2.0 * std::f32::consts::PI * i as f32 / count as f32;
            Vec3::new(radius * theta.cos(), height, radius * theta.sin())
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let scene = MockScene::new();

    // Spawn a ring of spheres with a cube marking the center.
    let mut particles = Vec::new();
    for (i, position) in ring_positions(8, 3.0, 1.0).into_iter().enumerate() {
        let ball = ShapeBuilder::sphere(format!("particle{i}"))
            .with_size(0.25)
            .with_position(position)
            .spawn(&scene)?;
        particles.push(ball);
    }
    let mut center = ShapeBuilder::cube("center")
        .with_size(0.5)
        .with_rotation(Vec3::new(0.0, 45.0, 0.0))
        .spawn(&scene)?;

    // Spawning an existing name adopts the node instead of duplicating it.
    let adopted = ShapeBuilder::cube("center").spawn(&scene)?;
    println!(
        "scene holds {} nodes after adopting '{}'",
        scene.len(),
        adopted.name()
    );

    // Nudge every particle upward through the proxy.
    for ball in &mut particles {
        let position = ball.position()?;
        ball.set_position(position + Vec3::Y)?;
    }

    // Drive the center cube via its full matrix and read components back.
    let spin = Quat::from_rotation_y(std::f32::consts::FRAC_PI_4);
    center.set_matrix(Mat4::from_rotation_translation(spin, Vec3::Y * 2.0))?;
    println!(
        "center moved to {:?}, rotation {:?} degrees",
        center.position()?,
        center.rotation()?
    );

    println!("{}", scene.to_json()?);
    Ok(())
}
