// demos/triangle_skeleton.rs
//! Equilateral triangle: edges, vertices and straight-skeleton bisectors,
//! printed as the instruction list a renderer would consume.
//!
//! RUST_LOG=pga_engine=debug cargo run --example triangle_skeleton

use pga_engine::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pga = Pga2::new();
    let triangle = Polygon::new(&pga, &[(1.0, 1.7320508075688772), (0.0, 0.0), (2.0, 0.0)])?;
    let scene = Scene::straight_skeleton(&triangle, GraphOptions::default());

    for instruction in scene.instructions() {
        match instruction {
            DrawInstruction::SetStyle(color) => println!("style  {}", color),
            DrawInstruction::Edge(a, b) => println!(
                "edge   {:?} -> {:?}",
                pga.point_coordinates(a),
                pga.point_coordinates(b)
            ),
            DrawInstruction::LabeledPoint(entity, label) => {
                let algebra = pga.algebra();
                if algebra.grades_present(entity) == [1] {
                    println!("line   {} = {:?}", label, pga.line_coefficients(entity));
                } else {
                    println!("point  {} = {:?}", label, pga.point_coordinates(entity));
                }
            }
        }
    }

    // allow a tiny epsilon
    const EPS: f64 = 1e-9;
    let (a, b, c) = pga.line_coefficients(&triangle.bisectors()[0]);
    assert!((a + 1.0).abs() < EPS && b.abs() < EPS && (c - 1.0).abs() < EPS);
    println!("✔ apex bisector is x = 1");

    println!("{}", scene.to_json()?);
    Ok(())
}
