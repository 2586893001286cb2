//! Builds the crease pattern of a preliminary base and prints its faces.
//!
//! Usage:
//! ```text
//! cargo run --example preliminary_base
//! RUST_LOG=creasegraph=trace cargo run --example preliminary_base
//! ```

use creasegraph::math::Point2;
use creasegraph::{CreasePattern, FoldKind};

const SIZE: f64 = 400.0;

fn main() -> Result<(), creasegraph::CreaseError> {
    // Default: WARN for everything, DEBUG for creasegraph.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("creasegraph=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut pattern = CreasePattern::new();
    pattern.add_rectangle(Point2::new(0.0, 0.0), SIZE, SIZE)?;

    // Diagonals fold as valleys, the book folds as mountains.
    let half = SIZE / 2.0;
    let lines = [
        ((0.0, 0.0), (SIZE, SIZE), "#0000ff"),
        ((0.0, SIZE), (SIZE, 0.0), "#0000ff"),
        ((half, 0.0), (half, SIZE), "#ff0000"),
        ((0.0, half), (SIZE, half), "#ff0000"),
    ];
    for ((x1, y1), (x2, y2), stroke) in lines {
        pattern.add_line(Point2::new(x1, y1), Point2::new(x2, y2), stroke, 1.0)?;
    }

    let graph = pattern.build()?;

    println!("vertices: {}", graph.vertices().len());
    for v in graph.vertices() {
        println!("  {v}");
    }
    let folds = graph.edges().iter().filter(|e| e.kind.is_fold()).count();
    println!("edges: {} ({folds} folds)", graph.edges().len());
    for kind in FoldKind::ALL {
        let count = graph.edges_of_kind(kind).count();
        if count > 0 {
            println!("  {kind}: {count}");
        }
    }
    println!("faces: {}", graph.faces().len());
    for (i, face) in graph.faces().iter().enumerate() {
        println!("  face {i}: {face} area {:.1}", face.area());
    }
    Ok(())
}
