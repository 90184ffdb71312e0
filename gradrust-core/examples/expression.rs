//! Builds the reference expression from the engine's source material and
//! prints the forward value and the input gradients.
//!
//! Run with: `cargo run --example expression`

use gradrust_core::{GradRustError, Graph};

fn main() -> Result<(), GradRustError> {
    let mut graph = Graph::new();

    let a = graph.leaf(-4.0);
    let b = graph.leaf(2.0);

    let mut c = graph.add(a, b)?;
    let ab = graph.mul(a, b)?;
    let b3 = graph.pow(b, 3.0)?;
    let mut d = graph.add(ab, b3)?;

    // c = c + (c + 1); c = c + (1 + c + (-a))
    let c1 = graph.add(c, 1.0)?;
    c = graph.add(c, c1)?;
    let na = graph.neg(a)?;
    let inner = graph.add(1.0, c)?;
    let inner = graph.add(inner, na)?;
    c = graph.add(c, inner)?;

    // d = d + (d * 2 + relu(b + a)); d = d + (3 * d + relu(b - a))
    let d2 = graph.mul(d, 2.0)?;
    let ba = graph.add(b, a)?;
    let r1 = graph.relu(ba)?;
    let t = graph.add(d2, r1)?;
    d = graph.add(d, t)?;
    let d3 = graph.mul(3.0, d)?;
    let bma = graph.sub(b, a)?;
    let r2 = graph.relu(bma)?;
    let t = graph.add(d3, r2)?;
    d = graph.add(d, t)?;

    let e = graph.sub(c, d)?;
    let f = graph.pow(e, 2.0)?;
    let half = graph.div(f, 2.0)?;
    let tail = graph.div(10.0, f)?;
    let g = graph.add(half, tail)?;

    println!("g.data = {:.4}", graph.data(g)); // 24.7041

    graph.backward(g)?;

    println!("a.grad = {:.4}", graph.grad(a)); // 138.8338, dg/da
    println!("b.grad = {:.4}", graph.grad(b)); // 645.5773, dg/db
    println!("graph holds {} nodes", graph.len());

    Ok(())
}
