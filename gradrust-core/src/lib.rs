//! # gradrust-core
//!
//! Scalar reverse-mode automatic differentiation. A [`Graph`] arena
//! records every arithmetic operation as a node in a DAG; calling
//! [`Graph::backward`] on a root replays the trace in reverse and
//! accumulates the exact derivative of the root with respect to every
//! upstream node.
//!
//! The engine works on individual `f64` scalars only — tensors and
//! batching belong to calling code, as do any neural-network abstractions
//! built on top.
//!
//! ```
//! use gradrust_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let c = graph.leaf(10.0);
//! let prod = graph.mul(a, b)?;
//! let d = graph.add(prod, c)?;
//! assert_eq!(graph.data(d), 4.0);
//!
//! graph.backward(d)?;
//! assert_eq!(graph.grad(a), -3.0);
//! assert_eq!(graph.grad(b), 2.0);
//! assert_eq!(graph.grad(c), 1.0);
//! # Ok::<(), gradrust_core::GradRustError>(())
//! ```

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod graph;
pub mod node;
pub mod ops;

// Re-export the core types so they are reachable directly via
// `gradrust_core::Graph` etc.
pub use graph::{Graph, Operand};
pub use node::{Node, NodeId, Op};

pub mod error;
pub use error::GradRustError;
