//! # Scalar Operations Module (`ops`)
//!
//! Central hub for the differentiable operations of the engine, grouped by
//! category.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has one entry function (`xxx_op`)
//!   that coerces its operands, computes the forward value eagerly, and
//!   appends a node carrying the matching [`Op`](crate::node::Op) tag.
//!   The corresponding local derivative rule is applied later by the
//!   backward executor in [`crate::autograd`]; the rules live in one fixed
//!   dispatch table there, not on the operation functions.
//! - **Composite operations** (`neg`, `sub`, `div`) are defined through the
//!   primitive ones and inherit their derivative rules, so the backward
//!   table stays minimal.
//! - Both operand positions of every binary operation accept either a
//!   `NodeId` or a raw `f64` (wrapped as a fresh leaf), which covers
//!   scalar-on-the-left composition without reflected variants.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu.

pub mod activation;
pub mod arithmetic;
