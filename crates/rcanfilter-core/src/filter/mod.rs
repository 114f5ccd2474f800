//! CAN acceptance filter synthesis
//!
//! The pipeline: each input [`Range`](types::Range) is decomposed into
//! aligned identifier/mask blocks, sibling blocks are merged back together
//! to a fixed point, subsumed blocks are pruned, and the result is bounded
//! by the physical filter-bank capacity.

pub(crate) mod aggregate;
pub(crate) mod decompose;
pub mod synth;
pub mod types;
