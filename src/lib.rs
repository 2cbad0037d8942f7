//! # lsystem-sketch
//!
//! A small teaching crate for two classic generative models: string-rewriting
//! L-systems interpreted as planar turtle graphics, and a 1-D binary cellular
//! automaton evolved under a two-neighbor XOR rule.
//!
//! It decouples the *genotype* (the rewritten word) from the *phenotype* (the
//! rendered drawing), producing a [`Sketch`] of plain drawing primitives that
//! can be ingested by plotting backends, game engines, or notebook renderers.
//! The automaton side hands over a [`CellGrid`] of binary rows the same way;
//! no rendering happens in this crate.

pub mod automaton;
pub mod catalog;
pub mod error;
pub mod interpreter;
pub mod rewrite;
pub mod sketch;
pub mod turtle;

pub use automaton::*;
pub use catalog::*;
pub use error::*;
pub use interpreter::*;
pub use rewrite::*;
pub use sketch::*;
pub use turtle::*;
