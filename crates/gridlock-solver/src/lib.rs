//! Solving engine for Gridlock: deterministic tactics, the propagation
//! loop, and the recursive guess-and-check search.

pub use self::{propagate::Propagator, search::Solver};

pub mod technique;

mod propagate;
mod search;

#[cfg(test)]
mod testing;
