//! Root-finding solvers for abaco.
//!
//! The solvers live in [`equation`]. Each one borrows a caller-supplied
//! [`ScalarFunction`](abaco_core::ScalarFunction), runs a bounded iteration,
//! and reports its outcome as an [`equation::SolveResult`].

pub mod equation;
