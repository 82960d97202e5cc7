//! Core traits and helpers for abaco.
//!
//! This crate defines the shared abstractions that the solvers build on:
//!
//! - [`ScalarFunction`] — a callable that maps a real number to a real number
//! - [`Fallible`] — adapts closures that can fail into a [`ScalarFunction`]
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`calculus`] — central-difference derivatives and trapezoidal integrals

pub mod calculus;

mod function;
mod observer;

pub use function::{Fallible, ScalarFunction};
pub use observer::Observer;
