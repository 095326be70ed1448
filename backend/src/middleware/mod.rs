//! Cross-cutting request middleware.

pub mod trace;

pub use trace::Trace;
