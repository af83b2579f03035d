//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the integration
//! tests and the benchmarks can use `blockfall::{core,input,runtime,term,types}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_runtime as runtime;
pub use blockfall_term as term;
pub use blockfall_types as types;
