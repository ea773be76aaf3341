//! Observability for Lumen.
//! `tracing` crate with `EnvFilter`, configured through `LUMEN_LOG`.

pub mod setup;

pub use setup::init_tracing;
