//! Observability for rxlint.
//! `tracing` crate with `EnvFilter`, configured through `RXLINT_LOG`.

pub mod setup;

pub use setup::init_tracing;
