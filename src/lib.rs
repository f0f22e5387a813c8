//! Workspace crate for `nomad-core` and `nomad-cli`.
//!
//! Re-exports `nomad-core` so the demos under `demos/` can be run with
//! `cargo run --example <name>` from the repository root.

pub use nomad_core::*;
