//! Platform abstraction layer
//!
//! Browser bindings for the simulation core. Rendering and DOM wiring live
//! in the host page; this layer only forwards intents and exposes snapshots.

#[cfg(target_arch = "wasm32")]
pub mod web;
