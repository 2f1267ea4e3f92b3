//! `keylight` is a Rust library implementing animated lighting effects for
//! per-key RGB keyboards.
//!
//! The host process owns the animation loop, the device driver and the
//! input-event source; this crate provides the renderer contract driven by
//! the host ([`effects::Renderer`]), the effects themselves, and the
//! supporting primitives: the writable frame buffer ([`layer::Layer`]), the
//! per-frame key-event queue ([`input::InputQueue`]) and the color helpers
//! shared across effects ([`color`]).

pub mod color;
pub mod effects;
pub mod input;
pub mod layer;
pub mod models;
pub mod serde;
pub mod utils;
