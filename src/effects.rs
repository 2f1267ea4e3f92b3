//! Effect renderers and the contract the host's animation loop drives

use std::time::Instant;

use async_trait::async_trait;

use crate::layer::Layer;
use crate::models::RendererMeta;

mod reaction;
pub use reaction::*;

/// Host device descriptor handed to renderers at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Key matrix width, in columns
    pub width: usize,
    /// Key matrix height, in rows
    pub height: usize,
}

/// Contract between the host's animation loop and an effect
///
/// The host calls [`Renderer::draw`] once per frame. An implementation may
/// suspend once per invocation, typically while waiting for input events; it
/// must not block the host's other cooperative tasks.
#[async_trait]
pub trait Renderer {
    /// Static metadata block for this effect
    fn meta(&self) -> &RendererMeta;

    /// Invoked when the effect is activated
    ///
    /// Returns false when the effect cannot run on this device, in which
    /// case the host never calls [`Renderer::draw`].
    fn init(&mut self, frame: &Frame) -> bool;

    /// Draw the next frame into `layer`
    ///
    /// Returns true if the layer changed and should be composited.
    async fn draw(&mut self, layer: &mut Layer, timestamp: Instant) -> bool;

    /// Invoked when the effect is deactivated
    fn finish(&mut self, _frame: &Frame) {}
}
