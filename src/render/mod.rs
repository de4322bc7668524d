//! The rendering pass: framebuffer, rasterizer core and pipeline entry point.

pub mod framebuffer;
pub mod pipeline;
pub mod rasterizer;

pub use framebuffer::Framebuffer;
pub use pipeline::render_frame;
