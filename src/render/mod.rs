// src/render/mod.rs
pub mod colormap;
pub mod preview;

pub use colormap::{evaluate, ndvi_to_t, Rgb};
pub use preview::{render_preview, write_preview_png};
