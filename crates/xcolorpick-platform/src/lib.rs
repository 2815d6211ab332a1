//! xcolorpick-platform: X11 I/O boundary for xcolorpick.
//!
//! This crate provides:
//! - The display session (connection, default screen, root window, colormap)
//! - An exclusive, synchronous pointer grab with a crosshair cursor
//! - Single-pixel sampling and colormap lookup
//!
//! ## Module Structure
//!
//! - `error` - Common error types
//! - `display` - Display session, implements `xcolorpick_core::ScreenSession`
//! - `pointer` - Pointer grab, implements `xcolorpick_core::PointerEvents`
//! - `pixel` - Pixel reading and native pixel decoding

mod display;
mod error;
mod pixel;
mod pointer;

pub use error::{PlatformError, PlatformResult};

pub use display::DisplaySession;

pub use pixel::{decode_pixel, sample_pixel};

pub use pointer::{GrabConfig, PointerGrab};
