//! Common error types for xcolorpick-platform.

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError, ReplyOrIdError};
use x11rb::protocol::xproto::GrabStatus;
use xcolorpick_core::Point;

/// Platform-level errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("cannot open display: {0}")]
    Connect(#[from] ConnectError),
    #[error("display session is closed")]
    Closed,
    #[error("cannot acquire exclusive pointer input ({})", grab_status_reason(.0))]
    GrabDenied(GrabStatus),
    #[error("pixel {0} is outside the screen")]
    OutOfBounds(Point),
    #[error("unsupported pixmap format: {bits_per_pixel} bits per pixel at depth {depth}")]
    UnsupportedPixmapFormat { depth: u8, bits_per_pixel: u8 },
    #[error("image data too short: got {got} bytes, need {need}")]
    ShortImage { got: usize, need: usize },
    #[error("colormap returned no color for pixel value {0:#x}")]
    MissingColor(u32),
    #[error("X11 connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("X11 request failed: {0}")]
    Reply(#[from] ReplyError),
    #[error("X11 request failed: {0}")]
    ReplyOrId(#[from] ReplyOrIdError),
}

/// Result type for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;

fn grab_status_reason(status: &GrabStatus) -> &'static str {
    match *status {
        GrabStatus::ALREADY_GRABBED => "already grabbed by another client",
        GrabStatus::INVALID_TIME => "invalid time",
        GrabStatus::NOT_VIEWABLE => "grab window not viewable",
        GrabStatus::FROZEN => "pointer frozen by another grab",
        _ => "unexpected grab status",
    }
}
