//! xcolorpick-core: click capture, color model and output formats.
//!
//! Design goal: keep this crate display-agnostic.
//! X11 I/O (connection, pointer grab, pixel sampling) lives in `xcolorpick-platform`,
//! which implements the [`PointerEvents`] and [`ScreenSession`] traits defined here.

mod capture;
mod color;
mod error;
mod format;
mod session;

pub use capture::{
    capture_click, ButtonEvent, CaptureStatus, ClickCapture, MouseButton, PointerEvents,
};
pub use color::{scale_channel, Color};
pub use error::{CoreError, CoreResult};
pub use format::{ChannelStyle, OutputFormat, Template};
pub use session::{pick_color, Pick, ScreenSession};

use std::fmt;

/// A position in root-window coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(12, -3).to_string(), "(12, -3)");
    }
}
