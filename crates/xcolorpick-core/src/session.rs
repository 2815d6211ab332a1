//! The pick pipeline: capture a click, sample the pixel, close the session.

use crate::{Color, Point};
use tracing::{debug, info};

/// Operations an open display session provides to the pick pipeline.
///
/// Implemented by `xcolorpick-platform` for X11.
pub trait ScreenSession {
    type Error;

    /// Capture the pointer until a click completes and return its position.
    /// The capture must be released before returning, on success or error.
    fn capture_click(&mut self) -> Result<Point, Self::Error>;

    /// Read the color of the single pixel at `point`.
    fn pixel_color(&mut self, point: Point) -> Result<Color, Self::Error>;

    /// Release the display connection. Calling it again is a no-op.
    fn close(&mut self);
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub point: Point,
    pub color: Color,
}

/// Run one pick on `session` and close it, whatever the outcome.
pub fn pick_color<S>(session: &mut S) -> Result<Pick, S::Error>
where
    S: ScreenSession + ?Sized,
{
    let outcome = session.capture_click().and_then(|point| {
        debug!(%point, "sampling pixel");
        let color = session.pixel_color(point)?;
        Ok(Pick { point, color })
    });

    session.close();

    if let Ok(pick) = &outcome {
        info!(point = %pick.point, color = %pick.color, "picked color");
    }
    outcome
}
