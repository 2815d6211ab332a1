//! Click capture state machine.
//!
//! Consumes pointer button events one at a time and resolves them into the
//! coordinate of a single completed click: the first press is recorded, and
//! the capture completes once every button held since then is released.
//!
//! The event source is abstracted behind [`PointerEvents`] so the state machine
//! can be driven by a live pointer grab or by a scripted sequence in tests.

use crate::Point;
use tracing::{debug, info};

/// Pointer button, numbered the way the display server numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Unknown(u8),
}

impl MouseButton {
    /// Map a 1-based button number (1 = left, 2 = middle, 3 = right).
    pub fn from_number(number: u8) -> Self {
        match number {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            n => MouseButton::Unknown(n),
        }
    }
}

/// Events delivered while the pointer is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Pointer button pressed at position.
    Press { point: Point, button: MouseButton },
    /// Pointer button released at position.
    Release { point: Point, button: MouseButton },
    /// Anything else the source delivered; ignored.
    Other,
}

/// Source of button events for the capture loop.
pub trait PointerEvents {
    type Error;

    /// Block until the next event is available.
    fn next_event(&mut self) -> Result<ButtonEvent, Self::Error>;
}

/// Progress reported after each handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStatus {
    /// Keep reading events.
    Pending,
    /// Click resolved.
    Complete(Point),
}

/// State of one click capture.
#[derive(Debug, Clone, Default)]
pub struct ClickCapture {
    point: Option<Point>,
    buttons_down: u32,
    events_seen: usize,
}

impl ClickCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinate of the first press, once seen.
    pub fn point(&self) -> Option<Point> {
        self.point
    }

    /// Number of buttons currently held.
    pub fn buttons_down(&self) -> u32 {
        self.buttons_down
    }

    /// Number of events handled so far.
    pub fn events_seen(&self) -> usize {
        self.events_seen
    }

    pub fn is_complete(&self) -> bool {
        self.point.is_some() && self.buttons_down == 0
    }

    /// Apply one event.
    pub fn handle(&mut self, event: &ButtonEvent) -> CaptureStatus {
        self.events_seen += 1;

        match *event {
            ButtonEvent::Press { point, button } => {
                self.buttons_down += 1;
                if self.point.is_none() {
                    info!(%point, ?button, "click position captured");
                    self.point = Some(point);
                }
            }
            ButtonEvent::Release { button, .. } => {
                // Buttons held before the capture started release without a press.
                if self.buttons_down > 0 {
                    self.buttons_down -= 1;
                } else {
                    debug!(?button, "ignoring release without matching press");
                }
            }
            ButtonEvent::Other => {}
        }

        debug!(
            ?event,
            buttons_down = self.buttons_down,
            captured = self.point.is_some(),
            "handled pointer event"
        );

        match self.point {
            Some(point) if self.buttons_down == 0 => CaptureStatus::Complete(point),
            _ => CaptureStatus::Pending,
        }
    }
}

/// Drive `events` until a click completes and return its coordinate.
///
/// Errors from the source are returned as is; the caller owns releasing
/// whatever resource backs the source.
pub fn capture_click<P>(events: &mut P) -> Result<Point, P::Error>
where
    P: PointerEvents + ?Sized,
{
    let mut capture = ClickCapture::new();
    loop {
        let event = events.next_event()?;
        if let CaptureStatus::Complete(point) = capture.handle(&event) {
            debug!(events = capture.events_seen(), %point, "click completed");
            return Ok(point);
        }
    }
}
