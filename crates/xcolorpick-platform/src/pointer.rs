//! Exclusive pointer grab on the root window.
//!
//! The grab runs in synchronous pointer mode: the server freezes the pointer
//! after delivering each button event, and [`PointerGrab::next_event`] thaws it
//! for exactly one more event before waiting. The grab (and its crosshair
//! cursor) is released when the guard is dropped, on every exit path.

use crate::{PlatformError, PlatformResult};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};
use x11rb::connection::Connection;
use x11rb::errors::ReplyError;
use x11rb::protocol::xproto::{
    Allow, ButtonPressEvent, ConnectionExt as _, Cursor, EventMask, GrabMode, GrabStatus, Window,
};
use x11rb::protocol::Event;
use x11rb::CURRENT_TIME;
use xcolorpick_core::{ButtonEvent, MouseButton, Point, PointerEvents};

/// `XC_crosshair` in the standard cursor font; its mask glyph follows it.
const XC_CROSSHAIR: u16 = 34;

/// Configuration for acquiring the pointer grab.
#[derive(Debug, Clone)]
pub struct GrabConfig {
    /// Total grab attempts. Only refusals caused by another client's grab
    /// are retried; values below 1 are treated as 1.
    pub attempts: u32,
    /// Pause between attempts.
    pub retry_delay: Duration,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            retry_delay: Duration::from_millis(50),
        }
    }
}

/// Whether a refused grab may succeed if tried again shortly.
fn is_transient(status: GrabStatus) -> bool {
    status == GrabStatus::ALREADY_GRABBED || status == GrabStatus::FROZEN
}

/// Active pointer grab with a crosshair cursor.
pub struct PointerGrab<'c, C: Connection> {
    conn: &'c C,
    root: Window,
    cursor: Cursor,
}

impl<'c, C: Connection> PointerGrab<'c, C> {
    /// Install the crosshair cursor and grab button events on `root`.
    pub fn acquire(conn: &'c C, root: Window, config: &GrabConfig) -> PlatformResult<Self> {
        let cursor = create_crosshair(conn)?;

        if let Err(error) = grab(conn, root, cursor, config) {
            let _ = conn.free_cursor(cursor);
            let _ = conn.flush();
            return Err(error);
        }

        info!(root, "pointer grabbed");
        Ok(Self { conn, root, cursor })
    }

    fn translate(&self, event: &ButtonPressEvent, pressed: bool) -> ButtonEvent {
        if event.event != self.root {
            debug!(window = event.event, "button event for another window");
            return ButtonEvent::Other;
        }

        let point = Point::new(event.event_x.into(), event.event_y.into());
        let button = MouseButton::from_number(event.detail);
        if pressed {
            ButtonEvent::Press { point, button }
        } else {
            ButtonEvent::Release { point, button }
        }
    }
}

impl<C: Connection> PointerEvents for PointerGrab<'_, C> {
    type Error = PlatformError;

    fn next_event(&mut self) -> PlatformResult<ButtonEvent> {
        // Thaw the pointer for exactly one more event.
        self.conn.allow_events(Allow::SYNC_POINTER, CURRENT_TIME)?;
        self.conn.flush()?;

        loop {
            match self.conn.wait_for_event()? {
                Event::ButtonPress(event) => return Ok(self.translate(&event, true)),
                Event::ButtonRelease(event) => return Ok(self.translate(&event, false)),
                Event::Error(error) => return Err(ReplyError::from(error).into()),
                other => debug!(?other, "skipping non-button event"),
            }
        }
    }
}

impl<C: Connection> Drop for PointerGrab<'_, C> {
    fn drop(&mut self) {
        let _ = self.conn.ungrab_pointer(CURRENT_TIME);
        let _ = self.conn.free_cursor(self.cursor);
        match self.conn.flush() {
            Ok(()) => info!("pointer released"),
            Err(error) => warn!(%error, "failed to flush pointer release"),
        }
    }
}

fn create_crosshair<C: Connection>(conn: &C) -> PlatformResult<Cursor> {
    let font = conn.generate_id()?;
    conn.open_font(font, b"cursor")?;

    let cursor = conn.generate_id()?;
    conn.create_glyph_cursor(
        cursor,
        font,
        font,
        XC_CROSSHAIR,
        XC_CROSSHAIR + 1,
        0,
        0,
        0,
        0xffff,
        0xffff,
        0xffff,
    )?;
    conn.close_font(font)?;

    debug!(cursor, "created crosshair cursor");
    Ok(cursor)
}

fn grab<C: Connection>(
    conn: &C,
    root: Window,
    cursor: Cursor,
    config: &GrabConfig,
) -> PlatformResult<()> {
    let attempts = config.attempts.max(1);
    let mut attempt = 1;

    loop {
        let status = conn
            .grab_pointer(
                false,
                root,
                EventMask::BUTTON_PRESS | EventMask::BUTTON_RELEASE,
                GrabMode::SYNC,
                GrabMode::ASYNC,
                root,
                cursor,
                CURRENT_TIME,
            )?
            .reply()?
            .status;

        if status == GrabStatus::SUCCESS {
            return Ok(());
        }
        if !is_transient(status) || attempt >= attempts {
            return Err(PlatformError::GrabDenied(status));
        }

        warn!(attempt, attempts, ?status, "pointer grab refused, retrying");
        thread::sleep(config.retry_delay);
        attempt += 1;
    }
}
