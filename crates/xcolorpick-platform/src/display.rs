//! Connection to the X server for the duration of one pick.

use crate::pixel::sample_pixel;
use crate::pointer::{GrabConfig, PointerGrab};
use crate::{PlatformError, PlatformResult};
use tracing::{debug, info, warn};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Colormap, Window};
use x11rb::rust_connection::RustConnection;
use xcolorpick_core::{capture_click, Color, Point, ScreenSession};

/// An open display plus its default screen's root window and colormap.
///
/// Closing is idempotent and also happens on drop.
pub struct DisplaySession {
    conn: Option<RustConnection>,
    root: Window,
    colormap: Colormap,
    grab_config: GrabConfig,
}

impl DisplaySession {
    /// Connect to the display named by `$DISPLAY`.
    pub fn open(grab_config: GrabConfig) -> PlatformResult<Self> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let screen = &conn.setup().roots[screen_num];
        let (root, colormap) = (screen.root, screen.default_colormap);
        let (width, height) = (screen.width_in_pixels, screen.height_in_pixels);

        info!(screen_num, root, width, height, "display session opened");
        Ok(Self {
            conn: Some(conn),
            root,
            colormap,
            grab_config,
        })
    }

    fn connection(&self) -> PlatformResult<&RustConnection> {
        self.conn.as_ref().ok_or(PlatformError::Closed)
    }

    /// Release the connection. No-op when already closed.
    pub fn close(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };
        if let Err(error) = conn.flush() {
            warn!(%error, "failed to flush display connection");
        }
        drop(conn);
        info!("display session closed");
    }
}

impl ScreenSession for DisplaySession {
    type Error = PlatformError;

    fn capture_click(&mut self) -> PlatformResult<Point> {
        let conn = self.connection()?;
        let mut grab = PointerGrab::acquire(conn, self.root, &self.grab_config)?;
        // `grab` is dropped (and the pointer released) on both outcomes.
        capture_click(&mut grab)
    }

    fn pixel_color(&mut self, point: Point) -> PlatformResult<Color> {
        let conn = self.connection()?;
        debug!(%point, "sampling root window");
        sample_pixel(conn, self.root, self.colormap, point)
    }

    fn close(&mut self) {
        DisplaySession::close(self);
    }
}

impl Drop for DisplaySession {
    fn drop(&mut self) {
        self.close();
    }
}
