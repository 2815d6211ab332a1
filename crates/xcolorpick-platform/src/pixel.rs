//! Single-pixel sampling from the root window.
//!
//! Reads one pixel with `GetImage` (ZPixmap, all planes), decodes its native
//! value according to the server's pixmap format and resolves it through the
//! colormap with `QueryColors`.

use crate::{PlatformError, PlatformResult};
use tracing::debug;
use x11rb::connection::Connection;
use x11rb::errors::ReplyError;
use x11rb::protocol::xproto::{Colormap, ConnectionExt as _, ImageFormat, ImageOrder, Window};
use x11rb::protocol::ErrorKind;
use xcolorpick_core::{Color, Point};

/// Get the color of the pixel at `point` on `root`.
pub fn sample_pixel<C: Connection>(
    conn: &C,
    root: Window,
    colormap: Colormap,
    point: Point,
) -> PlatformResult<Color> {
    let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) else {
        return Err(PlatformError::OutOfBounds(point));
    };

    let image = conn
        .get_image(ImageFormat::Z_PIXMAP, root, x, y, 1, 1, !0)?
        .reply()
        .map_err(|error| match error {
            ReplyError::X11Error(ref e) if e.error_kind == ErrorKind::Match => {
                PlatformError::OutOfBounds(point)
            }
            other => other.into(),
        })?;

    let setup = conn.setup();
    let bits_per_pixel = setup
        .pixmap_formats
        .iter()
        .find(|format| format.depth == image.depth)
        .map(|format| format.bits_per_pixel)
        .ok_or(PlatformError::UnsupportedPixmapFormat {
            depth: image.depth,
            bits_per_pixel: 0,
        })?;

    let pixel = decode_pixel(
        &image.data,
        image.depth,
        bits_per_pixel,
        setup.image_byte_order,
        setup.bitmap_format_bit_order,
    )?;
    debug!(%point, depth = image.depth, bits_per_pixel, pixel, "read native pixel");

    let reply = conn.query_colors(colormap, &[pixel])?.reply()?;
    let rgb = reply
        .colors
        .first()
        .ok_or(PlatformError::MissingColor(pixel))?;

    Ok(Color::new(rgb.red, rgb.green, rgb.blue))
}

/// Extract the first pixel value from ZPixmap image data.
///
/// Multi-byte pixels follow `byte_order`, as do 4-bit pixels (nibble order);
/// 1-bit pixels follow `bit_order`. The result is masked to `depth` bits.
pub fn decode_pixel(
    data: &[u8],
    depth: u8,
    bits_per_pixel: u8,
    byte_order: ImageOrder,
    bit_order: ImageOrder,
) -> PlatformResult<u32> {
    let unsupported = PlatformError::UnsupportedPixmapFormat {
        depth,
        bits_per_pixel,
    };

    let raw = match bits_per_pixel {
        8 | 16 | 24 | 32 => {
            let need = usize::from(bits_per_pixel / 8);
            let bytes = data.get(..need).ok_or(PlatformError::ShortImage {
                got: data.len(),
                need,
            })?;
            if byte_order == ImageOrder::LSB_FIRST {
                bytes
                    .iter()
                    .rev()
                    .fold(0u32, |acc, b| (acc << 8) | u32::from(*b))
            } else {
                bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b))
            }
        }
        1 | 4 => {
            let byte = *data
                .first()
                .ok_or(PlatformError::ShortImage { got: 0, need: 1 })?;
            let order = if bits_per_pixel == 1 { bit_order } else { byte_order };
            let mask = (1u8 << bits_per_pixel) - 1;
            let value = if order == ImageOrder::LSB_FIRST {
                byte & mask
            } else {
                (byte >> (8 - bits_per_pixel)) & mask
            };
            u32::from(value)
        }
        _ => return Err(unsupported),
    };

    if depth == 0 || depth > 32 {
        return Err(unsupported);
    }
    Ok(if depth == 32 {
        raw
    } else {
        raw & ((1u32 << depth) - 1)
    })
}
