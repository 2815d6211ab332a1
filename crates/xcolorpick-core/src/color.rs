//! Color model for sampled pixels.
//!
//! The display reports every channel as a native 16-bit magnitude.
//! 8-bit values are derived on demand; only the raw output keeps full precision.

use std::fmt;

/// RGB color as reported by the display's colormap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

/// Scale a native 16-bit channel magnitude down to 8 bits (truncating).
#[inline]
pub fn scale_channel(native: u16) -> u8 {
    (native / 256) as u8
}

impl Color {
    pub fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    pub fn r(&self) -> u8 {
        scale_channel(self.red)
    }

    pub fn g(&self) -> u8 {
        scale_channel(self.green)
    }

    pub fn b(&self) -> u8 {
        scale_channel(self.blue)
    }

    /// 8-bit channels in red, green, blue order.
    pub fn rgb8(&self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Convert to hex string (e.g., "#12B8DE").
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
    }

    /// Pack the unscaled magnitudes into one 48-bit value: red in bits 32..48,
    /// green in 16..32, blue in 0..16.
    pub fn to_raw(&self) -> u64 {
        (u64::from(self.red) << 32) | (u64::from(self.green) << 16) | u64::from(self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
