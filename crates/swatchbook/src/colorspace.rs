//! Conversion between 8-bit RGB and its textual representations.
//!
//! Every conversion is a pure function of the RGB triple: the same input
//! always produces the same hex string, HSL triple, and CMYK quadruple.
//! All 2^24 inputs are valid; nothing here can fail except hex *parsing*.
//!
//! # Example
//!
//! ```rust
//! use swatchbook::{Cmyk, Hsl, Rgb};
//!
//! let orange = Rgb::from_hex("#ff6b35").unwrap();
//! assert_eq!(orange, Rgb(255, 107, 53));
//! assert_eq!(orange.to_hex(), "#ff6b35");
//! assert_eq!(Rgb(255, 0, 0).to_hsl(), Hsl(0, 100, 50));
//! assert_eq!(Rgb(255, 0, 0).to_cmyk(), Cmyk(0, 100, 100, 0));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// An 8-bit RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Hue in degrees, saturation and luminance in percent, all rounded to the
/// nearest integer.
///
/// Hue is normalized into `[0, 360)` before rounding, so inputs just below
/// the wraparound (e.g. `rgb(255, 0, 1)`) round up to 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl(pub u16, pub u8, pub u8);

/// Cyan, magenta, yellow, and key, each a rounded integer percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cmyk(pub u8, pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a `#rrggbb` or `#rgb` hex string (leading `#` optional,
    /// case insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || PaletteError::InvalidHex(s.to_string());
        match hex.len() {
            // 3-digit shorthand: #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| invalid())? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| invalid())? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| invalid())? * 17;
                Ok(Rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Rgb(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Formats the color as `#rrggbb` with lowercase hex digits.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// The per-channel complement, used to pick a readable label color over
    /// a swatch of this color.
    #[must_use]
    pub fn inverse(self) -> Rgb {
        Rgb(255 - self.0, 255 - self.1, 255 - self.2)
    }

    /// Converts to HSL with integer degree/percent components.
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let luminance = (max + min) / 2.0;

        let mut hue = 0.0;
        let mut saturation = 0.0;
        if delta != 0.0 {
            // For 8-bit inputs the denominator only vanishes when delta is
            // zero, which the guard above excludes.
            saturation = delta / (1.0 - (2.0 * luminance - 1.0).abs());
            hue = if max == r {
                60.0 * ((g - b) / delta).rem_euclid(6.0)
            } else if max == g {
                60.0 * ((b - r) / delta + 2.0)
            } else {
                60.0 * ((r - g) / delta + 4.0)
            };
            if hue < 0.0 {
                hue += 360.0;
            }
        }

        Hsl(
            hue.round() as u16,
            (saturation * 100.0).round() as u8,
            (luminance * 100.0).round() as u8,
        )
    }

    /// Converts to CMYK with integer percent components.
    ///
    /// Pure black is special-cased to `(0, 0, 0, 100)`.
    pub fn to_cmyk(self) -> Cmyk {
        let (r, g, b) = self.unit_channels();
        let k = 1.0 - r.max(g).max(b);
        if k == 1.0 {
            return Cmyk(0, 0, 0, 100);
        }
        let c = (1.0 - r - k) / (1.0 - k);
        let m = (1.0 - g - k) / (1.0 - k);
        let y = (1.0 - b - k) / (1.0 - k);
        Cmyk(
            (c * 100.0).round() as u8,
            (m * 100.0).round() as u8,
            (y * 100.0).round() as u8,
            (k * 100.0).round() as u8,
        )
    }

    fn unit_channels(self) -> (f64, f64, f64) {
        (
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.0, self.1, self.2)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.0, self.1, self.2, self.3)
    }
}
