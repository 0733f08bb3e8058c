//! A recorded color sample with every representation pre-computed.

use crate::colorspace::{Cmyk, Hsl, Rgb};

/// Which textual representation of a sample to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
}

/// One recorded pixel color with all derived formats.
///
/// The derived fields are produced by the conversion routines in
/// [`crate::colorspace`] at capture time, or restored verbatim from a
/// persisted document; nothing else can construct a sample, so the formats
/// cannot drift from `rgb` once the sample exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSample {
    rgb: Rgb,
    hex: String,
    hsl: Hsl,
    cmyk: Cmyk,
}

impl ColorSample {
    /// Captures a sample from a raw RGB triple, deriving every format.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            hsl: rgb.to_hsl(),
            cmyk: rgb.to_cmyk(),
        }
    }

    /// Reassembles a sample from previously persisted representations.
    ///
    /// The stored formats are taken at face value so a saved palette reads
    /// back identically even if the conversion routines later change.
    pub(crate) fn from_parts(hex: String, rgb: Rgb, hsl: Hsl, cmyk: Cmyk) -> Self {
        Self {
            rgb,
            hex,
            hsl,
            cmyk,
        }
    }

    /// The `#rrggbb` representation.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The raw RGB triple this sample was captured from.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The rounded HSL representation.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The rounded CMYK representation.
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// The clipboard string for the requested representation:
    /// `#rrggbb`, `rgb(r, g, b)`, `hsl(h, s%, l%)`, or
    /// `cmyk(c%, m%, y%, k%)`.
    pub fn format_as(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.hex.clone(),
            ColorFormat::Rgb => self.rgb.to_string(),
            ColorFormat::Hsl => self.hsl.to_string(),
            ColorFormat::Cmyk => self.cmyk.to_string(),
        }
    }
}
