//! Encoding and decoding of the persisted palette document.
//!
//! The document is a pure in-memory mapping of a store's state; reading and
//! writing files is the caller's job. Two shapes are accepted on decode:
//!
//! - the current wrapped object, `{grid_rows, grid_cols, colors: [...]}`
//! - a legacy bare array of color records, which carries no grid, so the
//!   caller's current grid is kept
//!
//! Decoding trusts the persisted `rgb`/`hsl`/`cmyk` values as-is instead of
//! re-deriving them, so a saved palette reads back byte-identical. Only the
//! `hex` field is validated to name a real color.
//!
//! # Example
//!
//! ```rust
//! use swatchbook::{document, GridConfig, PaletteStore, Rgb};
//!
//! let mut store = PaletteStore::new(GridConfig::new(2, 2)?);
//! store.insert(Rgb(255, 0, 0));
//!
//! let json = serde_json::to_string(&document::encode(&store)).unwrap();
//! let decoded = document::decode_json(&json, store.grid())?;
//!
//! let mut loaded = PaletteStore::new(GridConfig::new(1, 1)?);
//! loaded.restore(decoded.grid, decoded.samples);
//! assert_eq!(loaded.snapshot().next().unwrap().hex(), "#ff0000");
//! # Ok::<(), swatchbook::PaletteError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::colorspace::{Cmyk, Hsl, Rgb};
use crate::error::{PaletteError, Result};
use crate::grid::GridConfig;
use crate::palette::PaletteStore;
use crate::sample::ColorSample;

/// Serialized form of a palette plus its grid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteDocument {
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub colors: Vec<ColorRecord>,
}

/// One persisted color: its hex plus all captured formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub hex: String,
    pub formats: SampleFormats,
}

/// The non-hex representations stored alongside each color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleFormats {
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub cmyk: Cmyk,
}

/// The two input shapes accepted on load.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentShape {
    Wrapped(PaletteDocument),
    Legacy(Vec<ColorRecord>),
}

/// Grid and samples recovered from a document, ready for
/// [`PaletteStore::restore`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPalette {
    pub grid: GridConfig,
    pub samples: Vec<ColorSample>,
}

impl From<&ColorSample> for ColorRecord {
    fn from(sample: &ColorSample) -> Self {
        Self {
            hex: sample.hex().to_string(),
            formats: SampleFormats {
                rgb: sample.rgb(),
                hsl: sample.hsl(),
                cmyk: sample.cmyk(),
            },
        }
    }
}

impl TryFrom<ColorRecord> for ColorSample {
    type Error = PaletteError;

    fn try_from(record: ColorRecord) -> Result<Self> {
        if Rgb::from_hex(&record.hex).is_err() {
            return Err(PaletteError::MalformedDocument(format!(
                "color entry has invalid hex '{}'",
                record.hex
            )));
        }
        Ok(ColorSample::from_parts(
            record.hex,
            record.formats.rgb,
            record.formats.hsl,
            record.formats.cmyk,
        ))
    }
}

/// Maps a store's full state to its document form.
pub fn encode(store: &PaletteStore) -> PaletteDocument {
    PaletteDocument {
        grid_rows: store.grid().rows(),
        grid_cols: store.grid().cols(),
        colors: store.snapshot().map(ColorRecord::from).collect(),
    }
}

/// Decodes document text, accepting both the wrapped and the legacy shape.
///
/// `current_grid` is returned unchanged when the legacy bare-array shape is
/// read. A failed decode returns no partial state.
pub fn decode_json(json: &str, current_grid: GridConfig) -> Result<DecodedPalette> {
    let shape: DocumentShape = serde_json::from_str(json)
        .map_err(|e| PaletteError::MalformedDocument(e.to_string()))?;

    match shape {
        DocumentShape::Wrapped(doc) => Ok(DecodedPalette {
            grid: GridConfig::new(doc.grid_rows, doc.grid_cols)?,
            samples: records_into_samples(doc.colors)?,
        }),
        DocumentShape::Legacy(records) => Ok(DecodedPalette {
            grid: current_grid,
            samples: records_into_samples(records)?,
        }),
    }
}

fn records_into_samples(records: Vec<ColorRecord>) -> Result<Vec<ColorSample>> {
    records.into_iter().map(ColorSample::try_from).collect()
}
