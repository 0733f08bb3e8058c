//! The palette file: the file-I/O collaborator around the document codec.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use swatchbook::{document, GridConfig, PaletteStore};

/// Loads the palette file, or starts an empty store with `grid` when the
/// file does not exist yet.
///
/// A file that exists but cannot be read or decoded is an error; the caller
/// keeps whatever palette it already had.
pub fn load(path: &Path, grid: GridConfig) -> Result<PaletteStore> {
    if !path.exists() {
        return Ok(PaletteStore::new(grid));
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read palette file {}", path.display()))?;
    let decoded = document::decode_json(&json, grid)
        .with_context(|| format!("cannot decode palette file {}", path.display()))?;

    let mut store = PaletteStore::new(grid);
    store.restore(decoded.grid, decoded.samples);
    Ok(store)
}

/// Writes the store's state to the palette file as a JSON document.
pub fn save(path: &Path, store: &PaletteStore) -> Result<()> {
    let json = serde_json::to_string_pretty(&document::encode(store))
        .context("cannot serialize palette document")?;
    fs::write(path, json)
        .with_context(|| format!("cannot write palette file {}", path.display()))
}
