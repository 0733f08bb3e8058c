//! The bounded, grid-indexed history of sampled colors.

use std::collections::VecDeque;

use crate::colorspace::Rgb;
use crate::error::{PaletteError, Result};
use crate::grid::GridConfig;
use crate::sample::ColorSample;

/// A sample paired with its place in the current grid.
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    /// Zero-based position within the snapshot, oldest first.
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub sample: &'a ColorSample,
}

/// Ordered history of color samples, bounded by the grid capacity.
///
/// Samples are kept oldest-first and overflow always evicts from the front,
/// so after every operation `len() <= grid().capacity()` holds. The store is
/// not internally synchronized: it expects exactly one logical owner at a
/// time, and concurrent hosts must serialize access (an owning task, a
/// mutex, or an event channel) before calling in.
///
/// # Example
///
/// ```rust
/// use swatchbook::{GridConfig, PaletteStore, Rgb};
///
/// let mut store = PaletteStore::new(GridConfig::new(1, 2)?);
/// store.insert(Rgb(255, 0, 0));
/// store.insert(Rgb(0, 255, 0));
/// store.insert(Rgb(0, 0, 255)); // evicts red, the oldest
///
/// let hexes: Vec<_> = store.snapshot().map(|s| s.hex().to_string()).collect();
/// assert_eq!(hexes, ["#00ff00", "#0000ff"]);
/// # Ok::<(), swatchbook::PaletteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PaletteStore {
    samples: VecDeque<ColorSample>,
    grid: GridConfig,
}

impl PaletteStore {
    /// Creates an empty store displayed on `grid`.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            samples: VecDeque::new(),
            grid,
        }
    }

    /// The current grid configuration.
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Converts a raw RGB triple and appends it as the newest sample,
    /// evicting from the front when the grid is full.
    ///
    /// Returns the slot index of the stored sample (always the last valid
    /// index after eviction) together with the sample itself.
    pub fn insert(&mut self, rgb: Rgb) -> (usize, ColorSample) {
        let sample = ColorSample::from_rgb(rgb);
        while self.samples.len() >= self.grid.capacity() {
            self.samples.pop_front();
        }
        self.samples.push_back(sample.clone());
        (self.samples.len() - 1, sample)
    }

    /// Removes the oldest sample whose hex matches, shifting later samples
    /// down to fill the gap.
    ///
    /// Returns the removed sample, or [`PaletteError::NotFound`] with the
    /// store untouched.
    pub fn remove(&mut self, hex: &str) -> Result<ColorSample> {
        match self.samples.iter().position(|s| s.hex() == hex) {
            Some(index) => Ok(self
                .samples
                .remove(index)
                .expect("index returned by position is in bounds")),
            None => Err(PaletteError::NotFound(hex.to_string())),
        }
    }

    /// Replaces the grid configuration, evicting the oldest samples when the
    /// new capacity is smaller than the current history.
    ///
    /// Repeating the same resize is a no-op.
    pub fn resize(&mut self, grid: GridConfig) {
        self.grid = grid;
        while self.samples.len() > self.grid.capacity() {
            self.samples.pop_front();
        }
    }

    /// Drops every sample. The grid configuration is untouched.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// The most recently captured sample, if any.
    pub fn last(&self) -> Option<&ColorSample> {
        self.samples.back()
    }

    /// Read-only view of the history, oldest first.
    pub fn snapshot(&self) -> impl Iterator<Item = &ColorSample> {
        self.samples.iter()
    }

    /// The history with grid placement attached, oldest first.
    pub fn slots(&self) -> impl Iterator<Item = Slot<'_>> + '_ {
        self.samples.iter().enumerate().map(move |(index, sample)| {
            let (row, col) = self.grid.position(index);
            Slot {
                index,
                row,
                col,
                sample,
            }
        })
    }

    /// Replaces the whole history and grid, typically from a decoded
    /// document.
    ///
    /// Samples beyond the new capacity are evicted oldest-first so the
    /// capacity bound holds even for documents written with a larger grid.
    pub fn restore(&mut self, grid: GridConfig, samples: Vec<ColorSample>) {
        self.grid = grid;
        self.samples = samples.into();
        while self.samples.len() > self.grid.capacity() {
            self.samples.pop_front();
        }
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
