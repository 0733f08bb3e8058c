//! # Swatchbook - Color Sampling History
//!
//! `swatchbook` is the core of a pixel color picker: it converts raw 8-bit
//! RGB samples into every representation a designer reaches for (hex, HSL,
//! CMYK), keeps a bounded history of them laid out on a configurable grid,
//! and round-trips the whole palette through a JSON document.
//!
//! The crate is deliberately free of I/O. Samplers (hotkey hooks, eyedroppers,
//! CLIs), renderers (widget trees, terminals), clipboards, and file pickers
//! are collaborators that feed raw values in and read formatted values out.
//!
//! ## Core Concepts
//!
//! - [`Rgb`], [`Hsl`], [`Cmyk`]: color value types with pure conversions
//! - [`ColorSample`]: one captured color with every format pre-computed
//! - [`GridConfig`]: validated rows x cols geometry; capacity and slot math
//! - [`PaletteStore`]: the bounded, oldest-first history with FIFO eviction
//! - [`document`]: the persisted JSON document codec (with legacy support)
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchbook::{ColorFormat, GridConfig, PaletteStore, Rgb};
//!
//! let mut store = PaletteStore::new(GridConfig::new(3, 5)?);
//!
//! // A sampler collaborator feeds raw pixels in.
//! let (slot, sample) = store.insert(Rgb(255, 107, 53));
//! assert_eq!(slot, 0);
//! assert_eq!(sample.hex(), "#ff6b35");
//! assert_eq!(sample.format_as(ColorFormat::Hsl), "hsl(16, 100%, 60%)");
//!
//! // A renderer collaborator reads placed slots back out.
//! for slot in store.slots() {
//!     let (_row, _col) = (slot.row, slot.col);
//! }
//! # Ok::<(), swatchbook::PaletteError>(())
//! ```
//!
//! ## Capacity and Eviction
//!
//! The history never outgrows the grid: inserting into a full palette evicts
//! the oldest sample, and shrinking the grid evicts however many oldest
//! samples no longer fit.
//!
//! ```rust
//! use swatchbook::{GridConfig, PaletteStore, Rgb};
//!
//! let mut store = PaletteStore::new(GridConfig::new(3, 5)?);
//! for value in 0..=15u8 {
//!     store.insert(Rgb(value, value, value));
//! }
//! assert_eq!(store.len(), 15); // #000000 was evicted
//!
//! store.resize(GridConfig::new(2, 5)?);
//! assert_eq!(store.len(), 10); // five more evicted, oldest first
//! # Ok::<(), swatchbook::PaletteError>(())
//! ```

pub mod colorspace;
pub mod document;
mod error;
mod grid;
mod palette;
mod sample;

pub use colorspace::{Cmyk, Hsl, Rgb};
pub use error::{PaletteError, Result};
pub use grid::GridConfig;
pub use palette::{PaletteStore, Slot};
pub use sample::{ColorFormat, ColorSample};
