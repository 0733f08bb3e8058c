//! Swatchbook CLI - sample colors and manage the palette grid from the
//! terminal.
//!
//! This binary plays the collaborator roles around the core store: it feeds
//! sampled colors in, renders the grid, writes format strings to the
//! clipboard, and owns the palette file on disk.

mod clipboard;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use swatchbook::{ColorFormat, GridConfig, Rgb};

use crate::clipboard::{Clipboard, SystemClipboard};

#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(version)]
#[command(about = "Sample colors and keep a bounded, grid-displayed history")]
struct Cli {
    /// Palette file holding the saved history
    #[arg(long, global = true, default_value = "swatchbook.json")]
    palette: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a color ("#rrggbb", "#rgb", or "r,g,b") and copy its hex
    Pick {
        color: String,

        /// Skip copying the hex to the clipboard
        #[arg(long)]
        no_copy: bool,
    },

    /// Display the palette grid
    Show,

    /// Copy a stored color to the clipboard in the given format
    Copy {
        hex: String,

        /// Representation to copy
        #[arg(long = "as", value_enum, default_value = "hex")]
        format: FormatArg,
    },

    /// Remove a color from the history
    Remove { hex: String },

    /// Change the grid dimensions
    Grid { rows: usize, cols: usize },

    /// Drop the whole history
    Clear,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
}

impl From<FormatArg> for ColorFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => ColorFormat::Hex,
            FormatArg::Rgb => ColorFormat::Rgb,
            FormatArg::Hsl => ColorFormat::Hsl,
            FormatArg::Cmyk => ColorFormat::Cmyk,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut palette = store::load(&cli.palette, GridConfig::default())?;

    match cli.command {
        Commands::Pick { color, no_copy } => {
            let rgb = parse_color(&color)?;
            let (slot, sample) = palette.insert(rgb);
            store::save(&cli.palette, &palette)?;
            print!("{}", render::sample_details(&sample, slot));
            if !no_copy {
                copy_to_clipboard(&SystemClipboard, sample.format_as(ColorFormat::Hex));
            }
        }
        Commands::Show => {
            print!("{}", render::grid(&palette));
        }
        Commands::Copy { hex, format } => {
            let hex = canonical_hex(&hex)?;
            let sample = palette
                .snapshot()
                .find(|s| s.hex() == hex)
                .ok_or_else(|| anyhow!("no sample {hex} in the palette"))?
                .clone();
            copy_to_clipboard(&SystemClipboard, sample.format_as(format.into()));
        }
        Commands::Remove { hex } => {
            let hex = canonical_hex(&hex)?;
            palette.remove(&hex)?;
            store::save(&cli.palette, &palette)?;
            println!("removed {hex}");
        }
        Commands::Grid { rows, cols } => {
            palette.resize(GridConfig::new(rows, cols)?);
            store::save(&cli.palette, &palette)?;
            print!("{}", render::grid(&palette));
        }
        Commands::Clear => {
            palette.clear();
            store::save(&cli.palette, &palette)?;
            println!("palette cleared");
        }
    }

    Ok(())
}

/// Parses a sampled color: `#rrggbb`, `#rgb`, bare hex, or an `r,g,b`
/// triple.
fn parse_color(input: &str) -> Result<Rgb> {
    if input.contains(',') {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            bail!("expected three comma-separated channels, got {}", parts.len());
        }
        let mut channels = [0u8; 3];
        for (i, part) in parts.iter().enumerate() {
            channels[i] = part
                .parse()
                .with_context(|| format!("channel '{part}' is not a number in 0-255"))?;
        }
        return Ok(Rgb(channels[0], channels[1], channels[2]));
    }
    Ok(Rgb::from_hex(input)?)
}

/// Normalizes user-supplied hex to the stored `#rrggbb` lowercase form.
fn canonical_hex(input: &str) -> Result<String> {
    Ok(Rgb::from_hex(input)?.to_hex())
}

/// Copies to the clipboard if the platform supports it; otherwise the text
/// has already been printed, so just warn.
fn copy_to_clipboard(clipboard: &impl Clipboard, text: String) {
    match clipboard.write(&text) {
        Ok(()) => println!("copied {text}"),
        Err(err) => eprintln!("{} {err}", style("clipboard unavailable:").yellow()),
    }
}
