//! Terminal rendering of the palette grid and sample details.

use console::{Color, Style};
use swatchbook::{ColorFormat, ColorSample, PaletteStore, Rgb};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
fn ansi256(rgb: Rgb) -> u8 {
    let Rgb(r, g, b) = rgb;
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// A hex label painted on its own color, with the inverse color for the text
/// so the label stays readable on any swatch.
fn swatch(sample: &ColorSample) -> String {
    let rgb = sample.rgb();
    Style::new()
        .bg(Color::Color256(ansi256(rgb)))
        .fg(Color::Color256(ansi256(rgb.inverse())))
        .apply_to(format!(" {} ", sample.hex()))
        .to_string()
}

/// Every representation of a freshly picked sample, one per line.
pub fn sample_details(sample: &ColorSample, slot: usize) -> String {
    format!(
        "{}  slot {}\n  {}\n  {}\n  {}\n",
        swatch(sample),
        slot,
        sample.format_as(ColorFormat::Rgb),
        sample.format_as(ColorFormat::Hsl),
        sample.format_as(ColorFormat::Cmyk),
    )
}

/// The grid view: a header line, then swatches left-to-right, top-to-bottom,
/// oldest first.
pub fn grid(store: &PaletteStore) -> String {
    let config = store.grid();
    let mut out = format!(
        "{}  {} rows x {} cols, {} of {} slots\n",
        Style::new().bold().apply_to("palette"),
        config.rows(),
        config.cols(),
        store.len(),
        config.capacity(),
    );

    if store.is_empty() {
        out.push_str("  (empty)\n");
        return out;
    }

    for slot in store.slots() {
        if slot.col == 0 && slot.index != 0 {
            out.push('\n');
        }
        out.push_str(&swatch(slot.sample));
        out.push(' ');
    }
    out.push('\n');
    out
}
