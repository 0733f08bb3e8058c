//! Property-based tests for conversion, grid math, and the palette store.

use proptest::prelude::*;
use swatchbook::{document, GridConfig, PaletteStore, Rgb};

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb(r, g, b))
}

proptest! {
    /// Hex formatting and parsing are inverses over the whole RGB cube.
    #[test]
    fn hex_round_trips(rgb in rgb_strategy()) {
        let hex = rgb.to_hex();
        prop_assert_eq!(Rgb::from_hex(&hex).unwrap(), rgb);
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));
        prop_assert_eq!(hex.to_lowercase(), hex.clone());
    }

    /// Conversion outputs stay inside their documented integer ranges.
    #[test]
    fn converted_components_stay_in_range(rgb in rgb_strategy()) {
        let hsl = rgb.to_hsl();
        prop_assert!(hsl.0 <= 360);
        prop_assert!(hsl.1 <= 100);
        prop_assert!(hsl.2 <= 100);

        let cmyk = rgb.to_cmyk();
        prop_assert!(cmyk.0 <= 100);
        prop_assert!(cmyk.1 <= 100);
        prop_assert!(cmyk.2 <= 100);
        prop_assert!(cmyk.3 <= 100);
    }

    /// Conversion is deterministic: equal inputs give equal outputs.
    #[test]
    fn conversion_is_deterministic(rgb in rgb_strategy()) {
        prop_assert_eq!(rgb.to_hsl(), rgb.to_hsl());
        prop_assert_eq!(rgb.to_cmyk(), rgb.to_cmyk());
        prop_assert_eq!(rgb.to_hex(), rgb.to_hex());
    }

    /// `position` is a bijection from slot indices onto the grid cells.
    #[test]
    fn position_is_a_bijection(rows in 1usize..=12, cols in 1usize..=12) {
        let grid = GridConfig::new(rows, cols).unwrap();
        let mut seen = std::collections::HashSet::new();
        for index in 0..grid.capacity() {
            let (row, col) = grid.position(index);
            prop_assert!(row < rows);
            prop_assert!(col < cols);
            prop_assert!(seen.insert((row, col)));
        }
        prop_assert_eq!(seen.len(), grid.capacity());
    }

    /// The capacity bound holds after every insert, for any grid and any
    /// sequence of samples.
    #[test]
    fn capacity_invariant_under_inserts(
        rows in 1usize..=4,
        cols in 1usize..=4,
        samples in prop::collection::vec(rgb_strategy(), 0..64),
    ) {
        let mut store = PaletteStore::new(GridConfig::new(rows, cols).unwrap());
        for rgb in samples {
            let (slot, _) = store.insert(rgb);
            prop_assert!(store.len() <= store.grid().capacity());
            prop_assert_eq!(slot, store.len() - 1);
        }
    }

    /// Inserting keeps the surviving history in insertion order.
    #[test]
    fn eviction_preserves_relative_order(
        samples in prop::collection::vec(any::<u8>(), 1..40),
    ) {
        let mut store = PaletteStore::new(GridConfig::new(2, 3).unwrap());
        for &value in &samples {
            store.insert(Rgb(value, value, 0));
        }
        let capacity = store.grid().capacity();
        let expected: Vec<String> = samples
            .iter()
            .rev()
            .take(capacity)
            .rev()
            .map(|&v| Rgb(v, v, 0).to_hex())
            .collect();
        let actual: Vec<String> = store.snapshot().map(|s| s.hex().to_string()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Encode/decode reproduces the grid and every sample field-for-field.
    #[test]
    fn document_round_trips(
        rows in 1usize..=4,
        cols in 1usize..=4,
        samples in prop::collection::vec(rgb_strategy(), 0..16),
    ) {
        let mut store = PaletteStore::new(GridConfig::new(rows, cols).unwrap());
        for rgb in samples {
            store.insert(rgb);
        }

        let json = serde_json::to_string(&document::encode(&store)).unwrap();
        let decoded = document::decode_json(&json, GridConfig::default()).unwrap();

        prop_assert_eq!(decoded.grid, store.grid());
        let original: Vec<_> = store.snapshot().cloned().collect();
        prop_assert_eq!(decoded.samples, original);
    }

    /// A failed removal is observationally a no-op.
    #[test]
    fn failed_removal_changes_nothing(
        samples in prop::collection::vec(rgb_strategy(), 1..10),
    ) {
        let mut store = PaletteStore::new(GridConfig::new(3, 4).unwrap());
        for rgb in samples {
            store.insert(rgb);
        }
        let before: Vec<_> = store.snapshot().cloned().collect();

        // "#gggggg" can never be a stored hex.
        prop_assert!(store.remove("#gggggg").is_err());

        let after: Vec<_> = store.snapshot().cloned().collect();
        prop_assert_eq!(after, before);
    }
}
