//! End-to-end tests for the palette store and its persisted document.

use swatchbook::{document, GridConfig, PaletteError, PaletteStore, Rgb};

fn grid(rows: usize, cols: usize) -> GridConfig {
    GridConfig::new(rows, cols).unwrap()
}

/// Distinct grayscale samples make eviction order easy to assert on.
fn fill(store: &mut PaletteStore, count: u8) {
    for value in 0..count {
        store.insert(Rgb(value, value, value));
    }
}

fn hexes(store: &PaletteStore) -> Vec<String> {
    store.snapshot().map(|s| s.hex().to_string()).collect()
}

// ============================================================================
// Capacity and eviction
// ============================================================================

#[test]
fn length_never_exceeds_capacity() {
    let mut store = PaletteStore::new(grid(3, 5));
    for value in 0..100u8 {
        store.insert(Rgb(value, value, value));
        assert!(store.len() <= store.grid().capacity());
    }
}

#[test]
fn overflow_evicts_exactly_the_oldest() {
    let mut store = PaletteStore::new(grid(3, 5));
    fill(&mut store, 16); // one past capacity

    let remaining = hexes(&store);
    assert_eq!(remaining.len(), 15);
    assert!(!remaining.contains(&"#000000".to_string()));
    // Survivors keep their original relative order.
    assert_eq!(remaining[0], "#010101");
    assert_eq!(remaining[14], "#0f0f0f");
}

#[test]
fn shrinking_grid_keeps_most_recent_samples() {
    let mut store = PaletteStore::new(grid(3, 5));
    fill(&mut store, 15);

    store.resize(grid(2, 5));

    let remaining = hexes(&store);
    assert_eq!(remaining.len(), 10);
    // The five oldest are gone; the rest stay oldest-first.
    assert_eq!(remaining[0], "#050505");
    assert_eq!(remaining[9], "#0e0e0e");
}

#[test]
fn growing_grid_changes_nothing_but_capacity() {
    let mut store = PaletteStore::new(grid(2, 5));
    fill(&mut store, 10);
    let before = hexes(&store);

    store.resize(grid(4, 5));

    assert_eq!(hexes(&store), before);
    assert_eq!(store.grid().capacity(), 20);
}

#[test]
fn repeated_resize_is_idempotent() {
    let mut store = PaletteStore::new(grid(3, 5));
    fill(&mut store, 15);

    store.resize(grid(2, 5));
    let after_first = hexes(&store);
    store.resize(grid(2, 5));

    assert_eq!(hexes(&store), after_first);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn removing_absent_hex_leaves_samples_unchanged_by_value() {
    let mut store = PaletteStore::new(grid(2, 2));
    fill(&mut store, 3);
    let before: Vec<_> = store.snapshot().cloned().collect();

    let err = store.remove("#abcdef").unwrap_err();

    assert!(matches!(err, PaletteError::NotFound(_)));
    let after: Vec<_> = store.snapshot().cloned().collect();
    assert_eq!(after, before);
}

#[test]
fn removal_shifts_later_samples_down() {
    let mut store = PaletteStore::new(grid(1, 4));
    fill(&mut store, 4);

    let removed = store.remove("#010101").unwrap();

    assert_eq!(removed.hex(), "#010101");
    assert_eq!(hexes(&store), ["#000000", "#020202", "#030303"]);
    let indices: Vec<_> = store.slots().map(|s| s.index).collect();
    assert_eq!(indices, [0, 1, 2]);
}

// ============================================================================
// Persistence round-trip
// ============================================================================

#[test]
fn document_round_trip_is_exact() {
    let mut store = PaletteStore::new(grid(2, 3));
    store.insert(Rgb(255, 0, 0));
    store.insert(Rgb(0, 0, 0));
    store.insert(Rgb(255, 107, 53));

    let json = serde_json::to_string(&document::encode(&store)).unwrap();
    let decoded = document::decode_json(&json, grid(9, 9)).unwrap();

    let mut loaded = PaletteStore::default();
    loaded.restore(decoded.grid, decoded.samples);

    assert_eq!(loaded.grid(), store.grid());
    let original: Vec<_> = store.snapshot().cloned().collect();
    let restored: Vec<_> = loaded.snapshot().cloned().collect();
    assert_eq!(restored, original);
}

#[test]
fn legacy_document_preserves_callers_grid() {
    let json = r##"[
        {"hex": "#102030",
         "formats": {"rgb": [16, 32, 48], "hsl": [210, 50, 13], "cmyk": [67, 33, 0, 81]}},
        {"hex": "#ffffff",
         "formats": {"rgb": [255, 255, 255], "hsl": [0, 0, 100], "cmyk": [0, 0, 0, 0]}}
    ]"##;
    let current = grid(7, 2);

    let decoded = document::decode_json(json, current).unwrap();

    assert_eq!(decoded.grid, current);
    assert_eq!(decoded.samples.len(), 2);
    assert_eq!(decoded.samples[0].hex(), "#102030");
}

#[test]
fn failed_decode_leaves_existing_store_untouched() {
    let mut store = PaletteStore::new(grid(2, 2));
    fill(&mut store, 2);
    let before = hexes(&store);

    let result = document::decode_json("{\"grid_rows\": true}", store.grid());

    assert!(result.is_err());
    assert_eq!(hexes(&store), before);
}
