//! # Tests for Config Constants
//!
//! Sanity checks on the authored constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive_and_small() {
    assert!(EPSILON_TOLERANCE > 0.0);
    assert!(EPSILON_TOLERANCE < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// RANGE TESTS
// =============================================================================

#[test]
fn test_ranges_are_ordered() {
    for range in [NUM_PARTS_RANGE, PITCH_RANGE, LATERAL_GAP_RANGE, VERTICAL_GAP_RANGE] {
        assert!(range.min < range.max, "{} range is empty", range.name);
    }
}

#[test]
fn test_range_names_match_parameters() {
    assert_eq!(NUM_PARTS_RANGE.name, "num_parts");
    assert_eq!(PITCH_RANGE.name, "pitch");
    assert_eq!(LATERAL_GAP_RANGE.name, "lateral_gap");
    assert_eq!(VERTICAL_GAP_RANGE.name, "vertical_gap");
}

#[test]
fn test_prism_needs_a_polygon() {
    assert_eq!(MIN_PRISM_SIDES, 3);
}

// =============================================================================
// PART LIBRARY TESTS
// =============================================================================

#[test]
fn test_socket_tables_are_one_based() {
    // Index 0 would point before the first vertex in the OBJ numbering
    assert!(EUROPEAN_SOCKET_ANCHORS.iter().all(|&i| i >= 1));
    assert!(AMERICAN_SOCKET_ANCHORS.iter().all(|&i| i >= 1));
}

#[test]
fn test_socket_tables_have_distinct_anchors() {
    for table in [EUROPEAN_SOCKET_ANCHORS, AMERICAN_SOCKET_ANCHORS] {
        let mut sorted = table.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }
}

// =============================================================================
// TEMPLATE TESTS
// =============================================================================

#[test]
fn test_placeholders_are_distinct_prefixes() {
    let placeholders = [
        LENGTH_PLACEHOLDER,
        INNER_LENGTH_PLACEHOLDER,
        WIDTH_PLACEHOLDER,
        INNER_WIDTH_PLACEHOLDER,
    ];
    for (i, a) in placeholders.iter().enumerate() {
        for b in &placeholders[i + 1..] {
            assert!(!a.starts_with(b) && !b.starts_with(a), "{a} overlaps {b}");
        }
    }
}

#[test]
fn test_enclosure_wall_fits_inside_part_width() {
    assert!(ENCLOSURE_WALL_MM > 0.0);
    assert!(ENCLOSURE_WALL_MM < PART_WIDTH_MM);
}
