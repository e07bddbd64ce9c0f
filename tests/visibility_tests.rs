//! Hidden row/column tests
//!
//! Hiding and unhiding, the effect on geometry, and visible-neighbor
//! navigation.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use std::collections::BTreeSet;

use common::{assert_geometry_consistent, axis};
use gridaxis::{AxisChange, NominalSize, PixelHit};
use test_case::test_case;

// =============================================================================
// HIDE / UNHIDE
// =============================================================================

#[test]
fn test_hide_then_query() {
    let mut axis = axis(5, 100, 50);
    axis.hide(&[2]).unwrap();

    assert_eq!(axis.pixel_size(2).unwrap(), 0);
    assert_eq!(axis.total_pixels(), 450);
    assert_eq!(axis.next_visible(1).unwrap(), Some(3));
    assert_geometry_consistent(&mut axis);
}

#[test]
fn test_hidden_position_is_never_hit() {
    let mut axis = axis(5, 100, 50);
    axis.hide(&[2]).unwrap();
    // Position 2 collapses onto the start of position 3.
    assert_eq!(axis.pixel_start(2, 0).unwrap(), 250);
    assert_eq!(axis.pixel_start(3, 0).unwrap(), 250);
    assert_eq!(axis.position_at_pixel(250, 0), PixelHit::Cell(3));
    assert_eq!(axis.position_at_pixel(249, 0), PixelHit::Cell(1));
}

#[test]
fn test_hide_returns_changed_set() {
    let mut axis = axis(5, 10, 0);
    let changed = axis.hide(&[1, 3]).unwrap();
    assert_eq!(changed, Some(BTreeSet::from([1, 3])));

    let changed = axis.hide(&[1, 2]).unwrap();
    assert_eq!(changed, Some(BTreeSet::from([2])));

    assert_eq!(axis.hide(&[1, 2, 3]).unwrap(), None);
}

#[test]
fn test_hide_is_all_or_nothing() {
    let mut axis = axis(5, 10, 0);
    assert!(axis.hide(&[1, 9]).is_err());
    assert!(axis.is_visible(1).unwrap());
    assert!(axis.take_changes().is_empty());
}

#[test]
fn test_unhide_all() {
    let mut axis = axis(5, 10, 0);
    assert_eq!(axis.unhide_all(), None);
    axis.hide(&[0, 4]).unwrap();
    assert_eq!(axis.unhide_all(), Some(BTreeSet::from([0, 4])));
    assert_eq!(axis.total_pixels(), 50);
    assert!(axis.hidden_positions().is_empty());
}

#[test_case(None ; "default size")]
#[test_case(Some(0) ; "zero size")]
#[test_case(Some(37) ; "explicit size")]
fn test_hide_unhide_round_trip(size: Option<i32>) {
    let mut axis = axis(5, 10, 0);
    if let Some(size) = size {
        axis.set_index_size(2, size).unwrap();
    }
    let before = axis.nominal_size(2).unwrap();
    let total = axis.total_pixels();

    axis.hide(&[2]).unwrap();
    assert!(axis.nominal_size(2).unwrap().is_hidden());
    axis.unhide(&[2]).unwrap();

    assert_eq!(axis.nominal_size(2).unwrap(), before);
    assert_eq!(axis.total_pixels(), total);
}

#[test]
fn test_resize_while_hidden() {
    let mut axis = axis(5, 10, 0);
    axis.hide(&[2]).unwrap();
    axis.set_index_size(2, 40).unwrap();
    assert_eq!(axis.pixel_size(2).unwrap(), 0);
    assert_eq!(axis.nominal_size(2).unwrap(), NominalSize::Hidden(Some(40)));
    assert_eq!(axis.size_exceptions().get(&2), Some(&40));

    axis.unhide(&[2]).unwrap();
    assert_eq!(axis.pixel_size(2).unwrap(), 40);
    assert_geometry_consistent(&mut axis);
}

#[test]
fn test_hide_invalidates_from_first_changed_view() {
    let mut axis = axis(10, 10, 0);
    axis.reorder(&[8], 2).unwrap();
    axis.pixel_start(10, 0).unwrap();
    axis.take_changes();

    // Data 8 sits at view 2.
    axis.hide(&[8, 9]).unwrap();
    assert_eq!(axis.cached_positions(), 3);
    assert_eq!(
        axis.take_changes(),
        vec![
            AxisChange::LayoutChanged { from: 2 },
            AxisChange::TotalPixelsChanged
        ]
    );
    assert_geometry_consistent(&mut axis);
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[test]
fn test_first_and_last_visible() {
    let mut axis = axis(5, 10, 0);
    axis.hide(&[0, 4]).unwrap();
    assert_eq!(axis.first_visible(), Some(1));
    assert_eq!(axis.last_visible(), Some(3));
}

#[test]
fn test_navigation_falls_back_to_other_direction() {
    let mut axis = axis(5, 10, 0);
    axis.hide(&[3, 4]).unwrap();
    assert_eq!(axis.next_visible(2).unwrap(), Some(2));
    assert_eq!(axis.next_visible(3).unwrap(), Some(2));

    axis.unhide_all();
    axis.hide(&[0, 1]).unwrap();
    assert_eq!(axis.previous_visible(2).unwrap(), Some(2));
    assert_eq!(axis.previous_visible(1).unwrap(), Some(2));
    assert_eq!(axis.previous_visible(4).unwrap(), Some(3));
}

#[test]
fn test_nearest_visible() {
    let mut axis = axis(6, 10, 0);
    axis.hide(&[2, 3]).unwrap();
    assert_eq!(axis.nearest_visible(1).unwrap(), Some(1));
    assert_eq!(axis.nearest_visible(2).unwrap(), Some(4));
    axis.hide(&[4, 5]).unwrap();
    assert_eq!(axis.nearest_visible(3).unwrap(), Some(1));
}

#[test]
fn test_navigation_with_nothing_visible() {
    let mut axis = axis(3, 10, 0);
    axis.hide(&[0, 1, 2]).unwrap();
    assert_eq!(axis.first_visible(), None);
    assert_eq!(axis.last_visible(), None);
    assert_eq!(axis.next_visible(0).unwrap(), None);
    assert_eq!(axis.previous_visible(2).unwrap(), None);
    assert_eq!(axis.nearest_visible(1).unwrap(), None);
    assert_eq!(axis.total_pixels(), 0);
}

#[test]
fn test_navigation_follows_view_order() {
    let mut axis = axis(5, 10, 0);
    axis.reorder(&[4], 0).unwrap();
    // View order is [4, 0, 1, 2, 3]; hide data 0 (view 1).
    axis.hide(&[0]).unwrap();
    assert_eq!(axis.next_visible(0).unwrap(), Some(2));
    assert!(!axis.is_visible(1).unwrap());
    assert!(axis.next_visible(5).is_err());
}
