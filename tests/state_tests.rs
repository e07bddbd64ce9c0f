//! Persistence snapshot tests
//!
//! `Axis::state` / `Axis::restore` and their JSON form.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use std::collections::{BTreeMap, BTreeSet};

use common::{assert_geometry_consistent, axis, order};
use gridaxis::{Axis, AxisConfig, AxisError, AxisState};

fn populated() -> Axis {
    let mut axis = axis(6, 20, 10);
    axis.set_index_size(1, 35).unwrap();
    axis.set_index_size(4, 5).unwrap();
    axis.hide(&[4, 5]).unwrap();
    axis.reorder(&[5], 0).unwrap();
    axis
}

#[test]
fn test_state_snapshot() {
    let state = populated().state();
    assert_eq!(state.count, 6);
    assert_eq!(state.order, vec![5, 0, 1, 2, 3, 4]);
    assert_eq!(state.size_exceptions, BTreeMap::from([(1, 35), (4, 5)]));
    assert_eq!(state.hidden, BTreeSet::from([4, 5]));
    assert_eq!(state.config.default_size, 20);
}

#[test]
fn test_restore_reproduces_geometry() {
    let mut original = populated();
    let mut restored = Axis::new();
    restored.restore(&original.state()).unwrap();

    assert_eq!(order(&restored), order(&original));
    assert_eq!(restored.mapping_hash(), original.mapping_hash());
    assert_eq!(restored.total_pixels(), original.total_pixels());
    for view in 0..6 {
        assert_eq!(
            restored.pixel_start(view, 0).unwrap(),
            original.pixel_start(view, 0).unwrap()
        );
    }
    assert_geometry_consistent(&mut restored);
}

#[test]
fn test_state_json_round_trip() {
    let state = populated().state();
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"sizeExceptions\""));
    let parsed: AxisState = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, state);
}

#[test]
fn test_identity_state_omits_order() {
    let state = axis(3, 10, 0).state();
    let json = serde_json::to_value(&state).unwrap();
    assert!(json.get("order").is_none());
    assert!(json.get("hidden").is_none());
}

#[test]
fn test_restore_rejects_invalid_state() {
    let mut target = populated();
    let before = target.state();

    let bad_order = AxisState {
        order: vec![0, 0, 1],
        count: 3,
        ..before.clone()
    };
    assert!(matches!(
        target.restore(&bad_order),
        Err(AxisError::InvalidState(_))
    ));

    let short_order = AxisState {
        order: vec![1, 0],
        count: 3,
        ..before.clone()
    };
    assert!(target.restore(&short_order).is_err());

    let hidden_past_count = AxisState {
        hidden: BTreeSet::from([9]),
        ..before.clone()
    };
    assert!(target.restore(&hidden_past_count).is_err());

    let bad_config = AxisState {
        config: AxisConfig {
            default_size: 0,
            ..AxisConfig::default()
        },
        ..before.clone()
    };
    assert!(target.restore(&bad_config).is_err());

    assert_eq!(target.state(), before);
}
