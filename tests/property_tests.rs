//! Property tests for the axis invariants.
//!
//! Random operation sequences are replayed against an axis and the geometry
//! and mapping invariants are checked afterwards.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_wrap
)]

mod common;

use common::{assert_geometry_consistent, axis, order};
use gridaxis::layout::IndexMapping;
use gridaxis::Axis;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Reorder(Vec<u32>, u32),
    Resize(u32, u16),
    Clear(u32),
    Hide(u32),
    Unhide(u32),
    Header(u16),
    Zoom(Option<u8>),
    Count(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (prop::collection::vec(0_u32..40, 1..4), 0_u32..41).prop_map(|(s, i)| Op::Reorder(s, i)),
        (0_u32..40, 0_u16..60).prop_map(|(p, s)| Op::Resize(p, s)),
        (0_u32..40).prop_map(Op::Clear),
        (0_u32..40).prop_map(Op::Hide),
        (0_u32..40).prop_map(Op::Unhide),
        (0_u16..30).prop_map(Op::Header),
        prop::option::of(1_u8..8).prop_map(Op::Zoom),
        (0_u32..40).prop_map(Op::Count),
    ]
}

/// Apply an op, skipping positions that are out of range for the current count.
fn apply(axis: &mut Axis, op: &Op) {
    let count = axis.count();
    match op {
        Op::Reorder(sources, insert) => {
            let sources: Vec<u32> = sources.iter().copied().filter(|&s| s < count).collect();
            if !sources.is_empty() && *insert <= count {
                axis.reorder(&sources, *insert).unwrap();
            }
        }
        Op::Resize(p, size) if *p < count => axis.set_index_size(*p as i32, i32::from(*size)).unwrap(),
        Op::Clear(p) if *p < count => axis.clear_index_size(*p).unwrap(),
        Op::Hide(p) if *p < count => {
            axis.hide(&[*p]).unwrap();
        }
        Op::Unhide(p) if *p < count => {
            axis.unhide(&[*p]).unwrap();
        }
        Op::Header(size) => axis.set_header_size(i32::from(*size)).unwrap(),
        Op::Zoom(quarter) => axis
            .notify_zoom_changed(quarter.map(|q| f64::from(q) * 0.25))
            .unwrap(),
        Op::Count(new) => axis.notify_count_changed(count, *new),
        _ => {}
    }
}

proptest! {
    #[test]
    fn geometry_stays_consistent(ops in prop::collection::vec(op(), 0..25)) {
        let mut axis = axis(20, 12, 8);
        for op in &ops {
            apply(&mut axis, op);
            // Touch the cache mid-sequence so later ops must invalidate it.
            let _ = axis.pixel_start(axis.count() as i32 / 2, 0).unwrap();
        }
        assert_geometry_consistent(&mut axis);
    }

    #[test]
    fn reorders_keep_a_bijection(moves in prop::collection::vec(
        (prop::collection::vec(0_u32..30, 1..5), 0_u32..31), 0..12)
    ) {
        let mut axis = axis(30, 10, 0);
        for (sources, insert) in &moves {
            axis.reorder(sources, *insert).unwrap();
        }
        let mut seen = order(&axis);
        for view in 0..30 {
            let data = axis.data_position(view).unwrap();
            prop_assert_eq!(axis.view_position(data).unwrap(), view);
        }
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..30).collect::<Vec<_>>());
    }

    #[test]
    fn equal_orders_hash_equal(moves in prop::collection::vec(
        (prop::collection::vec(0_u32..16, 1..4), 0_u32..17), 0..8)
    ) {
        let mut mapping = IndexMapping::new();
        for (sources, insert) in &moves {
            let mut sources = sources.clone();
            sources.sort_unstable();
            sources.dedup();
            mapping.reorder(&sources, *insert);
        }
        let rebuilt = IndexMapping::from_order(&mapping.order(16)).unwrap();
        prop_assert_eq!(rebuilt.identity_hash(), mapping.identity_hash());
        prop_assert_eq!(&rebuilt, &mapping);
    }

    #[test]
    fn hide_unhide_restores_nominal_size(size in prop::option::of(0_u16..500), p in 0_u32..10) {
        let mut axis = axis(10, 25, 0);
        if let Some(size) = size {
            axis.set_index_size(p as i32, i32::from(size)).unwrap();
        }
        let before = axis.nominal_size(p).unwrap();
        axis.hide(&[p]).unwrap();
        axis.unhide(&[p]).unwrap();
        prop_assert_eq!(axis.nominal_size(p).unwrap(), before);
    }
}
