//! Common test utilities for axis integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use gridaxis::{Axis, AxisConfig, PixelHit, HEADER};

/// Axis with `count` positions of `default_size` and a `header_size` header.
pub fn axis(count: u32, default_size: u16, header_size: u16) -> Axis {
    Axis::with_config(AxisConfig {
        default_size,
        header_size,
        ..AxisConfig::default()
    })
    .expect("valid config")
    .with_count(count)
}

/// Data positions in view order.
pub fn order(axis: &Axis) -> Vec<u32> {
    (0..axis.count())
        .map(|v| axis.data_position(v).unwrap())
        .collect()
}

/// Check every geometry invariant the renderer relies on:
/// starts are non-decreasing, consecutive starts differ by the pixel size,
/// the end of the axis equals the total, and hit testing inverts starts.
pub fn assert_geometry_consistent(axis: &mut Axis) {
    let count = axis.count();
    let header = axis.pixel_size(HEADER).unwrap();
    assert_eq!(axis.pixel_start(0, 0).unwrap(), header, "body starts after header");

    let mut expected_total = header;
    for view in 0..count as i32 {
        let start = axis.pixel_start(view, 0).unwrap();
        let next = axis.pixel_start(view + 1, 0).unwrap();
        let size = axis.pixel_size(view).unwrap();
        assert!(start <= next, "starts decrease at {view}");
        assert_eq!(next - start, size, "start delta at {view}");
        expected_total += size;
    }
    assert_eq!(axis.total_pixels(), expected_total, "total pixels");
    assert_eq!(axis.pixel_start(count as i32, 0).unwrap(), expected_total);

    for pixel in 0..expected_total {
        match axis.position_at_pixel(pixel, 0) {
            PixelHit::Header => assert!(pixel < header, "header hit at {pixel}"),
            PixelHit::Cell(view) => {
                let view = view as i32;
                assert!(axis.pixel_start(view, 0).unwrap() <= pixel);
                assert!(pixel < axis.pixel_start(view + 1, 0).unwrap());
            }
            other => panic!("pixel {pixel} inside the axis hit {other:?}"),
        }
    }
    assert_eq!(axis.position_at_pixel(expected_total, 0), PixelHit::After);
    assert_eq!(axis.position_at_pixel(-1, 0), PixelHit::Before);
}
