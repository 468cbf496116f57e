//! Pure hexagon geometry extracted for testability.
//!
//! Everything here works on plain `Vec2` screen coordinates (y grows
//! downward) and is free of ECS state. The ratios are empirical values read
//! off hand-drawn dissection diagrams of a hexagon and of a honeycomb. They
//! approximate a regular hexagon closely enough to look right; they are not
//! trigonometry and must stay as they are, since the rendered shapes and the
//! ring spacing depend on them.

use bevy::prelude::Vec2;

use crate::error::HoneycombError;

/// Long leg : short leg (1:2).
pub const LONG_TO_SHORT: f32 = 1.0 / 2.0;
/// Long leg : short start (1:4).
pub const SHORT_START: f32 = 1.0 / 4.0;
/// Half width : short leg (0.864:1).
pub const HALF_WIDTH_FACTOR: f32 = 0.864;
/// Honeycomb span : cell size, measured as 220/128 on the honeycomb diagram.
pub const CELL_COMB_RATIO: f32 = 1.71875;

/// Vertices per hexagon.
pub const HEX_VERTS: usize = 6;
/// Cells per honeycomb: one per vertex of the ring plus the center.
pub const CELL_COUNT: usize = HEX_VERTS + 1;

/// `false` for the origin, which doubles as the "unset" point.
pub fn is_defined(point: Vec2) -> bool {
    point != Vec2::ZERO
}

/// Radius of the circle inscribed in a hexagon of the given size.
pub fn inscribed_radius(size: f32) -> f32 {
    (3.0_f32.sqrt() / 2.0) * (size / 2.0)
}

/// Vertices of a point-up hexagon, clockwise from the top.
///
/// Deltas are accumulated vertex to vertex using the ratio constants, so the
/// result is only an approximation of a regular hexagon.
pub fn derive_vertices(center: Vec2, size: f32) -> Result<[Vec2; HEX_VERTS], HoneycombError> {
    if size.is_nan() || size <= 0.0 || !is_defined(center) {
        return Err(HoneycombError::InvalidGeometry { size, center });
    }

    let dx = size * LONG_TO_SHORT * HALF_WIDTH_FACTOR;
    let short = size * SHORT_START;
    let long = size * LONG_TO_SHORT;

    let top = Vec2::new(center.x, center.y - size / 2.0);
    let top_right = top + Vec2::new(dx, short);
    let bottom_right = top_right + Vec2::new(0.0, long);
    let bottom = bottom_right + Vec2::new(-dx, short);
    let bottom_left = bottom + Vec2::new(-dx, -short);
    let top_left = bottom_left + Vec2::new(0.0, -long);

    Ok([top, top_right, bottom_right, bottom, bottom_left, top_left])
}

/// Hit test against the hexagon's inscribed circle.
///
/// Points in the corners outside that circle are rejected. The strict `<`
/// means a point exactly on the circle is outside.
pub fn point_in_hex(point: Vec2, center: Vec2, size: f32) -> bool {
    if !is_defined(point) {
        return false;
    }
    point.distance(center) < inscribed_radius(size)
}

/// Centers of the seven honeycomb cells: center, then the ring clockwise
/// from the right.
///
/// Same ratios as [`derive_vertices`] turned 90 degrees, so the walk moves
/// along x first where the vertex walk moves along y.
pub fn ring_positions(position: Vec2, cell_size: f32) -> [Vec2; CELL_COUNT] {
    let comb_size = cell_size * CELL_COMB_RATIO;
    let half_width = comb_size / 2.0;
    let step_y = comb_size * LONG_TO_SHORT * HALF_WIDTH_FACTOR;

    let right = position + Vec2::new(half_width, 0.0);
    let bottom_right = right + Vec2::new(-half_width / 2.0, step_y);
    let bottom_left = bottom_right + Vec2::new(-half_width, 0.0);
    let left = bottom_left + Vec2::new(-half_width / 2.0, -step_y);
    let top_left = left + Vec2::new(half_width / 2.0, -step_y);
    let top_right = top_left + Vec2::new(half_width, 0.0);

    [
        position,
        right,
        bottom_right,
        bottom_left,
        left,
        top_left,
        top_right,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn near(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    // ── derive_vertices ─────────────────────────────────────────────

    #[test]
    fn top_vertex_sits_half_a_size_above_center() {
        let v = derive_vertices(Vec2::new(50.0, 80.0), 40.0).unwrap();
        assert_eq!(v[0], Vec2::new(50.0, 60.0));
    }

    #[test]
    fn vertices_follow_literal_ratio_deltas() {
        let size = 100.0;
        let v = derive_vertices(Vec2::new(200.0, 200.0), size).unwrap();
        let dx = size * 0.5 * 0.864;
        let expected = [
            Vec2::new(200.0, 150.0),
            Vec2::new(200.0 + dx, 175.0),
            Vec2::new(200.0 + dx, 225.0),
            Vec2::new(200.0, 250.0),
            Vec2::new(200.0 - dx, 225.0),
            Vec2::new(200.0 - dx, 175.0),
        ];
        for (i, (got, want)) in v.iter().zip(expected).enumerate() {
            assert!(near(*got, want), "vertex {i}: got {got:?}, expected {want:?}");
        }
    }

    #[test]
    fn vertex_centroid_is_the_center() {
        for &(center, size) in &[
            (Vec2::new(384.0, 384.0), 256.0),
            (Vec2::new(-12.5, 7.0), 3.0),
            (Vec2::new(1.0, 0.0), 0.5),
        ] {
            let v = derive_vertices(center, size).unwrap();
            let centroid = v.iter().copied().sum::<Vec2>() / HEX_VERTS as f32;
            assert!(near(centroid, center), "centroid {centroid:?} vs {center:?}");
        }
    }

    #[test]
    fn hexagon_is_taller_than_wide() {
        let v = derive_vertices(Vec2::new(10.0, 10.0), 64.0).unwrap();
        let height = v[3].y - v[0].y;
        let width = v[1].x - v[5].x;
        assert!(height > width);
    }

    #[test]
    fn zero_or_negative_size_is_invalid() {
        let center = Vec2::new(5.0, 5.0);
        assert!(derive_vertices(center, 0.0).is_err());
        assert!(derive_vertices(center, -3.0).is_err());
        assert!(derive_vertices(center, f32::NAN).is_err());
    }

    #[test]
    fn origin_center_is_invalid() {
        let err = derive_vertices(Vec2::ZERO, 10.0).unwrap_err();
        assert_eq!(
            err,
            HoneycombError::InvalidGeometry {
                size: 10.0,
                center: Vec2::ZERO
            }
        );
    }

    // ── point_in_hex ────────────────────────────────────────────────

    #[test]
    fn center_is_always_inside() {
        for size in [0.1, 1.0, 256.0, 4096.0] {
            let c = Vec2::new(17.0, 33.0);
            assert!(point_in_hex(c, c, size), "size {size}");
        }
    }

    #[test]
    fn inside_just_below_inscribed_radius() {
        let c = Vec2::new(100.0, 100.0);
        let r = inscribed_radius(256.0);
        assert!(point_in_hex(c + Vec2::new(r - 0.01, 0.0), c, 256.0));
        assert!(point_in_hex(c + Vec2::new(0.0, -(r - 0.01)), c, 256.0));
    }

    #[test]
    fn outside_at_or_beyond_inscribed_radius() {
        let c = Vec2::new(100.0, 100.0);
        let r = inscribed_radius(256.0);
        assert!(!point_in_hex(c + Vec2::new(r + 0.01, 0.0), c, 256.0));
        assert!(!point_in_hex(c + Vec2::new(0.0, r * 2.0), c, 256.0));
    }

    #[test]
    fn corner_vertex_is_outside_hit_region() {
        let c = Vec2::new(100.0, 100.0);
        let v = derive_vertices(c, 256.0).unwrap();
        assert!(!point_in_hex(v[0], c, 256.0));
        assert!(!point_in_hex(v[1], c, 256.0));
    }

    #[test]
    fn undefined_point_is_never_inside() {
        assert!(!point_in_hex(Vec2::ZERO, Vec2::new(1.0, 1.0), 100.0));
    }

    #[test]
    fn zero_size_has_no_hit_region() {
        let c = Vec2::new(4.0, 4.0);
        assert!(!point_in_hex(c, c, 0.0));
    }

    // ── ring_positions ──────────────────────────────────────────────

    #[test]
    fn center_cell_stays_at_position() {
        let p = ring_positions(Vec2::new(100.0, 100.0), 256.0);
        assert_eq!(p[0], Vec2::new(100.0, 100.0));
    }

    #[test]
    fn right_cell_is_half_a_comb_away() {
        let p = ring_positions(Vec2::new(100.0, 100.0), 256.0);
        let expected_x = 100.0 + (256.0 * 1.71875) / 2.0;
        assert!((p[1].x - expected_x).abs() < EPS);
        assert!((p[1].y - 100.0).abs() < EPS);
    }

    #[test]
    fn ring_walks_clockwise_with_literal_steps() {
        let p = ring_positions(Vec2::new(100.0, 100.0), 256.0);
        // comb = 440, half = 220, step_y = 440 * 0.5 * 0.864
        let step_y = 190.08;
        let expected = [
            Vec2::new(100.0, 100.0),
            Vec2::new(320.0, 100.0),
            Vec2::new(210.0, 100.0 + step_y),
            Vec2::new(-10.0, 100.0 + step_y),
            Vec2::new(-120.0, 100.0),
            Vec2::new(-10.0, 100.0 - step_y),
            Vec2::new(210.0, 100.0 - step_y),
        ];
        for (i, (got, want)) in p.iter().zip(expected).enumerate() {
            assert!(near(*got, want), "cell {i}: got {got:?}, expected {want:?}");
        }
    }

    #[test]
    fn ring_is_point_symmetric_about_center() {
        let c = Vec2::new(384.0, 384.0);
        let p = ring_positions(c, 256.0);
        for (i, (cell, opposite)) in p[1..4].iter().zip(&p[4..]).enumerate() {
            assert!(near(*cell - c, c - *opposite), "ring pair {i}");
        }
    }
}
