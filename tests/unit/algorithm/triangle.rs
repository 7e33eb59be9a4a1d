//! Tests for corner pyramid collection and edge detection

#[cfg(test)]
mod tests {
    use brickbond::algorithm::triangle::{collect_triangle, flush_edge};
    use brickbond::spatial::support::Side;
    use brickbond::spatial::tiling::Tiling;
    use brickbond::spatial::wall::{BondKind, WallSpec};

    fn stretcher_tiling() -> Tiling {
        let Ok(spec) = WallSpec::new(2000.0, 2300.0, 210.0, 100.0, 50.0, 10.0, 12.5, BondKind::Stretcher)
        else {
            panic!("default wall should validate");
        };
        let Ok(tiling) = Tiling::build(&spec, 0) else {
            panic!("stretcher tiling should generate");
        };
        tiling
    }

    fn x_of(tiling: &Tiling, id: Option<usize>) -> Option<f64> {
        id.and_then(|id| tiling.brick(id)).map(|brick| brick.x())
    }

    // Tests the left pyramid narrows course by course toward the edge
    // Verified by keeping the full stride span on every course
    #[test]
    fn test_left_pyramid() {
        let tiling = stretcher_tiling();
        let triangle = collect_triangle(&tiling, Side::Left, 800.0, 500.0);

        // 3 + 3 + 2 + 2 + 1 + 1 bricks over six courses
        assert_eq!(triangle.members().count(), 12);
        assert_eq!(triangle.edge(), Side::Left);
        assert_eq!(triangle.lowest(), Some(0));
        assert_eq!(x_of(&tiling, triangle.shoulder()), Some(440.0));
        let apex = triangle.apex().and_then(|id| tiling.brick(id));
        assert_eq!(apex.map(|brick| brick.course()), Some(26));
    }

    // Tests the right pyramid mirrors the left one from the right edge
    // Verified by scanning the right edge left to right
    #[test]
    fn test_right_pyramid() {
        let tiling = stretcher_tiling();
        let triangle = collect_triangle(&tiling, Side::Right, 800.0, 500.0);

        // 4 + 3 + 3 + 2 + 2 + 1 + 1 bricks over seven courses
        assert_eq!(triangle.members().count(), 16);
        assert_eq!(x_of(&tiling, triangle.lowest()), Some(2200.0));
        assert_eq!(x_of(&tiling, triangle.shoulder()), Some(1540.0));
        let apex = triangle.apex().and_then(|id| tiling.brick(id));
        assert_eq!(apex.map(|brick| (brick.course(), brick.x())), Some((25, 2200.0)));
    }

    // Tests pyramid depth is capped by the stride height
    // Verified by ignoring the course limit
    #[test]
    fn test_pyramid_depth_limited_by_stride_height() {
        let tiling = stretcher_tiling();
        let triangle = collect_triangle(&tiling, Side::Left, 800.0, 125.0);
        assert_eq!(triangle.members().count(), 6);
        let apex = triangle.apex().and_then(|id| tiling.brick(id));
        assert_eq!(apex.map(|brick| brick.course()), Some(30));
    }

    // Tests edge detection for flush and inner bricks
    // Verified by comparing against the brick start only
    #[test]
    fn test_flush_edge() {
        let tiling = stretcher_tiling();
        let edges: Vec<_> = tiling
            .course(31)
            .map(|(_, brick)| flush_edge(&tiling, brick))
            .collect();
        assert_eq!(edges.first(), Some(&Some(Side::Left)));
        assert_eq!(edges.last(), Some(&Some(Side::Right)));
        assert!(edges.iter().skip(1).take(9).all(Option::is_none));
    }
}
