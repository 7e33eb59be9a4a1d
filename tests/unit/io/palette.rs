//! Tests for stride color assignment

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use brickbond::algorithm::scheduler::{Schedule, StrideScheduler};
    use brickbond::io::configuration::BUILT_COLOR;
    use brickbond::io::palette::{StridePalette, stride_color};
    use brickbond::spatial::brick::StrideId;
    use brickbond::spatial::tiling::Tiling;
    use brickbond::spatial::wall::{BondKind, WallSpec};

    fn schedule(stride: Option<(f64, f64)>) -> Schedule {
        let Ok(spec) = WallSpec::new(2000.0, 2300.0, 210.0, 100.0, 50.0, 10.0, 12.5, BondKind::Stretcher)
        else {
            panic!("default wall should validate");
        };
        let Ok(mut tiling) = Tiling::build(&spec, 42) else {
            panic!("tiling should generate");
        };
        let scheduler = match stride {
            Some((width, height)) => StrideScheduler::new(&spec, width, height).ok(),
            None => Some(StrideScheduler::whole_wall(&spec)),
        };
        let Some(Ok(schedule)) = scheduler.map(|s| s.schedule(&mut tiling)) else {
            panic!("schedule should complete");
        };
        schedule
    }

    // Tests the qualitative maps are used in order
    // Verified by starting with Dark2
    #[test]
    fn test_qualitative_sequence() {
        assert_eq!(stride_color(0), [0x66, 0xc2, 0xa5, 0xff]);
        assert_eq!(stride_color(8), [0x1b, 0x9e, 0x77, 0xff]);
        assert_eq!(stride_color(27), [0xff, 0xed, 0x6f, 0xff]);
    }

    // Tests colors beyond the qualitative maps are generated and distinct
    // Verified by repeating the last qualitative color
    #[test]
    fn test_generated_colors() {
        assert_eq!(stride_color(28), [217, 76, 76, 0xff]);
        let generated: HashSet<_> = (28..60).map(stride_color).collect();
        assert_eq!(generated.len(), 32);
    }

    // Tests a single stride is drawn in the built color
    // Verified by using the first qualitative color for one stride
    #[test]
    fn test_single_stride_uses_built_color() {
        let palette = StridePalette::for_schedule(&schedule(None));
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.color(StrideId::new(0, 0)), Some(BUILT_COLOR));
    }

    // Tests strides are colored row by row
    // Verified by coloring strides in (sx, sy) order
    #[test]
    fn test_strides_colored_row_by_row() {
        let schedule = schedule(Some((800.0, 500.0)));
        let palette = StridePalette::for_schedule(&schedule);
        assert_eq!(palette.len(), schedule.stride_count());
        assert_eq!(palette.color(StrideId::new(0, 0)), Some(stride_color(0)));
        assert_eq!(palette.color(StrideId::new(1, 0)), Some(stride_color(1)));
        assert_eq!(palette.color(StrideId::new(99, 99)), None);
        assert!(!palette.is_empty());
    }
}
