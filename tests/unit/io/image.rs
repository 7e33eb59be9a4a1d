//! Tests for wall rasterization and PNG export

#[cfg(test)]
mod tests {
    use brickbond::WallError;
    use brickbond::algorithm::scheduler::StrideScheduler;
    use brickbond::io::configuration::{BACKGROUND_COLOR, BUILT_COLOR, MORTAR_COLOR};
    use brickbond::io::image::{Cell, WallRaster, export_plan_png};
    use brickbond::io::palette::StridePalette;
    use brickbond::spatial::brick::StrideId;
    use brickbond::spatial::tiling::Tiling;
    use brickbond::spatial::wall::{BondKind, WallSpec};
    use image::Rgba;

    fn tiling() -> Tiling {
        let Ok(spec) = WallSpec::new(2000.0, 2300.0, 210.0, 100.0, 50.0, 10.0, 12.5, BondKind::Stretcher)
        else {
            panic!("default wall should validate");
        };
        let Ok(tiling) = Tiling::build(&spec, 42) else {
            panic!("tiling should generate");
        };
        tiling
    }

    // Tests raster size follows the scale
    // Verified by truncating instead of rounding pixel sizes
    #[test]
    fn test_raster_dimensions() {
        let tiling = tiling();
        let Ok(raster) = WallRaster::new(tiling.spec(), 0.4) else {
            panic!("raster should be created");
        };
        assert_eq!(raster.dimensions(), (920, 800));
        assert_eq!(raster.cell(0, 0), Some(Cell::Background));
        assert_eq!(raster.cell(920, 0), None);
    }

    // Tests non-positive scales are rejected
    // Verified by removing the scale check
    #[test]
    fn test_rejects_bad_scale() {
        let tiling = tiling();
        assert!(matches!(
            WallRaster::new(tiling.spec(), 0.0),
            Err(WallError::InvalidDimension { parameter: "scale", .. })
        ));
        assert!(WallRaster::new(tiling.spec(), 0.0001).is_err());
    }

    // Tests bricks are filled with an outline and bed joints stay empty
    // Verified by painting the outline with the fill label
    #[test]
    fn test_unbuilt_bricks_outlined() {
        let tiling = tiling();
        let Ok(raster) = WallRaster::unbuilt(&tiling, 0.4) else {
            panic!("raster should be created");
        };
        // Bottom-left brick covers columns 0..84 and rows 775..795
        assert_eq!(raster.cell(10, 785), Some(Cell::Unbuilt));
        assert_eq!(raster.cell(0, 785), Some(Cell::Mortar));
        assert_eq!(raster.cell(10, 775), Some(Cell::Mortar));
        assert_eq!(raster.cell(10, 798), Some(Cell::Background));
    }

    // Tests scheduled bricks carry their stride and map to palette colors
    // Verified by painting every brick unbuilt
    #[test]
    fn test_scheduled_raster_colors() {
        let mut tiling = tiling();
        let Ok(schedule) = StrideScheduler::whole_wall(tiling.spec()).schedule(&mut tiling) else {
            panic!("schedule should complete");
        };
        let Ok(raster) = WallRaster::scheduled(&tiling, 0.4) else {
            panic!("raster should be created");
        };
        assert_eq!(raster.cell(10, 785), Some(Cell::Built(StrideId::new(0, 0))));

        let image = raster.to_image(&StridePalette::for_schedule(&schedule));
        assert_eq!(image.get_pixel(10, 785), &Rgba(BUILT_COLOR));
        assert_eq!(image.get_pixel(0, 785), &Rgba(MORTAR_COLOR));
        assert_eq!(image.get_pixel(10, 798), &Rgba(BACKGROUND_COLOR));
    }

    // Tests PNG export creates missing directories and writes a readable image
    // Verified by disabling the parent directory creation
    #[test]
    fn test_export_plan_png() {
        let mut tiling = tiling();
        let Ok(schedule) = StrideScheduler::whole_wall(tiling.spec()).schedule(&mut tiling) else {
            panic!("schedule should complete");
        };
        let Ok(dir) = tempfile::tempdir() else {
            panic!("temporary directory should be created");
        };
        let path = dir.path().join("nested").join("plan.png");

        let palette = StridePalette::for_schedule(&schedule);
        assert!(export_plan_png(&tiling, &palette, 0.2, &path).is_ok());

        let Ok(decoded) = image::open(&path) else {
            panic!("exported PNG should decode");
        };
        assert_eq!((decoded.width(), decoded.height()), (460, 400));
    }
}
