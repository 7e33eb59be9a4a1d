//! Tests for wild bond rows and the repeating-pattern guard

#[cfg(test)]
mod tests {
    use brickbond::algorithm::wild::repeats_pattern;
    use brickbond::io::configuration::{
        WILD_MAX_CONSECUTIVE_FULL, WILD_MAX_CONSECUTIVE_HALF, WILD_PATTERN_LIMIT,
        WILD_PATTERN_LOOKAHEAD,
    };
    use brickbond::math::tolerance::{approx_eq, approx_le};
    use brickbond::spatial::brick::BrickKind;
    use brickbond::spatial::tiling::Tiling;
    use brickbond::spatial::wall::{BondKind, WallSpec};

    fn spec(bond: BondKind) -> WallSpec {
        let Ok(spec) = WallSpec::new(2000.0, 2300.0, 210.0, 100.0, 50.0, 10.0, 12.5, bond) else {
            panic!("default wall should validate");
        };
        spec
    }

    // Tests the same seed reproduces the same wall and another seed differs
    // Verified by seeding from entropy
    #[test]
    fn test_seed_determinism() {
        let spec = spec(BondKind::Wild);
        let first = Tiling::build(&spec, 42).map(|t| t.bricks().to_vec()).ok();
        let second = Tiling::build(&spec, 42).map(|t| t.bricks().to_vec()).ok();
        let other = Tiling::build(&spec, 43).map(|t| t.bricks().to_vec()).ok();
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    // Tests even courses start with the quarter stagger and odd ones do not
    // Verified by staggering odd courses
    #[test]
    fn test_quarter_stagger_on_even_courses() {
        let Ok(tiling) = Tiling::build(&spec(BondKind::Wild), 42) else {
            panic!("wild tiling should generate");
        };
        for course in 0..tiling.course_count() {
            let first = tiling.course(course).next().map(|(_, brick)| brick.kind());
            if course % 2 == 0 {
                assert_eq!(first, Some(BrickKind::Quarter), "course {course}");
            } else {
                assert_ne!(first, Some(BrickKind::Quarter), "course {course}");
            }
        }
    }

    // Tests runs of full bricks never exceed five
    // Verified by raising the full brick limit
    #[test]
    fn test_full_brick_runs_bounded() {
        for seed in 0..8 {
            let Ok(tiling) = Tiling::build(&spec(BondKind::Wild), seed) else {
                panic!("wild tiling should generate");
            };
            for course in 0..tiling.course_count() {
                let mut run = 0;
                for (_, brick) in tiling.course(course) {
                    run = if brick.kind() == BrickKind::Stretcher { run + 1 } else { 0 };
                    assert!(run <= 5, "seed {seed} course {course}");
                }
            }
        }
    }

    // Tests a half brick is never followed by a half brick before the closer
    // Verified by removing the consecutive half limit
    #[test]
    fn test_no_consecutive_halves_before_closer() {
        let Ok(tiling) = Tiling::build(&spec(BondKind::Wild), 42) else {
            panic!("wild tiling should generate");
        };
        for course in 0..tiling.course_count() {
            let bricks: Vec<_> = tiling.course(course).map(|(_, brick)| brick).collect();
            for pair in bricks.windows(2) {
                if let [left, right] = pair {
                    // Closers within half + joint + quarter of the edge are cut to fit
                    if right.x() > 2300.0 - 155.0 - 1e-6 {
                        continue;
                    }
                    let both_half = left.kind() == BrickKind::Half && right.kind() == BrickKind::Half;
                    assert!(!both_half, "course {course} at {}", right.x());
                }
            }
        }
    }

    // Tests stretcher bond joints read as falling teeth
    // Verified by requiring a zero offset at odd depths
    #[test]
    fn test_stretcher_joints_form_teeth() {
        let Ok(tiling) = Tiling::build(&spec(BondKind::Stretcher), 0) else {
            panic!("stretcher tiling should generate");
        };
        // Joints two courses apart line up exactly in stretcher bond
        assert!(repeats_pattern(&tiling, 20, 1200.0, 4, 6));
        // Nothing beneath the bottom course
        assert!(!repeats_pattern(&tiling, 31, 1200.0, 4, 6));
        // A joint landing mid-brick breaks the sequence at once
        assert!(!repeats_pattern(&tiling, 20, 1100.0, 4, 6));
    }

    // Tests no free choice in a guarded course completes a repeating joint pattern
    // that the alternative unit would have avoided
    // Verified by skipping the guard when drawing a unit
    #[test]
    fn test_guard_avoids_repeating_patterns() {
        let spec = spec(BondKind::Wild);
        let (full, half, quarter) = (spec.brick_length(), spec.half_length(), spec.quarter_length());
        let closers = [quarter, half, half + spec.head_joint() + quarter];
        let mut free_choices = 0;

        for seed in 0..20 {
            let Ok(tiling) = Tiling::build(&spec, seed) else {
                panic!("wild tiling should generate");
            };
            let repeats = |course, edge| {
                repeats_pattern(&tiling, course, edge, WILD_PATTERN_LIMIT, WILD_PATTERN_LOOKAHEAD)
            };

            for course in (0..spec.courses()).filter(|c| c + WILD_PATTERN_LIMIT < spec.courses()) {
                let (mut run_full, mut run_half) = (0, 0);
                for (_, brick) in tiling.course(course) {
                    let remaining = spec.width() - brick.x();
                    let (chosen, other) = match brick.kind() {
                        BrickKind::Stretcher => (full, half),
                        BrickKind::Half => (half, full),
                        _ => continue,
                    };
                    if closers.iter().any(|&closer| approx_eq(remaining, closer)) {
                        break;
                    }
                    let full_fits = run_full < WILD_MAX_CONSECUTIVE_FULL && approx_le(full, remaining);
                    let half_fits = run_half < WILD_MAX_CONSECUTIVE_HALF && approx_le(half, remaining);
                    if full_fits && half_fits {
                        free_choices += 1;
                        assert!(
                            !repeats(course, brick.x() + chosen) || repeats(course, brick.x() + other),
                            "seed {seed} course {course} at {}",
                            brick.x()
                        );
                    }
                    if brick.kind() == BrickKind::Stretcher {
                        (run_full, run_half) = (run_full + 1, 0);
                    } else {
                        (run_full, run_half) = (0, run_half + 1);
                    }
                }
            }
        }
        assert!(free_choices > 0);
    }
}
