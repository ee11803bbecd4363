//! Tests for the reconstruction pipeline driver

#[cfg(test)]
mod tests {
    use unshred::algorithm::executor::{
        ReconstructionConfig, Stage, reconstruct, reconstruct_with_observer,
    };
    use unshred::io::configuration::{DEFAULT_PROBE_DEPTH, DEFAULT_RANK_DEPTH};
    use unshred::io::error::{UnshredError, WidthFailure};
    use unshred::spatial::pixels::RgbGrid;

    const STRIP_WIDTH: usize = 8;

    // Linear color ramp over source columns, cut into strips of STRIP_WIDTH and
    // laid out so that position i shows source strip `layout[i]`
    fn shuffled_ramp(layout: &[usize], height: usize) -> RgbGrid {
        let layout = layout.to_vec();
        RgbGrid::from_fn(layout.len() * STRIP_WIDTH, height, move |x, y| {
            let source = layout.get(x / STRIP_WIDTH).copied().unwrap_or(0);
            let column = (source * STRIP_WIDTH + x % STRIP_WIDTH) as f64;
            [
                40.0 + 2.0 * column,
                60.0 + 5.0 * y as f64 + column,
                200.0 - 2.0 * column,
            ]
        })
    }

    // Tests default configuration mirrors the documented constants
    // Verified by swapping the probe and rank defaults
    #[test]
    fn test_default_config() {
        let config = ReconstructionConfig::default();
        assert_eq!(config.probe_depth, DEFAULT_PROBE_DEPTH);
        assert_eq!(config.rank_depth, DEFAULT_RANK_DEPTH);
        assert_eq!(config.strip_width, None);
        assert!(!config.strict);
    }

    // Tests the full pipeline restores a shuffled ramp
    // Verified by reversing the linearized order
    #[test]
    fn test_reconstruct_shuffled_ramp() {
        let image = shuffled_ramp(&[3, 0, 4, 1, 5, 2], 4);

        let result = reconstruct(&image, &ReconstructionConfig::default()).unwrap();

        assert_eq!(result.strip_width, STRIP_WIDTH);
        assert_eq!(result.order, vec![1, 3, 5, 0, 2, 4]);
        assert!(!result.is_degraded());
        assert_eq!(
            result.column_ranges().first().copied(),
            Some((8, 15)),
            "source strip 0 sits at position 1"
        );
        assert_eq!(result.ordered_strips().len(), 6);
        let estimate = result.width_estimate.unwrap();
        assert_eq!(estimate.width, STRIP_WIDTH);
        assert_eq!(estimate.probed.len(), DEFAULT_PROBE_DEPTH + 1);
    }

    // Tests a given strip width bypasses detection
    // Verified by running detection even with a fixed width
    #[test]
    fn test_fixed_width_skips_detection() {
        let image = shuffled_ramp(&[1, 0], 3);
        let config = ReconstructionConfig {
            strip_width: Some(STRIP_WIDTH),
            ..ReconstructionConfig::default()
        };

        let result = reconstruct(&image, &config).unwrap();

        assert!(result.width_estimate.is_none());
        assert_eq!(result.order, vec![1, 0]);
    }

    // Tests a zero strip width is rejected before any work
    // Verified by removing the validation call
    #[test]
    fn test_zero_width_rejected() {
        let image = shuffled_ramp(&[0, 1], 2);
        let config = ReconstructionConfig {
            strip_width: Some(0),
            ..ReconstructionConfig::default()
        };

        let result = reconstruct(&image, &config);

        assert!(matches!(
            result,
            Err(UnshredError::InvalidParameter {
                parameter: "strip_width",
                ..
            })
        ));
    }

    // Tests the observer sees every stage once, in order
    // Verified by skipping the ranking notification
    #[test]
    fn test_observer_receives_stages_in_order() {
        let image = shuffled_ramp(&[3, 0, 4, 1, 5, 2], 2);
        let mut seen = Vec::new();

        reconstruct_with_observer(&image, &ReconstructionConfig::default(), |stage| {
            seen.push(stage);
        })
        .unwrap();

        assert_eq!(seen, Stage::ALL.to_vec());
        assert!(
            seen.iter()
                .enumerate()
                .all(|(position, stage)| stage.index() == position)
        );
        assert_eq!(Stage::Ranking.to_string(), "ranking");
    }

    // Tests strict mode turns broken cycles into an error
    // Verified by ignoring the strict flag
    #[test]
    fn test_strict_rejects_degraded_order() {
        // A ramp that wraps around: the last strip continues into the first,
        // so every strip finds a left neighbor and the links form one cycle
        let wrap = |x: usize, y: usize| {
            let phase = (x % 24) as f64;
            let tent = if phase < 12.0 { phase } else { 24.0 - phase };
            [60.0 + 10.0 * tent, 90.0 + y as f64, 150.0 - 5.0 * tent]
        };
        let layout = [2usize, 0, 1];
        let image = RgbGrid::from_fn(24, 2, move |x, y| {
            let source = layout.get(x / STRIP_WIDTH).copied().unwrap_or(0);
            wrap(source * STRIP_WIDTH + x % STRIP_WIDTH, y)
        });
        let lenient = ReconstructionConfig {
            strip_width: Some(STRIP_WIDTH),
            ..ReconstructionConfig::default()
        };
        let strict = ReconstructionConfig {
            strict: true,
            ..lenient
        };

        let degraded = reconstruct(&image, &lenient).unwrap();
        assert!(degraded.is_degraded());
        assert_eq!(degraded.order.len(), 3);

        assert!(matches!(
            reconstruct(&image, &strict),
            Err(UnshredError::DegradedReconstruction { cycles: 1 })
        ));
    }

    // Tests failures surface from detection instead of panicking
    // Verified by defaulting the width to 1 on failure
    #[test]
    fn test_uniform_image_fails_width_detection() {
        let image = RgbGrid::from_fn(20, 3, |_, _| [120.0, 80.0, 40.0]);

        let result = reconstruct(&image, &ReconstructionConfig::default());

        assert!(matches!(
            result,
            Err(UnshredError::WidthDetectionFailed {
                reason: WidthFailure::DegenerateDivisor { divisor: 1, .. }
            })
        ));
    }
}
