#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::types::{Sample, Series};
    use crate::{impute, impute_batch};

    fn series(samples: &[Option<f64>]) -> Series {
        Series::new(samples.iter().map(|s| Sample::from(*s)).collect())
    }

    fn check(input: &[Option<f64>], expected: &[Option<f64>]) {
        let result = impute(&series(input));
        assert_eq!(
            series(expected),
            result,
            "unexpected impute result for input={:?}",
            input
        );
    }

    #[test]
    fn test_empty_series() {
        check(&[], &[]);
    }

    #[test]
    fn test_no_anchors_left_unchanged() {
        check(&[None], &[None]);
        check(&[None, None], &[None, None]);
        check(&[None, None, None, None], &[None, None, None, None]);
    }

    #[test]
    fn test_fully_known_left_unchanged() {
        check(&[Some(1.0)], &[Some(1.0)]);
        check(&[Some(1.0), Some(-2.5)], &[Some(1.0), Some(-2.5)]);
    }

    #[test_case(&[Some(5.0)], &[Some(5.0)] ; "single anchor")]
    #[test_case(&[None, Some(5.0)], &[Some(5.0), Some(5.0)] ; "leading gap")]
    #[test_case(&[None, None, Some(5.0)], &[Some(5.0), Some(5.0), Some(5.0)] ; "long leading gap")]
    #[test_case(&[Some(5.0), None], &[Some(5.0), Some(5.0)] ; "trailing gap")]
    #[test_case(&[None, Some(5.0), None, None], &[Some(5.0), Some(5.0), Some(5.0), Some(5.0)] ; "both edges")]
    fn test_flat_extension(input: &[Option<f64>], expected: &[Option<f64>]) {
        check(input, expected);
    }

    #[test]
    fn test_single_anchor_is_constant_everywhere() {
        check(
            &[None, None, Some(7.5), None, None, None],
            &[Some(7.5), Some(7.5), Some(7.5), Some(7.5), Some(7.5), Some(7.5)],
        );
    }

    #[test]
    fn test_interior_interpolation() {
        check(&[Some(1.0), None, Some(3.0)], &[Some(1.0), Some(2.0), Some(3.0)]);
        check(
            &[Some(1.0), None, None, Some(4.0)],
            &[Some(1.0), Some(2.0), Some(3.0), Some(4.0)],
        );
    }

    #[test]
    fn test_interpolation_then_trailing_fill() {
        check(
            &[Some(2.0), None, Some(8.0), None, None],
            &[Some(2.0), Some(5.0), Some(8.0), Some(8.0), Some(8.0)],
        );
    }

    #[test]
    fn test_descending_anchors() {
        check(
            &[Some(4.0), None, None, None, Some(0.0)],
            &[Some(4.0), Some(3.0), Some(2.0), Some(1.0), Some(0.0)],
        );
    }

    #[test]
    fn test_multiple_gaps_use_one_step_per_pair() {
        check(
            &[None, Some(0.0), None, Some(10.0), None, None, Some(1.0), None],
            &[
                Some(0.0),
                Some(0.0),
                Some(5.0),
                Some(10.0),
                Some(7.0),
                Some(4.0),
                Some(1.0),
                Some(1.0),
            ],
        );
    }

    #[test]
    fn test_integer_anchors_produce_fractional_values() {
        check(
            &[Some(1.0), None, Some(2.0)],
            &[Some(1.0), Some(1.5), Some(2.0)],
        );
    }

    #[test]
    fn test_known_values_survive_bit_exact() {
        let input = series(&[
            Some(0.1),
            None,
            Some(1.0 / 3.0),
            None,
            None,
            Some(-7.25),
            None,
        ]);
        let result = impute(&input);
        assert_eq!(result.len(), input.len());
        for (i, sample) in input.samples.iter().enumerate() {
            if let Sample::Value(v) = sample {
                assert_eq!(
                    Some(*v),
                    result.samples[i].value(),
                    "known value at position {} was rewritten",
                    i
                );
            }
        }
    }

    #[test]
    fn test_no_missing_remains_with_at_least_one_anchor() {
        let inputs: &[&[Option<f64>]] = &[
            &[Some(5.0)],
            &[None, Some(5.0)],
            &[Some(5.0), None],
            &[None, Some(1.0), None, None, Some(2.0), None],
            &[Some(0.0), None, None, None, None, None, Some(-3.0)],
        ];
        for input in inputs {
            let result = impute(&series(input));
            assert_eq!(
                result.missing_count(),
                0,
                "gaps left unfilled for input={:?}: {:?}",
                input,
                result
            );
        }
    }

    #[test]
    fn test_batch_preserves_order_and_independence() {
        let a = series(&[Some(1.0), None, Some(3.0)]);
        let b = series(&[None, None]);
        let c = series(&[]);
        let d = series(&[None, Some(2.0)]);

        let batch = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        let result = impute_batch(&batch);

        assert_eq!(
            result,
            vec![impute(&a), impute(&b), impute(&c), impute(&d)],
            "batch result differs from per-series impute"
        );
    }

    #[test]
    fn test_batch_of_empty_batch() {
        assert_eq!(impute_batch(&[]), Vec::<Series>::new());
    }
}
