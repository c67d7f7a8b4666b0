pub(crate) trait TestHelper {
    fn assert_approx_eq(&self, expected: Self);
}

impl TestHelper for f32 {
    #[track_caller]
    fn assert_approx_eq(&self, expected: Self) {
        let tolerance = 1e-4 * expected.abs().max(1.0);
        assert!(
            (self - expected).abs() <= tolerance,
            "{self} is not approximately {expected}"
        );
    }
}

impl<const N: usize> TestHelper for [f32; N] {
    #[track_caller]
    fn assert_approx_eq(&self, expected: Self) {
        for (actual, expected) in self.iter().zip(expected) {
            actual.assert_approx_eq(expected);
        }
    }
}
