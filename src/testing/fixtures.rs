/// Field readings (g), bait included.
pub const FIELD_SAMPLE: [f64; 9] = [35.0, 67.0, 23.7, 12.0, 40.0, 40.0, 41.0, 35.0, 41.90];

/// `FIELD_SAMPLE` with the 0.2 g bait removed.
pub const FIELD_SAMPLE_CORRECTED: [f64; 9] =
    [34.8, 66.8, 23.5, 11.8, 39.8, 39.8, 40.8, 34.8, 41.70];

/// Legacy-filter estimate for `FIELD_SAMPLE`: (34.8 + 39.8) / 2.
pub const FIELD_SAMPLE_LEGACY_WEIGHT: f64 = 37.3;

#[track_caller]
pub fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-9, "got={got}, want={want}");
}
