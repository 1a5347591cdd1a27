//! Hue arithmetic and the 36 base-hue buckets.

/// Number of base-hue buckets around the circle.
pub const BUCKET_COUNT: usize = 36;

/// Degrees between neighbouring bucket hues.
pub const BUCKET_STEP: f32 = 10.0;

/// Named hues shown above the strip.
pub const HUE_NAMES: [(f32, &str); 6] = [
    (0.0, "red"),
    (60.0, "yellow"),
    (120.0, "green"),
    (180.0, "cyan"),
    (240.0, "blue"),
    (300.0, "magenta"),
];

/// Wrap any hue into `[0, 360)`.
pub fn normalize_hue(hue: f32) -> f32 {
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Nearest integer degree in `0..360`.
pub fn hue_degree(hue: f32) -> u16 {
    (normalize_hue(hue).round() as u16) % 360
}

/// Shortest angular distance between two hues, in `[0, 180]`.
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = normalize_hue(a - b);
    d.min(360.0 - d)
}

/// Bucket whose hue is nearest to `hue`.
pub fn bucket_index_of(hue: f32) -> usize {
    let index = (normalize_hue(hue) / BUCKET_STEP).round() as usize % BUCKET_COUNT;
    debug_assert!(index < BUCKET_COUNT);
    index
}

/// Base hue of bucket `index`.
pub fn hue_of_bucket(index: usize) -> f32 {
    debug_assert!(index < BUCKET_COUNT, "bucket index {index} out of range");
    index as f32 * BUCKET_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_mapping_is_a_bijection() {
        for i in 0..BUCKET_COUNT {
            assert_eq!(bucket_index_of(hue_of_bucket(i)), i);
        }
    }

    #[test]
    fn bucket_index_rounds_and_wraps() {
        assert_eq!(bucket_index_of(4.9), 0);
        assert_eq!(bucket_index_of(5.1), 1);
        assert_eq!(bucket_index_of(356.0), 0);
        assert_eq!(bucket_index_of(-10.0), 35);
        assert_eq!(bucket_index_of(725.0 + 0.5), 1);
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(450.0), 90.0);
        assert!(normalize_hue(-1e-9) < 360.0);
    }

    #[test]
    fn hue_degree_rounds() {
        assert_eq!(hue_degree(359.6), 0);
        assert_eq!(hue_degree(12.4), 12);
        assert_eq!(hue_degree(-0.4), 0);
    }

    #[test]
    fn hue_distance_is_circular() {
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }
}
