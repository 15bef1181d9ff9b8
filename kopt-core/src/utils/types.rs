/// Alias to a scalar floating type used for coordinates and lengths.
pub type Float = f64;

/// Compares floats treating NaN as the greatest value.
pub fn compare_floats(a: Float, b: Float) -> std::cmp::Ordering {
    a.total_cmp(&b)
}
