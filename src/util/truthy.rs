//! Loose boolean decoding.
//!
//! The API encodes flags inconsistently (`"1"`, `"0"`, empty attributes or no
//! attribute at all), so flags are decoded by truthiness rather than validated.

/// Decodes a flag attribute.
///
/// Absent, empty and numerically zero values are false; any other number or
/// non-empty string is true, including `"false"`.
pub fn is_truthy(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };

    if value.is_empty() {
        return false;
    }

    match value.trim().parse::<f64>() {
        Ok(number) => number != 0.0 && !number.is_nan(),
        Err(_) => true,
    }
}
