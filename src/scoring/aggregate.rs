use crate::core::Scale;

/// Rounded mean of the responses, clamped into the scale first.
///
/// An empty slice yields the scale midpoint. The result is independent of
/// response order.
pub fn calculate_measure_score(responses: &[i32], scale: &Scale) -> u8 {
    if responses.is_empty() {
        return scale.midpoint();
    }

    let sum: i64 = responses
        .iter()
        .map(|&value| i64::from(scale.clamp(i64::from(value))))
        .sum();
    let mean = sum as f64 / responses.len() as f64;

    scale.clamp(mean.round() as i64)
}

/// Count of responses that fell outside the scale and will be clamped
pub fn count_out_of_range(responses: &[i32], scale: &Scale) -> usize {
    responses
        .iter()
        .filter(|&&value| !scale.contains(i64::from(value)))
        .count()
}
