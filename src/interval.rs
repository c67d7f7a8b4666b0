use crate::parameters::TARGET_RETENTION;

/// Days until `stability` decays to `request_retention`, rounded up and
/// clamped to `[1, maximum_interval]`.
pub fn next_interval(stability: f32, request_retention: f32, maximum_interval: u32) -> u32 {
    let maximum_interval = maximum_interval.max(1);
    let days = (stability * request_retention.ln() / TARGET_RETENTION.ln()).ceil();
    if days.is_nan() || days < 1.0 {
        return 1;
    }
    if days >= maximum_interval as f32 {
        return maximum_interval;
    }
    days as u32
}
