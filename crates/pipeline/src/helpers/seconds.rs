use std::time::Duration;

/// Convert a number of seconds into a [`Duration`].
///
/// Negative values and `NaN` become [`Duration::ZERO`].
/// Values too large to represent, including infinity,
/// become [`Duration::MAX`].
pub fn duration_from_secs(seconds: f64) -> Duration {
	if seconds.is_nan() || seconds <= 0.0 {
		return Duration::ZERO;
	}

	return Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
}
