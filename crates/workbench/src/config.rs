use serde::Deserialize;
use workbench_util::logging::LoggingPreset;

/// Note that the field of this struct are not capitalized.
/// Envy is case-insensitive, and expects Rust fields to be snake_case.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkbenchConfig {
	/// The logging level to run with
	#[serde(default)]
	pub workbench_loglevel: LoggingPreset,

	/// The first number the demo pipeline reads
	#[serde(default)]
	pub workbench_range_start: i64,

	/// How many numbers the demo pipeline reads
	#[serde(default = "WorkbenchConfig::default_range_count")]
	pub workbench_range_count: u64,

	/// How long the demo pipeline's transform waits
	/// before producing each item, in milliseconds
	#[serde(default = "WorkbenchConfig::default_lambda_delay_ms")]
	pub workbench_lambda_delay_ms: u64,
}

impl WorkbenchConfig {
	fn default_range_count() -> u64 {
		10
	}

	fn default_lambda_delay_ms() -> u64 {
		500
	}
}
