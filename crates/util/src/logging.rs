use serde::Deserialize;
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
	Trace,
	Debug,
	#[default]
	Info,
	Warn,
	Error,
}

impl Display for LogLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Trace => write!(f, "trace"),
			Self::Debug => write!(f, "debug"),
			Self::Info => write!(f, "info"),
			Self::Warn => write!(f, "warn"),
			Self::Error => write!(f, "error"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum LoggingPreset {
	#[default]
	Default,
	Verbose,
	Develop,
	Trace,
}

impl LoggingPreset {
	pub fn get_config(&self) -> LoggingConfig {
		match self {
			Self::Default => LoggingConfig {
				other: LogLevel::Warn,

				workbench: LogLevel::Info,
				pipeline: LogLevel::Info,
				group: LogLevel::Info,
				filters: LogLevel::Warn,
				console: LogLevel::Warn,
			},

			Self::Verbose => LoggingConfig {
				other: LogLevel::Warn,

				workbench: LogLevel::Debug,
				pipeline: LogLevel::Debug,
				group: LogLevel::Debug,
				filters: LogLevel::Warn,
				console: LogLevel::Info,
			},

			Self::Develop => LoggingConfig {
				other: LogLevel::Debug,

				workbench: LogLevel::Trace,
				pipeline: LogLevel::Trace,
				group: LogLevel::Debug,
				filters: LogLevel::Debug,
				console: LogLevel::Debug,
			},

			Self::Trace => LoggingConfig {
				other: LogLevel::Trace,

				workbench: LogLevel::Trace,
				pipeline: LogLevel::Trace,
				group: LogLevel::Trace,
				filters: LogLevel::Trace,
				console: LogLevel::Trace,
			},
		}
	}
}

/// Per-target log levels.
/// Build one with [`LoggingPreset::get_config`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
	other: LogLevel,

	workbench: LogLevel,
	pipeline: LogLevel,
	group: LogLevel,
	filters: LogLevel,
	console: LogLevel,
}

impl LoggingConfig {
	fn directives(&self) -> String {
		[
			// Non-configurable sources
			format!("tokio={}", LogLevel::Warn),
			//
			// Configurable sources
			//
			format!("workbench={}", self.workbench),
			format!("workbench_pipeline::group={}", self.group),
			format!("workbench_pipeline::worksheet={}", self.group),
			format!("workbench_pipeline={}", self.pipeline),
			// Catalogue implementations
			format!("workbench_basic={}", self.filters),
			format!("workbench_console={}", self.console),
			self.other.to_string(),
		]
		.join(",")
	}
}

impl From<LoggingConfig> for EnvFilter {
	fn from(value: LoggingConfig) -> Self {
		// Every directive above is well-formed,
		// so lossy parsing never drops anything.
		EnvFilter::builder().parse_lossy(value.directives())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tracing_subscriber::filter::LevelFilter;

	#[test]
	fn default_preset_is_default() {
		assert_eq!(LoggingPreset::default(), LoggingPreset::Default);
	}

	#[test]
	fn directives_name_every_crate() {
		let d = LoggingPreset::Verbose.get_config().directives();
		assert!(d.contains("workbench=debug"));
		assert!(d.contains("workbench_pipeline=debug"));
		assert!(d.contains("workbench_basic=warn"));
		assert!(d.contains("workbench_console=info"));
		assert!(d.ends_with(",warn"));
	}

	#[test]
	fn preset_sets_max_level() {
		let filter: EnvFilter = LoggingPreset::Trace.get_config().into();
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

		let filter: EnvFilter = LoggingPreset::Default.get_config().into();
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
	}
}
