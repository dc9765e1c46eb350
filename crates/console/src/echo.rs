use async_trait::async_trait;
use smartstring::{LazyCompact, SmartString};
use std::io::{self, Write};
use tracing::trace;
use workbench_pipeline::base::{Job, RunError, RunJobError};

/// The message an echo job prints if it isn't given one
pub const DEFAULT_MESSAGE: &str = "no message";

/// Writes one line to standard output
#[derive(Debug, Clone)]
pub struct EchoStdoutJob {
	message: SmartString<LazyCompact>,
}

/// Writes one line to standard error
#[derive(Debug, Clone)]
pub struct EchoStderrJob {
	message: SmartString<LazyCompact>,
}

macro_rules! echo_job {
	($job:ident, $job_type:literal, $stream:path) => {
		impl $job {
			pub fn new(message: &str) -> Self {
				Self {
					message: message.into(),
				}
			}

			pub fn message(&self) -> &str {
				&self.message
			}

			pub fn set_message(&mut self, message: &str) {
				self.message = message.into();
			}
		}

		impl Default for $job {
			fn default() -> Self {
				Self::new(DEFAULT_MESSAGE)
			}
		}

		#[async_trait]
		impl Job for $job {
			fn job_type(&self) -> &'static str {
				$job_type
			}

			async fn run(&self) -> Result<(), RunJobError> {
				trace!(message = "Echoing", job_type = $job_type, text = ?self.message);
				writeln!($stream().lock(), "{}", self.message).map_err(RunError::from)?;
				Ok(())
			}
		}
	};
}

echo_job!(EchoStdoutJob, "EchoStdout", io::stdout);
echo_job!(EchoStderrJob, "EchoStderr", io::stderr);
