use smartstring::{LazyCompact, SmartString};
use std::{error::Error, sync::Arc};
use thiserror::Error;

/// An error we encounter while producing, transforming,
/// or testing an item inside a pipeline
#[derive(Debug, Clone, Error)]
pub enum RunError {
	/// A generic I/O error
	#[error("i/o error")]
	IoError(#[from] Arc<std::io::Error>),

	/// A stage failed and told us why
	#[error("{message}")]
	Failed { message: String },

	/// An arbitrary error
	#[error("generic error")]
	Other(#[from] Arc<dyn Error + Sync + Send + 'static>),
}

impl RunError {
	pub fn failed(message: impl Into<String>) -> Self {
		Self::Failed {
			message: message.into(),
		}
	}
}

impl From<std::io::Error> for RunError {
	fn from(value: std::io::Error) -> Self {
		Self::IoError(Arc::new(value))
	}
}

/// An error we encounter while running a job
#[derive(Debug, Error)]
pub enum RunJobError {
	/// A pipeline job was run before it was given a source.
	/// This is returned before any data is pulled.
	#[error("pipeline job has no source")]
	NoSource,

	/// Something failed while the job was running
	#[error("error while running job")]
	Run(#[from] RunError),
}

/// An error we encounter while running a group.
/// Worksheets return this too, since a worksheet fails
/// exactly when one of its groups does.
#[derive(Debug, Error)]
pub enum RunGroupError {
	/// The job with index `job` failed. Jobs after it were not run.
	#[error("job {job} ({job_type}) in group `{group}` failed")]
	JobFailed {
		group: SmartString<LazyCompact>,
		job: usize,
		job_type: &'static str,
		#[source]
		error: RunJobError,
	},
}
