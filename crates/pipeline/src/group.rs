use smartstring::{LazyCompact, SmartString};
use tracing::{debug, trace, warn};

use crate::base::{Job, RunGroupError};

/// The name of a group that was never given one
pub const DEFAULT_GROUP_NAME: &str = "no name";

/// A named list of jobs that run one after another
pub struct Group {
	name: SmartString<LazyCompact>,
	jobs: Vec<Box<dyn Job>>,
}

impl Group {
	/// Create an empty group named [`DEFAULT_GROUP_NAME`]
	pub fn new() -> Self {
		Self::with_name(DEFAULT_GROUP_NAME)
	}

	/// Create an empty group
	pub fn with_name(name: &str) -> Self {
		Self {
			name: name.into(),
			jobs: Vec::new(),
		}
	}

	/// Create a group that runs `jobs` in order
	pub fn with_jobs(name: &str, jobs: Vec<Box<dyn Job>>) -> Self {
		Self {
			name: name.into(),
			jobs,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn set_name(&mut self, name: &str) {
		self.name = name.into();
	}

	pub fn jobs(&self) -> &[Box<dyn Job>] {
		&self.jobs
	}

	/// Add a job to the end of this group
	pub fn add_job(&mut self, job: impl Job + 'static) {
		self.jobs.push(Box::new(job));
	}

	/// Run every job in this group, in order.
	///
	/// Each job starts only after the previous one has finished.
	/// If a job fails, later jobs are not run.
	pub async fn run(&self) -> Result<(), RunGroupError> {
		debug!(message = "Starting group", group = ?self.name, n_jobs = self.jobs.len());

		for (idx, job) in self.jobs.iter().enumerate() {
			trace!(
				message = "Starting job",
				group = ?self.name,
				job = idx,
				job_type = job.job_type()
			);

			match job.run().await {
				Ok(()) => {}
				Err(error) => {
					warn!(
						message = "Job failed, stopping group",
						group = ?self.name,
						job = idx,
						job_type = job.job_type(),
						?error
					);

					return Err(RunGroupError::JobFailed {
						group: self.name.clone(),
						job: idx,
						job_type: job.job_type(),
						error,
					});
				}
			}
		}

		debug!(message = "Group finished", group = ?self.name);
		return Ok(());
	}
}
