use async_trait::async_trait;
use workbench_pipeline::base::{Job, RunJobError};

/// A job that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullJob;

#[async_trait]
impl Job for NullJob {
	fn job_type(&self) -> &'static str {
		"Null"
	}

	async fn run(&self) -> Result<(), RunJobError> {
		Ok(())
	}
}
