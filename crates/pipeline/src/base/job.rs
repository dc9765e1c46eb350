use async_trait::async_trait;

use super::RunJobError;

/// A unit of work inside a [`crate::Group`]
#[async_trait]
pub trait Job: Send + Sync {
	/// Get this job's type, used in logs and errors
	fn job_type(&self) -> &'static str;

	/// Run this job to completion.
	async fn run(&self) -> Result<(), RunJobError>;
}
