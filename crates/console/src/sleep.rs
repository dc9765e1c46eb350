use async_trait::async_trait;
use std::time::Duration;
use workbench_pipeline::{
	base::{Job, RunJobError},
	helpers::duration_from_secs,
};

/// Waits for a number of seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepJob {
	seconds: f64,
}

impl SleepJob {
	pub fn new(seconds: f64) -> Self {
		Self { seconds }
	}

	pub fn seconds(&self) -> f64 {
		self.seconds
	}

	pub fn set_seconds(&mut self, seconds: f64) {
		self.seconds = seconds;
	}

	/// How long this job waits.
	/// See [`duration_from_secs`] for how odd values are handled.
	pub fn duration(&self) -> Duration {
		duration_from_secs(self.seconds)
	}
}

#[async_trait]
impl Job for SleepJob {
	fn job_type(&self) -> &'static str {
		"Sleep"
	}

	async fn run(&self) -> Result<(), RunJobError> {
		tokio::time::sleep(self.duration()).await;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::NullJob;
	use tokio::time::Instant;
	use workbench_pipeline::Group;

	#[tokio::test(start_paused = true)]
	async fn sleeps_for_its_duration() {
		let start = Instant::now();
		SleepJob::new(2.0).run().await.unwrap();
		assert!(start.elapsed() >= Duration::from_secs(2));
	}

	#[test]
	fn bad_seconds_are_zero() {
		let mut job = SleepJob::default();
		assert_eq!(job.duration(), Duration::ZERO);
		job.set_seconds(-3.0);
		assert_eq!(job.seconds(), -3.0);
		assert_eq!(job.duration(), Duration::ZERO);
	}

	#[test]
	fn huge_seconds_wait_forever() {
		assert_eq!(SleepJob::new(1e20).duration(), Duration::MAX);
		assert_eq!(SleepJob::new(f64::INFINITY).duration(), Duration::MAX);
	}

	#[tokio::test(start_paused = true)]
	async fn huge_seconds_do_not_finish_early() {
		let job = SleepJob::new(1e20);
		let res = tokio::time::timeout(Duration::from_secs(3600), job.run()).await;
		assert!(res.is_err());
	}

	#[tokio::test(start_paused = true)]
	async fn group_waits_for_each_sleep() {
		let mut group = Group::with_name("sleepy");
		group.add_job(SleepJob::new(1.0));
		group.add_job(NullJob);
		group.add_job(SleepJob::new(0.5));

		let start = Instant::now();
		group.run().await.unwrap();
		assert!(start.elapsed() >= Duration::from_millis(1500));
	}
}
