use async_trait::async_trait;
use futures::{stream, StreamExt};
use std::{
	sync::{
		atomic::{AtomicUsize, Ordering},
		Arc, Mutex,
	},
	time::Duration,
};

use crate::base::{Filter, ItemStream, Job, RunError, RunJobError, Source};

/// Yields `0..n`, and counts how often it is used
pub struct CountingSource {
	n: i64,
	fail_at: Option<i64>,

	/// How many times `produce()` was called
	pub produced: AtomicUsize,

	/// How many items were pulled, across all streams
	pub pulled: AtomicUsize,
}

impl CountingSource {
	pub fn new(n: i64) -> Self {
		Self {
			n,
			fail_at: None,
			produced: AtomicUsize::new(0),
			pulled: AtomicUsize::new(0),
		}
	}

	/// Yield an error instead of item `fail_at`, and stop there
	pub fn failing_at(n: i64, fail_at: i64) -> Self {
		Self {
			fail_at: Some(fail_at),
			..Self::new(n)
		}
	}
}

impl Source<i64> for CountingSource {
	fn produce(&self) -> ItemStream<'_, i64> {
		self.produced.fetch_add(1, Ordering::SeqCst);
		let end = self.fail_at.map_or(self.n, |f| f + 1);

		stream::iter(0..end)
			.map(move |x| {
				self.pulled.fetch_add(1, Ordering::SeqCst);
				if Some(x) == self.fail_at {
					Err(RunError::failed("source failed"))
				} else {
					Ok(x)
				}
			})
			.boxed()
	}
}

/// Maps `x` to `x * mul + add`
pub struct AddFilter {
	add: i64,
	mul: i64,
}

impl AddFilter {
	pub fn new(add: i64) -> Self {
		Self { add, mul: 1 }
	}

	pub fn times(mul: i64) -> Self {
		Self { add: 0, mul }
	}
}

impl Filter<i64> for AddFilter {
	fn name(&self) -> &'static str {
		"Add"
	}

	fn apply<'a>(&'a self, input: ItemStream<'a, i64>) -> ItemStream<'a, i64> {
		input.map(move |x| x.map(|x| x * self.mul + self.add)).boxed()
	}
}

/// A shared log of job events
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Records when it starts and finishes, and yields in between
pub struct RecordJob {
	pub name: &'static str,
	pub log: CallLog,
}

#[async_trait]
impl Job for RecordJob {
	fn job_type(&self) -> &'static str {
		"Record"
	}

	async fn run(&self) -> Result<(), RunJobError> {
		self.log.lock().unwrap().push(format!("start {}", self.name));
		tokio::time::sleep(Duration::from_millis(5)).await;
		self.log.lock().unwrap().push(format!("end {}", self.name));
		Ok(())
	}
}

/// Always fails
pub struct FailJob;

#[async_trait]
impl Job for FailJob {
	fn job_type(&self) -> &'static str {
		"Fail"
	}

	async fn run(&self) -> Result<(), RunJobError> {
		Err(RunError::failed("job failed").into())
	}
}
