use futures::{StreamExt, TryStreamExt};
use std::sync::{
	atomic::{AtomicUsize, Ordering},
	Arc,
};
use workbench_pipeline::{
	base::{ItemStream, PipelineData, RunError, Source},
	pipeline::PipelineJob,
};

/// Collect the output of a job's last filter
pub async fn collect<T: PipelineData>(job: &PipelineJob<T>) -> Result<Vec<T>, RunError> {
	job.stream().unwrap().try_collect().await
}

/// Wraps a source and counts how many items are pulled from it
pub struct Watched<S> {
	inner: S,
	pub pulled: Arc<AtomicUsize>,
}

impl<S> Watched<S> {
	pub fn new(inner: S) -> Self {
		Self {
			inner,
			pulled: Arc::new(AtomicUsize::new(0)),
		}
	}
}

impl<T: PipelineData, S: Source<T>> Source<T> for Watched<S> {
	fn produce(&self) -> ItemStream<'_, T> {
		self.inner
			.produce()
			.inspect(move |_| {
				self.pulled.fetch_add(1, Ordering::SeqCst);
			})
			.boxed()
	}
}
