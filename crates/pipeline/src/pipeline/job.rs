use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, trace};

use super::PipelineStages;
use crate::base::{Filter, ItemStream, Job, PipelineData, RunJobError, Source};

/// A job that pulls data from a source through a list of filters.
///
/// Items that come out of the last filter are discarded;
/// this job exists for the side effects of its filters.
pub struct PipelineJob<T: PipelineData> {
	source: Option<Box<dyn Source<T>>>,
	filters: Vec<Box<dyn Filter<T>>>,
}

impl<T: PipelineData> PipelineJob<T> {
	/// Create a job with no source and no filters
	pub fn new() -> Self {
		Self {
			source: None,
			filters: Vec::new(),
		}
	}

	/// Create a job that reads from `source`
	pub fn with_source(source: impl Source<T> + 'static) -> Self {
		Self {
			source: Some(Box::new(source)),
			filters: Vec::new(),
		}
	}

	/// Add a filter to the end of this job's chain
	pub fn with_filter(mut self, filter: impl Filter<T> + 'static) -> Self {
		self.add_filter(filter);
		return self;
	}

	/// Add a filter to the end of this job's chain
	pub fn add_filter(&mut self, filter: impl Filter<T> + 'static) {
		self.filters.push(Box::new(filter));
	}

	pub fn filters(&self) -> &[Box<dyn Filter<T>>] {
		&self.filters
	}

	pub fn source(&self) -> Option<&dyn Source<T>> {
		self.source.as_deref()
	}

	/// Replace this job's source
	pub fn set_source(&mut self, source: impl Source<T> + 'static) {
		self.source = Some(Box::new(source));
	}

	/// Remove this job's source and return it
	pub fn take_source(&mut self) -> Option<Box<dyn Source<T>>> {
		self.source.take()
	}

	/// Get this job's stages.
	/// Fails if no source has been set.
	pub fn stages(&self) -> Result<PipelineStages<'_, T>, RunJobError> {
		let source = self.source.as_deref().ok_or(RunJobError::NoSource)?;
		return Ok(PipelineStages::new(source, &self.filters));
	}

	/// Get the output of this job's last filter, without draining it.
	pub fn stream(&self) -> Result<ItemStream<'_, T>, RunJobError> {
		return Ok(self.stages()?.compose());
	}
}

#[async_trait]
impl<T: PipelineData> Job for PipelineJob<T> {
	fn job_type(&self) -> &'static str {
		"Pipeline"
	}

	async fn run(&self) -> Result<(), RunJobError> {
		let mut stream = self.stream()?;
		debug!(message = "Running pipeline", n_filters = self.filters.len());

		let mut n_items: usize = 0;
		while let Some(item) = stream.next().await {
			match item {
				Ok(item) => {
					trace!(message = "Discarding item", ?item);
					n_items += 1;
				}
				Err(error) => {
					debug!(message = "Pipeline failed", n_items, ?error);
					return Err(error.into());
				}
			}
		}

		debug!(message = "Pipeline drained", n_items);
		return Ok(());
	}
}
