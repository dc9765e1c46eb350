use futures::TryFutureExt;
use std::future::Future;
use workbench_pipeline::{
	base::{Filter, ItemStream, PipelineData, RunError},
	helpers::Transform,
};

use super::{streaming, Step};

/// Maps each item to exactly one new item
#[derive(Debug, Clone)]
pub struct LambdaFilter<T: PipelineData> {
	transform: Transform<T, T>,
}

impl<T: PipelineData> LambdaFilter<T> {
	pub fn new(transform: Transform<T, T>) -> Self {
		Self { transform }
	}

	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn(T) -> T + Send + Sync + 'static,
	{
		Self::new(Transform::from_fn(f))
	}

	pub fn from_async<F, Fut>(f: F) -> Self
	where
		F: Fn(T) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = T> + Send + 'static,
	{
		Self::new(Transform::from_async(f))
	}

	pub fn try_from_fn<F>(f: F) -> Self
	where
		F: Fn(T) -> Result<T, RunError> + Send + Sync + 'static,
	{
		Self::new(Transform::try_from_fn(f))
	}

	pub fn try_from_async<F, Fut>(f: F) -> Self
	where
		F: Fn(T) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<T, RunError>> + Send + 'static,
	{
		Self::new(Transform::try_from_async(f))
	}
}

impl<T: PipelineData> Filter<T> for LambdaFilter<T> {
	fn name(&self) -> &'static str {
		"Lambda"
	}

	fn apply<'a>(&'a self, input: ItemStream<'a, T>) -> ItemStream<'a, T> {
		streaming(input, move |_, item| {
			self.transform.call(item).map_ok(Step::Emit)
		})
	}
}
