use std::future::Future;
use workbench_pipeline::{
	base::{Filter, ItemStream, PipelineData, RunError},
	helpers::Predicate,
};

use super::{streaming, Step};

/// Emits every item that passes a predicate
#[derive(Debug, Clone)]
pub struct WhereFilter<T: PipelineData> {
	predicate: Predicate<T>,
}

impl<T: PipelineData> WhereFilter<T> {
	pub fn new(predicate: Predicate<T>) -> Self {
		Self { predicate }
	}

	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn(&T) -> bool + Send + Sync + 'static,
	{
		Self::new(Predicate::from_fn(f))
	}

	pub fn from_async<F, Fut>(f: F) -> Self
	where
		F: Fn(T) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = bool> + Send + 'static,
	{
		Self::new(Predicate::from_async(f))
	}

	pub fn try_from_fn<F>(f: F) -> Self
	where
		F: Fn(&T) -> Result<bool, RunError> + Send + Sync + 'static,
	{
		Self::new(Predicate::try_from_fn(f))
	}

	pub fn try_from_async<F, Fut>(f: F) -> Self
	where
		F: Fn(T) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<bool, RunError>> + Send + 'static,
	{
		Self::new(Predicate::try_from_async(f))
	}
}

impl<T: PipelineData> Filter<T> for WhereFilter<T> {
	fn name(&self) -> &'static str {
		"Where"
	}

	fn apply<'a>(&'a self, input: ItemStream<'a, T>) -> ItemStream<'a, T> {
		streaming(input, move |_, item| {
			let test = self.predicate.test(&item);
			async move {
				let step = if test.await? {
					Step::Emit(item)
				} else {
					Step::Skip
				};
				Ok::<_, RunError>(step)
			}
		})
	}
}
