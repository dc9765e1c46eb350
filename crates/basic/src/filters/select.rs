use futures::TryFutureExt;
use workbench_pipeline::{
	base::{Filter, ItemStream, PipelineData},
	helpers::Transform,
};

use super::{streaming, Step};

/// Maps each item to exactly one new item, like [`super::LambdaFilter`].
///
/// The only difference is the projection's argument: it receives
/// `(position, item)`, where `position` is the zero-based index of the
/// item among those entering this filter (not among those the source
/// produced). Use [`super::LambdaFilter`] when the position is not needed.
#[derive(Debug, Clone)]
pub struct SelectFilter<T: PipelineData> {
	projection: Transform<(usize, T), T>,
}

impl<T: PipelineData> SelectFilter<T> {
	pub fn new(projection: Transform<(usize, T), T>) -> Self {
		Self { projection }
	}

	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn(usize, T) -> T + Send + Sync + 'static,
	{
		Self::new(Transform::from_fn(move |(idx, item): (usize, T)| f(idx, item)))
	}
}

impl<T: PipelineData> Filter<T> for SelectFilter<T> {
	fn name(&self) -> &'static str {
		"Select"
	}

	fn apply<'a>(&'a self, input: ItemStream<'a, T>) -> ItemStream<'a, T> {
		streaming(input, move |idx, item| {
			self.projection.call((idx, item)).map_ok(Step::Emit)
		})
	}
}
