use futures::{future, stream, StreamExt};
use tracing::trace;

use crate::base::{Filter, ItemStream, PipelineData, Source};

/// One source and the ordered filters that consume it.
///
/// Filters are applied left to right: `filters[0]` reads from the source,
/// `filters[1]` reads from `filters[0]`, and so on.
pub struct PipelineStages<'a, T: PipelineData> {
	source: &'a dyn Source<T>,
	filters: &'a [Box<dyn Filter<T>>],
}

impl<'a, T: PipelineData> PipelineStages<'a, T> {
	pub fn new(source: &'a dyn Source<T>, filters: &'a [Box<dyn Filter<T>>]) -> Self {
		Self { source, filters }
	}

	/// The number of filters in this chain
	pub fn n_filters(&self) -> usize {
		self.filters.len()
	}

	/// Chain all stages into one stream.
	///
	/// The chain is built when the returned stream is first polled,
	/// so neither the source nor any filter runs before that.
	pub fn compose(self) -> ItemStream<'a, T> {
		let Self { source, filters } = self;

		let build = future::lazy(move |_| {
			trace!(message = "Building pipeline", n_filters = filters.len());

			let mut chain = source.produce();
			for (idx, filter) in filters.iter().enumerate() {
				trace!(message = "Adding stage", idx, filter = filter.name());
				chain = filter.apply(chain);
			}

			chain
		});

		return stream::once(build).flatten().boxed();
	}
}
