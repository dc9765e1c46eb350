use futures::{stream, StreamExt};
use std::marker::PhantomData;
use workbench_pipeline::base::{ItemStream, PipelineData, Source};

/// A source that yields nothing
pub struct EmptySource<T: PipelineData> {
	_data: PhantomData<T>,
}

impl<T: PipelineData> EmptySource<T> {
	pub fn new() -> Self {
		Self { _data: PhantomData }
	}
}

impl<T: PipelineData> Source<T> for EmptySource<T> {
	fn produce(&self) -> ItemStream<'_, T> {
		stream::empty().boxed()
	}
}
