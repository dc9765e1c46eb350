use futures::{stream, StreamExt};
use workbench_pipeline::base::{ItemStream, PipelineData, Source};

/// A source that replays a fixed list of values.
/// Each value is cloned as it is pulled.
#[derive(Debug, Clone)]
pub struct ValuesSource<T: PipelineData> {
	values: Vec<T>,
}

impl<T: PipelineData> ValuesSource<T> {
	pub fn new(values: Vec<T>) -> Self {
		Self { values }
	}

	pub fn values(&self) -> &[T] {
		&self.values
	}
}

impl<T: PipelineData> FromIterator<T> for ValuesSource<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<T: PipelineData> Source<T> for ValuesSource<T> {
	fn produce(&self) -> ItemStream<'_, T> {
		stream::iter(self.values.iter().cloned().map(Ok)).boxed()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil::collect;
	use workbench_pipeline::pipeline::PipelineJob;

	#[tokio::test]
	async fn replays_values_in_order() {
		let words = ["a", "b", "c"].map(String::from);
		let job = PipelineJob::with_source(words.iter().cloned().collect::<ValuesSource<_>>());

		assert_eq!(collect(&job).await.unwrap(), words);
		assert_eq!(collect(&job).await.unwrap(), words);
	}
}
