use futures::{stream, StreamExt};
use workbench_pipeline::base::{ItemStream, Source};

/// A source that yields the integers `start..start + count`.
///
/// The end of the range saturates at [`i64::MAX`].
#[derive(Debug, Clone, Copy)]
pub struct NumbersSource {
	start: i64,
	count: u64,
}

impl NumbersSource {
	pub fn new(start: i64, count: u64) -> Self {
		Self { start, count }
	}

	pub fn start(&self) -> i64 {
		self.start
	}

	pub fn count(&self) -> u64 {
		self.count
	}

	fn end(&self) -> i64 {
		let count = i64::try_from(self.count).unwrap_or(i64::MAX);
		self.start.saturating_add(count)
	}
}

impl Source<i64> for NumbersSource {
	fn produce(&self) -> ItemStream<'_, i64> {
		stream::iter((self.start..self.end()).map(Ok)).boxed()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testutil::collect;
	use workbench_pipeline::pipeline::PipelineJob;

	#[tokio::test]
	async fn yields_the_range() {
		for (start, count) in [(0, 0), (0, 1), (0, 10), (7, 3), (-2, 5)] {
			let job = PipelineJob::with_source(NumbersSource::new(start, count));
			let expected: Vec<i64> = (start..start + count as i64).collect();
			assert_eq!(collect(&job).await.unwrap(), expected);
		}
	}

	#[tokio::test]
	async fn end_saturates() {
		let job = PipelineJob::with_source(NumbersSource::new(i64::MAX - 2, u64::MAX));
		assert_eq!(
			collect(&job).await.unwrap(),
			vec![i64::MAX - 2, i64::MAX - 1]
		);
	}

	#[tokio::test]
	async fn restarts_from_the_beginning() {
		let source = NumbersSource::new(3, 2);
		for _ in 0..2 {
			let out: Vec<_> = source.produce().collect().await;
			assert_eq!(out.len(), 2);
			assert_eq!(out[0].as_ref().unwrap(), &3);
		}
	}
}
