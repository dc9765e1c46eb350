use std::time::Duration;
use workbench_pipeline::{
	base::{Filter, ItemStream, PipelineData, RunError},
	helpers::duration_from_secs,
};

use super::{streaming, Step};

/// Waits for a fixed duration before passing on each item
#[derive(Debug, Clone, Copy)]
pub struct SleepFilter {
	duration: Duration,
}

impl SleepFilter {
	pub fn new(duration: Duration) -> Self {
		Self { duration }
	}

	/// Negative values and `NaN` are treated as zero.
	/// Values too large for a [`Duration`] wait forever.
	pub fn from_secs_f64(seconds: f64) -> Self {
		Self::new(duration_from_secs(seconds))
	}

	pub fn duration(&self) -> Duration {
		self.duration
	}
}

impl<T: PipelineData> Filter<T> for SleepFilter {
	fn name(&self) -> &'static str {
		"Sleep"
	}

	fn apply<'a>(&'a self, input: ItemStream<'a, T>) -> ItemStream<'a, T> {
		let duration = self.duration;
		streaming(input, move |_, item| async move {
			tokio::time::sleep(duration).await;
			Ok::<_, RunError>(Step::Emit(item))
		})
	}
}
