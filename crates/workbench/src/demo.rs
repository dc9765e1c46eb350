use std::time::Duration;
use workbench_basic::{
	filters::{EchoFilter, LambdaFilter},
	sources::NumbersSource,
};
use workbench_console::EchoStdoutJob;
use workbench_pipeline::{pipeline::PipelineJob, Group, Worksheet};

use crate::config::WorkbenchConfig;

/// Build the demo pipeline:
/// read numbers, wait, add five, and print each result.
pub fn numbers_pipeline(config: &WorkbenchConfig) -> PipelineJob<i64> {
	let delay = Duration::from_millis(config.workbench_lambda_delay_ms);

	PipelineJob::with_source(NumbersSource::new(
		config.workbench_range_start,
		config.workbench_range_count,
	))
	.with_filter(LambdaFilter::from_async(move |x: i64| async move {
		tokio::time::sleep(delay).await;
		x.saturating_add(5)
	}))
	.with_filter(EchoFilter::stdout())
}

/// Build the demo worksheet, which has exactly one group.
pub fn worksheet(config: &WorkbenchConfig) -> Worksheet {
	let mut group = Group::with_name("demo");
	group.add_job(EchoStdoutJob::new("Hello"));
	group.add_job(numbers_pipeline(config));
	group.add_job(EchoStdoutJob::new("Goodbye"));

	return Worksheet::with_groups(vec![group]);
}

#[cfg(test)]
mod tests {
	use super::*;
	use workbench_pipeline::base::Job;

	fn config(delay_ms: u64) -> WorkbenchConfig {
		WorkbenchConfig {
			workbench_loglevel: Default::default(),
			workbench_range_start: 0,
			workbench_range_count: 10,
			workbench_lambda_delay_ms: delay_ms,
		}
	}

	#[test]
	fn demo_layout() {
		let sheet = worksheet(&config(0));
		assert_eq!(sheet.groups().len(), 1);

		let jobs = sheet.groups()[0].jobs();
		let types: Vec<_> = jobs.iter().map(|j| j.job_type()).collect();
		assert_eq!(types, vec!["EchoStdout", "Pipeline", "EchoStdout"]);
	}

	#[tokio::test(start_paused = true)]
	async fn pipeline_waits_for_each_item() {
		let job = numbers_pipeline(&config(500));
		let start = tokio::time::Instant::now();
		job.run().await.unwrap();
		assert!(start.elapsed() >= Duration::from_millis(5000));
	}
}
