use super::{ItemStream, PipelineData};

/// An object that consumes one stream and produces another
pub trait Filter<T: PipelineData>: Send + Sync {
	/// Get this filter's name
	fn name(&self) -> &'static str;

	/// Wrap `input` in this filter.
	///
	/// - The returned stream must not pull from `input` until it is polled itself.
	/// - Items that are emitted keep their relative input order.
	/// - When `input` yields an `Err`, that error is emitted and the output ends.
	fn apply<'a>(&'a self, input: ItemStream<'a, T>) -> ItemStream<'a, T>;
}
