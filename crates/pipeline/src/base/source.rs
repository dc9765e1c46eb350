use super::{ItemStream, PipelineData};

/// Something that provides the data a pipeline consumes.
pub trait Source<T: PipelineData>: Send + Sync {
	/// Start a new sequence from the beginning.
	///
	/// Every call returns a stream that is independent of all others.
	/// The returned stream must not do any work until it is polled.
	///
	/// A source that cannot produce data should yield an `Err`
	/// instead of panicking.
	fn produce(&self) -> ItemStream<'_, T>;
}
