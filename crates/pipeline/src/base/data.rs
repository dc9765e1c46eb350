use futures::stream::BoxStream;
use std::fmt::Debug;

use super::RunError;

/// An immutable bit of data inside a pipeline.
///
/// These should be easy to clone. [`PipelineData`]s that
/// carry something big should wrap it in an [`std::sync::Arc`].
///
/// Filters never modify the data they receive,
/// they emit new values instead.
pub trait PipelineData
where
	Self: Debug + Clone + Send + Sync + 'static,
{
}

impl<T> PipelineData for T where T: Debug + Clone + Send + Sync + 'static {}

/// A lazy, pull-driven sequence of [`PipelineData`].
///
/// An `Err` is always the last item of the stream that yields it.
pub type ItemStream<'a, T> = BoxStream<'a, Result<T, RunError>>;
