use futures::{stream, StreamExt};
use std::future::Future;
use workbench_pipeline::base::{ItemStream, PipelineData, RunError};

mod echo;
pub use echo::*;

mod lambda;
pub use lambda::*;

mod reverse;
pub use reverse::*;

mod select;
pub use select::*;

mod sleep;
pub use sleep::*;

mod takeuntil;
pub use takeuntil::*;

mod takewhile;
pub use takewhile::*;

mod where_;
pub use where_::*;

/// What a streaming filter does with one input item
enum Step<T> {
	/// Emit this value
	Emit(T),

	/// Drop this item and pull the next one
	Skip,

	/// Drop this item and end the output
	Stop,
}

/// Build the output of a streaming filter.
///
/// `step` is called with each input item and its zero-based position,
/// one item at a time. The next item is pulled only after `step`
/// has resolved and its result has been emitted.
///
/// An `Err` from `input` or from `step` is emitted and ends the output.
fn streaming<'a, T, F, Fut>(input: ItemStream<'a, T>, step: F) -> ItemStream<'a, T>
where
	T: PipelineData,
	F: Fn(usize, T) -> Fut + Send + 'a,
	Fut: Future<Output = Result<Step<T>, RunError>> + Send + 'a,
{
	stream::unfold(Some((input, 0usize, step)), |state| async move {
		let (mut input, mut idx, step) = state?;

		loop {
			let item = match input.next().await? {
				Ok(item) => item,
				Err(error) => return Some((Err(error), None)),
			};

			let this_idx = idx;
			idx += 1;

			match step(this_idx, item).await {
				Ok(Step::Emit(out)) => return Some((Ok(out), Some((input, idx, step)))),
				Ok(Step::Skip) => continue,
				Ok(Step::Stop) => return None,
				Err(error) => return Some((Err(error), None)),
			}
		}
	})
	.boxed()
}
