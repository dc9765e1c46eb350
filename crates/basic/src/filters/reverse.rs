use futures::{stream, StreamExt};
use tracing::trace;
use workbench_pipeline::base::{Filter, ItemStream, PipelineData};

/// Emits its whole input in reverse order.
///
/// This filter must drain its input before it can emit anything,
/// and thus never finishes on an infinite source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseFilter;

enum ReverseState<'a, T> {
	Draining(ItemStream<'a, T>),
	Emitting(Vec<T>),
	Done,
}

impl<T: PipelineData> Filter<T> for ReverseFilter {
	fn name(&self) -> &'static str {
		"Reverse"
	}

	fn apply<'a>(&'a self, input: ItemStream<'a, T>) -> ItemStream<'a, T> {
		stream::unfold(ReverseState::Draining(input), |state| async move {
			let mut items = match state {
				ReverseState::Done => return None,
				ReverseState::Emitting(items) => items,
				ReverseState::Draining(mut input) => {
					let mut items = Vec::new();
					while let Some(item) = input.next().await {
						match item {
							Ok(item) => items.push(item),
							Err(error) => return Some((Err(error), ReverseState::Done)),
						}
					}
					trace!(message = "Drained input", n_items = items.len());
					items
				}
			};

			// Popping from the back gives us reverse order
			let item = items.pop()?;
			Some((Ok(item), ReverseState::Emitting(items)))
		})
		.boxed()
	}
}
