use futures::{future, future::BoxFuture, FutureExt};
use std::{fmt::Debug, future::Future, sync::Arc};

use crate::base::{PipelineData, RunError};

type PredicateFn<T> = dyn Fn(&T) -> BoxFuture<'static, Result<bool, RunError>> + Send + Sync;

/// A test applied to each item by predicate filters.
///
/// Synchronous predicates borrow the item.
/// Asynchronous predicates get their own clone, since
/// the future they return may outlive the borrow.
pub struct Predicate<T> {
	f: Arc<PredicateFn<T>>,
}

impl<T> Clone for Predicate<T> {
	fn clone(&self) -> Self {
		Self { f: self.f.clone() }
	}
}

impl<T> Debug for Predicate<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Predicate")
	}
}

impl<T: PipelineData> Predicate<T> {
	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn(&T) -> bool + Send + Sync + 'static,
	{
		Self {
			f: Arc::new(move |x: &T| future::ready(Ok::<_, RunError>(f(x))).boxed()),
		}
	}

	pub fn try_from_fn<F>(f: F) -> Self
	where
		F: Fn(&T) -> Result<bool, RunError> + Send + Sync + 'static,
	{
		Self {
			f: Arc::new(move |x: &T| future::ready(f(x)).boxed()),
		}
	}

	pub fn from_async<F, Fut>(f: F) -> Self
	where
		F: Fn(T) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = bool> + Send + 'static,
	{
		Self {
			f: Arc::new(move |x: &T| f(x.clone()).map(Ok::<_, RunError>).boxed()),
		}
	}

	pub fn try_from_async<F, Fut>(f: F) -> Self
	where
		F: Fn(T) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<bool, RunError>> + Send + 'static,
	{
		Self {
			f: Arc::new(move |x: &T| f(x.clone()).boxed()),
		}
	}

	/// Test `value`.
	pub fn test(&self, value: &T) -> BoxFuture<'static, Result<bool, RunError>> {
		(self.f)(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn sync_and_async_agree() {
		let sync = Predicate::from_fn(|x: &i64| x % 2 == 0);
		let asy = Predicate::from_async(|x: i64| async move { x % 2 == 0 });

		for x in 0..6 {
			assert_eq!(sync.test(&x).await.unwrap(), asy.test(&x).await.unwrap());
		}
	}

	#[tokio::test]
	async fn async_predicate_owns_its_item() {
		let p = Predicate::from_async(|x: String| async move { x.len() > 2 });
		let fut = {
			let s = String::from("abcd");
			p.test(&s)
		};
		assert!(fut.await.unwrap());
	}

	#[tokio::test]
	async fn fallible_async_predicate() {
		let p = Predicate::try_from_async(|x: i64| async move {
			if x < 0 {
				Err(RunError::failed("negative"))
			} else {
				Ok(x > 10)
			}
		});

		assert!(!p.test(&3).await.unwrap());
		assert!(p.test(&11).await.unwrap());
		assert!(matches!(p.test(&-1).await, Err(RunError::Failed { message }) if message == "negative"));
	}
}
