use futures::{future, future::BoxFuture, FutureExt};
use std::{fmt::Debug, future::Future, sync::Arc};

use crate::base::RunError;

type TransformFn<I, O> = dyn Fn(I) -> BoxFuture<'static, Result<O, RunError>> + Send + Sync;

/// A function that turns an `I` into an `O`.
///
/// Every constructor produces the same asynchronous contract,
/// so filters never need to know which kind they were given.
pub struct Transform<I, O> {
	f: Arc<TransformFn<I, O>>,
}

impl<I, O> Clone for Transform<I, O> {
	fn clone(&self) -> Self {
		Self { f: self.f.clone() }
	}
}

impl<I, O> Debug for Transform<I, O> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Transform")
	}
}

impl<I: Send + 'static, O: Send + 'static> Transform<I, O> {
	/// Wrap a synchronous function
	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn(I) -> O + Send + Sync + 'static,
	{
		Self {
			f: Arc::new(move |x: I| future::ready(Ok::<_, RunError>(f(x))).boxed()),
		}
	}

	/// Wrap a synchronous function that may fail
	pub fn try_from_fn<F>(f: F) -> Self
	where
		F: Fn(I) -> Result<O, RunError> + Send + Sync + 'static,
	{
		Self {
			f: Arc::new(move |x: I| future::ready(f(x)).boxed()),
		}
	}

	/// Wrap an asynchronous function
	pub fn from_async<F, Fut>(f: F) -> Self
	where
		F: Fn(I) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = O> + Send + 'static,
	{
		Self {
			f: Arc::new(move |x: I| f(x).map(Ok::<_, RunError>).boxed()),
		}
	}

	/// Wrap an asynchronous function that may fail
	pub fn try_from_async<F, Fut>(f: F) -> Self
	where
		F: Fn(I) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<O, RunError>> + Send + 'static,
	{
		Self {
			f: Arc::new(move |x: I| f(x).boxed()),
		}
	}

	/// Apply this transform to `input`.
	/// Nothing runs until the returned future is polled.
	pub fn call(&self, input: I) -> BoxFuture<'static, Result<O, RunError>> {
		(self.f)(input)
	}
}
