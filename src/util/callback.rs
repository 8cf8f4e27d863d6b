//! Awaitable callbacks for component props.
//!
//! Leptos' `Callback` returns synchronously, but list/board renderers need to
//! await the owner's status update so they can clear per-item pending flags
//! once it settles. `AsyncCallback` wraps a closure that returns a local
//! future; it is cheap to clone and safe to capture in view closures.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type LocalFuture<T> = Pin<Box<dyn Future<Output = T>>>;

/// Shared `Fn(In) -> impl Future<Output = Out>`.
pub struct AsyncCallback<In, Out = ()>(Arc<dyn Fn(In) -> LocalFuture<Out> + Send + Sync>);

impl<In, Out> Clone for AsyncCallback<In, Out> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<In: 'static, Out: 'static> AsyncCallback<In, Out> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(In) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Out> + 'static,
    {
        Self(Arc::new(move |input| Box::pin(f(input))))
    }

    /// Invoke the callback and wait for it to settle.
    pub async fn call(&self, input: In) -> Out {
        (self.0)(input).await
    }
}
