//! Sequential future draining and async composition.

use std::future::Future;

use futures_util::future::{BoxFuture, FutureExt};
use tracing::trace;

/// Await `steps` strictly one after another, collecting results in order.
///
/// The first `Err` is returned as-is and the remaining steps are never
/// polled. Because futures are lazy, an iterator that builds each future on
/// demand (e.g. `.map(|id| fetch(id))`) also defers the *creation* of every
/// step until the previous one finished.
pub async fn async_sequentializer<I, Fut, T, E>(steps: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    let steps = steps.into_iter();
    let mut results = Vec::with_capacity(steps.size_hint().0);
    for (index, step) in steps.enumerate() {
        trace!(index, "sequentializer step");
        results.push(step.await?);
    }
    Ok(results)
}

type Stage<T> = Box<dyn Fn(T) -> BoxFuture<'static, T> + Send + Sync>;

/// Left-to-right composition of sync and async stages over one value type.
pub struct AsyncPipe<T> {
    stages: Vec<Stage<T>>,
}

/// Start an empty [`AsyncPipe`].
///
/// ```
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let sum = koolkit::task::pipe_async_functions::<i32>()
///     .map(|x| x + 1)
///     .then(|x| async move { x + 2 })
///     .map(|x| x + 3);
/// assert_eq!(sum.run(5).await, 11);
/// # });
/// ```
pub fn pipe_async_functions<T: Send + 'static>() -> AsyncPipe<T> {
    AsyncPipe { stages: Vec::new() }
}

impl<T: Send + 'static> AsyncPipe<T> {
    /// Append a synchronous stage.
    pub fn map<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.stages.push(Box::new(move |x: T| {
            let out = f(x);
            async move { out }.boxed()
        }));
        self
    }

    /// Append an async stage.
    pub fn then<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.stages.push(Box::new(move |x: T| f(x).boxed()));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Feed `input` through every stage in order.
    pub async fn run(&self, input: T) -> T {
        let mut value = input;
        for stage in &self.stages {
            value = stage(value).await;
        }
        value
    }
}
