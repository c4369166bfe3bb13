//! Chunked concurrent processing.

use std::future::Future;

use futures_util::future::try_join_all;
use tracing::{debug, warn};

/// Run `f` over `items` in chunks of `threads` futures at a time.
///
/// Each chunk is awaited in full before the next one starts, so at most
/// `threads` futures are in flight but a free slot is not refilled early.
/// Results keep input order. The first error aborts the run; unfinished
/// futures of that chunk are dropped. `threads == 0` is treated as 1.
pub async fn parallel<T, R, E, F, Fut>(items: Vec<T>, f: F, threads: usize) -> Result<Vec<R>, E>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let threads = if threads == 0 {
        warn!("parallel called with zero threads, using 1");
        1
    } else {
        threads
    };

    let total = items.len();
    let mut results = Vec::with_capacity(total);
    let mut items = items.into_iter().peekable();
    let mut chunk_index = 0usize;

    while items.peek().is_some() {
        let chunk: Vec<Fut> = items.by_ref().take(threads).map(&f).collect();
        debug!(chunk = chunk_index, size = chunk.len(), total, "parallel chunk started");
        results.extend(try_join_all(chunk).await?);
        chunk_index += 1;
    }

    Ok(results)
}
