//! Scoped worker pool for a per-call thread count.

use crate::engine::error::EngineError;

/// Runs `f` inside a dedicated rayon pool of `threads` workers. A count of
/// 0 runs on the global pool (or inline without the `parallel` feature).
#[cfg(feature = "parallel")]
pub fn with_pool<R: Send>(
    threads: usize,
    f: impl FnOnce() -> R + Send,
) -> Result<R, EngineError> {
    if threads == 0 {
        return Ok(f());
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
    Ok(pool.install(f))
}

#[cfg(not(feature = "parallel"))]
pub fn with_pool<R>(_threads: usize, f: impl FnOnce() -> R) -> Result<R, EngineError> {
    Ok(f())
}
