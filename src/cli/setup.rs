//! Runtime setup for CLI commands.

use anyhow::{Context, Result};

/// Rayon worker stack size (4MB)
const RAYON_STACK_SIZE: usize = 4 * 1024 * 1024;

/// A dedicated pool for one batch run. `jobs == 0` uses all cores.
pub fn build_thread_pool(jobs: usize) -> Result<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new().stack_size(RAYON_STACK_SIZE);
    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }
    builder.build().context("Failed to build worker thread pool")
}
