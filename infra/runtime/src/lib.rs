//! # Runtime
//!
//! Standardized [Tokio](https://tokio.rs) runtime configurations for the client
//! applications.
//!
//! ## Profiles
//! * **Event loop**: A single-threaded cooperative runtime. All form logic runs on
//!   one loop; the outbound HTTP call and timers are the only suspension points.
//! * **Multi thread**: A work-stealing scheduler for hosts that embed the client
//!   next to other workloads.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[nwatch_runtime::main(event_loop)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use nwatch_derive::main;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// The default number of worker threads if detection fails.
const DEFAULT_WORKER_THREADS: usize = 2;
/// Upper bound for worker threads.
const MAX_WORKER_THREADS: usize = 64;
/// How long an idle blocking thread stays alive.
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(30);

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

/// Detects the number of worker threads from `TOKIO_WORKER_THREADS` or the hardware.
fn detect_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0 && n <= MAX_WORKER_THREADS)
            .unwrap_or_else(|| {
                available_parallelism()
                    .map(std::num::NonZero::get)
                    .unwrap_or(DEFAULT_WORKER_THREADS)
                    .min(MAX_WORKER_THREADS)
            })
    })
}

/// Scheduler flavor of a runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Everything runs on the thread that calls `block_on`.
    CurrentThread,
    /// Work-stealing scheduler with `worker_threads` workers.
    MultiThread { worker_threads: usize },
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub flavor: Flavor,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::event_loop()
    }
}

impl RuntimeConfig {
    /// Preset for interactive front-ends: one cooperative event loop.
    #[must_use = "Use this configuration for single-threaded front-ends"]
    pub fn event_loop() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            thread_name: "nwatch-loop".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    /// Preset for embedding hosts that want a thread pool.
    #[must_use = "Use this configuration for multithreaded hosts"]
    pub fn multi_thread() -> Self {
        Self {
            flavor: Flavor::MultiThread { worker_threads: detect_worker_threads() },
            thread_name: "nwatch-worker".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    /// Switches to the multithreaded flavor with an explicit worker count.
    #[must_use = "Customize the number of worker threads for the runtime"]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.flavor = Flavor::MultiThread { worker_threads: threads.clamp(1, MAX_WORKER_THREADS) };
        self
    }

    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { "nwatch-worker".to_owned() } else { name };
        self
    }

    #[must_use = "Customize how long idle threads stay alive"]
    pub const fn with_thread_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.thread_keep_alive = keep_alive;
        self
    }
}

/// Creates a new Tokio runtime from a [`RuntimeConfig`].
///
/// I/O and time drivers are always enabled: the submitter needs the network
/// and the post-registration redirect needs timers.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the Tokio runtime cannot be created, typically due to
/// insufficient system resources or OS-level limitations.
///
/// # Examples
///
/// ```rust
/// use nwatch_runtime::{build_runtime_with_config, RuntimeConfig};
///
/// let runtime = build_runtime_with_config(&RuntimeConfig::event_loop())?;
/// let answer = runtime.block_on(async { 42 });
/// assert_eq!(answer, 42);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = match config.flavor {
        Flavor::CurrentThread => Builder::new_current_thread(),
        Flavor::MultiThread { worker_threads } => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(worker_threads.clamp(1, MAX_WORKER_THREADS));
            builder
        },
    };

    builder
        .thread_name(&config.thread_name)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_event_loop() {
        assert_eq!(RuntimeConfig::default().flavor, Flavor::CurrentThread);
    }

    #[test]
    fn test_worker_threads_validation() {
        let config = RuntimeConfig::default().with_worker_threads(0);
        assert_eq!(config.flavor, Flavor::MultiThread { worker_threads: 1 });

        let config = RuntimeConfig::default().with_worker_threads(2000);
        assert_eq!(config.flavor, Flavor::MultiThread { worker_threads: MAX_WORKER_THREADS });
    }

    #[test]
    fn test_blank_thread_name_falls_back() {
        let config = RuntimeConfig::event_loop().with_thread_name("   ");
        assert_eq!(config.thread_name, "nwatch-worker");
    }

    #[test]
    fn test_event_loop_runtime_runs_timers() -> Result<()> {
        let rt = build_runtime_with_config(&RuntimeConfig::event_loop())?;
        let slept = rt.block_on(async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            true
        });
        assert!(slept);
        Ok(())
    }
}
