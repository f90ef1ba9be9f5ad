//! Random-delay timers run concurrently and gathered.
//!
//! Each timer is independent: it picks a delay, sleeps for it, and reports
//! it. Completion order does not matter because results are sorted after
//! they are all in.

use crate::utils::error::Result;
use futures::future::join_all;
use rand::Rng;
use std::time::Duration;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::Instant;

/// Default upper bound for a single timer.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(10);

/// Largest batch the settings and CLI accept.
pub const MAX_TIMERS: usize = 10_000;

fn random_delay(max_delay: Duration) -> Duration {
    let fraction: f64 = rand::thread_rng().gen_range(0.0..=1.0);
    max_delay.mul_f64(fraction)
}

/// Sleeps for a random duration in `[0, max_delay]` and returns it.
pub async fn wait_random(max_delay: Duration) -> Duration {
    let delay = random_delay(max_delay);
    tokio::time::sleep(delay).await;
    delay
}

/// Spawns [`wait_random`] onto the runtime.
pub fn task_wait_random(max_delay: Duration) -> JoinHandle<Duration> {
    tokio::spawn(wait_random(max_delay))
}

/// Runs `n` timers concurrently on the calling task and returns their delays
/// sorted ascending.
pub async fn wait_n(n: usize, max_delay: Duration) -> Vec<Duration> {
    let mut delays = join_all((0..n).map(|_| wait_random(max_delay))).await;
    delays.sort();
    tracing::debug!("wait_n gathered {} delays", delays.len());
    delays
}

/// Like [`wait_n`], but every timer is its own spawned task.
pub async fn task_wait_n(n: usize, max_delay: Duration) -> Result<Vec<Duration>> {
    let mut set = JoinSet::new();
    for _ in 0..n {
        set.spawn(wait_random(max_delay));
    }

    let mut delays = Vec::with_capacity(n);
    while let Some(joined) = set.join_next().await {
        delays.push(joined?);
    }
    delays.sort();
    tracing::debug!("task_wait_n gathered {} delays", delays.len());
    Ok(delays)
}

/// Sorted delays of one batch together with the wall time it took.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRun {
    pub delays: Vec<Duration>,
    pub elapsed: Duration,
}

impl TimedRun {
    /// Wall time per timer; zero for an empty batch.
    pub fn average(&self) -> Duration {
        if self.delays.is_empty() {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.delays.len() as f64)
    }
}

/// Runs one batch with [`wait_n`], or [`task_wait_n`] when `spawn_tasks` is
/// set, and times it.
pub async fn timed_wait_n(n: usize, max_delay: Duration, spawn_tasks: bool) -> Result<TimedRun> {
    let start = Instant::now();
    let delays = if spawn_tasks {
        task_wait_n(n, max_delay).await?
    } else {
        wait_n(n, max_delay).await
    };
    Ok(TimedRun {
        delays,
        elapsed: start.elapsed(),
    })
}

/// Average wall time per timer for one [`wait_n`] run.
pub async fn measure_time(n: usize, max_delay: Duration) -> Duration {
    let start = Instant::now();
    let delays = wait_n(n, max_delay).await;
    TimedRun {
        delays,
        elapsed: start.elapsed(),
    }
    .average()
}
