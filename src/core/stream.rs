use futures::future::join_all;
use futures::stream::{self, Stream, StreamExt};
use std::time::Duration;
use tokio::time::Instant;

pub const GENERATOR_COUNT: usize = 10;
pub const GENERATOR_INTERVAL: Duration = Duration::from_secs(1);
pub const GENERATOR_SCALE: f64 = 10.0;

/// Yields `count` random values in `[0, scale)`, sleeping `interval` before
/// each one.
pub fn random_values(count: usize, interval: Duration, scale: f64) -> impl Stream<Item = f64> + Send {
    stream::unfold(0usize, move |produced| async move {
        if produced >= count {
            return None;
        }
        tokio::time::sleep(interval).await;
        let value = rand::random::<f64>() * scale;
        Some((value, produced + 1))
    })
}

pub fn async_generator() -> impl Stream<Item = f64> + Send {
    random_values(GENERATOR_COUNT, GENERATOR_INTERVAL, GENERATOR_SCALE)
}

pub async fn async_comprehension() -> Vec<f64> {
    async_generator().collect().await
}

/// Runs four comprehensions side by side and returns the elapsed time.
pub async fn measure_runtime() -> Duration {
    let start = Instant::now();
    let runs = join_all((0..4).map(|_| async_comprehension())).await;
    let elapsed = start.elapsed();
    tracing::debug!(
        "collected {} values across {} comprehensions in {:?}",
        runs.iter().map(Vec::len).sum::<usize>(),
        runs.len(),
        elapsed
    );
    elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_async_generator_yields_ten_values_in_range() {
        let values: Vec<f64> = async_generator().collect().await;
        assert_eq!(values.len(), GENERATOR_COUNT);
        assert!(values.iter().all(|v| (0.0..GENERATOR_SCALE).contains(v)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_generator_waits_between_values() {
        let start = Instant::now();
        let mut values = Box::pin(async_generator());

        values.next().await.unwrap();
        assert!(start.elapsed() >= GENERATOR_INTERVAL);

        values.next().await.unwrap();
        assert!(start.elapsed() >= GENERATOR_INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_random_values_empty() {
        let values: Vec<f64> = random_values(0, Duration::from_secs(1), 1.0).collect().await;
        assert!(values.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_comprehension_collects_all() {
        let values = async_comprehension().await;
        assert_eq!(values.len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_measure_runtime_is_parallel() {
        let elapsed = measure_runtime().await;
        assert!(elapsed >= Duration::from_secs(10));
        assert!(elapsed < Duration::from_secs(11));
    }
}
