use crate::utils::error::{CheckError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Fan-out/fan-in runner: one task per item, wait for all, collect in receipt order.
#[derive(Debug, Clone, Default)]
pub struct TaskPool {
    work_delay: Duration,
}

impl TaskPool {
    /// `work_delay` is slept by every task before it runs its unit of work.
    pub fn new(work_delay: Duration) -> Self {
        Self { work_delay }
    }

    /// Runs `work` once per item on its own task.
    ///
    /// Results arrive in completion order, not submission order. The channel
    /// closes when the last worker drops its sender, which ends collection.
    pub async fn fan_out<I, T, F>(&self, items: Vec<I>, work: F) -> Result<Vec<T>>
    where
        I: Send + 'static,
        T: Send + 'static,
        F: Fn(I) -> T + Send + Sync + 'static,
    {
        let expected = items.len();
        let (tx, mut rx) = mpsc::channel(expected.max(1));
        let work = Arc::new(work);

        let mut handles = Vec::with_capacity(expected);
        for (index, item) in items.into_iter().enumerate() {
            let tx = tx.clone();
            let work = Arc::clone(&work);
            let delay = self.work_delay;

            handles.push(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let result = work(item);
                if tx.send(result).await.is_err() {
                    tracing::warn!(task = index, "result dropped, collector already gone");
                }
            }));
        }
        drop(tx);

        let mut results = Vec::with_capacity(expected);
        while let Some(result) = rx.recv().await {
            results.push(result);
        }

        for handle in handles {
            handle.await.map_err(|e| CheckError::TaskFailed {
                message: e.to_string(),
            })?;
        }

        if results.len() != expected {
            return Err(CheckError::IncompleteResults {
                expected,
                received: results.len(),
            });
        }

        tracing::debug!("📥 Collected {} results", results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_collects_every_result() {
        let pool = TaskPool::new(Duration::ZERO);
        let items: Vec<u32> = (0..64).collect();

        let results = pool.fan_out(items, |n| n * 2).await.unwrap();

        assert_eq!(results.len(), 64);
        let unique: HashSet<u32> = results.into_iter().collect();
        let expected: HashSet<u32> = (0..64).map(|n| n * 2).collect();
        assert_eq!(unique, expected);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let pool = TaskPool::default();
        let results: Vec<u32> = pool.fan_out(Vec::<u32>::new(), |n| n).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_panicking_worker_is_reported() {
        let pool = TaskPool::new(Duration::ZERO);

        let err = pool
            .fan_out(vec![1u32, 2, 3], |n| {
                if n == 2 {
                    panic!("worker {n} failed");
                }
                n
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::TaskFailed { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_workers_sleep_concurrently() {
        let pool = TaskPool::new(Duration::from_millis(100));
        let started = tokio::time::Instant::now();

        let results = pool.fan_out(vec![1, 2, 3], |n: u32| n).await.unwrap();

        assert_eq!(results.len(), 3);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(300));
    }
}
