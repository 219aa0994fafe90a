/// Worker Pool - bounded fan-out over named threads
///
/// Design:
/// 1. A fixed number of worker threads pull jobs from one bounded crossbeam channel
/// 2. Each job carries its submission index; results are sent back with it
/// 3. The caller gets results in submission order, never completion order
/// 4. Threads are scoped, so jobs may borrow from the caller's stack

use crossbeam::channel::{bounded, unbounded};

use crate::shared::config::DEFAULT_THREADS;
use crate::shared::error::PoolError;

/// Pool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of worker threads (0 = one per CPU core)
    pub worker_count: usize,

    /// Capacity of the job queue
    pub queue_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_THREADS,
            queue_capacity: 256,
        }
    }
}

impl PoolConfig {
    pub fn with_workers(worker_count: usize) -> Self {
        Self {
            worker_count,
            ..Default::default()
        }
    }
}

/// Fixed-size pool of lookup threads
#[derive(Debug, Clone)]
pub struct WorkerPool {
    worker_count: usize,
    queue_capacity: usize,
}

impl WorkerPool {
    pub fn new(config: PoolConfig) -> Self {
        let worker_count = if config.worker_count == 0 {
            let cpus = num_cpus::get();
            tracing::debug!("Detected {} CPU cores", cpus);
            cpus
        } else {
            config.worker_count
        };

        Self {
            worker_count,
            queue_capacity: config.queue_capacity.max(1),
        }
    }

    /// Shorthand for a pool with the default queue capacity
    pub fn with_workers(worker_count: usize) -> Self {
        Self::new(PoolConfig::with_workers(worker_count))
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Applies `f` to every item on the pool
    ///
    /// The returned vector is in the same order as `items`. Fails only if a
    /// worker could not be spawned or panicked.
    pub fn map<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>, PoolError>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.worker_count.min(items.len()).max(1);
        let (job_tx, job_rx) = bounded::<(usize, &T)>(self.queue_capacity);
        let (result_tx, result_rx) = unbounded::<(usize, R)>();
        let f = &f;

        let mut results = crossbeam::thread::scope(move |scope| -> Result<Vec<(usize, R)>, PoolError> {
            for worker_id in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope
                    .builder()
                    .name(format!("lookup-{}", worker_id))
                    .spawn(move |_| {
                        for (index, item) in job_rx.iter() {
                            if result_tx.send((index, f(item))).is_err() {
                                break;
                            }
                        }
                    })
                    .map_err(PoolError::Spawn)?;
            }
            drop(job_rx);
            drop(result_tx);

            for job in items.iter().enumerate() {
                // fails only once every worker has exited
                if job_tx.send(job).is_err() {
                    break;
                }
            }
            drop(job_tx);

            Ok(result_rx.iter().collect())
        })
        .map_err(|_| PoolError::WorkerPanicked)??;

        if results.len() != items.len() {
            return Err(PoolError::WorkerPanicked);
        }

        results.sort_unstable_by_key(|(index, _)| *index);
        Ok(results.into_iter().map(|(_, result)| result).collect())
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}
