use std::future::Future;
use std::time::Duration;

/// Simulated request latency. Always resolves; never fails.
pub trait Delay: Send + Sync + 'static {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer for the full duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDelay;

impl Delay for FixedDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Resolves immediately.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[cfg(test)]
impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// How long each kind of simulated request takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub submit: Duration,
    pub social: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit: Duration::from_millis(2000),
            social: Duration::from_millis(1500),
        }
    }
}
