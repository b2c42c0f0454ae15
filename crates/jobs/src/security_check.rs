use repwatch_application::use_cases::{CycleReport, RunCheckCycleUseCase};
use repwatch_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 900;
const DEFAULT_ERROR_COOLDOWN_SECS: u64 = 60;
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// How a single cycle ended.
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    Completed(CycleReport),
    /// The cycle returned an error; nothing was persisted.
    Failed(DomainError),
    /// The cycle task panicked.
    Aborted(String),
    /// Shutdown was requested while the cycle was running.
    Cancelled,
}

/// Background job that runs a check cycle on a fixed interval.
///
///   - First tick fires immediately unless `run_on_startup` is off
///   - The interval is measured from the end of the previous cycle, so a
///     long cycle is always followed by a full idle interval
///   - A failed cycle is logged and the next tick proceeds normally
///   - A panicked cycle is followed by a cooldown before ticking resumes
///   - Default interval: 15 min (900 s)
pub struct SecurityCheckJob {
    run_cycle: Arc<RunCheckCycleUseCase>,
    interval: Duration,
    run_on_startup: bool,
    error_cooldown: Duration,
    shutdown: CancellationToken,
}

impl SecurityCheckJob {
    pub fn new(run_cycle: Arc<RunCheckCycleUseCase>) -> Self {
        Self {
            run_cycle,
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            run_on_startup: true,
            error_cooldown: Duration::from_secs(DEFAULT_ERROR_COOLDOWN_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_run_on_startup(mut self, run_on_startup: bool) -> Self {
        self.run_on_startup = run_on_startup;
        self
    }

    pub fn with_error_cooldown(mut self, cooldown: Duration) -> Self {
        self.error_cooldown = cooldown;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval.as_secs(),
            run_on_startup = self.run_on_startup,
            "Starting security check job"
        );

        tokio::spawn(async move { self.run().await })
    }

    /// The ticker loop. Returns once the cancellation token fires.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.interval.max(MIN_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        if !self.run_on_startup {
            ticker.tick().await;
        }

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!("SecurityCheckJob: shutting down");
                    break;
                }
                _ = ticker.tick() => {}
            }

            match self.run_once().await {
                CycleOutcome::Completed(_) => {}
                CycleOutcome::Failed(e) => {
                    error!(error = %e, "SecurityCheckJob: check cycle failed");
                }
                CycleOutcome::Aborted(reason) => {
                    error!(
                        reason = %reason,
                        cooldown_secs = self.error_cooldown.as_secs(),
                        "SecurityCheckJob: check cycle aborted, cooling down"
                    );
                    tokio::select! {
                        biased;
                        _ = self.shutdown.cancelled() => {
                            info!("SecurityCheckJob: shutting down");
                            break;
                        }
                        _ = tokio::time::sleep(self.error_cooldown) => {}
                    }
                }
                CycleOutcome::Cancelled => {
                    info!("SecurityCheckJob: shutting down");
                    break;
                }
            }

            ticker.reset();
        }
    }

    /// Runs one cycle in its own task so a panic is contained, racing it
    /// against the cancellation token.
    pub async fn run_once(&self) -> CycleOutcome {
        let run_cycle = Arc::clone(&self.run_cycle);
        let mut task = tokio::spawn(async move { run_cycle.execute().await });

        tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => {
                task.abort();
                warn!("SecurityCheckJob: cycle interrupted, results may be incomplete");
                CycleOutcome::Cancelled
            }
            joined = &mut task => match joined {
                Ok(Ok(report)) => CycleOutcome::Completed(report),
                Ok(Err(e)) => CycleOutcome::Failed(e),
                Err(e) => CycleOutcome::Aborted(e.to_string()),
            },
        }
    }
}
