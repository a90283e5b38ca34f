//! Execution controller: run lifecycle, state machine, dataset loading.

use crate::algo::{self, Algorithm};
use crate::channel::{Pacing, StepChannel};
use crate::config::EngineConfig;
use crate::dataset::DatasetSpec;
use crate::error::{EngineError, Result};
use crate::event::{self, EventSender, EventStream, MarkTag, StepEvent};
use crate::metrics;
use crate::order::SortOrder;
use crate::rng::SeedRng;
use crate::stats::{StatsSnapshot, StatsTracker};
use crate::store::SequenceStore;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Size of the dataset loaded at construction.
const DEFAULT_SIZE: usize = 50;

/// Lifecycle state of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

/// How a call to [`Controller::start`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The algorithm ran to completion.
    Completed,
    /// The run was paused at a suspension point.
    Paused,
    /// A run was already active; nothing was started.
    AlreadyRunning,
}

/// Owns the sequence, statistics, and run lifecycle.
///
/// One run is active at a time. `start()` drives the selected algorithm to
/// completion or cancellation; `pause()`, `stats()`, and `snapshot()` may be
/// called from any task while a run is in flight.
pub struct Controller {
    config: EngineConfig,
    store: SequenceStore,
    stats: Arc<StatsTracker>,
    events: EventSender,
    rng: SeedRng,
    state: RwLock<RunState>,
    algorithm: RwLock<Algorithm>,
    order: RwLock<SortOrder>,
    spec: RwLock<DatasetSpec>,
    pacing: Pacing,
    cancel: RwLock<CancellationToken>,
}

impl Controller {
    /// Create a controller and the event stream a renderer consumes.
    ///
    /// A default random dataset is loaded so the controller is immediately
    /// startable.
    pub fn new(config: EngineConfig) -> Result<(Self, EventStream)> {
        config.validate()?;

        let (events, stream) = event::channel();
        let rng = SeedRng::new(config.seed_or_clock());
        let spec = DatasetSpec::Random { size: DEFAULT_SIZE };
        let values = spec.materialize(&rng)?;

        let controller = Self {
            pacing: Pacing::new(config.pacing),
            store: SequenceStore::new(values),
            stats: Arc::new(StatsTracker::new()),
            events,
            rng,
            state: RwLock::new(RunState::Idle),
            algorithm: RwLock::new(Algorithm::default()),
            order: RwLock::new(SortOrder::default()),
            spec: RwLock::new(spec),
            cancel: RwLock::new(CancellationToken::new()),
            config,
        };
        Ok((controller, stream))
    }

    /// Load a dataset, replacing the sequence and resetting statistics.
    ///
    /// Fails with [`EngineError::Busy`] while a run is active and with
    /// `InvalidInput` when validation rejects the spec; in both cases the
    /// current sequence is untouched.
    pub fn load(&self, spec: DatasetSpec) -> Result<Vec<u32>> {
        if *self.state.read() == RunState::Running {
            return Err(EngineError::Busy);
        }
        let values = spec.materialize(&self.rng)?;
        self.store.replace(values.clone());
        *self.spec.write() = spec;
        self.stats.reset();
        *self.state.write() = RunState::Idle;
        tracing::debug!(len = values.len(), "dataset loaded");
        Ok(values)
    }

    /// Select the algorithm for the next run.
    pub fn set_algorithm(&self, algorithm: Algorithm) {
        *self.algorithm.write() = algorithm;
    }

    pub fn algorithm(&self) -> Algorithm {
        *self.algorithm.read()
    }

    /// Select the sort direction for the next run.
    pub fn set_order(&self, order: SortOrder) {
        *self.order.write() = order;
    }

    pub fn order(&self) -> SortOrder {
        *self.order.read()
    }

    /// Adjust the pacing delay. Takes effect at the next suspension.
    pub fn set_pacing(&self, delay: Duration) {
        self.pacing.set(delay);
    }

    pub fn pacing(&self) -> Duration {
        self.pacing.get()
    }

    pub fn state(&self) -> RunState {
        *self.state.read()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Read-only copy of the current sequence.
    pub fn snapshot(&self) -> Vec<u32> {
        self.store.snapshot()
    }

    /// Run the selected algorithm to completion or cancellation.
    ///
    /// A no-op returning [`RunOutcome::AlreadyRunning`] when a run is
    /// already active. Counters reset at entry; the sequence is kept as-is,
    /// so starting from `Paused` resumes sorting the current contents.
    pub async fn start(&self) -> Result<RunOutcome> {
        let cancel = CancellationToken::new();
        {
            // Install the fresh token under the state lock so a concurrent
            // pause() always cancels the token of the run it observed.
            let mut state = self.state.write();
            if *state == RunState::Running {
                return Ok(RunOutcome::AlreadyRunning);
            }
            *self.cancel.write() = cancel.clone();
            *state = RunState::Running;
        }
        self.stats.start_run();

        let algorithm = self.algorithm();
        let order = self.order();
        tracing::info!(%algorithm, %order, len = self.store.len(), "run started");

        let channel = StepChannel::new(
            self.store.clone(),
            self.stats.clone(),
            self.events.clone(),
            order,
            self.pacing.clone(),
            cancel,
        );

        match algo::run(algorithm, &channel).await {
            Ok(()) => {
                self.stats.stop_clock();
                *self.state.write() = RunState::Completed;
                metrics::record_run(metrics::outcome::COMPLETED);
                let stats = self.stats.snapshot();
                tracing::info!(
                    %algorithm,
                    comparisons = stats.comparisons,
                    writes = stats.writes,
                    elapsed = ?stats.elapsed,
                    "run completed"
                );
                self.spawn_celebration();
                Ok(RunOutcome::Completed)
            }
            Err(err) if err.is_interrupt() => {
                self.stats.stop_clock();
                metrics::record_run(metrics::outcome::PAUSED);
                tracing::debug!(%algorithm, "run interrupted");
                Ok(RunOutcome::Paused)
            }
            Err(err) => {
                self.stats.stop_clock();
                *self.state.write() = RunState::Idle;
                metrics::record_run(metrics::outcome::FAILED);
                tracing::error!(%algorithm, error = %err, "run failed");
                Err(EngineError::Internal(anyhow::Error::new(err)))
            }
        }
    }

    /// Pause the active run. The in-flight primitive's next suspension
    /// point observes this and unwinds the algorithm; its committed effects
    /// stay in place. Returns false when no run is active.
    pub fn pause(&self) -> bool {
        let mut state = self.state.write();
        if *state != RunState::Running {
            return false;
        }
        *state = RunState::Paused;
        self.cancel.read().cancel();
        drop(state);
        tracing::debug!("pause requested");
        true
    }

    /// Regenerate the dataset from the last loaded spec, reset statistics,
    /// and return to `Idle`. Rejected while a run is active.
    pub fn reset(&self) -> Result<Vec<u32>> {
        if *self.state.read() == RunState::Running {
            return Err(EngineError::Busy);
        }
        let spec = self.spec.read().clone();
        let values = spec.materialize(&self.rng)?;
        self.store.replace(values.clone());
        self.stats.reset();
        *self.state.write() = RunState::Idle;
        tracing::debug!(len = values.len(), "reset");
        Ok(values)
    }

    /// Sequential celebration sweep over all indices, detached so
    /// completion never blocks on presentation.
    fn spawn_celebration(&self) {
        let events = self.events.clone();
        let len = self.store.len();
        let step = self.config.celebrate_step;
        tokio::spawn(async move {
            for index in 0..len {
                events.emit(StepEvent::Marked {
                    indices: vec![index],
                    tag: MarkTag::Celebrate,
                });
                tokio::time::sleep(step).await;
            }
        });
    }
}
