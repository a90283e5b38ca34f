//! Instrumentation channel: the only path by which algorithms touch the
//! sequence.
//!
//! Every instrumented primitive follows the same contract:
//!
//! 1. mutate or read the sequence store
//! 2. update exactly the counter defined for that primitive
//! 3. emit exactly one [`StepEvent`]
//! 4. suspend for the currently configured pacing duration
//!
//! Step 4 is the only point where cancellation is observed. A primitive
//! whose suspension sees the run paused returns [`StepError::Interrupted`],
//! which unwinds the enclosing algorithm via `?`. Effects of steps 1-3 have
//! already committed by then; cancellation never rolls back a mutation, it
//! only prevents subsequent ones.

use crate::error::{StepError, StepResult};
use crate::event::{EventSender, MarkTag, StepEvent};
use crate::order::SortOrder;
use crate::stats::StatsTracker;
use crate::store::SequenceStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Shared pacing state, read at each suspension.
///
/// Changing it affects only future suspensions, never an in-flight one.
#[derive(Clone, Default)]
pub(crate) struct Pacing {
    millis: Arc<AtomicU64>,
}

impl Pacing {
    pub(crate) fn new(delay: Duration) -> Self {
        let pacing = Self::default();
        pacing.set(delay);
        pacing
    }

    pub(crate) fn set(&self, delay: Duration) {
        self.millis.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub(crate) fn get(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

/// Instrumented access to the sequence store for one run.
pub(crate) struct StepChannel {
    store: SequenceStore,
    stats: Arc<StatsTracker>,
    events: EventSender,
    order: SortOrder,
    pacing: Pacing,
    cancel: CancellationToken,
}

impl StepChannel {
    pub(crate) fn new(
        store: SequenceStore,
        stats: Arc<StatsTracker>,
        events: EventSender,
        order: SortOrder,
        pacing: Pacing,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            store,
            stats,
            events,
            order,
            pacing,
            cancel,
        }
    }

    /// Number of elements in the sequence.
    pub(crate) fn len(&self) -> usize {
        self.store.len()
    }

    /// Configured sort direction.
    pub(crate) fn order(&self) -> SortOrder {
        self.order
    }

    /// Uncounted read of one slot. No event, no suspension.
    pub(crate) fn value(&self, index: usize) -> StepResult<u32> {
        self.store.get(index).ok_or(StepError::OutOfBounds {
            index,
            len: self.store.len(),
        })
    }

    /// Uncounted copy of a closed index range, for scratch buffers.
    pub(crate) fn values(&self, low: usize, high: usize) -> StepResult<Vec<u32>> {
        (low..=high).map(|i| self.value(i)).collect()
    }

    /// Compare two slots. Charges one comparison, emits
    /// `Compare{i, j, out_of_order}` and suspends. Returns true when the
    /// pair violates the configured order.
    pub(crate) async fn compare(&self, i: usize, j: usize) -> StepResult<bool> {
        let out_of_order = self.order.out_of_order(self.value(i)?, self.value(j)?);
        self.stats.record_comparison();
        self.events.emit(StepEvent::Compare { i, j, out_of_order });
        self.suspend().await?;
        Ok(out_of_order)
    }

    /// Compare two caller-held values (keys, scratch slices). Charges one
    /// comparison, emits `Compare{focus, focus, ..}` and suspends.
    pub(crate) async fn compare_values(
        &self,
        lhs: u32,
        rhs: u32,
        focus: usize,
    ) -> StepResult<bool> {
        let out_of_order = self.order.out_of_order(lhs, rhs);
        self.stats.record_comparison();
        self.events.emit(StepEvent::Compare {
            i: focus,
            j: focus,
            out_of_order,
        });
        self.suspend().await?;
        Ok(out_of_order)
    }

    /// Charge a comparison for a non-comparing inspection (counting sort's
    /// histogram pass). Emits `Compare{i, i, false}` and suspends.
    pub(crate) async fn tally(&self, i: usize) -> StepResult<()> {
        self.stats.record_comparison();
        self.events.emit(StepEvent::Compare {
            i,
            j: i,
            out_of_order: false,
        });
        self.suspend().await
    }

    /// Exchange two slots. `i == j` is a no-op: no write counted, no event,
    /// no suspension. Otherwise charges one write, emits `Swap{i, j}` and
    /// suspends.
    pub(crate) async fn swap(&self, i: usize, j: usize) -> StepResult<()> {
        if i == j {
            return Ok(());
        }
        if !self.store.swap(i, j) {
            return Err(StepError::OutOfBounds {
                index: i.max(j),
                len: self.store.len(),
            });
        }
        self.stats.record_write();
        self.events.emit(StepEvent::Swap { i, j });
        self.suspend().await
    }

    /// Overwrite one slot. Charges one write, emits `Write` and suspends.
    pub(crate) async fn write(&self, index: usize, value: u32) -> StepResult<()> {
        if !self.store.set(index, value) {
            return Err(StepError::OutOfBounds {
                index,
                len: self.store.len(),
            });
        }
        self.stats.record_write();
        self.events.emit(StepEvent::Write { index, value });
        self.suspend().await
    }

    /// Paced, uncharged highlight (distribution-sort scan/placement passes).
    /// Emits `Marked` and suspends.
    pub(crate) async fn touch(&self, indices: &[usize], tag: MarkTag) -> StepResult<()> {
        self.events.emit(StepEvent::Marked {
            indices: indices.to_vec(),
            tag,
        });
        self.suspend().await
    }

    /// Fire-and-forget marker (`Sorted`/`Pivot`/`Celebrate`). Emits `Marked`
    /// only: no counter, no suspension, no cancellation check.
    pub(crate) fn mark(&self, indices: &[usize], tag: MarkTag) {
        self.events.emit(StepEvent::Marked {
            indices: indices.to_vec(),
            tag,
        });
    }

    /// Yield for the configured pacing interval, observing cancellation.
    async fn suspend(&self) -> StepResult<()> {
        if self.cancel.is_cancelled() {
            return Err(StepError::Interrupted);
        }
        let delay = self.pacing.get();
        tokio::select! {
            _ = tokio::time::sleep(delay) => Ok(()),
            _ = self.cancel.cancelled() => Err(StepError::Interrupted),
        }
    }
}
