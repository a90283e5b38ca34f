//! Step events emitted by the instrumented primitives.
//!
//! Events are ephemeral: each primitive call produces exactly one event,
//! pushed into an unbounded channel for an external renderer to consume.
//! The core never stores events, and a renderer that stops listening never
//! fails or blocks a run.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Marker tag attached to [`StepEvent::Marked`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkTag {
    /// Element currently under inspection (distribution-sort scans).
    Scan,
    /// Element being relocated to its slot.
    Place,
    /// Partition pivot.
    Pivot,
    /// Index has reached its final position.
    Sorted,
    /// Post-completion celebration sweep.
    Celebrate,
}

impl std::fmt::Display for MarkTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Scan => "scan",
            Self::Place => "place",
            Self::Pivot => "pivot",
            Self::Sorted => "sorted",
            Self::Celebrate => "celebrate",
        };
        write!(f, "{s}")
    }
}

/// One step of a run, as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepEvent {
    /// A charged comparison. `out_of_order` is true when the pair violates
    /// the configured sort order.
    Compare {
        i: usize,
        j: usize,
        out_of_order: bool,
    },
    /// Two slots exchanged their values.
    Swap { i: usize, j: usize },
    /// One slot overwritten with `value`.
    Write { index: usize, value: u32 },
    /// Indices marked with a presentation tag.
    Marked { indices: Vec<usize>, tag: MarkTag },
}

/// Receiving half of the event stream.
pub type EventStream = mpsc::UnboundedReceiver<StepEvent>;

/// Sending half of the event stream.
///
/// Sends are fire-and-forget: once the receiver is dropped the events are
/// discarded silently.
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<StepEvent>,
}

impl EventSender {
    /// Emit one event. Never fails.
    pub fn emit(&self, event: StepEvent) {
        let _ = self.tx.send(event);
    }
}

/// Create a connected sender/stream pair.
pub fn channel() -> (EventSender, EventStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_and_receive() {
        let (tx, mut rx) = channel();
        tx.emit(StepEvent::Swap { i: 0, j: 1 });
        tx.emit(StepEvent::Compare {
            i: 2,
            j: 3,
            out_of_order: true,
        });

        assert_eq!(rx.try_recv().unwrap(), StepEvent::Swap { i: 0, j: 1 });
        assert_eq!(
            rx.try_recv().unwrap(),
            StepEvent::Compare {
                i: 2,
                j: 3,
                out_of_order: true
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_emit_after_receiver_dropped() {
        let (tx, rx) = channel();
        drop(rx);
        // Must not panic or error.
        tx.emit(StepEvent::Write { index: 0, value: 42 });
    }

    #[test]
    fn test_mark_tag_display() {
        assert_eq!(MarkTag::Sorted.to_string(), "sorted");
        assert_eq!(MarkTag::Celebrate.to_string(), "celebrate");
    }
}
