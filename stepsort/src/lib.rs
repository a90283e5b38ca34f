//! Instrumented sorting-algorithm engine for visualizers.
//!
//! This crate runs classic sorting algorithms over an in-memory sequence
//! while emitting a fine-grained event per comparison, swap, and write, so
//! an external renderer can animate every step. It provides:
//!
//! - **Instrumented primitives**: every compare/swap/write updates live
//!   counters, emits exactly one event, and suspends for a configurable
//!   pacing interval
//! - **Cooperative pause**: cancellation is observed only at suspension
//!   points, so a paused run always leaves the sequence a valid permutation
//! - **Fifteen algorithms**: from bubble to introsort, all expressed
//!   against the same three primitives
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │               Renderer                  │
//! │     (events out, snapshots on demand)   │
//! │                  ▲                      │
//! │                  │                      │
//! │          ┌───────┴───────┐              │
//! │          │  Controller   │              │
//! │          └───────┬───────┘              │
//! │                  │                      │
//! │    ┌─────────────┼─────────────┐        │
//! │    ▼             ▼             ▼        │
//! │ ┌──────┐   ┌──────────┐  ┌─────────┐    │
//! │ │Stats │   │   Algo   │  │ Dataset │    │
//! │ └──────┘   └────┬─────┘  └─────────┘    │
//! │                 ▼                       │
//! │          ┌─────────────┐                │
//! │          │ StepChannel │                │
//! │          └──────┬──────┘                │
//! │                 ▼                       │
//! │          ┌─────────────┐                │
//! │          │  Sequence   │                │
//! │          └─────────────┘                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use stepsort::{Algorithm, Controller, DatasetSpec, EngineConfig, SortOrder};
//!
//! let (controller, mut events) = Controller::new(EngineConfig::default())?;
//! controller.load(DatasetSpec::Custom(vec![5, 3, 8, 1]))?;
//! controller.set_algorithm(Algorithm::Quick);
//! controller.set_order(SortOrder::Ascending);
//!
//! // Drain events from another task to drive the animation.
//! tokio::spawn(async move {
//!     while let Some(event) = events.recv().await {
//!         render(event);
//!     }
//! });
//!
//! let outcome = controller.start().await?;
//! println!("{outcome:?}: {:?}", controller.stats());
//! ```

pub mod algo;
pub mod config;
pub mod dataset;
pub mod error;
pub mod event;
pub mod metrics;
pub mod order;
pub mod rng;
pub mod stats;
pub mod store;

mod channel;
mod controller;

// Re-export main types at crate root
pub use algo::Algorithm;
pub use config::EngineConfig;
pub use controller::{Controller, RunOutcome, RunState};
pub use dataset::{parse_custom, validate_custom, DatasetSpec};
pub use error::{EngineError, InvalidInput, Result};
pub use event::{EventSender, EventStream, MarkTag, StepEvent};
pub use order::SortOrder;
pub use stats::StatsSnapshot;
pub use store::SequenceStore;

// Re-export tokio_util's token for embedders coordinating shutdown
pub use tokio_util::sync::CancellationToken;
