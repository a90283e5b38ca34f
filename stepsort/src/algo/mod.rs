//! The sorting algorithms.
//!
//! Every algorithm is a pure consumer of [`StepChannel`] primitives: it
//! never touches rendering, counters, or pacing directly. One file per
//! algorithm family:
//!
//! - [`exchange`] - bubble, comb
//! - [`insertion`] - insertion (also the small-range routine intro and tim
//!   reuse)
//! - [`selection`] - selection
//! - [`cycle`] - cycle
//! - [`heap`] - heap (also intro's depth-limit fallback)
//! - [`quick`] - quick, intro (shared Lomuto partition)
//! - [`merge`] - 2-way merge, 3-way merge, tim (shared merge routine)
//! - [`distribution`] - counting, radix, bucket, pigeonhole

mod cycle;
mod distribution;
mod exchange;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

use crate::channel::StepChannel;
use crate::error::StepResult;
use crate::event::MarkTag;
use serde::{Deserialize, Serialize};

/// Selector for one of the fifteen supported algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Merge3Way,
    Heap,
    Cycle,
    Counting,
    Radix,
    Bucket,
    Pigeonhole,
    Intro,
    Tim,
    Comb,
}

impl Algorithm {
    /// All supported algorithms, in selector order.
    pub const ALL: [Algorithm; 15] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Quick,
        Self::Merge,
        Self::Merge3Way,
        Self::Heap,
        Self::Cycle,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
        Self::Pigeonhole,
        Self::Intro,
        Self::Tim,
        Self::Comb,
    ];

    /// Stable selector key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Merge3Way => "merge3way",
            Self::Heap => "heap",
            Self::Cycle => "cycle",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
            Self::Pigeonhole => "pigeonhole",
            Self::Intro => "intro",
            Self::Tim => "tim",
            Self::Comb => "comb",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.key() == s)
            .ok_or_else(|| format!("unknown algorithm `{s}`"))
    }
}

/// Run `algorithm` against the channel's sequence.
///
/// An empty sequence completes immediately with no primitive calls. On
/// normal completion the full range is marked sorted, covering algorithms
/// whose incremental marks stop early (bubble's early exit).
pub(crate) async fn run(algorithm: Algorithm, channel: &StepChannel) -> StepResult<()> {
    if channel.len() == 0 {
        return Ok(());
    }

    match algorithm {
        Algorithm::Bubble => exchange::bubble(channel).await?,
        Algorithm::Selection => selection::sort(channel).await?,
        Algorithm::Insertion => insertion::sort(channel).await?,
        Algorithm::Quick => quick::sort(channel).await?,
        Algorithm::Merge => merge::sort(channel).await?,
        Algorithm::Merge3Way => merge::sort_3way(channel).await?,
        Algorithm::Heap => heap::sort(channel).await?,
        Algorithm::Cycle => cycle::sort(channel).await?,
        Algorithm::Counting => distribution::counting(channel).await?,
        Algorithm::Radix => distribution::radix(channel).await?,
        Algorithm::Bucket => distribution::bucket(channel).await?,
        Algorithm::Pigeonhole => distribution::pigeonhole(channel).await?,
        Algorithm::Intro => quick::intro(channel).await?,
        Algorithm::Tim => merge::tim(channel).await?,
        Algorithm::Comb => exchange::comb(channel).await?,
    }

    let all: Vec<usize> = (0..channel.len()).collect();
    channel.mark(&all, MarkTag::Sorted);
    Ok(())
}
