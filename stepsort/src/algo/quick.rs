//! Quick sort and introsort (shared Lomuto partition).

use super::{heap, insertion};
use crate::channel::StepChannel;
use crate::error::StepResult;
use crate::event::MarkTag;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Introsort switches to insertion sort below this range length.
const INSERTION_THRESHOLD: usize = 16;

/// Quick sort: Lomuto partition with the last element as pivot, recursing
/// left then right.
pub(crate) async fn sort(ch: &StepChannel) -> StepResult<()> {
    quick_range(ch, 0, ch.len() - 1).await
}

fn quick_range<'a>(ch: &'a StepChannel, low: usize, high: usize) -> BoxFuture<'a, StepResult<()>> {
    async move {
        if low == high {
            // Singleton: sorted by definition, no primitive calls.
            ch.mark(&[low], MarkTag::Sorted);
            return Ok(());
        }
        let pivot = partition(ch, low, high).await?;
        if pivot > low {
            quick_range(ch, low, pivot - 1).await?;
        }
        if pivot < high {
            quick_range(ch, pivot + 1, high).await?;
        }
        Ok(())
    }
    .boxed()
}

/// Lomuto partition over `low..=high` with `v[high]` as pivot. Charges one
/// comparison per element compared against the pivot; returns the pivot's
/// final slot, which is marked sorted.
async fn partition(ch: &StepChannel, low: usize, high: usize) -> StepResult<usize> {
    ch.mark(&[high], MarkTag::Pivot);

    let mut dest = low;
    for j in low..high {
        if !ch.compare(j, high).await? {
            ch.swap(dest, j).await?;
            dest += 1;
        }
    }
    ch.swap(dest, high).await?;
    ch.mark(&[dest], MarkTag::Sorted);
    Ok(dest)
}

/// Introsort: insertion sort for short ranges, heapsort once the depth
/// limit runs out, otherwise partition and recurse into the smaller side
/// while tail-iterating into the larger one.
pub(crate) async fn intro(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    let depth = 2 * n.ilog2() as usize;
    intro_range(ch, 0, n - 1, depth).await
}

fn intro_range<'a>(
    ch: &'a StepChannel,
    low: usize,
    high: usize,
    depth: usize,
) -> BoxFuture<'a, StepResult<()>> {
    async move {
        let (mut low, mut high, mut depth) = (low, high, depth);
        while high > low {
            if high - low + 1 < INSERTION_THRESHOLD {
                insertion::sort_range(ch, low, high).await?;
                break;
            }
            if depth == 0 {
                heap::sort_range(ch, low, high).await?;
                break;
            }

            let pivot = partition(ch, low, high).await?;
            if pivot - low < high - pivot {
                if pivot > low {
                    intro_range(ch, low, pivot - 1, depth - 1).await?;
                }
                low = pivot + 1;
            } else {
                if pivot < high {
                    intro_range(ch, pivot + 1, high, depth - 1).await?;
                }
                match pivot.checked_sub(1) {
                    Some(new_high) => high = new_high,
                    None => break,
                }
            }
            depth -= 1;
        }
        Ok(())
    }
    .boxed()
}
