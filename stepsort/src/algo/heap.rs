//! Heap sort, plus the range-bounded variant intro falls back to.

use crate::channel::StepChannel;
use crate::error::StepResult;
use crate::event::MarkTag;

/// Heap sort over the whole sequence: build a heap rooted in the configured
/// order, then repeatedly swap the root with the last unsorted element and
/// re-sift, marking extracted positions sorted.
pub(crate) async fn sort(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    for i in (0..n / 2).rev() {
        sift_down(ch, 0, n - 1, i).await?;
    }
    for i in (1..n).rev() {
        ch.swap(0, i).await?;
        ch.mark(&[i], MarkTag::Sorted);
        sift_down(ch, 0, i - 1, 0).await?;
    }
    ch.mark(&[0], MarkTag::Sorted);
    Ok(())
}

/// Heap sort restricted to `low..=high`, without sorted marks.
pub(crate) async fn sort_range(ch: &StepChannel, low: usize, high: usize) -> StepResult<()> {
    let n = high - low + 1;
    for k in (0..n / 2).rev() {
        sift_down(ch, low, high, low + k).await?;
    }
    for i in (low + 1..=high).rev() {
        ch.swap(low, i).await?;
        sift_down(ch, low, i - 1, low).await?;
    }
    Ok(())
}

/// Sift the element at `start` down the heap spanning `low..=high`. One
/// charged comparison per sibling examined.
async fn sift_down(ch: &StepChannel, low: usize, high: usize, start: usize) -> StepResult<()> {
    let mut root = start;
    loop {
        let mut extremal = root;
        let left = low + 2 * (root - low) + 1;
        let right = left + 1;

        if left <= high && ch.compare(left, extremal).await? {
            extremal = left;
        }
        if right <= high && ch.compare(right, extremal).await? {
            extremal = right;
        }
        if extremal == root {
            return Ok(());
        }
        ch.swap(root, extremal).await?;
        root = extremal;
    }
}
