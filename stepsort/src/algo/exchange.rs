//! Exchange sorts: bubble and comb.

use crate::channel::StepChannel;
use crate::error::StepResult;
use crate::event::MarkTag;

/// Bubble sort: repeated adjacent passes, each shrinking by one, with an
/// early exit when a full pass performs zero swaps.
pub(crate) async fn bubble(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if ch.compare(j, j + 1).await? {
                ch.swap(j, j + 1).await?;
                swapped = true;
            }
        }
        ch.mark(&[n - i - 1], MarkTag::Sorted);
        if !swapped {
            break;
        }
    }
    ch.mark(&[0], MarkTag::Sorted);
    Ok(())
}

/// Comb sort: gap starts at the length and shrinks by a factor of 1.3 each
/// pass (floored, minimum 1); terminates when the gap is 1 and a full pass
/// performs no swap.
pub(crate) async fn comb(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    let mut gap = n;
    let mut swapped = true;
    while gap != 1 || swapped {
        gap = (gap * 10 / 13).max(1);
        swapped = false;
        for i in 0..n.saturating_sub(gap) {
            if ch.compare(i, i + gap).await? {
                ch.swap(i, i + gap).await?;
                swapped = true;
            }
        }
    }
    Ok(())
}
