//! Insertion sort, plus the range-bounded routine intro and tim reuse.

use crate::channel::StepChannel;
use crate::error::StepResult;
use crate::event::MarkTag;

/// Insertion sort over the whole sequence, marking positions sorted as the
/// prefix grows.
pub(crate) async fn sort(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    ch.mark(&[0], MarkTag::Sorted);
    for i in 1..n {
        let slot = insert_one(ch, 0, i).await?;
        ch.mark(&[slot], MarkTag::Sorted);
    }
    Ok(())
}

/// Insertion sort restricted to `low..=high`, without sorted marks.
pub(crate) async fn sort_range(ch: &StepChannel, low: usize, high: usize) -> StepResult<()> {
    for i in low + 1..=high {
        insert_one(ch, low, i).await?;
    }
    Ok(())
}

/// Insert the element at `i` into the sorted run `low..i`.
///
/// Each shift test charges one comparison (the failing boundary test
/// included); each shift is a write; the final placement is always a write,
/// even when the key did not move. Returns the slot the key landed in.
async fn insert_one(ch: &StepChannel, low: usize, i: usize) -> StepResult<usize> {
    let key = ch.value(i)?;
    ch.touch(&[i], MarkTag::Scan).await?;

    let mut slot = i;
    while slot > low {
        if !ch.compare_values(ch.value(slot - 1)?, key, slot - 1).await? {
            break;
        }
        let shifted = ch.value(slot - 1)?;
        ch.write(slot, shifted).await?;
        slot -= 1;
    }
    ch.write(slot, key).await?;
    Ok(slot)
}
