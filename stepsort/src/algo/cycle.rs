//! Cycle sort: minimizes writes by rotating each cycle into place.

use crate::channel::StepChannel;
use crate::error::{StepError, StepResult};
use crate::event::MarkTag;

/// Cycle sort. Writes equal exactly the number of out-of-place placements,
/// so an already-sorted input performs zero writes.
pub(crate) async fn sort(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    for cycle_start in 0..n.saturating_sub(1) {
        let mut item = ch.value(cycle_start)?;
        ch.touch(&[cycle_start], MarkTag::Scan).await?;

        let mut pos = target_position(ch, cycle_start, item).await?;
        if pos == cycle_start {
            continue;
        }

        pos = skip_equal(ch, pos, item)?;
        if pos != cycle_start {
            let displaced = ch.value(pos)?;
            ch.write(pos, item).await?;
            ch.touch(&[pos], MarkTag::Place).await?;
            item = displaced;
        }

        while pos != cycle_start {
            pos = target_position(ch, cycle_start, item).await?;
            pos = skip_equal(ch, pos, item)?;
            if ch.value(pos)? != item {
                let displaced = ch.value(pos)?;
                ch.write(pos, item).await?;
                ch.touch(&[pos], MarkTag::Place).await?;
                item = displaced;
            }
        }
    }
    Ok(())
}

/// Count how many later elements sort strictly before `item`. One charged
/// comparison per candidate.
async fn target_position(ch: &StepChannel, cycle_start: usize, item: u32) -> StepResult<usize> {
    let mut pos = cycle_start;
    for i in cycle_start + 1..ch.len() {
        if ch.compare_values(item, ch.value(i)?, i).await? {
            pos += 1;
        }
    }
    Ok(pos)
}

/// Advance past run-equal duplicates at the target position. Bounded: a
/// correct position count never walks off the sequence, so falling off the
/// end is reported as a fault rather than looping forever.
fn skip_equal(ch: &StepChannel, mut pos: usize, item: u32) -> StepResult<usize> {
    while pos < ch.len() && ch.value(pos)? == item {
        pos += 1;
    }
    if pos >= ch.len() {
        return Err(StepError::CycleStalled { pos });
    }
    Ok(pos)
}
