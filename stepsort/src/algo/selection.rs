//! Selection sort.

use crate::channel::StepChannel;
use crate::error::StepResult;
use crate::event::MarkTag;

/// For each position, scan the remainder tracking the extremal index (one
/// charged comparison per scanned element), then swap at most once per
/// outer iteration.
pub(crate) async fn sort(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    for i in 0..n.saturating_sub(1) {
        let mut extremal = i;
        for j in i + 1..n {
            if ch.compare(extremal, j).await? {
                extremal = j;
            }
        }
        if extremal != i {
            ch.swap(i, extremal).await?;
        }
        ch.mark(&[i], MarkTag::Sorted);
    }
    ch.mark(&[n - 1], MarkTag::Sorted);
    Ok(())
}
