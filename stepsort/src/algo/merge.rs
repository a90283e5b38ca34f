//! Merge-family sorts: 2-way merge, 3-way merge, and tim.

use super::insertion;
use crate::channel::StepChannel;
use crate::error::StepResult;
use crate::event::MarkTag;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Tim's fixed run size.
const RUN: usize = 32;

/// 2-way merge sort.
pub(crate) async fn sort(ch: &StepChannel) -> StepResult<()> {
    sort_range(ch, 0, ch.len() - 1).await
}

fn sort_range<'a>(ch: &'a StepChannel, low: usize, high: usize) -> BoxFuture<'a, StepResult<()>> {
    async move {
        if low == high {
            ch.mark(&[low], MarkTag::Sorted);
            return Ok(());
        }
        let mid = (low + high) / 2;
        sort_range(ch, low, mid).await?;
        sort_range(ch, mid + 1, high).await?;
        merge_range(ch, low, mid, high).await
    }
    .boxed()
}

/// Merge the sorted halves `low..=mid` and `mid+1..=high` back into the
/// sequence. One charged comparison per step while both scratch slices are
/// non-empty; drain loops charge nothing but still write.
async fn merge_range(ch: &StepChannel, low: usize, mid: usize, high: usize) -> StepResult<()> {
    let left = ch.values(low, mid)?;
    let right = ch.values(mid + 1, high)?;

    let (mut i, mut j, mut dest) = (0, 0, low);
    while i < left.len() && j < right.len() {
        if ch.compare_values(left[i], right[j], dest).await? {
            ch.write(dest, right[j]).await?;
            j += 1;
        } else {
            ch.write(dest, left[i]).await?;
            i += 1;
        }
        ch.mark(&[dest], MarkTag::Sorted);
        dest += 1;
    }
    while i < left.len() {
        ch.write(dest, left[i]).await?;
        ch.mark(&[dest], MarkTag::Sorted);
        i += 1;
        dest += 1;
    }
    while j < right.len() {
        ch.write(dest, right[j]).await?;
        ch.mark(&[dest], MarkTag::Sorted);
        j += 1;
        dest += 1;
    }
    Ok(())
}

/// 3-way merge sort: split into three near-equal parts, recurse, then
/// interleave.
pub(crate) async fn sort_3way(ch: &StepChannel) -> StepResult<()> {
    sort_3way_range(ch, 0, ch.len() - 1).await
}

fn sort_3way_range<'a>(
    ch: &'a StepChannel,
    low: usize,
    high: usize,
) -> BoxFuture<'a, StepResult<()>> {
    async move {
        if low >= high {
            return Ok(());
        }
        let third = (high - low) / 3;
        let mid1 = low + third;
        let mid2 = low + 2 * third + 1;

        sort_3way_range(ch, low, mid1).await?;
        sort_3way_range(ch, mid1 + 1, mid2).await?;
        if mid2 + 1 <= high {
            sort_3way_range(ch, mid2 + 1, high).await?;
        }
        merge_3way(ch, low, mid1, mid2, high).await
    }
    .boxed()
}

/// Three-way interleaved merge. Exactly two comparisons are charged per
/// step while all three slices remain non-empty; the pairwise fallbacks and
/// drain loops charge nothing.
async fn merge_3way(
    ch: &StepChannel,
    low: usize,
    mid1: usize,
    mid2: usize,
    high: usize,
) -> StepResult<()> {
    let temp = ch.values(low, high)?;
    let order = ch.order();
    let end1 = mid1 - low;
    let end2 = mid2 - low;
    let end3 = high - low;

    let (mut i, mut j, mut k) = (0, end1 + 1, end2 + 1);
    let mut dest = low;

    while i <= end1 && j <= end2 && k <= end3 {
        let first_after_second = ch.compare_values(temp[i], temp[j], dest).await?;
        let first_after_third = ch.compare_values(temp[i], temp[k], dest).await?;

        if !first_after_second && !first_after_third {
            ch.write(dest, temp[i]).await?;
            i += 1;
        } else if order.takes_precedence(temp[j], temp[k]) {
            ch.write(dest, temp[j]).await?;
            j += 1;
        } else {
            ch.write(dest, temp[k]).await?;
            k += 1;
        }
        ch.mark(&[dest], MarkTag::Sorted);
        dest += 1;
    }

    while i <= end1 && j <= end2 {
        if order.takes_precedence(temp[i], temp[j]) {
            ch.write(dest, temp[i]).await?;
            i += 1;
        } else {
            ch.write(dest, temp[j]).await?;
            j += 1;
        }
        dest += 1;
    }
    while j <= end2 && k <= end3 {
        if order.takes_precedence(temp[j], temp[k]) {
            ch.write(dest, temp[j]).await?;
            j += 1;
        } else {
            ch.write(dest, temp[k]).await?;
            k += 1;
        }
        dest += 1;
    }
    while i <= end1 && k <= end3 {
        if order.takes_precedence(temp[i], temp[k]) {
            ch.write(dest, temp[i]).await?;
            i += 1;
        } else {
            ch.write(dest, temp[k]).await?;
            k += 1;
        }
        dest += 1;
    }

    while i <= end1 {
        ch.write(dest, temp[i]).await?;
        i += 1;
        dest += 1;
    }
    while j <= end2 {
        ch.write(dest, temp[j]).await?;
        j += 1;
        dest += 1;
    }
    while k <= end3 {
        ch.write(dest, temp[k]).await?;
        k += 1;
        dest += 1;
    }
    Ok(())
}

/// Simplified tim sort: insertion-sort fixed-size runs, then iteratively
/// double the merge width, 2-way merging adjacent run pairs.
pub(crate) async fn tim(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();

    let mut start = 0;
    while start < n {
        let end = (start + RUN - 1).min(n - 1);
        insertion::sort_range(ch, start, end).await?;
        start += RUN;
    }

    let mut width = RUN;
    while width < n {
        let mut start = 0;
        while start < n {
            let mid = start + width - 1;
            let end = (start + 2 * width - 1).min(n - 1);
            if mid < end {
                merge_range(ch, start, mid, end).await?;
            }
            start += 2 * width;
        }
        width *= 2;
    }
    Ok(())
}
