//! Distribution sorts: counting, radix, bucket, and pigeonhole.
//!
//! None of these compare elements pairwise. Counting sort still charges its
//! histogram pass to the comparison counter; radix, bucket, and pigeonhole
//! charge nothing and only pace their scan/placement passes.

use crate::channel::StepChannel;
use crate::error::StepResult;
use crate::event::MarkTag;
use crate::order::SortOrder;

/// Counting sort: histogram, prefix sums, stable right-to-left placement,
/// then copy back.
pub(crate) async fn counting(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    let values = ch.values(0, n - 1)?;
    let (min, max) = bounds(&values);
    let mut count = vec![0usize; (max - min + 1) as usize];

    for (i, &value) in values.iter().enumerate() {
        count[(value - min) as usize] += 1;
        ch.tally(i).await?;
    }

    prefix_sum(&mut count, ch.order());

    let mut output = vec![0u32; n];
    for i in (0..n).rev() {
        let slot = (values[i] - min) as usize;
        output[count[slot] - 1] = values[i];
        count[slot] -= 1;
        ch.touch(&[i], MarkTag::Place).await?;
    }

    for (i, value) in output.into_iter().enumerate() {
        ch.write(i, value).await?;
        ch.mark(&[i], MarkTag::Sorted);
    }
    Ok(())
}

/// LSD radix sort, base 10: stable counting passes by digit for increasing
/// digit weight until the weight exceeds the maximum value.
pub(crate) async fn radix(ch: &StepChannel) -> StepResult<()> {
    let max = ch.values(0, ch.len() - 1)?.into_iter().max().unwrap_or(0);

    let mut weight: u32 = 1;
    while max / weight > 0 {
        radix_pass(ch, weight).await?;
        weight *= 10;
    }
    Ok(())
}

async fn radix_pass(ch: &StepChannel, weight: u32) -> StepResult<()> {
    let n = ch.len();
    let values = ch.values(0, n - 1)?;
    let digit = |value: u32| ((value / weight) % 10) as usize;
    let mut count = [0usize; 10];

    for (i, &value) in values.iter().enumerate() {
        count[digit(value)] += 1;
        ch.touch(&[i], MarkTag::Scan).await?;
    }

    prefix_sum(&mut count, ch.order());

    let mut output = vec![0u32; n];
    for i in (0..n).rev() {
        let slot = digit(values[i]);
        output[count[slot] - 1] = values[i];
        count[slot] -= 1;
        ch.touch(&[i], MarkTag::Place).await?;
    }

    for (i, value) in output.into_iter().enumerate() {
        ch.write(i, value).await?;
    }
    Ok(())
}

/// Bucket sort: distribute into `min(10, len)` buckets, sort each bucket
/// independently in the configured direction, concatenate.
pub(crate) async fn bucket(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    let values = ch.values(0, n - 1)?;
    let (min, max) = bounds(&values);
    let range = (max - min + 1) as usize;
    let bucket_count = n.min(10);
    let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); bucket_count];

    for (i, &value) in values.iter().enumerate() {
        let index = ((value - min) as usize * bucket_count / range).min(bucket_count - 1);
        buckets[index].push(value);
        ch.touch(&[i], MarkTag::Scan).await?;
    }

    let order = ch.order();
    // Low buckets hold the values that sort first, so descending runs walk
    // the buckets from the top.
    if order == SortOrder::Descending {
        buckets.reverse();
    }

    let mut dest = 0;
    for mut bucket in buckets {
        match order {
            SortOrder::Ascending => bucket.sort_unstable(),
            SortOrder::Descending => bucket.sort_unstable_by(|a, b| b.cmp(a)),
        }
        for value in bucket {
            ch.write(dest, value).await?;
            ch.mark(&[dest], MarkTag::Sorted);
            dest += 1;
        }
    }
    Ok(())
}

/// Pigeonhole sort: one hole per value in `min..=max`, drained in index
/// order (reversed for descending).
pub(crate) async fn pigeonhole(ch: &StepChannel) -> StepResult<()> {
    let n = ch.len();
    let values = ch.values(0, n - 1)?;
    let (min, max) = bounds(&values);
    let mut holes = vec![0usize; (max - min + 1) as usize];

    for (i, &value) in values.iter().enumerate() {
        holes[(value - min) as usize] += 1;
        ch.touch(&[i], MarkTag::Scan).await?;
    }

    let indices: Vec<usize> = match ch.order() {
        SortOrder::Ascending => (0..holes.len()).collect(),
        SortOrder::Descending => (0..holes.len()).rev().collect(),
    };

    let mut dest = 0;
    for hole in indices {
        for _ in 0..holes[hole] {
            ch.write(dest, min + hole as u32).await?;
            ch.mark(&[dest], MarkTag::Sorted);
            dest += 1;
        }
    }
    Ok(())
}

fn bounds(values: &[u32]) -> (u32, u32) {
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    (min, max)
}

fn prefix_sum(count: &mut [usize], order: SortOrder) {
    match order {
        SortOrder::Ascending => {
            for i in 1..count.len() {
                count[i] += count[i - 1];
            }
        }
        SortOrder::Descending => {
            for i in (0..count.len().saturating_sub(1)).rev() {
                count[i] += count[i + 1];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_sum_ascending() {
        let mut count = vec![2, 0, 3, 1];
        prefix_sum(&mut count, SortOrder::Ascending);
        assert_eq!(count, vec![2, 2, 5, 6]);
    }

    #[test]
    fn test_prefix_sum_descending() {
        let mut count = vec![2, 0, 3, 1];
        prefix_sum(&mut count, SortOrder::Descending);
        assert_eq!(count, vec![6, 4, 4, 1]);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(bounds(&[5, 2, 9, 2]), (2, 9));
    }
}
