use crate::types::AlignmentPair;

/// Backtrace move recorded for one DP cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Substitute,
    Delete,
    Insert,
}

/// Global minimum-edit-distance alignment of a reference token sequence
/// against a hypothesis token sequence (unweighted Levenshtein: substitution
/// costs 1 on mismatch, insertions and deletions cost 1).
///
/// Ties are broken substitution > deletion > insertion, with strict `<`
/// comparisons. Downstream missing-word counts depend on this order; do not
/// reorder the comparisons.
///
/// The returned pairs cover every reference and hypothesis index exactly
/// once, in original order. `O(n*m)` time and space, fine for chapter-scale
/// scripts.
pub fn align_sequences<R, H>(reference: &[R], hypothesis: &[H]) -> Vec<AlignmentPair>
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    let n = reference.len();
    let m = hypothesis.len();

    // Empty sides short-circuit to pure-gap alignments.
    if n == 0 {
        return (0..m).map(AlignmentPair::insertion).collect();
    }
    if m == 0 {
        return (0..n).map(AlignmentPair::deletion).collect();
    }

    let width = m + 1;
    let mut cost = vec![0u32; (n + 1) * width];
    let mut back = vec![Step::Substitute; (n + 1) * width];

    for i in 1..=n {
        cost[i * width] = i as u32;
        back[i * width] = Step::Delete;
    }
    for j in 1..=m {
        cost[j] = j as u32;
        back[j] = Step::Insert;
    }

    for i in 1..=n {
        let ref_token = reference[i - 1].as_ref();
        for j in 1..=m {
            let mismatch = u32::from(ref_token != hypothesis[j - 1].as_ref());
            let sub = cost[(i - 1) * width + (j - 1)] + mismatch;
            let del = cost[(i - 1) * width + j] + 1;
            let ins = cost[i * width + (j - 1)] + 1;

            let mut best = sub;
            let mut step = Step::Substitute;
            if del < best {
                best = del;
                step = Step::Delete;
            }
            if ins < best {
                best = ins;
                step = Step::Insert;
            }
            cost[i * width + j] = best;
            back[i * width + j] = step;
        }
    }

    let mut pairs = Vec::with_capacity(n.max(m));
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        match back[i * width + j] {
            Step::Substitute => {
                pairs.push(AlignmentPair::matched(i - 1, j - 1));
                i -= 1;
                j -= 1;
            }
            Step::Delete => {
                pairs.push(AlignmentPair::deletion(i - 1));
                i -= 1;
            }
            Step::Insert => {
                pairs.push(AlignmentPair::insertion(j - 1));
                j -= 1;
            }
        }
    }
    pairs.reverse();
    pairs
}
