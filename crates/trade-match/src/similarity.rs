//! Sequence similarity based on longest matching blocks.
//!
//! The ratio is `2 * M / T`, where `M` is the number of characters covered by
//! matching blocks and `T` the combined length of both strings. Blocks are
//! found greedily: the longest common run first, then recursively in the
//! unmatched text to its left and right.

/// Similarity ratio of two strings in `[0, 1]`.
///
/// Comparison is case-sensitive and operates on Unicode scalar values.
/// Two empty strings are identical (1.0); an empty string against a
/// non-empty one shares nothing (0.0).
pub fn score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matched_len(&a, &b);
    (2 * matched) as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match(a, b, alo, ahi, blo, bhi);
        if block.size == 0 {
            continue;
        }
        matched += block.size;
        if alo < block.a && blo < block.b {
            pending.push((alo, block.a, blo, block.b));
        }
        let a_end = block.a + block.size;
        let b_end = block.b + block.size;
        if a_end < ahi && b_end < bhi {
            pending.push((a_end, ahi, b_end, bhi));
        }
    }
    matched
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a: usize,
    b: usize,
    size: usize,
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among equally long runs the one starting earliest in `a` wins, then the
/// one starting earliest in `b`.
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        a: alo,
        b: blo,
        size: 0,
    };
    let width = bhi - blo;
    // run[j] = length of the common run ending at a[i - 1], b[blo + j - 1]
    let mut previous = vec![0usize; width + 1];
    let mut current = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let size = previous[slot - 1] + 1;
                current[slot] = size;
                if size > best.size {
                    best = Block {
                        a: i + 1 - size,
                        b: j + 1 - size,
                        size,
                    };
                }
            } else {
                current[slot] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }
    best
}
