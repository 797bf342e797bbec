//! Pairwise maximal-overlap computation
//!
//! Lengths are counted in characters. Candidate overlaps that would split a
//! multi-byte character are never considered.

/// Result of merging two strings on their longest shared suffix/prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    /// Number of characters shared by the two strings (0 = no overlap)
    pub length: usize,
    /// The merged string
    ///
    /// For a zero-length overlap this is the plain concatenation, and
    /// callers are expected to ignore it.
    pub merged: String,
}

impl Overlap {
    /// Whether the two strings share anything at all
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Find the maximum overlap and merge of two strings.
///
/// Both orientations are checked: a suffix of `s1` against a prefix of `s2`,
/// and a prefix of `s1` against a suffix of `s2`. The first orientation wins
/// ties, so the merge is `s1` followed by the rest of `s2` whenever its overlap
/// is at least as long as the other one.
///
/// A string fully overlaps itself: `find_max_overlap(s, s)` is `(len(s), s)`.
///
/// ```
/// use superstrings_core::find_max_overlap;
///
/// let overlap = find_max_overlap("GATTA", "TTACA");
/// assert_eq!(overlap.length, 3);
/// assert_eq!(overlap.merged, "GATTACA");
/// ```
pub fn find_max_overlap(s1: &str, s2: &str) -> Overlap {
    let forward = suffix_prefix_len(s1, s2);
    let backward = suffix_prefix_len(s2, s1);

    let forward_chars = s2[..forward].chars().count();
    let backward_chars = s1[..backward].chars().count();

    if forward_chars >= backward_chars {
        Overlap {
            length: forward_chars,
            merged: concat(s1, &s2[forward..]),
        }
    } else {
        Overlap {
            length: backward_chars,
            merged: concat(s2, &s1[backward..]),
        }
    }
}

/// Byte length of the longest suffix of `left` that is also a prefix of `right`.
///
/// Every prefix of `right` ending on a character boundary is tried, longest
/// first.
fn suffix_prefix_len(left: &str, right: &str) -> usize {
    let limit = left.len().min(right.len());
    let left_bytes = left.as_bytes();
    let right_bytes = right.as_bytes();

    (1..=limit)
        .rev()
        .filter(|&len| right.is_char_boundary(len) && left.is_char_boundary(left.len() - len))
        .find(|&len| left_bytes[left.len() - len..] == right_bytes[..len])
        .unwrap_or(0)
}

fn concat(head: &str, tail: &str) -> String {
    let mut merged = String::with_capacity(head.len() + tail.len());
    merged.push_str(head);
    merged.push_str(tail);
    merged
}
