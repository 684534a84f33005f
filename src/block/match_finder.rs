//! Single-entry hash-table match finder.
//!
//! Each slot of the table remembers the most recent input position whose
//! first four bytes hashed to it.  A lookup returns that position as a
//! candidate only if it lies within [`DISTANCE_MAX`] bytes behind the current
//! position and its first four bytes really are equal; hash collisions are
//! therefore harmless.
//!
//! Slots hold `position + 1` as a `u32`, so `0` marks an empty slot.  That
//! covers every input up to [`MAX_BLOCK_SIZE`](crate::config::MAX_BLOCK_SIZE).
//! Past 4 GiB the stored value wraps; the distance and byte checks still reject
//! the stale candidate, so output stays valid and only the ratio suffers.
//! The table is owned by one compression call and never shared.

use super::types::{common_prefix_len, hash4, read_u32_le, DISTANCE_MAX, HASH_SIZE, MINMATCH};

/// Hash-indexed table of previous positions in one input buffer.
pub(crate) struct MatchFinder<'a> {
    input: &'a [u8],
    table: Box<[u32]>,
}

impl<'a> MatchFinder<'a> {
    /// Create a finder over `input` with an empty table.
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            table: vec![0u32; HASH_SIZE].into_boxed_slice(),
        }
    }

    #[inline(always)]
    fn slot(&self, pos: usize) -> usize {
        hash4(read_u32_le(self.input, pos))
    }

    /// Record `pos` as the latest occurrence of its 4-byte prefix.
    ///
    /// # Panics
    /// If `pos + 4` exceeds the input length.
    #[inline]
    pub(crate) fn insert(&mut self, pos: usize) {
        let h = self.slot(pos);
        self.table[h] = (pos as u32).wrapping_add(1);
    }

    /// Look up a candidate for `pos`, then record `pos` in its slot.
    ///
    /// Returns the earlier position when it is in range and shares the same
    /// four leading bytes.
    ///
    /// # Panics
    /// If `pos + 4` exceeds the input length.
    #[inline]
    pub(crate) fn find(&mut self, pos: usize) -> Option<usize> {
        let h = self.slot(pos);
        let stored = self.table[h] as usize;
        self.table[h] = (pos as u32).wrapping_add(1);

        let candidate = stored.checked_sub(1)?;
        if candidate >= pos || pos - candidate > DISTANCE_MAX {
            return None;
        }
        if read_u32_le(self.input, candidate) != read_u32_le(self.input, pos) {
            return None;
        }
        Some(candidate)
    }

    /// Length of the match between `candidate` and `pos`, which are already
    /// known to share [`MINMATCH`] bytes.  Never reaches `limit`.
    #[inline]
    pub(crate) fn match_length(&self, candidate: usize, pos: usize, limit: usize) -> usize {
        MINMATCH + common_prefix_len(self.input, candidate + MINMATCH, pos + MINMATCH, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_repeated_prefix() {
        let data = b"abcdXXXXabcdYYYYYYYYYYYY";
        let mut mf = MatchFinder::new(data);
        mf.insert(0);
        assert_eq!(mf.find(8), Some(0));
        assert_eq!(mf.match_length(0, 8, data.len() - 5), 4);
    }

    #[test]
    fn empty_table_yields_no_candidates() {
        let data = b"wxyzabcdefghijkl";
        let mut mf = MatchFinder::new(data);
        assert_eq!(mf.find(4), None);
        assert_eq!(mf.find(0), None);
    }

    #[test]
    fn same_position_is_rejected() {
        let data = [0u8; 16];
        let mut mf = MatchFinder::new(&data);
        assert_eq!(mf.find(0), None);
        assert_eq!(mf.find(1), Some(0));
    }

    #[test]
    fn window_ends_at_distance_max() {
        let lookup_at = |pos: usize| {
            let mut data = vec![0u8; DISTANCE_MAX + 16];
            data[..4].copy_from_slice(b"WXYZ");
            data[pos..pos + 4].copy_from_slice(b"WXYZ");
            let mut mf = MatchFinder::new(&data);
            mf.insert(0);
            mf.find(pos)
        };
        assert_eq!(lookup_at(DISTANCE_MAX), Some(0));
        assert_eq!(lookup_at(DISTANCE_MAX + 1), None);
    }

    #[test]
    fn match_length_respects_limit() {
        let data = [5u8; 64];
        let mf = MatchFinder::new(&data);
        assert_eq!(mf.match_length(0, 1, 59), 58);
    }

    #[test]
    fn most_recent_occurrence_wins() {
        let data = b"abcd....abcd....abcd....0123456789";
        let mut mf = MatchFinder::new(data);
        assert_eq!(mf.find(0), None);
        assert_eq!(mf.find(8), Some(0));
        assert_eq!(mf.find(16), Some(8));
    }

    #[test]
    fn unrelated_prefixes_do_not_match() {
        let data = b"abcdefghijklmnopqrstuvwxyz";
        let mut mf = MatchFinder::new(data);
        for pos in 0..=data.len() - 4 {
            assert_eq!(mf.find(pos), None, "position {pos}");
        }
    }

    #[test]
    fn match_length_extends_past_prefix() {
        let data = b"0123456789--0123456789--tail.";
        let mf = MatchFinder::new(data);
        // "0123456789--" repeats; "tail." does not.
        assert_eq!(mf.match_length(0, 12, data.len()), 12);
        assert_eq!(mf.match_length(0, 12, 20), 8);
    }
}
