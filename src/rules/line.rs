//! Single-line slide and merge.
//!
//! A line is given in scan order: element 0 sits at the edge tiles move
//! toward. Tiles are compacted toward that edge, equal neighbours merge
//! pairwise from the leading edge, and a merged tile never merges again
//! in the same move (`[2, 2, 4]` becomes `[4, 4, 0]`, not `[8, 0, 0]`).
//! Tiles at [`MAX_TILE`](crate::core::board::MAX_TILE) never merge.

use smallvec::SmallVec;

use crate::core::board::can_merge;

/// Outcome of sliding one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineOutcome {
    /// Sum of merged tile values.
    pub score: u64,
    /// Number of merges performed.
    pub merges: u32,
    /// True if any cell of the line changed.
    pub changed: bool,
}

/// Slide and merge `line` in place toward index 0.
pub fn merge_line(line: &mut [u32]) -> LineOutcome {
    let tiles: SmallVec<[u32; 8]> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut outcome = LineOutcome::default();
    let mut write = 0;
    let mut i = 0;
    while i < tiles.len() {
        let value = if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] && can_merge(tiles[i]) {
            let merged = tiles[i] * 2;
            outcome.score += u64::from(merged);
            outcome.merges += 1;
            i += 2;
            merged
        } else {
            i += 1;
            tiles[i - 1]
        };

        if line[write] != value {
            outcome.changed = true;
            line[write] = value;
        }
        write += 1;
    }

    for cell in &mut line[write..] {
        if *cell != 0 {
            outcome.changed = true;
            *cell = 0;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::MAX_TILE;

    fn merged(mut line: Vec<u32>) -> (Vec<u32>, LineOutcome) {
        let outcome = merge_line(&mut line);
        (line, outcome)
    }

    #[test]
    fn test_compacts_without_merge() {
        let (line, outcome) = merged(vec![0, 2, 0, 4]);

        assert_eq!(line, vec![2, 4, 0, 0]);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.merges, 0);
        assert!(outcome.changed);
    }

    #[test]
    fn test_merges_across_gap() {
        let (line, outcome) = merged(vec![2, 0, 2, 0]);

        assert_eq!(line, vec![4, 0, 0, 0]);
        assert_eq!(outcome.score, 4);
        assert_eq!(outcome.merges, 1);
    }

    #[test]
    fn test_no_chained_merge() {
        let (line, outcome) = merged(vec![2, 2, 4, 0]);

        assert_eq!(line, vec![4, 4, 0, 0]);
        assert_eq!(outcome.score, 4);
    }

    #[test]
    fn test_leading_edge_first() {
        let (line, outcome) = merged(vec![2, 2, 2, 0]);
        assert_eq!(line, vec![4, 2, 0, 0]);
        assert_eq!(outcome.score, 4);

        let (line, outcome) = merged(vec![2, 2, 2, 2]);
        assert_eq!(line, vec![4, 4, 0, 0]);
        assert_eq!(outcome.score, 8);
        assert_eq!(outcome.merges, 2);
    }

    #[test]
    fn test_unchanged_line() {
        let (line, outcome) = merged(vec![2, 4, 2, 4]);
        assert_eq!(line, vec![2, 4, 2, 4]);
        assert!(!outcome.changed);
        assert_eq!(outcome.score, 0);

        let (line, outcome) = merged(vec![8, 0, 0, 0]);
        assert_eq!(line, vec![8, 0, 0, 0]);
        assert!(!outcome.changed);

        let (_, outcome) = merged(vec![0, 0, 0, 0]);
        assert!(!outcome.changed);
    }

    #[test]
    fn test_merge_then_compact() {
        let (line, outcome) = merged(vec![4, 0, 4, 8, 8, 0, 2]);

        assert_eq!(line, vec![8, 16, 2, 0, 0, 0, 0]);
        assert_eq!(outcome.score, 24);
        assert_eq!(outcome.merges, 2);
    }

    #[test]
    fn test_max_tiles_do_not_merge() {
        let (line, outcome) = merged(vec![MAX_TILE, MAX_TILE, 0]);
        assert_eq!(line, vec![MAX_TILE, MAX_TILE, 0]);
        assert!(!outcome.changed);
        assert_eq!(outcome.merges, 0);

        let half = MAX_TILE / 2;
        let (line, outcome) = merged(vec![0, half, half]);
        assert_eq!(line, vec![MAX_TILE, 0, 0]);
        assert_eq!(outcome.score, u64::from(MAX_TILE));
    }
}
