//! Line-level change markers between baseline and current text.

use std::collections::BTreeMap;

use similar::{ChangeTag, TextDiff};

/// Diff status for a line of the modified text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// Line unchanged from baseline
    Unchanged,
    /// Line added (not in baseline)
    Added,
    /// Line modified (replaces a baseline line)
    Modified,
}

/// Change markers for the modified side of a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// 0-based line of modified text -> status (unchanged lines omitted)
    line_statuses: BTreeMap<usize, LineStatus>,
    /// 0-based line -> number of baseline lines deleted after it
    deleted_after: BTreeMap<usize, usize>,
    /// Baseline lines deleted above the first line
    deleted_before_start: usize,
    added: usize,
    removed: usize,
}

impl DiffStats {
    /// Compare baseline against current text line by line.
    pub fn compute(original: &str, modified: &str) -> Self {
        let diff = TextDiff::from_lines(original, modified);
        let tags: Vec<ChangeTag> = diff.iter_all_changes().map(|c| c.tag()).collect();

        let mut stats = Self::default();
        let mut new_idx = 0;
        let mut i = 0;

        while i < tags.len() {
            match tags[i] {
                ChangeTag::Equal => {
                    new_idx += 1;
                    i += 1;
                }
                ChangeTag::Delete | ChangeTag::Insert => {
                    // A run of deletions followed by a run of insertions:
                    // pair them up as modifications, the rest are pure
                    // additions or deletions.
                    let mut deletes = 0;
                    while i < tags.len() && tags[i] == ChangeTag::Delete {
                        deletes += 1;
                        i += 1;
                    }
                    let mut inserts = 0;
                    while i < tags.len() && tags[i] == ChangeTag::Insert {
                        inserts += 1;
                        i += 1;
                    }

                    stats.removed += deletes;
                    stats.added += inserts;

                    let paired = deletes.min(inserts);
                    for offset in 0..inserts {
                        let status = if offset < paired {
                            LineStatus::Modified
                        } else {
                            LineStatus::Added
                        };
                        stats.line_statuses.insert(new_idx + offset, status);
                    }
                    new_idx += inserts;

                    let deleted = deletes - paired;
                    if deleted > 0 {
                        match new_idx.checked_sub(1) {
                            Some(line) => *stats.deleted_after.entry(line).or_insert(0) += deleted,
                            None => stats.deleted_before_start += deleted,
                        }
                    }
                }
            }
        }

        stats
    }

    /// True when baseline and current text are identical line-wise.
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }

    /// Status of a line in the modified text.
    pub fn status(&self, line: usize) -> LineStatus {
        self.line_statuses
            .get(&line)
            .copied()
            .unwrap_or(LineStatus::Unchanged)
    }

    /// Number of baseline lines deleted right after `line`.
    pub fn deleted_after(&self, line: usize) -> usize {
        self.deleted_after.get(&line).copied().unwrap_or(0)
    }

    /// Number of baseline lines deleted above the first line.
    pub fn deleted_before_start(&self) -> usize {
        self.deleted_before_start
    }

    /// Lines present only in the modified text.
    pub fn added_lines(&self) -> usize {
        self.added
    }

    /// Lines present only in the baseline.
    pub fn removed_lines(&self) -> usize {
        self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        let stats = DiffStats::compute("a\nb\n", "a\nb\n");
        assert!(stats.is_empty());
        assert_eq!(stats.status(0), LineStatus::Unchanged);
    }

    #[test]
    fn test_added_line_on_top() {
        let original = "pragma solidity ^0.8.24;\ncontract B {}";
        let modified = format!("// edited\n{}", original);
        let stats = DiffStats::compute(original, &modified);

        assert_eq!(stats.added_lines(), 1);
        assert_eq!(stats.removed_lines(), 0);
        assert_eq!(stats.status(0), LineStatus::Added);
        assert_eq!(stats.status(1), LineStatus::Unchanged);
    }

    #[test]
    fn test_modified_line() {
        let stats = DiffStats::compute("a\nb\nc\n", "a\nB\nc\n");
        assert_eq!(stats.status(1), LineStatus::Modified);
        assert_eq!(stats.added_lines(), 1);
        assert_eq!(stats.removed_lines(), 1);
        assert_eq!(stats.deleted_after(1), 0);
    }

    #[test]
    fn test_deleted_lines_marker() {
        let stats = DiffStats::compute("a\nb\nc\nd\n", "a\nd\n");
        assert_eq!(stats.removed_lines(), 2);
        assert_eq!(stats.deleted_after(0), 2);
        assert_eq!(stats.status(1), LineStatus::Unchanged);
    }

    #[test]
    fn test_deletion_at_top_is_not_after_first_line() {
        let top = DiffStats::compute("a\nb\n", "b\n");
        assert_eq!(top.deleted_before_start(), 1);
        assert_eq!(top.deleted_after(0), 0);

        let below = DiffStats::compute("b\na\n", "b\n");
        assert_eq!(below.deleted_before_start(), 0);
        assert_eq!(below.deleted_after(0), 1);

        assert_ne!(top, below);
    }
}
