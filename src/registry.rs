//! Text Registry (spec.md §3, §4.1).
//!
//! Grounded on `sim.c`/`hash.c`'s `struct text`/`Text[]` array:
//! `{ tx_fname, tx_start, tx_limit }` records laid down in ingestion
//! order, non-overlapping, whose union covers the whole token array.
//!
//! **Open question resolution** (spec.md §9): the source's policy for a
//! sentinel gap between abutting texts is left ambiguous. This crate
//! defines it concretely: texts abut exactly, with no gap
//! (`text[n].limit == text[n+1].start`). `tokenarray.h`'s contract has no
//! separator-token notion, and the Token Store's sentinel already
//! occupies index 0, so no further gap is needed for the first text to
//! start at position 1.
use crate::error::CoreError;

/// Which side of a new-vs-old comparison a text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    New,
    Old,
}

/// A file record: its name and the half-open token range it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub name: String,
    pub start: usize,
    pub limit: usize,
}

impl Text {
    pub fn len(&self) -> usize {
        self.limit - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.limit == self.start
    }
}

/// The table of input files and the token ranges they occupy.
///
/// Texts are registered in ingestion order; `new_old_boundary`, when set,
/// is the index of the first text belonging to the "old" partition —
/// every text registered before it is "new" (spec.md §4.2's `new_vs_old`).
#[derive(Debug, Default)]
pub struct TextRegistry {
    texts: Vec<Text>,
    new_old_boundary: Option<usize>,
}

impl TextRegistry {
    pub fn new() -> Self {
        TextRegistry::default()
    }

    /// Append a `Text` record. `start` must equal the token store's
    /// current length at call time; `limit` must be `>= start`.
    pub fn register_text(
        &mut self,
        name: impl Into<String>,
        start: usize,
        limit: usize,
        expected_start: usize,
    ) -> Result<usize, CoreError> {
        if start != expected_start {
            return Err(CoreError::internal(
                "text-registry-start-mismatch",
                format!(
                    "text start {start} does not match token store length {expected_start}"
                ),
            ));
        }
        if limit < start {
            return Err(CoreError::internal(
                "text-registry-bad-range",
                format!("text limit {limit} is before start {start}"),
            ));
        }
        self.texts.push(Text {
            name: name.into(),
            start,
            limit,
        });
        Ok(self.texts.len() - 1)
    }

    /// Mark every text registered so far, and from now on, as boundary
    /// between the "new" and "old" partitions: texts at or after
    /// `index` are "old"; earlier texts are "new".
    pub fn set_new_old_boundary(&mut self, index: usize) {
        self.new_old_boundary = Some(index);
    }

    pub fn partition_of(&self, text_index: usize) -> Partition {
        match self.new_old_boundary {
            Some(boundary) if text_index >= boundary => Partition::Old,
            _ => Partition::New,
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Text> {
        self.texts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Text> {
        self.texts.iter()
    }

    /// Find the index of the text containing token position `pos`, via
    /// binary search over the (non-overlapping, ascending) text ranges.
    pub fn text_index_at(&self, pos: usize) -> Result<usize, CoreError> {
        self.texts
            .binary_search_by(|t| {
                if pos < t.start {
                    std::cmp::Ordering::Greater
                } else if pos >= t.limit {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .map_err(|_| {
                CoreError::internal(
                    "text-registry-position-not-found",
                    format!("position {pos} is not covered by any registered text"),
                )
            })
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
