//! Forward-Reference Index (spec.md §4.3).
//!
//! Built in two sweeps over the frozen Token Store, grounded bit-for-bit
//! on `hash.c`'s `Make_Forward_References` / `make_forward_references_hash1`
//! / `clean_forward_references_hash2`:
//!
//! **Sweep 1** hashes a `min_run_size`-token sample window at every
//! eligible position into a transient prime-sized table (`last_index`),
//! threading each bucket's positions into an ascending chain via
//! `forward_reference[last_index[b]] = p`.
//!
//! **Sweep 2** walks every chain and short-circuits past any member whose
//! wide secondary hash disagrees with the chain head's, filtering out
//! `hash1` collisions cheaply before the Run Scanner ever compares actual
//! tokens.
//!
//! Module split mirrors the teacher's `src/dups/detector/` layout
//! (`mod.rs` orchestrating, sibling files for the hashing and sizing
//! helpers).
mod hashing;
mod primes;

use crate::error::CoreError;
use crate::registry::TextRegistry;
use crate::store::TokenStore;

pub use hashing::N_SAMPLES;

/// The `fr[0..N)` array and the sample positions used to build it.
pub struct ForwardRefIndex {
    fr: Vec<usize>,
    sample_pos: [usize; N_SAMPLES],
}

impl ForwardRefIndex {
    /// Build the index from a frozen Token Store and its Text Registry.
    /// `may_be_start_of_run` is the lexer collaborator's predicate
    /// (spec.md §3, §6).
    pub fn build(
        store: &TokenStore,
        registry: &TextRegistry,
        min_run_size: usize,
        may_be_start_of_run: impl Fn(crate::store::Token) -> bool,
    ) -> Result<Self, CoreError> {
        let n = store.length();
        let sample_pos = hashing::sample_positions(min_run_size);
        let mut fr = vec![0usize; n];

        if n > 1 {
            Self::sweep1(store, registry, min_run_size, &sample_pos, &may_be_start_of_run, &mut fr)?;
            Self::sweep2(store, min_run_size, &sample_pos, &mut fr)?;
        }

        let index = ForwardRefIndex { fr, sample_pos };
        #[cfg(debug_assertions)]
        index.check_invariants()?;
        Ok(index)
    }

    fn sweep1(
        store: &TokenStore,
        registry: &TextRegistry,
        min_run_size: usize,
        sample_pos: &[usize; N_SAMPLES],
        may_be_start_of_run: &impl Fn(crate::store::Token) -> bool,
        fr: &mut [usize],
    ) -> Result<(), CoreError> {
        let n = store.length() as u64;
        let schedule_idx = primes::schedule_index_for(n);

        let mut table_idx = schedule_idx;
        let mut last_index: Option<Vec<usize>> = None;
        loop {
            let size = primes::PRIMES[table_idx] as usize;
            let mut table = Vec::new();
            if table.try_reserve_exact(size).is_ok() {
                table.resize(size, 0usize);
                last_index = Some(table);
                break;
            }
            if table_idx == 0 {
                break;
            }
            table_idx -= 1;
        }
        let mut last_index = last_index
            .ok_or_else(|| CoreError::resource("out of memory allocating the primary hash table"))?;
        let table_size = last_index.len() as u64;

        for text in registry.iter() {
            if text.len() < min_run_size {
                continue;
            }
            let upper = text.limit - min_run_size;
            for j in text.start..=upper {
                let tok = store.get(j)?;
                if !may_be_start_of_run(tok) {
                    continue;
                }
                let window = store.range(j, min_run_size)?;
                let h = hashing::hash1(window, sample_pos) as u64 % table_size;
                let bucket = h as usize;
                if last_index[bucket] != 0 {
                    fr[last_index[bucket]] = j;
                }
                last_index[bucket] = j;
            }
        }
        Ok(())
    }

    fn sweep2(
        store: &TokenStore,
        min_run_size: usize,
        sample_pos: &[usize; N_SAMPLES],
        fr: &mut [usize],
    ) -> Result<(), CoreError> {
        let n = store.length();
        let mut i = 1usize;
        while i + min_run_size < n {
            if fr[i] != 0 {
                let h2 = hashing::hash2(store.range(i, min_run_size)?, sample_pos);
                let mut j = fr[i];
                while j != 0 && hashing::hash2(store.range(j, min_run_size)?, sample_pos) != h2 {
                    j = fr[j];
                }
                fr[i] = j;
            }
            i += 1;
        }
        Ok(())
    }

    /// Query: the next position hash-equivalent to `i`, or 0.
    pub fn forward_ref(&self, i: usize) -> Result<usize, CoreError> {
        self.fr.get(i).copied().ok_or_else(|| {
            CoreError::internal(
                "fref-index-range",
                format!("index {i} out of range (length {})", self.fr.len()),
            )
        })
    }

    pub fn sample_pos(&self) -> &[usize; N_SAMPLES] {
        &self.sample_pos
    }

    /// Release the array (spec.md §4.3's `free_forward_references()`).
    pub fn free(&mut self) {
        self.fr = Vec::new();
    }

    /// Diagnostic check of invariants 1-3 (spec.md §8): the sentinel is
    /// zero, chains strictly increase, and no position is reachable from
    /// two distinct chain starts. Grounded on `hash.c`'s
    /// `db_forward_reference_check` (`DB_FORW_REF`), reduced from a
    /// separate debug build/output file to a `cfg(debug_assertions)`
    /// runtime check, as idiomatic Rust prefers.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), CoreError> {
        if self.fr.is_empty() {
            return Ok(());
        }
        if self.fr[0] != 0 {
            return Err(CoreError::internal(
                "fref-sentinel-nonzero",
                "forward_reference[0] is not zero",
            ));
        }
        let mut crossed_out = vec![false; self.fr.len()];
        for start in 1..self.fr.len() {
            if self.fr[start] == 0 || crossed_out[start] {
                continue;
            }
            let mut fw = start;
            loop {
                let next = self.fr[fw];
                if next == 0 {
                    break;
                }
                if next <= fw {
                    return Err(CoreError::internal(
                        "fref-non-monotone-chain",
                        format!("forward_reference[{fw}] = {next} does not increase"),
                    ));
                }
                if crossed_out[next] {
                    return Err(CoreError::internal(
                        "fref-chain-cross",
                        format!("position {next} is reachable from two distinct chains"),
                    ));
                }
                crossed_out[next] = true;
                fw = next;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
