//! Percentage Aggregator (spec.md §4.6), grounded bit-for-bit on
//! `percentages.c`'s `struct match` / `add_to_percentages` /
//! `print_percentages`.
//!
//! Unlike the Run Collector, this aggregator records **both** directions
//! of every cross-file run (`(a, b)` and `(b, a)`) since a percentage is
//! inherently asymmetric: "A consists for P% of B material" is a
//! different claim than the reverse.
use crate::config::Config;
use crate::registry::TextRegistry;
use crate::scanner::Run;

/// A directed accumulation of how much of `fname_a`'s tokens reappear in
/// `fname_b`. Mirrors `percentages.c`'s `struct match`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Match {
    fname_a: String,
    fname_b: String,
    shared_tokens: usize,
    size_a: usize,
}

impl Match {
    fn percentage_permille(&self) -> u64 {
        // shared_tokens / size_a as a fixed-point ratio, scaled by
        // 1_000_000 so comparisons and the final floor(100 * ratio) are
        // exact integer arithmetic rather than float comparisons.
        if self.size_a == 0 {
            0
        } else {
            (self.shared_tokens as u64 * 1_000_000) / self.size_a as u64
        }
    }
}

/// Consumes runs and aggregates per-file-pair overlap, ready for sorted,
/// destructive printing (spec.md §4.6).
#[derive(Debug, Default)]
pub struct PercentageAggregator {
    matches: Vec<Match>,
}

impl PercentageAggregator {
    pub fn new() -> Self {
        PercentageAggregator { matches: Vec::new() }
    }

    /// Fold a run into both directed match records. Runs with
    /// `text_a == text_b` carry no percentage information and are
    /// skipped, matching `add_to_percentages`'s early return. Note that
    /// when `new_vs_old` is active, the scanner has already filtered out
    /// old-vs-old runs before they reach here, so this aggregator never
    /// needs its own new/old logic (spec.md §9).
    pub fn add_run(&mut self, run: &Run, registry: &TextRegistry) {
        if run.text_a == run.text_b {
            return;
        }
        let text_a = registry.get(run.text_a).expect("run references a registered text");
        let text_b = registry.get(run.text_b).expect("run references a registered text");
        self.accumulate(&text_a.name, &text_b.name, run.size, text_a.len());
        self.accumulate(&text_b.name, &text_a.name, run.size, text_b.len());
    }

    fn accumulate(&mut self, fname_a: &str, fname_b: &str, size: usize, size_a: usize) {
        for m in self.matches.iter_mut() {
            if m.fname_a == fname_a && m.fname_b == fname_b {
                m.shared_tokens += size;
                return;
            }
        }
        self.matches.push(Match {
            fname_a: fname_a.to_string(),
            fname_b: fname_b.to_string(),
            shared_tokens: size,
            size_a,
        });
    }

    /// Sort by `shared_tokens / size_a` descending (ties broken by
    /// insertion order, matching a stable sort over `percentages.c`'s
    /// `sort_match_list`), then destructively walk the list: each
    /// iteration prints its head (always) and every subsequent record
    /// sharing the head's `fname_a` (unless `main_contributor_only`),
    /// removing all of them. `callback` receives `(fname_a, fname_b,
    /// percentage)` only for records meeting `threshold_percentage`
    /// (percentage mode's only caller; spec.md §4.2).
    pub fn print(mut self, config: &Config, mut callback: impl FnMut(&str, &str, u8)) {
        self.matches
            .sort_by(|a, b| b.percentage_permille().cmp(&a.percentage_permille()));

        let mut remaining = self.matches;
        while !remaining.is_empty() {
            let head = remaining.remove(0);
            let fname = head.fname_a.clone();
            emit(&head, config, &mut callback);

            let mut i = 0;
            while i < remaining.len() {
                if remaining[i].fname_a == fname {
                    let m = remaining.remove(i);
                    if !config.main_contributor_only {
                        emit(&m, config, &mut callback);
                    }
                } else {
                    i += 1;
                }
            }
        }
    }
}

fn emit(m: &Match, config: &Config, callback: &mut impl FnMut(&str, &str, u8)) {
    let percent = percentage_of(m);
    if percent >= config.threshold_percentage {
        callback(&m.fname_a, &m.fname_b, percent);
    }
}

/// `P = min(100, floor(100 * shared_tokens / size_a))`.
fn percentage_of(m: &Match) -> u8 {
    if m.size_a == 0 {
        return 0;
    }
    let p = (100 * m.shared_tokens) / m.size_a;
    p.min(100) as u8
}

#[cfg(test)]
#[path = "percent_test.rs"]
mod tests;
