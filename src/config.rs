//! Configuration parameters consumed by the core (spec.md §4.2).
//!
//! Grounded on `sim.c`'s option handling: `Min_Run_Size` defaults to
//! `DEFAULT_MIN_RUN_SIZE` and is rejected if zero; `Threshold_Percentage`
//! must fall in `1..=100`; selecting percentage mode (`-p`/`-P`) implies
//! `-e` (`separate_each`) and `-s` (`no_self`); `-t` requires `-p`/`-P`.
//! `Page_Width` is deliberately not carried here — it belongs to the
//! output formatter, which spec.md §1 places out of the core's scope.
use crate::error::CoreError;

/// Default minimum run size, matching `sim.c`'s `DEFAULT_MIN_RUN_SIZE`.
pub const DEFAULT_MIN_RUN_SIZE: usize = 24;

/// Validated configuration for a single core run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Minimum length (in tokens) of a reported run.
    pub min_run_size: usize,
    /// In percentage mode, suppress matches below this percent (1..=100).
    pub threshold_percentage: u8,
    /// Compare every file only against other files, not against itself.
    pub separate_each: bool,
    /// Suppress self-matches of a file against itself.
    pub no_self: bool,
    /// Report only matches where at least one endpoint is in "new".
    pub new_vs_old: bool,
    /// In percentage mode, for each file report only its top contributor.
    pub main_contributor_only: bool,
}

/// Builder for `Config`, mirroring the CLI's incremental option handling
/// in `sim.c`'s `main()` before `fatal()` would be called on bad input.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    min_run_size: usize,
    threshold_percentage: u8,
    separate_each: bool,
    no_self: bool,
    new_vs_old: bool,
    main_contributor_only: bool,
    percentage_mode: bool,
    threshold_was_set: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder {
            min_run_size: DEFAULT_MIN_RUN_SIZE,
            threshold_percentage: 1,
            separate_each: false,
            no_self: false,
            new_vs_old: false,
            main_contributor_only: false,
            percentage_mode: false,
            threshold_was_set: false,
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_run_size(mut self, n: usize) -> Self {
        self.min_run_size = n;
        self
    }

    pub fn threshold_percentage(mut self, p: u8) -> Self {
        self.threshold_percentage = p;
        self.threshold_was_set = true;
        self
    }

    pub fn separate_each(mut self, v: bool) -> Self {
        self.separate_each = v;
        self
    }

    pub fn no_self(mut self, v: bool) -> Self {
        self.no_self = v;
        self
    }

    pub fn new_vs_old(mut self, v: bool) -> Self {
        self.new_vs_old = v;
        self
    }

    pub fn main_contributor_only(mut self, v: bool) -> Self {
        self.main_contributor_only = v;
        self
    }

    /// Percentage mode implies `separate_each` and `no_self`, matching
    /// `sim.c`'s `if (is_set_option('p')) { set_option('e'); set_option('s'); }`.
    pub fn percentage_mode(mut self, v: bool) -> Self {
        self.percentage_mode = v;
        if v {
            self.separate_each = true;
            self.no_self = true;
        }
        self
    }

    /// Validate and freeze into a `Config`, or reject invalid input.
    pub fn build(self) -> Result<Config, CoreError> {
        if self.min_run_size == 0 {
            return Err(CoreError::configuration(
                "bad or zero run size; min_run_size must be >= 1",
            ));
        }
        if self.threshold_percentage == 0 || self.threshold_percentage > 100 {
            return Err(CoreError::configuration(
                "threshold must be between 1 and 100",
            ));
        }
        if self.threshold_was_set && !self.percentage_mode {
            return Err(CoreError::configuration(
                "threshold_percentage requires percentage mode",
            ));
        }
        Ok(Config {
            min_run_size: self.min_run_size,
            threshold_percentage: self.threshold_percentage,
            separate_each: self.separate_each,
            no_self: self.no_self,
            new_vs_old: self.new_vs_old,
            main_contributor_only: self.main_contributor_only,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
