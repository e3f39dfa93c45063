//! CLI argument definitions for the `sim` command.
//!
//! Translates `examples/original_source/sim.c`'s `optlist` to long flags
//! (spec.md is silent on CLI shape; this is ambient driver plumbing, not
//! core behavior). The `new`/`old` split that the original expresses with
//! a bare `/` or `|` separator among positional file arguments is instead
//! two separate arguments here — `paths` and `--old` — since that is the
//! idiomatic `clap` shape for "two groups of paths" (this repo's
//! `--old` stands in for the original's separator token).
use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_MIN_RUN_SIZE;

/// Detect duplicated/similar runs of tokens across source files.
#[derive(Parser)]
#[command(name = "sim", version, about = "Detect duplicated/similar runs of tokens across source files")]
pub struct Cli {
    /// Files or directories to scan (the "new" corpus). Directories are
    /// walked recursively.
    pub paths: Vec<PathBuf>,

    /// Files or directories in the "old" corpus, compared against `paths`
    /// under `--new-vs-old` (stands in for the original's bare `/`
    /// new/old separator).
    #[arg(long = "old")]
    pub old_paths: Vec<PathBuf>,

    /// Minimum length (in tokens) of a reported run.
    #[arg(short = 'r', long, default_value_t = DEFAULT_MIN_RUN_SIZE)]
    pub min_run_size: usize,

    /// Suppress percentage matches below this percent (requires
    /// `--percentage` or `--main-contributor-only`).
    #[arg(short = 't', long)]
    pub threshold: Option<u8>,

    /// Compare every file only against other files, not against itself.
    #[arg(short = 'e', long)]
    pub separate_each: bool,

    /// Suppress self-matches of a file against itself.
    #[arg(short = 's', long)]
    pub no_self: bool,

    /// Report only matches where at least one endpoint is in the "new"
    /// corpus.
    #[arg(short = 'S', long)]
    pub new_vs_old: bool,

    /// Report per-file-pair overlap percentages instead of individual runs.
    #[arg(short = 'p', long)]
    pub percentage: bool,

    /// In percentage mode, for each file report only its top contributor
    /// (implies `--percentage`, matching `sim.c`'s `-P` setting `-p`).
    #[arg(short = 'P', long)]
    pub main_contributor_only: bool,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
