//! Output sink contract (spec.md §1, §6) — external collaborator.
//!
//! spec.md places "output formatting (diff-style, side-by-side, terse,
//! headings)" out of the core's scope. This module defines the contract
//! the driver renders results through, grounded in the teacher's
//! `src/dups/report.rs` three-mode split (summary/detailed/JSON): a
//! plain-text sink and a JSON sink, both driven off the same two report
//! events (a run, or a percentage line).
use serde::Serialize;

use crate::scanner::Run;

/// Consumes reported results one event at a time. Implementations decide
/// how (or whether) to render; the core never formats output itself.
pub trait OutputSink {
    /// A maximal matching run (non-percentage mode).
    fn report_run(&mut self, fname_a: &str, start_a: usize, fname_b: &str, start_b: usize, size: usize);

    /// A percentage-mode line: `fname_a` consists for `percent`% of
    /// `fname_b`'s material (spec.md §4.6's template).
    fn report_percentage(&mut self, fname_a: &str, fname_b: &str, percent: u8);
}

/// Renders runs and percentages as human-readable text, matching the
/// original tool's historic templates verbatim.
#[derive(Debug, Default)]
pub struct TextSink {
    lines: Vec<String>,
}

impl TextSink {
    pub fn new() -> Self {
        TextSink { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for TextSink {
    fn report_run(&mut self, fname_a: &str, start_a: usize, fname_b: &str, start_b: usize, size: usize) {
        self.lines.push(format!(
            "{fname_a} [{start_a}..{end_a}) == {fname_b} [{start_b}..{end_b}) ({size} tokens)",
            end_a = start_a + size,
            end_b = start_b + size,
        ));
    }

    fn report_percentage(&mut self, fname_a: &str, fname_b: &str, percent: u8) {
        self.lines
            .push(format!("{fname_a} consists for {percent} % of {fname_b} material"));
    }
}

/// A single reported event, for the JSON sink.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportEvent {
    Run {
        file_a: String,
        start_a: usize,
        file_b: String,
        start_b: usize,
        size: usize,
    },
    Percentage {
        file_a: String,
        file_b: String,
        percent: u8,
    },
}

/// Accumulates events for machine consumption, mirroring the teacher's
/// `report::json`'s "collect, then serialize once" shape.
#[derive(Debug, Default)]
pub struct JsonSink {
    events: Vec<ReportEvent>,
}

impl JsonSink {
    pub fn new() -> Self {
        JsonSink { events: Vec::new() }
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events)
    }
}

impl OutputSink for JsonSink {
    fn report_run(&mut self, fname_a: &str, start_a: usize, fname_b: &str, start_b: usize, size: usize) {
        self.events.push(ReportEvent::Run {
            file_a: fname_a.to_string(),
            start_a,
            file_b: fname_b.to_string(),
            start_b,
            size,
        });
    }

    fn report_percentage(&mut self, fname_a: &str, fname_b: &str, percent: u8) {
        self.events.push(ReportEvent::Percentage {
            file_a: fname_a.to_string(),
            file_b: fname_b.to_string(),
            percent,
        });
    }
}

/// Render a collected [`crate::collector::RunCollector`] through a sink,
/// resolving text indices to file names via the registry.
pub fn report_runs(
    runs: impl IntoIterator<Item = Run>,
    registry: &crate::registry::TextRegistry,
    sink: &mut impl OutputSink,
) {
    for run in runs {
        let text_a = registry.get(run.text_a).expect("run references a registered text");
        let text_b = registry.get(run.text_b).expect("run references a registered text");
        let rel_a = run.start_a - text_a.start;
        let rel_b = run.start_b - text_b.start;
        sink.report_run(&text_a.name, rel_a, &text_b.name, rel_b, run.size);
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
