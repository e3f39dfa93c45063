use super::*;
use crate::registry::TextRegistry;
use crate::scanner::Run;

#[test]
fn text_sink_formats_run_line() {
    let mut sink = TextSink::new();
    sink.report_run("a.rs", 3, "b.rs", 10, 5);
    assert_eq!(sink.lines(), &["a.rs [3..8) == b.rs [10..15) (5 tokens)"]);
}

#[test]
fn text_sink_formats_percentage_line() {
    let mut sink = TextSink::new();
    sink.report_percentage("a.rs", "b.rs", 42);
    assert_eq!(sink.lines(), &["a.rs consists for 42 % of b.rs material"]);
}

#[test]
fn json_sink_serializes_events() {
    let mut sink = JsonSink::new();
    sink.report_run("a.rs", 0, "b.rs", 4, 6);
    sink.report_percentage("a.rs", "b.rs", 50);
    let json = sink.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["kind"], "run");
    assert_eq!(parsed[0]["file_a"], "a.rs");
    assert_eq!(parsed[1]["kind"], "percentage");
    assert_eq!(parsed[1]["percent"], 50);
}

#[test]
fn report_runs_resolves_names_and_relative_offsets() {
    let mut registry = TextRegistry::new();
    registry.register_text("a.rs", 1, 11, 1).unwrap();
    registry.register_text("b.rs", 11, 21, 11).unwrap();

    let run = Run { text_a: 0, start_a: 4, text_b: 1, start_b: 15, size: 3 };
    let mut sink = TextSink::new();
    report_runs(vec![run], &registry, &mut sink);

    assert_eq!(sink.lines(), &["a.rs [3..6) == b.rs [4..7) (3 tokens)"]);
}
