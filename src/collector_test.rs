use super::*;

fn run(text_a: usize, start_a: usize, text_b: usize, start_b: usize, size: usize) -> Run {
    Run { text_a, start_a, text_b, start_b, size }
}

#[test]
fn sorts_by_size_descending() {
    let mut c = RunCollector::new();
    c.insert(run(0, 0, 1, 0, 5));
    c.insert(run(0, 1, 1, 1, 20));
    c.insert(run(0, 2, 1, 2, 10));
    let sizes: Vec<usize> = c.iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![20, 10, 5]);
}

#[test]
fn ties_in_size_sort_by_text_a_then_start_a() {
    let mut c = RunCollector::new();
    c.insert(run(1, 5, 9, 9, 10));
    c.insert(run(0, 9, 9, 9, 10));
    c.insert(run(0, 3, 9, 9, 10));
    let keys: Vec<(usize, usize)> = c.iter().map(|r| (r.text_a, r.start_a)).collect();
    assert_eq!(keys, vec![(0, 3), (0, 9), (1, 5)]);
}

#[test]
fn empty_collector_reports_empty() {
    let c = RunCollector::new();
    assert!(c.is_empty());
    assert_eq!(c.len(), 0);
}

#[test]
fn into_vec_preserves_sorted_order() {
    let mut c = RunCollector::new();
    c.insert(run(0, 0, 1, 0, 3));
    c.insert(run(0, 1, 1, 1, 7));
    let v = c.into_vec();
    assert_eq!(v.iter().map(|r| r.size).collect::<Vec<_>>(), vec![7, 3]);
}
