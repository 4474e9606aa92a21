//! Tests for legend construction, overrides, and collision reporting.

use super::*;

fn hex(s: &str) -> ColorHex {
    s.parse().unwrap()
}

#[test]
fn new_legend_is_empty() {
    let legend = Legend::new();
    assert!(legend.is_empty());
    assert_eq!(legend.len(), 0);
    assert!(legend.collisions().is_empty());
}

#[test]
fn insert_returns_hashed_color() {
    let mut legend = Legend::new();
    assert_eq!(legend.insert("network"), Some(hex("#e4575e")));
    assert_eq!(legend.get("network"), Some(hex("#e4575e")));
}

#[test]
fn insert_trims_and_deduplicates() {
    let mut legend = Legend::new();
    legend.insert("process");
    legend.insert("  process\t");
    legend.insert("process");
    assert_eq!(legend.len(), 1);
    assert_eq!(legend.get(" process "), Some(string_to_color("process")));
}

#[test]
fn blank_labels_are_ignored() {
    let mut legend = Legend::new();
    assert_eq!(legend.insert(""), None);
    assert_eq!(legend.insert("   "), None);
    assert!(legend.is_empty());
}

#[test]
fn iter_is_sorted_by_label() {
    let legend: Legend = ["syscalls", "container", "network"].into_iter().collect();
    let labels: Vec<&str> = legend.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["container", "network", "syscalls"]);
}

#[test]
fn overrides_win_over_hash() {
    let mut legend = Legend::with_overrides([("critical", hex("#ff0000"))]);
    assert_eq!(legend.insert("critical"), Some(hex("#ff0000")));
    assert_eq!(legend.insert("network"), Some(hex("#e4575e")));
    assert!(legend.is_pinned("critical"));
    assert!(!legend.is_pinned("network"));
}

#[test]
fn override_labels_are_trimmed_and_blank_ones_dropped() {
    let legend = Legend::with_overrides([(" ops ", hex("#00ff00")), ("  ", hex("#0000ff"))]);
    assert!(legend.is_pinned("ops"));
    assert!(!legend.is_pinned(""));
}

#[test]
fn unused_overrides_do_not_appear() {
    let legend = Legend::with_overrides([("critical", hex("#ff0000"))]);
    assert!(legend.is_empty());
    assert_eq!(legend.get("critical"), None);
}

#[test]
fn collisions_group_labels_sharing_a_color() {
    let mut legend = Legend::with_overrides([("alert", hex("#e4575e"))]);
    legend.extend(["network", "alert", "process", "\u{0}a", "a"]);

    let collisions = legend.collisions();
    assert_eq!(collisions.len(), 2);
    assert_eq!(collisions[0], (hex("#000061"), vec!["\u{0}a", "a"]));
    assert_eq!(collisions[1], (hex("#e4575e"), vec!["alert", "network"]));
}

#[test]
fn serializes_as_json_object() {
    let legend: Legend = ["rule", "list"].into_iter().collect();
    let json = serde_json::to_string(&legend).unwrap();
    assert_eq!(json, r##"{"list":"#00a866","rule":"#00b27c"}"##);
}
