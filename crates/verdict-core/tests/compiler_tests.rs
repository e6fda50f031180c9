use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use verdict_core::render::{depth_class, HAS_CHILDREN_CLASS, HIDE_CLASS};
use verdict_core::{
    BuiltinTemplates, ChronoFormatter, CompileError, Element, ErrorClass, LogColumns, LogEntry,
    LogStatus, Node, ReportConfig, TemplateKind, TemplateProvider, TestNode, TestStatus,
    TreeCompiler,
};

fn compiler() -> TreeCompiler {
    TreeCompiler::from_config(&ReportConfig::default()).unwrap()
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn log(details: &str) -> LogEntry {
    LogEntry::new(LogStatus::Pass, details).at(start())
}

/// Direct `li` children of an element's own `.node-list`.
fn node_entries(fragment: &Element) -> Vec<&Element> {
    fragment
        .select_first(".node-list")
        .map(|list| list.child_elements().collect())
        .unwrap_or_default()
}

fn rows(fragment: &Element) -> Vec<&Element> {
    fragment.select_first("tbody").unwrap().child_elements().collect()
}

#[test]
fn test_empty_test_has_no_rows_or_children() {
    let root = TestNode::new("empty");

    let fragment = compiler().compile(&root).unwrap();

    assert!(rows(&fragment).is_empty());
    assert!(node_entries(&fragment).is_empty());
    assert!(!fragment.has_class(HAS_CHILDREN_CLASS));
}

#[test]
fn test_root_single_log_three_columns() {
    let root = TestNode::new("login").with_log(log("line1\nline2"));

    let fragment = compiler().compile(&root).unwrap();

    let rows = rows(&fragment);
    assert_eq!(rows.len(), 1);
    let row = rows[0];
    assert_eq!(row.select_first("td.timestamp").unwrap().text(), "12:00:00");
    let status = row.select_first("td.status").unwrap();
    assert!(status.has_class("pass"));
    assert_eq!(status.attr("title"), Some("pass"));
    assert!(row.select_first(".step-name").is_none());
    assert_eq!(row.select("td").len(), 3);

    let details = row.select_first(".step-details").unwrap().inner_html();
    assert_eq!(details, "line1<br>line2");
}

#[test]
fn test_rows_keep_log_order() {
    let root = TestNode::new("ordered")
        .with_log(log("first"))
        .with_log(log("second"))
        .with_log(log("third"));

    let fragment = compiler().compile(&root).unwrap();

    let details: Vec<String> = rows(&fragment)
        .iter()
        .map(|row| row.select_first(".step-details").unwrap().text())
        .collect();
    assert_eq!(details, ["first", "second", "third"]);
}

#[test]
fn test_two_children_with_grandchild() {
    let root = TestNode::new("root")
        .with_child(TestNode::new("first").with_child(TestNode::new("grandchild")))
        .with_child(TestNode::new("second"));

    let fragment = compiler().compile(&root).unwrap();

    assert!(fragment.has_class(HAS_CHILDREN_CLASS));
    let entries = node_entries(&fragment);
    assert_eq!(entries.len(), 2);

    assert!(entries[0].has_class("node-1x"));
    let nested = node_entries(entries[0]);
    assert_eq!(nested.len(), 1);
    assert!(nested[0].has_class("node-2x"));
    assert_eq!(nested[0].select_first(".test-node-name").unwrap().text(), "grandchild");

    assert!(entries[1].has_class("node-1x"));
    assert!(!entries[1].has_class("node-2x"));
    assert!(node_entries(entries[1]).is_empty());
}

#[test]
fn test_depth_restored_across_siblings() {
    let deep = TestNode::new("a")
        .with_child(TestNode::new("a1").with_child(TestNode::new("a1x").with_child(TestNode::new("a1xy"))));
    let root = TestNode::new("root")
        .with_child(deep)
        .with_child(TestNode::new("b").with_child(TestNode::new("b1")));

    let fragment = compiler().compile(&root).unwrap();

    fn check(entries: Vec<&Element>, depth: usize) {
        for entry in entries {
            assert!(entry.has_class(&depth_class(depth)), "{:?}", entry.classes());
            check(node_entries(entry), depth + 1);
        }
    }
    check(node_entries(&fragment), 1);

    let b = node_entries(&fragment)[1];
    assert!(b.has_class("node-1x"));
    assert!(node_entries(b)[0].has_class("node-2x"));
}

#[test]
fn test_child_node_fields() {
    let child = TestNode::new("step one")
        .with_status(TestStatus::Warning)
        .with_timing(start(), start() + Duration::seconds(3_725));
    let id = child.id.to_string();
    let root = TestNode::new("root").with_child(child);

    let fragment = compiler().compile(&root).unwrap();
    let entry = node_entries(&fragment)[0];

    assert!(entry.has_class("warning"));
    assert_eq!(entry.attr("data-test-id"), Some(id.as_str()));
    assert_eq!(entry.select_first(".test-node-name").unwrap().text(), "step one");
    assert_eq!(
        entry.select_first(".test-started-time").unwrap().text(),
        "2024-03-01 12:00:00"
    );
    assert_eq!(
        entry.select_first(".test-ended-time").unwrap().text(),
        "2024-03-01 13:02:05"
    );
    assert_eq!(entry.select_first(".test-time-taken").unwrap().text(), "1h 2m 5s");
}

#[test]
fn test_child_elapsed_wraps_at_24_hours() {
    let child = TestNode::new("long").with_timing(start(), start() + Duration::hours(25));
    let root = TestNode::new("root").with_child(child);

    let fragment = compiler().compile(&root).unwrap();

    let taken = node_entries(&fragment)[0].select_first(".test-time-taken").unwrap().text();
    assert_eq!(taken, "1h 0m 0s");
}

#[test]
fn test_child_without_logs_has_no_status_badge() {
    let root = TestNode::new("root")
        .with_child(TestNode::new("silent").with_status(TestStatus::Fail))
        .with_child(
            TestNode::new("chatty")
                .with_status(TestStatus::Fail)
                .with_log(log("one"))
                .with_log(log("two")),
        );

    let fragment = compiler().compile(&root).unwrap();
    let entries = node_entries(&fragment);

    let silent = entries[0];
    assert!(silent.has_class("fail"));
    assert!(!silent.select_first(".test-node").unwrap().has_class("fail"));
    assert_eq!(silent.select_first(".test-status").unwrap().text(), "");
    assert!(rows(silent).is_empty());

    let chatty = entries[1];
    assert!(chatty.select_first(".test-node").unwrap().has_class("fail"));
    let status = chatty.select_first(".test-status").unwrap();
    assert!(status.has_class("fail"));
    assert_eq!(status.text(), "fail");
    assert_eq!(rows(chatty).len(), 2);
}

#[test]
fn test_nested_rows_embed_details_without_reparse() {
    let root = TestNode::new("root").with_child(TestNode::new("child").with_log(log("a</b>\nb")));

    let fragment = compiler().compile(&root).unwrap();

    let entry = node_entries(&fragment)[0];
    let cell = rows(entry)[0].select_first(".step-details").unwrap();
    assert_eq!(cell.children(), [Node::Markup("a</b><br />b".to_string())]);
}

#[test]
fn test_step_name_follows_each_nodes_own_columns() {
    let four = TestNode::new("four")
        .with_columns(4)
        .with_log(log("x").with_step(""));
    let root = TestNode::new("three").with_log(log("y")).with_child(four);

    let fragment = compiler().compile(&root).unwrap();

    assert!(rows(&fragment)[0].select_first(".step-name").is_none());

    let child_row = rows(node_entries(&fragment)[0])[0];
    let step = child_row.select_first(".step-name").unwrap();
    assert_eq!(step.children(), [Node::Text(String::new())]);
    assert_eq!(child_row.select("td").len(), 4);
}

#[test]
fn test_tag_chips() {
    let untagged = compiler().compile(&TestNode::new("plain")).unwrap();
    assert!(untagged.select_first(".test-attributes").unwrap().has_class(HIDE_CLASS));

    let tagged = compiler()
        .compile(&TestNode::new("tagged").with_category("Smoke"))
        .unwrap();
    assert!(!tagged.select_first(".test-attributes").unwrap().has_class(HIDE_CLASS));
    let chips: Vec<&Element> = tagged.select_first(".categories").unwrap().child_elements().collect();
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].text(), "Smoke");
    assert!(tagged.select_first(".category-assigned").unwrap().has_class("smoke"));
}

#[test]
fn test_compile_is_idempotent() {
    let root = TestNode::new("root")
        .with_category("Smoke")
        .with_log(log("a\nb"))
        .with_child(TestNode::new("child").with_log(log("c")));

    let compiler = compiler();
    assert_eq!(compiler.compile(&root).unwrap(), compiler.compile(&root).unwrap());
}

#[test]
fn test_unsupported_column_count() {
    let root = TestNode::new("root").with_child(TestNode::new("wide").with_columns(5));

    let err = compiler().compile(&root).unwrap_err();

    assert!(matches!(
        err,
        CompileError::UnsupportedColumnCount { ref test, count: 5 } if test == "wide"
    ));
    assert_eq!(err.class(), ErrorClass::Configuration);
}

#[test]
fn test_out_of_byte_range_column_count() {
    for count in [300, -1] {
        let root = TestNode::new("root").with_columns(count);

        let err = compiler().compile(&root).unwrap_err();

        assert!(matches!(
            err,
            CompileError::UnsupportedColumnCount { count: c, .. } if c == count
        ));
    }
}

#[test]
fn test_explicit_child_flag_must_agree() {
    let mut root = TestNode::new("root");
    root.has_child_nodes = Some(true);

    let err = compiler().compile(&root).unwrap_err();
    assert!(matches!(err, CompileError::ChildFlagMismatch { declared: true, actual: 0, .. }));

    root.has_child_nodes = Some(false);
    assert!(compiler().compile(&root).is_ok());
}

#[test]
fn test_end_before_start_is_rejected() {
    let root = TestNode::new("backwards").with_timing(start(), start() - Duration::seconds(1));
    assert!(matches!(
        compiler().compile(&root),
        Err(CompileError::InvalidTiming { .. })
    ));
}

/// Provider whose log rows lack the details cell.
struct BrokenRows(BuiltinTemplates);

impl TemplateProvider for BrokenRows {
    fn skeleton(&self, kind: TemplateKind, columns: LogColumns) -> Result<Element, CompileError> {
        match kind {
            TemplateKind::LogRow => {
                let mut row = Element::new("tr");
                let mut cell = Element::new("td");
                cell.add_class("timestamp");
                row.append_child(cell);
                Ok(row)
            }
            _ => self.0.skeleton(kind, columns),
        }
    }
}

#[test]
fn test_missing_slot_aborts_whole_compile() {
    let compiler = TreeCompiler::new(
        Arc::new(BrokenRows(BuiltinTemplates::new().unwrap())),
        Arc::new(ChronoFormatter::default()),
    );
    let root = TestNode::new("root").with_child(TestNode::new("child").with_log(log("x")));

    let err = compiler.compile(&root).unwrap_err();

    assert!(matches!(
        err,
        CompileError::MissingSlot { kind: TemplateKind::LogRow, ref selector } if selector == "td.status"
    ));
    assert_eq!(err.class(), ErrorClass::Template);
}

#[test]
fn test_compile_all_and_serialize() {
    let roots = vec![TestNode::new("one"), TestNode::new("two <b>")];

    let fragments = compiler().compile_all(&roots).unwrap();

    assert_eq!(fragments.len(), 2);
    let html = fragments[1].to_html();
    assert!(html.starts_with("<li class=\"collection-item test displayed unknown\""));
    assert!(html.contains("two &lt;b&gt;"));
}
