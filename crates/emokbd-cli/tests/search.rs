use emokbd_testing::{TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn search_finds_by_label() {
    let world = TestWorld::new().with_sources();

    let result = world.run(&["search", "monkey", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_item_symbols(&json, &["🐒"]).unwrap();
    assert_eq!(json["content"]["query"], "monkey");
    assert_eq!(json["content"]["items"][0]["code"], "1F412");
}

#[test]
fn search_ranks_word_matches_first() {
    let world = TestWorld::new().with_sources();

    let result = world.run(&["search", "face", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_item_symbols(&json, &["😀", "😃", "😍"]).unwrap();
    assert_eq!(json["content"]["items"][0]["score"], 20);
}

#[test]
fn search_limit_keeps_the_total() {
    let world = TestWorld::new().with_sources();

    let result = world
        .run(&["search", "face", "--limit", "1", "--format", "json"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_item_symbols(&json, &["😀"]).unwrap();
    assert_eq!(json["content"]["total"], 3);
    assert!(json["suggestions"].as_array().is_some());
}

#[test]
fn search_joins_query_words() {
    let world = TestWorld::new().with_sources();

    let result = world
        .run(&["search", "grinning", "eyes", "--format", "json"])
        .unwrap();
    assert!(result.success());
    assertions::assert_item_symbols(&result.json().unwrap(), &["😃"]).unwrap();
}

#[test]
fn search_generates_unknown_code_points() {
    let world = TestWorld::new().with_sources();

    let result = world.run(&["search", "+263A", "--format", "json"]).unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_item_symbols(&json, &["☺"]).unwrap();
    assert_eq!(json["content"]["items"][0]["label"], "Generated Character");
}

#[test]
fn search_plain_output_lists_symbol_code_and_label() {
    let world = TestWorld::new().with_sources();

    let result = world.run(&["search", "arrow"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(
        assertions::contains_all(&["←", "2190", "→", "2192"]).eval(result.stdout()),
        "stdout: {}",
        result.stdout()
    );
}

#[test]
fn search_without_match_warns() {
    let world = TestWorld::new().with_sources();

    let result = world.run(&["search", "zebra"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("No match for 'zebra'"));
}

#[test]
fn search_reports_missing_sources() {
    let world = TestWorld::new();

    let result = world.run(&["search", "monkey"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().starts_with("Error:"), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("UnicodeData.txt"));
}

#[test]
fn search_writes_the_log_file() {
    let world = TestWorld::new().with_sources();

    let result = world
        .run(&["--log-level", "debug", "search", "dog"])
        .unwrap();
    assert!(result.success());

    let log = world.read("state/emokbd.log").unwrap();
    assert!(log.contains("logging started"), "log: {}", log);
}
