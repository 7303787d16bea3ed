use std::path::PathBuf;

use clang_gate::commands::check;
use clang_gate::commands::format::Style;
use clang_gate::commands::tidy::build_header_filter;
use clang_gate::parse::string_to_list;
use clang_gate::settings::{Settings, Tool};
use clang_gate::trigger;

fn settings(
    run_format: bool,
    run_tidy: bool,
    whitelist: &[&str],
    blacklist: &[&str],
) -> Settings {
    Settings {
        run_clang_format: run_format,
        run_clang_tidy: run_tidy,
        whitelist: whitelist.iter().map(|s| s.to_string()).collect(),
        blacklist: blacklist.iter().map(|s| s.to_string()).collect(),
    }
}

macro_rules! eligibility_test {
    ($name:ident, $settings:expr, $project:expr, $tool:ident, $expected:expr) => {
        #[test]
        fn $name() {
            let s = $settings;
            assert_eq!(
                s.should_run($project, Tool::$tool),
                $expected,
                "project: {}",
                $project,
            );
        }
    };
}

// ── Eligibility: enable flags ──

eligibility_test!(disabled_format, settings(false, true, &[], &[]), "p", ClangFormat, false);
eligibility_test!(disabled_tidy, settings(true, false, &[], &[]), "p", ClangTidy, false);
eligibility_test!(enabled_format, settings(true, false, &[], &[]), "p", ClangFormat, true);
eligibility_test!(enabled_tidy, settings(false, true, &[], &[]), "p", ClangTidy, true);

// ── Eligibility: empty lists pass every project ──

eligibility_test!(empty_lists_any_project, settings(true, true, &[], &[]), "anything", ClangTidy, true);
eligibility_test!(empty_lists_other_project, settings(true, true, &[], &[]), "else", ClangFormat, true);

// ── Eligibility: whitelist ──

eligibility_test!(whitelisted_runs, settings(true, true, &["core"], &[]), "core", ClangTidy, true);
eligibility_test!(not_whitelisted_skips, settings(true, true, &["core"], &[]), "util", ClangTidy, false);

// ── Eligibility: blacklist overrides everything ──

eligibility_test!(blacklisted_skips, settings(true, true, &[], &["core"]), "core", ClangTidy, false);
eligibility_test!(not_blacklisted_runs, settings(true, true, &[], &["util"]), "core", ClangTidy, true);
eligibility_test!(
    blacklist_beats_whitelist,
    settings(true, true, &["core"], &["core"]),
    "core",
    ClangFormat,
    false
);

// ── Eligibility: end-to-end scenario from the settings format docs ──

eligibility_test!(
    scenario_blacklisted_foo,
    settings(true, true, &[], &["foo"]),
    "foo",
    ClangTidy,
    false
);
eligibility_test!(
    scenario_unlisted_bar,
    settings(true, true, &[], &["foo"]),
    "bar",
    ClangTidy,
    true
);

// ── Change detection ──

#[test]
fn trigger_fires_only_on_the_rising_edge() {
    let off = settings(true, false, &[], &[]);
    let on = settings(true, true, &[], &[]);

    let sequence = [&off, &off, &on, &on];
    let mut cached: Option<&Settings> = None;
    let mut fired = Vec::new();
    for current in sequence {
        fired.push(trigger::trigger_needed("p", Tool::ClangTidy, current, cached));
        cached = Some(current);
    }
    assert_eq!(fired, vec![false, false, true, false]);
}

#[test]
fn trigger_silent_on_falling_edge() {
    let on = settings(true, true, &[], &[]);
    let off = settings(true, false, &[], &[]);
    assert!(!trigger::trigger_needed("p", Tool::ClangTidy, &off, Some(&on)));
    assert!(!trigger::trigger_needed("p", Tool::ClangTidy, &on, Some(&on)));
}

// ── Trigger file round-trip ──

#[test]
fn trigger_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.trigger");

    trigger::write_trigger(&path, true).unwrap();
    assert!(trigger::read_trigger(&path).unwrap());

    trigger::write_trigger(&path, false).unwrap();
    assert!(!trigger::read_trigger(&path).unwrap());
}

// ── Cache update ──

#[test]
fn cache_becomes_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("file.yaml");
    let cached = dir.path().join("cache.yaml");
    std::fs::write(&cached, "").unwrap();
    std::fs::write(&file, "data: {2, 3}").unwrap();
    assert_ne!(std::fs::read(&file).unwrap(), std::fs::read(&cached).unwrap());

    trigger::update_cache(&file, &cached).unwrap();
    assert_eq!(std::fs::read(&file).unwrap(), std::fs::read(&cached).unwrap());
}

// ── String list parsing ──

#[test]
fn string_list_variants() {
    assert_eq!(string_to_list("a,b,,c,,", ','), vec!["a", "b", "c"]);
    assert_eq!(string_to_list("  a , b,c  ", ','), vec!["a", "b", "c"]);
    assert!(string_to_list("", ',').is_empty());
    assert_eq!(
        string_to_list("Slash/ separated/ list", '/'),
        vec!["Slash", "separated", "list"]
    );
}

// ── Style argument parsing ──

#[test]
fn style_sentinel_and_path() {
    assert_eq!(Style::from_arg("file"), Style::Search);
    assert_eq!(
        Style::from_arg("cfg/.clang-format"),
        Style::Inline(PathBuf::from("cfg/.clang-format"))
    );
}

// ── Header filter construction ──

#[test]
fn header_filter_shapes() {
    let d = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(build_header_filter(None, &[], &[]), ".*");
    assert_eq!(build_header_filter(Some("^inc/.*"), &[], &[]), "^inc/.*");
    assert_eq!(
        build_header_filter(None, &d(&["include", "src"]), &[]),
        "^(include/|src/).*$"
    );
    assert_eq!(
        build_header_filter(None, &d(&["include"]), &d(&["third_party"])),
        "(?!.*third_party/)(include/).*$"
    );
}

// ── check subcommand end to end ──

#[test]
fn check_cycle_sets_then_clears_trigger() {
    let dir = tempfile::tempdir().unwrap();
    let settings_file = dir.path().join("clang_tools.yaml");
    let cached_file = dir.path().join("clang_tools.yaml.cached");
    let trigger_file = dir.path().join("clang_tidy.trigger");

    // Cycle 1: blacklisted → ineligible, no trigger.
    std::fs::write(
        &settings_file,
        "run_clang_tidy: true\nwhitelist: []\nblacklist: [foo]\n",
    )
    .unwrap();
    check::run(Tool::ClangTidy, "foo", &settings_file, &cached_file, &trigger_file).unwrap();
    assert!(!trigger::read_trigger(&trigger_file).unwrap());

    // Cycle 2: blacklist lifted → rising edge, trigger set.
    std::fs::write(&settings_file, "run_clang_tidy: true\n").unwrap();
    check::run(Tool::ClangTidy, "foo", &settings_file, &cached_file, &trigger_file).unwrap();
    assert!(trigger::read_trigger(&trigger_file).unwrap());

    // Cycle 3: unchanged → trigger cleared again.
    check::run(Tool::ClangTidy, "foo", &settings_file, &cached_file, &trigger_file).unwrap();
    assert!(!trigger::read_trigger(&trigger_file).unwrap());

    // The cache always mirrors the last-checked settings.
    assert_eq!(
        std::fs::read(&settings_file).unwrap(),
        std::fs::read(&cached_file).unwrap()
    );
}

#[test]
fn check_is_per_project_and_per_tool() {
    let dir = tempfile::tempdir().unwrap();
    let settings_file = dir.path().join("clang_tools.yaml");
    let cached_file = dir.path().join("clang_tools.yaml.cached");
    let trigger_file = dir.path().join("trigger");

    std::fs::write(
        &settings_file,
        "run_clang_format: true\nrun_clang_tidy: false\nblacklist: [foo]\n",
    )
    .unwrap();

    // foo is blacklisted: no trigger for either tool.
    check::run(Tool::ClangFormat, "foo", &settings_file, &cached_file, &trigger_file).unwrap();
    assert!(!trigger::read_trigger(&trigger_file).unwrap());

    // bar passes for clang-format but clang-tidy stays disabled.
    std::fs::remove_file(&cached_file).unwrap();
    check::run(Tool::ClangFormat, "bar", &settings_file, &cached_file, &trigger_file).unwrap();
    assert!(trigger::read_trigger(&trigger_file).unwrap());

    std::fs::remove_file(&cached_file).unwrap();
    check::run(Tool::ClangTidy, "bar", &settings_file, &cached_file, &trigger_file).unwrap();
    assert!(!trigger::read_trigger(&trigger_file).unwrap());
}
