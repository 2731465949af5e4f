//! Tests against the Petri.jl v0.3.3 search index

use docindex::*;
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("fixtures/search_index.js");

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/search_index.js")
}

fn index() -> SearchIndex {
    SearchIndex::parse(FIXTURE).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_fixture_loads_from_disk() {
    let index = SearchIndex::load(fixture_path()).unwrap();
    assert_eq!(index.len(), 33);
    assert_eq!(index, SearchIndex::from_script_str(FIXTURE).unwrap());
}

#[test]
fn test_fixture_detected_as_script() {
    assert_eq!(FormatKind::detect(FIXTURE), FormatKind::Script);
}

#[test]
fn test_model_entry_exposed_unchanged() {
    let index = index();
    let entries: Vec<_> = index.by_location("api/#Petri.Model").collect();
    assert_eq!(entries.len(), 1);

    let model = entries[0];
    assert_eq!(model.location, "api/#Petri.Model");
    assert_eq!(model.page, "Library Reference");
    assert_eq!(model.title, "Petri.Model");
    assert_eq!(
        model.text,
        "Model{S,D}\n\nStructure for representing the petri net model\n\nrepresented by states and transition functions\n\n\n\n\n\n"
    );
    assert_eq!(model.category, Category::Type);
}

#[test]
fn test_locations_kept_verbatim() {
    let index = index();
    let method = index
        .iter()
        .find(|e| e.title == "Catlab.Graphics.Graphviz.Graph")
        .unwrap();
    assert_eq!(method.location, "api/#Catlab.Graphics.Graphviz.Graph-Tuple{Model}");
    assert_eq!(method.anchor(), Some("Catlab.Graphics.Graphviz.Graph-Tuple{Model}"));
    assert_eq!(method.symbol_name(), Some("Graph"));
}

#[test]
fn test_first_and_last_entries() {
    let index = index();
    let first = index.get(0).unwrap();
    assert_eq!(first.location, "api/#Library-Reference");
    assert_eq!(first.category, Category::Section);
    assert_eq!(first.text, "");

    let last = index.get(index.len() - 1).unwrap();
    assert_eq!(last.location, "");
    assert_eq!(last.page, "Petri.jl");
    assert!(last.text.starts_with("Pages = ["));
}

// ═══════════════════════════════════════════════════════════════════════
// Structure
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_category_counts() {
    assert_eq!(
        index().category_counts(),
        vec![
            (Category::Page, 22),
            (Category::Section, 4),
            (Category::Module, 1),
            (Category::Type, 2),
            (Category::Method, 4),
        ]
    );
}

#[test]
fn test_pages_in_first_seen_order() {
    let pages = index().pages();
    let summary: Vec<_> = pages
        .iter()
        .map(|p| (p.title.as_str(), p.path.as_str(), p.entry_count))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Library Reference", "api/", 9),
            ("Basic Usage", "usage/", 15),
            ("Petri.jl", "", 9),
        ]
    );
}

#[test]
fn test_shared_page_locations() {
    let index = index();
    assert_eq!(index.by_location("usage/").count(), 14);
    assert_eq!(index.by_location("").count(), 7);
    assert!(index.by_location("usage/").all(|e| e.category == Category::Page));
}

// ═══════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_fixture_is_valid_by_default() {
    let report = index().validate(&ValidationConfig::default());
    assert!(report.is_valid(), "{:?}", report.violations());
    assert_eq!(report.checked(), 33);
}

#[test]
fn test_validated_keeps_valid_index() {
    let index = index().validated(&ValidationConfig::default()).unwrap();
    assert_eq!(index.len(), 33);
}

#[test]
fn test_fixture_fails_strict_validation() {
    let report = index().validate(&ValidationConfig::strict());
    assert_eq!(report.violations().len(), 20);
    assert_eq!(report.matching(|r| *r == Rule::EmptyLocation).count(), 7);

    let duplicates: Vec<_> = report
        .matching(|r| matches!(r, Rule::DuplicateLocation { .. }))
        .collect();
    assert_eq!(duplicates.len(), 13);
    assert!(duplicates
        .iter()
        .all(|v| v.location == "usage/" && v.rule == Rule::DuplicateLocation { first: 10 }));
}

#[test]
fn test_validated_rejects_strict() {
    let err = index().validated(&ValidationConfig::strict()).unwrap_err();
    match err {
        IndexError::Invalid(report) => assert_eq!(report.violations().len(), 20),
        other => panic!("unexpected error: {other}"),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Round trips
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_script_round_trip_is_byte_identical() {
    assert_eq!(index().to_script_string().unwrap(), FIXTURE);
}

#[test]
fn test_json_round_trip_preserves_order() {
    let original = index();
    let json = original.to_json_string().unwrap();
    let reparsed = SearchIndex::from_json_str(&json).unwrap();
    assert_eq!(reparsed.entries(), original.entries());
}

#[test]
fn test_pretty_json_round_trip() {
    let original = index();
    let pretty = original.to_json_pretty().unwrap();
    assert_eq!(SearchIndex::parse(&pretty).unwrap(), original);
}

#[test]
fn test_save_and_load() {
    let original = index();
    let path = std::env::temp_dir().join(format!("docindex-save-{}.json", std::process::id()));
    original.save(&path, FormatKind::Json).unwrap();
    let loaded = SearchIndex::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, original);
}
