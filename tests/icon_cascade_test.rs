mod utils;

use dynamo_catalog_lib::modules::catalog::domain::services::{
    IconCursor, IconResolver, ICON_EXTENSIONS,
};
use dynamo_catalog_lib::shared::CatalogConfigBuilder;
use utils::{factories::ScriptFactory, helpers::build_test_service};

const PLACEHOLDER: &str = "/icons/placeholder.jpg";

#[test]
fn cascade_walks_every_candidate_then_stops_on_placeholder() {
    let service = build_test_service();
    let mut cursor = service.icon_cursor_for("add-revision").unwrap();
    let expected = cursor.candidates().to_vec();

    let mut shown = vec![cursor.current().to_string()];
    while cursor.advance() {
        shown.push(cursor.current().to_string());
    }

    assert_eq!(shown, expected);
    assert_eq!(cursor.current(), PLACEHOLDER);
    assert!(cursor.is_exhausted());
    assert!(!cursor.advance());
    assert_eq!(cursor.current(), PLACEHOLDER);
}

#[test]
fn explicit_logo_is_tried_first() {
    let candidates = build_test_service()
        .icon_candidates_for("add-revision")
        .unwrap();

    assert_eq!(candidates[0], "/logos/add-revision.png");
    assert_eq!(candidates[1], "/icons/Add Revision.png");
}

#[test]
fn accented_names_produce_folded_candidates() {
    let candidates = build_test_service()
        .icon_candidates_for("creer-elevations")
        .unwrap();

    assert!(candidates.contains(&"/icons/creer-elevations.png".to_string()));
    assert!(candidates.contains(&"/icons/Creer_Elevations.svg".to_string()));
    assert_eq!(candidates.last().map(String::as_str), Some(PLACEHOLDER));
}

#[test]
fn placeholder_appears_exactly_once() {
    let script = ScriptFactory::named("Placeholder")
        .with_icon(PLACEHOLDER)
        .build();
    let candidates = IconResolver::default().candidates_for(&script);

    let count = candidates.iter().filter(|c| *c == PLACEHOLDER).count();
    assert_eq!(count, 1);
    assert_eq!(candidates.last().map(String::as_str), Some(PLACEHOLDER));
}

#[test]
fn candidates_are_deterministic() {
    let resolver = IconResolver::default();
    let script = ScriptFactory::named("Room Tags").with_logo("/logos/rt.svg").build();

    assert_eq!(resolver.candidates_for(&script), resolver.candidates_for(&script));
}

#[test]
fn stale_failure_reports_do_not_skip_candidates() {
    let resolver = IconResolver::default();
    let mut cursor = resolver.cursor("Wall Finish", &["/logos/wall.png"]);

    assert!(cursor.report_failure("/logos/wall.png"));
    let second = cursor.current().to_string();

    assert!(!cursor.report_failure("/logos/wall.png"));
    assert_eq!(cursor.current(), second);
    assert_eq!(cursor.position(), 1);
}

#[test]
fn rebinding_to_a_new_entity_restarts_the_cascade() {
    let resolver = IconResolver::default();
    let mut cursor = resolver.cursor("Wall Finish", &[] as &[&str]);
    cursor.advance();
    cursor.advance();

    let same = resolver.build_candidates("Wall Finish", &[] as &[&str]);
    assert!(!cursor.rebind(same));
    assert_eq!(cursor.position(), 2);

    let other = resolver.build_candidates("Room Tags", &[] as &[&str]);
    assert!(cursor.rebind(other));
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.current(), "/icons/Room Tags.png");
}

#[test]
fn custom_icon_directory_is_used() {
    let config = CatalogConfigBuilder::new()
        .icon_dir("/static/icons/")
        .placeholder("/static/icons/none.png")
        .build()
        .unwrap();
    let resolver = IconResolver::new(&config);
    let candidates = resolver.build_candidates("Hall", &[] as &[&str]);

    // "Hall" and "hall" are the only distinct bases
    assert_eq!(candidates.len(), 2 * ICON_EXTENSIONS.len() + 1);
    assert!(candidates[..candidates.len() - 1]
        .iter()
        .all(|c| c.starts_with("/static/icons/")));
    assert_eq!(candidates.last().map(String::as_str), Some("/static/icons/none.png"));
}

#[test]
fn empty_candidate_list_has_no_cursor() {
    assert!(IconCursor::new(Vec::new()).is_none());
}
