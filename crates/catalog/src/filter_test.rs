use crate::filter::{
    NO_NOTE_LABEL, NoteFilter, distinct_notes, select_by_names, with_complete_measurements,
    with_note, within_flux_range,
};
use crate::record::PlanetRecord;

fn names(records: &[&PlanetRecord]) -> Vec<String> {
    records.iter().map(|p| p.display_name().to_string()).collect()
}

fn sample() -> Vec<PlanetRecord> {
    vec![
        PlanetRecord::new("complete")
            .with_teq(300.0)
            .with_flux(1.2)
            .with_radius(1.0)
            .with_note("Potentially habitable"),
        PlanetRecord::new("no-flux").with_teq(300.0).with_radius(1.0),
        PlanetRecord::new("zero-radius")
            .with_teq(300.0)
            .with_flux(0.5)
            .with_radius(0.0)
            .with_note("Hot Jupiter"),
        PlanetRecord::new("scorched")
            .with_teq(2100.0)
            .with_flux(2400.0)
            .with_radius(1.6)
            .with_note("Potentially habitable"),
    ]
}

#[test]
fn complete_measurements_require_nonzero_values() {
    let planets = sample();
    let complete = with_complete_measurements(&planets);
    assert_eq!(names(&complete), vec!["complete", "scorched"]);
}

#[test]
fn flux_range_is_inclusive_and_skips_missing() {
    let planets = sample();

    let in_range = within_flux_range(&planets, 0.1, 1000.0);
    assert_eq!(names(&in_range), vec!["complete", "zero-radius"]);

    let exact = within_flux_range(&planets, 1.2, 1.2);
    assert_eq!(names(&exact), vec!["complete"]);
}

#[test]
fn distinct_notes_in_first_seen_order() {
    let planets = sample();
    assert_eq!(
        distinct_notes(&planets),
        vec!["Potentially habitable", NO_NOTE_LABEL, "Hot Jupiter"]
    );
}

#[test]
fn note_filter_selects_exact_matches() {
    let planets = sample();

    let all = with_note(&planets, &NoteFilter::All);
    assert_eq!(all.len(), planets.len());

    let habitable = with_note(&planets, &NoteFilter::Exact("Potentially habitable".into()));
    assert_eq!(names(&habitable), vec!["complete", "scorched"]);

    let unannotated = with_note(&planets, &NoteFilter::Exact(NO_NOTE_LABEL.into()));
    assert_eq!(names(&unannotated), vec!["no-flux"]);

    let none = with_note(&planets, &NoteFilter::Exact("potentially habitable".into()));
    assert!(none.is_empty());
}

#[test]
fn select_by_names_keeps_catalog_order() {
    let planets = sample();
    let selected = select_by_names(&planets, &["scorched", "complete", "missing"]);
    assert_eq!(names(&selected), vec!["complete", "scorched"]);
}

#[test]
fn filters_compose() {
    let planets = sample();
    let complete = with_complete_measurements(&planets);
    let charted = within_flux_range(complete, 0.1, 1000.0);
    assert_eq!(names(&charted), vec!["complete"]);
}
