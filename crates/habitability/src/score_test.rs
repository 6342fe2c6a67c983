use approx::assert_relative_eq;
use catalog::PlanetRecord;

use crate::model::HabitabilityModel;
use crate::score::{score, score_breakdown};

fn ideal(star_type: &str) -> PlanetRecord {
    PlanetRecord::new("ideal")
        .with_star_type(star_type)
        .with_radius(1.1)
        .with_teq(265.0)
        .with_flux(0.9)
        .with_period(100.0)
}

// ============================================================================
// Reference points
// ============================================================================

#[test]
fn ideal_g_dwarf_planet_scores_one() {
    assert_eq!(score(&ideal("G")), 1.0);
}

#[test]
fn o_star_loses_the_star_type_weight() {
    assert_eq!(score(&ideal("O")), 0.75);
}

#[test]
fn star_type_table_values() {
    let cases = [
        ("O5", 0.0),
        ("B2", 0.0),
        ("A0", 0.1),
        ("F5", 0.7),
        ("G2", 1.0),
        ("K1", 0.8),
        ("M3", 0.3),
        ("k7", 0.8),
        ("DA", 0.0),
        ("", 0.0),
    ];
    for (star_type, expected) in cases {
        let breakdown = score_breakdown(&ideal(star_type));
        assert_eq!(breakdown.star_type, expected, "star type {star_type:?}");
    }
}

#[test]
fn missing_star_type_scores_as_unknown() {
    let mut planet = ideal("G");
    planet.star_type = None;
    assert_eq!(score_breakdown(&planet).star_type, 0.0);
    assert_eq!(score(&planet), 0.75);
}

// ============================================================================
// Factor curves
// ============================================================================

#[test]
fn radius_curve_reaches_zero_at_width() {
    let planet = ideal("G").with_radius(1.4);
    assert_relative_eq!(score_breakdown(&planet).radius, 0.0, epsilon = 1e-12);

    let planet = ideal("G").with_radius(1.25);
    assert_relative_eq!(score_breakdown(&planet).radius, 0.75, epsilon = 1e-12);
}

#[test]
fn curves_are_floored_at_zero() {
    let hot_giant = ideal("G")
        .with_radius(11.0)
        .with_teq(1500.0)
        .with_flux(900.0)
        .with_period(1.5);
    let breakdown = score_breakdown(&hot_giant);

    assert_eq!(breakdown.radius, 0.0);
    assert_eq!(breakdown.temperature, 0.0);
    assert_eq!(breakdown.flux, 0.0);
    assert_eq!(breakdown.period, 0.0);
    assert_relative_eq!(breakdown.habitability, 0.25, epsilon = 1e-12);
}

#[test]
fn temperature_and_flux_curves() {
    let planet = ideal("G").with_teq(265.0 + 32.5).with_flux(0.9 - 0.3);
    let breakdown = score_breakdown(&planet);

    assert_relative_eq!(breakdown.temperature, 0.75, epsilon = 1e-12);
    assert_relative_eq!(breakdown.flux, 0.75, epsilon = 1e-12);
}

#[test]
fn period_curve_is_symmetric_in_log_space() {
    let long = score_breakdown(&ideal("G").with_period(1000.0)).period;
    let short = score_breakdown(&ideal("G").with_period(10.0)).period;

    assert_relative_eq!(long, short, epsilon = 1e-12);
    let z = 10.0_f64.ln() / 3.0;
    assert_relative_eq!(long, 1.0 - z * z, epsilon = 1e-12);
}

// ============================================================================
// Missing values
// ============================================================================

#[test]
fn missing_period_scores_as_one_year() {
    let mut missing = ideal("K");
    missing.period_days = None;
    let year = ideal("K").with_period(365.0);

    assert_eq!(score(&missing), score(&year));
}

#[test]
fn non_positive_period_scores_as_missing() {
    let mut missing = ideal("M");
    missing.period_days = None;

    for period in [-5.0, 0.0, -0.0, f64::NAN, f64::NEG_INFINITY] {
        let planet = ideal("M").with_period(period);
        let value = score(&planet);
        assert!(!value.is_nan(), "period {period} produced NaN");
        assert_eq!(value, score(&missing), "period {period}");
    }
}

#[test]
fn missing_measurements_default_to_ideal() {
    let bare = PlanetRecord::new("bare").with_star_type("G").with_period(100.0);
    assert_eq!(score(&bare), 1.0);
}

#[test]
fn non_finite_measurements_default_to_ideal() {
    let planet = ideal("G")
        .with_radius(f64::NAN)
        .with_teq(f64::INFINITY)
        .with_flux(f64::NAN);
    assert_eq!(score(&planet), 1.0);
}

#[test]
fn malformed_json_fields_score_like_missing() {
    let malformed: PlanetRecord = serde_json::from_str(
        r#"{"Star type": "G", "Radius (R⊕)": "big", "Teq (K)": "", "Flux (F⊕)": null, "Period (days)": "-5"}"#,
    )
    .unwrap();
    let bare = PlanetRecord::default().with_star_type("G");

    assert_eq!(score(&malformed), score(&bare));
}

#[test]
fn empty_record_scores_without_star_contribution() {
    let expected = 0.2 + 0.2 + 0.2 + 0.15 * {
        let z = 3.65_f64.ln() / 3.0;
        1.0 - z * z
    };
    assert_relative_eq!(score(&PlanetRecord::default()), expected, epsilon = 1e-12);
}

// ============================================================================
// Custom models
// ============================================================================

#[test]
fn module_score_matches_default_model() {
    let planet = PlanetRecord::new("Kepler-62 f")
        .with_star_type("K2V")
        .with_radius(1.41)
        .with_teq(208.0)
        .with_flux(0.41)
        .with_period(267.3);

    assert_eq!(score(&planet), HabitabilityModel::default().score(&planet));
}

#[test]
fn custom_weights_change_the_score() {
    let mut model = HabitabilityModel::default();
    model.weights.star_type = 0.0;
    model.weights.period = 0.4;

    assert_relative_eq!(model.score(&ideal("O")), 1.0, epsilon = 1e-12);
}

#[test]
fn overweighted_model_is_clamped() {
    let mut model = HabitabilityModel::default();
    model.weights.radius = 5.0;

    assert_eq!(model.score(&ideal("G")), 1.0);
}
