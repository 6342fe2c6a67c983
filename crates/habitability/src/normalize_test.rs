use catalog::PlanetRecord;
use stellar::SpectralClass;

use crate::model::HabitabilityModel;
use crate::normalize::NormalizedInputs;

#[test]
fn present_values_pass_through() {
    let record = PlanetRecord::new("a")
        .with_star_type("K5")
        .with_radius(0.8)
        .with_teq(300.0)
        .with_flux(1.5)
        .with_period(20.0);
    let inputs = NormalizedInputs::from_record(&record, &HabitabilityModel::default());

    assert_eq!(
        inputs,
        NormalizedInputs {
            spectral_class: Some(SpectralClass::K),
            radius_earth: 0.8,
            teq_kelvin: 300.0,
            flux_earth: 1.5,
            period_days: 20.0,
        }
    );
}

#[test]
fn missing_values_use_model_defaults() {
    let mut model = HabitabilityModel::default();
    model.temperature.ideal = 288.0;
    model.period.default_days = 400.0;

    let inputs = NormalizedInputs::from_record(&PlanetRecord::default(), &model);

    assert_eq!(inputs.spectral_class, None);
    assert_eq!(inputs.radius_earth, 1.1);
    assert_eq!(inputs.teq_kelvin, 288.0);
    assert_eq!(inputs.flux_earth, 0.9);
    assert_eq!(inputs.period_days, 400.0);
}

#[test]
fn zero_radius_is_a_measurement_not_a_gap() {
    let record = PlanetRecord::new("a").with_radius(0.0);
    let inputs = NormalizedInputs::from_record(&record, &HabitabilityModel::default());
    assert_eq!(inputs.radius_earth, 0.0);
}

#[test]
fn non_positive_period_uses_default() {
    let model = HabitabilityModel::default();
    for period in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let record = PlanetRecord::new("a").with_period(period);
        let inputs = NormalizedInputs::from_record(&record, &model);
        assert_eq!(inputs.period_days, 365.0, "period {period}");
    }
}
