use crate::spectral::SpectralClass;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn from_star_type_uses_first_character() {
    assert_eq!(SpectralClass::from_star_type("G2V"), Some(SpectralClass::G));
    assert_eq!(SpectralClass::from_star_type("K1III"), Some(SpectralClass::K));
    assert_eq!(SpectralClass::from_star_type("M4.5V"), Some(SpectralClass::M));
    assert_eq!(SpectralClass::from_star_type("O9"), Some(SpectralClass::O));
}

#[test]
fn from_star_type_is_case_insensitive() {
    assert_eq!(SpectralClass::from_star_type("g"), Some(SpectralClass::G));
    assert_eq!(SpectralClass::from_star_type("f8v"), Some(SpectralClass::F));
    assert_eq!(SpectralClass::from_star_type("b"), Some(SpectralClass::B));
}

#[test]
fn from_star_type_rejects_unknown_classes() {
    assert_eq!(SpectralClass::from_star_type(""), None);
    assert_eq!(SpectralClass::from_star_type("DA2"), None);
    assert_eq!(SpectralClass::from_star_type("L3"), None);
    assert_eq!(SpectralClass::from_star_type(" G2"), None);
    assert_eq!(SpectralClass::from_star_type("?"), None);
}

#[test]
fn from_letter_round_trips_through_letter() {
    for class in SpectralClass::ALL {
        assert_eq!(SpectralClass::from_letter(class.letter()), Some(class));
    }
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_main_sequence() {
    assert_eq!(format!("{}", SpectralClass::O), "O");
    assert_eq!(format!("{}", SpectralClass::B), "B");
    assert_eq!(format!("{}", SpectralClass::A), "A");
    assert_eq!(format!("{}", SpectralClass::F), "F");
    assert_eq!(format!("{}", SpectralClass::G), "G");
    assert_eq!(format!("{}", SpectralClass::K), "K");
    assert_eq!(format!("{}", SpectralClass::M), "M");
}
