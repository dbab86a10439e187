use super::*;

// =============================================================
// Field
// =============================================================

#[test]
fn field_parses_every_wire_identifier() {
    for field in Field::ALL {
        assert_eq!(field.as_str().parse::<Field>(), Ok(field));
    }
}

#[test]
fn field_rejects_unknown_identifier() {
    assert_eq!("radius".parse::<Field>(), Err(ShadowError::UnknownField("radius".to_owned())));
    assert!("Horizontal".parse::<Field>().is_err());
    assert!("".parse::<Field>().is_err());
}

#[test]
fn field_display_matches_wire_identifier() {
    assert_eq!(Field::Spread.to_string(), "spread");
}

#[test]
fn only_inset_lacks_readout() {
    let without: Vec<_> = Field::ALL.into_iter().filter(|f| !f.has_readout()).collect();
    assert_eq!(without, vec![Field::Inset]);
}

#[test]
fn numeric_fields_use_range_controls() {
    assert_eq!(Field::Opacity.control(), Control::Range(InputRange { min: 0.0, max: 1.0, step: 0.01 }));
    assert_eq!(Field::Blur.control(), Control::Range(InputRange { min: 0.0, max: 100.0, step: 1.0 }));
    assert_eq!(Field::Color.control(), Control::Color);
    assert_eq!(Field::Inset.control(), Control::Checkbox);
}

// =============================================================
// ShadowParameters defaults
// =============================================================

#[test]
fn default_parameters_are_black_opaque_outset() {
    let params = ShadowParameters::default();
    assert_eq!(params.horizontal.as_str(), "0");
    assert_eq!(params.vertical.as_str(), "0");
    assert_eq!(params.blur.as_str(), "0");
    assert_eq!(params.spread.as_str(), "0");
    assert_eq!(params.color.as_str(), "#000000");
    assert_eq!(params.opacity.as_str(), "1");
    assert!(!params.inset);
}

// =============================================================
// set
// =============================================================

#[test]
fn set_keeps_numeric_text_verbatim() {
    let mut params = ShadowParameters::default();
    params.set(Field::Opacity, "0.50".into()).unwrap();
    params.set(Field::Horizontal, "-12".into()).unwrap();
    assert_eq!(params.opacity.as_str(), "0.50");
    assert_eq!(params.horizontal.as_str(), "-12");
}

#[test]
fn set_does_not_clamp_opacity() {
    let mut params = ShadowParameters::default();
    params.set(Field::Opacity, "1.5".into()).unwrap();
    assert_eq!(params.opacity.as_str(), "1.5");
}

#[test]
fn set_inset_flag() {
    let mut params = ShadowParameters::default();
    params.set(Field::Inset, true.into()).unwrap();
    assert!(params.inset);
    assert_eq!(params.get(Field::Inset), FieldValue::Flag(true));
}

#[test]
fn set_rejects_non_numeric_text() {
    let mut params = ShadowParameters::default();
    let err = params.set(Field::Blur, "abc".into()).unwrap_err();
    assert_eq!(err, ShadowError::InvalidNumber { field: Field::Blur, value: "abc".to_owned() });
    assert_eq!(params, ShadowParameters::default());
}

#[test]
fn set_rejects_non_finite_numbers() {
    let mut params = ShadowParameters::default();
    assert!(params.set(Field::Spread, "NaN".into()).is_err());
    assert!(params.set(Field::Spread, "inf".into()).is_err());
    assert!(params.set(Field::Spread, "".into()).is_err());
    assert_eq!(params.spread.as_str(), "0");
}

#[test]
fn set_rejects_text_outside_css_number_syntax() {
    let mut params = ShadowParameters::default();
    for raw in ["5.", "+5", "0x1", " 5", "5 ", "-", ".", "1e", "1e+", "--5", "5..0"] {
        assert_eq!(
            params.set(Field::Horizontal, raw.into()),
            Err(ShadowError::InvalidNumber { field: Field::Horizontal, value: raw.to_owned() }),
            "{raw:?} should be rejected"
        );
    }
    assert_eq!(params, ShadowParameters::default());
}

#[test]
fn set_accepts_css_number_forms() {
    let mut params = ShadowParameters::default();
    for raw in ["0", "-12", "0.50", ".5", "-.25", "1e2", "2.5E-1"] {
        params.set(Field::Spread, raw.into()).unwrap();
        assert_eq!(params.spread.as_str(), raw);
    }
}

#[test]
fn set_rejects_overflowing_exponent() {
    let mut params = ShadowParameters::default();
    assert!(params.set(Field::Blur, "1e999".into()).is_err());
    assert_eq!(params.blur.as_str(), "0");
}

#[test]
fn set_rejects_malformed_color_and_keeps_last_good() {
    let mut params = ShadowParameters::default();
    params.set(Field::Color, "#336699".into()).unwrap();
    let err = params.set(Field::Color, "#33669".into()).unwrap_err();
    assert_eq!(err, ShadowError::InvalidColorFormat("#33669".to_owned()));
    assert_eq!(params.color.as_str(), "#336699");
}

#[test]
fn set_rejects_mismatched_value_kinds() {
    let mut params = ShadowParameters::default();
    assert_eq!(
        params.set(Field::Inset, "true".into()),
        Err(ShadowError::ValueMismatch { field: Field::Inset })
    );
    assert_eq!(
        params.set(Field::Horizontal, true.into()),
        Err(ShadowError::ValueMismatch { field: Field::Horizontal })
    );
    assert_eq!(params, ShadowParameters::default());
}

#[test]
fn readout_echoes_field_text() {
    let mut params = ShadowParameters::default();
    params.set(Field::Color, "#AbCdEf".into()).unwrap();
    assert_eq!(params.readout(Field::Color), "#AbCdEf");
    assert_eq!(params.readout(Field::Opacity), "1");
}
