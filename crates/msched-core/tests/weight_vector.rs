use msched_core::{EntityKind, WeightComponent, WeightVector};

#[test]
fn normalization_sums_to_one() {
    let raw = WeightVector::from_components([2.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let normalized = raw.normalized().expect("non-zero sum");
    assert!((normalized.sum() - 1.0).abs() < 1e-12);
    assert_eq!(normalized.sky_coverage, 0.5);
    assert_eq!(normalized.get(WeightComponent::Duration), 0.25);
}

#[test]
fn all_zero_vector_has_no_normalization() {
    let raw = WeightVector::from_components([0.0; 8]);
    assert!(raw.normalized().is_none());
}

#[test]
fn component_order_matches_storage() {
    let raw = WeightVector::from_components([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    for (idx, component) in WeightComponent::ALL.iter().enumerate() {
        assert_eq!(raw.get(*component), (idx + 1) as f64);
    }
    assert_eq!(raw.low_elevation, 8.0);
    assert_eq!(WeightComponent::LowDeclination.name(), "weightLowDeclination");
}

#[test]
fn approx_eq_uses_strict_tolerance() {
    let a = WeightVector::from_components([0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let b = WeightVector::from_components([0.5 + 1e-12, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let c = WeightVector::from_components([0.5 + 1e-9, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert!(a.approx_eq(&b, 1e-10));
    assert!(!a.approx_eq(&c, 1e-10));
}

#[test]
fn weight_vector_serde_roundtrip() {
    let vector = WeightVector::default();
    let json = serde_json::to_string(&vector).expect("json");
    let back: WeightVector = serde_json::from_str(&json).expect("parse");
    assert_eq!(vector, back);
    assert_eq!(serde_json::to_string(&EntityKind::Baseline).unwrap(), "\"baseline\"");
}
