// core/tests/test_power_summary.rs
use exercise_power_core::PowerSummary;

#[test]
fn average_only_leaves_max_and_np_absent() {
    // Scenario 1: kun snitt
    let p = PowerSummary::new(180);
    assert_eq!(p.average_power, 180);
    assert_eq!(p.maximum_power, None);
    assert_eq!(p.normalized_power, None);
}

#[test]
fn all_fields_read_back_unchanged() {
    // Scenario 2
    let p = PowerSummary::with_all(180, Some(420), Some(195));
    assert_eq!(p.average_power, 180);
    assert_eq!(p.maximum_power, Some(420));
    assert_eq!(p.normalized_power, Some(195));

    let chained = PowerSummary::new(180)
        .with_maximum_power(420)
        .with_normalized_power(195);
    assert_eq!(chained, p);
}

#[test]
fn clearing_max_keeps_other_fields() {
    // Scenario 3: ta scenario 2 og nullstill maks
    let mut p = PowerSummary::with_all(180, Some(420), Some(195));
    p.maximum_power = None;

    assert_eq!(p.average_power, 180);
    assert_eq!(p.maximum_power, None);
    assert_eq!(p.normalized_power, Some(195));
}

#[test]
fn set_then_clear_max_is_isolated() {
    for (a, n) in [(0_i16, None), (250, Some(263)), (-12, Some(0)), (i16::MAX, None)] {
        let mut p = PowerSummary::with_all(a, None, n);
        p.maximum_power = Some(999);
        assert_eq!(p.maximum_power, Some(999));
        p.maximum_power = None;
        assert_eq!(p.average_power, a, "snitt endret seg");
        assert_eq!(p.normalized_power, n, "NP endret seg");
    }
}

#[test]
fn every_field_can_be_reassigned() {
    let mut p = PowerSummary::new(100);
    p.average_power = 150;
    p.normalized_power = Some(160);
    assert_eq!(p, PowerSummary::with_all(150, None, Some(160)));

    p.normalized_power = None;
    assert_eq!(p, PowerSummary::new(150));
}

#[test]
fn equality_over_all_three_fields() {
    // Fravær == fravær
    assert_eq!(PowerSummary::new(180), PowerSummary::new(180));
    assert_eq!(
        PowerSummary::with_all(180, Some(420), Some(195)),
        PowerSummary::with_all(180, Some(420), Some(195))
    );

    let base = PowerSummary::with_all(180, Some(420), Some(195));
    assert_ne!(base, PowerSummary::with_all(181, Some(420), Some(195)));
    assert_ne!(base, PowerSummary::with_all(180, Some(421), Some(195)));
    assert_ne!(base, PowerSummary::with_all(180, None, Some(195)));
    assert_ne!(base, PowerSummary::with_all(180, Some(420), None));
}

#[test]
fn zero_watts_is_a_value_not_absence() {
    let p = PowerSummary::with_all(0, Some(0), Some(0));
    assert_eq!(p.maximum_power, Some(0));
    assert_ne!(p, PowerSummary::new(0));
}

#[test]
fn permissive_construction_accepts_odd_values() {
    // Ingen validering: negativ effekt og maks < snitt godtas som de er
    let p = PowerSummary::with_all(-40, Some(-100), Some(i16::MIN));
    assert_eq!(p.average_power, -40);
    assert_eq!(p.maximum_power, Some(-100));
    assert_eq!(p.normalized_power, Some(i16::MIN));
}

#[test]
fn summary_serializes_with_null_for_absent_fields() {
    let p = PowerSummary::new(180).with_normalized_power(195);
    let v = serde_json::to_value(p).expect("serialize");
    assert_eq!(v["average_power"], 180);
    assert!(v["maximum_power"].is_null());
    assert_eq!(v["normalized_power"], 195);
}
