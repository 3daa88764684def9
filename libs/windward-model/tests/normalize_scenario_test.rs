//! End-to-end normalization against the shipped dictionary

#![allow(clippy::disallowed_methods)] // Integration test - unwrap is acceptable

use std::path::PathBuf;

use windward_config::load_rule_table;
use windward_model::{normalize_batch, normalize_row, Tack, TelemetryRow, Value};

fn shipped_table() -> windward_config::RuleTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/fields.yaml");
    let (_, table) = load_rule_table(path).unwrap();
    table
}

#[test]
fn test_port_tack_scenario() {
    let table = shipped_table();

    let mut row = TelemetryRow::new(Tack::Port);
    row.insert("BOAT", "AUS");
    row.insert("TWA_SGP_deg", 45.0);
    row.insert("HEADING_deg", 10.0);
    row.insert("LENGTH_RH_P_mm", 120.0);
    row.insert("LENGTH_RH_S_mm", 200.0);

    let out = normalize_row(&table, &row).unwrap();

    assert_eq!(out.get("BOAT"), Some(&Value::Text("AUS".to_string())));
    assert_eq!(out.tack, Tack::Port);
    assert_eq!(out.get_f64("TWA_SGP_deg"), Some(-45.0));
    assert_eq!(out.get_f64("HEADING_deg"), Some(190.0));
    assert_eq!(out.get_f64("LENGTH_RH_P_mm"), Some(200.0));
    assert_eq!(out.get_f64("LENGTH_RH_S_mm"), Some(120.0));
}

#[test]
fn test_starboard_tack_scenario_is_identity() {
    let table = shipped_table();

    let mut row = TelemetryRow::new(Tack::Starboard);
    row.insert("BOAT", "AUS");
    row.insert("TWA_SGP_deg", 45.0);
    row.insert("HEADING_deg", 10.0);
    row.insert("LENGTH_RH_P_mm", 120.0);
    row.insert("LENGTH_RH_S_mm", 200.0);

    let out = normalize_row(&table, &row).unwrap();
    assert_eq!(out, row);
}

#[test]
fn test_daggerboard_sides_swap_together() {
    let table = shipped_table();

    let mut row = TelemetryRow::new(Tack::Port);
    row.insert("ANGLE_DB_RAKE_P_deg", 2.5);
    row.insert("ANGLE_DB_RAKE_S_deg", -1.0);
    row.insert("ANGLE_DB_CANT_P_deg", 15.0);
    row.insert("ANGLE_DB_CANT_S_deg", 35.0);

    let out = normalize_row(&table, &row).unwrap();
    assert_eq!(out.get_f64("ANGLE_DB_RAKE_P_deg"), Some(-1.0));
    assert_eq!(out.get_f64("ANGLE_DB_RAKE_S_deg"), Some(2.5));
    assert_eq!(out.get_f64("ANGLE_DB_CANT_P_deg"), Some(35.0));
    assert_eq!(out.get_f64("ANGLE_DB_CANT_S_deg"), Some(15.0));
}

#[test]
fn test_batch_report_counts() {
    let table = shipped_table();

    let good = |twa: f64| {
        let mut row = TelemetryRow::new(Tack::from_twa(twa));
        row.insert("TWA_SGP_deg", twa);
        row.insert("HEEL_deg", 4.0);
        Ok(row)
    };
    let mut dropout = TelemetryRow::new(Tack::Port);
    dropout.insert("LENGTH_RH_P_mm", 120.0); // partner column missing

    let outcome = normalize_batch(
        &table,
        vec![good(-40.0), Ok(dropout), good(40.0)],
        false,
    )
    .unwrap();

    assert_eq!(outcome.report.normalized, 2);
    assert_eq!(outcome.report.skipped, 1);
    assert_eq!(outcome.report.issues[0].index, 1);
    // Port row negated, starboard row untouched
    assert_eq!(outcome.rows[0].get_f64("TWA_SGP_deg"), Some(40.0));
    assert_eq!(outcome.rows[1].get_f64("TWA_SGP_deg"), Some(40.0));
    assert_eq!(outcome.rows[0].get_f64("HEEL_deg"), Some(-4.0));
    assert_eq!(outcome.rows[1].get_f64("HEEL_deg"), Some(4.0));
}
