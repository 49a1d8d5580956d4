use bridge_params::{
    load_rows, required_names, validate_ranges, BridgeParams, ParamError, ParameterMap,
    ParameterRow, CATALOGUE,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn full_rows() -> Vec<ParameterRow> {
    CATALOGUE
        .iter()
        .map(|spec| ParameterRow {
            variable: spec.name.to_string(),
            value: value_for(spec.name).to_string(),
            description: Some(spec.description.to_string()),
        })
        .collect()
}

fn value_for(name: &str) -> f64 {
    match name {
        "SCALE1" => 100.0,
        "SCALE2" => 50.0,
        "NSPAN" => 3.0,
        "NOCH" => 2.0,
        "SPAN1" => 30.0,
        "LBRIDGE" => 90.0,
        _ => 1.0,
    }
}

// ── Loader ──────────────────────────────────────────────────────────────────

#[test]
fn complete_table_loads_lower_cased() {
    let map = load_rows(full_rows()).unwrap();
    assert_eq!(map.len(), CATALOGUE.len());
    for name in required_names() {
        assert!(map.contains(&name.to_lowercase()), "{} missing", name);
    }
    assert_eq!(map.get("scale1"), Some(100.0));
    assert!(map.iter().all(|(k, _)| k == k.to_lowercase()));
}

#[test]
fn header_row_is_skipped() {
    let mut rows = vec![ParameterRow::new("Variable", "Value")];
    rows.extend(full_rows());
    let map = load_rows(rows).unwrap();
    assert!(!map.contains("variable"));
}

#[test]
fn missing_names_are_all_reported() {
    let rows: Vec<ParameterRow> = full_rows()
        .into_iter()
        .filter(|r| r.variable != "ALFB" && r.variable != "DATUM")
        .collect();
    let report = load_rows(rows).unwrap_err();
    assert_eq!(report.missing_names(), vec!["DATUM", "ALFB"]);
    let message = report.to_string();
    assert!(message.contains("datum") || message.contains("DATUM"));
    assert!(message.contains("; "));
}

#[test]
fn non_numeric_value_is_reported_with_name() {
    let mut rows = full_rows();
    rows[3].value = "ninety-five".to_string();
    let report = load_rows(rows).unwrap_err();
    assert_eq!(
        report.errors,
        vec![ParamError::NonNumericValue {
            name: "DATUM".to_string(),
            value: "ninety-five".to_string(),
        }]
    );
}

#[test]
fn extra_names_are_kept() {
    let mut rows = full_rows();
    rows.push(ParameterRow::new("BRIDGEW", "12"));
    rows.push(ParameterRow::new("", "ignored"));
    let map = load_rows(rows).unwrap();
    assert_eq!(map.get("bridgew"), Some(12.0));
    assert_eq!(map.len(), CATALOGUE.len() + 1);
}

// ── Typed record ────────────────────────────────────────────────────────────

#[test]
fn record_resolves_from_loaded_table() {
    let map = load_rows(full_rows()).unwrap();
    let params = BridgeParams::from_map(&map).unwrap();
    assert_eq!(params.nspan, 3);
    assert_eq!(params.pier_count(), 2);
    assert_eq!(params.lspan, params.span1);
    assert_eq!(params.bridgew, params.ccbr + 2.0 * params.kerbw);
    assert_eq!(params.right_edge(), params.left + 90.0);
    assert_eq!(params.deck_end(), params.abtl + 90.0);
}

#[test]
fn record_prefers_explicit_optional_values() {
    let mut map = load_rows(full_rows()).unwrap();
    map.insert("LSPAN", 25.0);
    map.insert("BRIDGEW", 12.0);
    let params = BridgeParams::from_map(&map).unwrap();
    assert_eq!(params.lspan, 25.0);
    assert_eq!(params.bridgew, 12.0);
}

#[test]
fn record_fails_loudly_on_missing_parameter() {
    let mut map = load_rows(full_rows()).unwrap();
    map.remove("alfb");
    assert_eq!(
        BridgeParams::from_map(&map),
        Err(ParamError::MissingRequiredParameter {
            name: "alfb".to_string()
        })
    );
}

#[test]
fn record_rejects_zero_spans() {
    let mut map = load_rows(full_rows()).unwrap();
    map.insert("nspan", 0.0);
    assert_eq!(
        BridgeParams::from_map(&map),
        Err(ParamError::InvalidSpanCount { value: 0.0 })
    );
}

#[test]
fn range_rules_apply_to_loaded_table() {
    let mut map: ParameterMap = load_rows(full_rows()).unwrap();
    assert!(validate_ranges(&map).is_ok());
    map.insert("skew", -50.0);
    let report = validate_ranges(&map).unwrap_err();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].parameter(), Some("skew"));
}
