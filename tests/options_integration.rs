//! Integration tests for plot option resolution.

use std::collections::BTreeMap;

use dss_scivis::error::OptionError;
use dss_scivis::options::{
    DEFAULT_LINE_WIDTH, OptionKey, OptionSet, OptionValue, RenderDefaults, resolve,
};

fn host() -> RenderDefaults {
    RenderDefaults::default()
}

fn resolve_one(key: &str, value: OptionValue) -> Result<OptionSet, OptionError> {
    resolve(3, [(key, value)], &host())
}

fn no_overrides() -> Vec<(String, OptionValue)> {
    Vec::new()
}

#[test]
fn empty_overrides_give_documented_defaults() {
    let options = resolve(5, no_overrides(), &host()).expect("defaults resolve");
    assert_eq!(options, OptionSet::defaults(5, &host()));

    let text = |k: OptionKey| options.get(k).as_str().map(str::to_string);
    assert_eq!(options.get(OptionKey::Alpha).as_f64(), Some(1.0));
    assert_eq!(options.get(OptionKey::AxesLabel), &OptionValue::Seq(vec![]));
    assert_eq!(
        options.get(OptionKey::AxisLim),
        &OptionValue::Seq(vec![OptionValue::None; 5])
    );
    assert_eq!(text(OptionKey::LineSpec).as_deref(), Some("k-"));
    assert_eq!(options.get(OptionKey::LineWidth).as_f64(), Some(DEFAULT_LINE_WIDTH));
    assert_eq!(text(OptionKey::MarkerColor).as_deref(), Some("r"));
    assert_eq!(text(OptionKey::MarkerDisplayed).as_deref(), Some("line"));
    assert_eq!(text(OptionKey::MarkerLabel).as_deref(), Some(""));
    assert_eq!(text(OptionKey::MarkerLabelColor).as_deref(), Some("k"));
    assert_eq!(text(OptionKey::MarkerLegend).as_deref(), Some("off"));
    assert_eq!(options.get(OptionKey::MarkerSize).as_f64(), Some(10.0));
    assert_eq!(text(OptionKey::MarkerSymbol).as_deref(), Some("o"));
    assert_eq!(text(OptionKey::Overlay).as_deref(), Some("off"));
    assert_eq!(text(OptionKey::PlotType).as_deref(), Some("linear"));
    assert_eq!(options.get(OptionKey::Ticks), &OptionValue::Seq(vec![]));
    assert_eq!(text(OptionKey::TitleColorbar).as_deref(), Some(""));
    assert_eq!(options.get(OptionKey::XTickLabelPos), &OptionValue::Seq(vec![]));
    assert_eq!(options.get(OptionKey::YTickLabelPos), &OptionValue::Seq(vec![]));
}

#[test]
fn every_key_is_present_after_resolution() {
    let options = resolve_one("overlay", "on".into()).expect("valid");
    let keys: Vec<OptionKey> = options.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, OptionKey::ALL);
}

#[test]
fn axis_limits_sized_to_series_count() {
    for n in [0, 1, 7] {
        let options = resolve(n, no_overrides(), &host()).expect("defaults resolve");
        assert_eq!(
            options.get(OptionKey::AxisLim).as_seq().map(<[OptionValue]>::len),
            Some(n)
        );
    }
}

#[test]
fn unknown_key_is_unrecognized() {
    let err = resolve_one("unknownkey", OptionValue::Number(1.0));
    assert!(matches!(err, Err(OptionError::UnrecognizedOption { key }) if key == "unknownkey"));
}

#[test]
fn cmapzdata_rejects_string_and_boolean() {
    for value in [OptionValue::from("red"), OptionValue::Bool(true)] {
        let err = resolve_one("cmapzdata", value);
        assert!(
            matches!(
                err,
                Err(OptionError::InvalidOptionType { ref key, .. }) if key == "cmapzdata"
            ),
            "{err:?}"
        );
    }
}

#[test]
fn cmapzdata_stores_list() {
    let data = OptionValue::from(vec![1.0, 2.0, 3.0]);
    let options = resolve_one("cmapzdata", data.clone()).expect("list accepted");
    assert_eq!(options.get(OptionKey::CmapZData), &data);
}

#[test]
fn markerlabel_requires_sequence_or_mapping() {
    let err = resolve_one("markerlabel", "gen1".into());
    assert!(matches!(err, Err(OptionError::InvalidOptionType { .. })));

    let list = OptionValue::from(vec!["gen1"]);
    let options = resolve_one("markerlabel", list.clone()).expect("list accepted");
    assert_eq!(options.get(OptionKey::MarkerLabel), &list);

    let map = OptionValue::Map(BTreeMap::from([("g1".to_string(), OptionValue::from("x"))]));
    let options = resolve_one("markerlabel", map.clone()).expect("mapping accepted");
    assert_eq!(options.get(OptionKey::MarkerLabel), &map);
}

#[test]
fn markerlabel_rejects_number() {
    let err = resolve_one("markerlabel", OptionValue::Number(1.0));
    assert!(matches!(err, Err(OptionError::InvalidOptionType { .. })));
}

#[test]
fn overrides_replace_defaults_case_insensitively() {
    let options = resolve(
        2,
        vec![
            ("LineSpec", OptionValue::from("b--")),
            ("MARKERSIZE", OptionValue::Number(4.0)),
        ],
        &host(),
    )
    .expect("valid overrides");
    assert_eq!(options.get(OptionKey::LineSpec).as_str(), Some("b--"));
    assert_eq!(options.get(OptionKey::MarkerSize).as_f64(), Some(4.0));
}

#[test]
fn later_override_of_same_key_wins() {
    let options = resolve(
        1,
        vec![
            ("plottype", OptionValue::from("loglog")),
            ("PlotType", OptionValue::from("semilogx")),
        ],
        &host(),
    )
    .expect("valid overrides");
    assert_eq!(options.get(OptionKey::PlotType).as_str(), Some("semilogx"));
}

#[test]
fn first_violation_stops_processing() {
    let err = resolve(
        1,
        vec![
            ("markerlabel", OptionValue::from("gen1")),
            ("nosuchoption", OptionValue::None),
        ],
        &host(),
    );
    assert!(matches!(err, Err(OptionError::InvalidOptionType { key, .. }) if key == "markerlabel"));
}

#[test]
fn resolution_is_idempotent() {
    let overrides = || vec![("alpha", OptionValue::Number(0.5)), ("overlay", "on".into())];
    let a = resolve(4, overrides(), &host()).expect("valid");
    let b = resolve(4, overrides(), &host()).expect("valid");
    assert_eq!(a, b);
}

#[test]
fn json_overrides_resolve() {
    let overrides: BTreeMap<String, OptionValue> = serde_json::from_str(
        r#"{"axislim": {"Frequency": [0, 4, 59, 61]}, "markerlegend": "on"}"#,
    )
    .expect("valid JSON");
    let options = resolve(1, overrides, &host()).expect("valid overrides");
    assert!(matches!(options.get(OptionKey::AxisLim), OptionValue::Map(_)));
}
