use chart_layout::api::{
    ChartConfig, ChartKind, Dataset, LAYOUT_RESULT_JSON_SCHEMA_V1, LayoutResultJsonContractV1,
    PieSegment, layout,
};
use chart_layout::core::{Color, PlotArea, Series};
use chart_layout::render::LayoutResult;

fn column_result() -> LayoutResult {
    let dataset = Dataset::Categorical(vec![
        Series::new("a", Color::STEEL_BLUE)
            .with_point("x", 2.0)
            .with_point("y", 6.0),
    ]);
    layout(
        ChartKind::Column,
        &dataset,
        &ChartConfig::default(),
        PlotArea::new(60.0, 20.0, 300.0, 200.0),
    )
    .expect("layout")
}

#[test]
fn contract_v1_carries_schema_version() {
    let json = column_result()
        .to_json_contract_v1_pretty()
        .expect("serialize");
    let payload: LayoutResultJsonContractV1 = serde_json::from_str(&json).expect("envelope");
    assert_eq!(payload.schema_version, LAYOUT_RESULT_JSON_SCHEMA_V1);
    assert_eq!(payload.result, column_result());
}

#[test]
fn primitives_are_tagged_by_type() {
    let dataset = Dataset::Pie(vec![PieSegment::new("only", 1.0, Color::RED)]);
    let result = layout(
        ChartKind::Pie,
        &dataset,
        &ChartConfig::default(),
        PlotArea::new(0.0, 0.0, 100.0, 100.0),
    )
    .expect("layout");
    let value: serde_json::Value =
        serde_json::from_str(&result.to_json_pretty().expect("serialize")).expect("json");
    assert_eq!(value["primitives"][0]["type"], "arc");
    assert_eq!(value["primitives"][1]["type"], "label");
    assert_eq!(value["legend_position"], "Right");
}

#[test]
fn compat_parser_accepts_both_shapes() {
    let result = column_result();
    let bare = result.to_json_pretty().expect("bare");
    let wrapped = result.to_json_contract_v1_pretty().expect("wrapped");
    assert_eq!(LayoutResult::from_json_compat_str(&bare).expect("bare"), result);
    assert_eq!(LayoutResult::from_json_compat_str(&wrapped).expect("wrapped"), result);
    assert!(LayoutResult::from_json_compat_str("{\"schema_version\": 1}").is_err());
}

#[test]
fn config_document_fills_defaults() {
    let config = ChartConfig::from_json_str(
        r#"{ "tick_count": 3, "gantt": { "today": "2024-05-01" }, "min_color": { "red": 0, "green": 0, "blue": 0, "alpha": 255 } }"#,
    )
    .expect("config");
    assert_eq!(config.tick_count, 3);
    assert!(config.gantt.show_today_line);
    assert_eq!(config.gantt.tick_count, 5);
    assert_eq!(config.min_color, Color::BLACK);
    assert_eq!(config.max_color, Color::DARK_RED);

    assert!(ChartConfig::from_json_str(r#"{ "tick_count": 1 }"#).is_err());
}
