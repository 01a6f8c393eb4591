use approx::assert_relative_eq;
use chart_layout::api::{ChartConfig, ChartKind, Dataset, TitleStyle, layout};
use chart_layout::core::{
    BarOrientation, CategoryLayoutMode, CategoryTable, Color, PlotArea, Series, StackAccumulator,
    layout_categories,
};
use chart_layout::render::{Primitive, TextHAlign, TextPrimitive, TickAxis};

fn yearly_series() -> Vec<Series> {
    vec![
        Series::new("north", Color::STEEL_BLUE)
            .with_point("2020", 10.0)
            .with_point("2021", 30.0)
            .with_point("2022", 25.0),
        Series::new("south", Color::DARK_ORANGE)
            .with_point("2020", 15.0)
            .with_point("2021", 20.0)
            .with_point("2022", 35.0),
    ]
}

#[test]
fn grouped_columns_follow_band_formula() {
    let table = CategoryTable::build(&yearly_series());
    let plot = PlotArea::new(0.0, 0.0, 300.0, 200.0);
    let layout = layout_categories(
        &table,
        plot,
        CategoryLayoutMode::Grouped,
        BarOrientation::Vertical,
    );

    assert_eq!(layout.bands.len(), 3);
    assert_relative_eq!(layout.bands[2].start, 200.0);
    assert_relative_eq!(layout.bands[2].extent, 100.0);
    assert_relative_eq!(layout.value_domain_max, 35.0);

    let north_2022 = layout
        .segments
        .iter()
        .find(|s| s.series_index == 0 && s.category_index == 2)
        .expect("north 2022 bar");
    assert_relative_eq!(north_2022.rect.x, 210.0);
    assert_relative_eq!(north_2022.rect.width, 39.0);
    assert_relative_eq!(north_2022.rect.height, 25.0 / 35.0 * 200.0, epsilon = 1e-9);
    assert_relative_eq!(north_2022.rect.y + north_2022.rect.height, 200.0, epsilon = 1e-9);

    let south_2022 = layout
        .segments
        .iter()
        .find(|s| s.series_index == 1 && s.category_index == 2)
        .expect("south 2022 bar");
    assert_relative_eq!(south_2022.rect.x, 250.0);
    assert_relative_eq!(south_2022.rect.height, 200.0, epsilon = 1e-9);
}

#[test]
fn stacked_segments_rebuild_category_totals() {
    let series = yearly_series();
    let table = CategoryTable::build(&series);
    let plot = PlotArea::new(60.0, 20.0, 300.0, 200.0);
    let layout = layout_categories(
        &table,
        plot,
        CategoryLayoutMode::Stacked,
        BarOrientation::Vertical,
    );
    let totals = StackAccumulator::from_table(&table);
    assert_relative_eq!(layout.value_domain_max, 60.0);

    for category in 0..table.category_count() {
        let stacked: f64 = layout
            .segments
            .iter()
            .filter(|s| s.category_index == category)
            .map(|s| s.rect.height / plot.height * layout.value_domain_max)
            .sum();
        assert_relative_eq!(stacked, totals.total(category), epsilon = 1e-9);
    }

    // Stacked columns are half a band wide and centred.
    let first = layout.segments[0];
    assert_relative_eq!(first.rect.width, 50.0);
    assert_relative_eq!(first.rect.x, 60.0 + 25.0);
}

#[test]
fn missing_and_negative_values_are_not_drawn() {
    let series = vec![
        Series::new("a", Color::RED)
            .with_point("x", 4.0)
            .with_point("y", -3.0),
        Series::new("b", Color::BLACK).with_point("y", 2.0),
    ];
    let table = CategoryTable::build(&series);
    assert_eq!(table.value(1, 0), 0.0);

    let layout = layout_categories(
        &table,
        PlotArea::new(0.0, 0.0, 200.0, 100.0),
        CategoryLayoutMode::Stacked,
        BarOrientation::Vertical,
    );
    assert_eq!(layout.segments.len(), 2);
    assert!(layout.segments.iter().all(|s| s.value > 0.0));
}

#[test]
fn horizontal_bars_stack_to_the_right() {
    let table = CategoryTable::build(&yearly_series());
    let plot = PlotArea::new(60.0, 20.0, 300.0, 240.0);
    let layout = layout_categories(
        &table,
        plot,
        CategoryLayoutMode::Stacked,
        BarOrientation::Horizontal,
    );
    let row = 240.0 / 3.0;
    let first = layout.segments[0];
    assert_relative_eq!(first.rect.x, 60.0);
    assert_relative_eq!(first.rect.height, row * 0.6, epsilon = 1e-9);
    let second = layout.segments[1];
    assert_relative_eq!(second.rect.x, first.rect.x + first.rect.width, epsilon = 1e-9);
}

#[test]
fn axis_chrome_labels_every_value_tick() {
    let dataset = Dataset::Categorical(yearly_series());
    let config = ChartConfig::default().with_axis_titles("Year", "Revenue");
    let plot = PlotArea::new(60.0, 20.0, 300.0, 200.0);
    let result = layout(ChartKind::Bar, &dataset, &config, plot).expect("layout");

    let labels: Vec<&str> = result
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Label(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect();
    for expected in ["0", "12", "24", "36", "48", "60", "2020", "2021", "2022", "Year"] {
        assert!(labels.contains(&expected), "missing label {expected}");
    }
    let y_title = result
        .primitives
        .iter()
        .find_map(|p| match p {
            Primitive::Label(text) if text.text == "Revenue" => Some(text),
            _ => None,
        })
        .expect("y title");
    assert_relative_eq!(y_title.rotation_deg, -90.0);
    assert_eq!(result.ticks_for(TickAxis::Y).map(<[_]>::len), Some(6));
}

fn label<'a>(primitives: &'a [Primitive], text: &str) -> &'a TextPrimitive {
    primitives
        .iter()
        .find_map(|p| match p {
            Primitive::Label(label) if label.text == text => Some(label),
            _ => None,
        })
        .unwrap_or_else(|| panic!("missing label {text}"))
}

#[test]
fn axis_titles_default_to_centred_black() {
    let dataset = Dataset::Categorical(yearly_series());
    let config = ChartConfig::default().with_axis_titles("Year", "Revenue");
    let plot = PlotArea::new(60.0, 20.0, 300.0, 200.0);
    let result = layout(ChartKind::Column, &dataset, &config, plot).expect("layout");

    let x_title = label(&result.primitives, "Year");
    assert_eq!(x_title.color, Color::BLACK);
    assert_eq!(x_title.h_align, TextHAlign::Center);
    assert_relative_eq!(x_title.x, 210.0);
    let y_title = label(&result.primitives, "Revenue");
    assert_eq!(y_title.h_align, TextHAlign::Center);
    assert_relative_eq!(y_title.y, 120.0);
}

#[test]
fn axis_title_style_sets_colour_and_alignment() {
    let dataset = Dataset::Categorical(yearly_series());
    let config = ChartConfig {
        x_axis_title_style: TitleStyle::new(Color::STEEL_BLUE, TextHAlign::Right),
        y_axis_title_style: TitleStyle::new(Color::DARK_RED, TextHAlign::Left),
        ..ChartConfig::default().with_axis_titles("Year", "Revenue")
    };
    let plot = PlotArea::new(60.0, 20.0, 300.0, 200.0);
    let result = layout(ChartKind::Column, &dataset, &config, plot).expect("layout");

    let x_title = label(&result.primitives, "Year");
    assert_eq!(x_title.color, Color::STEEL_BLUE);
    assert_eq!(x_title.h_align, TextHAlign::Right);
    assert_relative_eq!(x_title.x, 360.0);

    // Rotated text reads upward, so a left-aligned Y title starts at the baseline.
    let y_title = label(&result.primitives, "Revenue");
    assert_eq!(y_title.color, Color::DARK_RED);
    assert_eq!(y_title.h_align, TextHAlign::Left);
    assert_relative_eq!(y_title.y, 220.0);
    assert_relative_eq!(y_title.rotation_deg, -90.0);
}

#[test]
fn gridlines_skip_the_baseline() {
    let dataset = Dataset::Categorical(yearly_series());
    let plot = PlotArea::new(60.0, 20.0, 300.0, 200.0);
    let gray_lines = |config: &ChartConfig| {
        layout(ChartKind::Column, &dataset, config, plot)
            .expect("layout")
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line(line) if line.color == Color::LIGHT_GRAY))
            .count()
    };
    assert_eq!(gray_lines(&ChartConfig::default()), 5);
    let hidden = ChartConfig {
        show_grid_lines: false,
        ..ChartConfig::default()
    };
    assert_eq!(gray_lines(&hidden), 0);
}

#[test]
fn config_override_switches_bar_to_grouped() {
    let dataset = Dataset::Categorical(yearly_series());
    let plot = PlotArea::new(0.0, 0.0, 300.0, 200.0);
    let config = ChartConfig::default().with_category_layout(CategoryLayoutMode::Grouped);
    let result = layout(ChartKind::Bar, &dataset, &config, plot).expect("layout");
    let y_ticks = result.ticks_for(TickAxis::Y).expect("value ticks");
    assert_relative_eq!(y_ticks.last().map(|t| t.value).unwrap_or_default(), 35.0);
}
