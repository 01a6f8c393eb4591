use chart_layout::api::{ChartConfig, ChartKind, Dataset, PieSegment, TreemapGroup, layout};
use chart_layout::core::{
    BarOrientation, CategoryLayoutMode, CategoryTable, Color, PlotArea, Point, Rect, ScaleKind,
    Series, StackAccumulator, denormalize, layout_categories, normalize, partition, pie_slices,
    widen_degenerate,
};
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = Vec<Series>> {
    prop::collection::vec(prop::collection::vec(-50.0f64..500.0, 1..6), 1..4).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, values)| {
                values.into_iter().enumerate().fold(
                    Series::new(format!("s{index}"), Color::STEEL_BLUE),
                    |series, (category, value)| series.with_point(format!("c{category}"), value),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn log_round_trip_recovers_value(
        min in 1e-3f64..1e3,
        span in 1.5f64..1e4,
        t in 0.0f64..1.0
    ) {
        let max = min * span;
        let value = min * span.powf(t);
        let fraction = normalize(value, min, max, ScaleKind::Logarithmic);
        let back = denormalize(fraction, min, max, ScaleKind::Logarithmic);
        prop_assert!((back - value).abs() <= value * 1e-9);
    }

    #[test]
    fn degenerate_domain_is_widened(value in -1e6f64..1e6) {
        let (min, max) = widen_degenerate(value, value);
        prop_assert_eq!(min, value);
        prop_assert_eq!(max, value + 1.0);
    }

    #[test]
    fn stacked_segments_reconstruct_totals(series in series_strategy()) {
        let table = CategoryTable::build(&series);
        let plot = PlotArea::new(10.0, 10.0, 400.0, 250.0);
        let layout = layout_categories(
            &table,
            plot,
            CategoryLayoutMode::Stacked,
            BarOrientation::Vertical,
        );
        let totals = StackAccumulator::from_table(&table);
        for category in 0..table.category_count() {
            let stacked: f64 = layout
                .segments
                .iter()
                .filter(|s| s.category_index == category)
                .map(|s| s.rect.height / plot.height * layout.value_domain_max)
                .sum();
            prop_assert!((stacked - totals.total(category)).abs() <= 1e-6);
        }
    }

    #[test]
    fn treemap_partition_conserves_area(
        groups in prop::collection::vec(prop::collection::vec(0.01f64..100.0, 1..6), 1..6),
        width in 50.0f64..1200.0,
        height in 50.0f64..900.0
    ) {
        let root = Rect::new(0.0, 0.0, width, height);
        let area: f64 = partition(&groups, root)
            .iter()
            .flat_map(|group| group.children.iter())
            .map(|leaf| leaf.rect.area())
            .sum();
        prop_assert!((area - root.area()).abs() <= root.area() * 1e-9);
    }

    #[test]
    fn pie_sweeps_sum_to_full_turn(values in prop::collection::vec(-5.0f64..100.0, 1..12)) {
        let slices = pie_slices(&values, Point::new(0.0, 0.0), 50.0, 0.0);
        let positive = values.iter().any(|v| *v > 0.0);
        prop_assert_eq!(slices.is_empty(), !positive);
        if positive {
            let sweep: f64 = slices.iter().map(|s| s.arc.sweep_angle).sum();
            prop_assert!((sweep - 360.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn layout_is_deterministic(series in series_strategy(), column in any::<bool>()) {
        let kind = if column { ChartKind::Column } else { ChartKind::Bar };
        let dataset = Dataset::Categorical(series);
        let config = ChartConfig::default();
        let plot = PlotArea::new(60.0, 20.0, 320.0, 220.0);
        let first = layout(kind, &dataset, &config, plot).expect("first");
        let second = layout(kind, &dataset, &config, plot).expect("second");
        prop_assert!(first.validate().is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_pie_and_treemap_primitive_is_valid(
        values in prop::collection::vec(0.0f64..1_000.0, 1..10),
        ratio in 0.0f64..0.9
    ) {
        let pie = Dataset::Pie(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| PieSegment::new(format!("p{i}"), *v, Color::RED))
                .collect(),
        );
        let config = ChartConfig {
            pie_inner_radius_ratio: ratio,
            ..ChartConfig::default()
        };
        let plot = PlotArea::new(0.0, 0.0, 300.0, 300.0);
        prop_assert!(layout(ChartKind::Pie, &pie, &config, plot).expect("pie").validate().is_ok());

        let treemap = Dataset::Treemap(vec![values.iter().enumerate().fold(
            TreemapGroup::new("g", Color::STEEL_BLUE),
            |group, (i, v)| group.with_item(format!("t{i}"), *v),
        )]);
        let result = layout(ChartKind::Treemap, &treemap, &config, plot).expect("treemap");
        prop_assert!(result.validate().is_ok());
    }
}
