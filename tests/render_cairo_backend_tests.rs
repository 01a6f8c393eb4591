#![cfg(feature = "cairo-backend")]

use chart_layout::ChartError;
use chart_layout::api::{ChartConfig, ChartKind, ChartLayoutEngine, Dataset, PieSegment};
use chart_layout::core::{Color, PlotArea, Series};
use chart_layout::render::{CairoContextRenderer, CairoRenderer, Renderer};

#[test]
fn cairo_renderer_rejects_empty_surface() {
    let err = CairoRenderer::new(0.0, 480.0).expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidPlotArea { .. }));
    let err = CairoRenderer::with_dpi(100.0, 100.0, 0.0).expect_err("zero dpi must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn dpi_scales_surface_size() {
    let renderer = CairoRenderer::with_dpi(400.0, 300.0, 192.0).expect("renderer");
    assert_eq!(renderer.pixel_size(), (800, 600));
}

#[test]
fn cairo_renderer_draws_bars_and_axes() {
    let renderer = CairoRenderer::new(640.0, 400.0).expect("renderer");
    let mut engine = ChartLayoutEngine::new(renderer);
    let dataset = Dataset::Categorical(vec![
        Series::new("a", Color::STEEL_BLUE)
            .with_point("x", 4.0)
            .with_point("y", 9.0),
    ]);
    let plot = PlotArea::from_viewport(640.0, 400.0, ChartKind::Column.default_margins());
    engine
        .render(ChartKind::Column, &dataset, &ChartConfig::default(), plot)
        .expect("render");

    let stats = engine.into_renderer().last_stats();
    assert_eq!(stats.rects_drawn, 2);
    assert!(stats.lines_drawn > 0);
    assert!(stats.texts_drawn > 0);
}

#[test]
fn pie_export_writes_png() {
    let mut renderer = CairoRenderer::with_dpi(300.0, 300.0, 144.0).expect("renderer");
    let dataset = Dataset::Pie(vec![
        PieSegment::new("a", 2.0, Color::RED),
        PieSegment::new("b", 1.0, Color::STEEL_BLUE),
    ]);
    let frame = chart_layout::layout(
        ChartKind::Pie,
        &dataset,
        &ChartConfig {
            pie_inner_radius_ratio: 0.4,
            ..ChartConfig::default()
        },
        PlotArea::new(0.0, 0.0, 300.0, 300.0),
    )
    .expect("layout");
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_stats().arcs_drawn, 2);

    let path = std::env::temp_dir().join(format!("chart-layout-pie-{}.png", std::process::id()));
    renderer.write_png(&path).expect("png");
    let bytes = std::fs::read(&path).expect("read png");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn renders_into_host_owned_context() {
    let mut renderer = CairoRenderer::new(200.0, 120.0).expect("renderer");
    let dataset = Dataset::Categorical(vec![
        Series::new("a", Color::STEEL_BLUE)
            .with_point("x", 1.0)
            .with_point("y", 3.0),
    ]);
    let frame = chart_layout::layout(
        ChartKind::Line,
        &dataset,
        &ChartConfig::default(),
        PlotArea::new(30.0, 10.0, 150.0, 80.0),
    )
    .expect("layout");

    let surface =
        cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 120).expect("host surface");
    let context = cairo::Context::new(&surface).expect("host context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on host context");
    assert_eq!(renderer.last_stats().markers_drawn, 2);
}
