use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fs::File;
use std::path::Path;

use cairo::{Context, FillRule, Format, ImageSurface};
use pango::{FontDescription, Weight};
use tracing::debug;

use crate::core::{ArcPath, Color};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    LayoutResult, LineStrokeStyle, Primitive, RectPrimitive, Renderer, TextHAlign, TextPrimitive,
};

/// DPI at which one layout unit equals one device pixel.
pub const BASE_DPI: f64 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub arcs_drawn: usize,
    pub polygons_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Draws a layout result into a Cairo context owned by the host, e.g. a
/// widget's draw handler or a PDF surface.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &LayoutResult)
    -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo rasterizer with PNG export.
///
/// Layout coordinates are logical units at 96 DPI; the surface is sized and
/// scaled by `dpi / 96` so exports stay sharp at any resolution.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    scale: f64,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    /// Surface of `width x height` logical units at 96 DPI.
    pub fn new(width: f64, height: f64) -> ChartResult<Self> {
        Self::with_dpi(width, height, BASE_DPI)
    }

    /// Surface of `width x height` logical units rasterized at `dpi`.
    pub fn with_dpi(width: f64, height: f64, dpi: f64) -> ChartResult<Self> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "export dpi must be finite and > 0, got {dpi}"
            )));
        }
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidPlotArea { width, height });
        }

        let scale = dpi / BASE_DPI;
        let pixel_width = (width * scale).ceil() as i32;
        let pixel_height = (height * scale).ceil() as i32;
        let surface = ImageSurface::create(Format::ARgb32, pixel_width, pixel_height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        debug!(pixel_width, pixel_height, dpi, "created cairo surface");

        Ok(Self {
            surface,
            scale,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::Render(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Render(format!("failed to encode png: {err}")))?;
        debug!(path = %path.display(), "exported png");
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &LayoutResult) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for primitive in &frame.primitives {
            match primitive {
                Primitive::Line(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    match line.stroke_style {
                        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
                        LineStrokeStyle::Dashed { dash, gap } => {
                            context.set_dash(&[dash, gap], 0.0);
                        }
                    }
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    context.set_dash(&[], 0.0);
                    stats.lines_drawn += 1;
                }
                Primitive::Rect(rect) => {
                    append_rect_path(context, *rect);
                    fill_and_border(
                        context,
                        rect.fill_color,
                        rect.border_width,
                        rect.border_color,
                    )?;
                    stats.rects_drawn += 1;
                }
                Primitive::Arc(arc) => {
                    append_arc_path(context, &arc.arc);
                    fill_and_border(context, arc.fill_color, arc.border_width, arc.border_color)?;
                    stats.arcs_drawn += 1;
                }
                Primitive::Polygon(polygon) => {
                    let mut points = polygon.points.iter();
                    if let Some(first) = points.next() {
                        context.move_to(first.x, first.y);
                        for point in points {
                            context.line_to(point.x, point.y);
                        }
                        context.close_path();
                    }
                    apply_color(context, polygon.fill_color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill polygon", err))?;
                    stats.polygons_drawn += 1;
                }
                Primitive::Marker(marker) => {
                    context.new_sub_path();
                    context.arc(marker.center.x, marker.center.y, marker.radius, 0.0, TAU);
                    apply_color(context, marker.fill_color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill marker", err))?;
                    stats.markers_drawn += 1;
                }
                Primitive::Label(text) => {
                    draw_text(context, text)?;
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &LayoutResult) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.scale(self.scale, self.scale);
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &LayoutResult,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    let (red, green, blue, alpha) = color.to_unit_rgba();
    context.set_source_rgba(red, green, blue, alpha);
}

fn fill_and_border(
    context: &Context,
    fill_color: Color,
    border_width: f64,
    border_color: Color,
) -> ChartResult<()> {
    apply_color(context, fill_color);
    if border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill shape", err))?;
        apply_color(context, border_color);
        context.set_line_width(border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke shape border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill shape", err))
    }
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn append_arc_path(context: &Context, arc: &ArcPath) {
    let (cx, cy) = (arc.center.x, arc.center.y);
    if arc.is_full_circle {
        context.set_fill_rule(FillRule::EvenOdd);
        context.new_sub_path();
        context.arc(cx, cy, arc.radius, 0.0, TAU);
        if arc.inner_radius > 0.0 {
            context.new_sub_path();
            context.arc(cx, cy, arc.inner_radius, 0.0, TAU);
        }
        return;
    }

    context.set_fill_rule(FillRule::Winding);
    let start = arc.start_angle.to_radians();
    let end = arc.end_angle().to_radians();
    if arc.inner_radius > 0.0 {
        context.new_sub_path();
        context.arc(cx, cy, arc.radius, start, end);
        context.arc_negative(cx, cy, arc.inner_radius, end, start);
    } else {
        context.move_to(cx, cy);
        context.arc(cx, cy, arc.radius, start, end);
    }
    context.close_path();
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string("Sans");
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    if text.bold {
        font_description.set_weight(Weight::Bold);
    }
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let offset = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(text.x, text.y);
    if text.rotation_deg != 0.0 {
        context.rotate(text.rotation_deg.to_radians());
    }
    apply_color(context, text.color);
    context.move_to(offset, 0.0);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Render(format!("{prefix}: {err}"))
}
