use std::f64::consts::TAU;
use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use kurbo::PathEl;
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontWeight, Scene, SceneRenderer, SceneShape, parse_path_data};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub circles_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster backend for retained scenes.
///
/// Paints into an offscreen image surface through `SceneRenderer::render`, or
/// onto an external Cairo context through `render_on_cairo_context`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
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

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the last rendered image as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Surface(format!("failed to encode png: {err}")))
    }

    pub fn render_on_cairo_context(&mut self, context: &Context, scene: &Scene) -> ChartResult<()> {
        apply_color(context, self.clear_color, 1.0);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for node in scene.nodes() {
            match &node.shape {
                SceneShape::Circle(circle) => {
                    circle.validate()?;
                    context.new_path();
                    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
                    if let Some(fill) = circle.fill {
                        apply_color(context, fill, 1.0);
                        context
                            .fill_preserve()
                            .map_err(|err| map_backend_error("failed to fill circle", err))?;
                    }
                    if circle.stroke_width > 0.0 {
                        apply_color(context, circle.stroke, circle.stroke_opacity);
                        context.set_line_width(circle.stroke_width);
                        context
                            .stroke()
                            .map_err(|err| map_backend_error("failed to stroke circle", err))?;
                    }
                    context.new_path();
                    stats.circles_drawn += 1;
                }
                SceneShape::Path(path) => {
                    path.validate()?;
                    context.new_path();
                    for element in parse_path_data(&path.data)?.elements() {
                        match *element {
                            PathEl::MoveTo(point) => context.move_to(point.x, point.y),
                            PathEl::LineTo(point) => context.line_to(point.x, point.y),
                            PathEl::QuadTo(control, point) => {
                                // Degree-elevate: cairo only draws cubic curves.
                                let (x0, y0) = context.current_point().unwrap_or((0.0, 0.0));
                                context.curve_to(
                                    x0 + 2.0 / 3.0 * (control.x - x0),
                                    y0 + 2.0 / 3.0 * (control.y - y0),
                                    point.x + 2.0 / 3.0 * (control.x - point.x),
                                    point.y + 2.0 / 3.0 * (control.y - point.y),
                                    point.x,
                                    point.y,
                                );
                            }
                            PathEl::CurveTo(a, b, point) => {
                                context.curve_to(a.x, a.y, b.x, b.y, point.x, point.y);
                            }
                            PathEl::ClosePath => context.close_path(),
                        }
                    }
                    if let Some(fill) = path.fill {
                        apply_color(context, fill, path.fill_opacity);
                        context
                            .fill_preserve()
                            .map_err(|err| map_backend_error("failed to fill path", err))?;
                    }
                    if let Some(stroke) = path.stroke.filter(|_| path.stroke_width > 0.0) {
                        apply_color(context, stroke, 1.0);
                        context.set_line_width(path.stroke_width);
                        context
                            .stroke()
                            .map_err(|err| map_backend_error("failed to stroke path", err))?;
                    }
                    context.new_path();
                    stats.paths_drawn += 1;
                }
                SceneShape::Text { primitive, runs } => {
                    primitive.validate()?;
                    let layout = pangocairo::functions::create_layout(context);
                    let weight = match primitive.font_weight {
                        FontWeight::Normal => "",
                        FontWeight::Bold => " Bold",
                    };
                    let font_description = FontDescription::from_string(&format!(
                        "Sans{weight} {}",
                        primitive.font_size_px
                    ));
                    layout.set_font_description(Some(&font_description));
                    layout.set_text(&primitive.text);

                    let dy = runs
                        .first()
                        .and_then(|run| run.attributes.get("dy"))
                        .and_then(|value| value.parse::<f64>().ok())
                        .unwrap_or(0.0);
                    // Text y is a baseline; pango positions the layout's top edge.
                    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

                    apply_color(context, primitive.color, 1.0);
                    context.move_to(primitive.x, primitive.y + dy - baseline);
                    pangocairo::functions::show_layout(context, &layout);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl SceneRenderer for CairoRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_on_cairo_context(&context, scene)
    }
}

fn apply_color(context: &Context, color: Color, opacity: f64) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha * opacity);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Surface(format!("{prefix}: {err}"))
}
