//! SVG markup for retained scenes.

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::error::ChartResult;
use crate::render::{Color, FontWeight, Scene, SceneRenderer, SceneShape};

/// Serializes `scene` as a standalone SVG document, nodes in paint order.
#[must_use]
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        escape_xml(scene.container()),
        scene.width(),
        scene.height(),
        scene.width(),
        scene.height(),
    );

    for node in scene.nodes() {
        match &node.shape {
            SceneShape::Circle(circle) => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    circle.cx, circle.cy, circle.radius
                );
                match circle.fill {
                    Some(fill) => write_paint_attr(&mut out, "fill", fill),
                    None => out.push_str(r#" fill="none""#),
                }
                write_paint_attr(&mut out, "stroke", circle.stroke);
                let _ = write!(out, r#" stroke-width="{}""#, circle.stroke_width);
                if circle.stroke_opacity < 1.0 {
                    let _ = write!(out, r#" stroke-opacity="{}""#, circle.stroke_opacity);
                }
                if let Some(hover) = circle.hover {
                    write_paint_attr(&mut out, "data-hover-fill", hover.enter);
                    write_paint_attr(&mut out, "data-leave-fill", hover.leave);
                }
                write_node_attrs(&mut out, &node.attributes);
                out.push_str("/>\n");
            }
            SceneShape::Path(path) => {
                let _ = write!(out, r#"<path d="{}""#, escape_xml(&path.data));
                match path.fill {
                    Some(fill) => {
                        write_paint_attr(&mut out, "fill", fill);
                        if path.fill_opacity < 1.0 {
                            let _ = write!(out, r#" fill-opacity="{}""#, path.fill_opacity);
                        }
                    }
                    None => out.push_str(r#" fill="none""#),
                }
                match path.stroke {
                    Some(stroke) if path.stroke_width > 0.0 => {
                        write_paint_attr(&mut out, "stroke", stroke);
                        let _ = write!(out, r#" stroke-width="{}""#, path.stroke_width);
                    }
                    _ => out.push_str(r#" stroke="none""#),
                }
                write_node_attrs(&mut out, &node.attributes);
                out.push_str("/>\n");
            }
            SceneShape::Text { primitive, runs } => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}""#,
                    primitive.x, primitive.y, primitive.font_size_px
                );
                if primitive.font_weight == FontWeight::Bold {
                    out.push_str(r#" font-weight="bold""#);
                }
                write_paint_attr(&mut out, "fill", primitive.color);
                write_node_attrs(&mut out, &node.attributes);
                out.push('>');
                for run in runs {
                    out.push_str("<tspan");
                    write_node_attrs(&mut out, &run.attributes);
                    out.push('>');
                    out.push_str(&escape_xml(&run.text));
                    out.push_str("</tspan>");
                }
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let _ = write!(out, r#" {name}="{}""#, color.to_hex());
}

fn write_node_attrs(out: &mut String, attributes: &IndexMap<String, String>) {
    for (name, value) in attributes {
        let _ = write!(out, r#" {}="{}""#, escape_xml(name), escape_xml(value));
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renderer that keeps the SVG markup of the last rendered scene.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    markup: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn into_markup(self) -> String {
        self.markup
    }
}

impl SceneRenderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        self.markup = scene_to_svg(scene);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SvgRenderer, escape_xml};
    use crate::render::{
        Color, DrawingSurface, FontWeight, PathPrimitive, Scene, SceneRenderer, TextPrimitive,
    };

    #[test]
    fn svg_lists_nodes_in_paint_order() {
        let mut scene = Scene::open("root", 40.0, 20.0).expect("scene");
        let line = scene
            .path(PathPrimitive::stroked("M0 0L40 20", Color::BLACK, 4.0))
            .expect("line");
        let band = scene
            .path(PathPrimitive::filled("M0,0 40,0 40,20 Z", Color::RED, 0.2))
            .expect("band");
        scene.send_to_back(band).expect("to back");
        scene
            .set_node_attribute(line, "data-point-y", "3")
            .expect("attribute");

        let mut renderer = SvgRenderer::default();
        renderer.render(&scene).expect("render");
        let svg = renderer.markup();

        let band_at = svg.find("fill-opacity=\"0.2\"").expect("band markup");
        let line_at = svg.find("data-point-y=\"3\"").expect("line markup");
        assert!(band_at < line_at);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_runs_render_as_tspans() {
        let mut scene = Scene::open("root", 40.0, 20.0).expect("scene");
        scene
            .text(TextPrimitive::new(
                "a<b",
                1.0,
                2.0,
                10.0,
                FontWeight::Bold,
                Color::BLACK,
            ))
            .expect("text");

        let svg = scene.to_svg_string();
        assert!(svg.contains(r#"<tspan dy="2.5">a&lt;b</tspan>"#));
        assert!(svg.contains(r#"font-weight="bold""#));
    }

    #[test]
    fn escape_handles_quotes() {
        assert_eq!(escape_xml(r#""x" & 'y'"#), "&quot;x&quot; &amp; &apos;y&apos;");
    }
}
