use tracing::trace;

use crate::core::{Point, layout_gridlines};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, PathPrimitive, ShapeId, TextPrimitive, segment_path};

use super::ChartMetadata;

/// Shapes drawn for one reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridlineShapes {
    pub line: ShapeId,
    pub label: ShapeId,
    /// Whether the label's glyph offset had to be cleared.
    pub offset_cleared: bool,
}

/// Draws the horizontal reference lines and their value labels.
///
/// Lines span the full nominal width and are sent to the back, so they end
/// up behind every series shape regardless of call order. Labels sit just
/// above the left end of their line.
pub fn draw_gridlines<S: DrawingSurface>(
    surface: &mut S,
    metadata: &ChartMetadata,
) -> ChartResult<Vec<GridlineShapes>> {
    let style = &metadata.style;
    let gridlines = layout_gridlines(metadata.plot_area(), metadata.segment_count());
    let mut drawn = Vec::with_capacity(gridlines.len());

    for gridline in gridlines {
        let data = segment_path(
            Point::new(0.0, gridline.y),
            Point::new(metadata.width, gridline.y),
        );
        let line = surface.path(PathPrimitive::stroked(
            data,
            style.gridline_color,
            style.gridline_width,
        ))?;
        surface.send_to_back(line)?;

        let label = surface.text(TextPrimitive::new(
            gridline.label.as_str(),
            metadata.padding / 4.0,
            gridline.y - style.label_lift_px,
            style.label_font_size_px,
            style.label_font_weight,
            style.label_color,
        ))?;
        let offset_cleared = clear_first_glyph_offset(surface, label);

        trace!(value = gridline.value, y = gridline.y, "drew gridline");
        drawn.push(GridlineShapes {
            line,
            label,
            offset_cleared,
        });
    }

    Ok(drawn)
}

/// Zeroes a leading `dy` shift on the first glyph run of `label`.
///
/// Some surfaces shift the first run of a new text node vertically, which
/// misplaces labels anchored by their baseline. Surfaces that do not expose
/// glyph runs, or whose first attribute is something else, are left alone.
fn clear_first_glyph_offset<S: DrawingSurface>(surface: &mut S, label: ShapeId) -> bool {
    let Some(run) = surface.first_glyph_run_mut(label) else {
        trace!(label = label.raw(), "surface exposes no glyph runs");
        return false;
    };
    match run.attributes.get_index_mut(0) {
        Some((name, value)) if name == "dy" => {
            *value = "0".to_owned();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::draw_gridlines;
    use crate::api::{ChartMetadata, ChartOptions};
    use crate::render::{
        Color, DrawingSurface, NullSurface, PathPrimitive, Scene, SceneShape,
    };

    fn metadata() -> ChartMetadata {
        ChartMetadata::build(
            &ChartOptions::new("chart", 300.0, 150.0)
                .with_series([1.0, 3.0, 2.0])
                .with_series([4.0, 5.0, 4.0])
                .with_padding(10.0)
                .with_segments(3),
        )
    }

    #[test]
    fn gridlines_go_behind_existing_content() {
        let mut scene = Scene::open("chart", 300.0, 150.0).expect("scene");
        let series = scene
            .path(PathPrimitive::stroked("M10 140L290 10", Color::BLACK, 4.0))
            .expect("series line");

        let drawn = draw_gridlines(&mut scene, &metadata()).expect("gridlines");

        assert_eq!(drawn.len(), 3);
        let series_index = scene.paint_index(series).expect("series");
        for gridline in &drawn {
            assert!(scene.paint_index(gridline.line).expect("line") < series_index);
        }
    }

    #[test]
    fn labels_show_rounded_values_above_the_line() {
        let mut scene = Scene::open("chart", 300.0, 150.0).expect("scene");
        draw_gridlines(&mut scene, &metadata()).expect("gridlines");

        let labels: Vec<_> = scene
            .texts()
            .map(|(_, text)| (text.text.clone(), text.x, text.y))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("1".to_owned(), 2.5, 134.0),
                ("3".to_owned(), 2.5, 69.0),
                ("5".to_owned(), 2.5, 4.0),
            ]
        );
    }

    #[test]
    fn glyph_offset_is_cleared_when_exposed() {
        let mut scene = Scene::open("chart", 300.0, 150.0).expect("scene");
        let drawn = draw_gridlines(&mut scene, &metadata()).expect("gridlines");

        for gridline in &drawn {
            assert!(gridline.offset_cleared);
            match &scene.node(gridline.label).expect("label").shape {
                SceneShape::Text { runs, .. } => {
                    assert_eq!(runs[0].attributes.get("dy").map(String::as_str), Some("0"));
                }
                other => panic!("unexpected shape {other:?}"),
            }
        }
    }

    #[test]
    fn surfaces_without_glyph_runs_skip_the_correction() {
        let mut surface = NullSurface::open("chart", 300.0, 150.0).expect("surface");
        let drawn = draw_gridlines(&mut surface, &metadata()).expect("gridlines");

        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|gridline| !gridline.offset_cleared));
        assert_eq!(surface.stats().texts, 3);
        assert_eq!(surface.stats().sent_to_back, 3);
    }
}
