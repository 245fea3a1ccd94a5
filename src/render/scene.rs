use indexmap::IndexMap;
use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, DrawingSurface, PathPrimitive, ShapeId, TextPrimitive, scene_to_svg,
};

/// A fresh text node shifts its first glyph run down by a quarter of the font size.
const GLYPH_RUN_DY_DIVISOR: f64 = 4.0;

/// Styled span inside a text node (an SVG `tspan`).
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    pub text: String,
    pub attributes: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneShape {
    Circle(CirclePrimitive),
    Path(PathPrimitive),
    Text {
        primitive: TextPrimitive,
        runs: SmallVec<[GlyphRun; 1]>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: ShapeId,
    pub shape: SceneShape,
    pub attributes: IndexMap<String, String>,
}

impl SceneNode {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Retained in-memory drawing surface.
///
/// Nodes are keyed by id and kept in paint order: index 0 is painted first
/// (back-most). Primitives are stored as given; non-finite geometry is kept
/// as-is.
#[derive(Debug, Clone)]
pub struct Scene {
    container: String,
    width: f64,
    height: f64,
    nodes: IndexMap<ShapeId, SceneNode>,
    next_id: u64,
}

impl Scene {
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Nodes in paint order, back to front.
    #[must_use]
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &SceneNode> {
        self.nodes.values()
    }

    #[must_use]
    pub fn node(&self, id: ShapeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Paint-order index of `id` (0 is back-most).
    #[must_use]
    pub fn paint_index(&self, id: ShapeId) -> Option<usize> {
        self.nodes.get_index_of(&id)
    }

    pub fn circles(&self) -> impl Iterator<Item = (&SceneNode, &CirclePrimitive)> {
        self.nodes.values().filter_map(|node| match &node.shape {
            SceneShape::Circle(circle) => Some((node, circle)),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&SceneNode, &PathPrimitive)> {
        self.nodes.values().filter_map(|node| match &node.shape {
            SceneShape::Path(path) => Some((node, path)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&SceneNode, &TextPrimitive)> {
        self.nodes.values().filter_map(|node| match &node.shape {
            SceneShape::Text { primitive, .. } => Some((node, primitive)),
            _ => None,
        })
    }

    /// Applies the pointer enter/leave fill of a hover-reactive circle.
    ///
    /// Shapes without hover styling are left untouched.
    pub fn hover(&mut self, id: ShapeId, entering: bool) -> ChartResult<()> {
        if let SceneShape::Circle(circle) = &mut self.node_mut(id)?.shape {
            if let Some(hover) = circle.hover {
                circle.fill = Some(if entering { hover.enter } else { hover.leave });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn to_svg_string(&self) -> String {
        scene_to_svg(self)
    }

    fn push(&mut self, shape: SceneShape) -> ShapeId {
        let id = ShapeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            SceneNode {
                id,
                shape,
                attributes: IndexMap::new(),
            },
        );
        id
    }

    fn node_mut(&mut self, id: ShapeId) -> ChartResult<&mut SceneNode> {
        self.nodes.get_mut(&id).ok_or_else(|| unknown_shape(id))
    }

    fn index_of(&self, id: ShapeId) -> ChartResult<usize> {
        self.paint_index(id).ok_or_else(|| unknown_shape(id))
    }
}

fn unknown_shape(id: ShapeId) -> ChartError {
    ChartError::Surface(format!("unknown shape id {}", id.raw()))
}

impl DrawingSurface for Scene {
    fn open(container: &str, width: f64, height: f64) -> ChartResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        Ok(Self {
            container: container.to_owned(),
            width,
            height,
            nodes: IndexMap::new(),
            next_id: 0,
        })
    }

    fn circle(&mut self, circle: CirclePrimitive) -> ChartResult<ShapeId> {
        Ok(self.push(SceneShape::Circle(circle)))
    }

    fn path(&mut self, path: PathPrimitive) -> ChartResult<ShapeId> {
        Ok(self.push(SceneShape::Path(path)))
    }

    fn text(&mut self, text: TextPrimitive) -> ChartResult<ShapeId> {
        let mut attributes = IndexMap::new();
        attributes.insert(
            "dy".to_owned(),
            format!("{}", text.font_size_px / GLYPH_RUN_DY_DIVISOR),
        );
        let run = GlyphRun {
            text: text.text.clone(),
            attributes,
        };
        Ok(self.push(SceneShape::Text {
            primitive: text,
            runs: smallvec![run],
        }))
    }

    fn set_node_attribute(&mut self, id: ShapeId, name: &str, value: &str) -> ChartResult<()> {
        self.node_mut(id)?
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn send_to_back(&mut self, id: ShapeId) -> ChartResult<()> {
        let index = self.index_of(id)?;
        self.nodes.move_index(index, 0);
        Ok(())
    }

    fn bring_to_front(&mut self, id: ShapeId) -> ChartResult<()> {
        let index = self.index_of(id)?;
        self.nodes.move_index(index, self.nodes.len() - 1);
        Ok(())
    }

    fn first_glyph_run_mut(&mut self, id: ShapeId) -> Option<&mut GlyphRun> {
        match &mut self.nodes.get_mut(&id)?.shape {
            SceneShape::Text { runs, .. } => runs.first_mut(),
            _ => None,
        }
    }
}
