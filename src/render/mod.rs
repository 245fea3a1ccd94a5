mod null_surface;
mod path;
mod primitives;
mod scene;
mod svg;

pub use null_surface::{NullSurface, NullSurfaceStats};
pub use path::{parse_path_data, polygon_path, segment_path};
pub use primitives::{
    CirclePrimitive, Color, FontWeight, HoverFill, PathPrimitive, TextPrimitive,
};
pub use scene::{GlyphRun, Scene, SceneNode, SceneShape};
pub use svg::{SvgRenderer, scene_to_svg};

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

/// Opaque handle to a shape drawn on a `DrawingSurface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(u64);

impl ShapeId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Vector drawing surface the chart renders into.
///
/// Shapes are painted in insertion order unless moved with `send_to_back` or
/// `bring_to_front`. Implementations own their node storage; the chart only
/// keeps `ShapeId` handles for the duration of one render pass.
pub trait DrawingSurface {
    /// Opens a surface of `width x height` mounted at `container`.
    fn open(container: &str, width: f64, height: f64) -> ChartResult<Self>
    where
        Self: Sized;

    fn circle(&mut self, circle: CirclePrimitive) -> ChartResult<ShapeId>;

    fn path(&mut self, path: PathPrimitive) -> ChartResult<ShapeId>;

    fn text(&mut self, text: TextPrimitive) -> ChartResult<ShapeId>;

    /// Sets an inspectable attribute on the node backing `id`.
    fn set_node_attribute(&mut self, id: ShapeId, name: &str, value: &str) -> ChartResult<()>;

    fn send_to_back(&mut self, id: ShapeId) -> ChartResult<()>;

    fn bring_to_front(&mut self, id: ShapeId) -> ChartResult<()>;

    /// First glyph run of a text node, when the surface exposes one.
    ///
    /// Surfaces without glyph-level text nodes keep the default `None`.
    fn first_glyph_run_mut(&mut self, _id: ShapeId) -> Option<&mut GlyphRun> {
        None
    }
}

/// Contract implemented by backends that paint a retained `Scene`.
pub trait SceneRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
