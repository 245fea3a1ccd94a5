use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, DrawingSurface, PathPrimitive, ShapeId, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullSurfaceStats {
    pub circles: usize,
    pub paths: usize,
    pub filled_paths: usize,
    pub texts: usize,
    pub node_attributes: usize,
    pub sent_to_back: usize,
    pub brought_to_front: usize,
}

/// Drawing surface that only counts calls, used by tests and headless runs.
///
/// It still validates every primitive so tests can catch invalid geometry
/// before a real backend is involved. Text nodes expose no glyph runs.
#[derive(Debug, Default)]
pub struct NullSurface {
    stats: NullSurfaceStats,
    next_id: u64,
}

impl NullSurface {
    #[must_use]
    pub fn stats(&self) -> NullSurfaceStats {
        self.stats
    }

    fn issue_id(&mut self) -> ShapeId {
        let id = ShapeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_id(&self, id: ShapeId) -> ChartResult<()> {
        if id.raw() >= self.next_id {
            return Err(ChartError::Surface(format!(
                "unknown shape id {}",
                id.raw()
            )));
        }
        Ok(())
    }
}

impl DrawingSurface for NullSurface {
    fn open(_container: &str, width: f64, height: f64) -> ChartResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        Ok(Self::default())
    }

    fn circle(&mut self, circle: CirclePrimitive) -> ChartResult<ShapeId> {
        circle.validate()?;
        self.stats.circles += 1;
        Ok(self.issue_id())
    }

    fn path(&mut self, path: PathPrimitive) -> ChartResult<ShapeId> {
        path.validate()?;
        self.stats.paths += 1;
        if path.fill.is_some() {
            self.stats.filled_paths += 1;
        }
        Ok(self.issue_id())
    }

    fn text(&mut self, text: TextPrimitive) -> ChartResult<ShapeId> {
        text.validate()?;
        self.stats.texts += 1;
        Ok(self.issue_id())
    }

    fn set_node_attribute(&mut self, id: ShapeId, _name: &str, _value: &str) -> ChartResult<()> {
        self.check_id(id)?;
        self.stats.node_attributes += 1;
        Ok(())
    }

    fn send_to_back(&mut self, id: ShapeId) -> ChartResult<()> {
        self.check_id(id)?;
        self.stats.sent_to_back += 1;
        Ok(())
    }

    fn bring_to_front(&mut self, id: ShapeId) -> ChartResult<()> {
        self.check_id(id)?;
        self.stats.brought_to_front += 1;
        Ok(())
    }
}
