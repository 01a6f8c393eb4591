use crate::error::ChartResult;
use crate::render::{LayoutResult, Primitive, Renderer};

/// No-op renderer used by tests and headless layout usage.
///
/// It still validates every primitive so tests catch invalid geometry before
/// a real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_primitive_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &LayoutResult) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_primitive_count = frame.primitives.len();
        self.last_label_count = frame
            .primitives
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::Label(_)))
            .count();
        Ok(())
    }
}
