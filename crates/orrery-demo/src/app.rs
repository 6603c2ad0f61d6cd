use orrery_engine::canvas::Canvas;
use orrery_engine::core::{App, AppControl, FrameCtx};
use orrery_engine::coords::Viewport;
use orrery_engine::paint::Color;
use orrery_engine::render::StrokeRenderer;
use orrery_tower::{Stage, Tick};

/// Drives a [`Stage`] inside the engine runtime: one tick per redraw.
pub struct TowerApp {
    stage: Stage,
    canvas: Canvas,
    renderer: StrokeRenderer,
}

impl TowerApp {
    pub fn new(stage: Stage, background: Color) -> Self {
        Self {
            stage,
            canvas: Canvas::new(Viewport::new(1.0, 1.0), background),
            renderer: StrokeRenderer::new(),
        }
    }
}

impl App for TowerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.viewport();

        // ── Update + record ───────────────────────────────────────────────
        self.canvas.begin_frame(viewport);
        if self.stage.tick(&mut self.canvas, viewport) == Tick::Stopped {
            return AppControl::Exit;
        }

        // ── Render ────────────────────────────────────────────────────────
        let (canvas, renderer) = (&self.canvas, &mut self.renderer);
        ctx.present(|gpu, frame| {
            renderer.render(gpu, frame, viewport, canvas.background(), canvas.draw_list());
        })
    }
}
