use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    /// Keep the window alive and schedule another frame.
    Continue,
    /// Stop scheduling frames and leave the event loop.
    Exit,
}

/// Application contract implemented by the layer that owns the scene.
pub trait App {
    /// Called once per display refresh.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
