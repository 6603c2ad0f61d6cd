use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// `'a` is the callback borrow, `'w` the window borrow carried by `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Logical window size.
    pub fn viewport(&self) -> Viewport {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        Viewport::new(size.width as f32, size.height as f32)
    }

    /// Acquires a frame, lets `draw` record into it, then presents it.
    ///
    /// Frames that cannot be acquired are skipped; only a fatal surface error
    /// returns [`AppControl::Exit`].
    pub fn present<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&Gpu<'w>, &mut GpuFrame),
    {
        let mut frame = match self.gpu.acquire() {
            Ok(frame) => frame,
            Err(SurfaceErrorAction::Fatal) => {
                log::error!("fatal surface error; exiting");
                return AppControl::Exit;
            }
            Err(_) => return AppControl::Continue,
        };

        draw(&*self.gpu, &mut frame);

        self.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}
