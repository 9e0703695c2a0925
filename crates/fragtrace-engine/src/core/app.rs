use anyhow::Result;
use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the host binary.
///
/// GPU resources can only exist while a GL context is current, so their
/// lifecycle is bracketed by `on_ready` and `on_exit` rather than the app's
/// own constructor/destructor.
pub trait App {
    /// Called once after the GL context is live, before the first frame.
    ///
    /// An error here aborts the runtime before the render loop starts.
    fn on_ready(&mut self, gl: &glow::Context) -> Result<()>;

    /// Called for window events.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once on loop exit, while the GL context is still current.
    fn on_exit(&mut self, gl: &glow::Context) {
        let _ = gl;
    }
}
