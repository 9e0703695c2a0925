use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
///
/// `size` is the drawable size in physical pixels, which may differ from the
/// logical window size under display scaling.
pub struct FrameCtx<'a> {
    pub window: &'a Window,
    pub gl:     &'a glow::Context,
    pub size:   PhysicalSize<u32>,
    pub time:   FrameTime,
}
