use std::ffi::CString;
use std::num::NonZeroU32;

use anyhow::{Context as _, Result};
use glow::HasContext;
use glutin::config::Config;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested context version as `(major, minor)`.
    ///
    /// `None` lets the driver pick whatever it offers.
    pub context_version: Option<(u8, u8)>,

    /// Request a core (non-compatibility) profile.
    pub core_profile: bool,

    /// Swap interval. `None` keeps the platform default.
    pub vsync: Option<bool>,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            // 4.1 core is the newest version available on every desktop
            // platform the viewer targets, macOS included.
            context_version: Some((4, 1)),
            core_profile: true,
            vsync: None,
        }
    }
}

/// Owns the GL context, the window surface, and the loaded function pointers.
///
/// This type is the low-level rendering context:
/// - creates the context/surface pair from a glutin `Config`
/// - makes the context current and loads GL via `glow`
/// - tracks the drawable size and keeps the surface in sync on resize
pub struct GlDevice {
    /// Loaded GL function pointers.
    gl: glow::Context,

    /// Surface bound to the window.
    surface: Surface<WindowSurface>,

    /// The current context. Stays current for the process lifetime; the loop
    /// is single-threaded and nothing else touches GL.
    context: PossiblyCurrentContext,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl GlDevice {
    /// Creates a GL context bound to a window and makes it current.
    pub fn new(window: &Window, gl_config: &Config, init: &GlInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let raw_window_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let version = init
            .context_version
            .map(|(major, minor)| Version::new(major, minor));
        let mut attrs = ContextAttributesBuilder::new().with_context_api(ContextApi::OpenGl(version));
        if init.core_profile {
            attrs = attrs.with_profile(GlProfile::Core);
        }
        let context_attributes = attrs.build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current = unsafe { gl_display.create_context(gl_config, &context_attributes) }
            .context("failed to create GL context")?;

        let (width, height) = (
            NonZeroU32::new(size.width).context("window width is zero")?,
            NonZeroU32::new(size.height).context("window height is zero")?,
        );
        let surface_attributes =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window_handle, width, height);
        let surface = unsafe { gl_display.create_window_surface(gl_config, &surface_attributes) }
            .context("failed to create GL window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        if let Some(vsync) = init.vsync {
            let interval = if vsync {
                SwapInterval::Wait(NonZeroU32::MIN)
            } else {
                SwapInterval::DontWait
            };
            if let Err(e) = surface.set_swap_interval(&context, interval) {
                log::warn!("could not set swap interval: {e}");
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| {
                let symbol = CString::new(symbol).unwrap();
                gl_display.get_proc_address(&symbol) as *const _
            })
        };

        Ok(Self {
            gl,
            surface,
            context,
            size,
        })
    }

    /// Returns the loaded GL function pointers.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Resizes the surface after a window resize.
    ///
    /// A zero-sized drawable cannot back a surface; in that case only internal
    /// state is updated and the surface keeps its previous extent.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;

        let (Some(width), Some(height)) = (
            NonZeroU32::new(new_size.width),
            NonZeroU32::new(new_size.height),
        ) else {
            return;
        };

        self.surface.resize(&self.context, width, height);
    }

    /// Prepares a frame: matches the rasterizer viewport to the drawable size.
    pub fn begin_frame(&self) {
        unsafe {
            self.gl
                .viewport(0, 0, self.size.width as i32, self.size.height as i32);
        }
    }

    /// Presents the rendered frame.
    pub fn present(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")?;
        Ok(())
    }
}
