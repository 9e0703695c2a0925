use anyhow::{Context as _, Result, anyhow};
use glutin::config::ConfigTemplateBuilder;
use glutin_winit::DisplayBuilder;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::device::{GlDevice, GlInit};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "fragtrace".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop to completion.
    ///
    /// Returns an error if platform init fails or the app fails in
    /// `on_ready`; a user-initiated window close is a normal `Ok(())`.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Per-window state.
///
/// Field order matters: `device` must drop before `window` so GL teardown
/// precedes windowing shutdown.
struct WindowEntry {
    clock: FrameClock,
    device: GlDevice,
    window: Window,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            entry: None,
            failure: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let template = ConfigTemplateBuilder::new();
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(attrs));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |mut configs| {
                configs.next().expect("no GL configs offered")
            })
            .map_err(|e| anyhow!("failed to create window and GL display: {e}"))?;

        let window = window.context("display builder returned no window")?;
        let device = GlDevice::new(&window, &gl_config, &self.gl_init)?;

        self.app.on_ready(device.gl())?;

        self.entry = Some(WindowEntry {
            clock: FrameClock::new(),
            device,
            window,
        });
        Ok(())
    }

    /// Drives one frame: tick the clock, match the viewport, hand the app a
    /// frame context, present.
    fn redraw(&mut self) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let time = entry.clock.tick();
        entry.device.begin_frame();

        let control = {
            let mut ctx = FrameCtx {
                window: &entry.window,
                gl: entry.device.gl(),
                size: entry.device.size(),
                time,
            };
            self.app.on_frame(&mut ctx)
        };

        if control == AppControl::Exit {
            self.exit_requested = true;
        }

        if let Err(e) = entry.device.present() {
            log::error!("failed to present frame: {e:#}");
            self.exit_requested = true;
        }
    }

    /// Runs app teardown while the GL context is still current, then drops
    /// the context/surface pair ahead of the window.
    fn teardown(&mut self) {
        if let Some(entry) = self.entry.take() {
            self.app.on_exit(entry.device.gl());
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.failure = Some(e);
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous redraw: one frame per loop iteration, no pacing here.
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.entry.as_ref().is_none_or(|e| e.window.id() != window_id) {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.exit_requested = true;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.exit_requested = true;
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.device.resize(new_size);
                    entry.window.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.window.inner_size();
                    entry.device.resize(new_size);
                    entry.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }

        if self.exit_requested {
            self.teardown();
            event_loop.exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RuntimeConfig::default();
        assert_eq!(config.initial_size, LogicalSize::new(800.0, 600.0));
        assert_eq!(config.title, "fragtrace");
    }
}
