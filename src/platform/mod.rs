//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bridges winit (OS-level events) with the logic thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  EventTranslator         │    │  InputSystem     │
//  │   ├─ Converts winit      │    │  ↓               │
//  │   └─ Tracks modifiers    │    │  Axes + Actions  │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  Scenes          │
//  │   ├─ discrete: Vec<>     │    │                  │
//  │   └─ cursor + motion     │    └──────────────────┘
//  │   ↓                      │             ↑
//  │  RedrawRequested (flush) │             │
//  │   ↓                      │             │
//  │  crossbeam channel ──────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Mouse-look reads raw device motion, so the cursor is locked (or
// confined where locking is unsupported) and hidden while the window has
// focus, and released when focus is lost.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod event_translator;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use event_translator::EventTranslator;

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Runs on the main thread (winit requirement on macOS/iOS) and talks to
/// the logic thread only through `event_sender`.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    title: String,
    focused: bool,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    translator: EventTranslator,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, title: String) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title,
            focused: false,
            buffer: InputBuffer::new(),
            event_sender,
            translator: EventTranslator::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits with an error.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop.run_app(&mut self).map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends everything buffered since the last flush.
    ///
    /// A disconnected channel (logic thread gone) drops the events with a
    /// warning; the window stays usable so it can still be closed.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };

        let (discrete_count, continuous_count) = (discrete.len(), continuous.len());
        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );
        }
    }

    /// Locks and hides the cursor, or releases it.
    fn set_cursor_captured(&self, captured: bool) {
        let Some(window) = &self.window else {
            return;
        };

        if captured {
            let grab = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grab {
                warn!(target: "platform", "Cursor grab unavailable: {}", e);
            }
        } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            warn!(target: "platform", "Cursor release failed: {}", e);
        }

        window.set_cursor_visible(!captured);
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(1280, 720));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
                self.focused = true;
                self.set_cursor_captured(true);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.request_exit(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.request_exit(event_loop);
            }

            WindowEvent::Focused(focused) => {
                debug!(target: "platform", "Focus changed: {}", focused);
                self.focused = *focused;
                self.set_cursor_captured(*focused);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            other => {
                if let Some(event) = self.translator.window(other) {
                    self.buffer.push(event);
                }
            }
        }
    }

    /// Raw device motion drives mouse-look (unaffected by cursor lock).
    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.focused {
                let event = self.translator.motion((dx, dy));
                self.buffer.push(event);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
