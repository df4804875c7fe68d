//=========================================================================
// Engine
//=========================================================================
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(): bindings, scenes
//         ├─ with_channel_capacity() └─ run(): spawns logic thread,
//         └─ with_window_title()              runs platform,
//                                             blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::{Action, CoreSystemsOrchestrator, GlobalSystems, SceneKey};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window title**: "Tiny Rooms"
///
/// # Examples
///
/// ```no_run
/// use tiny_rooms::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum RoomKey { Main }
/// impl SceneKey for RoomKey {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum RoomAction { Jump }
/// impl Action for RoomAction {}
///
/// EngineBuilder::<RoomKey, RoomAction>::new()
///     .with_tps(120.0)
///     .with_window_title("Gallery")
///     .build()
///     .init(|systems| {
///         systems.input.bind_key(KeyCode::Space, RoomAction::Jump);
///     })
///     .run();
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    window_title: String,
    _phantom: std::marker::PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window_title: String::from("Tiny Rooms"),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the logic tick rate. Every tick advances simulated time by
    /// exactly `1 / tps` seconds.
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not a positive finite number.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps.is_finite() && tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<S, A> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.tps),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window_title: self.window_title,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime: a winit platform on the calling thread plus one logic thread.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, SceneManager → scenes
///   │
///   └─► Platform (Event Loop)
///         └─► Window, cursor lock, input batching
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    tps: f64,
    channel_capacity: usize,
    window_title: String,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Configures bindings and scenes before the engine runs.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded platform → core channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Joins the logic thread once the platform exits
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        let platform = Platform::new(tx, self.window_title);
        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
