//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Central coordinator for the logic (non-platform) thread.
//
// Responsibilities:
// - Own the global systems (input, scenes) and the shared context
// - Receive platform events via the crossbeam channel
// - Tick at a fixed rate (TPS) with a fixed simulated step
//
// Communication with the platform occurs only through message passing,
// so nothing on this thread touches the window.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod globals;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;
pub mod time;

//=== Public API ==========================================================

pub use globals::{GlobalContext, GlobalSystems};
pub use input::{Action, Axis, InputSource, KeyCode, Modifiers, MouseButton};
pub use scene::{Scene, SceneKey};
pub use time::FrameTime;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic-thread state until the thread is spawned.
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
    context: GlobalContext<A>,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(tps: f64) -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(FrameTime::from_tps(tps)),
        }
    }

    /// Runs user configuration against the systems before spawning.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        init_fn(&mut self.systems);
    }

    #[cfg(test)]
    pub(crate) fn context(&self) -> &GlobalContext<A> {
        &self.context
    }

    //--- Tick -------------------------------------------------------------

    /// Collects this tick's events and updates all systems once.
    pub(crate) fn tick(&mut self, collector: &mut EventCollector) -> TickControl {
        if collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        self.context.frame_events = collector.take_batches();
        self.systems.update(&mut self.context);
        TickControl::Continue
    }

    //--- spawn_core_thread() ----------------------------------------------

    /// Spawns the logic thread ticking at `tps`.
    ///
    /// Each tick:
    ///  1. Collects platform events (exits on close/disconnect)
    ///  2. Updates input and scenes
    ///  3. Sleeps out the remainder of the tick
    ///
    /// Scenes are entered before the first tick and exited after the last.
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            self.systems.scene_manager.start(&mut self.context);

            loop {
                let frame_start = Instant::now();

                if self.tick(&mut collector) == TickControl::Exit {
                    info!("Core thread exiting after {} ticks", self.context.time.tick());
                    self.systems.scene_manager.stop(&mut self.context);
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                } else {
                    debug!("Tick overran budget: {:?}", elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
