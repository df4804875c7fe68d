//=========================================================================
// Scene Manager
//=========================================================================
//
// Registration and lifecycle of the running scenes.
//
// Scenes run in registration order every tick. `start` and `stop` bracket
// the logic thread; `stop` is idempotent so an early exit path and the
// final shutdown can both call it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneKey};
use crate::core::globals::GlobalContext;
use crate::core::input::Action;

//=== Scene Manager =======================================================

pub struct SceneManager<S: SceneKey, A: Action> {
    scenes: Vec<(S, Box<dyn Scene<A>>)>,
    running: bool,
}

impl<S: SceneKey, A: Action> SceneManager<S, A> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self { scenes: Vec::new(), running: false }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene to run from engine start.
    ///
    /// Registering a key again replaces that scene in place.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<A> + 'static,
    {
        match self.scenes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => {
                warn!("Scene {:?} was already registered and has been replaced", key);
                slot.1 = Box::new(scene);
            }
            None => {
                debug!("Registered scene {:?}", key);
                self.scenes.push((key, Box::new(scene)));
            }
        }
    }

    /// Keys of the registered scenes, in update order.
    pub fn active_stack(&self) -> Vec<S> {
        self.scenes.iter().map(|(key, _)| *key).collect()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    //--- Lifecycle --------------------------------------------------------

    /// Calls `on_enter` on every scene, bottom first.
    pub fn start(&mut self, context: &mut GlobalContext<A>) {
        if self.running {
            return;
        }
        for (key, scene) in &mut self.scenes {
            debug!("Starting scene {:?}", key);
            scene.on_enter(context);
        }
        self.running = true;
    }

    pub fn update(&mut self, context: &mut GlobalContext<A>) {
        for (_, scene) in &mut self.scenes {
            scene.update(context);
        }
    }

    /// Calls `on_exit` on every scene, top first.
    pub fn stop(&mut self, context: &mut GlobalContext<A>) {
        if !self.running {
            return;
        }
        for (key, scene) in self.scenes.iter_mut().rev() {
            debug!("Stopping scene {:?}", key);
            scene.on_exit(context);
        }
        self.running = false;
    }
}

impl<S: SceneKey, A: Action> Default for SceneManager<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FrameTime;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        Room,
        Hud,
    }

    impl SceneKey for TestScene {}

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    type Journal = Arc<Mutex<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        journal: Journal,
    }

    impl Scene<TestAction> for Recorder {
        fn on_enter(&mut self, _ctx: &mut GlobalContext<TestAction>) {
            self.journal.lock().unwrap().push(format!("enter {}", self.name));
        }

        fn on_exit(&mut self, _ctx: &mut GlobalContext<TestAction>) {
            self.journal.lock().unwrap().push(format!("exit {}", self.name));
        }

        fn update(&mut self, _ctx: &mut GlobalContext<TestAction>) {
            self.journal.lock().unwrap().push(format!("update {}", self.name));
        }
    }

    //--- Test Helpers -----------------------------------------------------

    fn recorder(name: &'static str, journal: &Journal) -> Recorder {
        Recorder { name, journal: Arc::clone(journal) }
    }

    fn manager(journal: &Journal) -> SceneManager<TestScene, TestAction> {
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::Room, recorder("room", journal));
        manager.register_default(TestScene::Hud, recorder("hud", journal));
        manager
    }

    fn context() -> GlobalContext<TestAction> {
        GlobalContext::new(FrameTime::default())
    }

    fn drain(journal: &Journal) -> Vec<String> {
        std::mem::take(&mut *journal.lock().unwrap())
    }

    //=====================================================================
    // Lifecycle
    //=====================================================================

    #[test]
    fn start_enters_bottom_first_once() {
        let journal = Journal::default();
        let mut manager = manager(&journal);
        let mut ctx = context();

        manager.start(&mut ctx);
        manager.start(&mut ctx);

        assert_eq!(drain(&journal), vec!["enter room", "enter hud"]);
        assert!(manager.is_running());
        assert_eq!(manager.active_stack(), vec![TestScene::Room, TestScene::Hud]);
    }

    #[test]
    fn update_runs_in_registration_order() {
        let journal = Journal::default();
        let mut manager = manager(&journal);
        let mut ctx = context();

        manager.update(&mut ctx);

        assert_eq!(drain(&journal), vec!["update room", "update hud"]);
    }

    #[test]
    fn stop_exits_top_first_and_only_after_start() {
        let journal = Journal::default();
        let mut manager = manager(&journal);
        let mut ctx = context();

        manager.stop(&mut ctx);
        assert!(drain(&journal).is_empty());

        manager.start(&mut ctx);
        drain(&journal);
        manager.stop(&mut ctx);
        manager.stop(&mut ctx);

        assert_eq!(drain(&journal), vec!["exit hud", "exit room"]);
        assert!(!manager.is_running());
    }

    #[test]
    fn reregistering_replaces_in_place() {
        let journal = Journal::default();
        let mut manager = manager(&journal);
        let mut ctx = context();

        manager.register_default(TestScene::Room, recorder("lobby", &journal));
        manager.update(&mut ctx);

        assert_eq!(manager.active_stack(), vec![TestScene::Room, TestScene::Hud]);
        assert_eq!(drain(&journal), vec!["update lobby", "update hud"]);
    }
}
