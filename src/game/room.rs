//=========================================================================
// Room Scene
//=========================================================================
//
// Runs every gameplay component against one scene graph.
//
// Per tick:
// ```text
//   (a) inspect display active?  → display gets mouse + exit key,
//                                  player gets neutral input
//   (b) player controller update
//   (c) body / camera nodes follow the controller
//   (d) pusher over this tick's controller hits
//   (e) crosshair
//   (f) interaction prompt (skipped while inspecting); interacting with
//       a node that owns a display starts it and hides the prompt
//   (g) pushable bodies integrate
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use glam::Vec3;
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::crosshair::Crosshair;
use super::display::InspectDisplay;
use super::interaction::InteractionPrompt;
use super::player::{PlayerController, PlayerFrame, PlayerInput};
use super::pusher::ObjectPusher;
use crate::config::GameConfig;
use crate::core::input::{Action, AxisSettings, InputSource, InputSystem, KeyCode};
use crate::core::{GlobalContext, Scene, SceneKey};
use crate::world::{Collider, KinematicMotor, NodeId, RigidBody, SceneGraph, Transform};

//=== Keys & Actions ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKey {
    Main,
}

impl SceneKey for RoomKey {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomAction {
    Jump,
}

impl Action for RoomAction {}

/// Interact with the prompted object; also leaves an inspect display.
pub const INTERACT_KEY: KeyCode = KeyCode::KeyE;

/// Jump on Space (held modifiers still jump) plus axis tuning.
pub fn install_bindings(input: &mut InputSystem<RoomAction>, axes: AxisSettings) {
    input.bind_key(KeyCode::Space, RoomAction::Jump);
    input.set_axis_settings(axes);
}

//=== RoomInput ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoomInput {
    pub player: PlayerInput,
    pub interact: bool,
}

impl RoomInput {
    pub fn sample<I>(input: &I) -> Self
    where
        I: InputSource<RoomAction> + ?Sized,
    {
        Self {
            player: PlayerInput::sample(input, RoomAction::Jump),
            interact: input.is_key_pressed(INTERACT_KEY),
        }
    }
}

//=== TickReport ==========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub player: PlayerFrame,
    pub pushed: Vec<NodeId>,
    pub interacted: Option<NodeId>,
    pub inspecting: bool,
}

//=== RoomScene ===========================================================

const PLAYER_RADIUS: f32 = 0.5;
const PLAYER_HEIGHT: f32 = 2.0;
const EYE_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.0);

pub struct RoomScene {
    graph: SceneGraph,
    player: PlayerController<KinematicMotor>,
    body: NodeId,
    camera: NodeId,
    pusher: ObjectPusher,
    crosshair: Crosshair,
    prompt: InteractionPrompt,
    displays: HashMap<NodeId, InspectDisplay>,
    active_display: Option<NodeId>,
    gravity: Vec3,
}

impl RoomScene {
    //--- Construction -----------------------------------------------------

    /// Adds the player body and camera to `graph`, standing at `spawn`.
    pub fn new(config: &GameConfig, mut graph: SceneGraph, spawn: Vec3) -> Self {
        let body = graph.spawn("player", Transform::from_translation(spawn));
        let camera = graph.spawn("camera", Transform::from_translation(EYE_OFFSET));
        if let Err(e) = graph.set_parent(camera, Some(body), false) {
            warn!(target: "game::room", "Camera rig setup failed: {}", e);
        }

        let motor = KinematicMotor::new(spawn, PLAYER_RADIUS, PLAYER_HEIGHT).with_body(body);

        Self {
            graph,
            player: PlayerController::new(config.player, motor, EYE_OFFSET),
            body,
            camera,
            pusher: ObjectPusher::new(config.push),
            crosshair: Crosshair::default(),
            prompt: InteractionPrompt::new(config.interaction.clone()),
            displays: HashMap::new(),
            active_display: None,
            gravity: Vec3::new(0.0, config.player.locomotion.gravity, 0.0),
        }
    }

    /// Interacting with `interactable` opens `display`.
    pub fn register_display(&mut self, interactable: NodeId, display: InspectDisplay) {
        self.displays.insert(interactable, display);
    }

    /// A walled room with a pushable crate, an inspectable vase on a
    /// pedestal, a plain interactable lamp and a crosshair.
    pub fn demo(config: &GameConfig) -> Self {
        let mut graph = SceneGraph::new();
        let tag = config.interaction.tag.clone();

        for (name, at, half) in [
            ("wall north", Vec3::new(0.0, 1.5, -6.0), Vec3::new(6.0, 1.5, 0.25)),
            ("wall south", Vec3::new(0.0, 1.5, 6.0), Vec3::new(6.0, 1.5, 0.25)),
            ("wall east", Vec3::new(6.0, 1.5, 0.0), Vec3::new(0.25, 1.5, 6.0)),
            ("wall west", Vec3::new(-6.0, 1.5, 0.0), Vec3::new(0.25, 1.5, 6.0)),
        ] {
            let id = graph.spawn(name, Transform::from_translation(at));
            set_collider(&mut graph, id, Collider::cuboid(half));
        }

        let crate_id = graph.spawn("crate", Transform::from_xyz(2.0, 0.5, -2.0));
        set_collider(&mut graph, crate_id, Collider::cuboid(Vec3::splat(0.5)));
        if let Some(node) = graph.get_mut(crate_id) {
            node.body = Some(RigidBody::default());
        }

        let pedestal = graph.spawn("pedestal", Transform::from_xyz(-3.0, 0.5, -3.0));
        set_collider(&mut graph, pedestal, Collider::cuboid(Vec3::new(0.4, 0.5, 0.4)));

        let vase = graph.spawn("vase", Transform::from_xyz(-3.0, 1.25, -3.0));
        set_collider(&mut graph, vase, Collider::sphere(0.25));
        set_tag(&mut graph, vase, &tag);

        let vase_model = graph.spawn("vase model", Transform::from_xyz(0.0, 0.75, 0.0));
        let display_camera = graph.spawn("display camera", Transform::from_xyz(-3.0, 1.25, -1.5));
        let overlay = graph.spawn("blur overlay", Transform::IDENTITY);
        if let Err(e) = graph.set_parent(vase_model, Some(pedestal), false) {
            warn!(target: "game::room", "Vase model setup failed: {}", e);
        }
        for id in [vase_model, display_camera, overlay] {
            if let Err(e) = graph.set_active(id, false) {
                warn!(target: "game::room", "Hiding '{}' failed: {}", graph.name(id), e);
            }
        }

        let lamp = graph.spawn("lamp", Transform::from_xyz(3.0, 1.0, 3.0));
        set_collider(&mut graph, lamp, Collider::cuboid(Vec3::new(0.2, 1.0, 0.2)));
        set_tag(&mut graph, lamp, &tag);

        graph.spawn(Crosshair::NODE_NAME, Transform::IDENTITY);

        let mut room = Self::new(config, graph, Vec3::new(0.0, 1.0, 2.0));
        room.register_display(vase, InspectDisplay::new(config.display, vase_model, display_camera, overlay));
        room
    }

    //--- Accessors --------------------------------------------------------

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn player(&self) -> &PlayerController<KinematicMotor> {
        &self.player
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn camera(&self) -> NodeId {
        self.camera
    }

    pub fn prompt(&self) -> &InteractionPrompt {
        &self.prompt
    }

    pub fn crosshair(&self) -> &Crosshair {
        &self.crosshair
    }

    /// Interactable whose display is currently open.
    pub fn active_display(&self) -> Option<NodeId> {
        self.active_display
    }

    //--- Tick -------------------------------------------------------------

    pub fn tick(&mut self, input: &RoomInput, dt: f32) -> TickReport {
        let mut report = TickReport::default();

        // (a)
        report.inspecting = self.update_display(input, dt);
        let player_input = if report.inspecting { PlayerInput::default() } else { input.player };

        // (b) + (c)
        report.player = self.player.update(&self.graph, &player_input, dt);
        self.sync_rig();

        // (d) + (e)
        let position = self.player.position();
        report.pushed = self.pusher.on_hits(&mut self.graph, position, &report.player.hits);
        self.crosshair.update(&mut self.graph);

        // (f)
        if !report.inspecting {
            report.interacted = self.update_prompt(position, input.interact);
        }

        // (g)
        self.graph.step_bodies(dt, self.gravity);
        report
    }

    /// Drives the open display; true if one was open at the start of the tick.
    fn update_display(&mut self, input: &RoomInput, dt: f32) -> bool {
        let Some(key) = self.active_display else {
            return false;
        };
        let Some(display) = self.displays.get_mut(&key) else {
            self.active_display = None;
            return false;
        };

        let (mouse_x, mouse_y) = (input.player.mouse_x, input.player.mouse_y);
        if let Err(e) = display.update(&mut self.graph, mouse_x, mouse_y, input.interact, dt) {
            warn!(target: "game::room", "Display update failed: {}", e);
        }
        if !display.is_displaying() {
            self.active_display = None;
        }
        true
    }

    fn sync_rig(&mut self) {
        let body = Transform::from_translation(self.player.position()).with_rotation(self.player.body_rotation());
        let camera =
            Transform::from_translation(self.player.camera_position()).with_rotation(self.player.camera_rotation());

        if let Some(node) = self.graph.get_mut(self.body) {
            node.local = body;
        }
        if let Some(node) = self.graph.get_mut(self.camera) {
            node.local = camera;
        }
    }

    fn update_prompt(&mut self, position: Vec3, interact: bool) -> Option<NodeId> {
        let camera = match self.graph.world_transform(self.camera) {
            Ok(camera) => camera,
            Err(e) => {
                warn!(target: "game::room", "Camera missing: {}", e);
                return None;
            }
        };

        let node = self.prompt.update(&mut self.graph, position, &camera, interact)?;
        let Some(display) = self.displays.get_mut(&node) else {
            return Some(node);
        };

        match display.trigger(&mut self.graph) {
            Ok(true) => {
                self.active_display = Some(node);
                if let Err(e) = self.prompt.hide(&mut self.graph) {
                    warn!(target: "game::room", "Prompt hide failed: {}", e);
                }
            }
            Ok(false) => {}
            Err(e) => warn!(target: "game::room", "Display trigger failed: {}", e),
        }
        Some(node)
    }
}

//=== Scene ===============================================================

impl Scene<RoomAction> for RoomScene {
    fn on_enter(&mut self, _context: &mut GlobalContext<RoomAction>) {
        self.crosshair.start(&self.graph);
        info!(target: "game::room", "Entered room with {} nodes", self.graph.len());
    }

    /// Closes an open inspect display so the graph is left in room state.
    fn on_exit(&mut self, _context: &mut GlobalContext<RoomAction>) {
        let Some(key) = self.active_display.take() else {
            return;
        };
        if let Some(display) = self.displays.get_mut(&key) {
            if let Err(e) = display.exit(&mut self.graph) {
                warn!(target: "game::room", "Display exit failed: {}", e);
            }
        }
        info!(target: "game::room", "Left room while inspecting {:?}", key);
    }

    fn update(&mut self, context: &mut GlobalContext<RoomAction>) {
        let input = RoomInput::sample(&*context);
        self.tick(&input, context.delta_seconds());
    }
}

//=== Helpers =============================================================

fn set_collider(graph: &mut SceneGraph, id: NodeId, collider: Collider) {
    if let Some(node) = graph.get_mut(id) {
        node.collider = Some(collider);
    }
}

fn set_tag(graph: &mut SceneGraph, id: NodeId, tag: &str) {
    if let Some(node) = graph.get_mut(id) {
        node.tag = Some(tag.to_owned());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
