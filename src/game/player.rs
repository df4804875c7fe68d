//=========================================================================
// Player Controller
//=========================================================================
//
// First-person body + camera rig driven once per tick.
//
// Per-tick order:
// ```text
//   1. movement   ground check, stick velocity, landing recoil start,
//                 speed tier, planar move
//   2. look       yaw (body) and clamped pitch (camera)
//   3. jump       launch when the Jump action fires on the ground
//   4. gravity    two-branch integration, vertical move
//   5. bobbing    bob while moving on the ground, otherwise settle
//   6. FOV        ease toward sprint / default FOV
//   7. recoil     overrides the camera position while running
// ```
//
// The ground flag is read once at the start of the tick; jump and
// bobbing use that value, not the result of this tick's moves.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::trace;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::camera_fx::{BobSettings, FovEaser, FovSettings, HeadBob, LandingRecoil, RecoilPhase, RecoilSettings};
use super::locomotion::{jump_velocity, planar_motion, JumpState, LocomotionSettings, SpeedTier, VerticalMotion};
use super::look::{LookSettings, MouseLook};
use crate::core::input::{Action, Axis, InputSource, KeyCode};
use crate::world::{CharacterMotor, ControllerHit, SceneGraph};

//=== PlayerSettings ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub locomotion: LocomotionSettings,
    pub look: LookSettings,
    pub bob: BobSettings,
    pub fov: FovSettings,
    pub recoil: RecoilSettings,
}

//=== PlayerInput =========================================================

/// One tick of player intent, sampled from an [`InputSource`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerInput {
    pub move_x: f32,
    pub move_z: f32,
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub sprint: bool,
    pub crouch: bool,
    pub jump: bool,
}

impl PlayerInput {
    pub const SPRINT_KEY: KeyCode = KeyCode::ShiftLeft;
    pub const CROUCH_KEY: KeyCode = KeyCode::ControlLeft;

    pub fn sample<A, I>(input: &I, jump_action: A) -> Self
    where
        A: Action,
        I: InputSource<A> + ?Sized,
    {
        Self {
            move_x: input.axis(Axis::Horizontal),
            move_z: input.axis(Axis::Vertical),
            mouse_x: input.axis(Axis::MouseX),
            mouse_y: input.axis(Axis::MouseY),
            sprint: input.is_key_down(Self::SPRINT_KEY),
            crouch: input.is_key_down(Self::CROUCH_KEY),
            jump: input.action_triggered(jump_action),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.move_x != 0.0 || self.move_z != 0.0
    }
}

//=== PlayerFrame =========================================================

/// What happened during one controller update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFrame {
    pub speed_tier: SpeedTier,
    /// Ground contact as read at the start of the tick.
    pub grounded: bool,
    pub jumped: bool,
    /// A landing recoil started this tick.
    pub landed: bool,
    pub hits: Vec<ControllerHit>,
}

//=== PlayerController ====================================================

#[derive(Debug, Clone)]
pub struct PlayerController<M: CharacterMotor> {
    settings: PlayerSettings,
    motor: M,
    look: MouseLook,
    vertical: VerticalMotion,
    jump: JumpState,
    speed_tier: SpeedTier,
    bob: HeadBob,
    fov: FovEaser,
    recoil: LandingRecoil,
    camera_rest: Vec3,
    camera_position: Vec3,
}

impl<M: CharacterMotor> PlayerController<M> {
    /// `camera_rest` is the camera's resting position relative to the body.
    pub fn new(settings: PlayerSettings, motor: M, camera_rest: Vec3) -> Self {
        Self {
            settings,
            motor,
            look: MouseLook::default(),
            vertical: VerticalMotion::default(),
            jump: JumpState::default(),
            speed_tier: SpeedTier::default(),
            bob: HeadBob::default(),
            fov: FovEaser::new(settings.fov.default_fov),
            recoil: LandingRecoil::default(),
            camera_rest,
            camera_position: camera_rest,
        }
    }

    //--- Update -----------------------------------------------------------

    pub fn update(&mut self, world: &SceneGraph, input: &PlayerInput, dt: f32) -> PlayerFrame {
        let mut frame = PlayerFrame::default();
        let grounded = self.handle_movement(world, input, dt, &mut frame);
        frame.grounded = grounded;

        self.look.apply(input.mouse_x, input.mouse_y, dt, &self.settings.look);
        self.handle_jump(grounded, input, &mut frame);
        self.apply_gravity(world, dt, &mut frame);
        self.handle_bobbing(grounded, input, dt);

        let sprinting = self.speed_tier == SpeedTier::Sprint;
        self.fov.ease(sprinting, dt, &self.settings.fov);

        if let Some(position) = self.recoil.tick(self.camera_position, self.camera_rest, dt, &self.settings.recoil) {
            self.camera_position = position;
        }

        frame.speed_tier = self.speed_tier;
        frame
    }

    fn handle_movement(&mut self, world: &SceneGraph, input: &PlayerInput, dt: f32, frame: &mut PlayerFrame) -> bool {
        let grounded = self.motor.is_grounded();
        let locomotion = &self.settings.locomotion;

        if self.vertical.stick_to_ground(grounded, locomotion)
            && self.jump == JumpState::Jumped
            && self.recoil.trigger()
        {
            trace!(target: "game::player", "Landed, starting recoil");
            self.jump = JumpState::Grounded;
            frame.landed = true;
        }

        self.speed_tier = SpeedTier::select(input.sprint, input.crouch);
        let speed = self.speed_tier.speed(locomotion);
        let motion = planar_motion(self.look.yaw(), input.move_x, input.move_z) * speed * dt;

        let outcome = self.motor.move_by(world, motion);
        frame.hits.extend(outcome.hits);
        grounded
    }

    fn handle_jump(&mut self, grounded: bool, input: &PlayerInput, frame: &mut PlayerFrame) {
        if !(input.jump && grounded) {
            return;
        }
        let locomotion = &self.settings.locomotion;
        self.vertical.launch(jump_velocity(locomotion.jump_force, locomotion.gravity));
        self.jump = JumpState::Jumped;
        frame.jumped = true;
    }

    fn apply_gravity(&mut self, world: &SceneGraph, dt: f32, frame: &mut PlayerFrame) {
        let dy = self.vertical.integrate(&self.settings.locomotion, dt);
        let outcome = self.motor.move_by(world, Vec3::new(0.0, dy, 0.0));
        frame.hits.extend(outcome.hits);
    }

    fn handle_bobbing(&mut self, grounded: bool, input: &PlayerInput, dt: f32) {
        let bob = &self.settings.bob;
        if input.is_moving() && grounded {
            let sprinting = self.speed_tier == SpeedTier::Sprint;
            self.camera_position = self.bob.bob(self.camera_rest, dt, sprinting, bob);
        } else if !self.recoil.is_active() {
            self.camera_position = self.bob.settle(self.camera_position, self.camera_rest, dt, bob);
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn motor_mut(&mut self) -> &mut M {
        &mut self.motor
    }

    pub fn position(&self) -> Vec3 {
        self.motor.position()
    }

    pub fn yaw(&self) -> f32 {
        self.look.yaw()
    }

    pub fn pitch(&self) -> f32 {
        self.look.pitch()
    }

    pub fn body_rotation(&self) -> Quat {
        self.look.body_rotation()
    }

    /// Camera rotation relative to the body.
    pub fn camera_rotation(&self) -> Quat {
        self.look.camera_rotation()
    }

    /// Camera position relative to the body, effects included.
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    pub fn camera_rest(&self) -> Vec3 {
        self.camera_rest
    }

    pub fn fov(&self) -> f32 {
        self.fov.fov()
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical.velocity()
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump
    }

    pub fn recoil_phase(&self) -> RecoilPhase {
        self.recoil.phase()
    }

    pub fn speed_tier(&self) -> SpeedTier {
        self.speed_tier
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::KinematicMotor;
    use std::collections::HashSet;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-4;

    fn player_at(y: f32) -> PlayerController<KinematicMotor> {
        let motor = KinematicMotor::new(Vec3::new(0.0, y, 0.0), 0.5, 2.0);
        PlayerController::new(PlayerSettings::default(), motor, Vec3::new(0.0, 0.6, 0.0))
    }

    /// Player standing on the floor with ground contact established.
    fn standing_player(world: &SceneGraph) -> PlayerController<KinematicMotor> {
        let mut player = player_at(1.0);
        player.update(world, &PlayerInput::default(), DT);
        assert!(player.motor().is_grounded());
        player
    }

    fn forward() -> PlayerInput {
        PlayerInput { move_z: 1.0, ..PlayerInput::default() }
    }

    //--- Movement ---------------------------------------------------------

    #[test]
    fn walks_forward_at_walk_speed() {
        let world = SceneGraph::new();
        let mut player = standing_player(&world);

        for _ in 0..60 {
            player.update(&world, &forward(), DT);
        }

        assert!((player.position().z + 6.0).abs() < 0.01);
        assert!((player.position().y - 1.0).abs() < EPS);
    }

    #[test]
    fn speed_tiers_select_speed() {
        let world = SceneGraph::new();
        let mut player = standing_player(&world);

        let sprint = PlayerInput { sprint: true, crouch: true, ..forward() };
        let frame = player.update(&world, &sprint, 1.0);
        assert_eq!(frame.speed_tier, SpeedTier::Sprint);
        assert!((player.position().z + 9.0).abs() < EPS);

        let crouch = PlayerInput { crouch: true, ..forward() };
        player.update(&world, &crouch, 1.0);
        assert_eq!(player.speed_tier(), SpeedTier::Crouch);
        assert!((player.position().z + 11.5).abs() < EPS);
    }

    #[test]
    fn movement_follows_yaw() {
        let world = SceneGraph::new();
        let mut player = standing_player(&world);

        // 0.9 * 100 * 1.0 = 90° to the right, applied after this tick's move
        player.update(&world, &PlayerInput { mouse_x: 0.9, ..PlayerInput::default() }, 1.0);
        assert!((player.yaw() - 90.0).abs() < EPS);

        let start = player.position();
        player.update(&world, &forward(), 0.5);
        let moved = player.position() - start;
        assert!((moved.x - 3.0).abs() < EPS);
        assert!(moved.z.abs() < EPS);
    }

    //--- Jumping ----------------------------------------------------------

    #[test]
    fn jump_launches_with_closed_form_velocity() {
        let world = SceneGraph::new();
        let mut player = standing_player(&world);

        let frame = player.update(&world, &PlayerInput { jump: true, ..PlayerInput::default() }, DT);

        let v0 = (2.0f32 * -2.0 * -9.81).sqrt();
        assert!(frame.jumped);
        assert_eq!(player.jump_state(), JumpState::Jumped);
        assert!((player.vertical_velocity() - (v0 - 9.81 * 2.0 * DT)).abs() < EPS);
        assert!(player.position().y > 1.0);
    }

    #[test]
    fn no_jump_while_airborne() {
        let world = SceneGraph::new();
        let mut player = player_at(5.0);

        let frame = player.update(&world, &PlayerInput { jump: true, ..PlayerInput::default() }, DT);

        assert!(!frame.jumped);
        assert!(player.vertical_velocity() < 0.0);
    }

    #[test]
    fn landing_after_jump_starts_recoil_once() {
        let world = SceneGraph::new();
        let mut player = standing_player(&world);
        player.update(&world, &PlayerInput { jump: true, ..PlayerInput::default() }, DT);

        let mut landings = 0;
        let mut saw_dip = false;
        for _ in 0..240 {
            let frame = player.update(&world, &PlayerInput::default(), DT);
            landings += frame.landed as u32;
            saw_dip |= player.camera_position().y < player.camera_rest().y - 0.01;
        }

        assert_eq!(landings, 1);
        assert!(saw_dip);
        assert_eq!(player.jump_state(), JumpState::Grounded);
        assert_eq!(player.recoil_phase(), RecoilPhase::Idle);
    }

    #[test]
    fn falling_without_jump_has_no_recoil() {
        let world = SceneGraph::new();
        let mut player = player_at(4.0);

        for _ in 0..240 {
            let frame = player.update(&world, &PlayerInput::default(), DT);
            assert!(!frame.landed);
        }
        assert!(player.motor().is_grounded());
        assert!((player.vertical_velocity() - (-2.0 - 9.81 * 2.0 * DT)).abs() < EPS);
    }

    #[test]
    fn landing_waits_for_running_recoil_to_finish() {
        let world = SceneGraph::new();
        let mut settings = PlayerSettings::default();
        settings.locomotion.jump_force = 0.05;
        settings.recoil.phase_duration = 1.0;
        let motor = KinematicMotor::new(Vec3::new(0.0, 1.0, 0.0), 0.5, 2.0);
        let mut player = PlayerController::new(settings, motor, Vec3::new(0.0, 0.6, 0.0));
        let hop = PlayerInput { jump: true, ..PlayerInput::default() };
        player.update(&world, &PlayerInput::default(), DT);

        // First hop lands on an idle recoil and starts it.
        assert!(player.update(&world, &hop, DT).jumped);
        let first = (0..60).any(|_| player.update(&world, &PlayerInput::default(), DT).landed);
        assert!(first);
        assert_ne!(player.recoil_phase(), RecoilPhase::Idle);

        // Second hop touches down long before that recoil ends.
        assert!(player.update(&world, &hop, DT).jumped);
        let mut held_on_ground = 0;
        let mut landed = false;
        for _ in 0..400 {
            let before = player.recoil_phase();
            let frame = player.update(&world, &PlayerInput::default(), DT);
            if frame.landed {
                assert_eq!(before, RecoilPhase::Idle);
                landed = true;
                break;
            }
            assert_eq!(player.jump_state(), JumpState::Jumped);
            held_on_ground += frame.grounded as u32;
        }

        assert!(landed);
        assert!(held_on_ground > 30);
        assert_eq!(player.jump_state(), JumpState::Grounded);
    }

    #[test]
    fn moving_landing_hands_camera_to_recoil() {
        let world = SceneGraph::new();
        let mut player = standing_player(&world);
        let recoil = player.settings().recoil;
        let rest = player.camera_rest();
        player.update(&world, &PlayerInput { jump: true, ..forward() }, DT);

        for _ in 0..240 {
            let frame = player.update(&world, &forward(), DT);
            if !frame.landed {
                continue;
            }
            assert!(player.camera_position().abs_diff_eq(rest, EPS));

            player.update(&world, &forward(), DT);
            let dipped = rest - Vec3::new(0.0, recoil.depth * DT / recoil.phase_duration, 0.0);
            assert!(player.camera_position().abs_diff_eq(dipped, EPS));
            return;
        }
        panic!("player never landed");
    }

    //--- Camera -----------------------------------------------------------

    #[test]
    fn bobbing_while_walking_then_settles() {
        let world = SceneGraph::new();
        let mut player = standing_player(&world);
        let rest = player.camera_rest();

        let mut offsets = HashSet::new();
        for _ in 0..30 {
            player.update(&world, &forward(), DT);
            offsets.insert((player.camera_position() - rest).x.to_bits());
        }
        assert!(offsets.len() > 1);
        assert!(player.camera_position().distance(rest) > 0.0);

        let mut last = player.camera_position().distance(rest);
        for _ in 0..120 {
            player.update(&world, &PlayerInput::default(), DT);
            let d = player.camera_position().distance(rest);
            assert!(d <= last + 1e-6);
            last = d;
        }
        assert!(last < 0.01);
    }

    #[test]
    fn sprint_widens_fov() {
        let world = SceneGraph::new();
        let mut player = standing_player(&world);
        assert_eq!(player.fov(), 80.0);

        for _ in 0..120 {
            player.update(&world, &PlayerInput { sprint: true, ..forward() }, DT);
            assert!(player.fov() <= 100.0);
        }
        assert!(player.fov() > 99.0);

        for _ in 0..120 {
            player.update(&world, &forward(), DT);
        }
        assert!(player.fov() < 81.0);
    }

    #[test]
    fn input_sampling_reads_axes_keys_and_action() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum Act {
            Jump,
        }
        impl Action for Act {}

        struct Scripted;
        impl InputSource<Act> for Scripted {
            fn axis(&self, axis: Axis) -> f32 {
                match axis {
                    Axis::Horizontal => 0.5,
                    Axis::Vertical => -1.0,
                    Axis::MouseX => 2.0,
                    Axis::MouseY => -3.0,
                }
            }
            fn is_key_down(&self, key: KeyCode) -> bool {
                key == KeyCode::ShiftLeft
            }
            fn is_key_pressed(&self, _key: KeyCode) -> bool {
                false
            }
            fn action_triggered(&self, action: Act) -> bool {
                action == Act::Jump
            }
        }

        let input = PlayerInput::sample(&Scripted, Act::Jump);
        assert_eq!(
            input,
            PlayerInput {
                move_x: 0.5,
                move_z: -1.0,
                mouse_x: 2.0,
                mouse_y: -3.0,
                sprint: true,
                crouch: false,
                jump: true,
            }
        );
        assert!(input.is_moving());
    }
}
