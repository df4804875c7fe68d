//=========================================================================
// Game
//=========================================================================
//
// First-person gameplay controllers and the room scene that runs them.
//
// Controllers are engine-agnostic: each one takes its state, this tick's
// input and `dt`, and reads or writes the world only through the
// `world` capabilities (`SceneGraph`, `CharacterMotor`).
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera_fx;
pub mod crosshair;
pub mod display;
pub mod interaction;
pub mod locomotion;
pub mod look;
pub mod player;
pub mod pusher;
pub mod room;

//=== Public API ==========================================================

pub use camera_fx::{BobSettings, FovEaser, FovSettings, HeadBob, LandingRecoil, RecoilPhase, RecoilSettings};
pub use crosshair::Crosshair;
pub use display::{DisplaySettings, DisplayState, InspectDisplay};
pub use interaction::{InteractionPrompt, InteractionSettings};
pub use locomotion::{jump_velocity, planar_motion, JumpState, LocomotionSettings, SpeedTier, VerticalMotion};
pub use look::{LookSettings, MouseLook};
pub use player::{PlayerController, PlayerFrame, PlayerInput, PlayerSettings};
pub use pusher::{ObjectPusher, PushSettings};
pub use room::{install_bindings, RoomAction, RoomInput, RoomKey, RoomScene, TickReport, INTERACT_KEY};
