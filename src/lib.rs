//=========================================================================
// Tiny Rooms
//
// A small first-person exploration runtime: walk, sprint, crouch and
// jump through a room, push crates, get prompted near interactable
// objects and pick some of them up for a close look.
//
// Layers:
// - `core`: fixed-tick logic thread (input, scenes, time)
// - `world`: headless scene graph + character motor
// - `game`: gameplay controllers and the room scene
// - `platform` (private): winit window, cursor lock, input batching
//
// Typical usage:
// ```no_run
// use tiny_rooms::config::GameConfig;
// use tiny_rooms::game::{install_bindings, RoomAction, RoomKey, RoomScene};
// use tiny_rooms::EngineBuilder;
//
// let config = GameConfig::default();
// let room = RoomScene::demo(&config);
//
// EngineBuilder::<RoomKey, RoomAction>::new()
//     .with_tps(config.window.tps)
//     .build()
//     .init(|systems| {
//         install_bindings(&mut systems.input, config.axes);
//         systems.scene_manager.register_default(RoomKey::Main, room);
//     })
//     .run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the logic-thread systems; `world` and `game` are the
// gameplay layers built on top. `config` and `cli` feed the binary.
//
pub mod cli;
pub mod config;
pub mod core;
pub mod game;
pub mod prelude;
pub mod world;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the OS window and event loop and is not part of the
// public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
