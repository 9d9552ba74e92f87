//! `driftengine::gamecore` module is a core that provides the scaffolding a game
//! built on `driftengine` runs inside.
//!
//! # Model
//! The host game loop is frame-stepped and single-threaded: every frame it polls
//! events from the [`inputs::EventQueue`], applies pending state transitions of
//! the [`states::StateMachine`], and then lets the active state poll input,
//! update and draw.
//!

pub mod inputs;
pub mod qte;
pub mod states;
