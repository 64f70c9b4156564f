//! BitBuddy: a virtual pet in the terminal.
//!
//! All state lives in [`app::App`] and changes one [`event::Msg`] at a time.
//! The [`clock`] and [`input`] modules only produce messages; [`view`] only
//! reads state.

pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod event;
pub mod fx;
pub mod input;
pub mod logging;
pub mod pet;
pub mod runtime;
pub mod sprites;
pub mod storage;
pub mod theme;
pub mod view;
