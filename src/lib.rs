//! Pokedex TUI - paginated PokeAPI browser on tui-dispatch
//!
//! The library exposes the loaders, store pieces and screens for testing.

pub mod action;
pub mod api;
pub mod collection;
pub mod components;
pub mod config;
pub mod detail;
pub mod effect;
pub mod logging;
pub mod mapper;
pub mod pagination;
pub mod reducer;
pub mod state;
pub mod theme;
