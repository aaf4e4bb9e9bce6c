//! Scaffolding tools for the Yangine game engine.
//!
//! Generates component source files, copies projects and bootstraps new
//! projects from the engine's templates, keeping the workspace `premake5.lua`
//! in sync and running premake afterwards.
//!
//! The public API is organised into layers:
//!
//! - **[`template`]**: placeholder tokens and rendering
//! - **[`config`]**: optional `scaffold.toml` settings
//! - **[`scaffold`]**: validated requests and the operations that apply them
//! - **[`commands`]**: subcommand orchestration (`component`, `copy`, `new`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod prompt;
pub mod scaffold;
pub mod template;
