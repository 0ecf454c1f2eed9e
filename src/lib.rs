//! LayerLens library
//!
//! Core engine for rendering a programmable keyboard's key layout one layer
//! at a time: keycode dictionaries with alias-aware lookup, a keymap token
//! grammar with display-label resolution, board geometry parsing, and layer
//! composition into normalized renderable key descriptors. Rendering itself
//! and file/process I/O stay with the calling collaborator.

// Module declarations
pub mod constants;
pub mod error;
pub mod keycode_db;
pub mod models;
pub mod parser;
pub mod services;

pub use error::{Error, Result};
