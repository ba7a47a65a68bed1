//! jotter-core - Core library for Jotter
//!
//! This crate contains the note models, the fixed color palette, and the
//! `NoteBoard` controller that every Jotter front-end drives.

pub mod board;
pub mod config;
pub mod error;
pub mod models;

pub use board::{NoteBoard, NoteView};
pub use error::{Error, Result};
pub use models::{Color, ColorId, Note, NoteId, PALETTE};
