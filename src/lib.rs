// src/lib.rs

pub mod config;
pub mod document;
pub mod editor;
pub mod map;
#[cfg(feature = "gui")]
pub mod ui;
pub mod utils;
