//! pacman-overwrite - suggest `pacman --overwrite` for conflicting files
//!
//! When pacman's file database falls out of sync with the filesystem,
//! `pacman -S <pkg>` aborts with "conflicting files". This crate reads
//! those reports and builds the command that overwrites exactly the
//! listed files.
//!
//! This library provides:
//! - [`app`]: Install attempt driver and output rendering
//! - [`model`]: Domain models
//! - [`pacman`]: pacman command execution and parsing

pub mod app;
pub mod model;
pub mod pacman;
