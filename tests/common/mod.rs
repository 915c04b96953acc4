//! Common test utilities for integration tests.
//!
//! Provides a scripted stand-in for pacman so the driver can be exercised
//! without touching a real system.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fake_pacman;

pub use fake_pacman::FakePacman;
