//! Ochre - color conversion from the command line
//!
//! Front end for the `ochre-color` library.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
