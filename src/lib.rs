//! Conway's Game of Life on a bounded field read from a text file.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod proc;

pub use error::{Error, LoadError, Result, ValidationError};
