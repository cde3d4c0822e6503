//! Concrete log output handlers

pub mod file;

pub use file::FileHandler;
