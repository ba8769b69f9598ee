// src/lib.rs

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod persistence;
pub use crate::engine::Kosha;
