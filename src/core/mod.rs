// src/core/mod.rs
//! Phonology of written Sanskrit: the alphabet and everything computed
//! from it, independent of any lexicon.

pub mod alphabet;
pub mod pratyahara;
pub mod syllable;
pub mod text;
pub mod types;
pub mod ucchaarana;
pub mod varna;
