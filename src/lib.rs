//! Mad Libs engine — fill-in-the-blank story rendering.
//!
//! Parses story templates to discover their named placeholders, validates
//! caller-supplied values, and substitutes them to produce final text.
//! Front ends (CLI, interactive shells, GUIs) are thin callers of
//! [`core::engine::MadLibEngine`].

pub mod builtin;
pub mod core;
