//! Shared utilities for the Tareas backend.
//!
//! This crate provides functionality used by the domain and API crates:
//! - Field validation rules shared by the entity payloads
//! - Text helpers used when deriving display fields

pub mod text;
pub mod validation;
