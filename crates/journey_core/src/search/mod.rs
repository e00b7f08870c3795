//! Note search entry points.
//!
//! # Responsibility
//! - Derive the visible note subset from a free-text query.
//! - Keep matching rules inside core so every UI behaves the same.

pub mod filter;
