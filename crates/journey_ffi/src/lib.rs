//! Flutter-facing bridge crate for the Journey notes core.

pub mod api;
