//! Full pages served by the panel

pub mod admin;
pub mod not_found;
