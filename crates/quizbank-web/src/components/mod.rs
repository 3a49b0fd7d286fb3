//! Server-rendered fragments of the admin panel

pub mod history;
pub mod loading;
pub mod markup;
pub mod pagination;
pub mod questions;
pub mod stats;
pub mod tabs;
pub mod upload;
