// src/core/mod.rs — Domain types and the session controller

pub mod coach;
pub mod types;

pub use coach::{Coach, CompletedSession};
