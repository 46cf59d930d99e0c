// src/lib.rs — Library root for interview-coach

pub mod cli;
pub mod core;
pub mod grading;
pub mod infra;
pub mod progression;
pub mod provider;
pub mod questions;
pub mod speech;
pub mod util;
