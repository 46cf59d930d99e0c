// src/progression/mod.rs — Gamification bookkeeping (XP, levels, history)

pub mod ledger;
pub mod store;

pub use ledger::{award, level_progress, record_session};
pub use store::SessionStore;
