//! Seeding tool for the Sympathetic Resonance item database.
//!
//! Holds the static faction item catalog, computes the design-review
//! balance report, and bulk-loads the catalog into the game's SQLite
//! `items` table. One shot, no persistent state.

pub mod balance;
pub mod database;
pub mod items;
pub mod items_database;
pub mod models;
