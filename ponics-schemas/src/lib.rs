//! Data contracts for tolerance-driven aquaponics management: measured
//! level kinds, organism tolerances, system topology, and the payloads of
//! every supported query and command.
//!
//! Everything here is serde-serializable plain data. Behavior lives in
//! `ponics-core`.

pub mod command;
pub mod file_formats;
pub mod levels;
pub mod organism;
pub mod query;
pub mod system;
pub mod tolerance;
