//! The ponics decision engine: water-quality analysis against recorded
//! tolerances, plus typed dispatch of every supported query and command
//! over pluggable storage.
//!
//! Build a [`bootstrap::Ponics`] with [`bootstrap::PonicsBuilder`], then
//! feed it payloads from `ponics-schemas` through `process_query` and
//! `process_command`.

pub mod analysis;
pub mod bootstrap;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod seed;
