//! One handler per operation payload.
//!
//! Handlers own their storage ports behind `Arc<dyn DataStore<_>>` and
//! are registered with the dispatch processors at startup. The `Query`
//! and `Command` capability impls for each payload live next to the
//! handler that serves it.

pub mod levels;
pub mod organisms;
pub mod systems;
pub mod tolerances;
