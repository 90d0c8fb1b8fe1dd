// Release gating: the ten-item verification checklist, the ship gate derived from it,
// and the proof-of-work submission that depends on both.
// The gate is recomputed from stored state on every request; nothing is cached.

pub mod checklist;
pub mod handlers;
pub mod proof;
pub mod store;

pub use store::{ChecklistStore, ProofStore};
