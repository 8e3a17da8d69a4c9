//! Persistence of the learner's document library.

pub mod library;

pub use library::{DocumentRecord, LearnerProfile, LearnerStats, LibrarySnapshot, LibraryStore};
