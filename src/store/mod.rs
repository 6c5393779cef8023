/// Persistence store
///
/// Owns the SQLite pool and the schema shared by the identity
/// collaborator and the workout core.

pub mod database;

pub use database::Database;
