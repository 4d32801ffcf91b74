//! Database module: models, schema, and storage backends.
//!
//! Layout:
//! - `models.rs`: entity structs, insertable shapes, and payload validation
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `seed.rs`: the fixed starter rows inserted on first boot
//! - `sqlite.rs`: the relational `Storage` implementation
//! - `memory.rs`: in-memory `Storage` implementation for tests and demos

pub mod memory;
pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use memory::MemStorage;
pub use models::{Message, NewMessage, Project, Skill};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, SqliteStorage};

use crate::error::FolioError;
use async_trait::async_trait;

/// The sole mediator between the rest of the system and persisted state.
///
/// Every operation is one round trip: it completes or fails before the
/// caller proceeds. There is no retry, caching, or reordering here.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Inserts a contact message and returns the stored record with its
    /// generated id and server-assigned creation timestamp. The input must
    /// already have passed `NewMessage::validate`.
    async fn create_message(&self, input: NewMessage) -> Result<Message, FolioError>;

    /// Returns all projects ordered by ascending id (insertion order).
    /// An empty table yields an empty vec, never an error.
    async fn get_projects(&self) -> Result<Vec<Project>, FolioError>;

    /// Returns all skills ordered by descending proficiency, ties broken by
    /// ascending id. Same emptiness contract as `get_projects`.
    async fn get_skills(&self) -> Result<Vec<Skill>, FolioError>;

    /// Idempotent bootstrap: inserts the starter projects and skills only
    /// into empty tables. Safe to call on every process start.
    async fn seed_data(&self) -> Result<(), FolioError>;
}
