//! SQL DDL for initializing the portfolio store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on every table
/// - `technologies` as a JSON array serialized to TEXT
/// - timestamps stored as RFC3339 TEXT
/// - UNIQUE constraints on seeded tables so two racing cold starts cannot
///   both insert the starter rows
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL,
    image_url TEXT NOT NULL,
    project_url TEXT NULL,
    repo_url TEXT NULL,
    technologies TEXT NOT NULL, -- JSON array, serialized as text
    created_at TEXT NOT NULL -- RFC3339
);

CREATE TABLE IF NOT EXISTS skills (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    proficiency INTEGER NOT NULL,
    UNIQUE(name, category)
);

-- Skills are always read in proficiency order.
CREATE INDEX IF NOT EXISTS idx_skills_proficiency ON skills(proficiency);
"#;
