use crate::db::models::{Message, NewMessage, Project, Skill};
use crate::db::schema::SQLITE_INIT;
use crate::db::seed;
use crate::error::FolioError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Relational `Storage` backend: a stateless façade issuing one SQL
/// statement per call against a shared connection pool.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool against the given connection string, creating the
    /// database file if it does not exist yet.
    pub async fn connect(database_url: &str) -> Result<Self, FolioError> {
        let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(opts).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), FolioError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    fn row_to_project(row: SqliteRow) -> Result<Project, FolioError> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: String = row.try_get("description")?;
        let image_url: String = row.try_get("image_url")?;
        let project_url: Option<String> = row.try_get("project_url")?;
        let repo_url: Option<String> = row.try_get("repo_url")?;
        let technologies_json: String = row.try_get("technologies")?;
        let created_at_str: String = row.try_get("created_at")?;

        let technologies: Vec<String> = serde_json::from_str(&technologies_json)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let created_at = parse_rfc3339(&created_at_str)?;

        Ok(Project {
            id,
            title,
            description,
            image_url,
            project_url,
            repo_url,
            technologies,
            created_at,
        })
    }

    fn row_to_skill(row: SqliteRow) -> Result<Skill, FolioError> {
        Ok(Skill {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            proficiency: row.try_get("proficiency")?,
        })
    }
}

fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>, FolioError> {
    let dt = DateTime::parse_from_rfc3339(s)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .with_timezone(&Utc);
    Ok(dt)
}

#[async_trait]
impl super::Storage for SqliteStorage {
    async fn create_message(&self, input: NewMessage) -> Result<Message, FolioError> {
        let created_at = Utc::now();
        let res = sqlx::query(
            "INSERT INTO messages (name, email, message, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.message)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Message {
            id: res.last_insert_rowid(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at,
        })
    }

    async fn get_projects(&self) -> Result<Vec<Project>, FolioError> {
        let rows = sqlx::query(
            r#"SELECT id, title, description, image_url, project_url, repo_url,
               technologies, created_at
               FROM projects ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_project).collect()
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, FolioError> {
        let rows = sqlx::query(
            r#"SELECT id, name, category, proficiency
               FROM skills ORDER BY proficiency DESC, id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_skill).collect()
    }

    /// Emptiness check and inserts run inside one transaction, and the
    /// seeded tables carry UNIQUE constraints, so concurrent cold starts
    /// cannot produce duplicate starter rows.
    async fn seed_data(&self) -> Result<(), FolioError> {
        let mut tx = self.pool.begin().await?;

        let (project_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(&mut *tx)
            .await?;
        if project_count == 0 {
            let starters = seed::starter_projects();
            let created_at = Utc::now().to_rfc3339();
            for p in &starters {
                let technologies_json = serde_json::to_string(&p.technologies)
                    .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
                sqlx::query(
                    r#"INSERT INTO projects
                       (title, description, image_url, project_url, repo_url, technologies, created_at)
                       VALUES (?, ?, ?, ?, ?, ?, ?)"#,
                )
                .bind(&p.title)
                .bind(&p.description)
                .bind(&p.image_url)
                .bind(&p.project_url)
                .bind(&p.repo_url)
                .bind(technologies_json)
                .bind(&created_at)
                .execute(&mut *tx)
                .await?;
            }
            info!(count = starters.len(), "seeded starter projects");
        }

        let (skill_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skills")
            .fetch_one(&mut *tx)
            .await?;
        if skill_count == 0 {
            let starters = seed::starter_skills();
            for s in &starters {
                sqlx::query("INSERT INTO skills (name, category, proficiency) VALUES (?, ?, ?)")
                    .bind(&s.name)
                    .bind(&s.category)
                    .bind(s.proficiency)
                    .execute(&mut *tx)
                    .await?;
            }
            info!(count = starters.len(), "seeded starter skills");
        }

        tx.commit().await?;
        Ok(())
    }
}
