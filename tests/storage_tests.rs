use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use folio::db::{NewMessage, SqliteStorage, Storage};

struct TempDb {
    storage: SqliteStorage,
    path: PathBuf,
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

async fn temp_db(label: &str) -> TempDb {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!("folio-{}-{}-{}.sqlite", label, std::process::id(), nanos));

    let database_url = format!("sqlite:{}", path.display());
    let storage = SqliteStorage::connect(&database_url)
        .await
        .expect("failed to open temp database");
    storage.init_schema().await.expect("schema init failed");

    TempDb { storage, path }
}

#[tokio::test]
async fn seed_inserts_starter_rows_exactly_once() {
    let db = temp_db("seed-idempotence").await;

    db.storage.seed_data().await.unwrap();
    let projects = db.storage.get_projects().await.unwrap();
    let skills = db.storage.get_skills().await.unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(skills.len(), 6);

    // Second call on a populated store changes nothing.
    db.storage.seed_data().await.unwrap();
    assert_eq!(db.storage.get_projects().await.unwrap(), projects);
    assert_eq!(db.storage.get_skills().await.unwrap(), skills);
}

#[tokio::test]
async fn reads_on_an_empty_store_return_empty_sets() {
    let db = temp_db("empty-reads").await;
    assert!(db.storage.get_projects().await.unwrap().is_empty());
    assert!(db.storage.get_skills().await.unwrap().is_empty());
}

#[tokio::test]
async fn projects_come_back_in_insertion_order() {
    let db = temp_db("project-order").await;
    db.storage.seed_data().await.unwrap();

    let projects = db.storage.get_projects().await.unwrap();
    assert!(projects.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(projects[0].title, "E-Commerce Platform");
    assert_eq!(
        projects[0].technologies,
        vec!["React", "Node.js", "PostgreSQL", "Stripe"]
    );
    assert_eq!(projects[2].repo_url, None);
}

#[tokio::test]
async fn skills_come_back_in_non_increasing_proficiency() {
    let db = temp_db("skill-order").await;
    db.storage.seed_data().await.unwrap();

    let skills = db.storage.get_skills().await.unwrap();
    assert!(skills.windows(2).all(|w| w[0].proficiency >= w[1].proficiency));
    assert_eq!(skills[0].name, "React");
    assert_eq!(skills[0].proficiency, 90);
    assert_eq!(skills[5].name, "Docker");
}

#[tokio::test]
async fn create_message_assigns_fresh_ids_and_non_decreasing_timestamps() {
    let db = temp_db("message-create").await;

    let first = db
        .storage
        .create_message(NewMessage {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            message: "Hi".to_string(),
        })
        .await
        .unwrap();
    assert!(first.id > 0);
    assert_eq!(first.name, "Ana");
    assert_eq!(first.email, "ana@x.com");
    assert_eq!(first.message, "Hi");

    let second = db
        .storage
        .create_message(NewMessage {
            name: "Bo".to_string(),
            email: "bo@y.org".to_string(),
            message: "Hello".to_string(),
        })
        .await
        .unwrap();
    assert_ne!(second.id, first.id);
    assert!(second.created_at >= first.created_at);

    // The stored row round-trips through SQL exactly as returned.
    let (name, email, message): (String, String, String) =
        sqlx::query_as("SELECT name, email, message FROM messages WHERE id = ?")
            .bind(first.id)
            .fetch_one(db.storage.pool())
            .await
            .unwrap();
    assert_eq!((name.as_str(), email.as_str(), message.as_str()), ("Ana", "ana@x.com", "Hi"));
}

#[tokio::test]
async fn duplicate_seed_rows_are_rejected_by_the_store() {
    let db = temp_db("seed-constraint").await;
    db.storage.seed_data().await.unwrap();

    // The UNIQUE guard holds even if someone bypasses seed_data's check.
    let res = sqlx::query("INSERT INTO skills (name, category, proficiency) VALUES (?, ?, ?)")
        .bind("React")
        .bind("Frontend")
        .bind(90)
        .execute(db.storage.pool())
        .await;
    assert!(res.is_err());
}
