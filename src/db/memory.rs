use crate::db::models::{Message, NewMessage, Project, Skill};
use crate::db::seed;
use crate::error::FolioError;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

/// In-memory `Storage` backend with the same observable contract as
/// `SqliteStorage`: id assignment, ordering, and seed idempotence all match.
/// Nothing survives the process.
#[derive(Default)]
pub struct MemStorage {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    messages: Vec<Message>,
    projects: Vec<Project>,
    skills: Vec<Skill>,
}

impl Inner {
    fn alloc_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl super::Storage for MemStorage {
    async fn create_message(&self, input: NewMessage) -> Result<Message, FolioError> {
        let mut inner = self.inner.lock().unwrap();
        let stored = Message {
            id: inner.alloc_id(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: Utc::now(),
        };
        inner.messages.push(stored.clone());
        Ok(stored)
    }

    async fn get_projects(&self) -> Result<Vec<Project>, FolioError> {
        let inner = self.inner.lock().unwrap();
        let mut projects = inner.projects.clone();
        projects.sort_by_key(|p| p.id);
        Ok(projects)
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, FolioError> {
        let inner = self.inner.lock().unwrap();
        let mut skills = inner.skills.clone();
        skills.sort_by_key(|s| (std::cmp::Reverse(s.proficiency), s.id));
        Ok(skills)
    }

    async fn seed_data(&self) -> Result<(), FolioError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.projects.is_empty() {
            let created_at = Utc::now();
            for p in seed::starter_projects() {
                let id = inner.alloc_id();
                inner.projects.push(Project {
                    id,
                    title: p.title,
                    description: p.description,
                    image_url: p.image_url,
                    project_url: p.project_url,
                    repo_url: p.repo_url,
                    technologies: p.technologies,
                    created_at,
                });
            }
        }
        if inner.skills.is_empty() {
            for s in seed::starter_skills() {
                let id = inner.alloc_id();
                inner.skills.push(Skill {
                    id,
                    name: s.name,
                    category: s.category,
                    proficiency: s.proficiency,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Storage;

    #[tokio::test]
    async fn seeding_twice_never_duplicates() {
        let store = MemStorage::new();
        store.seed_data().await.unwrap();
        store.seed_data().await.unwrap();
        assert_eq!(store.get_projects().await.unwrap().len(), 3);
        assert_eq!(store.get_skills().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn skills_come_back_in_non_increasing_proficiency() {
        let store = MemStorage::new();
        store.seed_data().await.unwrap();
        let skills = store.get_skills().await.unwrap();
        assert!(skills.windows(2).all(|w| w[0].proficiency >= w[1].proficiency));
    }

    #[tokio::test]
    async fn created_messages_get_fresh_ids_and_timestamps() {
        let store = MemStorage::new();
        let a = store
            .create_message(NewMessage {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                message: "Hi".to_string(),
            })
            .await
            .unwrap();
        let b = store
            .create_message(NewMessage {
                name: "Bo".to_string(),
                email: "bo@x.com".to_string(),
                message: "Hey".to_string(),
            })
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.created_at >= a.created_at);
    }
}
