//! The fixed starter content inserted by `Storage::seed_data` on first boot.

use crate::db::models::{NewProject, NewSkill};

pub fn starter_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "E-Commerce Platform".to_string(),
            description: "A full-featured online store with shopping cart, payment integration, and admin dashboard.".to_string(),
            image_url: "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&q=80".to_string(),
            project_url: Some("https://demo-store.com".to_string()),
            repo_url: Some("https://github.com/username/store".to_string()),
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "PostgreSQL".to_string(),
                "Stripe".to_string(),
            ],
        },
        NewProject {
            title: "Task Management App".to_string(),
            description: "Collaborative task manager with real-time updates and team workspaces.".to_string(),
            image_url: "https://images.unsplash.com/photo-1540350394557-8d14678e7f91?w=800&q=80".to_string(),
            project_url: Some("https://task-app.com".to_string()),
            repo_url: Some("https://github.com/username/tasks".to_string()),
            technologies: vec![
                "Vue.js".to_string(),
                "Firebase".to_string(),
                "Tailwind CSS".to_string(),
            ],
        },
        NewProject {
            title: "AI Image Generator".to_string(),
            description: "Web application that uses AI models to generate unique artwork from text descriptions.".to_string(),
            image_url: "https://images.unsplash.com/photo-1617791160505-6f00504e3519?w=800&q=80".to_string(),
            project_url: Some("https://ai-art.com".to_string()),
            repo_url: None,
            technologies: vec![
                "Python".to_string(),
                "TensorFlow".to_string(),
                "React".to_string(),
                "FastAPI".to_string(),
            ],
        },
    ]
}

pub fn starter_skills() -> Vec<NewSkill> {
    [
        ("React", "Frontend", 90),
        ("TypeScript", "Frontend", 85),
        ("Node.js", "Backend", 80),
        ("Python", "Backend", 75),
        ("PostgreSQL", "Database", 70),
        ("Docker", "DevOps", 65),
    ]
    .into_iter()
    .map(|(name, category, proficiency)| NewSkill {
        name: name.to_string(),
        category: category.to_string(),
        proficiency,
    })
    .collect()
}
