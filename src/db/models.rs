use crate::error::FieldError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form submission. Immutable once created; the public interface
/// exposes no update or delete for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: Option<String>,
    pub repo_url: Option<String>,
    /// Ordered list of technology labels, persisted as a JSON array.
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub name: String,
    /// Free-text grouping label ("Frontend", "Backend", ...).
    pub category: String,
    /// Intended range 0-100; used for display sorting, not store-enforced.
    pub proficiency: i64,
}

/// Insertable shape for `Message`: the fields a caller may supply. Server
/// generated fields (id, created_at) are excluded by construction.
///
/// Fields default to empty strings so an absent JSON key and an empty value
/// fail validation through the same path, and every bad field gets named.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl NewMessage {
    /// Checks every field and reports the complete list of failures, never
    /// just the first. An empty result means the payload conforms exactly
    /// to the insertable shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errs = Vec::new();
        if self.name.trim().is_empty() {
            errs.push(FieldError::empty("name"));
        }
        if self.email.trim().is_empty() {
            errs.push(FieldError::empty("email"));
        } else if !is_plausible_email(&self.email) {
            errs.push(FieldError::new("email", "malformed email address"));
        }
        if self.message.trim().is_empty() {
            errs.push(FieldError::empty("message"));
        }
        if errs.is_empty() { Ok(()) } else { Err(errs) }
    }
}

/// Structural plausibility only: one `@`, a non-empty local part, and a
/// domain containing a dot. Deliverability is not our problem.
fn is_plausible_email(s: &str) -> bool {
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Insertable shape for `Project`; only the seed path constructs these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: Option<String>,
    pub repo_url: Option<String>,
    pub technologies: Vec<String>,
}

/// Insertable shape for `Skill`; only the seed path constructs these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub proficiency: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(name: &str, email: &str, message: &str) -> NewMessage {
        NewMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_message_passes() {
        assert!(msg("Ana", "ana@x.com", "Hi").validate().is_ok());
    }

    #[test]
    fn empty_fields_and_malformed_email_are_all_named() {
        let errs = msg("", "bad", "").validate().unwrap_err();
        let fields: Vec<&str> = errs.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
        assert_eq!(errs[0].reason, "must not be empty");
        assert_eq!(errs[1].reason, "malformed email address");
        assert_eq!(errs[2].reason, "must not be empty");
    }

    #[test]
    fn missing_json_fields_are_all_named() {
        let parsed: NewMessage = serde_json::from_str("{}").unwrap();
        let errs = parsed.validate().unwrap_err();
        let fields: Vec<&str> = errs.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errs = msg("  ", "ana@x.com", "hello").validate().unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "name");
    }

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("ana@x.com"));
        assert!(!is_plausible_email("bad"));
        assert!(!is_plausible_email("@x.com"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("a@b@c.com"));
        assert!(!is_plausible_email("a@.com"));
    }
}
