use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content has no {0}")]
    Empty(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    pub date: String,
    pub lines: Vec<String>,
    pub link: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub guide: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Questions {
    pub pinned: String,
    pub scattered: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub company: String,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub tagline: Vec<String>,
    pub quote: String,
    pub projects: Vec<Project>,
    pub team: Vec<TeamMember>,
    pub idea_prompt: String,
    pub idea_steps: Vec<String>,
    pub questions: Questions,
    pub footer: Footer,
}

impl SiteContent {
    /// Content shipped with the build.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        if content.projects.is_empty() {
            return Err(ContentError::Empty("projects"));
        }
        if content.team.is_empty() {
            return Err(ContentError::Empty("team members"));
        }
        Ok(content)
    }

    /// Team members two to a row.
    pub fn team_rows(&self) -> impl Iterator<Item = &[TeamMember]> {
        self.team.chunks(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.team.len(), 5);
        assert_eq!(content.idea_steps.len(), 4);
        assert_eq!(content.projects[1].align, Align::Right);
        assert!(content.projects[0].logo.is_some());
        assert!(content.projects[2].logo.is_none());
    }

    #[test]
    fn test_team_rows_pair_members() {
        let content = SiteContent::embedded().unwrap();
        let rows: Vec<usize> = content.team_rows().map(|row| row.len()).collect();
        assert_eq!(rows, vec![2, 2, 1]);
    }

    #[test]
    fn test_malformed_content_is_rejected() {
        let err = SiteContent::from_json("{\"tagline\": [}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_empty_team_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value["team"] = serde_json::json!([]);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Empty("team members")));
    }
}
