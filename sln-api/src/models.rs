use assessment_bank::types::{AssessmentTaken, AssessmentTakenUpdate, NewAssessmentTaken};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bank id of a project's taken, in percent-encoded form.
///
/// The router hands handlers decoded path segments; the bank addresses
/// records by their encoded form, so `foo:3@ODL` and `foo%3A3%40ODL` name
/// the same project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn from_path(segment: &str) -> Self {
        let decoded = urlencoding::decode(segment)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| segment.to_string());
        Self(urlencoding::encode(&decoded).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A StarLogo Nova project as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub project_str: Option<String>,
    pub user_id: Option<String>,
    pub provenance_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<AssessmentTaken> for Project {
    fn from(taken: AssessmentTaken) -> Self {
        Self {
            id: taken.id,
            title: taken.display_name.text,
            description: taken.description.text,
            project_str: taken.project_str,
            user_id: taken.taking_agent_id,
            provenance_id: taken.provenance_id,
            created_at: taken.created_at,
            updated_at: taken.updated_at,
        }
    }
}

pub fn serialize_projects(takens: Vec<AssessmentTaken>) -> Vec<Project> {
    takens.into_iter().map(Project::from).collect()
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub project_str: String,
}

impl CreateProjectRequest {
    pub fn into_form(self, user_id: String) -> NewAssessmentTaken {
        NewAssessmentTaken {
            user_id,
            provenance_id: None,
            title: self.title,
            description: self.description,
            project_str: self.project_str,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_str: Option<String>,
}

impl From<UpdateProjectRequest> for AssessmentTakenUpdate {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            project_str: req.project_str,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemixProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_str: String,
}

impl RemixProjectRequest {
    /// Whether the original project must be fetched to fill defaults
    pub fn needs_original(&self) -> bool {
        self.title.is_none() || self.description.is_none()
    }

    /// Build the create form for the remix. A missing title becomes
    /// `"Copy of <original title>"`; a missing description is copied from
    /// the original.
    pub fn into_form(
        self,
        user_id: String,
        source: &ProjectId,
        original: Option<&AssessmentTaken>,
    ) -> NewAssessmentTaken {
        let title = self.title.unwrap_or_else(|| {
            format!("Copy of {}", original.map(|o| o.title()).unwrap_or_default())
        });
        let description = self.description.unwrap_or_else(|| {
            original
                .map(|o| o.description_text().to_string())
                .unwrap_or_default()
        });

        NewAssessmentTaken {
            user_id,
            provenance_id: Some(source.to_string()),
            title,
            description,
            project_str: self.project_str,
        }
    }
}
