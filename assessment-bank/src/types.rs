use serde::{Deserialize, Serialize};

/// Localized text wrapper used by the bank for names and descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    #[serde(default)]
    pub text: String,
}

impl DisplayText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for DisplayText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A bank (catalog) holding assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: String,
    #[serde(default)]
    pub display_name: DisplayText,
    #[serde(default)]
    pub description: DisplayText,
    #[serde(default)]
    pub genus_type_id: Option<String>,
}

/// Form for creating a bank
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBank {
    pub name: String,
    pub description: String,
    pub genus_type_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    #[serde(default)]
    pub display_name: DisplayText,
    #[serde(default)]
    pub bank_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOffered {
    pub id: String,
    #[serde(default)]
    pub display_name: DisplayText,
    #[serde(default)]
    pub assessment_id: Option<String>,
}

/// A taken record; StarLogo Nova stores one project per taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTaken {
    pub id: String,
    #[serde(default)]
    pub display_name: DisplayText,
    #[serde(default)]
    pub description: DisplayText,
    #[serde(default)]
    pub taking_agent_id: Option<String>,
    #[serde(default)]
    pub provenance_id: Option<String>,
    #[serde(default)]
    pub project_str: Option<String>,
    #[serde(default)]
    pub assessment_offered_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AssessmentTaken {
    pub fn title(&self) -> &str {
        &self.display_name.text
    }

    pub fn description_text(&self) -> &str {
        &self.description.text
    }
}

/// Form for creating a taken.
///
/// Key names are the ones the bank's taken endpoint accepts, which mix
/// snake_case and camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssessmentTaken {
    pub user_id: String,
    #[serde(rename = "provenanceId", skip_serializing_if = "Option::is_none")]
    pub provenance_id: Option<String>,
    pub title: String,
    pub description: String,
    pub project_str: String,
}

/// Partial update of a taken. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentTakenUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_str: Option<String>,
}

impl AssessmentTakenUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.project_str.is_none()
    }
}
