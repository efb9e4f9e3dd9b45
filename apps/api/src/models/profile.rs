use serde::{Deserialize, Serialize};

/// The seven fixed sections of a Level Set profile report.
///
/// Table fields are rows of cells; the column headers come from the section
/// layout, not from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSections {
    pub step1: String,
    pub step2: String,
    /// Trajectory rows: stage, title, years.
    pub step3: Vec<Vec<String>>,
    /// Compensation rows: stage, typical salary.
    pub step4: Vec<Vec<String>>,
    /// Growth levers, rendered as dash bullets.
    pub step5: Vec<String>,
    /// Future-facing roles: title, executive flag, salary.
    pub step6: Vec<Vec<String>>,
    pub summary: String,
}

/// Request body for `POST /generate-docx`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub client_name: String,
    pub profile_sections: ProfileSections,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateDocxResponse {
    pub download_url: String,
}
