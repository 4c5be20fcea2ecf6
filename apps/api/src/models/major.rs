use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionInfo {
    #[serde(default)]
    pub top_universities: Vec<String>,
    #[serde(default)]
    pub average_competition_ratio: String,
    #[serde(default)]
    pub key_admission_factors: String,
}

/// An academic department and the occupations it leads to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorRecord {
    #[serde(alias = "major_code")]
    pub code: String,
    #[serde(alias = "major_name")]
    pub name: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub core_subjects: Vec<String>,
    #[serde(default)]
    pub related_jobs: Vec<String>,
    #[serde(default)]
    pub recommended_high_school_subjects: Vec<String>,
    #[serde(default, alias = "admission_info")]
    pub admission: Option<AdmissionInfo>,
}
