use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// What to study, from high school onward, to reach one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationMapping {
    pub job_name: String,
    pub related_majors: Vec<String>,
    pub high_school_subjects: Vec<String>,
    pub career_path: String,
    pub required_education: String,
}

pub async fn project_education_mapping(catalog: &Catalog, code: &str) -> Option<EducationMapping> {
    let record = catalog.get_by_code(code).await?;
    Some(EducationMapping {
        job_name: record.name,
        related_majors: record.related_majors,
        high_school_subjects: record.high_school_subjects,
        career_path: record.career_path,
        required_education: record.required_education,
    })
}
