use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Separator between stages in a stored career path.
pub const STAGE_SEPARATOR: char = '→';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPathProjection {
    pub job_name: String,
    /// Earliest stage first.
    pub steps: Vec<String>,
    pub high_school_subjects: Vec<String>,
    pub related_majors: Vec<String>,
    pub required_skills: Vec<String>,
}

/// Splits a stored career path into trimmed, non-empty stage labels.
pub fn parse_career_path(path: &str) -> Vec<String> {
    path.split(STAGE_SEPARATOR)
        .map(str::trim)
        .filter(|stage| !stage.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn project_career_path(catalog: &Catalog, code: &str) -> Option<CareerPathProjection> {
    let record = catalog.get_by_code(code).await?;
    Some(CareerPathProjection {
        steps: parse_career_path(&record.career_path),
        job_name: record.name,
        high_school_subjects: record.high_school_subjects,
        related_majors: record.related_majors,
        required_skills: record.required_skills,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::catalog::sample::{FieldListing, SampleData};
    use crate::models::{OccupationRecord, OccupationSummary, Outlook};

    pub(crate) fn record(
        code: &str,
        name: &str,
        field: &str,
        career_path: &str,
    ) -> OccupationRecord {
        OccupationRecord {
            code: code.to_string(),
            name: name.to_string(),
            field: field.to_string(),
            description: String::new(),
            main_tasks: vec![],
            required_education: String::new(),
            required_skills: vec!["Python".to_string()],
            certifications: vec![],
            salary_range: None,
            outlook: Some(Outlook::VeryHigh),
            growth_rate: Some(25.0),
            employment_rate: None,
            related_majors: vec!["Computer Science".to_string()],
            high_school_subjects: vec!["Mathematics".to_string()],
            career_path: career_path.to_string(),
        }
    }

    pub(crate) fn seeded_catalog(records: Vec<OccupationRecord>) -> Catalog {
        let mut fields: Vec<FieldListing> = Vec::new();
        for r in &records {
            let summary = OccupationSummary {
                code: r.code.clone(),
                name: r.name.clone(),
                growth: r.outlook,
                field: r.field.clone(),
            };
            match fields.iter_mut().find(|f| f.field == r.field) {
                Some(listing) => listing.occupations.push(summary),
                None => fields.push(FieldListing {
                    field: r.field.clone(),
                    source_label: r.field.clone(),
                    occupations: vec![summary],
                }),
            }
        }
        Catalog::sample_only(SampleData::from_parts(records, fields, vec![]).unwrap())
    }

    #[test]
    fn test_parse_splits_and_trims() {
        assert_eq!(parse_career_path("A → B → C"), vec!["A", "B", "C"]);
        assert_eq!(parse_career_path("A→B"), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_drops_empty_stages() {
        assert_eq!(parse_career_path(" → A →  → B → "), vec!["A", "B"]);
        assert!(parse_career_path("").is_empty());
        assert!(parse_career_path("   ").is_empty());
        assert!(parse_career_path("→").is_empty());
    }

    #[test]
    fn test_parse_single_stage() {
        assert_eq!(parse_career_path("Apprentice"), vec!["Apprentice"]);
    }

    #[tokio::test]
    async fn test_seeded_ai_engineer_path() {
        let catalog = seeded_catalog(vec![record(
            "AI001",
            "AI Engineer",
            "AI/Big Data",
            "College → Engineer → Senior Engineer",
        )]);

        let projection = project_career_path(&catalog, "AI001").await.unwrap();
        assert_eq!(projection.job_name, "AI Engineer");
        assert_eq!(projection.steps, vec!["College", "Engineer", "Senior Engineer"]);
        assert_eq!(projection.required_skills, vec!["Python"]);
    }

    #[tokio::test]
    async fn test_blank_path_yields_no_steps() {
        let catalog = seeded_catalog(vec![record("X001", "Wanderer", "Misc", "  ")]);
        let projection = project_career_path(&catalog, "X001").await.unwrap();
        assert!(projection.steps.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_code_has_no_projection() {
        let catalog = sample_catalog();
        assert!(project_career_path(&catalog, "NOPE").await.is_none());
    }

    #[tokio::test]
    async fn test_sample_paths_start_early_and_end_terminal() {
        let catalog = sample_catalog();
        let projection = project_career_path(&catalog, "ECO001").await.unwrap();
        assert_eq!(
            projection.steps,
            vec!["University major", "Engineer", "Senior Engineer", "Project Manager"]
        );
        assert_eq!(projection.high_school_subjects[0], "Physics");
    }
}
