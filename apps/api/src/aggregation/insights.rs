//! Chart-ready aggregates: salary spreads, comparison radar scores, skill category
//! counts and per-field totals.
//! These produce numbers only; turning them into charts is the caller's job.

use serde::{Deserialize, Serialize};

use crate::aggregation::comparison::ComparisonRow;
use crate::catalog::Catalog;
use crate::models::{EmploymentRate, OccupationRecord, Outlook};

// ────────────────────────────────────────────────────────────────────────────
// Salary distribution
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPoint {
    pub code: String,
    pub name: String,
    pub min: u64,
    pub max: u64,
    pub average: f64,
    pub unit: String,
}

/// One point per row with a parseable salary interval, in row order.
pub fn salary_distribution(rows: &[ComparisonRow]) -> Vec<SalaryPoint> {
    rows.iter()
        .filter_map(|row| {
            let bounds = row.salary_range.as_ref()?.bounds.as_ref()?;
            Some(SalaryPoint {
                code: row.code.clone(),
                name: row.name.clone(),
                min: bounds.min,
                max: bounds.max,
                average: bounds.average(),
                unit: bounds.unit.clone(),
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Comparison scores
// ────────────────────────────────────────────────────────────────────────────

/// Upper end of every radar axis.
pub const RADAR_MAX: f64 = 5.0;

/// Stand-ins for values a row does not carry: outlook "medium", 10% growth,
/// 50% employment, and a mid-scale salary score.
const DEFAULT_OUTLOOK_SCORE: f64 = 2.0;
const DEFAULT_GROWTH_RATE: f64 = 10.0;
const DEFAULT_EMPLOYMENT_RATE: f64 = 50.0;
const DEFAULT_SALARY_SCORE: f64 = 3.0;

const GROWTH_DIVISOR: f64 = 5.0;
const EMPLOYMENT_DIVISOR: f64 = 20.0;
/// Average salary in 만원 (10,000 KRW) that scores 1.
const SALARY_DIVISOR_MANWON: f64 = 1500.0;
const WON_PER_MANWON: f64 = 10_000.0;

/// Radar values on a 0 to 5 scale, plus the 1 to 5 outlook index used by the
/// growth chart (0 when the outlook is unknown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScores {
    pub code: String,
    pub name: String,
    pub outlook_index: u8,
    pub outlook: f64,
    pub growth: f64,
    pub employment: f64,
    pub salary: f64,
    /// Lower education requirements score higher.
    pub education: f64,
}

/// One entry per row, in row order.
pub fn comparison_scores(rows: &[ComparisonRow]) -> Vec<ComparisonScores> {
    rows.iter().map(score_row).collect()
}

fn score_row(row: &ComparisonRow) -> ComparisonScores {
    let employment = match &row.employment_rate {
        Some(EmploymentRate::Percentage(p)) => *p,
        Some(EmploymentRate::Label(_)) | None => DEFAULT_EMPLOYMENT_RATE,
    };

    ComparisonScores {
        code: row.code.clone(),
        name: row.name.clone(),
        outlook_index: row.outlook.map_or(0, |o| o.score()),
        outlook: row
            .outlook
            .map_or(DEFAULT_OUTLOOK_SCORE, |o| f64::from(o.score())),
        growth: clamp_score(row.growth_rate.unwrap_or(DEFAULT_GROWTH_RATE) / GROWTH_DIVISOR),
        employment: clamp_score(employment / EMPLOYMENT_DIVISOR),
        salary: clamp_score(salary_score(row).unwrap_or(DEFAULT_SALARY_SCORE)),
        education: education_score(&row.required_education),
    }
}

fn salary_score(row: &ComparisonRow) -> Option<f64> {
    let bounds = row.salary_range.as_ref()?.bounds.as_ref()?;
    let manwon = match bounds.unit.as_str() {
        "만원" => bounds.average(),
        "KRW" | "원" | "" => bounds.average() / WON_PER_MANWON,
        _ => return None,
    };
    Some(manwon / SALARY_DIVISOR_MANWON)
}

fn education_score(required: &str) -> f64 {
    let required = required.to_lowercase();
    if required.contains("high school") || required.contains("고졸") {
        5.0
    } else if required.contains("bachelor") || required.contains("학사") {
        4.0
    } else {
        3.0
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, RADAR_MAX)
}

// ────────────────────────────────────────────────────────────────────────────
// Skill profile
// ────────────────────────────────────────────────────────────────────────────

/// Checked in this order; a skill lands in the first group it matches.
const PROGRAMMING_TERMS: &[&str] = &["python", "java", "c++", "programming", "프로그래밍"];
const DATA_TERMS: &[&str] = &["data", "analysis", "analytics", "데이터", "분석"];
const THEORY_TERMS: &[&str] = &[
    "theory",
    "mathematics",
    "statistic",
    "physics",
    "chemistry",
    "이론",
    "수학",
    "통계",
    "물리",
    "화학",
];
const TOOL_TERMS: &[&str] = &["cad", "tool", "tensorflow", "pytorch", "툴"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub job_name: String,
    pub programming: u32,
    pub data_analysis: u32,
    pub theory: u32,
    pub tools: u32,
    pub soft_skills: u32,
    /// Equals the number of required skills.
    pub total: u32,
}

pub fn skill_profile(record: &OccupationRecord) -> SkillProfile {
    let mut profile = SkillProfile {
        job_name: record.name.clone(),
        ..SkillProfile::default()
    };

    for skill in &record.required_skills {
        let skill = skill.to_lowercase();
        let mentions = |terms: &[&str]| terms.iter().any(|t| skill.contains(*t));

        if mentions(PROGRAMMING_TERMS) {
            profile.programming += 1;
        } else if mentions(DATA_TERMS) {
            profile.data_analysis += 1;
        } else if mentions(THEORY_TERMS) {
            profile.theory += 1;
        } else if mentions(TOOL_TERMS) {
            profile.tools += 1;
        } else {
            profile.soft_skills += 1;
        }
        profile.total += 1;
    }

    profile
}

// ────────────────────────────────────────────────────────────────────────────
// Industry overview
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverview {
    pub field: String,
    pub occupation_count: usize,
    /// Occupations whose outlook is `high` or better.
    pub high_outlook_count: usize,
}

/// One entry per catalog field, in catalog order.
pub async fn industry_overview(catalog: &Catalog) -> Vec<FieldOverview> {
    let mut overview = Vec::new();
    for field in catalog.list_all_fields() {
        let listing = catalog.list_by_field(&field).await;
        overview.push(FieldOverview {
            occupation_count: listing.len(),
            high_outlook_count: listing
                .iter()
                .filter(|s| s.growth.is_some_and(|g| g >= Outlook::High))
                .count(),
            field,
        });
    }
    overview
}
