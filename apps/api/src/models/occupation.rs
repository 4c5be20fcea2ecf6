use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Outlook
// ────────────────────────────────────────────────────────────────────────────

/// Ordinal demand forecast. Variants are declared lowest first so the derived
/// ordering matches the forecast ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outlook {
    Low,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
}

impl Outlook {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outlook::Low => "low",
            Outlook::Medium => "medium",
            Outlook::MediumHigh => "medium-high",
            Outlook::High => "high",
            Outlook::VeryHigh => "very-high",
        }
    }

    /// 1 (low) through 5 (very high).
    pub fn score(&self) -> u8 {
        match self {
            Outlook::Low => 1,
            Outlook::Medium => 2,
            Outlook::MediumHigh => 3,
            Outlook::High => 4,
            Outlook::VeryHigh => 5,
        }
    }
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outlook {
    type Err = String;

    /// Accepts the English labels and the WorkNet (Korean) labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "low" | "낮음" => Ok(Outlook::Low),
            "medium" | "중" => Ok(Outlook::Medium),
            "medium-high" | "중상" => Ok(Outlook::MediumHigh),
            "high" | "높음" => Ok(Outlook::High),
            "very-high" | "매우-높음" => Ok(Outlook::VeryHigh),
            _ => Err(format!("unknown outlook label '{s}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Salary
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBounds {
    pub min: u64,
    pub max: u64,
    pub unit: String,
}

impl SalaryBounds {
    pub fn average(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

/// A salary interval as stored ("40,000,000 ~ 80,000,000 KRW").
/// `bounds` is `None` when the text is not a parseable interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub raw: String,
    pub bounds: Option<SalaryBounds>,
}

impl SalaryRange {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            bounds: parse_salary_bounds(raw),
        }
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parses "<amount>[unit] ~ <amount>[unit]". A side without a unit borrows the
/// other side's; two differing units are rejected.
fn parse_salary_bounds(raw: &str) -> Option<SalaryBounds> {
    let (low, high) = raw.split_once('~')?;
    let (min, low_unit) = split_amount(low)?;
    let (max, high_unit) = split_amount(high)?;

    let unit = match (low_unit.is_empty(), high_unit.is_empty()) {
        (_, true) => low_unit,
        (true, false) => high_unit,
        (false, false) if low_unit == high_unit => high_unit,
        _ => return None,
    };

    if min > max {
        return None;
    }

    Some(SalaryBounds {
        min,
        max,
        unit: unit.to_string(),
    })
}

/// Splits a leading grouped number off the text: "8,000만원" -> (8000, "만원").
fn split_amount(part: &str) -> Option<(u64, &str)> {
    let part = part.trim();
    let end = part
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == ','))
        .map(|(i, _)| i)
        .unwrap_or(part.len());

    let digits: String = part[..end].chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let amount = digits.parse::<u64>().ok()?;
    Some((amount, part[end..].trim()))
}

// ────────────────────────────────────────────────────────────────────────────
// Employment rate
// ────────────────────────────────────────────────────────────────────────────

/// Either a numeric percentage or a categorical status such as "self-employed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EmploymentRate {
    Percentage(f64),
    Label(String),
}

impl fmt::Display for EmploymentRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentRate::Percentage(p) => write!(f, "{p}%"),
            EmploymentRate::Label(label) => f.write_str(label),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationRecord {
    pub code: String,
    pub name: String,
    pub field: String,
    pub description: String,
    pub main_tasks: Vec<String>,
    pub required_education: String,
    pub required_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub salary_range: Option<SalaryRange>,
    pub outlook: Option<Outlook>,
    pub growth_rate: Option<f64>,
    pub employment_rate: Option<EmploymentRate>,
    pub related_majors: Vec<String>,
    pub high_school_subjects: Vec<String>,
    /// Stage labels joined by `→`.
    pub career_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationSummary {
    pub code: String,
    pub name: String,
    pub growth: Option<Outlook>,
    pub field: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire shapes (seed data and WorkNet payloads)
// ────────────────────────────────────────────────────────────────────────────

/// Percentages arrive either as JSON numbers or as strings like "25%".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumeric {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOccupation {
    #[serde(alias = "job_code")]
    pub code: String,
    #[serde(alias = "job_name")]
    pub name: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_tasks: Vec<String>,
    #[serde(default)]
    pub required_education: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub outlook: Option<String>,
    #[serde(default)]
    pub growth_rate: Option<RawNumeric>,
    #[serde(default)]
    pub employment_rate: Option<RawNumeric>,
    #[serde(default)]
    pub related_majors: Vec<String>,
    #[serde(default)]
    pub high_school_subjects: Vec<String>,
    #[serde(default)]
    pub career_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSummary {
    #[serde(alias = "job_code")]
    pub code: String,
    #[serde(alias = "job_name")]
    pub name: String,
    #[serde(default, alias = "outlook")]
    pub growth: Option<String>,
    #[serde(default)]
    pub field: String,
}

impl From<RawOccupation> for OccupationRecord {
    fn from(raw: RawOccupation) -> Self {
        Self {
            code: raw.code.trim().to_string(),
            name: raw.name.trim().to_string(),
            field: raw.field,
            description: raw.description,
            main_tasks: raw.main_tasks,
            required_education: raw.required_education,
            required_skills: raw.required_skills,
            certifications: raw.certifications,
            salary_range: raw
                .salary_range
                .filter(|s| !s.trim().is_empty())
                .map(|s| SalaryRange::parse(&s)),
            outlook: raw.outlook.and_then(|s| s.parse().ok()),
            growth_rate: raw.growth_rate.and_then(parse_percentage),
            employment_rate: raw.employment_rate.and_then(parse_employment_rate),
            related_majors: raw.related_majors,
            high_school_subjects: raw.high_school_subjects,
            career_path: raw.career_path,
        }
    }
}

impl RawSummary {
    /// `default_field` fills in listings whose entries omit their field.
    pub fn into_summary(self, default_field: &str) -> OccupationSummary {
        let field = if self.field.trim().is_empty() {
            default_field.to_string()
        } else {
            self.field
        };
        OccupationSummary {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            growth: self.growth.and_then(|s| s.parse().ok()),
            field,
        }
    }
}

fn parse_percentage(value: RawNumeric) -> Option<f64> {
    match value {
        RawNumeric::Number(n) if n.is_finite() => Some(n),
        RawNumeric::Number(_) => None,
        RawNumeric::Text(text) => text
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite()),
    }
}

fn parse_employment_rate(value: RawNumeric) -> Option<EmploymentRate> {
    match value {
        RawNumeric::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            match parse_percentage(RawNumeric::Text(trimmed.to_string())) {
                Some(p) => Some(EmploymentRate::Percentage(p)),
                None => Some(EmploymentRate::Label(trimmed.to_string())),
            }
        }
        number => parse_percentage(number).map(EmploymentRate::Percentage),
    }
}
