use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{EmploymentRate, OccupationRecord, Outlook, SalaryRange};

/// One row of the side-by-side comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub code: String,
    pub name: String,
    pub field: String,
    pub required_education: String,
    pub salary_range: Option<SalaryRange>,
    pub outlook: Option<Outlook>,
    pub growth_rate: Option<f64>,
    pub employment_rate: Option<EmploymentRate>,
}

impl From<&OccupationRecord> for ComparisonRow {
    fn from(record: &OccupationRecord) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
            field: record.field.clone(),
            required_education: record.required_education.clone(),
            salary_range: record.salary_range.clone(),
            outlook: record.outlook,
            growth_rate: record.growth_rate,
            employment_rate: record.employment_rate.clone(),
        }
    }
}

/// One row per resolvable code, in input order. Unknown codes are skipped.
pub async fn compare_occupations(catalog: &Catalog, codes: &[String]) -> Vec<ComparisonRow> {
    let mut rows = Vec::with_capacity(codes.len());
    for code in codes {
        if let Some(record) = catalog.get_by_code(code).await {
            rows.push(ComparisonRow::from(&record));
        }
    }
    rows
}
