// Aggregation Layer
// Flattens, joins and projects catalog records for display. Every operation is a
// pure function of its inputs and the catalog; absent codes are skipped or yield None.

pub mod career_path;
pub mod comparison;
pub mod education;
pub mod handlers;
pub mod insights;

pub use career_path::{project_career_path, CareerPathProjection};
pub use comparison::{compare_occupations, ComparisonRow};
pub use education::{project_education_mapping, EducationMapping};
pub use insights::{comparison_scores, industry_overview, salary_distribution, skill_profile};
