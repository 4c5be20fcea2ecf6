//! Seed data shipped with the binary. This is the sample tier of the catalog and
//! the answer of last resort when the live source fails.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{MajorRecord, OccupationRecord, OccupationSummary, RawOccupation, RawSummary};

const OCCUPATIONS_JSON: &str = include_str!("../../data/occupations.json");
const FIELDS_JSON: &str = include_str!("../../data/fields.json");
const MAJORS_JSON: &str = include_str!("../../data/majors.json");

#[derive(Debug, Deserialize)]
struct RawFieldListing {
    field: String,
    #[serde(default)]
    source_label: Option<String>,
    #[serde(default)]
    jobs: Vec<RawSummary>,
}

/// One industry field and its occupations, in listing order.
#[derive(Debug, Clone)]
pub struct FieldListing {
    pub field: String,
    /// The live source's name for this field ("AI/빅데이터").
    pub source_label: String,
    pub occupations: Vec<OccupationSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct SampleData {
    occupations: HashMap<String, OccupationRecord>,
    fields: Vec<FieldListing>,
    majors: HashMap<String, MajorRecord>,
}

impl SampleData {
    /// Decodes the embedded seed files.
    pub fn load() -> Result<Self> {
        let occupations: Vec<RawOccupation> =
            serde_json::from_str(OCCUPATIONS_JSON).context("Failed to decode occupations.json")?;
        let fields: Vec<RawFieldListing> =
            serde_json::from_str(FIELDS_JSON).context("Failed to decode fields.json")?;
        let majors: Vec<MajorRecord> =
            serde_json::from_str(MAJORS_JSON).context("Failed to decode majors.json")?;

        let fields = fields
            .into_iter()
            .map(|listing| FieldListing {
                occupations: listing
                    .jobs
                    .into_iter()
                    .map(|raw| raw.into_summary(&listing.field))
                    .collect(),
                source_label: listing.source_label.unwrap_or_else(|| listing.field.clone()),
                field: listing.field,
            })
            .collect();

        Self::from_parts(
            occupations.into_iter().map(OccupationRecord::from).collect(),
            fields,
            majors,
        )
    }

    /// Builds sample data from already-typed parts. Rejects duplicate codes and
    /// duplicate field names.
    pub fn from_parts(
        occupations: Vec<OccupationRecord>,
        fields: Vec<FieldListing>,
        majors: Vec<MajorRecord>,
    ) -> Result<Self> {
        let mut by_code = HashMap::with_capacity(occupations.len());
        for record in occupations {
            if by_code.contains_key(&record.code) {
                bail!("Duplicate occupation code '{}' in seed data", record.code);
            }
            by_code.insert(record.code.clone(), record);
        }

        for (i, listing) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.field == listing.field) {
                bail!("Duplicate industry field '{}' in seed data", listing.field);
            }
        }

        let majors = majors.into_iter().map(|m| (m.code.clone(), m)).collect();

        Ok(Self {
            occupations: by_code,
            fields,
            majors,
        })
    }

    pub fn occupation(&self, code: &str) -> Option<&OccupationRecord> {
        self.occupations.get(code)
    }

    /// `None` when the field is not one of the catalog's fields.
    pub fn listing(&self, field: &str) -> Option<&[OccupationSummary]> {
        self.fields
            .iter()
            .find(|listing| listing.field == field)
            .map(|listing| listing.occupations.as_slice())
    }

    /// The live source's label for a catalog field.
    pub fn source_label(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|listing| listing.field == field)
            .map(|listing| listing.source_label.as_str())
    }

    /// Maps a live-source label (or a catalog field name) back to the catalog field.
    pub fn field_for_label(&self, label: &str) -> Option<&str> {
        let label = label.trim();
        self.fields
            .iter()
            .find(|listing| listing.source_label == label || listing.field == label)
            .map(|listing| listing.field.as_str())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|listing| listing.field.as_str())
    }

    pub fn major(&self, code: &str) -> Option<&MajorRecord> {
        self.majors.get(code)
    }
}
