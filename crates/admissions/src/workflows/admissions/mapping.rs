//! CSV export of the final applicant-to-department mapping.

use std::io::Write;

use serde::Serialize;

use super::domain::{Applicant, Department, Flow, Placement};
use super::pool::ApplicantPool;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingRow {
    pub first_name: String,
    pub last_name: String,
    pub department: Option<Department>,
    pub flow: Option<Flow>,
    #[serde(serialize_with = "one_decimal")]
    pub score: f64,
}

impl From<&Applicant> for MappingRow {
    fn from(applicant: &Applicant) -> Self {
        let (department, flow) = match applicant.placement() {
            Placement::Assigned { department, flow } => (Some(department), Some(flow)),
            Placement::Unassigned => (None, None),
        };

        Self {
            first_name: applicant.first_name.clone(),
            last_name: applicant.last_name.clone(),
            department,
            flow,
            score: applicant.placement_score(),
        }
    }
}

/// Writes one row per applicant in storage order, with a header row.
pub fn write_mapping_csv<W: Write>(pool: &ApplicantPool, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for applicant in pool.applicants() {
        csv_writer.serialize(MappingRow::from(applicant))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn one_decimal<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("{value:.1}"))
}
