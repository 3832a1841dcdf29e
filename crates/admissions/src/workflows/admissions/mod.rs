//! Department placement for a batch of university applicants.
//!
//! Applicants are ranked per department by a department-specific score and placed
//! over three preference flows, each flow honouring one position of every
//! applicant's preference list. Rosters and reports are read-only views over the
//! placed pool.

pub mod domain;
mod engine;
pub mod mapping;
mod pool;
pub mod report;
pub mod roster;
mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, Department, Flow, Placement, Preferences, SubjectScores, UnknownDepartment,
};
pub use engine::{AssignmentEngine, AssignmentOutcome, FlowOutcome};
pub use mapping::{write_mapping_csv, MappingRow};
pub use pool::{ApplicantPool, RankEntry};
pub use report::{AdmissionReport, DepartmentFill, FlowPlacementView};
pub use roster::{Roster, RosterError, RosterLine, RosterWriter};
pub use scoring::relevant_score;
