pub mod admissions;
pub mod intake;
