mod capacity;
mod parser;

use crate::workflows::admissions::ApplicantPool;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

pub use capacity::{read_capacity, CapacityError};
pub use parser::LineError;

#[derive(Debug)]
pub enum ApplicantImportError {
    Open { path: PathBuf, source: std::io::Error },
    Read(std::io::Error),
    Line { line_number: usize, source: LineError },
}

impl std::fmt::Display for ApplicantImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicantImportError::Open { path, source } => write!(
                f,
                "failed to open applicant file {}: {}",
                path.display(),
                source
            ),
            ApplicantImportError::Read(err) => write!(f, "failed to read applicant data: {}", err),
            ApplicantImportError::Line {
                line_number,
                source,
            } => write!(f, "invalid applicant record on line {}: {}", line_number, source),
        }
    }
}

impl std::error::Error for ApplicantImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApplicantImportError::Open { source, .. } => Some(source),
            ApplicantImportError::Read(err) => Some(err),
            ApplicantImportError::Line { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ApplicantImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Read(err)
    }
}

/// Loads the applicant pool from the line-oriented applicant file.
///
/// The first malformed line aborts the whole import; nothing read before it is kept.
pub struct ApplicantImporter;

impl ApplicantImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ApplicantPool, ApplicantImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ApplicantImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let pool = Self::from_reader(file)?;
        info!(path = %path.display(), applicants = pool.len(), "applicant file loaded");
        Ok(pool)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ApplicantPool, ApplicantImportError> {
        let mut applicants = Vec::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let applicant =
                parser::parse_line(&line).map_err(|source| ApplicantImportError::Line {
                    line_number: index + 1,
                    source,
                })?;
            applicants.push(applicant);
        }

        Ok(ApplicantPool::new(applicants))
    }
}
