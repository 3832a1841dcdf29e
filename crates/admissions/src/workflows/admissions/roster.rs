use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::domain::Department;
use super::pool::ApplicantPool;

/// One roster entry, rendered as `"<first> <last> <score to one decimal>"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterLine {
    pub full_name: String,
    pub score: f64,
}

impl fmt::Display for RosterLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.1}", self.full_name, self.score)
    }
}

/// Applicants placed in a department, in the department's ranking order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    pub department: Department,
    pub lines: Vec<RosterLine>,
}

impl Roster {
    pub fn for_department(pool: &ApplicantPool, department: Department) -> Self {
        let lines = pool
            .ranking(department)
            .into_iter()
            .filter_map(|entry| pool.get(entry.index))
            .filter(|applicant| applicant.department() == Some(department))
            .map(|applicant| RosterLine {
                full_name: applicant.full_name(),
                score: applicant.placement_score(),
            })
            .collect();

        Self { department, lines }
    }

    /// Rosters for every department in placement order.
    pub fn all(pool: &ApplicantPool) -> Vec<Self> {
        Department::ordered()
            .into_iter()
            .map(|department| Self::for_department(pool, department))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

/// Writes department rosters as `<department>.txt` files into one directory.
#[derive(Debug, Clone)]
pub struct RosterWriter {
    output_dir: PathBuf,
}

impl RosterWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, department: Department) -> PathBuf {
        self.output_dir.join(department.roster_file_name())
    }

    /// Writes all five rosters in department order, stopping at the first failure.
    /// Rosters written before the failure stay on disk.
    pub fn write_all(&self, pool: &ApplicantPool) -> Result<Vec<PathBuf>, RosterError> {
        Roster::all(pool)
            .iter()
            .map(|roster| self.write(roster))
            .collect()
    }

    pub fn write(&self, roster: &Roster) -> Result<PathBuf, RosterError> {
        let path = self.path_for(roster.department);
        let file = File::create(&path).map_err(|source| RosterError::Create {
            path: path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        roster
            .write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|source| RosterError::Write {
                path: path.clone(),
                source,
            })?;

        info!(
            department = %roster.department,
            admitted = roster.len(),
            path = %path.display(),
            "roster written"
        );
        Ok(path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("cannot create roster file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed writing roster file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
