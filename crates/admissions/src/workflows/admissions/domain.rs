use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic departments accepting applicants, in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Biotech,
    Chemistry,
    Engineering,
    Mathematics,
    Physics,
}

impl Department {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Biotech,
            Self::Chemistry,
            Self::Engineering,
            Self::Mathematics,
            Self::Physics,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Biotech => "Biotech",
            Self::Chemistry => "Chemistry",
            Self::Engineering => "Engineering",
            Self::Mathematics => "Mathematics",
            Self::Physics => "Physics",
        }
    }

    pub const fn roster_file_name(self) -> &'static str {
        match self {
            Self::Biotech => "biotech.txt",
            Self::Chemistry => "chemistry.txt",
            Self::Engineering => "engineering.txt",
            Self::Mathematics => "mathematics.txt",
            Self::Physics => "physics.txt",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|department| department.label() == value)
            .ok_or_else(|| UnknownDepartment(value.to_string()))
    }
}

/// Raised when a department name does not match one of the known labels exactly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department '{0}' (expected Biotech, Chemistry, Engineering, Mathematics or Physics)")]
pub struct UnknownDepartment(pub String);

/// Preference round. Each flow consults one position of every preference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    First,
    Second,
    Third,
}

impl Flow {
    pub const fn ordered() -> [Self; 3] {
        [Self::First, Self::Second, Self::Third]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "first choice",
            Self::Second => "second choice",
            Self::Third => "third choice",
        }
    }
}

/// Exactly three departments, most preferred first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences([Department; 3]);

impl Preferences {
    pub const fn new(first: Department, second: Department, third: Department) -> Self {
        Self([first, second, third])
    }

    pub const fn at(&self, flow: Flow) -> Department {
        self.0[flow.index()]
    }

    pub fn contains(&self, department: Department) -> bool {
        self.0.contains(&department)
    }

    pub fn as_slice(&self) -> &[Department] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubjectScores {
    pub physics: f64,
    pub chemistry: f64,
    pub math: f64,
    pub computer_science: f64,
    pub admission: f64,
}

/// Placement state. `Assigned` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Placement {
    #[default]
    Unassigned,
    Assigned { department: Department, flow: Flow },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub first_name: String,
    pub last_name: String,
    pub scores: SubjectScores,
    pub preferences: Preferences,
    placement: Placement,
}

impl Applicant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        scores: SubjectScores,
        preferences: Preferences,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            scores,
            preferences,
            placement: Placement::Unassigned,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn department(&self) -> Option<Department> {
        match self.placement {
            Placement::Assigned { department, .. } => Some(department),
            Placement::Unassigned => None,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.placement == Placement::Unassigned
    }

    /// Records the placement unless one already exists. Returns whether it took.
    pub(crate) fn place(&mut self, department: Department, flow: Flow) -> bool {
        if !self.is_unassigned() {
            return false;
        }
        self.placement = Placement::Assigned { department, flow };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_names_round_trip_through_labels() {
        for department in Department::ordered() {
            assert_eq!(department.label().parse::<Department>(), Ok(department));
            assert_eq!(
                department.roster_file_name(),
                format!("{}.txt", department.label().to_lowercase())
            );
        }
        assert!("biotech".parse::<Department>().is_err());
    }

    #[test]
    fn placement_is_never_overwritten() {
        let mut applicant = Applicant::new(
            "Jane",
            "Doe",
            SubjectScores {
                physics: 1.0,
                chemistry: 1.0,
                math: 1.0,
                computer_science: 1.0,
                admission: 1.0,
            },
            Preferences::new(Department::Physics, Department::Biotech, Department::Chemistry),
        );

        assert!(applicant.place(Department::Physics, Flow::First));
        assert!(!applicant.place(Department::Biotech, Flow::Second));
        assert_eq!(applicant.department(), Some(Department::Physics));
    }
}
