use super::domain::{Applicant, Department, SubjectScores};

impl Department {
    /// Ranking score: the admission score or the mean of this department's
    /// subjects, whichever is higher.
    pub fn score(self, scores: &SubjectScores) -> f64 {
        let admission = scores.admission;
        match self {
            Department::Biotech => best_score(admission, &[scores.chemistry, scores.physics]),
            Department::Chemistry => best_score(admission, &[scores.chemistry]),
            Department::Engineering => {
                best_score(admission, &[scores.math, scores.computer_science])
            }
            Department::Mathematics => best_score(admission, &[scores.math]),
            Department::Physics => best_score(admission, &[scores.math, scores.physics]),
        }
    }
}

fn best_score(admission: f64, subjects: &[f64]) -> f64 {
    let mean = subjects.iter().sum::<f64>() / subjects.len() as f64;
    admission.max(mean)
}

/// Score an applicant earns when ranked by `department`.
pub fn relevant_score(applicant: &Applicant, department: Department) -> f64 {
    department.score(&applicant.scores)
}

impl Applicant {
    /// Score under the applicant's own placement, or zero while unassigned.
    pub fn placement_score(&self) -> f64 {
        self.department()
            .map(|department| relevant_score(self, department))
            .unwrap_or(0.0)
    }
}
