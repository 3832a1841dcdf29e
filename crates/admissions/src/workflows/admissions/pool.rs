use std::cmp::Ordering;

use serde::Serialize;

use super::domain::{Applicant, Department, Flow};
use super::scoring::relevant_score;

/// Every applicant in the batch, in load order.
///
/// Storage order never changes; rankings are index views over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplicantPool {
    applicants: Vec<Applicant>,
}

/// Position of an applicant within a department ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankEntry {
    pub index: usize,
    pub score: f64,
}

impl ApplicantPool {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        Self { applicants }
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn get(&self, index: usize) -> Option<&Applicant> {
        self.applicants.get(index)
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    /// The whole pool ordered by `department`'s score, highest first, with exact
    /// score ties broken by full name ascending.
    pub fn ranking(&self, department: Department) -> Vec<RankEntry> {
        let mut keyed: Vec<(RankEntry, String)> = self
            .applicants
            .iter()
            .enumerate()
            .map(|(index, applicant)| {
                let entry = RankEntry {
                    index,
                    score: relevant_score(applicant, department),
                };
                (entry, applicant.full_name())
            })
            .collect();

        keyed.sort_by(|(left, left_name), (right, right_name)| {
            rank_order(left.score, left_name, right.score, right_name)
        });

        keyed.into_iter().map(|(entry, _)| entry).collect()
    }

    pub fn assigned_count(&self, department: Department) -> usize {
        self.applicants
            .iter()
            .filter(|applicant| applicant.department() == Some(department))
            .count()
    }

    pub fn unassigned(&self) -> impl Iterator<Item = &Applicant> + '_ {
        self.applicants
            .iter()
            .filter(|applicant| applicant.is_unassigned())
    }

    pub(crate) fn place(&mut self, index: usize, department: Department, flow: Flow) -> bool {
        self.applicants
            .get_mut(index)
            .map(|applicant| applicant.place(department, flow))
            .unwrap_or(false)
    }
}

impl From<Vec<Applicant>> for ApplicantPool {
    fn from(applicants: Vec<Applicant>) -> Self {
        Self::new(applicants)
    }
}

fn rank_order(left_score: f64, left_name: &str, right_score: f64, right_name: &str) -> Ordering {
    if left_score != right_score {
        return right_score
            .partial_cmp(&left_score)
            .unwrap_or(Ordering::Equal);
    }
    left_name.cmp(right_name)
}
