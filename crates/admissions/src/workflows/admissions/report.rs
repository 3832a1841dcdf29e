use serde::Serialize;

use super::domain::{Department, Flow};
use super::engine::AssignmentOutcome;
use super::pool::ApplicantPool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentFill {
    pub department: Department,
    pub filled: usize,
    pub capacity: usize,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowPlacementView {
    pub flow: Flow,
    pub flow_label: &'static str,
    pub placed: usize,
    pub by_department: Vec<(Department, usize)>,
}

/// Post-run summary of seats filled, per-flow placements, and who was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionReport {
    pub total_applicants: usize,
    pub total_placed: usize,
    pub departments: Vec<DepartmentFill>,
    pub flows: Vec<FlowPlacementView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unassigned: Vec<String>,
}

impl AdmissionReport {
    pub fn build(pool: &ApplicantPool, outcome: &AssignmentOutcome) -> Self {
        let departments = Department::ordered()
            .into_iter()
            .map(|department| {
                let filled = pool.assigned_count(department);
                DepartmentFill {
                    department,
                    filled,
                    capacity: outcome.capacity,
                    remaining: outcome.capacity.saturating_sub(filled),
                }
            })
            .collect::<Vec<_>>();

        let flows = outcome
            .flows
            .iter()
            .map(|flow_outcome| FlowPlacementView {
                flow: flow_outcome.flow,
                flow_label: flow_outcome.flow.label(),
                placed: flow_outcome.total(),
                by_department: Department::ordered()
                    .into_iter()
                    .map(|department| (department, flow_outcome.placed_in(department)))
                    .filter(|(_, placed)| *placed > 0)
                    .collect(),
            })
            .collect();

        let unassigned = pool
            .unassigned()
            .map(|applicant| applicant.full_name())
            .collect();

        Self {
            total_applicants: pool.len(),
            total_placed: departments.iter().map(|fill| fill.filled).sum(),
            departments,
            flows,
            unassigned,
        }
    }

    pub fn department(&self, department: Department) -> Option<&DepartmentFill> {
        self.departments
            .iter()
            .find(|fill| fill.department == department)
    }
}
