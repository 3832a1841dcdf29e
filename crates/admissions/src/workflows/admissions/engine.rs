use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use super::domain::{Department, Flow};
use super::pool::ApplicantPool;

/// Places applicants over three preference flows under a per-department cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentEngine {
    capacity: usize,
}

impl AssignmentEngine {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds an engine from an unvalidated capacity. Negative values admit nobody.
    pub fn from_requested(requested: i64) -> Self {
        Self::new(usize::try_from(requested).unwrap_or(0))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Runs every flow in order against `pool` and reports what each flow placed.
    pub fn assign(&self, pool: &mut ApplicantPool) -> AssignmentOutcome {
        let mut outcome = AssignmentOutcome {
            capacity: self.capacity,
            flows: Vec::with_capacity(Flow::ordered().len()),
        };

        for flow in Flow::ordered() {
            let flow_outcome = self.run_flow(pool, flow);
            info!(
                flow = flow.label(),
                placed = flow_outcome.total(),
                "preference flow complete"
            );
            outcome.flows.push(flow_outcome);
        }

        outcome
    }

    fn run_flow(&self, pool: &mut ApplicantPool, flow: Flow) -> FlowOutcome {
        let mut placements = BTreeMap::new();

        for department in Department::ordered() {
            let placed = self.fill_department(pool, department, flow);
            placements.insert(department, placed);
        }

        FlowOutcome { flow, placements }
    }

    /// Walks the full ranking for `department`, placing unassigned applicants who
    /// list it at `flow` until the department is full.
    fn fill_department(
        &self,
        pool: &mut ApplicantPool,
        department: Department,
        flow: Flow,
    ) -> usize {
        let mut filled = pool.assigned_count(department);
        let mut placed = 0;

        for entry in pool.ranking(department) {
            if filled >= self.capacity {
                break;
            }

            let eligible = pool.get(entry.index).is_some_and(|applicant| {
                applicant.preferences.at(flow) == department && applicant.is_unassigned()
            });
            if !eligible {
                continue;
            }

            if pool.place(entry.index, department, flow) {
                filled += 1;
                placed += 1;
                if let Some(applicant) = pool.get(entry.index) {
                    debug!(
                        applicant = %applicant.full_name(),
                        %department,
                        flow = flow.label(),
                        score = entry.score,
                        "applicant placed"
                    );
                }
            }
        }

        placed
    }
}

/// Placement counts for a single flow, keyed by department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowOutcome {
    pub flow: Flow,
    pub placements: BTreeMap<Department, usize>,
}

impl FlowOutcome {
    pub fn total(&self) -> usize {
        self.placements.values().sum()
    }

    pub fn placed_in(&self, department: Department) -> usize {
        self.placements.get(&department).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentOutcome {
    pub capacity: usize,
    pub flows: Vec<FlowOutcome>,
}

impl AssignmentOutcome {
    pub fn total_placed(&self) -> usize {
        self.flows.iter().map(FlowOutcome::total).sum()
    }

    pub fn flow(&self, flow: Flow) -> Option<&FlowOutcome> {
        self.flows.iter().find(|outcome| outcome.flow == flow)
    }
}
