use super::common::*;
use crate::workflows::admissions::domain::Flow;
use crate::workflows::admissions::{AdmissionReport, ApplicantPool, AssignmentEngine};

#[test]
fn report_tracks_fill_levels_flows_and_unassigned() {
    let mut pool = ApplicantPool::new(vec![
        flat("Xavier Bio", 90.0, [Biotech, Mathematics, Engineering]),
        flat("Yvonne Chem", 90.0, [Chemistry, Mathematics, Engineering]),
        flat("Zoe Phys", 90.0, [Physics, Mathematics, Engineering]),
        flat("Walt Late", 10.0, [Biotech, Chemistry, Physics]),
        flat("Vera Second", 50.0, [Physics, Engineering, Biotech]),
    ]);

    let outcome = AssignmentEngine::new(1).assign(&mut pool);
    let report = AdmissionReport::build(&pool, &outcome);

    assert_eq!(report.total_applicants, 5);
    assert_eq!(report.total_placed, 4);
    assert_eq!(report.unassigned, vec!["Walt Late".to_string()]);

    let physics = report.department(Physics).expect("physics entry");
    assert_eq!((physics.filled, physics.capacity, physics.remaining), (1, 1, 0));
    let mathematics = report.department(Mathematics).expect("mathematics entry");
    assert_eq!(mathematics.remaining, 1);

    assert_eq!(report.flows.len(), 3);
    assert_eq!(report.flows[0].flow, Flow::First);
    assert_eq!(report.flows[0].placed, 3);
    assert_eq!(report.flows[1].by_department, vec![(Engineering, 1)]);
    assert_eq!(report.flows[2].placed, 0);
}

#[test]
fn report_serializes_to_json() {
    let mut pool = sample_pool();
    let outcome = AssignmentEngine::new(0).assign(&mut pool);
    let report = AdmissionReport::build(&pool, &outcome);

    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["total_placed"], 0);
    assert_eq!(value["departments"][0]["department"], "Biotech");
    assert_eq!(value["flows"][1]["flow"], "second");
    assert_eq!(
        value["unassigned"].as_array().map(Vec::len),
        Some(pool.len())
    );
}
