use admissions::workflows::admissions::{AdmissionReport, ApplicantPool, Department};
use std::fmt::Write;

pub(crate) fn format_summary(report: &AdmissionReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Placed {} of {} applicants",
        report.total_placed, report.total_applicants
    );

    let _ = writeln!(out, "\nDepartment seats");
    for fill in &report.departments {
        let _ = writeln!(
            out,
            "- {}: {}/{} filled, {} remaining",
            fill.department, fill.filled, fill.capacity, fill.remaining
        );
    }

    let _ = writeln!(out, "\nPlacements by flow");
    for flow in &report.flows {
        if flow.by_department.is_empty() {
            let _ = writeln!(out, "- {}: none", flow.flow_label);
            continue;
        }
        let detail = flow
            .by_department
            .iter()
            .map(|(department, placed)| format!("{department} {placed}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "- {}: {} ({})", flow.flow_label, flow.placed, detail);
    }

    if report.unassigned.is_empty() {
        let _ = writeln!(out, "\nUnassigned applicants: none");
    } else {
        let _ = writeln!(out, "\nUnassigned applicants");
        for name in &report.unassigned {
            let _ = writeln!(out, "- {name}");
        }
    }

    out
}

pub(crate) fn format_ranking(pool: &ApplicantPool, department: Department) -> String {
    let mut out = String::new();
    for (position, entry) in pool.ranking(department).into_iter().enumerate() {
        if let Some(applicant) = pool.get(entry.index) {
            let _ = writeln!(
                out,
                "{}. {} {:.1}",
                position + 1,
                applicant.full_name(),
                entry.score
            );
        }
    }
    out
}
