use crate::core::{check_preconditions, print_gate_report, GateReport, Project};

/// Run the precondition gate and print the result
pub fn check_split(project: &Project, source: &str, output: &str) -> GateReport {
    let report = check_preconditions(project, source, output);
    print_gate_report(&report);
    report
}
