//! Terminal rendering of the aggregate report.

use colored::Colorize;

use crate::scenario::{Outcome, ReconReport};

/// Render the report as the teacher-friendly text block consumed by the
/// surrounding harness: one header, one result line, one line per
/// scenario with indented diagnostics.
pub fn render_recon_text(report: &ReconReport) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "recon src={} dst={}",
        report.src_cloud, report.dst_cloud
    ));
    out.push(format!(
        "result pass={} passed={} failed={} errors={}",
        report.pass, report.passed, report.failed, report.errors
    ));
    out.push("scenarios".to_string());
    for verdict in &report.verdicts {
        let state = match verdict.outcome {
            Outcome::Pass => "PASS".green(),
            Outcome::Fail => "FAIL".red(),
            Outcome::Error => "ERROR".yellow(),
        };
        out.push(format!("- [{state}] {}", verdict.scenario));
        for diagnostic in &verdict.diagnostics {
            out.push(format!("    {diagnostic}"));
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_recon_text;
    use crate::scenario::{Outcome, ReconReport, Verdict};

    #[test]
    fn lists_diagnostics_under_their_scenario() {
        let report = ReconReport {
            src_cloud: "src".to_string(),
            dst_cloud: "dst".to_string(),
            passed: 1,
            failed: 1,
            errors: 0,
            pass: false,
            verdicts: vec![
                Verdict {
                    scenario: "networks.name".to_string(),
                    outcome: Outcome::Pass,
                    diagnostics: Vec::new(),
                },
                Verdict {
                    scenario: "floating_ips.migrated".to_string(),
                    outcome: Outcome::Fail,
                    diagnostics: vec!["floating ip 5.6.7.8 did not migrate".to_string()],
                },
            ],
        };

        let text = render_recon_text(&report);
        assert!(text.contains("result pass=false passed=1 failed=1 errors=0"));
        assert!(text.contains("floating_ips.migrated"));
        assert!(text.contains("    floating ip 5.6.7.8 did not migrate"));
    }
}
