//! Terminal (pretty-print) report generation

use super::{cell, SuiteReport, TestReport};
use crate::pipeline::OovReport;

const WIDTH: usize = 58;

pub struct TerminalReporter;

impl TerminalReporter {
    pub fn print(report: &TestReport) {
        print!("{}", Self::render(report));
    }

    pub fn print_suite(report: &SuiteReport) {
        print!("{}", Self::render_suite(report));
    }

    pub fn print_oov(reports: &[OovReport]) {
        print!("{}", Self::render_oov(reports));
    }

    pub fn render(report: &TestReport) -> String {
        let outcome = &report.outcome;
        let diagnostics = &outcome.diagnostics;
        let mut lines = vec![
            format!("Test:           {}", report.test_id),
            format!("Similarity:     {}", diagnostics.similarity),
            format!("Statistic:      {:.6}", outcome.test_statistic),
            format!("Effect size:    {:.6}", outcome.effect_size),
            format!("p-value:        {:.6}", outcome.p_value),
            format!(
                "Partitions:     {} of {} ({})",
                diagnostics.evaluated_partitions, diagnostics.total_partitions, diagnostics.mode
            ),
            format!(
                "Group sizes:    {} targets, {} attributes",
                diagnostics.target_size, diagnostics.attribute_size
            ),
            format!("Warning:        {}", outcome.warning_code()),
        ];
        lines.extend(outcome.warnings.iter().map(|w| format!("  - {}", w)));
        boxed("WEAT Result", &lines)
    }

    pub fn render_suite(report: &SuiteReport) -> String {
        let lines: Vec<String> = report
            .rows
            .iter()
            .map(|row| match &row.error {
                Some(error) => format!("{:<20} ERROR {}", row.test_id, error),
                None => format!(
                    "{:<20} d={:>8} p={:>7}",
                    row.test_id,
                    cell(row.effect_size),
                    cell(row.p_value)
                ),
            })
            .collect();
        boxed(
            &format!("Suite {} ({} failed)", report.suite, report.failed()),
            &lines,
        )
    }

    pub fn render_oov(reports: &[OovReport]) -> String {
        let lines: Vec<String> = reports
            .iter()
            .map(|r| {
                format!(
                    "{:<20} {:>5.1}% ({} of {})",
                    r.test_id,
                    r.percentage(),
                    r.oov_words.len(),
                    r.distinct_words
                )
            })
            .collect();
        boxed("Out-of-vocabulary words", &lines)
    }
}

fn boxed(title: &str, lines: &[String]) -> String {
    let rule = "─".repeat(WIDTH);
    let mut out = String::new();
    out.push_str(&format!("\n┌{}┐\n", rule));
    out.push_str(&format!("│ {:<w$} │\n", title, w = WIDTH - 2));
    out.push_str(&format!("├{}┤\n", rule));
    for line in lines {
        out.push_str(&format!("│  {:<w$}│\n", line, w = WIDTH - 2));
    }
    out.push_str(&format!("└{}┘\n", rule));
    out
}
