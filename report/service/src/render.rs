//! Renders the legend and build tables; the frontend does the printing.

use std::fmt::{Display, Write};

use buildwatch_report_model::report::ReportRow;

use crate::priority::PriorityIndex;

pub const RUNNING_TITLE: &str =
	"Running builds   (as they started, then priority+wait sort)";
pub const PENDING_TITLE: &str = "Pending builds   (priority then wait sort)";

/// One line per priority level, branches sorted by name.
pub fn render_legend(index: &PriorityIndex) -> String {
	let mut out = String::new();
	_ = writeln!(out, "Branch priorities:");
	for (priority, branches) in index.buckets() {
		if branches.is_empty() {
			continue;
		}
		let mut branches = branches.to_vec();
		branches.sort();
		_ = writeln!(out, "{} {}", priority, branches.join(", "));
	}
	out
}

/// The title, the column header and one line per row, most urgent first.
pub fn render_table(title: &str, mut rows: Vec<ReportRow>) -> String {
	let mut out = String::new();
	_ = writeln!(out, "{title}");
	write_row(
		&mut out,
		"Pri.",
		"Wait (s)",
		"Run (s)",
		"Branch",
		"Revision",
		"Builder name",
	);
	rows.sort();
	for row in &rows {
		write_row(
			&mut out,
			row.priority,
			row.wait_secs,
			row.run_secs,
			&row.branch,
			&row.revision,
			&row.builder,
		);
	}
	out
}

fn write_row(
	out: &mut String,
	priority: impl Display,
	wait: impl Display,
	run: impl Display,
	branch: &str,
	revision: &str,
	builder: &str,
) {
	_ = writeln!(
		out,
		"{priority:>4}  {wait:>10}  {run:>10}  {branch:<20}  {revision:<12}  {builder}"
	);
}
