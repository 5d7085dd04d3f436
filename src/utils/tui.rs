//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use terminal_size::{terminal_size, Width};

use crate::extrapolate::CalibrationPoint;
use crate::pair_sum::available_variants;
use crate::result::{BruteForceTiming, ResultTable, SkippedDataset};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Human-readable duration with a unit picked from its magnitude.
pub fn format_seconds(seconds: f64) -> String {
    if seconds >= 1.0 {
        format!("{seconds:.3} s")
    } else if seconds >= 1e-3 {
        format!("{:.3} ms", seconds * 1e3)
    } else if seconds >= 1e-6 {
        format!("{:.3} µs", seconds * 1e6)
    } else {
        format!("{:.0} ns", seconds * 1e9)
    }
}

/// Brute-force cell: `~` marks an estimate, `n/a` a missing one.
pub fn format_brute_force(cell: &BruteForceTiming) -> String {
    match cell {
        BruteForceTiming::Measured(s) => format_seconds(*s),
        BruteForceTiming::Estimated { seconds, .. } => format!("~{}", format_seconds(*seconds)),
        BruteForceTiming::Unavailable => "n/a".to_string(),
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Pair-Sum Complexity Benchmark ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the strategies being compared
pub fn print_variants_box(cutoff: usize, target: i64) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let mut lines: Vec<String> = available_variants()
        .iter()
        .map(|v| format!("{:<14} {}", v.name, v.description))
        .collect();
    lines.push(format!("Cutoff: {cutoff}   Target: {target}"));

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (idx, line) in lines.iter().enumerate() {
        if idx + 1 == lines.len() {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Print the result table
pub fn print_results_table(table: &ResultTable) {
    if table.is_empty() {
        println!("  No datasets processed.");
        println!();
        return;
    }

    let table_width = get_term_width().saturating_sub(4).min(12 + 16 * 3 + 7 + 4);

    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:>12} {:>16} {:>16} {:>16} {:>7}",
        "Size", "Brute force", "Sort+pointers", "Hash table", "Found"
    );
    println!("  {}", "─".repeat(table_width));

    for row in table.rows() {
        println!(
            "  {:>12} {:>16} {:>16} {:>16} {:>7}",
            row.size,
            format_brute_force(&row.brute_force),
            format_seconds(row.sort_pointers_seconds),
            format_seconds(row.hash_table_seconds),
            if row.pair_found { "yes" } else { "no" }
        );
    }
    println!("  {}", "─".repeat(table_width));
    println!();
}

/// Print the calibration the estimates were based on
pub fn print_calibration(calibration: Option<&CalibrationPoint>) {
    match calibration {
        Some(point) => println!(
            "  ~ estimated as t(n) = {} * (n / {})²",
            format_seconds(point.reference_time),
            point.reference_size
        ),
        None => println!("  No brute-force measurement at or below the cutoff."),
    }
    println!();
}

/// Print datasets that were skipped, one per line with the reason
pub fn print_skipped(skipped: &[SkippedDataset]) {
    if skipped.is_empty() {
        return;
    }
    let width = get_term_width().saturating_sub(6);

    println!("  Skipped datasets:");
    for entry in skipped {
        let line = format!(
            "{} (size {}): {}",
            entry.label, entry.declared_size, entry.reason
        );
        println!("    {}", truncate(&line, width));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds_units() {
        assert_eq!(format_seconds(2.5), "2.500 s");
        assert_eq!(format_seconds(0.0125), "12.500 ms");
        assert_eq!(format_seconds(0.000_004), "4.000 µs");
        assert_eq!(format_seconds(0.000_000_5), "500 ns");
    }

    #[test]
    fn test_format_brute_force_marks_estimates() {
        let basis = CalibrationPoint::new(10, 1.0);
        assert_eq!(format_brute_force(&BruteForceTiming::Measured(1.0)), "1.000 s");
        assert_eq!(
            format_brute_force(&BruteForceTiming::Estimated { seconds: 4.0, basis }),
            "~4.000 s"
        );
        assert_eq!(format_brute_force(&BruteForceTiming::Unavailable), "n/a");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long line", 6), "a l...");
    }
}
