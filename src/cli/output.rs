//! Output formatting for CLI

use crate::{gridworld::Action, q_learning::ActionValues, types::Position};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Format a ratio as a percentage with one decimal
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Lines describing one state's action values, e.g. `  up:      -0.190`
pub fn format_action_values(values: &ActionValues) -> Vec<String> {
    Action::ALL
        .iter()
        .map(|action| format!("  {:8} {:.3}", format!("{action}:"), values[action.index()]))
        .collect()
}

/// Print the action values of the given states
pub fn print_q_table_excerpt(rows: &[(Position, ActionValues)]) {
    for (state, values) in rows {
        println!("\nState {state}:");
        for line in format_action_values(values) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn action_value_lines_follow_table_order() {
        let lines = format_action_values(&[1.0, -0.5, 0.0, 42.125]);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  up:      1.000");
        assert_eq!(lines[3], "  right:   42.125");
    }
}
