//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{Driver, DriverRegistry};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        // Clamp width to avoid layout issues on very small or very large terminals
        (w as usize).clamp(40, 200)
    } else {
        80 // Safe default
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

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Permutation Distance Benchmarks ";
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

/// Print a small info box introducing a driver
pub fn print_driver_info_box(driver: &dyn Driver) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let name_line = format!("Driver: {}", driver.name());
    let desc_line = driver.description();

    let content_width = [name_line.len(), desc_line.len()]
        .iter()
        .cloned()
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(&name_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(desc_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: perm-bench [OPTIONS] [DRIVER] [DRIVER ARGS]");
    println!();
    println!("Options:");
    println!("  --list, -l        List all available drivers");
    println!("  --help, -h        Show this help message");
    println!("  --seed N          Random seed for reproducible runs (default: OS entropy)");
    println!("  --trials N        Sample pairs per sweep point (default: 100)");
    println!("  --min-len N       Smallest sequence length in the sweep (default: 256)");
    println!("  --max-len N       Largest sequence length in the sweep (default: 131072)");
    println!("  --alphabets LIST  Comma-separated alphabet sizes (default: 1,4,...,65536)");
    println!("  --warmup N        Sample pairs consumed by the warm-up phase (default: 10000)");
    println!();
    println!("Drivers:");
    println!("  compare           Time the two Kendall tau sequence distance variants");
    println!("  average [LENGTH] [SAMPLES]");
    println!("                    Average distances between random permutation pairs");
    println!("  table [LENGTH]    Distance table over all permutations of LENGTH");
    println!();
    println!("Examples:");
    println!("  perm-bench                       # Run all drivers");
    println!("  perm-bench compare               # Run only the timing sweep");
    println!("  perm-bench --seed 42 compare     # Reproducible sweep");
    println!("  perm-bench average 50 200        # Averages for length 50, 200 samples");
    println!("  perm-bench table 3               # Table over the 6 permutations of 3");
}

/// Print the list of available drivers
pub fn print_available_drivers(registry: &DriverRegistry) {
    println!("Available drivers:");
    println!();
    for driver in registry.all() {
        println!("  {:<10} - {}", driver.name(), driver.description());
    }
}
