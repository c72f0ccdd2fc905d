//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     doc-intake                                        ║
║     Transmittal folder and attachment automation      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(mode: &str, base_dir: Option<&str>, drop_dir: Option<&str>) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Mode: {}", mode);
    if let Some(base) = base_dir {
        println!("  Base directory: {}", base);
    }
    if let Some(drop) = drop_dir {
        println!("  Mail drop: {}", drop);
    }
    println!();
}
