//! Statistics reporting.

use console::style;

use crate::intake::IntakeState;

/// Print the end-of-run summary.
pub fn print_intake_stats(state: &IntakeState) {
    println!();
    println!("{}", style("─".repeat(40)).dim());
    println!("{}", style("Run summary:").bold());

    if let Some(folder) = &state.allocated_folder {
        println!("  Allocated folder:  {}", folder.display());
        println!("  Subfolders created: {}", state.created_subfolders.len());
    }

    if state.messages_examined > 0 {
        println!("  Mail items examined: {}", state.messages_examined);
        println!("  Saved code files:    {}", state.saved_count);
        println!("  Skipped (no prefix): {}", state.skipped_no_prefix);
        println!("  Skipped (extension): {}", state.skipped_extension);
        println!("  Skipped total:       {}", state.total_skipped());
        if state.failed_count > 0 {
            println!(
                "  Failed to save:      {}",
                style(state.failed_count).red()
            );
        }
    }

    println!("{}", style("─".repeat(40)).dim());
}
