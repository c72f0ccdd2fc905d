//! doc-intake - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use doc_intake::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    intake::{allocate_folder, fetch_attachments, IntakeState},
    mail::DropDirSource,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_intake_stats,
        print_warning,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(state) if state.failed_count > 0 => {
            print_error(&format!(
                "{} attachment(s) failed to save",
                state.failed_count
            ));
            ExitCode::from(exit_codes::SOME_ITEMS_FAILED as u8)
        }
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::BaseNotFound(_) => ExitCode::from(exit_codes::FOLDER_ERROR as u8),
                Error::MailSource(_) => ExitCode::from(exit_codes::FETCH_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<IntakeState> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let mode = config.options.mode;
    print_config_summary(
        &mode.to_string(),
        config
            .folders
            .base_directory
            .as_ref()
            .map(|p| p.display().to_string())
            .as_deref(),
        config
            .mail
            .drop_directory
            .as_ref()
            .map(|p| p.display().to_string())
            .as_deref(),
    );

    let mut state = IntakeState::new();

    // Allocate the next transmittal folder
    let allocated = if mode.allocates() {
        Some(allocate_folder(&config, &mut state)?)
    } else {
        None
    };

    // Fetch attachments from the mail source
    if mode.fetches() {
        let dest = match &allocated {
            Some(folder) => folder.join(&config.options.attachment_subfolder),
            None => config.save_directory(),
        };

        // Validated above: drop_directory is set for fetching modes.
        let drop = config
            .mail
            .drop_directory
            .clone()
            .ok_or_else(|| Error::MissingConfig("mail.drop_directory".to_string()))?;
        let source = DropDirSource::new(drop);

        fetch_attachments(&source, &config, &dest, &mut state)?;
    }

    print_intake_stats(&state);

    Ok(state)
}
