//! Interactive password strength meter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use console::{Color, style};
use inquire::{InquireError, Password, PasswordDisplayMode, Select};
use pwd_meter::{
    ConfigError, PasswordReport, PasswordStrength, assess_password, generate_strong_password,
    generated_length, parse_length,
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const BAR_CELLS: usize = 20;

const MENU_CHECK: &str = "Check a password";
const MENU_GENERATE: &str = "Generate strong password";
const MENU_QUIT: &str = "Quit";

/// Password strength meter
#[derive(Parser, Debug)]
#[command(name = "pwd-meter")]
#[command(about = "Check password strength and generate strong passwords")]
#[command(version)]
struct Args {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Command to execute; opens the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check passwords until an empty entry
    Check,

    /// Print a suggested strong password
    Generate {
        /// Password length (default: PWD_METER_LENGTH or 14)
        #[arg(short, long, value_parser = parse_length)]
        length: Option<usize>,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] InquireError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let result = match args.command {
        None => run_menu(),
        Some(Command::Check) => check_loop(),
        Some(Command::Generate { length }) => print_generated(length),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{} {}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_menu() -> Result<(), CliError> {
    println!("{}", style("Password Strength Meter").bold());
    println!("Enter your password below to check its security level.\n");

    loop {
        let choice = match Select::new(
            "What would you like to do?",
            vec![MENU_CHECK, MENU_GENERATE, MENU_QUIT],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match choice {
            MENU_CHECK => check_loop()?,
            MENU_GENERATE => print_generated(None)?,
            _ => return Ok(()),
        }
    }
}

/// Prompts repeatedly; an empty entry or Esc returns to the caller.
fn check_loop() -> Result<(), CliError> {
    loop {
        let input = Password::new("Enter your password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .with_help_message("Leave empty to go back")
            .prompt();

        let password = match input {
            Ok(raw) => SecretString::new(raw.into()),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if password.expose_secret().is_empty() {
            return Ok(());
        }

        render_report(&assess_password(&password));
    }
}

fn print_generated(length: Option<usize>) -> Result<(), CliError> {
    let length = match length {
        Some(length) => length,
        None => generated_length()?,
    };
    let password = generate_strong_password(length);
    println!(
        "Suggested Strong Password: {}",
        style(password.expose_secret()).bold()
    );
    Ok(())
}

fn strength_color(strength: PasswordStrength) -> Color {
    match strength {
        PasswordStrength::Weak => Color::Red,
        PasswordStrength::Moderate => Color::Color256(208),
        PasswordStrength::Strong => Color::Yellow,
        PasswordStrength::VeryStrong => Color::Green,
    }
}

fn render_report(report: &PasswordReport) {
    let evaluation = &report.evaluation;
    let strength = evaluation.strength();
    let color = strength_color(strength);

    let filled = BAR_CELLS * usize::from(evaluation.score.percent()) / 100;
    let bar = format!(
        "{}{}",
        style("█".repeat(filled)).fg(color),
        "░".repeat(BAR_CELLS - filled)
    );

    println!();
    println!("{} {}", bar, style(strength.label()).fg(color).bold());
    println!("Estimated Time to Crack: {}", report.crack_time);

    if evaluation.is_perfect() {
        println!(
            "{}",
            style("Congrats! You created a super secure password!").green()
        );
    }

    if !evaluation.feedback.is_empty() {
        println!("{}", style("Improve Your Password").bold());
        for item in &evaluation.feedback {
            println!("  - {}", item);
        }
    }
    println!();
}
