//! jobtailor: tailor a bilingual CV and cover letter to a job posting

use clap::Parser;
use jobtailor::cli::{self, Cli, Commands, ConfigAction, SignalsFormat};
use jobtailor::generate::{rank_profile, GenerateRequest, Generator};
use jobtailor::input::InputManager;
use jobtailor::matching::MatchingEngine;
use jobtailor::output::{renderer_for, ConsoleFormatter};
use jobtailor::profile::load_cv_master;
use jobtailor::{Config, JobTailorError, Result};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Reset and path never read the stored file
    if let Commands::Config { action: Some(action @ (ConfigAction::Reset | ConfigAction::Path)) } = &cli.command {
        if let Err(e) = run_config_action(action, &config_path) {
            error!("Command failed: {}", e);
            process::exit(1);
        }
        return;
    }

    // Load configuration
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_config_action(action: &ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Reset => {
            println!("🔄 Resetting configuration to defaults...");
            Config::reset(config_path)?;
            println!("✅ Configuration reset successfully!");
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
        ConfigAction::Show => {
            let config = Config::load_from(config_path)?;
            println!("⚙️  Current Configuration ({})\n", config_path.display());
            println!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

fn check_job_text(path: &Path) -> Result<()> {
    if path.extension().is_some() {
        cli::validate_file_extension(path, cli::JOB_TEXT_EXTENSIONS)
            .map_err(|e| JobTailorError::InvalidInput(format!("Job posting file: {}", e)))?;
    }
    Ok(())
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    let formatter = ConsoleFormatter::new(config.output.color_output);

    match command {
        Commands::Generate {
            job_text,
            job_url,
            company,
            role,
            cv_master,
            lang,
            out,
            signals,
            max_bullets,
            format,
        } => {
            check_job_text(&job_text)?;

            let request = GenerateRequest {
                job_text,
                job_url,
                company,
                role,
                cv_master: cv_master.unwrap_or_else(|| config.profile.cv_master.clone()),
                lang: lang.unwrap_or(config.output.default_lang),
                out_dir: out.unwrap_or_else(|| config.output.out_dir.clone()),
                signals,
                max_bullets,
            };
            info!(
                "Generating {} / {} ({})",
                request.company, request.role, request.lang
            );

            let renderer = renderer_for(format.unwrap_or(config.output.format));
            let generator = Generator::new(&config, renderer)?;
            let outcome = generator.run(&request).await?;

            print!("{}", formatter.format_outcome(&outcome));
        }

        Commands::Signals { job_text, format } => {
            check_job_text(&job_text)?;
            let format = cli::parse_signals_format(&format).map_err(JobTailorError::InvalidInput)?;

            let engine = MatchingEngine::new(&config.matching)?;
            let text = InputManager::read_job_text(&job_text).await?;
            let summary = engine.extract(&text).summary();

            match format {
                SignalsFormat::Console => print!("{}", formatter.format_signals(&summary)),
                SignalsFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }

        Commands::Rank { job_text, cv_master } => {
            check_job_text(&job_text)?;

            let engine = MatchingEngine::new(&config.matching)?;
            let text = InputManager::read_job_text(&job_text).await?;
            let cv_path: PathBuf = cv_master.unwrap_or_else(|| config.profile.cv_master.clone());
            let cv = load_cv_master(&cv_path)?;

            let signals = engine.extract(&text);
            let report = rank_profile(&engine, &cv, &signals);
            print!("{}", formatter.format_ranking(&report));
        }

        Commands::Config { action } => {
            run_config_action(&action.unwrap_or(ConfigAction::Show), config_path)?;
        }
    }

    Ok(())
}
