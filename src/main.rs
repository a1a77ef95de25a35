use cdktf_provider_project::adapters::outbound::console::StderrProgressReporter;
use cdktf_provider_project::adapters::outbound::registry::GhReleaseRegistry;
use cdktf_provider_project::application::dto::ProjectRequest;
use cdktf_provider_project::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use cdktf_provider_project::application::use_cases::GenerateProjectConfigUseCase;
use cdktf_provider_project::cli::Args;
use cdktf_provider_project::config::{self, ConfigFile};
use cdktf_provider_project::ports::outbound::{ConfigFormatter, OutputPresenter};
use cdktf_provider_project::provider_project::domain::ProviderSettings;
use cdktf_provider_project::shared::error::ExitCode;
use cdktf_provider_project::shared::Result;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // 0 for --help and --version, 2 for usage errors
            let _ = e.print();
            process::exit(e.exit_code());
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(args: Args) -> Result<()> {
    // Load config file (explicit path or auto-discovered)
    let config_file = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)?.unwrap_or_default()
        }
    };

    let naming = config_file.naming_conventions();
    let timeout = args
        .registry_timeout
        .or(config_file.registry_timeout_secs)
        .unwrap_or(GhReleaseRegistry::DEFAULT_TIMEOUT_SECONDS);
    let request = build_request(&args, &config_file);

    // Create adapters (Dependency Injection)
    let release_registry = GhReleaseRegistry::new().with_timeout(Duration::from_secs(timeout));
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateProjectConfigUseCase::new(naming, release_registry, progress_reporter);
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatted_output = FormatterFactory::create(args.format).format(&response.config)?;

    let presenter = PresenterFactory::create(PresenterType::for_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Merges CLI arguments over config file values
fn build_request(args: &Args, config_file: &ConfigFile) -> ProjectRequest {
    let file_settings = config_file.settings();
    let settings = ProviderSettings {
        cdktf_version: args.cdktf_version.clone().or(file_settings.cdktf_version),
        constructs_version: args
            .constructs_version
            .clone()
            .or(file_settings.constructs_version),
        jsii_version: args.jsii_version.clone().or(file_settings.jsii_version),
        min_node_version: args
            .min_node_version
            .clone()
            .or(file_settings.min_node_version),
        workflow_container_image: args
            .workflow_container_image
            .clone()
            .or(file_settings.workflow_container_image),
    };

    ProjectRequest::new(
        args.terraform_provider
            .clone()
            .or_else(|| config_file.terraform_provider.clone()),
        settings,
        args.force_major_version.or(config_file.force_major_version),
    )
}
