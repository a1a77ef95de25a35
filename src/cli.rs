use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Generate the publishing configuration of a prebuilt CDK for Terraform provider
#[derive(Parser, Debug)]
#[command(name = "cdktf-provider-project")]
#[command(version)]
#[command(
    about = "Generate the publishing configuration of a prebuilt CDK for Terraform provider",
    long_about = None
)]
pub struct Args {
    /// Terraform provider reference, e.g. hashicorp/aws@5.42.0
    #[arg(short = 't', long, value_name = "REF")]
    pub terraform_provider: Option<String>,

    /// Version range of the cdktf library, e.g. ^0.20.0
    #[arg(long, value_name = "RANGE")]
    pub cdktf_version: Option<String>,

    /// Version range of the constructs library, e.g. ^10.3.0
    #[arg(long, value_name = "RANGE")]
    pub constructs_version: Option<String>,

    /// jsii toolchain version
    #[arg(long, value_name = "VERSION")]
    pub jsii_version: Option<String>,

    /// Minimum supported Node.js version
    #[arg(long, value_name = "VERSION")]
    pub min_node_version: Option<String>,

    /// Container image used by the generated CI workflows
    #[arg(long, value_name = "IMAGE")]
    pub workflow_container_image: Option<String>,

    /// Pin the major version instead of checking the release history
    #[arg(long, value_name = "N")]
    pub force_major_version: Option<u64>,

    /// Output format: json or yaml
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./cdktf-provider.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seconds to wait for the release history query
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub registry_timeout: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses arguments, returning clap's error instead of exiting
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
