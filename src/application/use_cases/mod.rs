/// Use cases module containing application business logic orchestration
mod generate_project_config;
mod resolve_major_version;

pub use generate_project_config::GenerateProjectConfigUseCase;
pub use resolve_major_version::MajorVersionResolver;
