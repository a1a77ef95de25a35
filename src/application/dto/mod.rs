/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod project_request;
mod project_response;

pub use output_format::OutputFormat;
pub use project_request::ProjectRequest;
pub use project_response::ProjectResponse;
