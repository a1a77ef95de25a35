mod config_assembler;
mod identifier_normalizer;
mod identity_resolver;

pub use config_assembler::PublishingConfigAssembler;
pub use identifier_normalizer::{pascal_case, IdentifierNormalizer};
pub use identity_resolver::PackageIdentityResolver;
