/// Release registry adapters
mod gh_release_registry;

pub use gh_release_registry::GhReleaseRegistry;
