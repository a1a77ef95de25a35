/// Domain layer - provider identity derivation and configuration assembly
///
/// Everything in here is pure: no I/O, no clocks, no environment access.
pub mod domain;
pub mod policies;
pub mod services;
