mod reserved_names;

pub use reserved_names::{ReservedNameTable, RESERVED_NAME_SUFFIX};
