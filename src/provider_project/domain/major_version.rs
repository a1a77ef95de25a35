use serde::{Deserialize, Serialize};

/// MajorVersionDecision value object
///
/// `None` means no constraint: the release workflow picks the next major
/// version from the commit history as usual. `Some(n)` pins the package to
/// major version `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MajorVersionDecision(Option<u64>);

impl MajorVersionDecision {
    pub fn unconstrained() -> Self {
        Self(None)
    }

    pub fn pinned(major: u64) -> Self {
        Self(Some(major))
    }

    pub fn value(&self) -> Option<u64> {
        self.0
    }

    pub fn is_unconstrained(&self) -> bool {
        self.0.is_none()
    }
}

impl std::fmt::Display for MajorVersionDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(major) => write!(f, "v{}", major),
            None => write!(f, "unconstrained"),
        }
    }
}
