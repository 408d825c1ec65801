use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the generator treats a column whose type has no TypeScript mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedTypePolicy {
    /// Abort the run
    #[default]
    Error,
    /// Emit an empty annotation (`name: ;`) and warn
    Empty,
    /// Emit `unknown` and warn
    Unknown,
}

impl UnmappedTypePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnmappedTypePolicy::Error => "error",
            UnmappedTypePolicy::Empty => "empty",
            UnmappedTypePolicy::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UnmappedTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnmappedTypePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(UnmappedTypePolicy::Error),
            "empty" => Ok(UnmappedTypePolicy::Empty),
            "unknown" => Ok(UnmappedTypePolicy::Unknown),
            _ => Err(format!(
                "unknown policy '{}', expected 'error', 'empty' or 'unknown'",
                s
            )),
        }
    }
}
