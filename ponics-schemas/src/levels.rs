//! The closed set of measured water-quality levels and their scales.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One measured water-quality level type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelKind {
    Ph,
    Nitrite,
    Nitrate,
    Salinity,
    Iron,
}

impl LevelKind {
    /// Every level kind, in the order analyses are usually reported.
    pub const ALL: [LevelKind; 5] = [
        LevelKind::Ph,
        LevelKind::Nitrite,
        LevelKind::Nitrate,
        LevelKind::Salinity,
        LevelKind::Iron,
    ];

    /// The unit of measurement readings of this level are expressed in.
    pub fn scale(self) -> Scale {
        match self {
            LevelKind::Ph => Scale::PhUnits,
            LevelKind::Nitrite | LevelKind::Nitrate | LevelKind::Iron => Scale::PartsPerMillion,
            LevelKind::Salinity => Scale::PartsPerThousand,
        }
    }

    /// Human-readable label, as used in warning messages.
    pub fn label(self) -> &'static str {
        match self {
            LevelKind::Ph => "pH",
            LevelKind::Nitrite => "nitrite",
            LevelKind::Nitrate => "nitrate",
            LevelKind::Salinity => "salinity",
            LevelKind::Iron => "iron",
        }
    }
}

impl fmt::Display for LevelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit of measurement for a tolerance and its readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    PhUnits,
    PartsPerMillion,
    PartsPerThousand,
}

impl Scale {
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::PhUnits => "pH",
            Scale::PartsPerMillion => "ppm",
            Scale::PartsPerThousand => "ppt",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_follow_level_kind() {
        assert_eq!(LevelKind::Ph.scale(), Scale::PhUnits);
        assert_eq!(LevelKind::Nitrite.scale(), Scale::PartsPerMillion);
        assert_eq!(LevelKind::Nitrate.scale(), Scale::PartsPerMillion);
        assert_eq!(LevelKind::Salinity.scale(), Scale::PartsPerThousand);
        assert_eq!(LevelKind::Iron.scale(), Scale::PartsPerMillion);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&LevelKind::Ph).unwrap();
        assert_eq!(json, "\"ph\"");
        let back: LevelKind = serde_json::from_str("\"nitrite\"").unwrap();
        assert_eq!(back, LevelKind::Nitrite);
    }
}
