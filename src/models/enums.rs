use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Frequency {
    Qd => "QD",
    Bid => "BID",
    Tid => "TID",
    Qod => "QOD",
    Am => "AM",
    Pm => "PM",
    Hs => "HS",
    Prn => "PRN",
});

str_enum!(MedicationKind {
    Rx => "rx",
    Otc => "otc",
});

impl Default for Frequency {
    fn default() -> Self {
        Self::Qd
    }
}

impl Frequency {
    pub const ALL: [Frequency; 8] = [
        Self::Qd,
        Self::Bid,
        Self::Tid,
        Self::Qod,
        Self::Am,
        Self::Pm,
        Self::Hs,
        Self::Prn,
    ];

    /// Lenient parse used for stored records: trims, ignores case, and falls
    /// back to `QD` when the code is missing or unknown.
    pub fn normalize(raw: Option<&str>) -> Self {
        let code = match raw.map(str::trim) {
            Some(code) if !code.is_empty() => code,
            _ => return Self::default(),
        };
        match code.to_uppercase().parse::<Self>() {
            Ok(freq) => freq,
            Err(_) => {
                tracing::warn!(code = %code, "Unrecognized frequency code, defaulting to QD");
                Self::default()
            }
        }
    }

    /// PRN doses are shown on the calendar but never counted as scheduled.
    pub fn is_as_needed(&self) -> bool {
        matches!(self, Self::Prn)
    }
}

impl MedicationKind {
    /// Lenient parse: `"RX"`, `" otc "` etc. Anything else is `None`.
    pub fn normalize(raw: Option<&str>) -> Option<Self> {
        raw.map(|k| k.trim().to_lowercase())
            .and_then(|k| k.parse().ok())
    }
}
