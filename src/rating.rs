use log::warn;
use strum::{Display, EnumIter, EnumString, FromRepr};

use crate::error::{InvalidRatingSnafu, Result, SchedulerError};

/// Recall quality reported for one review, from worst to best.
///
/// The front-end sends the label printed on the answer button, optionally
/// followed by its keyboard shortcut, e.g. `简单(D)`. The English names are
/// accepted as well, case-insensitively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString, FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Rating {
    #[strum(to_string = "again", serialize = "重来")]
    Again = 1,
    #[strum(to_string = "hard", serialize = "困难")]
    Hard = 2,
    #[strum(to_string = "good", serialize = "良好")]
    Good = 3,
    #[strum(to_string = "easy", serialize = "简单")]
    Easy = 4,
}

impl Rating {
    /// Parses a button label. Unknown labels are rejected rather than mapped
    /// to a default grade.
    pub fn from_label(label: &str) -> Result<Self> {
        let cleaned = strip_shortcut(label.trim()).trim();
        cleaned.parse::<Rating>().map_err(|_| {
            warn!("unrecognized rating label {label:?}");
            InvalidRatingSnafu { text: label }.build()
        })
    }

    pub fn is_recalled(self) -> bool {
        self != Rating::Again
    }
}

impl TryFrom<u8> for Rating {
    type Error = SchedulerError;

    fn try_from(value: u8) -> Result<Self> {
        Rating::from_repr(value).ok_or_else(|| {
            InvalidRatingSnafu {
                text: value.to_string(),
            }
            .build()
        })
    }
}

/// Drops a trailing `(X)` shortcut hint, X being one uppercase ASCII letter.
fn strip_shortcut(label: &str) -> &str {
    let Some(rest) = label.strip_suffix(')') else {
        return label;
    };
    let mut chars = rest.chars();
    match (chars.next_back(), chars.next_back()) {
        (Some(key), Some('(')) if key.is_ascii_uppercase() => chars.as_str(),
        _ => label,
    }
}
