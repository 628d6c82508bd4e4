use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// How the processor turns a list of matches into rating updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProcessingMode {
    /// Every player is rated once against all of their matches, with
    /// opponents held at their pre-period ratings.
    #[default]
    Period,
    /// Matches are applied one at a time, updating both sides of each match.
    Sequential
}
