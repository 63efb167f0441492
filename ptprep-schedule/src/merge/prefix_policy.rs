use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how the namespace prefix of each feed is chosen
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// use the derived prefix as-is. two feeds may share a prefix, in which
    /// case colliding ids fail the merge.
    Derived,
    /// keep the derived prefix unless it equals an earlier feed's prefix or
    /// one of the two is the other followed by `_` (`tpe` and `tpe_bus`). such
    /// a prefix loses its `_` separators and gets the feed ordinal appended
    /// (`tpebus1`), so no two feeds can produce the same merged id.
    #[default]
    Disambiguated,
}
