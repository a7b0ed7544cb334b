use redb::TypeName;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Storage-assigned identifier of a clothing item.
///
/// Ids are handed out in insertion order, so ordering by id is ordering by
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) const MIN: Self = Self(u64::MIN);
    pub(crate) const MAX: Self = Self(u64::MAX);

    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
#[error("invalid item id {input:?}: {source}")]
pub struct ParseItemIdError {
    input: String,
    source: ParseIntError,
}

impl FromStr for ItemId {
    type Err = ParseItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|source| ParseItemIdError {
                input: s.to_string(),
                source,
            })
    }
}

fn decode(data: &[u8]) -> u64 {
    let (raw, _) = data
        .split_first_chunk::<8>()
        .expect("item id must be 8 bytes");
    u64::from_be_bytes(*raw)
}

impl redb::Key for ItemId {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        decode(data1).cmp(&decode(data2))
    }
}

impl redb::Value for ItemId {
    type SelfType<'a> = ItemId;
    type AsBytes<'a> = [u8; 8];

    fn fixed_width() -> Option<usize> {
        Some(8)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        ItemId(decode(data))
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        value.0.to_be_bytes()
    }

    fn type_name() -> TypeName {
        TypeName::new("dhobi::ItemId")
    }
}
