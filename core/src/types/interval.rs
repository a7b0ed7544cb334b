use nutype::nutype;
use std::time::Duration;

/// Desired gap between two cleanings of an item, in whole seconds.
#[nutype(
    validate(greater_or_equal = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct CleaningInterval(i64);

impl CleaningInterval {
    pub fn as_secs(self) -> u64 {
        self.into_inner().unsigned_abs()
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.as_secs())
    }
}
