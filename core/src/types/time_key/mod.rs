use crate::types::id::ItemId;
use redb::TypeName;
use std::cmp::Ordering;
use std::time::{Duration, SystemTime};

const SECS_WIDTH: usize = 8;
const NANOS_WIDTH: usize = 4;
const ID_WIDTH: usize = 8;
const KEY_WIDTH: usize = SECS_WIDTH + NANOS_WIDTH + ID_WIDTH;

/// Index entry pairing a schedule timestamp with the item it belongs to.
///
/// Entries order by `timestamp` first and `id` second, so a range scan over
/// an index yields items in schedule order with ties broken by id.
///
/// The encoding only covers instants on or after the unix epoch. Earlier
/// instants are stored as the epoch itself, so callers scanning with a
/// pre-epoch bound must handle that case before touching the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeKey {
    /// `next_cleaning_date` or `last_cleaned`, depending on the index.
    pub timestamp: SystemTime,
    pub id: ItemId,
}

/// Splits an encoded key into its offset from the epoch and the raw id bytes.
///
/// Big-endian seconds then nanoseconds, so comparing the decoded offsets
/// matches comparing timestamps.
fn split_key(data: &[u8]) -> (Duration, &[u8]) {
    let (secs, rest) = data
        .split_first_chunk::<SECS_WIDTH>()
        .expect("time key seconds");
    let (nanos, id) = rest
        .split_first_chunk::<NANOS_WIDTH>()
        .expect("time key nanoseconds");

    let since_epoch = Duration::new(u64::from_be_bytes(*secs), u32::from_be_bytes(*nanos));
    (since_epoch, id)
}

impl redb::Key for TimeKey {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        let (offset1, id1) = split_key(data1);
        let (offset2, id2) = split_key(data2);

        offset1
            .cmp(&offset2)
            .then_with(|| <ItemId as redb::Key>::compare(id1, id2))
    }
}

impl redb::Value for TimeKey {
    type SelfType<'a> = TimeKey;
    type AsBytes<'a> = [u8; KEY_WIDTH];

    fn fixed_width() -> Option<usize> {
        Some(KEY_WIDTH)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (since_epoch, id) = split_key(data);

        TimeKey {
            timestamp: SystemTime::UNIX_EPOCH + since_epoch,
            id: <ItemId as redb::Value>::from_bytes(id),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        let since_epoch = value
            .timestamp
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();

        let mut bytes = [0; KEY_WIDTH];
        let (secs, rest) = bytes.split_at_mut(SECS_WIDTH);
        let (nanos, id) = rest.split_at_mut(NANOS_WIDTH);
        secs.copy_from_slice(&since_epoch.as_secs().to_be_bytes());
        nanos.copy_from_slice(&since_epoch.subsec_nanos().to_be_bytes());
        id.copy_from_slice(&<ItemId as redb::Value>::as_bytes(&value.id));
        bytes
    }

    fn type_name() -> TypeName {
        TypeName::new("dhobi::TimeKey")
    }
}
