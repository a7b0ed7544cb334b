use redb::TypeName;
pub use v1 as latest_record;

pub mod v1;

pub trait RecordVariant {
    const VERSION: u8;
}

/// On-disk item encoding: a version byte followed by the postcard payload.
#[derive(Debug, Clone)]
pub enum VersionedRecord {
    V1(v1::ItemRecord),
}

impl VersionedRecord {
    pub fn into_latest(self) -> latest_record::ItemRecord {
        match self {
            VersionedRecord::V1(record) => record,
        }
    }
}

impl redb::Value for VersionedRecord {
    type SelfType<'a> = VersionedRecord;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (version, data) = data.split_first().expect("empty record");
        match *version {
            v1::ItemRecord::VERSION => {
                let v1 = postcard::from_bytes::<v1::ItemRecord>(data).expect("invalid record");
                VersionedRecord::V1(v1)
            }
            version => panic!("unsupported record version: {version}"),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            VersionedRecord::V1(v1) => postcard::to_extend(v1, vec![v1::ItemRecord::VERSION])
                .expect("record serialization failed"),
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("dhobi::ItemRecord")
    }
}
