use nutype::nutype;

pub const MAX_NAME_LENGTH: usize = 256;

/// Display name of a clothing item.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ItemName(String);

/// Free-form garment category such as "shirt". Listings group on this value.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ItemType(String);
