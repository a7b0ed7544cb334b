pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config, ScheduleConfig, ScheduleSettings};

pub(crate) mod id;
pub use id::{ItemId, ParseItemIdError};

pub(crate) mod interval;
pub use interval::{CleaningInterval, CleaningIntervalError};

pub(crate) mod item;
pub use item::{ClothingItem, ItemDraft, ItemRecord, SchedulePatch, TypeIntervalUpdate};

pub(crate) mod name;
pub use name::{ItemName, ItemNameError, ItemType, ItemTypeError, MAX_NAME_LENGTH};

pub(crate) mod page;
pub use page::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, Page, PageError};

pub(crate) mod time_key;
pub(crate) use time_key::TimeKey;
