//! Loader for the SemEval-2019 Task 3 (EmoContext) emotion dataset.
//!
//! Split files are downloaded from Drive on first use, then parsed into
//! [`Record`]s labeled with one of four [`EmotionLabel`]s.

pub mod builder;
pub mod config;
pub mod error;
pub mod fetch;
pub mod info;
pub mod loader;
pub mod record;
pub mod split;

pub use builder::{DatasetBuilder, EmoDataset};
pub use config::LoaderConfig;
pub use error::{DatasetError, FetchError, ParseError, Result};
pub use fetch::{Fetcher, HttpFetcher};
pub use info::{ClassLabel, DatasetInfo, describe_dataset};
pub use loader::{SplitRecords, load_split};
pub use record::{EmotionLabel, Record};
pub use split::{Split, SplitGenerator, resolve_split_files};
