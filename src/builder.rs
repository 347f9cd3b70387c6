use log::info;

use crate::{
    config::LoaderConfig,
    error::Result,
    fetch::{Fetcher, HttpFetcher},
    info::{DatasetInfo, describe_dataset},
    loader::{SplitRecords, load_split},
    split::{Split, SplitGenerator, ensure_local, resolve_split_files},
};

/// What a dataset has to provide to be loaded: its metadata, its splits and
/// the records of each split.
pub trait DatasetBuilder {
    fn describe_dataset(&self) -> DatasetInfo;

    /// Makes every split available locally and returns how to generate it.
    fn list_splits(&self) -> Result<Vec<SplitGenerator>>;

    fn generate_records(&self, split: Split) -> Result<SplitRecords>;
}

/// The EmoContext dataset.
#[derive(Debug)]
pub struct EmoDataset<F = HttpFetcher> {
    config: LoaderConfig,
    fetcher: F,
}

impl EmoDataset<HttpFetcher> {
    /// Creates a dataset that downloads over HTTP.
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_fetcher(config, HttpFetcher::new())
    }
}

impl<F: Fetcher> EmoDataset<F> {
    /// Creates a dataset that downloads through `fetcher`.
    pub fn with_fetcher(config: LoaderConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn link(&self, split: Split) -> &str {
        match split {
            Split::Train => &self.config.train_link,
            Split::Test => &self.config.test_link,
        }
    }
}

impl<F: Fetcher> DatasetBuilder for EmoDataset<F> {
    fn describe_dataset(&self) -> DatasetInfo {
        describe_dataset()
    }

    fn list_splits(&self) -> Result<Vec<SplitGenerator>> {
        let (train, test) = resolve_split_files(
            &self.fetcher,
            &self.config.data_dir,
            &self.config.train_link,
            &self.config.test_link,
            self.config.force_refetch,
        )?;

        Ok(vec![
            SplitGenerator {
                split: Split::Train,
                filepath: train,
            },
            SplitGenerator {
                split: Split::Test,
                filepath: test,
            },
        ])
    }

    /// Reads one split, downloading only that split's file if it is missing.
    ///
    /// The force flag belongs to `list_splits`; generating records never
    /// replaces a file that is already there.
    fn generate_records(&self, split: Split) -> Result<SplitRecords> {
        let path = ensure_local(
            &self.fetcher,
            self.link(split),
            &self.config.data_dir.join(split.filename()),
            false,
        )?;

        info!("generating {split} records from {}", path.display());
        load_split(&path)
    }
}
