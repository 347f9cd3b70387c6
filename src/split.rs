use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{info, warn};

use crate::{
    error::{DatasetError, Result},
    fetch::{Fetcher, resolve_remote},
};

pub const TRAIN_FILENAME: &str = "emo-train.json";
pub const TEST_FILENAME: &str = "emo-test.json";

/// A named partition of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    pub fn name(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }

    /// The fixed local filename this split is stored under.
    pub fn filename(self) -> &'static str {
        match self {
            Self::Train => TRAIN_FILENAME,
            Self::Test => TEST_FILENAME,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Split {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "train" => Ok(Self::Train),
            "test" => Ok(Self::Test),
            other => Err(DatasetError::Config(format!("unknown split: {other}"))),
        }
    }
}

/// Generation arguments for one split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitGenerator {
    pub split: Split,
    pub filepath: PathBuf,
}

/// Makes sure both split files exist locally, downloading the missing ones.
///
/// # Args
/// * `fetcher` - The download collaborator.
/// * `data_dir` - Directory the split files are stored in.
/// * `train_remote` - Shared link or file id of the train split.
/// * `test_remote` - Shared link or file id of the test split.
/// * `force_refetch` - Download even if a file already exists.
///
/// # Returns
/// The local paths of the train and test files.
///
/// # Errors
/// * `DatasetError::Fetch` if a link is invalid or the download fails.
/// * `DatasetError::Io` if the file cannot be written.
pub fn resolve_split_files<F: Fetcher>(
    fetcher: &F,
    data_dir: &Path,
    train_remote: &str,
    test_remote: &str,
    force_refetch: bool,
) -> Result<(PathBuf, PathBuf)> {
    let train = ensure_local(
        fetcher,
        train_remote,
        &data_dir.join(TRAIN_FILENAME),
        force_refetch,
    )?;
    let test = ensure_local(
        fetcher,
        test_remote,
        &data_dir.join(TEST_FILENAME),
        force_refetch,
    )?;
    Ok((train, test))
}

/// Downloads `remote` into `path` unless the file is already there.
///
/// The body is written next to `path` first and renamed over it once
/// complete, so `path` only ever holds a whole download.
pub fn ensure_local<F: Fetcher>(
    fetcher: &F,
    remote: &str,
    path: &Path,
    force_refetch: bool,
) -> Result<PathBuf> {
    if path.exists() && !force_refetch {
        info!("reusing {}", path.display());
        return Ok(path.to_path_buf());
    }

    let url = resolve_remote(remote).map_err(|source| DatasetError::Fetch {
        url: remote.to_string(),
        source,
    })?;

    info!("downloading {} from {url}", path.display());
    let body = fetcher
        .fetch(&url)
        .map_err(|source| DatasetError::Fetch {
            url: url.clone(),
            source,
        })?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| DatasetError::io(dir, e))?;
    }

    let part = part_path(path);
    if let Err(e) = fs::write(&part, &body) {
        discard(&part);
        return Err(DatasetError::io(&part, e));
    }
    if let Err(e) = fs::rename(&part, path) {
        discard(&part);
        return Err(DatasetError::io(path, e));
    }

    info!("wrote {} bytes to {}", body.len(), path.display());
    Ok(path.to_path_buf())
}

fn discard(part: &Path) {
    match fs::remove_file(part) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!("could not remove {}: {e}", part.display()),
    }
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}
