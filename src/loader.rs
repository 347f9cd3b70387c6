use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Read},
    iter::FusedIterator,
    path::Path,
    vec,
};

use log::{debug, info};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::{DatasetError, ParseError, Result},
    record::{EmotionLabel, Record},
};

/// On-disk layout of a split: two mappings sharing the same keys.
#[derive(Debug, Deserialize)]
struct SplitFile {
    text: Map<String, Value>,
    #[serde(rename = "Label")]
    label: Map<String, Value>,
}

/// Records of one split, in the key order of the file's `text` mapping.
///
/// Produced by [`load_split`]. Consuming it does not touch the file again; to
/// read the split a second time, load it again.
#[derive(Debug)]
pub struct SplitRecords {
    records: vec::IntoIter<Record>,
}

impl Iterator for SplitRecords {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        self.records.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for SplitRecords {}

impl FusedIterator for SplitRecords {}

/// Opens a split file and returns its records.
///
/// The whole document is parsed and validated before the first record is
/// handed out, so a malformed file produces an error and no records.
///
/// # Args
/// * `path` - Path to a JSON file with the `text` and `Label` mappings.
///
/// # Errors
/// * `DatasetError::Io` if the file cannot be opened.
/// * `DatasetError::Parse` if it is not valid JSON, lacks a mapping, holds an
///   unknown label, or its two mappings do not share the same keys.
pub fn load_split(path: impl AsRef<Path>) -> Result<SplitRecords> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;

    let records =
        load_split_from_reader(BufReader::new(file)).map_err(|e| DatasetError::parse(path, e))?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Same as [`load_split`] over any reader.
pub fn load_split_from_reader<R: Read>(
    reader: R,
) -> std::result::Result<SplitRecords, ParseError> {
    let file: SplitFile = serde_json::from_reader(reader)?;
    pair_by_key(file)
}

/// Same as [`load_split`] over an in-memory document.
pub fn load_split_from_slice(
    bytes: &[u8],
) -> std::result::Result<SplitRecords, ParseError> {
    let file: SplitFile = serde_json::from_slice(bytes)?;
    pair_by_key(file)
}

fn pair_by_key(file: SplitFile) -> std::result::Result<SplitRecords, ParseError> {
    let SplitFile { text, label } = file;

    let mut labels = HashMap::with_capacity(label.len());
    for (key, value) in label {
        let Value::String(name) = value else {
            return Err(ParseError::InvalidValue {
                key,
                field: "Label",
            });
        };
        let Ok(parsed) = name.parse::<EmotionLabel>() else {
            return Err(ParseError::UnknownLabel { key, value: name });
        };
        labels.insert(key, parsed);
    }

    let mut records = Vec::with_capacity(text.len());
    for (key, value) in text {
        let Value::String(utterance) = value else {
            return Err(ParseError::InvalidValue { key, field: "text" });
        };
        let Some(label) = labels.remove(&key) else {
            return Err(ParseError::MissingLabel { key });
        };
        records.push(Record {
            id: key,
            text: utterance,
            label,
        });
    }

    // Every text key consumed its label; whatever is left has no text.
    if let Some(key) = labels.into_keys().min() {
        return Err(ParseError::MissingText { key });
    }

    debug!("paired {} entries", records.len());
    Ok(SplitRecords {
        records: records.into_iter(),
    })
}
