use std::{cell::Cell, fs};

use emo_context::{
    DatasetBuilder, DatasetError, EmoDataset, EmotionLabel, FetchError, Fetcher, LoaderConfig,
    ParseError, Split, load_split,
};

const TRAIN: &[u8] = br#"{
    "text": {
        "0": "don't worry  i'm girl <eos> hmm how do i know if you are <eos> what's ur name?",
        "1": "when did i? <eos> saw many times i think -_- <eos> no. i never saw you",
        "2": "by <eos> by google chrome <eos> where you live"
    },
    "Label": {
        "0": "others",
        "1": "angry",
        "2": "others"
    }
}"#;

const TEST: &[u8] = br#"{"text": {"0": "yay"}, "Label": {"0": "happy"}}"#;

/// Answers train requests with `TRAIN` and everything else with `TEST`.
struct StaticFetcher {
    calls: Cell<usize>,
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        if url.ends_with("train-id") {
            Ok(TRAIN.to_vec())
        } else {
            Ok(TEST.to_vec())
        }
    }
}

fn dataset(dir: &std::path::Path) -> EmoDataset<StaticFetcher> {
    forced_dataset(dir, false)
}

fn forced_dataset(dir: &std::path::Path, force_refetch: bool) -> EmoDataset<StaticFetcher> {
    let config = LoaderConfig {
        data_dir: dir.to_path_buf(),
        train_link: "train-id".into(),
        test_link: "test-id".into(),
        force_refetch,
    };
    EmoDataset::with_fetcher(config, StaticFetcher { calls: Cell::new(0) })
}

#[test]
fn lists_train_then_test() {
    let dir = tempfile::tempdir().unwrap();
    let ds = dataset(dir.path());

    let splits = ds.list_splits().unwrap();

    let names: Vec<_> = splits.iter().map(|g| g.split).collect();
    assert_eq!(names, Split::ALL);
    assert_eq!(splits[0].filepath, dir.path().join("emo-train.json"));
    assert_eq!(splits[1].filepath, dir.path().join("emo-test.json"));
}

#[test]
fn generates_records_of_each_split() {
    let dir = tempfile::tempdir().unwrap();
    let ds = dataset(dir.path());

    let train: Vec<_> = ds.generate_records(Split::Train).unwrap().collect();
    assert_eq!(train.len(), 3);
    assert_eq!(
        train.iter().map(|r| r.label).collect::<Vec<_>>(),
        [EmotionLabel::Others, EmotionLabel::Angry, EmotionLabel::Others]
    );
    assert!(train[1].text.starts_with("when did i?"));

    let test: Vec<_> = ds.generate_records(Split::Test).unwrap().collect();
    assert_eq!(test.len(), 1);
    assert_eq!(test[0].label, EmotionLabel::Happy);
}

#[test]
fn second_generation_reuses_downloads() {
    let dir = tempfile::tempdir().unwrap();
    let ds = dataset(dir.path());

    ds.generate_records(Split::Train).unwrap();
    assert_eq!(ds.fetcher().calls.get(), 1);
    ds.generate_records(Split::Test).unwrap();
    assert_eq!(ds.fetcher().calls.get(), 2);

    ds.generate_records(Split::Train).unwrap();
    ds.generate_records(Split::Test).unwrap();
    assert_eq!(ds.fetcher().calls.get(), 2);
}

#[test]
fn force_refetch_only_applies_when_listing_splits() {
    let dir = tempfile::tempdir().unwrap();
    let ds = forced_dataset(dir.path(), true);

    ds.generate_records(Split::Train).unwrap();
    assert_eq!(ds.fetcher().calls.get(), 1);
    ds.generate_records(Split::Test).unwrap();
    assert_eq!(ds.fetcher().calls.get(), 2);

    ds.list_splits().unwrap();
    assert_eq!(ds.fetcher().calls.get(), 4);

    // Files are present now; generation reads them as they are.
    ds.generate_records(Split::Train).unwrap();
    ds.generate_records(Split::Test).unwrap();
    assert_eq!(ds.fetcher().calls.get(), 4);
}

#[test]
fn regenerating_rereads_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let ds = dataset(dir.path());

    assert_eq!(ds.generate_records(Split::Test).unwrap().count(), 1);
    fs::write(
        dir.path().join("emo-test.json"),
        br#"{"text": {"a": "x", "b": "y"}, "Label": {"a": "sad", "b": "sad"}}"#,
    )
    .unwrap();
    assert_eq!(ds.generate_records(Split::Test).unwrap().count(), 2);
}

#[test]
fn corrupt_local_file_yields_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("emo-train.json"), br#"{"text": {"0": "#).unwrap();
    let ds = dataset(dir.path());

    let err = ds.generate_records(Split::Train).unwrap_err();
    match err {
        DatasetError::Parse { path, source } => {
            assert_eq!(path, dir.path().join("emo-train.json"));
            assert!(matches!(source, ParseError::Json(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_split(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}

#[test]
fn describes_four_label_schema() {
    let dir = tempfile::tempdir().unwrap();
    let info = dataset(dir.path()).describe_dataset();

    let label = info.label().unwrap();
    assert_eq!(label.names, ["others", "happy", "sad", "angry"]);
    assert_eq!(info.homepage, "https://www.aclweb.org/anthology/S19-2005/");

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["features"][1][1]["dtype"], "class_label");
}
