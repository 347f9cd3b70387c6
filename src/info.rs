use serde::Serialize;

use crate::record::EmotionLabel;

pub const VERSION: &str = "1.0.0";

pub const HOMEPAGE: &str = "https://www.aclweb.org/anthology/S19-2005/";

pub const DESCRIPTION: &str = "In this dataset, given a textual dialogue i.e. an utterance along \
with two previous turns of context, the goal was to infer the underlying emotion of the utterance \
by choosing from four emotion classes - Happy, Sad, Angry and Others.";

pub const CITATION: &str = r#"@inproceedings{chatterjee-etal-2019-semeval,
    title = "{S}em{E}val-2019 Task 3: {E}mo{C}ontext Contextual Emotion Detection in Text",
    author = "Chatterjee, Ankush  and
      Narahari, Kedhar Nath  and
      Joshi, Meghana  and
      Agrawal, Puneet",
    booktitle = "Proceedings of the 13th International Workshop on Semantic Evaluation",
    month = jun,
    year = "2019",
    address = "Minneapolis, Minnesota, USA",
    publisher = "Association for Computational Linguistics",
    url = "https://www.aclweb.org/anthology/S19-2005",
    doi = "10.18653/v1/S19-2005",
    pages = "39--48",
    abstract = "In this paper, we present the SemEval-2019 Task 3 - EmoContext: Contextual Emotion Detection in Text. Lack of facial expressions and voice modulations make detecting emotions in text a challenging problem. For instance, as humans, on reading {``}Why don{'}t you ever text me!{''} we can either interpret it as a sad or angry emotion and the same ambiguity exists for machines. However, the context of dialogue can prove helpful in detection of the emotion. In this task, given a textual dialogue i.e. an utterance along with two previous turns of context, the goal was to infer the underlying emotion of the utterance by choosing from four emotion classes - Happy, Sad, Angry and Others. To facilitate the participation in this task, textual dialogues from user interaction with a conversational agent were taken and annotated for emotion classes after several data processing steps. A training data set of 30160 dialogues, and two evaluation data sets, Test1 and Test2, containing 2755 and 5509 dialogues respectively were released to the participants. A total of 311 teams made submissions to this task. The final leader-board was evaluated on Test2 data set, and the highest ranked submission achieved 79.59 micro-averaged F1 score. Our analysis of systems submitted to the task indicate that Bi-directional LSTM was the most common choice of neural architecture used, and most of the systems had the best performance for the Sad emotion class, and the worst for the Happy emotion class.",
}
"#;

/// A categorical feature restricted to a fixed list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassLabel {
    pub names: Vec<&'static str>,
}

impl ClassLabel {
    pub fn num_classes(&self) -> usize {
        self.names.len()
    }

    /// Maps a class name to its integer id.
    pub fn str2int(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }

    /// Maps an integer id back to its class name.
    pub fn int2str(&self, id: usize) -> Option<&'static str> {
        self.names.get(id).copied()
    }
}

/// Type of a single output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "dtype", rename_all = "snake_case")]
pub enum Feature {
    String,
    ClassLabel(ClassLabel),
}

/// Static description of the dataset: schema, provenance and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub homepage: &'static str,
    /// Output columns in record order, `id` excluded.
    pub features: Vec<(&'static str, Feature)>,
    pub supervised_keys: Option<(&'static str, &'static str)>,
}

impl DatasetInfo {
    /// The label column's class label.
    pub fn label(&self) -> Option<&ClassLabel> {
        self.features.iter().find_map(|(_, feature)| match feature {
            Feature::ClassLabel(label) => Some(label),
            Feature::String => None,
        })
    }
}

/// Returns the static metadata of the EmoContext dataset.
pub fn describe_dataset() -> DatasetInfo {
    let label = ClassLabel {
        names: EmotionLabel::ALL.iter().map(|l| l.name()).collect(),
    };

    DatasetInfo {
        name: "emo",
        version: VERSION,
        description: DESCRIPTION,
        citation: CITATION,
        homepage: HOMEPAGE,
        features: vec![("text", Feature::String), ("label", Feature::ClassLabel(label))],
        supervised_keys: None,
    }
}
