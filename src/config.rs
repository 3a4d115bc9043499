use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::text::TextConfig;
use crate::{
    DocId, ABSTRACT_SELECTOR, BASE_URL, CSV_PATH, END_ID, MIN_ABSTRACT_LEN, RAW_DIR, START_ID,
    TEXT_DIR, USER_AGENT, VOCAB_PATH,
};

/// Everything the stages need to know, handed to each entry point explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Half-open identifier range every stage walks over.
    pub ids: Range<DocId>,
    /// Pages are requested from `{base_url}/{id}`.
    pub base_url: String,
    pub user_agent: String,
    /// Fetcher output, extractor input.
    pub raw_dir: PathBuf,
    /// Extractor output, corpus input.
    pub text_dir: PathBuf,
    pub abstract_selector: String,
    pub min_abstract_len: usize,
    pub text: TextConfig,
    pub strip_numbers: bool,
    pub csv_path: PathBuf,
    pub vocab_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ids: START_ID..END_ID,
            base_url: BASE_URL.into(),
            user_agent: USER_AGENT.into(),
            raw_dir: RAW_DIR.into(),
            text_dir: TEXT_DIR.into(),
            abstract_selector: ABSTRACT_SELECTOR.into(),
            min_abstract_len: MIN_ABSTRACT_LEN,
            text: TextConfig::default(),
            strip_numbers: true,
            csv_path: CSV_PATH.into(),
            vocab_path: VOCAB_PATH.into(),
        }
    }
}

impl Config {
    pub fn with_ids(mut self, ids: Range<DocId>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Puts every input and output of the pipeline under `root`, keeping the default names.
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.raw_dir = root.join(RAW_DIR);
        self.text_dir = root.join(TEXT_DIR);
        self.csv_path = root.join(CSV_PATH);
        self.vocab_path = root.join(VOCAB_PATH);
        self
    }

    pub fn with_raw_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.raw_dir = dir.into();
        self
    }

    pub fn with_text_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.text_dir = dir.into();
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.abstract_selector = selector.into();
        self
    }

    pub fn with_min_abstract_len(mut self, len: usize) -> Self {
        self.min_abstract_len = len;
        self
    }

    pub fn with_text(mut self, text: TextConfig) -> Self {
        self.text = text;
        self
    }

    pub fn with_strip_numbers(mut self, strip: bool) -> Self {
        self.strip_numbers = strip;
        self
    }

    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    pub fn with_vocab_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocab_path = path.into();
        self
    }

    pub fn page_url(&self, id: DocId) -> String {
        format!("{}/{id}", self.base_url)
    }

    pub fn raw_path(&self, id: DocId) -> PathBuf {
        self.raw_dir.join(format!("{id}.html"))
    }

    pub fn text_path(&self, id: DocId) -> PathBuf {
        self.text_dir.join(format!("{id}.txt"))
    }
}
