use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CardError, Result};

pub const HEADER_KEY: &str = "header";
pub const TITLE_KEY: &str = "title";
pub const BODY_KEY: &str = "body";

/// Labels printed on one card, keyed by field name.
///
/// Starts out with `HEADER`, `TITLE` and `BODY` placeholders; keys read from
/// the text file replace them. Unknown keys are kept as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    fields: BTreeMap<String, String>,
}

impl Default for CardText {
    fn default() -> Self {
        let fields = [(HEADER_KEY, "HEADER"), (TITLE_KEY, "TITLE"), (BODY_KEY, "BODY")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { fields }
    }
}

impl CardText {
    /// Read `key=value` lines from `path` on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(CardError::EmptyOrMissingTextFile {
                path: path.to_path_buf(),
                source: None,
            });
        }
        let file = File::open(path).map_err(|err| CardError::EmptyOrMissingTextFile {
            path: path.to_path_buf(),
            source: Some(err),
        })?;

        let mut text = Self::default();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|err| {
                CardError::io(format!("cannot read text file {}", path.display()), err)
            })?;
            text.apply_line(&line);
        }
        Ok(text)
    }

    /// Parse in-memory contents the same way [`CardText::from_file`] does.
    pub fn parse(contents: &str) -> Self {
        let mut text = Self::default();
        for line in contents.lines() {
            text.apply_line(line);
        }
        text
    }

    fn apply_line(&mut self, line: &str) {
        let Some((key, value)) = line.split_once('=') else {
            return;
        };
        let key = key.trim();
        if key.is_empty() {
            return;
        }
        self.fields.insert(key.to_string(), value.trim().to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn header(&self) -> &str {
        self.get(HEADER_KEY).unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.get(TITLE_KEY).unwrap_or_default()
    }

    pub fn body(&self) -> &str {
        self.get(BODY_KEY).unwrap_or_default()
    }
}
