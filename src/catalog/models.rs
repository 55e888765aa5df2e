//! Data models for the word catalog

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a catalog entry, also used as the progress persistence key
pub type WordId = String;

/// A single vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    #[serde(deserialize_with = "deserialize_word_id")]
    pub id: WordId,
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Part of speech, e.g. "n." or "v."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    pub meaning_zh: String,
}

impl WordEntry {
    pub fn new(id: impl Into<WordId>, word: impl Into<String>, meaning_zh: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            phonetic: None,
            pos: None,
            meaning_zh: meaning_zh.into(),
        }
    }

    pub fn with_phonetic(mut self, phonetic: impl Into<String>) -> Self {
        self.phonetic = Some(phonetic.into());
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }
}

/// Word lists are often written with numeric ids; both forms map to the same key
pub(crate) fn deserialize_word_id<'de, D>(deserializer: D) -> Result<WordId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
