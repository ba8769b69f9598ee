// File: src/lexicon/shabda.rs
//! The nominal-stem lexicon (shabdapatha) and its ending index.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::alphabet::{is_vyanjana, HALANTA, MATRA};
use crate::core::types::{Linga, Vachana, Vibhakti};
use crate::core::varna::split_varna_word;
use crate::error::LexiconError;
use crate::lexicon::grid::{Grid, Table};
use crate::lexicon::{search_entries, BaseIndex, IndexFormat, Lexeme, SearchMatch};

pub const SHABDA_INDEX: IndexFormat = IndexFormat { max_group: 79, serial_width: 3 };

/// A nominal entry as stored in the lexicon file.
#[derive(Debug, Clone, Deserialize)]
pub struct ShabdaRecord {
    pub word: String,
    #[serde(default)]
    pub end: String,
    pub linga: Linga,
    #[serde(default)]
    pub forms: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shabda {
    pub baseindex: BaseIndex,
    pub word: String,
    pub end: String,
    pub linga: Linga,
    pub forms: Grid<Vibhakti>,
}

impl Shabda {
    pub fn display(&self, field: ShabdaField) -> Cow<'_, str> {
        match field {
            ShabdaField::Linga => Cow::Borrowed(self.linga.name()),
            other => self.field(other),
        }
    }
}

impl Lexeme for Shabda {
    type Field = ShabdaField;
    type Slot = ShabdaSlot;

    fn baseindex(&self) -> &BaseIndex {
        &self.baseindex
    }

    fn field(&self, field: ShabdaField) -> Cow<'_, str> {
        match field {
            ShabdaField::Baseindex => Cow::Borrowed(self.baseindex.as_str()),
            ShabdaField::Word => Cow::Borrowed(&self.word),
            ShabdaField::End => Cow::Borrowed(&self.end),
            ShabdaField::Linga => Cow::Borrowed(self.linga.code()),
        }
    }

    fn slots_of(&self, form: &str) -> Vec<ShabdaSlot> {
        self.forms
            .find(form)
            .into_iter()
            .map(|(vibhakti, vachana)| ShabdaSlot { vibhakti, vachana })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShabdaField {
    Baseindex,
    Word,
    End,
    Linga,
}

impl ShabdaField {
    pub fn label(self) -> &'static str {
        match self {
            ShabdaField::Baseindex => "क्रमाङ्कः",
            ShabdaField::Word => "शब्दः",
            ShabdaField::End => "अन्त्यः",
            ShabdaField::Linga => "लिङ्गम्",
        }
    }
}

/// A cell of a declension grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShabdaSlot {
    pub vibhakti: Vibhakti,
    pub vachana: Vachana,
}

impl fmt::Display for ShabdaSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vibhakti.name(), self.vachana.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShabdaOptions {
    pub search_fields: Vec<ShabdaField>,
    pub display_fields: Vec<ShabdaField>,
}

impl Default for ShabdaOptions {
    fn default() -> Self {
        Self {
            search_fields: vec![ShabdaField::Word],
            display_fields: vec![
                ShabdaField::Baseindex,
                ShabdaField::Word,
                ShabdaField::End,
                ShabdaField::Linga,
            ],
        }
    }
}

/// Final varna of a word with any virama dropped, e.g. `अ` for `राम` and
/// `च` for `वाच्`.
pub fn antya(word: &str) -> Option<String> {
    let last = split_varna_word(word, false).pop()?;
    Some(last.to_string().replace(HALANTA, ""))
}

/// Feminine stems recorded as `अ`-final (`लत`) stand for the `आ`-stem: the
/// `ा` sign is appended after a final consonant letter. Applies to the
/// lexicon's feminine entries only; other genders, and words ending in a
/// virama or vowel sign, are returned unchanged.
pub fn fix_feminine_stem(word: &str, linga: Linga) -> Cow<'_, str> {
    match word.chars().last() {
        Some(last) if linga == Linga::Stri && is_vyanjana(last) => {
            Cow::Owned(format!("{word}{}", MATRA[0]))
        }
        _ => Cow::Borrowed(word),
    }
}

/// Ending key under which an entry is indexed.
fn entry_antya(shabda: &Shabda) -> Option<String> {
    antya(&fix_feminine_stem(&shabda.word, shabda.linga))
        .or_else(|| shabda.end.chars().next().map(String::from))
}

/// The nominal lexicon with its ending index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shabdapatha {
    entries: BTreeMap<BaseIndex, Shabda>,
    antya_index: BTreeMap<String, BTreeMap<Linga, Vec<BaseIndex>>>,
    options: ShabdaOptions,
}

impl Shabdapatha {
    pub fn load(path: &Path, options: ShabdaOptions) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Io { path: path.to_path_buf(), source })?;
        let records: BTreeMap<String, ShabdaRecord> = serde_json::from_reader(BufReader::new(file))?;
        let shabdapatha = Self::from_records(records, options)?;
        info!(
            path = %path.display(),
            entries = shabdapatha.len(),
            endings = shabdapatha.antya_index.len(),
            "loaded shabdapatha"
        );
        Ok(shabdapatha)
    }

    pub fn from_json(json: &str, options: ShabdaOptions) -> Result<Self, LexiconError> {
        Self::from_records(serde_json::from_str(json)?, options)
    }

    pub fn from_records(
        records: BTreeMap<String, ShabdaRecord>,
        options: ShabdaOptions,
    ) -> Result<Self, LexiconError> {
        let mut entries = BTreeMap::new();
        let mut antya_index: BTreeMap<String, BTreeMap<Linga, Vec<BaseIndex>>> = BTreeMap::new();

        for (key, record) in records {
            let index = SHABDA_INDEX
                .validate(&key)
                .filter(|index| index.as_str() == key)
                .ok_or_else(|| LexiconError::InvalidKey { key: key.clone() })?;
            let forms = Grid::decode(&record.forms).map_err(|source| LexiconError::Packed {
                index: index.clone(),
                slot: "forms".to_string(),
                source,
            })?;
            let shabda = Shabda {
                baseindex: index.clone(),
                word: record.word,
                end: record.end,
                linga: record.linga,
                forms,
            };

            match entry_antya(&shabda) {
                Some(ending) => antya_index
                    .entry(ending)
                    .or_default()
                    .entry(shabda.linga)
                    .or_default()
                    .push(index.clone()),
                None => debug!(index = %index, "entry has no ending"),
            }
            entries.insert(index, shabda);
        }
        Ok(Self { entries, antya_index, options })
    }

    pub fn options(&self) -> &ShabdaOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ShabdaOptions) {
        self.options = options;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shabda> {
        self.entries.values()
    }

    pub fn validate_index(&self, text: &str) -> Option<BaseIndex> {
        SHABDA_INDEX.validate(text)
    }

    pub fn get(&self, text: &str) -> Option<&Shabda> {
        self.entries.get(&self.validate_index(text)?)
    }

    /// The declension table, one row per case.
    pub fn get_forms(&self, text: &str) -> Option<Table> {
        self.get(text).map(|shabda| shabda.forms.table(false))
    }

    pub fn search(&self, term: &str, fuzzy: bool) -> Vec<SearchMatch<'_, Shabda>> {
        let by_index = self.get(term);
        search_entries(self.entries.values(), by_index, &self.options.search_fields, term, fuzzy)
    }

    /// Entries sharing the ending of `word`, as (lemma, index, gender),
    /// grouped by gender. With `linga`, only that gender is listed.
    pub fn get_similar(&self, word: &str, linga: Option<Linga>) -> Vec<(String, BaseIndex, Linga)> {
        let Some(by_linga) = antya(word).and_then(|ending| self.antya_index.get(&ending)) else {
            return Vec::new();
        };
        let lingas = match linga {
            Some(linga) => vec![linga],
            None => Linga::ALL.to_vec(),
        };

        let mut similar = Vec::new();
        for linga in lingas {
            for index in by_linga.get(&linga).into_iter().flatten() {
                if let Some(shabda) = self.entries.get(index) {
                    similar.push((shabda.word.clone(), index.clone(), linga));
                }
            }
        }
        similar
    }

    /// Index of the entry for `lemma` in the given gender.
    pub fn get_word(&self, lemma: &str, linga: Linga) -> Option<&BaseIndex> {
        let wanted = fix_feminine_stem(lemma, linga);
        self.entries
            .values()
            .find(|shabda| shabda.linga == linga && fix_feminine_stem(&shabda.word, linga) == wanted)
            .map(|shabda| &shabda.baseindex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAMA: &str = "रामः;रामौ;रामाः;रामम्;रामौ;रामान्;रामेण;रामाभ्याम्;रामैः;रामाय;रामाभ्याम्;रामेभ्यः;\
                        रामात्;रामाभ्याम्;रामेभ्यः;रामस्य;रामयोः;रामाणाम्;रामे;रामयोः;रामेषु;राम;रामौ;रामाः";

    fn lexicon() -> Shabdapatha {
        let json = format!(
            r#"{{
                "01.001": {{"baseindex": "01.001", "word": "राम", "end": "अ", "linga": "P", "forms": "{RAMA}"}},
                "01.002": {{"baseindex": "01.002", "word": "लत", "end": "आ", "linga": "S", "forms": ""}},
                "01.003": {{"baseindex": "01.003", "word": "ज्ञान", "end": "अ", "linga": "N", "forms": ""}},
                "12.001": {{"baseindex": "12.001", "word": "हरि", "end": "इ", "linga": "P", "forms": ""}}
            }}"#
        );
        Shabdapatha::from_json(&json, ShabdaOptions::default()).unwrap()
    }

    #[test]
    fn antya_drops_virama() {
        assert_eq!(antya("राम").as_deref(), Some("अ"));
        assert_eq!(antya("हरि").as_deref(), Some("इ"));
        assert_eq!(antya("वाच्").as_deref(), Some("च"));
        assert_eq!(antya(""), None);
    }

    #[test]
    fn forms_are_eight_by_three() {
        let table = lexicon().get_forms("1.1").unwrap();
        assert_eq!(table.len(), 8);
        assert!(table.iter().all(|row| row.len() == 3));
        assert_eq!(table[7][0], ["राम"]);
        assert!(lexicon().get_forms("1.2").unwrap().is_empty());
        assert!(lexicon().get_forms("80.1").is_none());
    }

    #[test]
    fn search_describes_case_and_number() {
        let shabdapatha = lexicon();
        let matches = shabdapatha.search("रामौ", false);
        let slots: Vec<_> = matches.iter().map(|m| m.description()).collect();
        assert_eq!(
            slots,
            ["प्रथमा द्विवचनम्", "द्वितीया द्विवचनम्", "सम्बोधनम् द्विवचनम्"]
        );
        assert_eq!(shabdapatha.search("12.1", false)[0].entry.word, "हरि");
    }

    #[test]
    fn similar_words_share_the_ending() {
        let shabdapatha = lexicon();
        let similar = shabdapatha.get_similar("देव", None);
        let words: Vec<_> = similar.iter().map(|(word, _, linga)| (word.as_str(), *linga)).collect();
        assert_eq!(words, [("राम", Linga::Pum), ("ज्ञान", Linga::Napumsaka)]);
        assert_eq!(shabdapatha.get_similar("देव", Some(Linga::Napumsaka)).len(), 1);
        assert!(shabdapatha.get_similar("वाच्", None).is_empty());
    }

    // lexicon-specific: feminine aa-stems written without the final sign
    #[test]
    fn feminine_a_final_stem_is_read_as_aa_stem() {
        assert_eq!(fix_feminine_stem("लत", Linga::Stri), "लता");
        assert_eq!(fix_feminine_stem("लत", Linga::Pum), "लत");
        assert_eq!(fix_feminine_stem("लता", Linga::Stri), "लता");
        assert_eq!(fix_feminine_stem("वाच्", Linga::Stri), "वाच्");
        assert_eq!(fix_feminine_stem("मति", Linga::Stri), "मति");
        assert_eq!(fix_feminine_stem("", Linga::Stri), "");

        let shabdapatha = lexicon();
        let similar = shabdapatha.get_similar("माला", Some(Linga::Stri));
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].1.as_str(), "01.002");
        assert!(shabdapatha.get_similar("देव", Some(Linga::Stri)).is_empty());
        assert_eq!(shabdapatha.get_word("लत", Linga::Stri).map(BaseIndex::as_str), Some("01.002"));
        assert_eq!(shabdapatha.get_word("लता", Linga::Stri).map(BaseIndex::as_str), Some("01.002"));
    }

    #[test]
    fn get_word_respects_gender() {
        let shabdapatha = lexicon();
        assert_eq!(shabdapatha.get_word("राम", Linga::Pum).map(BaseIndex::as_str), Some("01.001"));
        assert_eq!(shabdapatha.get_word("राम", Linga::Napumsaka), None);
    }

    #[test]
    fn wrong_cell_count_is_fatal() {
        let json = r#"{"01.001": {"word": "राम", "linga": "P", "forms": "a;b;c"}}"#;
        assert!(matches!(
            Shabdapatha::from_json(json, ShabdaOptions::default()),
            Err(LexiconError::Packed { .. })
        ));
    }
}
