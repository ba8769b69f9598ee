// File: src/lexicon/dhatu.rs
//! The verb-root lexicon (dhatupatha).

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::types::{Gana, Karma, Lakara, Pada, Purusha, Settva, Vachana};
use crate::error::LexiconError;
use crate::lexicon::grid::{Grid, Table};
use crate::lexicon::{search_entries, BaseIndex, IndexFormat, Lexeme, SearchMatch};

pub const DHATU_INDEX: IndexFormat = IndexFormat { max_group: 10, serial_width: 4 };

/// A verb entry as stored in the lexicon file.
#[derive(Debug, Clone, Deserialize)]
pub struct DhatuRecord {
    pub dhatu: String,
    pub aupadeshik: String,
    pub gana: Gana,
    pub pada: Pada,
    pub settva: Settva,
    pub karma: Karma,
    pub artha: String,
    #[serde(default)]
    pub artha_english: String,
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub swara: Option<String>,
    #[serde(default)]
    pub split: Option<String>,
    #[serde(default)]
    pub split_artha: Option<String>,
    #[serde(default)]
    pub madhaveeya: Option<String>,
    #[serde(default)]
    pub ksheeratarangini: Option<String>,
    #[serde(default)]
    pub dhatupradeep: Option<String>,
    #[serde(default)]
    pub nich: Option<String>,
    #[serde(default)]
    pub san: Option<String>,
    #[serde(default)]
    pub yak: Option<String>,
    #[serde(default)]
    pub examples: Option<String>,
    #[serde(default)]
    pub rupaani: BTreeMap<Lakara, String>,
}

/// Entries of the traditional commentaries and derived stems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct References {
    pub swara: Option<String>,
    pub split: Option<String>,
    pub split_artha: Option<String>,
    pub madhaveeya: Option<String>,
    pub ksheeratarangini: Option<String>,
    pub dhatupradeep: Option<String>,
    pub nich: Option<String>,
    pub san: Option<String>,
    pub yak: Option<String>,
    /// Usage examples, free text.
    pub examples: Option<String>,
}

impl References {
    /// The entries that are present, with their labels, in display order.
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [
            ("स्वरः", &self.swara),
            ("विच्छेदः", &self.split),
            ("अर्थविच्छेदः", &self.split_artha),
            ("माधवीयः", &self.madhaveeya),
            ("क्षीरतरङ्गिणी", &self.ksheeratarangini),
            ("धातुप्रदीपः", &self.dhatupradeep),
            ("णिच्", &self.nich),
            ("सन्", &self.san),
            ("यक्", &self.yak),
            ("उदाहरणानि", &self.examples),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|value| (label, value)))
        .collect()
    }
}

/// A decoded verb root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dhatu {
    pub baseindex: BaseIndex,
    pub dhatu: String,
    pub aupadeshik: String,
    pub gana: Gana,
    pub pada: Pada,
    pub settva: Settva,
    pub karma: Karma,
    pub artha: String,
    pub artha_english: String,
    pub english: String,
    pub tags: String,
    pub references: References,
    pub rupaani: BTreeMap<Lakara, Grid<Purusha>>,
}

impl Dhatu {
    fn decode(baseindex: BaseIndex, record: DhatuRecord) -> Result<Self, LexiconError> {
        let mut rupaani = BTreeMap::new();
        for (lakara, packed) in &record.rupaani {
            let grid = Grid::decode(packed).map_err(|source| LexiconError::Packed {
                index: baseindex.clone(),
                slot: lakara.key(),
                source,
            })?;
            rupaani.insert(*lakara, grid);
        }

        Ok(Self {
            baseindex,
            dhatu: record.dhatu,
            aupadeshik: record.aupadeshik,
            gana: record.gana,
            pada: record.pada,
            settva: record.settva,
            karma: record.karma,
            artha: record.artha,
            artha_english: record.artha_english,
            english: record.english,
            tags: record.tags,
            references: References {
                swara: record.swara,
                split: record.split,
                split_artha: record.split_artha,
                madhaveeya: record.madhaveeya,
                ksheeratarangini: record.ksheeratarangini,
                dhatupradeep: record.dhatupradeep,
                nich: record.nich,
                san: record.san,
                yak: record.yak,
                examples: record.examples,
            },
            rupaani,
        })
    }

    /// Field value as shown to a reader: tags are spelled out.
    pub fn display(&self, field: DhatuField) -> Cow<'_, str> {
        match field {
            DhatuField::Gana => Cow::Borrowed(self.gana.name()),
            DhatuField::Pada => Cow::Borrowed(self.pada.name()),
            DhatuField::Settva => Cow::Borrowed(self.settva.name()),
            DhatuField::Karma => Cow::Borrowed(self.karma.name()),
            other => self.field(other),
        }
    }
}

impl Lexeme for Dhatu {
    type Field = DhatuField;
    type Slot = DhatuSlot;

    fn baseindex(&self) -> &BaseIndex {
        &self.baseindex
    }

    fn field(&self, field: DhatuField) -> Cow<'_, str> {
        match field {
            DhatuField::Baseindex => Cow::Borrowed(self.baseindex.as_str()),
            DhatuField::Dhatu => Cow::Borrowed(&self.dhatu),
            DhatuField::Aupadeshik => Cow::Borrowed(&self.aupadeshik),
            DhatuField::Gana => Cow::Owned(self.gana.number().to_string()),
            DhatuField::Pada => Cow::Borrowed(self.pada.code()),
            DhatuField::Settva => Cow::Borrowed(self.settva.code()),
            DhatuField::Karma => Cow::Borrowed(self.karma.code()),
            DhatuField::Artha => Cow::Borrowed(&self.artha),
            DhatuField::ArthaEnglish => Cow::Borrowed(&self.artha_english),
            DhatuField::English => Cow::Borrowed(&self.english),
            DhatuField::Tags => Cow::Borrowed(&self.tags),
        }
    }

    fn slots_of(&self, form: &str) -> Vec<DhatuSlot> {
        self.rupaani
            .iter()
            .flat_map(|(&lakara, grid)| {
                grid.find(form)
                    .into_iter()
                    .map(move |(purusha, vachana)| DhatuSlot { lakara, purusha, vachana })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DhatuField {
    Baseindex,
    Dhatu,
    Aupadeshik,
    Gana,
    Pada,
    Settva,
    Karma,
    Artha,
    ArthaEnglish,
    English,
    Tags,
}

impl DhatuField {
    pub fn label(self) -> &'static str {
        match self {
            DhatuField::Baseindex => "क्रमाङ्कः",
            DhatuField::Dhatu => "धातुः",
            DhatuField::Aupadeshik => "औपदेशिक",
            DhatuField::Gana => "गणः",
            DhatuField::Pada => "पदम्",
            DhatuField::Settva => "इडागमः",
            DhatuField::Karma => "कर्म",
            DhatuField::Artha => "अर्थः",
            DhatuField::ArthaEnglish => "Meaning",
            DhatuField::English => "English",
            DhatuField::Tags => "Tags",
        }
    }
}

/// A cell of a conjugation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DhatuSlot {
    pub lakara: Lakara,
    pub purusha: Purusha,
    pub vachana: Vachana,
}

impl fmt::Display for DhatuSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lakara, self.purusha.name(), self.vachana.name())
    }
}

/// Which fields a search looks at and which a result shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DhatuOptions {
    pub search_fields: Vec<DhatuField>,
    pub display_fields: Vec<DhatuField>,
}

impl Default for DhatuOptions {
    fn default() -> Self {
        Self {
            search_fields: vec![
                DhatuField::Dhatu,
                DhatuField::Aupadeshik,
                DhatuField::ArthaEnglish,
                DhatuField::English,
                DhatuField::Artha,
            ],
            display_fields: vec![
                DhatuField::Baseindex,
                DhatuField::Dhatu,
                DhatuField::Aupadeshik,
                DhatuField::English,
                DhatuField::Gana,
                DhatuField::Pada,
                DhatuField::Artha,
                DhatuField::Tags,
                DhatuField::Karma,
                DhatuField::Settva,
                DhatuField::ArthaEnglish,
            ],
        }
    }
}

/// The verb lexicon, decoded once at load and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dhatupatha {
    entries: BTreeMap<BaseIndex, Dhatu>,
    options: DhatuOptions,
}

impl Dhatupatha {
    pub fn load(path: &Path, options: DhatuOptions) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Io { path: path.to_path_buf(), source })?;
        let records: BTreeMap<String, DhatuRecord> = serde_json::from_reader(BufReader::new(file))?;
        let dhatupatha = Self::from_records(records, options)?;
        info!(path = %path.display(), entries = dhatupatha.len(), "loaded dhatupatha");
        Ok(dhatupatha)
    }

    pub fn from_json(json: &str, options: DhatuOptions) -> Result<Self, LexiconError> {
        Self::from_records(serde_json::from_str(json)?, options)
    }

    /// Decodes every record. Keys must already be canonical indices.
    pub fn from_records(
        records: BTreeMap<String, DhatuRecord>,
        options: DhatuOptions,
    ) -> Result<Self, LexiconError> {
        let mut entries = BTreeMap::new();
        for (key, record) in records {
            let index = DHATU_INDEX
                .validate(&key)
                .filter(|index| index.as_str() == key)
                .ok_or_else(|| LexiconError::InvalidKey { key: key.clone() })?;
            entries.insert(index.clone(), Dhatu::decode(index, record)?);
        }
        Ok(Self { entries, options })
    }

    pub fn options(&self) -> &DhatuOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DhatuOptions) {
        self.options = options;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dhatu> {
        self.entries.values()
    }

    pub fn validate_index(&self, text: &str) -> Option<BaseIndex> {
        DHATU_INDEX.validate(text)
    }

    pub fn get(&self, text: &str) -> Option<&Dhatu> {
        self.entries.get(&self.validate_index(text)?)
    }

    /// Every lakara of the entry as a table with a header row of numbers and
    /// a header column of persons. Unattested lakaras give empty tables.
    pub fn get_forms(&self, text: &str) -> Option<BTreeMap<Lakara, Table>> {
        let dhatu = self.get(text)?;
        Some(dhatu.rupaani.iter().map(|(&lakara, grid)| (lakara, grid.table(true))).collect())
    }

    pub fn search(&self, term: &str, fuzzy: bool) -> Vec<SearchMatch<'_, Dhatu>> {
        let by_index = self.get(term);
        search_entries(self.entries.values(), by_index, &self.options.search_fields, term, fuzzy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Kala, Voice};
    use crate::lexicon::MatchKind;

    const LEXICON: &str = r#"{
        "01.0001": {
            "baseindex": "01.0001",
            "dhatu": "भू",
            "aupadeshik": "भू",
            "gana": "1",
            "pada": "P",
            "settva": "S",
            "karma": "A",
            "artha": "सत्तायाम्",
            "artha_english": "to be",
            "english": "be, become",
            "tags": "",
            "madhaveeya": "भू सत्तायाम्",
            "examples": "सः भवति",
            "rupaani": {
                "plat": "भवति;भवतः;भवन्ति;भवसि;भवथः;भवथ;भवामि;भवावः;भवामः",
                "alat": "",
                "plit": "बभूव;बभूवतुः;बभूवुः;बभूविथ;बभूवथुः;बभूव;बभूव;बभूविव;बभूविम"
            }
        }
    }"#;

    fn plat() -> Lakara {
        Lakara { kala: Kala::Lat, voice: Voice::Parasmaipada }
    }

    #[test]
    fn loads_and_decodes_grids() {
        let dhatupatha = Dhatupatha::from_json(LEXICON, DhatuOptions::default()).unwrap();
        assert_eq!(dhatupatha.len(), 1);
        let bhu = dhatupatha.get("१.१").unwrap();
        assert_eq!(bhu.gana.name(), "भ्वादिः");
        assert_eq!(bhu.rupaani[&plat()].forms(Purusha::Prathama, Vachana::Bahu), ["भवन्ति"]);
    }

    #[test]
    fn forms_are_four_by_four_or_empty() {
        let dhatupatha = Dhatupatha::from_json(LEXICON, DhatuOptions::default()).unwrap();
        let forms = dhatupatha.get_forms("1.1").unwrap();
        assert_eq!(forms.len(), 3);
        let lat = &forms[&plat()];
        assert_eq!(lat.len(), 4);
        assert_eq!(lat[2][3], ["भवथ"]);
        assert!(forms[&Lakara::from_key("alat").unwrap()].is_empty());
        assert!(dhatupatha.get_forms("1.2").is_none());
        assert!(dhatupatha.get_forms("dhatu").is_none());
    }

    #[test]
    fn search_finds_every_cell() {
        let dhatupatha = Dhatupatha::from_json(LEXICON, DhatuOptions::default()).unwrap();
        let matches = dhatupatha.search("बभूव", false);
        assert_eq!(matches.len(), 3);
        assert_eq!(
            matches[0].description(),
            "लिट्लकारः (परस्मैपदम्) प्रथमपुरुषः एकवचनम्"
        );
        assert_eq!(
            matches[2].description(),
            "लिट्लकारः (परस्मैपदम्) उत्तमपुरुषः एकवचनम्"
        );
    }

    #[test]
    fn search_orders_index_fields_forms() {
        let dhatupatha = Dhatupatha::from_json(LEXICON, DhatuOptions::default()).unwrap();
        let by_index = dhatupatha.search("01.0001", false);
        assert_eq!(by_index.len(), 1);
        assert_eq!(by_index[0].kind, MatchKind::BaseIndex);

        // भू is both the dhatu and its aupadeshik form
        let kinds: Vec<_> = dhatupatha.search("भू", false).into_iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MatchKind::Field(DhatuField::Dhatu), MatchKind::Field(DhatuField::Aupadeshik)]
        );

        assert!(dhatupatha.search("be", false).is_empty());
        assert_eq!(dhatupatha.search("be", true).len(), 2);
    }

    #[test]
    fn wrong_cell_count_is_fatal() {
        let broken = LEXICON.replace("भवामः\"", "भवामः;अधिकम्\"");
        let err = Dhatupatha::from_json(&broken, DhatuOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Packed { ref slot, source, .. } if slot == "plat" && source.found == 10
        ));
    }

    #[test]
    fn non_canonical_key_is_rejected() {
        let broken = LEXICON.replace("\"01.0001\": {", "\"1.1\": {");
        assert!(matches!(
            Dhatupatha::from_json(&broken, DhatuOptions::default()),
            Err(LexiconError::InvalidKey { .. })
        ));
    }

    #[test]
    fn optional_references_are_kept() {
        let dhatupatha = Dhatupatha::from_json(LEXICON, DhatuOptions::default()).unwrap();
        let bhu = dhatupatha.get("1.1").unwrap();
        assert_eq!(bhu.references.examples.as_deref(), Some("सः भवति"));
        assert_eq!(bhu.references.nich, None);
        assert_eq!(
            bhu.references.labelled(),
            [("माधवीयः", "भू सत्तायाम्"), ("उदाहरणानि", "सः भवति")]
        );
    }

    #[test]
    fn display_spells_out_tags() {
        let dhatupatha = Dhatupatha::from_json(LEXICON, DhatuOptions::default()).unwrap();
        let bhu = dhatupatha.get("1.1").unwrap();
        assert_eq!(bhu.field(DhatuField::Pada), "P");
        assert_eq!(bhu.display(DhatuField::Pada), "परस्मैपदम्");
        assert_eq!(bhu.display(DhatuField::Settva), "सेट्");
        assert_eq!(bhu.display(DhatuField::Gana), "भ्वादिः");
    }
}
