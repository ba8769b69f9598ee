// File: src/lexicon/mod.rs
//! Lexicon indices: entries keyed by a dotted base index, each carrying
//! decoded inflection grids.

pub mod dhatu;
pub mod grid;
pub mod shabda;

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::alphabet::{DANDA, DIGITS, DOUBLE_DANDA};

/// Canonical entry key such as `01.0001`: a group number and a serial
/// number, both zero padded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseIndex(String);

impl BaseIndex {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shape of a lexicon's base indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexFormat {
    /// Largest valid group number; groups start at 1.
    pub max_group: u32,
    pub serial_width: usize,
}

impl IndexFormat {
    /// Normalises user input into a base index.
    ///
    /// Devanagari digits are read as ASCII and `।`/`॥` as `.`. The input must
    /// start with `<digits>.<digits>`; anything after that is ignored. Both
    /// numbers are re-padded to the fixed width, so leading zeros beyond it
    /// are dropped; a serial too wide for the lexicon is rejected.
    pub fn validate(&self, text: &str) -> Option<BaseIndex> {
        let ascii: String = text
            .chars()
            .map(|c| match DIGITS.iter().position(|&d| d == c) {
                Some(n) => char::from(b'0' + n as u8),
                None if c == DANDA || c == DOUBLE_DANDA => '.',
                None => c,
            })
            .collect();

        let group_len = ascii.bytes().take_while(u8::is_ascii_digit).count();
        let rest = ascii[group_len..].strip_prefix('.')?;
        let serial_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if group_len == 0 || serial_len == 0 {
            return None;
        }
        let group: u32 = ascii[..group_len].parse().ok()?;
        let serial: u32 = rest[..serial_len].parse().ok()?;
        if group == 0 || group > self.max_group {
            return None;
        }
        let width = self.serial_width;
        if serial.to_string().len() > width {
            return None;
        }
        Some(BaseIndex(format!("{group:02}.{serial:0width$}")))
    }
}

/// An entry that can be searched by field.
pub trait Lexeme: fmt::Debug {
    type Field: Copy + fmt::Debug + PartialEq;
    type Slot: Copy + fmt::Debug + fmt::Display;

    fn baseindex(&self) -> &BaseIndex;

    /// Raw value of a field as stored in the lexicon.
    fn field(&self, field: Self::Field) -> Cow<'_, str>;

    /// Every grid cell holding `form`.
    fn slots_of(&self, form: &str) -> Vec<Self::Slot>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind<F, S> {
    BaseIndex,
    Field(F),
    Form(S),
}

/// One search hit.
#[derive(Debug)]
pub struct SearchMatch<'a, L: Lexeme> {
    pub entry: &'a L,
    pub kind: MatchKind<L::Field, L::Slot>,
}

impl<L: Lexeme> SearchMatch<'_, L> {
    /// Names the grammatical slot for form matches; empty otherwise.
    pub fn description(&self) -> String {
        match &self.kind {
            MatchKind::Form(slot) => slot.to_string(),
            MatchKind::BaseIndex | MatchKind::Field(_) => String::new(),
        }
    }
}

/// Runs the three search stages over `entries`: the entry named by the term
/// as an index, then field matches, then form matches per entry.
pub(crate) fn search_entries<'a, L: Lexeme>(
    entries: impl IntoIterator<Item = &'a L>,
    by_index: Option<&'a L>,
    fields: &[L::Field],
    term: &str,
    fuzzy: bool,
) -> Vec<SearchMatch<'a, L>> {
    let mut matches: Vec<SearchMatch<'a, L>> = by_index
        .map(|entry| SearchMatch { entry, kind: MatchKind::BaseIndex })
        .into_iter()
        .collect();

    for entry in entries {
        for &field in fields {
            let value = entry.field(field);
            let hit = if fuzzy { value.contains(term) } else { value == term };
            if hit {
                matches.push(SearchMatch { entry, kind: MatchKind::Field(field) });
            }
        }
        matches.extend(
            entry
                .slots_of(term)
                .into_iter()
                .map(|slot| SearchMatch { entry, kind: MatchKind::Form(slot) }),
        );
    }
    matches
}
