// File: src/core/varna.rs
//! Decomposition of a word into varnas (viccheda) and the inverse join.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::alphabet::{
    is_extra_matra, is_matra, is_swara, is_vyanjana, matra_to_swara, swara_to_matra, HALANTA,
    SWARA,
};
use crate::core::syllable::syllables;
use crate::core::text::split_lines;

/// One element of a varna decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viccheda {
    /// An independent vowel. `mark` is only set in the normalised
    /// (non-technical) decomposition, where a following anusvara, visarga or
    /// candrabindu is folded onto its vowel.
    Swara { vowel: char, mark: Option<char> },
    /// A bare consonant, written with a virama.
    Vyanjana(char),
    /// A dependent vowel sign following a consonant.
    Matra(char),
    /// The inherent `अ` of a consonant that carries no sign.
    InherentA,
    /// Candrabindu, anusvara or visarga.
    Mark(char),
    /// Anything else, carried through unchanged. Also used for the word and
    /// line separators of a flat decomposition.
    Verbatim(String),
}

impl Viccheda {
    pub fn swara(vowel: char) -> Self {
        Viccheda::Swara { vowel, mark: None }
    }

    /// The letters this unit stands for when it is pronounced on its own.
    /// Folded marks come out as separate letters.
    pub fn letters(&self) -> Vec<String> {
        match self {
            Viccheda::Swara { vowel, mark } => {
                let mut letters = vec![vowel.to_string()];
                letters.extend(mark.map(String::from));
                letters
            }
            Viccheda::Vyanjana(c) => vec![format!("{c}{HALANTA}")],
            Viccheda::Matra(m) => matra_to_swara(Some(*m)).map(String::from).into_iter().collect(),
            Viccheda::InherentA => vec![SWARA[0].to_string()],
            Viccheda::Mark(m) => vec![m.to_string()],
            Viccheda::Verbatim(s) => vec![s.clone()],
        }
    }
}

impl fmt::Display for Viccheda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Viccheda::Swara { vowel, mark: Some(m) } => write!(f, "{vowel}{m}"),
            Viccheda::Swara { vowel, mark: None } => write!(f, "{vowel}"),
            Viccheda::Vyanjana(c) => write!(f, "{c}{HALANTA}"),
            Viccheda::Matra(m) => write!(f, "{m}"),
            Viccheda::InherentA => write!(f, "-{}", SWARA[0]),
            Viccheda::Mark(m) => write!(f, "{m}"),
            Viccheda::Verbatim(s) => f.write_str(s),
        }
    }
}

/// Varna decomposition of a single word.
///
/// In technical mode the output keeps dependent signs, the inherent-vowel
/// placeholder and marks as separate units, so that `join_varna` restores the
/// word exactly. Otherwise signs become full vowels and marks are folded onto
/// the preceding vowel.
pub fn split_varna_word(word: &str, technical: bool) -> Vec<Viccheda> {
    let mut viccheda = Vec::new();
    for syllable in syllables(word, true) {
        let chars: Vec<char> = syllable.chars().collect();
        let first = chars[0];
        if is_swara(first) {
            viccheda.push(Viccheda::swara(first));
            if chars.len() > 1 {
                viccheda.push(tail_unit(&chars[1..]));
            }
        } else if is_vyanjana(first) {
            viccheda.push(Viccheda::Vyanjana(first));
            match chars.get(1) {
                None => viccheda.push(Viccheda::InherentA),
                Some(&HALANTA) if chars.len() > 2 => viccheda.push(tail_unit(&chars[2..])),
                Some(&HALANTA) => {}
                Some(&m) if is_matra(m) => {
                    viccheda.push(Viccheda::Matra(m));
                    if chars.len() > 2 {
                        viccheda.push(tail_unit(&chars[2..]));
                    }
                }
                Some(_) => {
                    viccheda.push(Viccheda::InherentA);
                    viccheda.push(tail_unit(&chars[1..]));
                }
            }
        } else if chars.len() == 1 && is_extra_matra(first) {
            viccheda.push(Viccheda::Mark(first));
        } else {
            viccheda.push(Viccheda::Verbatim(syllable));
        }
    }

    if technical {
        viccheda
    } else {
        normalise(viccheda)
    }
}

fn tail_unit(rest: &[char]) -> Viccheda {
    if let [c] = rest {
        if is_extra_matra(*c) {
            return Viccheda::Mark(*c);
        }
    }
    let rest: String = rest.iter().collect();
    debug!(rest = %rest, "unusually long syllable");
    Viccheda::Verbatim(rest)
}

fn normalise(technical: Vec<Viccheda>) -> Vec<Viccheda> {
    let mut result: Vec<Viccheda> = Vec::with_capacity(technical.len());
    for unit in technical {
        match unit {
            Viccheda::Matra(m) => match matra_to_swara(Some(m)) {
                Some(vowel) => result.push(Viccheda::swara(vowel)),
                None => result.push(Viccheda::Matra(m)),
            },
            Viccheda::InherentA => result.push(Viccheda::swara(SWARA[0])),
            Viccheda::Mark(m) => {
                if let Some(Viccheda::Swara { mark, .. }) = result.last_mut() {
                    if mark.is_none() {
                        *mark = Some(m);
                        continue;
                    }
                }
                result.push(Viccheda::Mark(m));
            }
            other => result.push(other),
        }
    }
    result
}

/// Decomposition of every word of every line.
pub fn split_varna(text: &str, technical: bool) -> Vec<Vec<Vec<Viccheda>>> {
    split_lines(text.trim())
        .into_iter()
        .map(|line| line.split_whitespace().map(|w| split_varna_word(w, technical)).collect())
        .collect()
}

/// Decomposition of a whole text as one sequence, with words separated by
/// `Verbatim(" ")` and lines by `Verbatim("\n")`.
pub fn split_varna_flat(text: &str, technical: bool) -> Vec<Viccheda> {
    let lines = split_varna(text, technical);
    let mut flat = Vec::new();
    for (line_idx, line) in lines.iter().enumerate() {
        if line_idx > 0 {
            flat.push(Viccheda::Verbatim("\n".to_string()));
        }
        for (word_idx, word) in line.iter().enumerate() {
            if word_idx > 0 {
                flat.push(Viccheda::Verbatim(" ".to_string()));
            }
            flat.extend(word.iter().cloned());
        }
    }
    flat
}

/// Joins a decomposition (of either mode) back into text.
pub fn join_varna(viccheda: &[Viccheda]) -> String {
    let mut word = String::new();
    let mut units = viccheda.iter().peekable();
    while let Some(unit) = units.next() {
        match unit {
            Viccheda::Swara { vowel, mark } => {
                word.push(*vowel);
                word.extend(*mark);
            }
            Viccheda::Vyanjana(c) => {
                word.push(*c);
                match units.peek() {
                    Some(Viccheda::Swara { vowel, mark }) => {
                        match swara_to_matra(*vowel) {
                            Some(Some(matra)) => word.push(matra),
                            Some(None) => {}
                            None => word.push(*vowel),
                        }
                        word.extend(*mark);
                        units.next();
                    }
                    Some(Viccheda::Matra(m)) => {
                        word.push(*m);
                        units.next();
                    }
                    Some(Viccheda::InherentA) => {
                        units.next();
                    }
                    Some(Viccheda::Mark(m)) => {
                        word.push(*m);
                        units.next();
                    }
                    _ => word.push(HALANTA),
                }
            }
            Viccheda::Matra(m) => word.push(*m),
            Viccheda::InherentA => {}
            Viccheda::Mark(m) => word.push(*m),
            Viccheda::Verbatim(s) => word.push_str(s),
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::VISARGA;

    fn render(units: &[Viccheda]) -> Vec<String> {
        units.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn technical_split_of_a_conjunct() {
        assert_eq!(
            render(&split_varna_word("कृष्णः", true)),
            vec!["क्", "ृ", "ष्", "ण्", "-अ", "ः"]
        );
    }

    #[test]
    fn normalised_split_uses_full_vowels() {
        assert_eq!(
            render(&split_varna_word("कृष्णः", false)),
            vec!["क्", "ऋ", "ष्", "ण्", "अः"]
        );
        assert_eq!(render(&split_varna_word("आत्मा", false)), vec!["आ", "त्", "म्", "आ"]);
    }

    #[test]
    fn vowel_initial_word_with_mark() {
        let units = split_varna_word("अः", true);
        assert_eq!(units, vec![Viccheda::swara('अ'), Viccheda::Mark(VISARGA)]);
        assert_eq!(join_varna(&units), "अः");
    }

    #[test]
    fn join_restores_words() {
        for word in ["संस्कृतम्", "कृष्णः", "वाक्", "अग्निः", "ऋषिः", "सँल्लेखः", "ॐ", "गोऽपि"] {
            assert_eq!(join_varna(&split_varna_word(word, true)), word, "{word}");
        }
    }

    #[test]
    fn join_accepts_normalised_units() {
        let units = split_varna_word("रामः", false);
        assert_eq!(join_varna(&units), "रामः");
        let units = split_varna_word("देवेषु", false);
        assert_eq!(join_varna(&units), "देवेषु");
    }

    #[test]
    fn flat_split_keeps_separators() {
        let flat = split_varna_flat("राम वन।सीता", true);
        assert!(flat.contains(&Viccheda::Verbatim(" ".to_string())));
        assert!(flat.contains(&Viccheda::Verbatim("\n".to_string())));
        assert_eq!(join_varna(&flat), "राम वन\nसीता");
    }

    #[test]
    fn letters_split_folded_marks() {
        let units = split_varna_word("अः", false);
        assert_eq!(units[0].letters(), vec!["अ".to_string(), "ः".to_string()]);
    }
}
