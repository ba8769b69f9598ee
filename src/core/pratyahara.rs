// File: src/core/pratyahara.rs
//! Pratyaahaara: two-letter names for runs of the Maheshwara sutras.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;
use tracing::warn;

use crate::core::alphabet::HALANTA;

/// The fourteen sutras: their members followed by the closing consonant
/// (the "it" marker, written with a virama).
pub const MAHESHWARA_SUTRA: [(&[char], char); 14] = [
    (&['अ', 'इ', 'उ'], 'ण'),
    (&['ऋ', 'ऌ'], 'क'),
    (&['ए', 'ओ'], 'ङ'),
    (&['ऐ', 'औ'], 'च'),
    (&['ह', 'य', 'व', 'र'], 'ट'),
    (&['ल'], 'ण'),
    (&['ञ', 'म', 'ङ', 'ण', 'न'], 'म'),
    (&['झ', 'भ'], 'ञ'),
    (&['घ', 'ढ', 'ध'], 'ष'),
    (&['ज', 'ब', 'ग', 'ड', 'द'], 'श'),
    (&['ख', 'फ', 'छ', 'ठ', 'थ', 'च', 'ट', 'त'], 'व'),
    (&['क', 'प'], 'य'),
    (&['श', 'ष', 'स'], 'र'),
    (&['ह'], 'ल'),
];

/// One position of the canonical ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Krama {
    Varna(char),
    It(char),
}

impl Krama {
    pub fn is_it(self) -> bool {
        matches!(self, Krama::It(_))
    }
}

impl fmt::Display for Krama {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Krama::Varna(c) => write!(f, "{c}"),
            Krama::It(c) => write!(f, "{c}{HALANTA}"),
        }
    }
}

/// All sutras concatenated.
pub static MAHESHWARA_KRAMA: LazyLock<Vec<Krama>> = LazyLock::new(|| {
    MAHESHWARA_SUTRA
        .iter()
        .flat_map(|(members, it)| {
            members.iter().map(|&c| Krama::Varna(c)).chain(std::iter::once(Krama::It(*it)))
        })
        .collect()
});

/// A pratyaahaara: the first member of a run and the marker closing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pratyahara {
    pub aadi: char,
    pub it: char,
}

impl Pratyahara {
    /// Parses a code such as `अच्` or `हल्`.
    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(aadi), Some(it), Some(HALANTA), None) => Some(Self { aadi, it }),
            _ => None,
        }
    }
}

impl fmt::Display for Pratyahara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.aadi, self.it, HALANTA)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PratyaharaError {
    #[error("none of the letters occurs in the Maheshwara sutras")]
    Empty,
    #[error("cannot form a pratyaahaara due to discontinuity")]
    Discontinuous,
    #[error("cannot form a pratyaahaara due to end position")]
    NoTerminator,
}

/// Forms the pratyaahaara naming exactly `letters`.
///
/// Letters occurring in more than one sutra are tried at every position; the
/// first assignment whose positions are contiguous (markers not counted) is
/// kept. The position after the run must be a marker. Letters that are not
/// part of the sutras are ignored.
pub fn form_pratyahara(letters: &[char]) -> Result<Pratyahara, PratyaharaError> {
    let result = form(letters);
    if let Err(err) = result {
        warn!(?letters, "{err}");
    }
    result
}

fn form(letters: &[char]) -> Result<Pratyahara, PratyaharaError> {
    let krama = &*MAHESHWARA_KRAMA;

    // letter -> [(count index, ordering index)], in order of first occurrence
    let mut placements: Vec<(char, Vec<(usize, usize)>)> = Vec::new();
    let mut markers = 0;
    for (idx, entry) in krama.iter().enumerate() {
        match *entry {
            Krama::It(_) => markers += 1,
            Krama::Varna(c) if letters.contains(&c) => {
                let position = (idx - markers, idx);
                match placements.iter_mut().find(|(letter, _)| *letter == c) {
                    Some((_, positions)) => positions.push(position),
                    None => placements.push((c, vec![position])),
                }
            }
            Krama::Varna(_) => {}
        }
    }
    if placements.is_empty() {
        return Err(PratyaharaError::Empty);
    }

    let options: Vec<&[(usize, usize)]> = placements.iter().map(|(_, p)| p.as_slice()).collect();
    let chosen = cartesian(&options)
        .into_iter()
        .find(|assignment| {
            let mut counts: Vec<usize> = assignment.iter().map(|&(count, _)| count).collect();
            counts.sort_unstable();
            counts.windows(2).all(|pair| pair[1] == pair[0] + 1)
        })
        .ok_or(PratyaharaError::Discontinuous)?;

    let start = chosen.iter().map(|&(_, idx)| idx).min().ok_or(PratyaharaError::Empty)?;
    let end = chosen.iter().map(|&(_, idx)| idx).max().ok_or(PratyaharaError::Empty)?;
    let (Krama::Varna(aadi), Some(Krama::It(it))) = (krama[start], krama.get(end + 1).copied()) else {
        return Err(PratyaharaError::NoTerminator);
    };
    Ok(Pratyahara { aadi, it })
}

/// Every way of picking one element from each of `options`, in
/// lexicographic order.
fn cartesian<T: Copy>(options: &[&[T]]) -> Vec<Vec<T>> {
    options.iter().fold(vec![Vec::new()], |acc, choices| {
        acc.into_iter()
            .flat_map(|prefix| {
                choices.iter().map(move |&choice| {
                    let mut next = prefix.clone();
                    next.push(choice);
                    next
                })
            })
            .collect()
    })
}

/// Every run a pratyaahaara may denote. A letter or marker that recurs in the
/// sutras makes the code ambiguous; the caller picks by context.
pub fn resolve_pratyahara(pratyahara: &Pratyahara) -> Vec<Vec<char>> {
    let krama = &*MAHESHWARA_KRAMA;
    let starts = krama.iter().enumerate().filter(|(_, e)| **e == Krama::Varna(pratyahara.aadi));
    let ends: Vec<usize> = krama
        .iter()
        .enumerate()
        .filter(|(_, e)| **e == Krama::It(pratyahara.it))
        .map(|(idx, _)| idx)
        .collect();

    starts
        .flat_map(|(start, _)| ends.iter().filter(move |&&end| start < end).map(move |&end| (start, end)))
        .map(|(start, end)| {
            krama[start..end]
                .iter()
                .filter_map(|entry| match entry {
                    Krama::Varna(c) => Some(*c),
                    Krama::It(_) => None,
                })
                .collect()
        })
        .collect()
}

/// Convenience wrapper over `resolve_pratyahara` for a textual code.
pub fn resolve(code: &str) -> Option<Vec<Vec<char>>> {
    Pratyahara::parse(code).map(|p| resolve_pratyahara(&p))
}

/// How many times each letter occurs as a member of the sutras.
pub fn recurrences() -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for entry in MAHESHWARA_KRAMA.iter() {
        if let Krama::Varna(c) = entry {
            *counts.entry(*c).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn krama_has_fourteen_markers() {
        assert_eq!(MAHESHWARA_KRAMA.iter().filter(|e| e.is_it()).count(), 14);
        assert_eq!(MAHESHWARA_KRAMA.len(), 57);
        assert_eq!(recurrences().get(&'ह'), Some(&2));
    }

    #[test]
    fn forms_classic_codes() {
        assert_eq!(form_pratyahara(&['अ', 'इ', 'उ']).map(|p| p.to_string()), Ok("अण्".to_string()));
        assert_eq!(
            form_pratyahara(&['अ', 'इ', 'उ', 'ऋ', 'ऌ', 'ए', 'ओ', 'ऐ', 'औ']).map(|p| p.to_string()),
            Ok("अच्".to_string())
        );
        assert_eq!(form_pratyahara(&['य', 'व', 'र', 'ल']).map(|p| p.to_string()), Ok("यण्".to_string()));
        assert_eq!(form_pratyahara(&['झ', 'भ']).map(|p| p.to_string()), Ok("झञ्".to_string()));
    }

    #[test]
    fn recurring_letter_is_placed_where_it_fits() {
        // ह occurs in the fifth and the last sutra
        assert_eq!(form_pratyahara(&['श', 'ष', 'स', 'ह']).map(|p| p.to_string()), Ok("शल्".to_string()));
        assert_eq!(form_pratyahara(&['ह', 'य', 'व', 'र']).map(|p| p.to_string()), Ok("हट्".to_string()));
    }

    #[test]
    fn discontinuous_set_fails() {
        assert_eq!(form_pratyahara(&['अ', 'ए']), Err(PratyaharaError::Discontinuous));
        assert_eq!(form_pratyahara(&['अ', 'क']), Err(PratyaharaError::Discontinuous));
    }

    #[test]
    fn run_not_closed_by_marker_fails() {
        assert_eq!(form_pratyahara(&['अ', 'इ']), Err(PratyaharaError::NoTerminator));
        assert_eq!(form_pratyahara(&['a']), Err(PratyaharaError::Empty));
    }

    #[test]
    fn resolves_ambiguous_codes() {
        let runs = resolve("अण्").unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec!['अ', 'इ', 'उ']);
        assert_eq!(runs[1].last(), Some(&'ल'));

        let hal = resolve("हल्").unwrap();
        assert_eq!(hal.len(), 2);
        assert_eq!(hal[0].len(), 34);
        assert_eq!(hal[1], vec!['ह']);
    }

    #[test]
    fn each_sutra_names_itself() {
        // the last sutra holds only the recurring ह, which is placed in the fifth first
        for (members, it) in &MAHESHWARA_SUTRA[..13] {
            assert_eq!(form_pratyahara(members).map(|p| p.it), Ok(*it));
        }
        assert_eq!(form_pratyahara(&['ह']), Err(PratyaharaError::NoTerminator));
    }

    #[test]
    fn parse_requires_marker() {
        assert!(Pratyahara::parse("अच्").is_some());
        assert!(Pratyahara::parse("अच").is_none());
        assert!(Pratyahara::parse("").is_none());
        assert!(resolve("खय").is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn members() -> Vec<char> {
        recurrences().into_keys().collect()
    }

    proptest! {
        #[test]
        fn formed_codes_resolve_to_their_letters(
            letters in proptest::sample::subsequence(members(), 1..8)
        ) {
            if let Ok(pratyahara) = form_pratyahara(&letters) {
                let wanted: BTreeSet<char> = letters.iter().copied().collect();
                let runs = resolve_pratyahara(&pratyahara);
                prop_assert!(runs.iter().any(|run| run.iter().copied().collect::<BTreeSet<_>>() == wanted));
            }
        }
    }
}
