// File: src/core/alphabet.rs
//! The closed Devanagari alphabet used for Sanskrit, grouped the way the
//! grammatical tradition groups it. Every other module asks this one about
//! membership instead of carrying its own literals.

pub const SWARA: [char; 14] = [
    'अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ऋ', 'ॠ', 'ऌ', 'ॡ', 'ए', 'ऐ', 'ओ', 'औ',
];

/// Dependent vowel signs. `MATRA[i]` belongs to `SWARA[i + 1]`; the
/// inherent `अ` has no sign.
pub const MATRA: [char; 13] = [
    '\u{093e}', '\u{093f}', '\u{0940}', '\u{0941}', '\u{0942}', '\u{0943}', '\u{0944}',
    '\u{0962}', '\u{0963}', '\u{0947}', '\u{0948}', '\u{094b}', '\u{094c}',
];

pub const KANTHYA: [char; 5] = ['क', 'ख', 'ग', 'घ', 'ङ'];
pub const TALAVYA: [char; 5] = ['च', 'छ', 'ज', 'झ', 'ञ'];
pub const MURDHANYA: [char; 5] = ['ट', 'ठ', 'ड', 'ढ', 'ण'];
pub const DANTYA: [char; 5] = ['त', 'थ', 'द', 'ध', 'न'];
pub const AUSHTHYA: [char; 5] = ['प', 'फ', 'ब', 'भ', 'म'];
pub const ANTAHSTHA: [char; 4] = ['य', 'र', 'ल', 'व'];
pub const USHMA: [char; 4] = ['श', 'ष', 'स', 'ह'];
pub const VISHISHTA: [char; 2] = ['ळ', 'ऱ'];

pub const VARGA: [[char; 5]; 5] = [KANTHYA, TALAVYA, MURDHANYA, DANTYA, AUSHTHYA];

pub const OM: char = '\u{0950}';
pub const AVAGRAHA: char = '\u{093d}';

pub const SWARITA: char = '\u{0951}';
pub const DOUBLE_SWARITA: char = '\u{1cda}';
pub const TRIPLE_SWARITA: char = '\u{1cdb}';
pub const ANUDATTA: char = '\u{0952}';

pub const CHANDRABINDU: char = '\u{0901}';
pub const CHANDRABINDU_VIRAMA: char = '\u{a8f3}';
pub const CHANDRABINDU_SPACING: char = '\u{a8f2}';
pub const ANUSWARA: char = '\u{0902}';
pub const VISARGA: char = '\u{0903}';
pub const ARDHAVISARGA: char = '\u{1cf2}';
pub const JIHVAAMULIYA: char = '\u{1cf5}';
pub const UPADHMANIYA: char = '\u{1cf6}';

pub const HALANTA: char = '\u{094d}';
pub const NUKTA: char = '\u{093c}';
pub const ABBREV: char = '\u{0970}';
pub const DANDA: char = '\u{0964}';
pub const DOUBLE_DANDA: char = '\u{0965}';

/// Marks that may follow a vowel within a syllable.
pub const EXTRA_MATRA: [char; 3] = [CHANDRABINDU, ANUSWARA, VISARGA];
pub const AYOGAVAAHA: [char; 5] = [CHANDRABINDU, ANUSWARA, VISARGA, JIHVAAMULIYA, UPADHMANIYA];
pub const VEDIC_MARKS: [char; 4] = [SWARITA, ANUDATTA, DOUBLE_SWARITA, TRIPLE_SWARITA];
pub const SPECIAL: [char; 5] = [AVAGRAHA, OM, NUKTA, CHANDRABINDU_VIRAMA, CHANDRABINDU_SPACING];

pub const SPACES: [char; 4] = [' ', '\t', '\n', '\r'];
pub const PUNC: [char; 3] = [DANDA, DOUBLE_DANDA, ABBREV];
pub const GEN_PUNC: [char; 6] = ['.', ',', ';', '"', '\'', '`'];
pub const DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Short vowels and the signs of the short vowels.
pub const LAGHU_SWARA: [char; 5] = ['अ', 'इ', 'उ', 'ऋ', 'ऌ'];
pub const LAGHU_MATRA: [char; 4] = ['\u{093f}', '\u{0941}', '\u{0943}', '\u{0962}'];

/// Coarse category of a single code point of the supported alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Swara,
    Vyanjana,
    Matra,
    Ayogavaha,
    Special,
    Halanta,
    Vedic,
}

pub fn classify(c: char) -> Option<CharClass> {
    if is_swara(c) {
        Some(CharClass::Swara)
    } else if is_vyanjana(c) {
        Some(CharClass::Vyanjana)
    } else if is_matra(c) {
        Some(CharClass::Matra)
    } else if AYOGAVAAHA.contains(&c) {
        Some(CharClass::Ayogavaha)
    } else if SPECIAL.contains(&c) {
        Some(CharClass::Special)
    } else if c == HALANTA {
        Some(CharClass::Halanta)
    } else if VEDIC_MARKS.contains(&c) {
        Some(CharClass::Vedic)
    } else {
        None
    }
}

pub fn is_swara(c: char) -> bool {
    SWARA.contains(&c)
}

pub fn is_matra(c: char) -> bool {
    MATRA.contains(&c)
}

pub fn is_vargiya(c: char) -> bool {
    VARGA.iter().any(|varga| varga.contains(&c))
}

pub fn is_vyanjana(c: char) -> bool {
    is_vargiya(c) || ANTAHSTHA.contains(&c) || USHMA.contains(&c) || VISHISHTA.contains(&c)
}

/// A vowel or a consonant: the characters that open a new sound unit.
pub fn is_varna(c: char) -> bool {
    is_swara(c) || is_vyanjana(c)
}

pub fn is_extra_matra(c: char) -> bool {
    EXTRA_MATRA.contains(&c)
}

pub fn is_special(c: char) -> bool {
    SPECIAL.contains(&c)
}

/// Anything `clean` keeps from a word.
pub fn in_alphabet(c: char) -> bool {
    classify(c).is_some()
}

/// All consonants in table order: the five vargas, then semivowels,
/// sibilants and the two irregular letters.
pub fn vyanjana() -> impl Iterator<Item = char> {
    VARGA
        .iter()
        .flatten()
        .chain(ANTAHSTHA.iter())
        .chain(USHMA.iter())
        .chain(VISHISHTA.iter())
        .copied()
}

/// The `n`-th member (0-based) of every varga, e.g. `n = 4` gives the nasals.
pub fn varga_column(n: usize) -> impl Iterator<Item = char> {
    VARGA.iter().filter_map(move |varga| varga.get(n).copied())
}

/// `None` for the inherent vowel, which is written without a sign.
pub fn swara_to_matra(swara: char) -> Option<Option<char>> {
    let idx = SWARA.iter().position(|&s| s == swara)?;
    Some(idx.checked_sub(1).map(|m| MATRA[m]))
}

/// Inverse of `swara_to_matra`; `None` as input means "no sign", i.e. `अ`.
pub fn matra_to_swara(matra: Option<char>) -> Option<char> {
    match matra {
        None => Some(SWARA[0]),
        Some(m) => MATRA.iter().position(|&x| x == m).map(|idx| SWARA[idx + 1]),
    }
}

/// The nasal to write for an anusvara placed before `next`: the nasal of the
/// same varga for a stop, the anusvara itself otherwise. With no following
/// character the labial nasal is used.
pub fn anunasika(next: Option<char>) -> char {
    let Some(next) = next else {
        return AUSHTHYA[4];
    };
    VARGA
        .iter()
        .find(|varga| varga.contains(&next))
        .map(|varga| varga[4])
        .unwrap_or(ANUSWARA)
}
