// File: src/core/ucchaarana.rs
//! Place of articulation (sthaana) and effort (prayatna) of letters.

use std::sync::LazyLock;

use serde::Serialize;

use crate::core::alphabet::{
    varga_column, ANTAHSTHA, ANUDATTA, ANUSWARA, AUSHTHYA, CHANDRABINDU, DANTYA, HALANTA,
    JIHVAAMULIYA, KANTHYA, MURDHANYA, SWARA, SWARITA, TALAVYA, UPADHMANIYA, USHMA, VARGA,
    VISARGA,
};
use crate::core::pratyahara::resolve;
use crate::core::text::split_lines;
use crate::core::varna::split_varna_word;

/// A classification dimension: each class has a short code, a Sanskrit name
/// and a static membership table.
pub trait Ucchaarana: Copy + Sized + 'static {
    fn code(self) -> &'static str;
    fn name(self) -> &'static str;
    fn table() -> &'static [(Self, Vec<String>)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sthaana {
    Kantha,
    Talu,
    Murdha,
    Danta,
    Oshtha,
    Nasika,
    KanthaTalu,
    KanthaOshtha,
    DantaOshtha,
    Jihvamula,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Aabhyantara {
    Sprishta,
    IshatSprishta,
    IshadVivrita,
    Vivrita,
    Samvrita,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Baahya {
    Vivara,
    Samvara,
    Shvasa,
    Naada,
    Ghosha,
    Aghosha,
    Alpaprana,
    Mahaprana,
    Udatta,
    Anudatta,
    Svarita,
}

fn letters<I: IntoIterator<Item = char>>(chars: I) -> Vec<String> {
    chars.into_iter().map(String::from).collect()
}

fn run(code: &str) -> Vec<char> {
    resolve(code).and_then(|runs| runs.into_iter().next()).unwrap_or_default()
}

static STHAANA: LazyLock<Vec<(Sthaana, Vec<String>)>> = LazyLock::new(|| {
    vec![
        (Sthaana::Kantha, letters(['अ', 'आ'].into_iter().chain(KANTHYA).chain(['ह', VISARGA]))),
        (Sthaana::Talu, letters(['इ', 'ई'].into_iter().chain(TALAVYA).chain(['य', 'श']))),
        (Sthaana::Murdha, letters(['ऋ', 'ॠ'].into_iter().chain(MURDHANYA).chain(['र', 'ष']))),
        (Sthaana::Danta, letters(['ऌ', 'ॡ'].into_iter().chain(DANTYA).chain(['ल', 'स']))),
        (Sthaana::Oshtha, letters(['उ', 'ऊ'].into_iter().chain(AUSHTHYA).chain([UPADHMANIYA]))),
        (Sthaana::Nasika, letters(varga_column(4).chain([ANUSWARA]))),
        (Sthaana::KanthaTalu, letters(['ए', 'ऐ'])),
        (Sthaana::KanthaOshtha, letters(['ओ', 'औ'])),
        (Sthaana::DantaOshtha, letters(['व'])),
        (Sthaana::Jihvamula, letters([JIHVAAMULIYA])),
    ]
});

static AABHYANTARA: LazyLock<Vec<(Aabhyantara, Vec<String>)>> = LazyLock::new(|| {
    vec![
        (Aabhyantara::Sprishta, letters(VARGA.into_iter().flatten())),
        (Aabhyantara::IshatSprishta, letters(ANTAHSTHA)),
        (Aabhyantara::IshadVivrita, letters(USHMA.into_iter().chain([JIHVAAMULIYA, UPADHMANIYA]))),
        (
            Aabhyantara::Vivrita,
            letters(SWARA[1..].iter().copied().chain([CHANDRABINDU, ANUSWARA, VISARGA])),
        ),
        (Aabhyantara::Samvrita, letters(SWARA[..1].iter().copied())),
    ]
});

static BAAHYA: LazyLock<Vec<(Baahya, Vec<String>)>> = LazyLock::new(|| {
    let khar = letters(run("खर्"));
    let hash = letters(run("हश्"));
    vec![
        (Baahya::Vivara, khar.clone()),
        (Baahya::Samvara, hash.clone()),
        (Baahya::Shvasa, khar.clone()),
        (Baahya::Naada, hash.clone()),
        (Baahya::Ghosha, hash),
        (Baahya::Aghosha, khar),
        (
            Baahya::Alpaprana,
            letters(
                varga_column(0)
                    .chain(varga_column(2))
                    .chain(varga_column(4))
                    .chain(run("यण्"))
                    .chain([CHANDRABINDU, ANUSWARA]),
            ),
        ),
        (
            Baahya::Mahaprana,
            letters(
                varga_column(1)
                    .chain(varga_column(3))
                    .chain(run("शल्"))
                    .chain([VISARGA, JIHVAAMULIYA, UPADHMANIYA]),
            ),
        ),
        (Baahya::Udatta, letters(SWARA)),
        (Baahya::Anudatta, SWARA.iter().map(|s| format!("{s}{ANUDATTA}")).collect()),
        (Baahya::Svarita, SWARA.iter().map(|s| format!("{s}{SWARITA}")).collect()),
    ]
});

impl Ucchaarana for Sthaana {
    fn code(self) -> &'static str {
        match self {
            Sthaana::Kantha => "K",
            Sthaana::Talu => "T",
            Sthaana::Murdha => "M",
            Sthaana::Danta => "D",
            Sthaana::Oshtha => "O",
            Sthaana::Nasika => "N",
            Sthaana::KanthaTalu => "KT",
            Sthaana::KanthaOshtha => "KO",
            Sthaana::DantaOshtha => "DO",
            Sthaana::Jihvamula => "JM",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Sthaana::Kantha => "कण्ठः",
            Sthaana::Talu => "तालु",
            Sthaana::Murdha => "मूर्धा",
            Sthaana::Danta => "दन्ताः",
            Sthaana::Oshtha => "ओष्ठौ",
            Sthaana::Nasika => "नासिका",
            Sthaana::KanthaTalu => "कण्ठतालु",
            Sthaana::KanthaOshtha => "कण्ठौष्ठम्",
            Sthaana::DantaOshtha => "दन्तौष्ठम्",
            Sthaana::Jihvamula => "जिह्वामूलम्",
        }
    }

    fn table() -> &'static [(Self, Vec<String>)] {
        &STHAANA
    }
}

impl Ucchaarana for Aabhyantara {
    fn code(self) -> &'static str {
        match self {
            Aabhyantara::Sprishta => "SP",
            Aabhyantara::IshatSprishta => "ISP",
            Aabhyantara::IshadVivrita => "IVV",
            Aabhyantara::Vivrita => "VV",
            Aabhyantara::Samvrita => "SV",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Aabhyantara::Sprishta => "स्पृष्टः",
            Aabhyantara::IshatSprishta => "ईषत्स्पृष्टः",
            Aabhyantara::IshadVivrita => "ईषद्विवृतः",
            Aabhyantara::Vivrita => "विवृतः",
            Aabhyantara::Samvrita => "संवृतः",
        }
    }

    fn table() -> &'static [(Self, Vec<String>)] {
        &AABHYANTARA
    }
}

impl Ucchaarana for Baahya {
    fn code(self) -> &'static str {
        match self {
            Baahya::Vivara => "VV",
            Baahya::Samvara => "SV",
            Baahya::Shvasa => "SH",
            Baahya::Naada => "N",
            Baahya::Ghosha => "GH",
            Baahya::Aghosha => "AGH",
            Baahya::Alpaprana => "AP",
            Baahya::Mahaprana => "MP",
            Baahya::Udatta => "U",
            Baahya::Anudatta => "ANU",
            Baahya::Svarita => "SWA",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Baahya::Vivara => "विवारः",
            Baahya::Samvara => "संवारः",
            Baahya::Shvasa => "श्वासः",
            Baahya::Naada => "नादः",
            Baahya::Ghosha => "घोषः",
            Baahya::Aghosha => "अघोषः",
            Baahya::Alpaprana => "अल्पप्राणः",
            Baahya::Mahaprana => "महाप्राणः",
            Baahya::Udatta => "उदात्तः",
            Baahya::Anudatta => "अनुदात्तः",
            Baahya::Svarita => "स्वरितः",
        }
    }

    fn table() -> &'static [(Self, Vec<String>)] {
        &BAAHYA
    }
}

/// Every class of dimension `U` the letter belongs to, in table order.
/// A trailing virama is ignored.
pub fn ucchaarana_letter<U: Ucchaarana>(letter: &str) -> Vec<U> {
    let varna = letter.strip_suffix(HALANTA).unwrap_or(letter);
    U::table()
        .iter()
        .filter(|(_, members)| members.iter().any(|m| m == varna))
        .map(|(class, _)| *class)
        .collect()
}

/// Renders classes as codes joined with `-`, or as Sanskrit names joined with
/// spaces and closed with `च` when there is more than one.
pub fn describe<U: Ucchaarana>(classes: &[U], abbrev: bool) -> String {
    if abbrev {
        return classes.iter().map(|c| c.code()).collect::<Vec<_>>().join("-");
    }
    let mut names: Vec<&str> = classes.iter().map(|c| c.name()).collect();
    if names.len() > 1 {
        names.push("च");
    }
    names.join(" ")
}

/// The letters of a word as pronounced: the normalised varna decomposition
/// with folded marks split out again.
pub fn word_letters(word: &str) -> Vec<String> {
    split_varna_word(word, false).iter().flat_map(|unit| unit.letters()).collect()
}

pub fn ucchaarana_word<U: Ucchaarana>(word: &str) -> Vec<(String, Vec<U>)> {
    word_letters(word)
        .into_iter()
        .map(|letter| {
            let classes = ucchaarana_letter(&letter);
            (letter, classes)
        })
        .collect()
}

pub fn ucchaarana_text<U: Ucchaarana>(text: &str) -> Vec<Vec<Vec<(String, Vec<U>)>>> {
    split_lines(text.trim())
        .into_iter()
        .map(|line| line.split_whitespace().map(ucchaarana_word).collect())
        .collect()
}

/// All three dimensions of one letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub sthaana: Vec<Sthaana>,
    pub aabhyantara: Vec<Aabhyantara>,
    pub baahya: Vec<Baahya>,
}

impl Signature {
    pub fn of(letter: &str) -> Self {
        Self {
            sthaana: ucchaarana_letter(letter),
            aabhyantara: ucchaarana_letter(letter),
            baahya: ucchaarana_letter(letter),
        }
    }

    pub fn describe(&self, abbrev: bool) -> [String; 3] {
        [
            describe(&self.sthaana, abbrev),
            describe(&self.aabhyantara, abbrev),
            describe(&self.baahya, abbrev),
        ]
    }
}

pub fn signature_word(word: &str) -> Vec<(String, Signature)> {
    word_letters(word)
        .into_iter()
        .map(|letter| {
            let signature = Signature::of(&letter);
            (letter, signature)
        })
        .collect()
}

pub fn signature_text(text: &str) -> Vec<Vec<Vec<(String, Signature)>>> {
    split_lines(text.trim())
        .into_iter()
        .map(|line| line.split_whitespace().map(signature_word).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ka_is_a_velar_stop() {
        let signature = Signature::of("क्");
        assert_eq!(signature.sthaana, vec![Sthaana::Kantha]);
        assert_eq!(signature.aabhyantara, vec![Aabhyantara::Sprishta]);
        assert_eq!(
            signature.baahya,
            vec![Baahya::Vivara, Baahya::Shvasa, Baahya::Aghosha, Baahya::Alpaprana]
        );
    }

    #[test]
    fn nasals_have_two_places() {
        assert_eq!(ucchaarana_letter::<Sthaana>("ङ"), vec![Sthaana::Kantha, Sthaana::Nasika]);
        assert_eq!(describe(&[Sthaana::Kantha, Sthaana::Nasika], true), "K-N");
        assert_eq!(describe(&[Sthaana::Kantha, Sthaana::Nasika], false), "कण्ठः नासिका च");
        assert_eq!(describe(&[Sthaana::DantaOshtha], false), "दन्तौष्ठम्");
    }

    #[test]
    fn baahya_tables_come_from_pratyahara() {
        assert_eq!(ucchaarana_letter::<Baahya>("ह"), vec![Baahya::Samvara, Baahya::Naada, Baahya::Ghosha, Baahya::Mahaprana]);
        assert_eq!(ucchaarana_letter::<Baahya>("य"), vec![Baahya::Samvara, Baahya::Naada, Baahya::Ghosha, Baahya::Alpaprana]);
        assert_eq!(ucchaarana_letter::<Baahya>("अ"), vec![Baahya::Udatta]);
        assert_eq!(ucchaarana_letter::<Baahya>("अ॒"), vec![Baahya::Anudatta]);
    }

    #[test]
    fn word_letters_split_folded_marks() {
        assert_eq!(word_letters("रामः"), vec!["र्", "आ", "म्", "अ", "ः"]);
        let sthaana = ucchaarana_word::<Sthaana>("रामः");
        assert_eq!(sthaana.last().map(|(_, s)| s.clone()), Some(vec![Sthaana::Kantha]));
    }

    #[test]
    fn text_is_nested() {
        let nested = signature_text("राम।\nहरि हर");
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[1].len(), 2);
        assert_eq!(nested[1][0][0].0, "ह्");
    }
}
