// src/core/types.rs
//! Grammatical categories used by the lexicons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical number; the column axis of every inflection grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Vachana {
    Eka,
    Dvi,
    Bahu,
}

impl Vachana {
    pub const ALL: [Vachana; 3] = [Vachana::Eka, Vachana::Dvi, Vachana::Bahu];

    pub fn name(self) -> &'static str {
        match self {
            Vachana::Eka => "एकवचनम्",
            Vachana::Dvi => "द्विवचनम्",
            Vachana::Bahu => "बहुवचनम्",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Vachana::Eka => "एक.",
            Vachana::Dvi => "द्वि.",
            Vachana::Bahu => "बहु.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Purusha {
    Prathama,
    Madhyama,
    Uttama,
}

impl Purusha {
    pub const ALL: [Purusha; 3] = [Purusha::Prathama, Purusha::Madhyama, Purusha::Uttama];

    pub fn name(self) -> &'static str {
        match self {
            Purusha::Prathama => "प्रथमपुरुषः",
            Purusha::Madhyama => "मध्यमपुरुषः",
            Purusha::Uttama => "उत्तमपुरुषः",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Purusha::Prathama => "प्र.",
            Purusha::Madhyama => "म.",
            Purusha::Uttama => "उ.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Vibhakti {
    Prathama,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Sambodhana,
}

impl Vibhakti {
    pub const ALL: [Vibhakti; 8] = [
        Vibhakti::Prathama,
        Vibhakti::Dvitiya,
        Vibhakti::Tritiya,
        Vibhakti::Chaturthi,
        Vibhakti::Panchami,
        Vibhakti::Shashthi,
        Vibhakti::Saptami,
        Vibhakti::Sambodhana,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Vibhakti::Prathama => "प्रथमा",
            Vibhakti::Dvitiya => "द्वितीया",
            Vibhakti::Tritiya => "तृतीया",
            Vibhakti::Chaturthi => "चतुर्थी",
            Vibhakti::Panchami => "पञ्चमी",
            Vibhakti::Shashthi => "षष्ठी",
            Vibhakti::Saptami => "सप्तमी",
            Vibhakti::Sambodhana => "सम्बोधनम्",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Vibhakti::Prathama => "प्र.",
            Vibhakti::Dvitiya => "द्वि.",
            Vibhakti::Tritiya => "तृ.",
            Vibhakti::Chaturthi => "च.",
            Vibhakti::Panchami => "पं.",
            Vibhakti::Shashthi => "ष.",
            Vibhakti::Saptami => "स.",
            Vibhakti::Sambodhana => "सं.",
        }
    }
}

/// Gender of a nominal stem, tagged `P`, `S` or `N` in the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Linga {
    #[serde(rename = "P")]
    Pum,
    #[serde(rename = "S")]
    Stri,
    #[serde(rename = "N")]
    Napumsaka,
}

impl Linga {
    pub const ALL: [Linga; 3] = [Linga::Pum, Linga::Stri, Linga::Napumsaka];

    pub fn code(self) -> &'static str {
        match self {
            Linga::Pum => "P",
            Linga::Stri => "S",
            Linga::Napumsaka => "N",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Linga::Pum => "पुंलिङ्गम्",
            Linga::Stri => "स्त्रीलिङ्गम्",
            Linga::Napumsaka => "नपुंसकलिङ्गम्",
        }
    }

    /// Accepts the lexicon code, the Sanskrit name, or `m`/`f`/`n`.
    pub fn parse(text: &str) -> Option<Self> {
        Linga::ALL.into_iter().find(|l| text == l.code() || text == l.name()).or(match text {
            "m" => Some(Linga::Pum),
            "f" => Some(Linga::Stri),
            "n" => Some(Linga::Napumsaka),
            _ => None,
        })
    }
}

/// The ten lakaras (tense/mood paradigms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kala {
    Lat,
    Lit,
    Lut,
    Lrut,
    Lot,
    Lang,
    VidhiLing,
    AashirLing,
    Lung,
    Lrung,
}

impl Kala {
    pub const ALL: [Kala; 10] = [
        Kala::Lat,
        Kala::Lit,
        Kala::Lut,
        Kala::Lrut,
        Kala::Lot,
        Kala::Lang,
        Kala::VidhiLing,
        Kala::AashirLing,
        Kala::Lung,
        Kala::Lrung,
    ];

    fn key(self) -> &'static str {
        match self {
            Kala::Lat => "lat",
            Kala::Lit => "lit",
            Kala::Lut => "lut",
            Kala::Lrut => "lrut",
            Kala::Lot => "lot",
            Kala::Lang => "lang",
            Kala::VidhiLing => "vidhiling",
            Kala::AashirLing => "ashirling",
            Kala::Lung => "lung",
            Kala::Lrung => "lrung",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Kala::Lat => "लट्लकारः",
            Kala::Lit => "लिट्लकारः",
            Kala::Lut => "लुट्लकारः",
            Kala::Lrut => "लृट्लकारः",
            Kala::Lot => "लोट्लकारः",
            Kala::Lang => "लङ्लकारः",
            Kala::VidhiLing => "विधिलिङ्लकारः",
            Kala::AashirLing => "आशीर्लिङ्लकारः",
            Kala::Lung => "लुङ्लकारः",
            Kala::Lrung => "लृङ्लकारः",
        }
    }
}

/// Voice of a conjugation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Voice {
    Parasmaipada,
    Atmanepada,
}

impl Voice {
    pub fn name(self) -> &'static str {
        match self {
            Voice::Parasmaipada => "परस्मैपदम्",
            Voice::Atmanepada => "आत्मनेपदम्",
        }
    }
}

/// A conjugation slot of the verb lexicon, keyed `plat`, `alat`, ...,
/// `pashirling`, `aashirling`, ..., `alrung`. Ordered lakara first, then
/// parasmaipada before atmanepada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Lakara {
    pub kala: Kala,
    pub voice: Voice,
}

impl Lakara {
    pub fn key(self) -> String {
        let prefix = match self.voice {
            Voice::Parasmaipada => 'p',
            Voice::Atmanepada => 'a',
        };
        format!("{prefix}{}", self.kala.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let voice = match key.chars().next()? {
            'p' => Voice::Parasmaipada,
            'a' => Voice::Atmanepada,
            _ => return None,
        };
        let kala = Kala::ALL.into_iter().find(|k| k.key() == &key[1..])?;
        Some(Self { kala, voice })
    }

    /// All twenty slots in display order.
    pub fn all() -> impl Iterator<Item = Lakara> {
        Kala::ALL.into_iter().flat_map(|kala| {
            [Voice::Parasmaipada, Voice::Atmanepada].map(|voice| Lakara { kala, voice })
        })
    }
}

impl fmt::Display for Lakara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kala.name(), self.voice.name())
    }
}

impl TryFrom<String> for Lakara {
    type Error = String;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        Lakara::from_key(&key).ok_or_else(|| format!("unknown lakara `{key}`"))
    }
}

impl From<Lakara> for String {
    fn from(lakara: Lakara) -> Self {
        lakara.key()
    }
}

/// Verb class (gana), 1 to 10, stored as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gana(u8);

impl Gana {
    pub fn new(gana: u8) -> Option<Self> {
        (1..=10).contains(&gana).then_some(Self(gana))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        const NAMES: [&str; 10] = [
            "भ्वादिः",
            "अदादिः",
            "जुहोत्यादिः",
            "दिवादिः",
            "स्वादिः",
            "तुदादिः",
            "रुधादिः",
            "तनादिः",
            "क्र्यादिः",
            "चुरादिः",
        ];
        NAMES[usize::from(self.0) - 1]
    }
}

impl TryFrom<String> for Gana {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.trim()
            .parse::<u8>()
            .ok()
            .and_then(Gana::new)
            .ok_or_else(|| format!("invalid gana `{text}`"))
    }
}

impl From<Gana> for String {
    fn from(gana: Gana) -> Self {
        gana.0.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pada {
    #[serde(rename = "P")]
    Parasmaipada,
    #[serde(rename = "A")]
    Atmanepada,
    #[serde(rename = "U")]
    Ubhayapada,
}

impl Pada {
    pub fn code(self) -> &'static str {
        match self {
            Pada::Parasmaipada => "P",
            Pada::Atmanepada => "A",
            Pada::Ubhayapada => "U",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pada::Parasmaipada => "परस्मैपदम्",
            Pada::Atmanepada => "आत्मनेपदम्",
            Pada::Ubhayapada => "उभयपदम्",
        }
    }
}

/// Whether the root takes the `इट्` augment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Settva {
    #[serde(rename = "S")]
    Set,
    #[serde(rename = "A")]
    Anit,
    #[serde(rename = "V")]
    Vet,
}

impl Settva {
    pub fn code(self) -> &'static str {
        match self {
            Settva::Set => "S",
            Settva::Anit => "A",
            Settva::Vet => "V",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Settva::Set => "सेट्",
            Settva::Anit => "अनिट्",
            Settva::Vet => "वेट्",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karma {
    #[serde(rename = "S")]
    Sakarmaka,
    #[serde(rename = "A")]
    Akarmaka,
}

impl Karma {
    pub fn code(self) -> &'static str {
        match self {
            Karma::Sakarmaka => "S",
            Karma::Akarmaka => "A",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Karma::Sakarmaka => "सकर्मकः",
            Karma::Akarmaka => "अकर्मकः",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lakara_keys_round_trip() {
        assert_eq!(Lakara::all().count(), 20);
        for lakara in Lakara::all() {
            assert_eq!(Lakara::from_key(&lakara.key()), Some(lakara));
        }
        assert_eq!(Lakara::from_key("aashirling").map(|l| l.kala), Some(Kala::AashirLing));
        assert_eq!(Lakara::from_key("pashirling").map(|l| l.voice), Some(Voice::Parasmaipada));
        assert_eq!(Lakara::from_key("xlat"), None);
        assert_eq!(Lakara::from_key(""), None);
    }

    #[test]
    fn lakara_order_is_display_order() {
        let keys: Vec<String> = Lakara::all().take(4).map(Lakara::key).collect();
        assert_eq!(keys, ["plat", "alat", "plit", "alit"]);
        let mut sorted: Vec<Lakara> = Lakara::all().collect();
        sorted.sort();
        assert_eq!(sorted, Lakara::all().collect::<Vec<_>>());
    }

    #[test]
    fn lakara_display() {
        let lakara = Lakara { kala: Kala::Lat, voice: Voice::Parasmaipada };
        assert_eq!(lakara.to_string(), "लट्लकारः (परस्मैपदम्)");
    }

    #[test]
    fn gana_range() {
        assert_eq!(Gana::try_from("10".to_string()).map(Gana::number), Ok(10));
        assert!(Gana::try_from("0".to_string()).is_err());
        assert!(Gana::try_from("11".to_string()).is_err());
        assert_eq!(Gana::new(1).map(Gana::name), Some("भ्वादिः"));
    }

    #[test]
    fn linga_parse() {
        assert_eq!(Linga::parse("S"), Some(Linga::Stri));
        assert_eq!(Linga::parse("पुंलिङ्गम्"), Some(Linga::Pum));
        assert_eq!(Linga::parse("n"), Some(Linga::Napumsaka));
        assert_eq!(Linga::parse("x"), None);
    }
}
