// File: src/core/syllable.rs
use crate::core::alphabet::{
    is_extra_matra, is_matra, is_special, is_varna, is_vyanjana, HALANTA, LAGHU_MATRA,
    LAGHU_SWARA, MATRA, SWARA,
};
use crate::core::text::{clean, split_lines, CleanOptions};

/// Splits a word into syllables.
///
/// A syllable starts at a vowel, a consonant or a special mark and absorbs
/// every following character that does not start one. A syllable ending in a
/// virama keeps accumulating (the bare consonant joins the next one) unless it
/// is the last, or `technical` is set. In technical mode the extra marks
/// (candrabindu, anusvara, visarga) also open a unit of their own, so each
/// element carries at most one vowel or consonant.
pub fn syllables(word: &str, technical: bool) -> Vec<String> {
    let word = clean(word, &CleanOptions::word());
    let chars: Vec<char> = word.chars().collect();
    let starts_unit = |c: char| is_varna(c) || is_special(c) || (technical && is_extra_matra(c));

    let mut result = Vec::new();
    let mut current = String::new();
    let mut i = 0;
    while i < chars.len() {
        current.push(chars[i]);
        i += 1;
        while i < chars.len() && !starts_unit(chars[i]) {
            current.push(chars[i]);
            i += 1;
        }
        if !current.ends_with(HALANTA) || i == chars.len() || technical {
            result.push(std::mem::take(&mut current));
        }
    }
    result
}

/// Syllables of every word of every line of `text`.
pub fn syllables_text(text: &str, technical: bool) -> Vec<Vec<Vec<String>>> {
    split_lines(text.trim())
        .into_iter()
        .map(|line| line.split_whitespace().map(|word| syllables(word, technical)).collect())
        .collect()
}

/// A syllable is laghu (light) when its only vowel is short.
pub fn is_laghu(syllable: &str) -> bool {
    syllable.chars().all(|c| {
        is_vyanjana(c) || LAGHU_SWARA.contains(&c) || LAGHU_MATRA.contains(&c) || c == HALANTA
    })
}

/// Swaps the vowel of a syllable between its short and long form.
/// Returns `None` when the vowel has no such partner.
pub fn toggle_matra(syllable: &str) -> Option<String> {
    let last = syllable.chars().last()?;
    if is_matra(last) {
        let idx = MATRA.iter().position(|&m| m == last)?;
        let toggled = match idx {
            2 | 4 | 6 | 8 => MATRA[idx - 1],
            1 | 3 | 5 | 7 => MATRA[idx + 1],
            _ => return None,
        };
        let mut result = syllable[..syllable.len() - last.len_utf8()].to_string();
        result.push(toggled);
        return Some(result);
    }

    let mut chars = syllable.chars();
    let (Some(only), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let idx = SWARA.iter().position(|&s| s == only)?;
    match idx {
        0 | 2 | 4 | 6 | 8 => Some(SWARA[idx + 1].to_string()),
        1 | 3 | 5 | 7 | 9 => Some(SWARA[idx - 1].to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjuncts_stay_together() {
        assert_eq!(syllables("कृष्णः", false), vec!["कृ", "ष्णः"]);
        assert_eq!(syllables("रामः", false), vec!["रा", "मः"]);
        assert_eq!(syllables("वाक्", false), vec!["वा", "क्"]);
        assert_eq!(syllables("अग्निः", false), vec!["अ", "ग्निः"]);
    }

    #[test]
    fn technical_mode_separates_consonants_and_marks() {
        assert_eq!(syllables("कृष्णः", true), vec!["कृ", "ष्", "ण", "ः"]);
        assert_eq!(syllables("संस्कृतम्", true), vec!["स", "ं", "स्", "कृ", "त", "म्"]);
    }

    #[test]
    fn foreign_characters_are_dropped() {
        assert_eq!(syllables("rama राम!", false), vec!["रा", "म"]);
        assert!(syllables("", false).is_empty());
    }

    #[test]
    fn text_is_nested_by_line_and_word() {
        let nested = syllables_text("रामः वनम्।\nसीता", false);
        assert_eq!(
            nested,
            vec![
                vec![vec!["रा".to_string(), "मः".to_string()], vec!["व".to_string(), "नम्".to_string()]],
                vec![vec!["सी".to_string(), "ता".to_string()]],
            ]
        );
    }

    #[test]
    fn laghu_and_guru() {
        assert!(is_laghu("क"));
        assert!(is_laghu("कि"));
        assert!(is_laghu("क्ष्म"));
        assert!(!is_laghu("का"));
        assert!(!is_laghu("कः"));
        assert!(!is_laghu("ए"));
    }

    #[test]
    fn toggle_short_and_long() {
        assert_eq!(toggle_matra("कि").as_deref(), Some("की"));
        assert_eq!(toggle_matra("की").as_deref(), Some("कि"));
        assert_eq!(toggle_matra("अ").as_deref(), Some("आ"));
        assert_eq!(toggle_matra("ॡ").as_deref(), Some("ऌ"));
        assert_eq!(toggle_matra("का"), None);
        assert_eq!(toggle_matra("के"), None);
        assert_eq!(toggle_matra("क"), None);
    }
}
