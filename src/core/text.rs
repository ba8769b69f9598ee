// File: src/core/text.rs
use crate::core::alphabet::{
    anunasika, in_alphabet, is_matra, is_vargiya, ANUSWARA, DANDA, DIGITS, DOUBLE_DANDA,
    GEN_PUNC, HALANTA, PUNC, SPACES, VISARGA,
};

/// Which characters besides the alphabet survive `clean`.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub punct: bool,
    pub digits: bool,
    pub spaces: bool,
    pub allow: Vec<char>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { punct: false, digits: false, spaces: true, allow: Vec::new() }
    }
}

impl CleanOptions {
    /// Options for a single word: no spaces, nothing extra.
    pub fn word() -> Self {
        Self { spaces: false, ..Self::default() }
    }
}

/// Drops every character outside the alphabet (and the allowed extras), then
/// squeezes runs of whitespace and removes blank lines.
pub fn clean(text: &str, options: &CleanOptions) -> String {
    let keep = |c: char| {
        in_alphabet(c)
            || options.allow.contains(&c)
            || (options.spaces && SPACES.contains(&c))
            || (options.punct && (PUNC.contains(&c) || GEN_PUNC.contains(&c)))
            || (options.digits && DIGITS.contains(&c))
    };
    let kept: String = text.chars().filter(|&c| keep(c)).collect();
    kept.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits text into lines at dandas and line breaks, dropping empty pieces.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(|c: char| c == DANDA || c == DOUBLE_DANDA || c == '\r' || c == '\n')
        .filter(|line| !line.is_empty())
        .collect()
}

/// Removes a final anusvara, virama or visarga, then a final vowel sign.
pub fn trim_matra(line: &str) -> &str {
    let mut answer = line;
    if let Some(last) = answer.chars().last() {
        if [ANUSWARA, HALANTA, VISARGA].contains(&last) {
            answer = &answer[..answer.len() - last.len_utf8()];
        }
    }
    if let Some(last) = answer.chars().last() {
        if is_matra(last) {
            answer = &answer[..answer.len() - last.len_utf8()];
        }
    }
    answer
}

/// Rewrites an anusvara before a stop as the nasal of that stop's varga
/// followed by a virama.
pub fn fix_anuswara(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    for (idx, &c) in chars.iter().enumerate() {
        match chars.get(idx + 1) {
            Some(&next) if c == ANUSWARA && is_vargiya(next) => {
                output.push(anunasika(Some(next)));
                output.push(HALANTA);
            }
            _ => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_removes_foreign_characters_and_squeezes_spaces() {
        let text = "राम:  abc  वनं\n\n गच्छति।";
        assert_eq!(clean(text, &CleanOptions::default()), "राम वनं\nगच्छति");
        let with_punct = CleanOptions { punct: true, ..CleanOptions::default() };
        assert_eq!(clean("रामः।", &with_punct), "रामः।");
        assert_eq!(clean("राम १", &CleanOptions::word()), "राम");
    }

    #[test]
    fn split_lines_on_dandas() {
        assert_eq!(split_lines("रामः वनं गच्छति। सीता\nलक्ष्मणः॥"), vec!["रामः वनं गच्छति", " सीता", "लक्ष्मणः"]);
    }

    #[test]
    fn trim_matra_strips_final_marks() {
        assert_eq!(trim_matra("रामः"), "राम");
        assert_eq!(trim_matra("देवी"), "देव");
        assert_eq!(trim_matra("वनं"), "वन");
        assert_eq!(trim_matra("वाक्"), "वाक");
    }

    #[test]
    fn anusvara_becomes_class_nasal() {
        assert_eq!(fix_anuswara("संगम"), "सङ्गम");
        assert_eq!(fix_anuswara("संतोष"), "सन्तोष");
        assert_eq!(fix_anuswara("संसार"), "संसार");
        assert_eq!(fix_anuswara(""), "");
    }
}
