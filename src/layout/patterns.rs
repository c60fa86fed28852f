//! Lexical pattern tables for heading, caption, itemize and formula
//! detection.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Leading roman-numeral token, e.g. "IV." or "xii)".
    static ref RE_ROMAN_PREFIX: Regex = Regex::new(r"(?i)^\s*[ivxlcdm]+[.)]?\s+").unwrap();

    /// Table caption lead-in, e.g. "Table 3:" or "Tab. 12".
    static ref RE_TABLE_CAPTION: Regex = Regex::new(r"(?i)^(?:table|tab\.?)\s*\d+").unwrap();

    /// Figure caption lead-in, e.g. "Figure 2." or "Fig. 7".
    static ref RE_FIGURE_CAPTION: Regex = Regex::new(r"(?i)^(?:figure|fig\.?)\s*\d+").unwrap();

    /// Trailing displayed-equation label, e.g. "... x + y (35)".
    static ref RE_FORMULA_LABEL: Regex = Regex::new(r"\(\d+\)\s*$").unwrap();

    /// Itemize/numbering lead-in patterns. A match counts only when the
    /// captured numbering is non-empty.
    static ref ITEMIZE_LEAD_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^(\d+)\.?$").unwrap(),
        Regex::new(r"^\(?(\d+)\)$").unwrap(),
        Regex::new(r"^(\d+(?:\.\d+)+)\.?$").unwrap(),
        Regex::new(r"^([a-zA-Z])[.)]$").unwrap(),
        Regex::new(r"^\(([a-zA-Z])\)$").unwrap(),
        Regex::new(r"(?i)^\(?([ivxlcdm]+)\)$").unwrap(),
        Regex::new(r"^([\u{2022}\u{25E6}\u{25AA}\u{2023}\u{00B7}*\u{2013}-])$").unwrap(),
    ];

    static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "about", "above", "after", "again", "all", "an", "and", "any",
        "are", "as", "at", "be", "been", "but", "by", "can", "do", "for",
        "from", "had", "has", "have", "if", "in", "into", "is", "it", "its",
        "more", "no", "not", "of", "on", "or", "our", "so", "such", "than",
        "that", "the", "their", "then", "there", "these", "this", "those",
        "to", "under", "up", "was", "we", "were", "which", "while", "with",
    ]
    .into_iter()
    .collect();

    /// Well-known section headings, in normalized (letters-only) form.
    static ref SECTION_HEADINGS: HashSet<&'static str> = [
        "abstract", "introduction", "background", "relatedwork", "method",
        "methods", "methodology", "approach", "experiments", "evaluation",
        "results", "discussion", "conclusion", "conclusions", "futurework",
        "summary", "references", "bibliography", "acknowledgment",
        "acknowledgments", "acknowledgement", "acknowledgements", "appendix",
    ]
    .into_iter()
    .collect();

    static ref ABSTRACT_HEADINGS: HashSet<&'static str> =
        ["abstract"].into_iter().collect();

    static ref REFERENCES_HEADINGS: HashSet<&'static str> =
        ["references", "reference", "bibliography", "literaturecited"]
            .into_iter()
            .collect();

    static ref APPENDIX_HEADINGS: HashSet<&'static str> =
        ["appendix", "appendices"].into_iter().collect();

    static ref ACKNOWLEDGMENT_HEADINGS: HashSet<&'static str> = [
        "acknowledgment", "acknowledgments", "acknowledgement",
        "acknowledgements",
    ]
    .into_iter()
    .collect();

    static ref CONTENTS_HEADINGS: HashSet<&'static str> =
        ["contents", "tableofcontents", "outline"].into_iter().collect();

    /// Words that read as mathematical notation.
    static ref MATH_WORDS: HashSet<&'static str> = [
        "+", "-", "=", "<", ">", "/", "±", "×", "÷", "·", "≤", "≥", "≈",
        "≠", "∑", "∏", "∫", "√", "∞", "∂", "∇", "∈", "∉", "⊂", "⊆", "∪",
        "∩", "∀", "∃", "→", "←", "↔", "⇒", "⇔", "α", "β", "γ", "δ", "ε",
        "ζ", "η", "θ", "λ", "μ", "ξ", "π", "ρ", "σ", "τ", "φ", "χ", "ψ",
        "ω", "Δ", "Γ", "Λ", "Ω", "Φ", "Ψ", "Σ", "Π", "sin", "cos", "tan",
        "log", "ln", "exp", "lim", "min", "max", "arg", "sup", "inf", "mod",
        "det", "dim",
    ]
    .into_iter()
    .collect();
}

/// Normalize a prospective heading: strip a leading roman-numeral token,
/// drop everything but letters, lowercase.
///
/// `"3.2 Results"` → `"results"`, `"IV. Related Work"` → `"relatedwork"`.
pub(crate) fn normalize_heading(text: &str) -> String {
    let stripped = RE_ROMAN_PREFIX.replace(text, "");
    stripped
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalize a word for frequency counting: lowercase, with
/// non-alphanumeric characters trimmed from both ends.
pub(crate) fn normalize_word(text: &str) -> String {
    text.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

pub(crate) fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub(crate) fn matches_abstract_heading(normalized: &str) -> bool {
    ABSTRACT_HEADINGS.contains(normalized)
}

pub(crate) fn matches_references_heading(normalized: &str) -> bool {
    REFERENCES_HEADINGS.contains(normalized)
}

pub(crate) fn matches_appendix_heading(normalized: &str) -> bool {
    APPENDIX_HEADINGS.contains(normalized)
}

pub(crate) fn matches_acknowledgment_heading(normalized: &str) -> bool {
    ACKNOWLEDGMENT_HEADINGS.contains(normalized)
}

pub(crate) fn matches_contents_heading(normalized: &str) -> bool {
    CONTENTS_HEADINGS.contains(normalized)
}

pub(crate) fn is_well_known_section_heading(normalized: &str) -> bool {
    SECTION_HEADINGS.contains(normalized)
}

pub(crate) fn is_table_caption(text: &str) -> bool {
    RE_TABLE_CAPTION.is_match(text)
}

pub(crate) fn is_figure_caption(text: &str) -> bool {
    RE_FIGURE_CAPTION.is_match(text)
}

pub(crate) fn has_formula_label(text: &str) -> bool {
    RE_FORMULA_LABEL.is_match(text)
}

/// Whether `word` matches one of the itemize/numbering lead-in patterns
/// with a non-empty captured numbering.
pub(crate) fn itemize_lead_capture(word: &str) -> bool {
    ITEMIZE_LEAD_PATTERNS.iter().any(|pattern| {
        pattern
            .captures(word)
            .and_then(|captures| captures.get(1))
            .map_or(false, |group| !group.as_str().is_empty())
    })
}

/// Whether `word` is listed in the math-symbol table.
pub(crate) fn is_math_word(word: &str) -> bool {
    MATH_WORDS.contains(word) || MATH_WORDS.contains(word.to_lowercase().as_str())
}

/// Whether `word` contains a sub- or superscript character.
pub(crate) fn has_script_glyph(word: &str) -> bool {
    word.chars().any(|c| {
        ('\u{2070}'..='\u{209F}').contains(&c) || matches!(c, '\u{00B9}' | '\u{00B2}' | '\u{00B3}')
    })
}
