//! Label conventions shared by every labeled LookML entity.
//!
//! A label is checked against two word lists:
//!
//! - **acronyms** must appear fully upper-cased (`ID`, not `Id`)
//! - **abbreviations** must not appear at all and should be spelled out

use std::collections::BTreeMap;

/// Acronym and abbreviation lists used when checking labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelRules<'a> {
    /// Words that must be written upper-case.
    pub acronyms: &'a [String],
    /// Words that must be expanded.
    pub abbreviations: &'a [String],
}

impl<'a> LabelRules<'a> {
    /// Creates a new rule set from the two word lists.
    #[must_use]
    pub fn new(acronyms: &'a [String], abbreviations: &'a [String]) -> Self {
        Self {
            acronyms,
            abbreviations,
        }
    }

    /// Returns true if neither list has entries, so no label can be flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acronyms.is_empty() && self.abbreviations.is_empty()
    }
}

/// An entity with a human-readable label.
///
/// Implementors only provide [`Labeled::label`]; the checks are shared.
pub trait Labeled {
    /// Returns the effective label (explicit or derived from the name).
    fn label(&self) -> &str;

    /// Returns the naming-convention issues of this entity's label.
    fn label_issues(&self, rules: LabelRules<'_>) -> Vec<String> {
        label_issues(self.label(), rules.acronyms, rules.abbreviations)
    }
}

/// Checks a label against acronym and abbreviation lists.
///
/// Acronyms found in the wrong case are reported upper-cased, abbreviations
/// found in any case are reported title-cased. Acronym findings come first,
/// each group in list order. An empty result means the label is clean.
#[must_use]
pub fn label_issues(label: &str, acronyms: &[String], abbreviations: &[String]) -> Vec<String> {
    let acronyms_used = acronyms
        .iter()
        .filter(|a| contains_bad_acronym_usage(label, a))
        .map(|a| a.to_uppercase());
    let abbreviations_used = abbreviations
        .iter()
        .filter(|a| contains_bad_abbreviation_usage(label, a))
        .map(|a| title_case(a));
    acronyms_used.chain(abbreviations_used).collect()
}

fn contains_bad_acronym_usage(label: &str, acronym: &str) -> bool {
    let acronym = acronym.to_uppercase();
    label.split_whitespace().any(|word| {
        let upper = word.to_uppercase();
        upper == acronym && word != upper
    })
}

fn contains_bad_abbreviation_usage(label: &str, abbreviation: &str) -> bool {
    let abbreviation = abbreviation.to_lowercase();
    label
        .split_whitespace()
        .any(|word| word.to_lowercase() == abbreviation)
}

/// Derives the default label for a LookML name: `order_id` becomes `Order Id`.
#[must_use]
pub fn default_label(name: &str) -> String {
    title_case(&name.replace('_', " "))
}

/// Title-cases text: a letter is title-cased when it follows an uncased
/// character and lower-cased otherwise, so `2nd item` becomes `2Nd Item`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else if let Some(title) = digraph_titlecase(c) {
            out.push(title);
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = is_cased(c);
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || digraph_titlecase(c) == Some(c)
}

/// Latin digraphs whose title case differs from their upper case.
fn digraph_titlecase(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

/// Collects label issues of `items`, keyed by label, skipping clean items.
pub(crate) fn rollup<'i, T, I>(items: I, rules: LabelRules<'_>) -> BTreeMap<String, Vec<String>>
where
    T: Labeled + 'i,
    I: IntoIterator<Item = &'i T>,
{
    items
        .into_iter()
        .filter_map(|item| {
            let issues = item.label_issues(rules);
            (!issues.is_empty()).then(|| (item.label().to_string(), issues))
        })
        .collect()
}
