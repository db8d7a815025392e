//! Keyword name normalization and call resolution

use crate::robot::model::{Document, ItemDefinition, LineId, SegmentType, TableType};
use crate::robot::vocabulary::BDD_PREFIXES;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// An embedded argument placeholder such as `${name}`
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{[^{]*\}").unwrap());

const WILDCARD: &str = ".*?";

/// Lowercase and drop spaces and underscores.
///
/// With `for_regex`, the result is a regex source: literal text is escaped and
/// every `${...}` placeholder becomes a non-greedy wildcard.
pub fn normalize_keyword_name(name: &str, for_regex: bool) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .filter(|&c| c != ' ' && c != '_')
        .collect();
    if !for_regex {
        return normalized;
    }

    let mut pattern = String::with_capacity(normalized.len());
    let mut last = 0;
    for placeholder in PLACEHOLDER.find_iter(&normalized) {
        pattern.push_str(&regex::escape(&normalized[last..placeholder.start()]));
        pattern.push_str(WILDCARD);
        last = placeholder.end();
    }
    pattern.push_str(&regex::escape(&normalized[last..]));
    pattern
}

fn leading_bdd_prefix(name: &str) -> Option<&str> {
    let first = name.split(' ').next()?;
    let lowered = first.to_lowercase();
    BDD_PREFIXES
        .contains(&lowered.as_str())
        .then_some(first)
}

/// Remove every leading Given/When/Then/And word.
pub fn strip_bdd_prefixes(name: &str) -> String {
    let mut remainder = name;
    while let Some(prefix) = leading_bdd_prefix(remainder) {
        remainder = remainder[prefix.len()..].trim();
    }
    remainder.to_string()
}

/// The call text itself plus each progressively BDD-stripped remainder, with
/// the offset where that remainder starts in `call`.
///
/// Offsets come from a substring search of the original text, so a remainder
/// that also occurs earlier in the call reports the earlier position.
pub fn candidate_keyword_strings(call: &str) -> Vec<(String, usize)> {
    let mut candidates = vec![(call.to_string(), 0)];
    let mut remainder = call;
    while let Some(prefix) = leading_bdd_prefix(remainder) {
        remainder = remainder[prefix.len()..].trim();
        if remainder.is_empty() {
            break;
        }
        let offset = call.find(remainder).unwrap_or(0);
        candidates.push((remainder.to_string(), offset));
    }
    candidates
}

/// A keyword definition name prepared for matching calls against it.
#[derive(Debug, Clone)]
pub enum KeywordPattern {
    /// Normalized name without placeholders, compared for equality
    Literal(String),
    /// Anchored pattern for a name with embedded arguments
    Embedded(Regex),
}

impl KeywordPattern {
    pub fn new(definition: &str) -> Self {
        let literal = normalize_keyword_name(definition, false);
        if !PLACEHOLDER.is_match(&literal) {
            return KeywordPattern::Literal(literal);
        }
        let source = format!("^(?:{})$", normalize_keyword_name(definition, true));
        match Regex::new(&source) {
            Ok(regex) => KeywordPattern::Embedded(regex),
            Err(_) => KeywordPattern::Literal(literal),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, KeywordPattern::Embedded(_))
    }

    /// Match an already normalized name.
    pub fn matches_normalized(&self, normalized: &str) -> bool {
        match self {
            KeywordPattern::Literal(name) => name == normalized,
            KeywordPattern::Embedded(regex) => regex.is_match(normalized),
        }
    }

    /// Match a call as written, trying every BDD candidate of it.
    pub fn matches(&self, call: &str) -> bool {
        candidate_keyword_strings(call)
            .iter()
            .any(|(candidate, _)| self.matches_normalized(&normalize_keyword_name(candidate, false)))
    }
}

/// Whether `call` invokes the keyword defined as `definition`.
pub fn keyword_matches(call: &str, definition: &str) -> bool {
    KeywordPattern::new(definition).matches(call)
}

impl Document {
    /// Keyword definitions of all keyword tables, in source order.
    pub fn keyword_definitions(&self) -> Vec<(LineId, &ItemDefinition)> {
        self.tables()
            .filter(|(_, table)| table.table_type == TableType::Keyword)
            .flat_map(|(_, table)| table.lines.iter())
            .filter_map(|&id| self.item(id).map(|item| (id, item)))
            .collect()
    }

    /// Keyword name → definition line. A repeated name maps to its last definition.
    pub fn keyword_map(&self) -> &HashMap<String, LineId> {
        self.views.keyword_map.get_or_init(|| {
            self.keyword_definitions()
                .into_iter()
                .map(|(id, item)| (item.name.clone(), id))
                .collect()
        })
    }

    /// Resolve a call through [`Document::keyword_map`], so a repeated name
    /// resolves to the same definition the map holds. Definitions without
    /// embedded arguments take precedence; ties go to the earlier definition.
    pub fn find_keyword(&self, call: &str) -> Option<LineId> {
        let mut definitions: Vec<(&str, LineId)> = self
            .keyword_map()
            .iter()
            .map(|(name, &id)| (name.as_str(), id))
            .collect();
        definitions.sort_by_key(|&(_, id)| id);

        let candidates: Vec<String> = candidate_keyword_strings(call)
            .iter()
            .map(|(candidate, _)| normalize_keyword_name(candidate, false))
            .collect();
        let literal = definitions.iter().find(|(name, _)| {
            !PLACEHOLDER.is_match(name)
                && candidates.contains(&normalize_keyword_name(name, false))
        });
        if let Some(&(_, id)) = literal {
            return Some(id);
        }

        definitions
            .iter()
            .filter(|(name, _)| PLACEHOLDER.is_match(name))
            .find(|(name, _)| KeywordPattern::new(name).matches(call))
            .map(|&(_, id)| id)
    }

    /// Test cases and keywords calling `keyword`, each with the calling steps.
    pub fn keyword_callers(&self, keyword: &str) -> Vec<(LineId, Vec<LineId>)> {
        let pattern = KeywordPattern::new(keyword);
        let mut callers = Vec::new();
        for (_, table) in self.tables() {
            if table.table_type.item_type().is_none() {
                continue;
            }
            for &item_id in &table.lines {
                let Some(item) = self.item(item_id) else {
                    continue;
                };
                let steps: Vec<LineId> = item
                    .steps
                    .iter()
                    .copied()
                    .filter(|&step_id| {
                        self.step(step_id).is_some_and(|step| {
                            step.segments
                                .iter()
                                .filter(|s| s.is(SegmentType::KeywordCall))
                                .any(|s| pattern.matches(s.value()))
                        })
                    })
                    .collect();
                if !steps.is_empty() {
                    callers.push((item_id, steps));
                }
            }
        }
        callers
    }
}
