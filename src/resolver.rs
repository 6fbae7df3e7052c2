// WHY: Synonym tokens are cross-referenced back into the article corpus so each
// dialectal synonym can be shown with its own reading for the lect it belongs to

use crate::config::LexiconConfig;
use crate::corpus::{ArticleCorpus, SELF_REFERENCE};
use crate::normalize::clean_pronunciation_list_into;
use std::collections::HashMap;

/// A synonym token split into its parts, borrowing from the raw token
///
/// Raw form is `term[_etymology][:annotation]`. The annotation is split off
/// first, then the etymology number is split off the remaining head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymSpec<'a> {
    pub term: &'a str,
    pub etymology: Option<&'a str>,
    pub annotation: Option<&'a str>,
}

impl<'a> SynonymSpec<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut colon_parts = raw.split(':');
        let head = colon_parts.next().unwrap_or(raw);
        let annotation = colon_parts.next();

        let mut head_parts = head.split('_');
        let term = head_parts.next().unwrap_or(head);
        let etymology = head_parts.next();

        Self {
            term,
            etymology,
            annotation,
        }
    }
}

/// Find the pronunciations of `term` as used in the group rooted at `group_root`
///
/// An explicit etymology number wins when the term has that etymology. Otherwise
/// the term's etymologies are scanned in source order and the first one whose
/// dialect references mention `group_root` or `self` is used.
pub fn resolve_pronunciation<'c>(
    term: &str,
    group_root: &str,
    etymology: Option<&str>,
    corpus: &'c ArticleCorpus,
) -> Option<&'c HashMap<String, String>> {
    let article = corpus.get(term)?;

    let explicit = etymology
        .filter(|number| !number.is_empty())
        .and_then(|number| article.get(number));

    let record = match explicit {
        Some(record) => record,
        None => article.values().find(|record| {
            record
                .dial_refs()
                .iter()
                .any(|reference| reference == group_root || reference == SELF_REFERENCE)
        })?,
    };

    record.pronunciations()
}

/// Render one synonym token for `lect`, with its reading and annotation if known
pub fn render_synonym(
    config: &LexiconConfig,
    lect: &str,
    raw: &str,
    group_root: &str,
    corpus: &ArticleCorpus,
) -> String {
    let spec = SynonymSpec::parse(raw);
    let mut rendered = spec.term.to_string();

    let reading = config.pron_code_for_lect(lect).and_then(|code| {
        resolve_pronunciation(spec.term, group_root, spec.etymology, corpus)
            .and_then(|pron| pron.get(code))
            .filter(|raw_pron| !raw_pron.is_empty())
    });

    if let Some(raw_pron) = reading {
        rendered.push_str(" (");
        clean_pronunciation_list_into(raw_pron, &mut rendered);
        rendered.push(')');
    }
    if let Some(annotation) = spec.annotation {
        rendered.push_str(" [");
        rendered.push_str(annotation);
        rendered.push(']');
    }
    rendered
}

/// Render a lect's synonym list for one dialect group into a single cell
///
/// A single synonym is returned bare. Otherwise every synonym goes on its own
/// doubly indented line within the record.
pub fn render_group(
    config: &LexiconConfig,
    lect: &str,
    synonyms: &[String],
    group_root: &str,
    corpus: &ArticleCorpus,
) -> String {
    let mut rendered: Vec<String> = synonyms
        .iter()
        .map(|raw| render_synonym(config, lect, raw, group_root, corpus))
        .collect();

    if rendered.len() == 1 {
        return rendered.remove(0);
    }

    let format = &config.format;
    let separator = format!("{}{}{}", format.newline, format.indent, format.indent);
    let mut cell = String::new();
    for synonym in &rendered {
        cell.push_str(&separator);
        cell.push_str(synonym);
    }
    cell
}
