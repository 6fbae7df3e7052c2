// WHY: Decides whether one etymology of one article becomes a lexicon record
// and composes it: headline reading, per-lect readings, relevant synonym groups

use crate::config::{LexiconConfig, CANTONESE_CODE, MANDARIN_CODE};
use crate::corpus::{ArticleCorpus, DialectGraph, DialectGroup, EtymologyRecord, SELF_REFERENCE};
use crate::normalize::{clean_pronunciation_list_into, remove_sandhi_markers};
use crate::resolver::render_group;
use std::collections::HashMap;
use tracing::debug;

/// A dialect-group reference from an etymology's `dial` list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialRef<'a> {
    /// The referenced term is the group root key
    Literal(&'a str),
    /// The article itself is the group root
    SelfReference,
}

impl<'a> DialRef<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if raw == SELF_REFERENCE {
            DialRef::SelfReference
        } else {
            DialRef::Literal(raw)
        }
    }

    /// Group root key, given the name of the article holding the reference
    pub fn root_key(self, article_name: &'a str) -> &'a str {
        match self {
            DialRef::Literal(key) => key,
            DialRef::SelfReference => article_name,
        }
    }
}

/// Result of composing one etymology, with what was skipped along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedEntry {
    /// The formatted record, or `None` when the etymology does not qualify
    pub record: Option<String>,
    /// Dialect references whose key is absent from the dialect graph
    pub missing_groups: usize,
}

/// Composes lexicon records under a fixed configuration
#[derive(Debug, Clone)]
pub struct EntryComposer {
    config: LexiconConfig,
}

impl Default for EntryComposer {
    fn default() -> Self {
        Self::new(LexiconConfig::default())
    }
}

impl EntryComposer {
    pub fn new(config: LexiconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    /// Compose the record for one etymology of `article_name`, if it qualifies
    pub fn compose_entry(
        &self,
        article_name: &str,
        record: &EtymologyRecord,
        graph: &DialectGraph,
        corpus: &ArticleCorpus,
    ) -> Option<String> {
        self.compose(article_name, record, graph, corpus).record
    }

    /// Like [`compose_entry`](Self::compose_entry), also reporting missing dialect groups
    pub fn compose(
        &self,
        article_name: &str,
        record: &EtymologyRecord,
        graph: &DialectGraph,
        corpus: &ArticleCorpus,
    ) -> ComposedEntry {
        let mut outcome = ComposedEntry::default();
        let Some(pron) = record.pronunciations() else {
            return outcome;
        };

        let mut satisfied = self
            .config
            .required_prons
            .iter()
            .any(|code| pron.contains_key(code));

        let Some(headline) = self.headline(pron) else {
            return outcome;
        };

        let format = &self.config.format;
        let mut line = format!(
            "[{article_name}]\t{headline}\t{}Pronunciation:{}{}",
            format.bold, format.end_bold, format.newline
        );
        self.push_pronunciation_block(pron, &mut line);

        for reference in record.dial_refs() {
            let root = DialRef::parse(reference).root_key(article_name);
            let Some(group) = graph.get(root) else {
                debug!("Dialect group {} referenced by {} not found", root, article_name);
                outcome.missing_groups += 1;
                continue;
            };

            let qualifies = self.group_qualifies(article_name, root, group);
            if !self.has_display_lect(group) || !qualifies {
                continue;
            }
            satisfied = true;
            self.push_group_block(root, group, corpus, &mut line);
        }

        if satisfied {
            outcome.record = Some(line);
        } else {
            debug!("No required lect or pronunciation for {}", article_name);
        }
        outcome
    }

    /// Headline reading: Mandarin, else Cantonese in braces, else empty when
    /// another recognized code is present. `None` when nothing is renderable.
    fn headline(&self, pron: &HashMap<String, String>) -> Option<String> {
        if let Some(mandarin) = pron.get(MANDARIN_CODE) {
            return Some(remove_sandhi_markers(first_segment(mandarin)));
        }
        if let Some(cantonese) = pron.get(CANTONESE_CODE) {
            return Some(format!("{{{}}}", first_segment(cantonese)));
        }
        self.config
            .pronunciations
            .iter()
            .any(|p| pron.contains_key(&p.code))
            .then(String::new)
    }

    fn push_pronunciation_block(&self, pron: &HashMap<String, String>, line: &mut String) {
        let format = &self.config.format;
        for code in &self.config.pronunciations {
            if let Some(raw) = pron.get(&code.code) {
                line.push_str(&format.indent);
                line.push_str(&code.label);
                line.push_str(": ");
                clean_pronunciation_list_into(raw, line);
                line.push(' ');
                line.push_str(&format.newline);
            }
        }
    }

    /// A group is relevant when a required lect lists something worth showing:
    /// for the article's own group, anything beyond the article alone; for a
    /// group rooted elsewhere, an entry mentioning the article
    fn group_qualifies(&self, article_name: &str, root: &str, group: &DialectGroup) -> bool {
        self.config
            .required_lects
            .iter()
            .filter_map(|lect| group.dials.get(lect))
            .any(|synonyms| {
                if root == article_name {
                    !(synonyms.len() == 1 && synonyms[0] == article_name)
                } else {
                    synonyms.iter().any(|synonym| synonym.contains(article_name))
                }
            })
    }

    fn has_display_lect(&self, group: &DialectGroup) -> bool {
        self.config
            .display_lects
            .iter()
            .any(|lect| group.dials.contains_key(lect))
    }

    fn push_group_block(
        &self,
        root: &str,
        group: &DialectGroup,
        corpus: &ArticleCorpus,
        line: &mut String,
    ) {
        let format = &self.config.format;
        let root_head = root.split('-').next().unwrap_or(root);
        line.push_str(&format!(
            "{nl} {nl}{}Dialectical synonyms of {root_head}{} ({}): {nl}",
            format.bold,
            format.end_bold,
            group.meaning,
            nl = format.newline,
        ));

        for lect in &self.config.display_lects {
            if let Some(synonyms) = group.dials.get(lect) {
                let cell = render_group(&self.config, lect, synonyms, root, corpus);
                line.push_str(&format!("{}{lect}: {cell}{}", format.indent, format.newline));
            }
        }
    }
}

fn first_segment(raw: &str) -> &str {
    raw.split(',').next().unwrap_or(raw)
}
