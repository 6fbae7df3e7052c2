// End-to-end composition through the public API
// WHY: Covers the qualification rules against a realistic pair of input datasets

use lectlex::{ArticleCorpus, DialectGraph, EntryComposer, LexiconConfig, RecordFormat};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{ARTICLE_DATA, DIAL_DATA};

const NL: &str = "\u{EAB1}";
const B: &str = "\u{EAB2}";
const EB: &str = "\u{EAB3}";

fn inputs() -> (ArticleCorpus, DialectGraph) {
    let corpus: ArticleCorpus = serde_json::from_str(ARTICLE_DATA).expect("Articles should parse");
    let graph: DialectGraph = serde_json::from_str(DIAL_DATA).expect("Dialects should parse");
    (corpus, graph)
}

fn compose(composer: &EntryComposer, name: &str, etymology: &str) -> Option<String> {
    let (corpus, graph) = inputs();
    let record = corpus
        .get(name)
        .and_then(|article| article.get(etymology))
        .expect("Fixture etymology should exist");
    composer.compose_entry(name, record, &graph, &corpus)
}

#[test]
fn test_self_rooted_entry() {
    let line = compose(&EntryComposer::default(), "一點", "1").expect("Record should be produced");

    let expected = [
        format!("[一點]\tyīdiǎn\t{B}Pronunciation:{EB}{NL}"),
        format!("  Mandarin: yīdiǎn {NL}"),
        format!("  Cantonese: jat¹ dim² {NL}"),
        format!("{NL} {NL}{B}Dialectical synonyms of 一點{EB} (a bit): {NL}"),
        format!("  Hong Kong: {NL}    啲 (dit¹){NL}    少少 [colloquial]{NL}"),
        format!("  Beijing: 一點 (yīdiǎn){NL}"),
    ]
    .concat();
    assert_eq!(line, expected);
}

#[test]
fn test_referenced_synonym_entry() {
    let line = compose(&EntryComposer::default(), "啲", "2").expect("Record should be produced");
    assert!(line.starts_with(&format!("[啲]\t{{dit1}}\t{B}Pronunciation:{EB}{NL}  Cantonese: dit¹ {NL}")));
    assert!(line.contains("Dialectical synonyms of 一點"));
}

#[test]
fn test_entry_without_relevant_group_omitted() {
    // 其他 is not in the dialect graph and 啲 has no required pronunciation
    assert_eq!(compose(&EntryComposer::default(), "啲", "1"), None);
}

#[test]
fn test_entry_without_pronunciation_omitted() {
    assert_eq!(compose(&EntryComposer::default(), "冇", "1"), None);
}

#[test]
fn test_required_pronunciation_entry() {
    let line = compose(&EntryComposer::default(), "開", "1").expect("Record should be produced");
    assert_eq!(line, format!("[開]\t\t{B}Pronunciation:{EB}{NL}  Taishanese: hoi³³ {NL}"));
}

#[test]
fn test_record_fields_are_tab_separated_on_one_line() {
    for (name, etymology) in [("一點", "1"), ("啲", "2"), ("開", "1")] {
        let line = compose(&EntryComposer::default(), name, etymology).expect("Record should be produced");
        assert_eq!(line.split('\t').count(), 3, "{name} should have three fields");
        assert!(!line.contains('\n'), "{name} should stay on one physical line");
    }
}

#[test]
fn test_alternate_record_format() {
    let config = LexiconConfig {
        format: RecordFormat {
            newline: "|".to_string(),
            bold: "<b>".to_string(),
            end_bold: "</b>".to_string(),
            indent: "-".to_string(),
        },
        ..LexiconConfig::default()
    };
    let line = compose(&EntryComposer::new(config), "開", "1").expect("Record should be produced");
    assert_eq!(line, "[開]\t\t<b>Pronunciation:</b>|-Taishanese: hoi³³ |");
}

#[test]
fn test_no_required_prons_drops_taishanese_only_entry() {
    let config = LexiconConfig {
        required_prons: Vec::new(),
        ..LexiconConfig::default()
    };
    assert_eq!(compose(&EntryComposer::new(config), "開", "1"), None);
}
