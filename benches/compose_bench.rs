use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lectlex::{
    Article, ArticleCorpus, BatchConfig, BatchDriver, DialectGraph, DialectGroup, EntryComposer,
    EtymologyRecord,
};

/// Synthetic corpus where every article roots a group and is listed in its neighbour's group
fn synthetic_inputs(size: usize) -> (ArticleCorpus, DialectGraph) {
    let mut corpus = ArticleCorpus::new();
    let mut graph = DialectGraph::new();

    for i in 0..size {
        let name = format!("詞{i}");
        let neighbour = format!("詞{}", (i + 1) % size);
        let record = EtymologyRecord::new()
            .with_pron("m", &format!("cí{i},一cí"))
            .with_pron("c", &format!("ci{},ci4=gloss", i % 6 + 1))
            .with_dial("self")
            .with_dial(&neighbour);
        corpus.insert(name.clone(), Article::from_iter([("1", record)]));

        let synonyms = [name.as_str(), neighbour.as_str(), "無:rare"];
        graph.insert(
            name.clone(),
            DialectGroup::new("synthetic")
                .with_lect("Hong Kong", &synonyms)
                .with_lect("Beijing", &synonyms[..1]),
        );
    }
    (corpus, graph)
}

fn bench_compose(c: &mut Criterion) {
    let (corpus, graph) = synthetic_inputs(2_000);

    let mut group = c.benchmark_group("compose");
    group.sample_size(20);

    group.bench_function("single_entry", |b| {
        let composer = EntryComposer::default();
        let record = corpus
            .get("詞0")
            .and_then(|article| article.get("1"))
            .expect("synthetic entry exists");
        b.iter(|| black_box(composer.compose_entry("詞0", record, &graph, &corpus)));
    });

    group.bench_function("full_corpus", |b| {
        let driver = BatchDriver::new(EntryComposer::default(), BatchConfig::default());
        b.iter(|| black_box(driver.compose_all(&corpus, &graph)));
    });

    group.finish();
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
