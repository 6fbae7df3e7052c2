// WHY: In-memory model of the two input datasets plus their loaders
// Article and etymology order from the source file is kept so output order and
// the first-match etymology scan are deterministic

use anyhow::{Context, Result};
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use tracing::{debug, info};

/// Dialect reference meaning "this article is the group root"
pub const SELF_REFERENCE: &str = "self";

/// String-keyed map that iterates in insertion order
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; a repeated key replaces the value but keeps its original position
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// One etymology (sense grouping) of an article
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EtymologyRecord {
    /// Pronunciation code to raw comma-separated pronunciation list
    #[serde(default)]
    pub pron: Option<HashMap<String, String>>,
    /// Dialect-group references: group keys or the `self` sentinel
    #[serde(default)]
    pub dial: Option<Vec<String>>,
}

impl EtymologyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pron(mut self, code: &str, raw: &str) -> Self {
        self.pron
            .get_or_insert_with(HashMap::new)
            .insert(code.to_string(), raw.to_string());
        self
    }

    pub fn with_dial(mut self, reference: &str) -> Self {
        self.dial
            .get_or_insert_with(Vec::new)
            .push(reference.to_string());
        self
    }

    /// Pronunciation map, treating an empty map the same as a missing one
    pub fn pronunciations(&self) -> Option<&HashMap<String, String>> {
        self.pron.as_ref().filter(|pron| !pron.is_empty())
    }

    pub fn dial_refs(&self) -> &[String] {
        self.dial.as_deref().unwrap_or(&[])
    }
}

/// Etymology key to record, in source order
pub type Article = OrderedMap<EtymologyRecord>;

/// Article name (headword) to article, in source order
pub type ArticleCorpus = OrderedMap<Article>;

/// Terms sharing one sense, broken down by lect
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DialectGroup {
    #[serde(default)]
    pub meaning: String,
    /// Lect name to raw synonym specs, in source order
    #[serde(default)]
    pub dials: HashMap<String, Vec<String>>,
}

impl DialectGroup {
    pub fn new(meaning: &str) -> Self {
        Self {
            meaning: meaning.to_string(),
            dials: HashMap::new(),
        }
    }

    pub fn with_lect(mut self, lect: &str, synonyms: &[&str]) -> Self {
        self.dials.insert(
            lect.to_string(),
            synonyms.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

/// Group root key to dialect group
pub type DialectGraph = HashMap<String, DialectGroup>;

/// Deserialize a JSON file, either read through tokio or memory-mapped
pub async fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P, use_mmap: bool) -> Result<T> {
    let path = path.as_ref();
    let start_time = std::time::Instant::now();
    debug!("Loading JSON from {} (mmap: {})", path.display(), use_mmap);

    let value = if use_mmap {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        // SAFETY: the input is treated as read-only for the whole run
        let mmap = unsafe { memmap2::Mmap::map(&file) }
            .with_context(|| format!("Failed to memory-map {}", path.display()))?;
        serde_json::from_slice(&mmap)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };

    debug!("Loaded {} in {}ms", path.display(), start_time.elapsed().as_millis());
    Ok(value)
}

/// Load the per-article pronunciation/etymology dataset
pub async fn load_article_corpus<P: AsRef<Path>>(path: P, use_mmap: bool) -> Result<ArticleCorpus> {
    let corpus: ArticleCorpus = load_json(path, use_mmap).await?;
    info!("Loaded article corpus: {} articles", corpus.len());
    Ok(corpus)
}

/// Load the dialectal synonym graph
pub async fn load_dialect_graph<P: AsRef<Path>>(path: P, use_mmap: bool) -> Result<DialectGraph> {
    let graph: DialectGraph = load_json(path, use_mmap).await?;
    info!("Loaded dialect graph: {} groups", graph.len());
    Ok(graph)
}
