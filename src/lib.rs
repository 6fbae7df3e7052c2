pub mod batch;
pub mod composer;
pub mod config;
pub mod corpus;
pub mod normalize;
pub mod resolver;

// Re-export main types for convenient access
pub use composer::{ComposedEntry, DialRef, EntryComposer};
pub use config::{LexiconConfig, PronunciationCode, RecordFormat};
pub use corpus::{Article, ArticleCorpus, DialectGraph, DialectGroup, EtymologyRecord, OrderedMap};

// Re-export text transforms and synonym rendering
pub use normalize::{clean_pronunciation_list, remove_sandhi_markers, superscriptify};
pub use resolver::{render_group, resolve_pronunciation, SynonymSpec};

// Re-export batch driver types
pub use batch::{BatchConfig, BatchDriver, BatchStats};
