//! Bilingual interface text with a persisted language preference.
//!
//! Interface strings are resolved through a [Lexicon], a pair of static
//! per-language tables addressed by dotted key paths (`nav.home`). Lookup
//! never fails: a missing or non-terminal path resolves to the key itself.
//! The active [Language] is held by a [Store], which restores the previous
//! choice from storage on startup and persists every change.

use commonware_runtime::{Blob, Error as RError, Storage};
use tracing::warn;

/// Name of the blob holding the persisted language code.
const BLOB_NAME: &[u8] = b"language";

/// Length of a persisted language code in bytes.
const CODE_LEN: u64 = 2;

/// Languages the interface can render in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    /// Simplified Chinese (the default).
    #[default]
    Zh,
    /// English.
    En,
}

impl Language {
    /// The code persisted to storage.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    fn from_code(code: &[u8]) -> Option<Self> {
        match code {
            b"zh" => Some(Self::Zh),
            b"en" => Some(Self::En),
            _ => None,
        }
    }
}

/// A node in a per-language translation table.
pub enum Node {
    /// A resolved string.
    Leaf(&'static str),
    /// A named group of child nodes.
    Branch(&'static [(&'static str, Node)]),
}

/// A two-language translation table resolved by dotted key paths.
///
/// Constructed once at startup and passed to whatever renders text. Both
/// tables are static and never mutated.
#[derive(Clone, Copy)]
pub struct Lexicon {
    zh: &'static Node,
    en: &'static Node,
}

impl Lexicon {
    /// Create a lexicon from one table per language.
    pub const fn new(zh: &'static Node, en: &'static Node) -> Self {
        Self { zh, en }
    }

    /// Resolve `key` in `language`.
    ///
    /// The key is split on `.` and walked through the table. If any segment
    /// is missing, or the walk does not end at a leaf, the key itself is
    /// returned unchanged.
    pub fn translate<'a>(&self, language: Language, key: &'a str) -> &'a str {
        let mut node = match language {
            Language::Zh => self.zh,
            Language::En => self.en,
        };
        for segment in key.split('.') {
            let Node::Branch(entries) = node else {
                return key;
            };
            match entries.iter().find(|(name, _)| *name == segment) {
                Some((_, child)) => node = child,
                None => return key,
            }
        }
        match node {
            Node::Leaf(text) => text,
            Node::Branch(_) => key,
        }
    }
}

/// The active language, persisted across restarts.
///
/// The preference is stored as a single two-byte blob holding the language
/// code. A missing or unrecognized blob falls back to the default language
/// rather than failing.
pub struct Store<E: Storage> {
    blob: E::Blob,
    language: Language,
}

impl<E: Storage> Store<E> {
    /// Open the preference blob in `partition`, restoring any previously
    /// persisted choice.
    pub async fn init(context: &E, partition: &str) -> Result<Self, RError> {
        let (blob, len) = context.open(partition, BLOB_NAME).await?;
        let language = if len == CODE_LEN {
            let buf = blob.read_at(vec![0u8; CODE_LEN as usize], 0).await?;
            match Language::from_code(buf.as_ref()) {
                Some(language) => language,
                None => {
                    warn!("persisted language unrecognized, using default");
                    Language::default()
                }
            }
        } else {
            if len != 0 {
                warn!(len, "persisted language malformed, using default");
            }
            Language::default()
        };
        Ok(Self { blob, language })
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch to `language` and persist the choice.
    ///
    /// The in-memory language is updated even if persistence fails, so a
    /// caller can log the error and continue with the new language.
    pub async fn set(&mut self, language: Language) -> Result<(), RError> {
        self.language = language;
        self.blob
            .write_at(language.code().as_bytes().to_vec(), 0)
            .await?;
        self.blob.resize(CODE_LEN).await?;
        self.blob.sync().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonware_macros::test_traced;
    use commonware_runtime::{deterministic, Runner};

    const TABLE_ZH: Node = Node::Branch(&[
        (
            "nav",
            Node::Branch(&[("home", Node::Leaf("首页")), ("results", Node::Leaf("结果"))]),
        ),
        ("title", Node::Leaf("我的第一次 ZK 投票")),
    ]);

    const TABLE_EN: Node = Node::Branch(&[
        (
            "nav",
            Node::Branch(&[("home", Node::Leaf("Home")), ("results", Node::Leaf("Results"))]),
        ),
        ("title", Node::Leaf("My First ZK Vote")),
    ]);

    const LEXICON: Lexicon = Lexicon::new(&TABLE_ZH, &TABLE_EN);

    #[test]
    fn test_translate_both_languages() {
        assert_eq!(LEXICON.translate(Language::Zh, "nav.home"), "首页");
        assert_eq!(LEXICON.translate(Language::En, "nav.home"), "Home");
        assert_eq!(LEXICON.translate(Language::Zh, "title"), "我的第一次 ZK 投票");
        assert_eq!(LEXICON.translate(Language::En, "title"), "My First ZK Vote");
    }

    #[test]
    fn test_translate_missing_key_echoes() {
        assert_eq!(LEXICON.translate(Language::Zh, "nav.missing"), "nav.missing");
        assert_eq!(LEXICON.translate(Language::En, "absent"), "absent");
        assert_eq!(
            LEXICON.translate(Language::En, "nav.home.deeper"),
            "nav.home.deeper"
        );
    }

    #[test]
    fn test_translate_branch_key_echoes() {
        // A path that stops at a branch is not a translation.
        assert_eq!(LEXICON.translate(Language::Zh, "nav"), "nav");
        assert_eq!(LEXICON.translate(Language::En, "nav"), "nav");
    }

    #[test]
    fn test_toggle_round_trip() {
        let language = Language::default();
        assert_eq!(language, Language::Zh);
        assert_eq!(language.toggled(), Language::En);
        assert_eq!(language.toggled().toggled(), language);
    }

    #[test_traced]
    fn test_store_defaults_when_absent() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let store = Store::init(&context, "test_language")
                .await
                .expect("failed to initialize store");
            assert_eq!(store.language(), Language::Zh);
        });
    }

    #[test_traced]
    fn test_store_persists_toggle() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let mut store = Store::init(&context, "test_language")
                .await
                .expect("failed to initialize store");
            store
                .set(store.language().toggled())
                .await
                .expect("failed to persist language");
            assert_eq!(store.language(), Language::En);

            // Reopen to simulate a restart.
            let store = Store::init(&context, "test_language")
                .await
                .expect("failed to reopen store");
            assert_eq!(store.language(), Language::En);

            // Toggling twice returns to the original persisted value.
            let mut store = store;
            store
                .set(store.language().toggled())
                .await
                .expect("failed to persist language");
            let store = Store::init(&context, "test_language")
                .await
                .expect("failed to reopen store");
            assert_eq!(store.language(), Language::Zh);
        });
    }

    #[test_traced]
    fn test_store_ignores_garbage() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            // Unrecognized two-byte code.
            let (blob, _) = context
                .open("test_language", BLOB_NAME)
                .await
                .expect("failed to open blob");
            blob.write_at(b"fr".to_vec(), 0).await.expect("failed to write");
            blob.sync().await.expect("failed to sync");
            let store = Store::init(&context, "test_language")
                .await
                .expect("failed to initialize store");
            assert_eq!(store.language(), Language::Zh);

            // Malformed length.
            let (blob, _) = context
                .open("test_language", BLOB_NAME)
                .await
                .expect("failed to open blob");
            blob.write_at(b"english".to_vec(), 0)
                .await
                .expect("failed to write");
            blob.sync().await.expect("failed to sync");
            let store = Store::init(&context, "test_language")
                .await
                .expect("failed to initialize store");
            assert_eq!(store.language(), Language::Zh);

            // A set after garbage rewrites the blob cleanly.
            let mut store = store;
            store
                .set(Language::En)
                .await
                .expect("failed to persist language");
            let store = Store::init(&context, "test_language")
                .await
                .expect("failed to reopen store");
            assert_eq!(store.language(), Language::En);
        });
    }
}
