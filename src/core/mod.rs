//! Localization core: translation trees, language codes, preference
//! persistence and the resolver that ties them together.

pub mod error;
pub mod interpolate;
pub mod language;
pub mod message;
pub mod parsers;
pub mod resolver;
pub mod store;
pub mod tree;

pub use error::{InvalidLanguageError, LanguageCodeError, LocalizeError, StoreError};
pub use interpolate::{Variables, interpolate, placeholders};
pub use language::LanguageCode;
pub use message::{MessageContext, MessageLocation};
pub use resolver::Localizer;
pub use store::{FileStore, LANGUAGE_KEY, MemoryStore, PreferenceStore};
pub use tree::{InvalidValue, TranslationTable, TranslationTree, ValueProblem};
