//! Type registry
//!
//! Maps a discriminator string (`"token"`, `"sentence"`, ...) to the decode function and
//! default cardinality of the kind it names. The decoder consults it once per attribute node;
//! a miss is the normal forward-compatibility case and sends the node down the generic path.
//!
//! A process-wide instance is created on first use, either explicitly through [`initialize`]
//! or lazily with the default kinds through [`global`]. After that it is read-only.

use crate::codec::fields::FieldReader;
use crate::error::{Error, Result};
use crate::model::attribute::{Attribute, AttributeKind, Cardinality};
use crate::model::kinds::{
    BaseNounPhrase, EntityMention, LanguageDetection, ResolvedEntity, ScriptRegion, Sentence,
    Token, TranslatedData, TranslatedTokens,
};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;

/// Decodes one node of the generic tree into a known kind
pub type DecodeFn = fn(&mut FieldReader) -> Result<Attribute>;

/// Everything the decoder needs to know about one kind
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub type_name: &'static str,
    pub cardinality: Cardinality,
    pub decode: DecodeFn,
}

impl RegistryEntry {
    /// Entry for a compiled-in kind
    pub fn of<T: AttributeKind>() -> Self {
        Self {
            type_name: T::TYPE_NAME,
            cardinality: T::CARDINALITY,
            decode: decode_kind::<T>,
        }
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("type_name", &self.type_name)
            .field("cardinality", &self.cardinality)
            .finish()
    }
}

fn decode_kind<T: AttributeKind>(reader: &mut FieldReader) -> Result<Attribute> {
    T::read_fields(reader).map(Into::into)
}

/// Registry of attribute kinds known to this consumer
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: HashMap<&'static str, RegistryEntry>,
}

impl TypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a kind. A kind registered twice keeps the last entry.
    pub fn register<T: AttributeKind>(&mut self) -> &mut Self {
        self.insert(RegistryEntry::of::<T>())
    }

    pub fn insert(&mut self, entry: RegistryEntry) -> &mut Self {
        self.entries.insert(entry.type_name, entry);
        self
    }

    /// Look up a discriminator. `None` means the type is unknown here, which is not an error.
    pub fn lookup(&self, type_name: &str) -> Option<&RegistryEntry> {
        self.entries.get(type_name)
    }

    pub fn has(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Default cardinality of a known kind
    pub fn cardinality(&self, type_name: &str) -> Option<Cardinality> {
        self.lookup(type_name).map(|entry| entry.cardinality)
    }

    /// All registered type names (sorted)
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a registry with every kind compiled into this crate
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register::<BaseNounPhrase>()
            .register::<EntityMention>()
            .register::<LanguageDetection>()
            .register::<ResolvedEntity>()
            .register::<ScriptRegion>()
            .register::<Sentence>()
            .register::<Token>()
            .register::<TranslatedData>()
            .register::<TranslatedTokens>();
        registry
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

static GLOBAL: OnceCell<TypeRegistry> = OnceCell::new();

/// Install the process-wide registry. Must happen before the first call to [`global`].
pub fn initialize(registry: TypeRegistry) -> Result<&'static TypeRegistry> {
    GLOBAL
        .set(registry)
        .map_err(|_| Error::RegistryAlreadyInitialized)?;
    Ok(global())
}

/// The process-wide registry, installing the defaults if nothing was initialized
pub fn global() -> &'static TypeRegistry {
    GLOBAL.get_or_init(TypeRegistry::with_defaults)
}
