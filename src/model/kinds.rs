//! Concrete attribute kinds
//!
//! One module per kind. Each kind is a plain immutable struct with a builder, typed getters,
//! and an [`AttributeKind`](super::AttributeKind) impl that knows its own field set.

pub mod base_noun_phrase;
pub mod entity_mention;
pub mod generic;
pub mod language_detection;
pub mod morpho;
pub mod resolved_entity;
pub mod script_region;
pub mod sentence;
pub mod token;
pub mod translated_data;
pub mod translated_tokens;

pub use base_noun_phrase::{BaseNounPhrase, BaseNounPhraseBuilder};
pub use entity_mention::{EntityMention, EntityMentionBuilder};
pub use generic::GenericAttribute;
pub use language_detection::{
    DetectionResult, DetectionResultBuilder, LanguageDetection, LanguageDetectionBuilder,
};
pub use morpho::{
    ArabicDetails, ArabicDetailsBuilder, HanDetails, MorphoAnalysis, MorphoAnalysisBuilder,
    MorphoDetails,
};
pub use resolved_entity::{ResolvedEntity, ResolvedEntityBuilder};
pub use script_region::{ScriptRegion, ScriptRegionBuilder};
pub use sentence::{Sentence, SentenceBuilder};
pub use token::{Token, TokenBuilder};
pub use translated_data::{TranslatedData, TranslatedDataBuilder};
pub use translated_tokens::{TranslatedTokens, TranslatedTokensBuilder};
