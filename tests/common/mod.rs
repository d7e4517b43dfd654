//! Shared fixtures for integration tests

#![allow(dead_code)]

use annotext::model::{
    ArabicDetails, BaseNounPhrase, Container, DetectionResult, EntityMention, HanDetails,
    LanguageCode, LanguageDetection, MorphoAnalysis, MorphoDetails, ResolvedEntity, ScriptCode,
    ScriptRegion, Sentence, TextDomain, Token, TranslatedData, TranslatedTokens,
    TransliterationScheme,
};
use annotext::{keys, AnnotatedText};

pub const TERRIER: &str = "This is the terrier shot to Boston.";

fn domain(language: &str) -> TextDomain {
    TextDomain::new(
        ScriptCode::new("Latn"),
        LanguageCode::new(language),
        TransliterationScheme::new("native"),
    )
}

fn detection(start: usize, end: usize) -> LanguageDetection {
    let english = DetectionResult::builder(LanguageCode::new("eng"))
        .encoding("UTF-16")
        .script(ScriptCode::new("Latn"))
        .confidence(0.9)
        .build()
        .unwrap();
    let german = DetectionResult::builder(LanguageCode::new("deu"))
        .confidence(0.1)
        .build()
        .unwrap();
    LanguageDetection::builder(start, end, vec![english])
        .add_result(german)
        .build()
        .unwrap()
}

/// A document with one of every attribute kind populated with representative values
pub fn everything() -> AnnotatedText {
    let plain = MorphoAnalysis::builder()
        .lemma("this")
        .part_of_speech("DET")
        .raw("this[+DET]")
        .build()
        .unwrap();
    let arabic = MorphoAnalysis::builder()
        .lemma("kitab")
        .part_of_speech("NOUN")
        .details(MorphoDetails::Arabic(
            ArabicDetails::builder()
                .add_prefix("al", "DET")
                .add_stem("kitab", "NOUN")
                .add_suffix("i", "CASE")
                .definite_article(true)
                .root("ktb")
                .lengths(2, 5)
                .build(),
        ))
        .build()
        .unwrap();
    let han = MorphoAnalysis::builder()
        .lemma("zhe")
        .details(MorphoDetails::Han(HanDetails::new(vec!["zhe4".to_string()])))
        .add_component(Token::builder(0, 2, "Th").build().unwrap())
        .build()
        .unwrap();

    let token = Token::builder(0, 4, "This")
        .add_normalized("this")
        .source("tokenizer")
        .add_analysis(plain)
        .add_analysis(arabic)
        .add_analysis(han)
        .build()
        .unwrap();

    let mention = EntityMention::builder(28, 34, "place")
        .flags(42)
        .normalized("bahston")
        .source("statistical")
        .subsource("/data/roots/rex")
        .confidence(1.0)
        .coreference_chain_id(43)
        .build()
        .unwrap();

    AnnotatedText::builder()
        .data(TERRIER)
        .add_metadata("source", "wire")
        .add_metadata("source", "feed")
        .push(BaseNounPhrase::builder(8, 19).build().unwrap())
        .push(mention)
        .push(ResolvedEntity::builder(28, 34, "Q100").confidence(0.7).build().unwrap())
        .push(detection(0, 35))
        .attribute(
            keys::LANGUAGE_DETECTION_REGIONS,
            Container::list(vec![detection(0, 35)]),
        )
        .push(ScriptRegion::builder(0, 35, ScriptCode::new("Latn")).build().unwrap())
        .push(Sentence::builder(0, 8).build().unwrap())
        .push(token)
        .push(
            TranslatedData::builder(domain("deu"), "Dies ist der Terrier nach Boston geschossen.")
                .build()
                .unwrap(),
        )
        .push(
            TranslatedData::builder(domain("spa"), "Este es el terrier disparado a Boston.")
                .build()
                .unwrap(),
        )
        .push(
            TranslatedTokens::builder(domain("deu"))
                .add_translated_token("Dies")
                .add_translated_token("ist")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}
