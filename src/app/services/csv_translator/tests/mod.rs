//! Tests for the CSV translation engine

pub mod agtrails_tests;
pub mod header_tests;
pub mod line_tests;
pub mod sniffer_tests;

use super::CsvTranslator;
use crate::app::models::TranslationOutput;

/// Translate one in-memory stream with the default vocabulary
pub(crate) fn translate(content: &str) -> TranslationOutput {
    let mut translator = CsvTranslator::default();
    translator
        .translate_stream(content, "test")
        .expect("stream translates");
    translator.finish()
}
