use crate::core::models::{Language, Style};

/// Removes control characters (form feeds from PDF page breaks and similar)
/// while keeping newlines and tabs, which carry layout.
#[must_use]
pub fn sanitize_document_text(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect()
}

const STYLE_GUIDE: &str = "\
- short: a very brief summary of the document content
- general: a moderate-length summary covering the main points and the purpose of the document
- detailed: an in-depth summary with key explanations and important details";

const LANGUAGE_GUIDE: &str = "\
- indonesian: respond in Bahasa Indonesia
- english: respond in English";

/// Prompt for one section of a document that was split into `total` parts.
#[must_use]
pub fn build_section_prompt(chunk: &str, index: usize, total: usize, language: Language) -> String {
    format!(
        "You are summarizing part {part} of {total} from a document.\n\
         \n\
         Instructions:\n\
         - Create a concise summary of this section\n\
         - Focus on key points and main ideas\n\
         - Keep it factual and based only on the provided content\n\
         - Language: {language}\n\
         \n\
         Content to summarize:\n\
         {content}",
        part = index + 1,
        content = sanitize_document_text(chunk),
    )
}

/// Prompt that merges section summaries into the final summary.
#[must_use]
pub fn build_combine_prompt(section_summaries: &str, style: Style, language: Language) -> String {
    format!(
        "You are creating a final summary from multiple section summaries of a document.\n\
         \n\
         Instructions:\n\
         - Combine the section summaries into one coherent summary\n\
         - Remove redundancy and organize information logically\n\
         - Maintain all important information from the sections\n\
         - Follow the requested style and language\n\
         \n\
         Summary style: {style}\n\
         {STYLE_GUIDE}\n\
         \n\
         Language: {language}\n\
         {LANGUAGE_GUIDE}\n\
         \n\
         Section summaries to combine:\n\
         {section_summaries}"
    )
}

/// Prompt for a document short enough to summarize in one call.
#[must_use]
pub fn build_single_prompt(text: &str, style: Style, language: Language) -> String {
    format!(
        "You are an assistant that summarizes documents.\n\
         \n\
         Instructions:\n\
         - Summarize the content clearly and accurately based ONLY on the provided document content.\n\
         - Do NOT add information that is not present in the document.\n\
         \n\
         Summary styles:\n\
         {STYLE_GUIDE}\n\
         \n\
         Languages:\n\
         {LANGUAGE_GUIDE}\n\
         \n\
         Selected options:\n\
         - Summary style: {style}\n\
         - Language: {language}\n\
         \n\
         Document content:\n\
         {content}",
        content = sanitize_document_text(text),
    )
}
