/// Instruction block describing the JSON contract the model must honor.
const INSTRUCTIONS: &str = "\
You are a vision assistant. You will receive an image and a user question about it.
Answer the user's question based only on what is visible in the image.
Also extract any readable text.

Return a JSON object with fields:
- answer: string (direct answer to userQuery)
- imageSummary: string (brief neutral description)
- extractedText: string (all visible text, best effort)
- detectedLanguages: array of strings (languages of extracted text)
- safetyNotes: string (uncertainty or quality notes)

User question:";

/// Builds the single-turn prompt: fixed instructions, the caller's question
/// verbatim, then optional context-hint and response-language lines. Empty
/// optional fields emit no line at all.
pub fn build_prompt(
    user_query: &str,
    context_hint: Option<&str>,
    language_code: Option<&str>,
) -> String {
    let mut prompt = format!("{INSTRUCTIONS}\n{user_query}");

    if let Some(hint) = context_hint.filter(|h| !h.is_empty()) {
        prompt.push_str(&format!("\n\nContext hint: {hint}"));
    }

    if let Some(lang) = language_code.filter(|l| !l.is_empty()) {
        prompt.push_str(&format!("\n\nRespond in language: {lang}"));
    }

    prompt.trim().to_string()
}
