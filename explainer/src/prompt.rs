//! Instruction template sent to the provider.

/// Builds the provider prompt. `text` is embedded verbatim after the `Text:` line.
///
/// The template asks for an `Explanation:` section followed by a `Bullets:` section whose
/// lines start with `- `; [`crate::parse_explanation`] relies on those markers but tolerates
/// their absence.
pub fn build_prompt(text: &str) -> String {
    format!(
        "
Explain the following text in simple language.
Then write 4–6 bullet points summary starting each bullet with \"- \".

FORMAT EXACTLY LIKE THIS:
Explanation:
[your explanation here]

Bullets:
- [bullet 1]
- [bullet 2]
- [bullet 3]
- [bullet 4]

Text:
{text}
"
    )
}
