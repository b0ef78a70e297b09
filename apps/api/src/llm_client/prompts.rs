// Shared prompt fragments.
// Each analysis component that calls the LLM keeps its own prompts alongside it
// (see analysis::prompts); this file only holds cross-cutting pieces.

/// Appended to every system prompt that expects machine-readable output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Do not include any other text, tags, or formatting in your response. \
    Do not use markdown code fences. \
    Do not include explanations or apologies.";

/// Fills `{name}` placeholders in a prompt template in a single pass,
/// so braces inside substituted values are never expanded.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
