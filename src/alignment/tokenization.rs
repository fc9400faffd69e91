use crate::types::ScriptToken;

/// Splits raw script text into ordered tokens.
///
/// Every whitespace-delimited fragment becomes a token; fragments with no
/// alphabetic content are kept as non-word tokens so the caller can map
/// alignment results back onto the original text.
pub fn tokenize(text: &str) -> Vec<ScriptToken> {
    text.split_whitespace()
        .map(|raw| {
            let normalized = normalize_fragment(raw);
            let is_word = !normalized.is_empty();
            ScriptToken {
                raw: raw.to_string(),
                normalized,
                is_word,
            }
        })
        .collect()
}

/// Lowercases and strips a fragment down to ASCII letters and apostrophes.
pub fn normalize_fragment(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '\'')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Splits an aligner label into lowercase alphabetic runs, one token per run.
/// A label like `"can't stop"` yields `["can't", "stop"]`.
pub fn extract_word_tokens(label: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in label.chars() {
        if c.is_ascii_alphabetic() || c == '\'' {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
