//! Whitespace tokenizer shared by documents and queries.
//!
//! Text is lowercased and split on Unicode whitespace. There is no
//! stemming, no stop-word removal and no query syntax: punctuation,
//! quotes and operators such as `AND` are ordinary token characters.

/// Tokenize text: lowercase, split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Tokenize a document as its body followed by its title.
pub fn tokenize_document(body: &str, title: &str) -> Vec<String> {
    let mut tokens = tokenize(body);
    tokens.extend(tokenize(title));
    tokens
}
