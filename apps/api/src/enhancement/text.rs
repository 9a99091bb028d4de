//! Small text helpers shared by the section rules.
//!
//! Matching is ASCII case-insensitive. `to_ascii_lowercase` keeps byte
//! offsets stable, so positions found in the lowered copy can be spliced
//! into the original string.

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Bytes of multi-byte UTF-8 characters count as word bytes, so an
/// accented letter next to a phrase keeps it from matching.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// Byte offsets of every whole-word, case-insensitive occurrence of `phrase`.
fn find_phrase(haystack: &str, phrase: &str) -> Vec<usize> {
    let lowered = haystack.to_ascii_lowercase();
    let needle = phrase.to_ascii_lowercase();
    let bytes = lowered.as_bytes();
    let mut hits = Vec::new();
    if needle.is_empty() {
        return hits;
    }

    let mut from = 0;
    while let Some(pos) = lowered[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        let left_ok = start == 0 || !is_word_byte(bytes[start - 1]);
        let right_ok = end == bytes.len() || !is_word_byte(bytes[end]);
        if left_ok && right_ok {
            hits.push(start);
        }
        from = end;
    }
    hits
}

/// Whole-word, case-insensitive presence test.
pub fn contains_word_ci(haystack: &str, phrase: &str) -> bool {
    !find_phrase(haystack, phrase).is_empty()
}

/// Replaces every whole-word, case-insensitive match of `phrase` with the
/// literal `replacement` (the matched casing is not carried over).
pub fn replace_phrase_ci(haystack: &str, phrase: &str, replacement: &str) -> String {
    let hits = find_phrase(haystack, phrase);
    if hits.is_empty() {
        return haystack.to_string();
    }

    let mut out = String::with_capacity(haystack.len() + hits.len() * replacement.len());
    let mut cursor = 0;
    for start in hits {
        out.push_str(&haystack[cursor..start]);
        out.push_str(replacement);
        cursor = start + phrase.len();
    }
    out.push_str(&haystack[cursor..]);
    out
}

/// Inserts `insertion` right after the first whole-word match of `phrase`.
pub fn insert_after_first_ci(haystack: &str, phrase: &str, insertion: &str) -> Option<String> {
    let start = *find_phrase(haystack, phrase).first()?;
    let end = start + phrase.len();
    let mut out = String::with_capacity(haystack.len() + insertion.len());
    out.push_str(&haystack[..end]);
    out.push_str(insertion);
    out.push_str(&haystack[end..]);
    Some(out)
}

/// Appends `sentence` as a new sentence, closing the previous one with a
/// period when it has no terminal punctuation. Never removes characters.
pub fn append_sentence(text: &mut String, sentence: &str) {
    let trimmed = text.trim_end();
    let trimmed_len = trimmed.len();
    if trimmed_len > 0 && !trimmed.ends_with(['.', '!', '?']) {
        let tail = text.split_off(trimmed_len);
        text.push('.');
        text.push_str(&tail);
    }
    if !text.ends_with(char::is_whitespace) {
        text.push(' ');
    }
    text.push_str(sentence);
}
