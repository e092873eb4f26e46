/// Bytes that separate the fields of an instruction line.
pub const WHITESPACE: &[u8] = b" \t\r\n";

/// ## Lexical analysis
///
/// Splits `s` into at most `max` non-empty fields, left to right.
/// Anything past the last extracted field is left alone; it is up to
/// the caller to decide whether a full token list means trailing text
/// was dropped.
///
/// Fields are raw bytes. Only the separators above have any meaning
/// here, so names may hold any other byte, UTF-8 or not.

pub fn tokenize(s: &[u8], max: usize) -> Vec<&[u8]> {
    s.split(|b| WHITESPACE.contains(b))
        .filter(|tok| !tok.is_empty())
        .take(max)
        .collect()
}
