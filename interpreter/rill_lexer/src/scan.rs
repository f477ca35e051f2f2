//! Line scanning: comment stripping and tokenization.

use smallvec::SmallVec;

use crate::lex_error::LexError;
use crate::token::Token;

/// Token sequence for one source line.
///
/// Most statements are a handful of tokens; the inline capacity covers
/// them without a heap allocation.
pub type TokenLine = SmallVec<[Token; 8]>;

/// Truncate `line` at the first comment marker.
///
/// A comment starts at a bare `#` or at a literal `//` pair. A lone `/`
/// is division, never a comment, even as the last character of the line.
///
/// Stripping runs before tokenization, so a marker inside a quoted
/// string also truncates (and the now-unterminated quote is reported by
/// [`tokenize_line`]).
pub fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'#' => return &line[..i],
            b'/' if bytes.get(i + 1) == Some(&b'/') => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Tokenize one line of source text (no embedded newline).
///
/// Returns the ordered token sequence, possibly empty. Fails only when
/// the line ends inside an open quote.
pub fn tokenize_line(line: &str) -> Result<TokenLine, LexError> {
    let line = strip_comment(line);
    let bytes = line.as_bytes();
    let mut tokens = TokenLine::new();
    // Start of the bare word currently being accumulated, if any.
    let mut word_start: Option<usize> = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                flush_word(&mut tokens, line, &mut word_start, i);
                let open = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                if i == bytes.len() {
                    return Err(LexError::unterminated_string(open));
                }
                tokens.push(Token::quoted(&line[open + 1..i]));
                i += 1;
            }
            b' ' | b'\t' | b'\r' | b'\n' => {
                flush_word(&mut tokens, line, &mut word_start, i);
                i += 1;
            }
            b'=' | b'!' | b'>' | b'<' => {
                flush_word(&mut tokens, line, &mut word_start, i);
                if bytes.get(i + 1) == Some(&b'=') {
                    tokens.push(Token::rel_op(&line[i..i + 2]));
                    i += 2;
                } else {
                    tokens.push(Token::rel_op(&line[i..i + 1]));
                    i += 1;
                }
            }
            b @ (b'+' | b'-' | b'*' | b'/' | b'(' | b')') => {
                flush_word(&mut tokens, line, &mut word_start, i);
                tokens.push(Token::punct(b as char));
                i += 1;
            }
            _ => {
                if word_start.is_none() {
                    word_start = Some(i);
                }
                i += 1;
            }
        }
    }
    flush_word(&mut tokens, line, &mut word_start, bytes.len());

    Ok(tokens)
}

/// Emit the in-progress bare word, if any, ending at byte `end`.
fn flush_word(tokens: &mut TokenLine, line: &str, word_start: &mut Option<usize>, end: usize) {
    if let Some(start) = word_start.take() {
        tokens.push(Token::word(&line[start..end]));
    }
}
