use crate::compiler::tokens::{Span, Token};
use crate::utils::{memchr, memstr};

/// Tokenizes marker templates.
///
/// The tokenizer cannot fail.  Anything that starts like a marker but does
/// not match the marker grammar is emitted as template data.
pub struct Tokenizer<'s> {
    source: &'s str,
    current_line: u32,
    current_col: u32,
    current_offset: usize,
    /// Offset of the next `}}` at or after the last lookup, `None` once
    /// there is none left in the source.
    next_close: Option<usize>,
}

/// Returns `true` if the string is a valid identifier (`[A-Za-z0-9_]+`).
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|c| c == b'_' || c.is_ascii_alphanumeric())
}

/// Matches a block opener like `#if name`, returning the name.
fn match_block_start<'s>(inner: &'s str, keyword: &str) -> Option<&'s str> {
    let rest = some!(inner.strip_prefix(keyword));
    let name = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if name.len() == rest.len() || !is_identifier(name) {
        return None;
    }
    Some(name)
}

/// Classifies the text between `{{` and `}}`.
///
/// Every check stops at the first byte that cannot be part of a marker, so
/// rejecting a candidate costs no more than the distance to the next `{`.
fn match_marker(inner: &str) -> Option<Token<'_>> {
    Some(match inner {
        "this" => Token::This,
        "else" => Token::Else,
        "/if" => Token::IfEnd,
        "/each" => Token::EachEnd,
        _ => {
            if let Some(field) = inner.strip_prefix("this.") {
                if !is_identifier(field) {
                    return None;
                }
                Token::ThisAttr(field)
            } else if let Some(name) = match_block_start(inner, "#if") {
                Token::IfStart(name)
            } else if let Some(name) = match_block_start(inner, "#each") {
                Token::EachStart(name)
            } else if is_identifier(inner) {
                Token::Var(inner)
            } else {
                return None;
            }
        }
    })
}

impl<'s> Tokenizer<'s> {
    /// Creates a new tokenizer.
    pub fn new(input: &'s str) -> Tokenizer<'s> {
        Tokenizer {
            source: input,
            current_line: 1,
            current_col: 0,
            current_offset: 0,
            next_close: memstr(input.as_bytes(), b"}}"),
        }
    }

    /// Produces the next token from the tokenizer.
    pub fn next_token(&mut self) -> Option<(Token<'s>, Span)> {
        if self.current_offset >= self.source.len() {
            return None;
        }
        let old_loc = self.loc();
        if let Some((token, len)) = self.marker_at(self.current_offset) {
            self.advance(len);
            return Some((token, self.span(old_loc)));
        }
        let lead = match self.find_marker(self.current_offset + 1) {
            Some(start) => self.advance(start - self.current_offset),
            None => self.advance(self.source.len() - self.current_offset),
        };
        Some((Token::TemplateData(lead), self.span(old_loc)))
    }

    /// Returns the offset of the first `}}` at or after `pos`.
    ///
    /// Lookups must not go backwards, which holds as the tokenizer only
    /// ever moves forward.  That way every byte is searched at most once.
    fn close_after(&mut self, pos: usize) -> Option<usize> {
        let close = some!(self.next_close);
        if close < pos {
            self.next_close = memstr(&self.source.as_bytes()[pos..], b"}}").map(|x| x + pos);
        }
        self.next_close
    }

    /// Matches a complete marker at `pos`, returning it and its length.
    fn marker_at(&mut self, pos: usize) -> Option<(Token<'s>, usize)> {
        let source = self.source;
        if source.as_bytes().get(pos..pos + 2) != Some(&b"{{"[..]) {
            return None;
        }
        let close = some!(self.close_after(pos + 2));
        let token = some!(match_marker(&source[pos + 2..close]));
        Some((token, close + 2 - pos))
    }

    /// Finds the offset of the next complete marker at or after `from`.
    fn find_marker(&mut self, from: usize) -> Option<usize> {
        let source = self.source;
        let bytes = source.as_bytes();
        let mut pos = from;
        while self.next_close.is_some() && pos < bytes.len() {
            pos += some!(memchr(&bytes[pos..], b'{'));
            if self.marker_at(pos).is_some() {
                return Some(pos);
            }
            pos += 1;
        }
        None
    }

    fn advance(&mut self, bytes: usize) -> &'s str {
        let start = self.current_offset;
        let skipped = &self.source[start..start + bytes];
        for c in skipped.chars() {
            match c {
                '\n' => {
                    self.current_line = self.current_line.saturating_add(1);
                    self.current_col = 0;
                }
                _ => self.current_col = self.current_col.saturating_add(1),
            }
        }
        self.current_offset += bytes;
        skipped
    }

    #[inline]
    fn loc(&self) -> (u32, u32, usize) {
        (self.current_line, self.current_col, self.current_offset)
    }

    #[inline]
    fn span(&self, (start_line, start_col, start_offset): (u32, u32, usize)) -> Span {
        Span {
            start_line,
            start_col,
            start_offset,
            end_line: self.current_line,
            end_col: self.current_col,
            end_offset: self.current_offset,
        }
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = (Token<'s>, Span);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes the source.
#[cfg_attr(not(feature = "unstable_machinery"), allow(dead_code))]
pub fn tokenize(input: &str) -> impl Iterator<Item = (Token<'_>, Span)> {
    Tokenizer::new(input)
}
