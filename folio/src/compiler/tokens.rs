use std::fmt;

/// Represents a token in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Raw template data.
    TemplateData(&'a str),
    /// A plain variable (`{{name}}`).
    Var(&'a str),
    /// The current loop item (`{{this}}`).
    This,
    /// A field of the current loop item (`{{this.field}}`).
    ThisAttr(&'a str),
    /// Start of a conditional (`{{#if name}}`).
    IfStart(&'a str),
    /// The else marker (`{{else}}`).
    Else,
    /// End of a conditional (`{{/if}}`).
    IfEnd,
    /// Start of a loop (`{{#each name}}`).
    EachStart(&'a str),
    /// End of a loop (`{{/each}}`).
    EachEnd,
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::TemplateData(_) => f.write_str("template-data"),
            Token::Var(_) => f.write_str("variable"),
            Token::This => f.write_str("`this`"),
            Token::ThisAttr(_) => f.write_str("`this` attribute"),
            Token::IfStart(_) => f.write_str("start of conditional"),
            Token::Else => f.write_str("`else`"),
            Token::IfEnd => f.write_str("end of conditional"),
            Token::EachStart(_) => f.write_str("start of loop"),
            Token::EachEnd => f.write_str("end of loop"),
        }
    }
}

/// Token span information
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub start_offset: usize,
    pub end_line: u32,
    pub end_col: u32,
    pub end_offset: usize,
}

impl Span {
    /// Returns the byte range covered by this span.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start_offset..self.end_offset
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " @ {}:{}-{}:{}",
            self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}
