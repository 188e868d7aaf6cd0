use crate::compiler::ast::{self, Spanned};
use crate::compiler::lexer::Tokenizer;
use crate::compiler::tokens::{Span, Token};

/// Blocks nested deeper than this are kept as template data.
pub const MAX_NESTING: usize = 500;

/// A block that was opened but not yet closed.
enum Frame<'a> {
    If {
        name: &'a str,
        open: (&'a str, Span),
        true_body: Vec<ast::Node<'a>>,
        else_marker: Option<(&'a str, Span)>,
        false_body: Vec<ast::Node<'a>>,
    },
    Each {
        name: &'a str,
        open: (&'a str, Span),
        body: Vec<ast::Node<'a>>,
    },
}

fn join_spans(start: Span, end: Span) -> Span {
    Span {
        start_line: start.start_line,
        start_col: start.start_col,
        start_offset: start.start_offset,
        end_line: end.end_line,
        end_col: end.end_col,
        end_offset: end.end_offset,
    }
}

fn raw_node(raw: &str, span: Span) -> ast::Node<'_> {
    ast::Node::EmitRaw(Spanned::new(ast::EmitRaw { raw }, span))
}

struct Parser<'a> {
    source: &'a str,
    stream: Tokenizer<'a>,
    root: Vec<ast::Node<'a>>,
    stack: Vec<Frame<'a>>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Parser<'a> {
        Parser {
            source,
            stream: Tokenizer::new(source),
            root: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// The node list new nodes are appended to.
    fn body(&mut self) -> &mut Vec<ast::Node<'a>> {
        match self.stack.last_mut() {
            None => &mut self.root,
            Some(Frame::If {
                else_marker: Some(_),
                false_body,
                ..
            }) => false_body,
            Some(Frame::If { true_body, .. }) => true_body,
            Some(Frame::Each { body, .. }) => body,
        }
    }

    fn push(&mut self, node: ast::Node<'a>) {
        self.body().push(node);
    }

    fn push_raw(&mut self, raw: &'a str, span: Span) {
        self.push(raw_node(raw, span));
    }

    fn parse(mut self) -> ast::Template<'a> {
        let source = self.source;
        while let Some((token, span)) = self.stream.next_token() {
            let raw = &source[span.range()];
            match token {
                Token::TemplateData(raw) => self.push_raw(raw, span),
                Token::Var(id) => {
                    self.push(ast::Node::EmitVar(Spanned::new(ast::EmitVar { id, raw }, span)))
                }
                Token::This => self.push(ast::Node::EmitThis(Spanned::new(ast::EmitThis, span))),
                Token::ThisAttr(name) => self.push(ast::Node::EmitThisAttr(Spanned::new(
                    ast::EmitThisAttr { name, raw },
                    span,
                ))),
                Token::IfStart(_) | Token::EachStart(_) if self.stack.len() >= MAX_NESTING => {
                    self.push_raw(raw, span)
                }
                Token::IfStart(name) => self.stack.push(Frame::If {
                    name,
                    open: (raw, span),
                    true_body: Vec::new(),
                    else_marker: None,
                    false_body: Vec::new(),
                }),
                Token::EachStart(name) => self.stack.push(Frame::Each {
                    name,
                    open: (raw, span),
                    body: Vec::new(),
                }),
                Token::Else => {
                    if let Some(Frame::If {
                        else_marker: else_marker @ None,
                        ..
                    }) = self.stack.last_mut()
                    {
                        *else_marker = Some((raw, span));
                    } else {
                        self.push_raw(raw, span);
                    }
                }
                Token::IfEnd => self.close_if(raw, span),
                Token::EachEnd => self.close_each(raw, span),
            }
        }
        self.unwind();
        ast::Template { children: self.root }
    }

    fn close_if(&mut self, raw: &'a str, span: Span) {
        if !matches!(self.stack.last(), Some(Frame::If { .. })) {
            return self.push_raw(raw, span);
        }
        if let Some(Frame::If {
            name,
            open,
            true_body,
            false_body,
            ..
        }) = self.stack.pop()
        {
            self.push(ast::Node::IfCond(Spanned::new(
                ast::IfCond {
                    name,
                    true_body,
                    false_body,
                },
                join_spans(open.1, span),
            )));
        }
    }

    fn close_each(&mut self, raw: &'a str, span: Span) {
        if !matches!(self.stack.last(), Some(Frame::Each { .. })) {
            return self.push_raw(raw, span);
        }
        if let Some(Frame::Each { name, open, body }) = self.stack.pop() {
            self.push(ast::Node::EachLoop(Spanned::new(
                ast::EachLoop { name, body },
                join_spans(open.1, span),
            )));
        }
    }

    /// Blocks that were never closed turn back into template data.  Their
    /// bodies stay regular template content.
    fn unwind(&mut self) {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::If {
                    open,
                    true_body,
                    else_marker,
                    false_body,
                    ..
                } => {
                    self.push_raw(open.0, open.1);
                    self.body().extend(true_body);
                    if let Some((raw, span)) = else_marker {
                        self.push_raw(raw, span);
                    }
                    self.body().extend(false_body);
                }
                Frame::Each { open, body, .. } => {
                    self.push_raw(open.0, open.1);
                    self.body().extend(body);
                }
            }
        }
    }
}

/// Parses a template.
///
/// Parsing never fails: markers that do not form a valid structure are
/// kept as template data.
pub fn parse(source: &str) -> ast::Template<'_> {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    use similar_asserts::assert_eq;

    /// Renders the tree into a compact form for assertions.
    fn describe(nodes: &[ast::Node<'_>]) -> String {
        let mut rv = String::new();
        for node in nodes {
            match node {
                ast::Node::EmitRaw(raw) => rv.push_str(&format!("raw({:?})", raw.raw)),
                ast::Node::EmitVar(var) => rv.push_str(&format!("var({})", var.id)),
                ast::Node::EmitThis(_) => rv.push_str("this"),
                ast::Node::EmitThisAttr(attr) => rv.push_str(&format!("this.{}", attr.name)),
                ast::Node::IfCond(cond) => rv.push_str(&format!(
                    "if({})[{}][{}]",
                    cond.name,
                    describe(&cond.true_body),
                    describe(&cond.false_body)
                )),
                ast::Node::EachLoop(each) => {
                    rv.push_str(&format!("each({})[{}]", each.name, describe(&each.body)))
                }
            }
        }
        rv
    }

    fn parsed(source: &str) -> String {
        describe(&parse(source).children)
    }

    #[test]
    fn test_conditional() {
        assert_eq!(parsed("{{#if a}}x{{/if}}"), "if(a)[raw(\"x\")][]");
        assert_eq!(
            parsed("{{#if a}}x{{else}}{{y}}{{/if}}"),
            "if(a)[raw(\"x\")][var(y)]"
        );
    }

    #[test]
    fn test_nesting() {
        assert_eq!(
            parsed("{{#if a}}{{#each b}}{{this}}{{/each}}{{/if}}"),
            "if(a)[each(b)[this]][]"
        );
        assert_eq!(
            parsed("{{#each a}}{{#if b}}{{this.x}}{{/if}}{{/each}}"),
            "each(a)[if(b)[this.x][]]"
        );
    }

    #[test]
    fn test_unmatched_closers() {
        assert_eq!(parsed("x{{/if}}"), "raw(\"x\")raw(\"{{/if}}\")");
        assert_eq!(parsed("{{else}}"), "raw(\"{{else}}\")");
        assert_eq!(
            parsed("{{#each a}}{{/if}}{{/each}}"),
            "each(a)[raw(\"{{/if}}\")]"
        );
    }

    #[test]
    fn test_unclosed_openers() {
        assert_eq!(
            parsed("{{#if a}}x{{else}}y"),
            "raw(\"{{#if a}}\")raw(\"x\")raw(\"{{else}}\")raw(\"y\")"
        );
        assert_eq!(
            parsed("{{#if a}}{{#each b}}{{/if}}{{/each}}"),
            "raw(\"{{#if a}}\")each(b)[raw(\"{{/if}}\")]"
        );
    }

    #[test]
    fn test_double_else() {
        assert_eq!(
            parsed("{{#if a}}x{{else}}y{{else}}z{{/if}}"),
            "if(a)[raw(\"x\")][raw(\"y\")raw(\"{{else}}\")raw(\"z\")]"
        );
    }

    #[test]
    fn test_nesting_limit() {
        let source = "{{#if a}}".repeat(MAX_NESTING + 1) + &"{{/if}}".repeat(MAX_NESTING + 1);
        let tmpl = parse(&source);
        assert_eq!(tmpl.children.len(), 2);
        assert!(matches!(tmpl.children[0], ast::Node::IfCond(_)));
        assert!(matches!(tmpl.children[1], ast::Node::EmitRaw(_)));
    }

    #[test]
    fn test_block_span() {
        let tmpl = parse("ab{{#if x}}\n{{/if}}");
        match &tmpl.children[1] {
            ast::Node::IfCond(cond) => {
                assert_eq!(cond.span().range(), 2..19);
                assert_eq!(cond.span().end_line, 2);
            }
            other => panic!("unexpected node {other:?}"),
        }
    }
}
