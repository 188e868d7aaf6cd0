use std::fmt;

use crate::compiler::ast;
use crate::compiler::lexer::Tokenizer;
use crate::compiler::tokens::Token;
use crate::output::Output;
use crate::value::Value;

/// Walks a parsed template and writes the result.
///
/// `{{#if}}`, `{{#each}}` and `{{name}}` always resolve against the root
/// record.  `{{this}}` and `{{this.field}}` resolve against the innermost
/// loop item.
///
/// Text that comes out of the record is scanned once more for `{{name}}`
/// markers, which resolve against the root record.  What those resolve to
/// is written as is.
pub(crate) struct Renderer<'r> {
    root: &'r Value,
    items: Vec<&'r Value>,
}

impl<'r> Renderer<'r> {
    pub fn new(root: &'r Value) -> Renderer<'r> {
        Renderer {
            root,
            items: Vec::new(),
        }
    }

    fn lookup(&self, name: &str) -> Option<&'r Value> {
        self.root.get_attr(name)
    }

    /// Renders a list of nodes.
    ///
    /// The only failure is the output refusing a write.
    pub fn render(&mut self, nodes: &[ast::Node<'_>], out: &mut Output<'_>) -> fmt::Result {
        for node in nodes {
            match node {
                ast::Node::EmitRaw(raw) => ok!(out.write_str(raw.raw)),
                ast::Node::EmitVar(var) => ok!(self.emit_var(var.id, var.raw, out)),
                ast::Node::EmitThis(_) => match self.items.last() {
                    Some(item) if item.is_scalar() => ok!(self.write_value(item, out)),
                    _ => ok!(self.emit_var("this", "{{this}}", out)),
                },
                ast::Node::EmitThisAttr(attr) => match self.items.last() {
                    Some(item) if !item.is_scalar() => {
                        if let Some(value) = item.get_field(attr.name) {
                            ok!(self.write_value(value, out));
                        }
                    }
                    _ => ok!(out.write_str(attr.raw)),
                },
                ast::Node::IfCond(cond) => {
                    let body = if self.lookup(cond.name).map_or(false, Value::is_true) {
                        &cond.true_body
                    } else {
                        &cond.false_body
                    };
                    ok!(self.render(body, out));
                }
                ast::Node::EachLoop(each) => {
                    if let Some(items) = self.lookup(each.name).and_then(Value::as_slice) {
                        for item in items {
                            self.items.push(item);
                            let rv = self.render(&each.body, out);
                            self.items.pop();
                            ok!(rv);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Strings and numbers are substituted, anything else keeps the marker.
    fn emit_var(&self, name: &str, raw: &str, out: &mut Output<'_>) -> fmt::Result {
        match self.lookup(name) {
            Some(value) if value.is_printable() => self.write_value(value, out),
            _ => out.write_str(raw),
        }
    }

    /// Writes a value taken from the record.
    fn write_value(&self, value: &Value, out: &mut Output<'_>) -> fmt::Result {
        match value.as_str() {
            Some(text) => self.write_resolved(text, out),
            None if value.as_slice().is_some() => self.write_resolved(&value.to_string(), out),
            None => write!(out, "{value}"),
        }
    }

    /// Writes text with its variable markers resolved.
    fn write_resolved(&self, text: &str, out: &mut Output<'_>) -> fmt::Result {
        if !text.contains("{{") {
            return out.write_str(text);
        }
        for (token, span) in Tokenizer::new(text) {
            match token {
                Token::Var(name) => match self.lookup(name) {
                    Some(value) if value.is_printable() => ok!(write!(out, "{value}")),
                    _ => ok!(out.write_str(&text[span.range()])),
                },
                _ => ok!(out.write_str(&text[span.range()])),
            }
        }
        Ok(())
    }
}
