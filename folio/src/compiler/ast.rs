use std::fmt;
use std::ops::Deref;

use crate::compiler::tokens::Span;

/// Container for nodes with location info.
///
/// This container fulfills two purposes: it adds location information
/// to nodes, but it also ensures the nodes is heap allocated.  The
/// latter is useful to ensure that enum variants do not cause the enum
/// to become too large.
pub struct Spanned<T> {
    inner: Box<(T, Span)>,
}

impl<T> Spanned<T> {
    /// Creates a new spanned node.
    pub fn new(node: T, span: Span) -> Spanned<T> {
        Spanned {
            inner: Box::new((node, span)),
        }
    }

    /// Accesses the span.
    #[cfg_attr(not(feature = "unstable_machinery"), allow(dead_code))]
    pub fn span(&self) -> Span {
        self.inner.1
    }
}

impl<T> Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ok!(fmt::Debug::fmt(&self.inner.0, f));
        write!(f, "{:?}", self.inner.1)
    }
}

/// A template node.
pub enum Node<'a> {
    EmitRaw(Spanned<EmitRaw<'a>>),
    EmitVar(Spanned<EmitVar<'a>>),
    EmitThis(Spanned<EmitThis>),
    EmitThisAttr(Spanned<EmitThisAttr<'a>>),
    IfCond(Spanned<IfCond<'a>>),
    EachLoop(Spanned<EachLoop<'a>>),
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::EmitRaw(s) => fmt::Debug::fmt(s, f),
            Node::EmitVar(s) => fmt::Debug::fmt(s, f),
            Node::EmitThis(s) => fmt::Debug::fmt(s, f),
            Node::EmitThisAttr(s) => fmt::Debug::fmt(s, f),
            Node::IfCond(s) => fmt::Debug::fmt(s, f),
            Node::EachLoop(s) => fmt::Debug::fmt(s, f),
        }
    }
}

/// Outputs the template source verbatim.
#[derive(Debug)]
pub struct EmitRaw<'a> {
    pub raw: &'a str,
}

/// Outputs a root record value (`{{name}}`).
///
/// The raw marker is kept so it can be written back out when the value
/// is missing or not printable.
#[derive(Debug)]
pub struct EmitVar<'a> {
    pub id: &'a str,
    pub raw: &'a str,
}

/// Outputs the current loop item (`{{this}}`).
#[derive(Debug)]
pub struct EmitThis;

/// Outputs a field of the current loop item (`{{this.field}}`).
#[derive(Debug)]
pub struct EmitThisAttr<'a> {
    pub name: &'a str,
    pub raw: &'a str,
}

/// An if/else condition.
#[derive(Debug)]
pub struct IfCond<'a> {
    pub name: &'a str,
    pub true_body: Vec<Node<'a>>,
    pub false_body: Vec<Node<'a>>,
}

/// A loop over a sequence.
#[derive(Debug)]
pub struct EachLoop<'a> {
    pub name: &'a str,
    pub body: Vec<Node<'a>>,
}

/// The parsed template.
#[derive(Debug, Default)]
pub struct Template<'a> {
    pub children: Vec<Node<'a>>,
}
