//! Folio is a tiny template renderer for generating static portfolio pages
//! from JSON project data.  A template is HTML with a handful of
//! Handlebars-like markers:
//!
//! ```text
//! <h1>{{fullTitle}}</h1>
//! {{#if hasTools}}
//!   <ul>{{#each tools}}<li>{{this}}</li>{{/each}}</ul>
//! {{/if}}
//! ```
//!
//! Rendering is a pure function of the template and the record.  It never
//! fails: a missing key turns a conditional false, a loop empty and leaves
//! a plain variable marker untouched.
//!
//! # Template Usage
//!
//! To pass data one can pass any serde serializable value:
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! let mut ctx = BTreeMap::new();
//! ctx.insert("name", "John");
//! assert_eq!(folio::render("Hello {{name}}!", &ctx), "Hello John!");
//! ```
//!
//! Templates that are rendered many times are best parsed once:
//!
//! ```
//! use folio::{context, Template};
//!
//! let tmpl = Template::new("Title: {{title}}\n{{#if hasTools}}Tools: {{#each tools}}{{this}}, {{/each}}{{/if}}");
//! let rv = tmpl.render(context! {
//!     title => "Demo",
//!     hasTools => true,
//!     tools => vec!["AE", "C4D"],
//! });
//! assert_eq!(rv, "Title: Demo\nTools: AE, C4D, ");
//! ```
//!
//! # Learn more
//!
//! - [`syntax`]: documentation of the marker syntax.
//! - [`value`]: for information about the runtime value object.
//! - [`Template`]: the template object API.
//!
//! # Optional Features
//!
//! There are some additional features that can be enabled:
//!
//! - `preserve_order`: records keep the order in which keys were inserted
//!   or deserialized.
//! - `unstable_machinery`: provides access to the internal machinery of the
//!   engine (tokenizer, parser and AST).  This is a forever unstable API which
//!   mainly exists to aid debugging complex issues.
#![allow(clippy::new_without_default)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

#[macro_use]
mod macros;

mod compiler;
mod error;
mod eval;
mod output;
mod template;
mod utils;

pub mod syntax;
pub mod value;

pub use self::error::{Error, ErrorKind};
pub use self::template::Template;
pub use self::value::Value;

pub use self::macros::__context;

/// Renders a template source with a record.
///
/// This is a shortcut for [`Template::new`] followed by
/// [`Template::render`].
///
/// ```
/// # use folio::context;
/// let rv = folio::render("{{#if name}}A{{else}}B{{/if}}", context!());
/// assert_eq!(rv, "B");
/// ```
pub fn render<S: serde::Serialize>(source: &str, ctx: S) -> String {
    Template::new(source).render(ctx)
}

/// This module gives access to the low level machinery.
///
/// This module is only provided by the `unstable_machinery` feature and does not
/// have a stable interface.  It mostly exists for internal testing purposes and
/// for debugging.
#[cfg(feature = "unstable_machinery")]
pub mod machinery {
    #![allow(missing_docs)]
    pub use crate::compiler::ast;
    pub use crate::compiler::lexer::{tokenize, Tokenizer};
    pub use crate::compiler::parser::{parse, MAX_NESTING};
    pub use crate::compiler::tokens::{Span, Token};
}
