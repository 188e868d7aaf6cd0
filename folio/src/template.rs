use std::collections::BTreeSet;
use std::{fmt, io};

use serde::Serialize;

use crate::compiler::ast;
use crate::compiler::meta::find_undeclared;
use crate::compiler::parser::parse;
use crate::error::Error;
use crate::eval::Renderer;
use crate::output::{Output, WriteWrapper};
use crate::value::Value;

/// Represents a parsed template.
///
/// Parsing happens once in [`Template::new`] and cannot fail.  The template
/// borrows its source and can be rendered any number of times, also from
/// multiple threads at once.
///
/// ```
/// # use folio::{Template, context};
/// let tmpl = Template::new("Title: {{title}}");
/// assert_eq!(tmpl.render(context!(title => "Demo")), "Title: Demo");
/// ```
pub struct Template<'source> {
    source: &'source str,
    ast: ast::Template<'source>,
}

impl<'source> fmt::Debug for Template<'source> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("source", &self.source)
            .finish()
    }
}

impl<'source> Template<'source> {
    /// Parses a template from its source.
    pub fn new(source: &'source str) -> Template<'source> {
        Template {
            source,
            ast: parse(source),
        }
    }

    /// Returns the source code of the template.
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Renders the template into a string.
    ///
    /// The provided value is used as the record for the template.  It can be
    /// any object that implements [`Serialize`](serde::Serialize).  Typically
    /// custom structs annotated with `#[derive(Serialize)]` would be used for
    /// this purpose, or a record created with [`context!`](crate::context!).
    ///
    /// Rendering never fails.  Markers referring to missing keys render to
    /// their defaults (see [`syntax`](crate::syntax)).
    ///
    /// ```
    /// # use folio::{Template, context};
    /// let tmpl = Template::new("{{#each tools}}[{{this}}]{{/each}}");
    /// assert_eq!(tmpl.render(context!(tools => vec!["AE", "C4D"])), "[AE][C4D]");
    /// ```
    pub fn render<S: Serialize>(&self, ctx: S) -> String {
        // reduce total amount of code falling under mono morphization into
        // this function, and share the rest in render_value.
        self.render_value(&Value::from_serialize(&ctx))
    }

    /// Renders the template with an already converted record.
    pub fn render_value(&self, root: &Value) -> String {
        let mut rv = String::with_capacity(self.source.len());
        // writing into a string cannot fail
        let _ = Renderer::new(root).render(&self.ast.children, &mut Output::new(&mut rv));
        rv
    }

    /// Renders the template into an [`io::Write`].
    ///
    /// This works exactly like [`render`](Self::render) but instead writes the
    /// template as it's evaluating into an [`io::Write`].  The only error is
    /// a failing writer, reported as
    /// [`WriteFailure`](crate::ErrorKind::WriteFailure) with the I/O error as
    /// source.
    ///
    /// ```
    /// # use folio::{Template, context};
    /// use std::io::stdout;
    ///
    /// let tmpl = Template::new("Hello {{name}}!");
    /// tmpl.render_to_write(context!(name => "John"), &mut stdout()).unwrap();
    /// ```
    pub fn render_to_write<S: Serialize, W: io::Write>(&self, ctx: S, w: W) -> Result<(), Error> {
        let root = Value::from_serialize(&ctx);
        let mut wrapper = WriteWrapper { w, err: None };
        let rv = Renderer::new(&root).render(&self.ast.children, &mut Output::new(&mut wrapper));
        rv.map_err(|_| wrapper.take_err())
    }

    /// Returns a set of all root record keys the template refers to.
    ///
    /// This includes plain variables as well as the names used by
    /// `{{#if}}` and `{{#each}}`, but not the `{{this.field}}` references
    /// inside loops.
    ///
    /// ```
    /// # use folio::Template;
    /// let tmpl = Template::new("{{#if hasTools}}{{#each tools}}{{this}}{{/each}}{{/if}}{{title}}");
    /// let names = tmpl.undeclared_variables();
    /// assert_eq!(names.into_iter().collect::<Vec<_>>(), ["hasTools", "title", "tools"]);
    /// ```
    pub fn undeclared_variables(&self) -> BTreeSet<String> {
        find_undeclared(&self.ast.children)
            .into_iter()
            .map(|x| x.to_string())
            .collect()
    }
}
