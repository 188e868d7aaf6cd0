//! Documents the marker syntax of the template engine.
//!
//! A template is plain text with `{{…}}` markers.  There are three kinds of
//! markers: variables, conditionals and loops.  Everything that is not a
//! marker (including things that look almost like one) is copied to the
//! output unchanged.
//!
//! # Variables
//!
//! ```text
//! <h1>{{fullTitle}}</h1>
//! ```
//!
//! A variable is `{{` + identifier + `}}` where the identifier is made of
//! ASCII letters, digits and underscores (`[A-Za-z0-9_]+`).  No whitespace is
//! allowed: `{{ fullTitle }}` is not a marker.
//!
//! If the record has a string or number under that key it replaces the
//! marker.  Otherwise the marker is left in the output as it was written.
//! That way a page can be rendered again later with a record that supplies
//! the missing value.  Sequences are never printed by a variable marker.
//!
//! Numbers print in their shortest form; integral floats print without a
//! fraction (`3.0` → `3`).
//!
//! Text taken from the record may itself contain variable markers.  These
//! are resolved against the record too, but only once: `{{a}}` with
//! `a = "{{b}}"` and `b = "x"` prints `x`, while the result of that second
//! lookup is printed as it is.  The same applies to the text printed by
//! `{{this}}` and `{{this.field}}` inside a loop.  Conditionals and loops in
//! record text are not evaluated.
//!
//! # Conditionals
//!
//! ```text
//! {{#if hasProcessMedia}}
//!   <h2>Process</h2>
//! {{else}}
//!   <p>No breakdown yet.</p>
//! {{/if}}
//! ```
//!
//! The `{{else}}` branch is optional.  The condition is a key of the record
//! and counts as true unless it is missing, `null`, `false`, `0`, NaN, the
//! empty string or the empty array.  An empty object is true.
//!
//! # Loops
//!
//! ```text
//! <ul>{{#each tools}}<li>{{this}}</li>{{/each}}</ul>
//! {{#each relatedProjects}}<a href="{{this.url}}">{{this.displayTitle}}</a>{{/each}}
//! ```
//!
//! The body is repeated for every item of the array, in order and without a
//! separator.  If the key is missing or not an array the whole loop renders
//! to nothing.
//!
//! * `{{this}}` prints the current item if it is a scalar (string, number,
//!   bool or `null`, which prints as nothing).
//! * `{{this.field}}` prints a field of the current item if it is an object,
//!   or nothing if the object has no such field.  For an array item the
//!   field may be a numeric index (`{{this.0}}`).
//!
//! `{{this.field}}` with a scalar item is left as written.  `{{this}}` with
//! an object item (or outside of any loop) behaves like a plain variable
//! named `this`.
//!
//! # Nesting
//!
//! Conditionals and loops can be nested in any combination:
//!
//! ```text
//! {{#if hasTools}}Tools: {{#each tools}}{{this}}, {{/each}}{{/if}}
//! ```
//!
//! Inside nested loops `{{this…}}` always refers to the innermost loop's
//! item.  The names used by `{{#if}}`, `{{#each}}` and plain variables always
//! refer to the top level record, also inside a loop body.
//!
//! Earlier regex-based page generators did not support nesting a block in a
//! block of the same kind; templates written for them render the same here
//! as long as they only nest different kinds.
//!
//! # Malformed Markers
//!
//! Nothing in a template is an error.  Structure that does not add up is
//! kept as literal text:
//!
//! * `{{/if}}`, `{{/each}}` and `{{else}}` without a matching open block;
//! * an `{{#if}}` or `{{#each}}` that is never closed (its body still
//!   renders as regular template content);
//! * a closing marker that does not match the innermost open block, as in
//!   `{{#if a}}{{#each b}}{{/if}}{{/each}}`;
//! * a second `{{else}}` inside the same conditional.
//!
//! A brace right before a marker stays a brace: `{{{title}}}` renders as
//! `{Demo}`.
