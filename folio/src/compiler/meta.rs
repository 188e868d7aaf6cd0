use std::collections::BTreeSet;

use crate::compiler::ast;

/// Finds all root record keys a template refers to.
///
/// `{{this}}` only counts as a variable outside of loops.  `{{this.field}}`
/// never does.
pub fn find_undeclared<'a>(nodes: &[ast::Node<'a>]) -> BTreeSet<&'a str> {
    fn visit<'a>(nodes: &[ast::Node<'a>], in_loop: bool, out: &mut BTreeSet<&'a str>) {
        for node in nodes {
            match node {
                ast::Node::EmitRaw(_) | ast::Node::EmitThisAttr(_) => {}
                ast::Node::EmitVar(var) => {
                    out.insert(var.id);
                }
                ast::Node::EmitThis(_) => {
                    if !in_loop {
                        out.insert("this");
                    }
                }
                ast::Node::IfCond(cond) => {
                    out.insert(cond.name);
                    visit(&cond.true_body, in_loop, out);
                    visit(&cond.false_body, in_loop, out);
                }
                ast::Node::EachLoop(each) => {
                    out.insert(each.name);
                    visit(&each.body, true, out);
                }
            }
        }
    }

    let mut rv = BTreeSet::new();
    visit(nodes, false, &mut rv);
    rv
}
