use std::collections::HashSet;
use std::{iter::Peekable, vec::IntoIter};

use tracing::{debug, trace};

use crate::{
    errors::FieldsError,
    lexer::tokenize,
    qname::QName,
    schema::{SchemaContext, SchemaNode},
    token::{Token, TokenType},
};

use TokenType::*;

const EOI_TOKEN: Token = Token {
    kind: Eoi,
    span: (0, 0),
};

type Tokens = Peekable<IntoIter<Token>>;

/// One node of the intermediate selection tree. The tree mirrors ancestry
/// while parsing; merging by depth happens in a separate flattening pass.
struct SelectionNode {
    qname: QName,
    children: Vec<usize>,
}

/// Index-based arena holding the selection tree for a single parse call.
#[derive(Default)]
struct SelectionArena {
    nodes: Vec<SelectionNode>,
}

impl SelectionArena {
    fn push(&mut self, qname: QName) -> usize {
        self.nodes.push(SelectionNode {
            qname,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }
}

/// A parser for the RESTCONF `fields` query parameter.
///
/// Grammar, scanned left to right without backtracking:
///
/// ```text
/// fields      := path (';' path)*
/// path        := identifier ('/' identifier)* subselect?
/// subselect   := '(' fields ')'
/// identifier  := (name ':')? name
/// name        := [A-Za-z0-9_.-]+
/// ```
///
/// Every identifier is resolved against the live schema tree while parsing:
/// a prefixed identifier resolves its prefix through the schema context, an
/// unprefixed one inherits the namespace of the schema node it is selected
/// under. The first unresolved identifier or grammar violation aborts the
/// whole parse.
pub struct FieldsParser<'a> {
    context: &'a dyn SchemaContext,
}

impl<'a> FieldsParser<'a> {
    pub fn new(context: &'a dyn SchemaContext) -> Self {
        Self { context }
    }

    /// Parses `input` relative to the schema node `start`, producing one set
    /// of qualified names per selection depth, shallowest first. Sibling
    /// selections reaching the same depth through different ancestors land in
    /// the same set.
    pub fn parse(
        &self,
        start: &dyn SchemaNode,
        input: &str,
    ) -> Result<Vec<HashSet<QName>>, FieldsError> {
        trace!(input, "parsing fields expression");

        // a scan error stays an ordinary trailing token; the descent surfaces
        // it only once parsing reaches that position, so a schema resolution
        // failure earlier in the input is reported first
        let mut it = tokenize(input).into_iter().peekable();
        let mut arena = SelectionArena::default();
        let roots = self.parse_fields(&mut it, start, &mut arena)?;

        // parse_fields stops in front of a closing parenthesis; seeing one
        // here means the group was never opened
        match it.next().unwrap_or(EOI_TOKEN) {
            Token { kind: Eoi, .. } => {
                let levels = flatten(&arena, &roots);
                debug!(levels = levels.len(), "parsed fields expression");
                Ok(levels)
            }
            Token {
                kind: Error { msg },
                span,
            } => Err(FieldsError::invalid_value(msg.into_string(), span.0)),
            token => Err(FieldsError::invalid_value(
                format!("expected end of input, found {}", token.kind),
                token.span.0,
            )),
        }
    }

    /// `fields := path (';' path)*`. Sibling paths are resolved against the
    /// same schema node their group started at.
    fn parse_fields(
        &self,
        it: &mut Tokens,
        schema: &dyn SchemaNode,
        arena: &mut SelectionArena,
    ) -> Result<Vec<usize>, FieldsError> {
        let mut paths = Vec::new();

        loop {
            paths.push(self.parse_path(it, schema, arena)?);
            match it.peek().unwrap_or(&EOI_TOKEN).kind {
                Semicolon => {
                    it.next();
                }
                _ => break,
            }
        }

        Ok(paths)
    }

    /// `path := identifier ('/' identifier)* subselect?`.
    fn parse_path(
        &self,
        it: &mut Tokens,
        schema: &dyn SchemaNode,
        arena: &mut SelectionArena,
    ) -> Result<usize, FieldsError> {
        let (qname, span) = self.parse_identifier(it, schema)?;
        let child = schema.child(&qname).ok_or_else(|| {
            FieldsError::invalid_value(
                format!("'{}' is not a child of '{}'", qname, schema.qname()),
                span.0,
            )
        })?;
        let index = arena.push(qname);

        match it.peek().unwrap_or(&EOI_TOKEN).kind {
            Slash => {
                // descend, a single chain with the resolved node as parent
                it.next();
                let descendant = self.parse_path(it, child, arena)?;
                arena.nodes[index].children.push(descendant);
            }
            LParen => {
                let open = it.next().unwrap();
                let children = self.parse_fields(it, child, arena)?;
                match it.next().unwrap_or(EOI_TOKEN) {
                    Token { kind: RParen, .. } => {}
                    Token { kind: Eoi, .. } => {
                        return Err(FieldsError::invalid_value(
                            String::from("unclosed parenthesized selection"),
                            open.span.0,
                        ));
                    }
                    Token {
                        kind: Error { msg },
                        span,
                    } => {
                        return Err(FieldsError::invalid_value(msg.into_string(), span.0));
                    }
                    token => {
                        return Err(FieldsError::invalid_value(
                            format!("expected ')', found {}", token.kind),
                            token.span.0,
                        ));
                    }
                }
                arena.nodes[index].children = children;

                // after a group close only ';', an enclosing ')' or end of
                // input may follow
                match it.peek().unwrap_or(&EOI_TOKEN) {
                    Token {
                        kind: Semicolon | RParen | Eoi,
                        ..
                    } => {}
                    Token {
                        kind: Error { msg },
                        span,
                    } => {
                        return Err(FieldsError::invalid_value((*msg).to_string(), span.0));
                    }
                    token => {
                        return Err(FieldsError::invalid_value(
                            format!("expected ';' or end of input after ')', found {}", token.kind),
                            token.span.0,
                        ));
                    }
                }
            }
            _ => {}
        }

        Ok(index)
    }

    /// `identifier := (name ':')? name`, resolved to a qualified name. An
    /// unprefixed identifier inherits the namespace of the current schema
    /// node's module.
    fn parse_identifier(
        &self,
        it: &mut Tokens,
        schema: &dyn SchemaNode,
    ) -> Result<(QName, (usize, usize)), FieldsError> {
        match it.next().unwrap_or(EOI_TOKEN) {
            Token {
                kind: Name { value },
                span,
            } => {
                if matches!(it.peek().unwrap_or(&EOI_TOKEN).kind, Colon) {
                    it.next();
                    let module = self.context.module_for_prefix(&value).ok_or_else(|| {
                        FieldsError::invalid_value(
                            format!("unknown module prefix '{}'", value),
                            span.0,
                        )
                    })?;
                    match it.next().unwrap_or(EOI_TOKEN) {
                        Token {
                            kind: Name { value: local },
                            span: local_span,
                        } => Ok((
                            QName::new(module, local.into_string()),
                            (span.0, local_span.1),
                        )),
                        Token {
                            kind: Error { msg },
                            span,
                        } => Err(FieldsError::invalid_value(msg.into_string(), span.0)),
                        token => Err(FieldsError::invalid_value(
                            format!("expected a node identifier after ':', found {}", token.kind),
                            token.span.0,
                        )),
                    }
                } else {
                    let module = schema.qname().module.clone();
                    Ok((QName::new(module, value.into_string()), span))
                }
            }
            Token {
                kind: Error { msg },
                span,
            } => Err(FieldsError::invalid_value(msg.into_string(), span.0)),
            token => Err(FieldsError::invalid_value(
                format!("expected a node identifier, found {}", token.kind),
                token.span.0,
            )),
        }
    }
}

/// Breadth-first flattening of the selection tree: all nodes at depth 0 form
/// the first level group, all of their children collectively form the second,
/// and so on, irrespective of which branch a node descends from. Duplicate
/// names at a level collapse; levels past the deepest selection do not exist.
fn flatten(arena: &SelectionArena, roots: &[usize]) -> Vec<HashSet<QName>> {
    let mut levels = Vec::new();
    let mut current: Vec<usize> = roots.to_vec();

    while !current.is_empty() {
        let mut group = HashSet::new();
        let mut next = Vec::new();
        for &index in &current {
            let node = &arena.nodes[index];
            group.insert(node.qname.clone());
            next.extend_from_slice(&node.children);
        }
        levels.push(group);
        current = next;
    }

    levels
}
