//! The ordered line grammar.
//!
//! Every source line is matched against a fixed priority list of rules and
//! the first rule that matches the whole line wins. Several rules are
//! textual supersets of later ones (a labeled edge also contains `->`, a
//! trailing-label edge would otherwise swallow `: label` into its target),
//! so the order in [`LINE_RULES`] is part of the language definition.
//!
//! Inside an open node block only two rules apply: `}` closes the block and
//! anything else becomes an attribute line. See [`match_block_line`].
//!
//! Each rule is a small winnow parser returning a tagged [`Rule`], so rules
//! can be exercised on their own.

use winnow::{
    ModalResult, Parser as _,
    ascii::{space0, space1},
    combinator::{delimited, eof, opt, preceded, terminated},
    token::{rest, take_till, take_until, take_while},
};

/// The rule that matched a line, with its captured text.
///
/// Endpoint and node labels have surrounding quotes stripped and are
/// trimmed; they are never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule<'s> {
    /// `}` while a block is open.
    BlockClose,
    /// Any other line while a block is open.
    BlockLine(&'s str),
    /// `@<kind> "<title>"`, title optional.
    Meta {
        kind: &'s str,
        title: Option<&'s str>,
    },
    /// `<source> --<label>--> <target>`
    LabeledEdge {
        source: &'s str,
        label: &'s str,
        target: &'s str,
    },
    /// `<source> -> <target> : <label>`
    ColonEdge {
        source: &'s str,
        target: &'s str,
        label: &'s str,
    },
    /// `<source> -> <target>`
    Edge { source: &'s str, target: &'s str },
    /// `<type> <label> {`
    BlockStart { node_type: &'s str, label: &'s str },
    /// `<type> "<label>"`
    QuotedNode { node_type: &'s str, label: &'s str },
    /// `<type> <label>` with a single-token label.
    BareNode { node_type: &'s str, label: &'s str },
}

/// Discriminant of a [`Rule`], used for logging and precedence tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    BlockClose,
    BlockLine,
    Meta,
    LabeledEdge,
    ColonEdge,
    Edge,
    BlockStart,
    QuotedNode,
    BareNode,
}

impl Rule<'_> {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::BlockClose => RuleKind::BlockClose,
            Rule::BlockLine(_) => RuleKind::BlockLine,
            Rule::Meta { .. } => RuleKind::Meta,
            Rule::LabeledEdge { .. } => RuleKind::LabeledEdge,
            Rule::ColonEdge { .. } => RuleKind::ColonEdge,
            Rule::Edge { .. } => RuleKind::Edge,
            Rule::BlockStart { .. } => RuleKind::BlockStart,
            Rule::QuotedNode { .. } => RuleKind::QuotedNode,
            Rule::BareNode { .. } => RuleKind::BareNode,
        }
    }
}

type RuleParser = for<'s> fn(&mut &'s str) -> ModalResult<Rule<'s>>;

/// Rules tried outside a block, highest priority first.
const LINE_RULES: [RuleParser; 7] = [
    meta,
    labeled_edge,
    colon_edge,
    bare_edge,
    block_start,
    quoted_node,
    bare_node,
];

/// Matches a trimmed line outside any block.
///
/// Returns `None` when no rule accepts the whole line.
pub fn match_line(line: &str) -> Option<Rule<'_>> {
    LINE_RULES.iter().find_map(|rule| {
        let mut input = line;
        rule(&mut input).ok()
    })
}

/// Matches a trimmed line while a node block is open.
pub fn match_block_line(line: &str) -> Rule<'_> {
    if line == "}" {
        Rule::BlockClose
    } else {
        Rule::BlockLine(line)
    }
}

/// Characters allowed in type tokens and metadata kinds.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Characters allowed in the single-token label of a bare node.
fn is_bare_label_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '{' | '}' | '"' | '-' | '>' | '<')
}

/// Trims `text` and strips one optional double quote on either side.
fn unquote(text: &str) -> Option<&str> {
    let text = text.trim();
    let text = text.strip_prefix('"').unwrap_or(text);
    let text = text.strip_suffix('"').unwrap_or(text).trim();
    (!text.is_empty()).then_some(text)
}

/// Trims `text`, rejecting it if nothing remains.
fn trimmed(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

/// Unquoted endpoint text; quotes may only wrap it, never sit inside it.
fn bare(text: &str) -> Option<&str> {
    unquote(text).filter(|text| !text.contains('"'))
}

/// `"<text>"`, returning the trimmed text between the quotes.
fn quoted<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited('"', take_till(1.., '"'), '"')
        .verify_map(trimmed)
        .parse_next(input)
}

/// An endpoint or label followed by `separator`, which is consumed.
///
/// A quoted endpoint is read up to its closing quote before the separator
/// is looked for, so the quotes may contain `:`, `->` or `{`. A bare
/// endpoint ends at the first occurrence of the separator.
fn endpoint_before<'s>(
    separator: &'static str,
) -> impl FnMut(&mut &'s str) -> ModalResult<&'s str> {
    move |input: &mut &'s str| {
        if input.starts_with('"') {
            terminated(quoted, (space0, separator)).parse_next(input)
        } else {
            terminated(take_until(1.., separator).verify_map(bare), separator).parse_next(input)
        }
    }
}

/// An endpoint running to the end of the line.
fn last_endpoint<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    if input.starts_with('"') {
        terminated(quoted, (space0, eof)).parse_next(input)
    } else {
        rest.verify_map(bare).parse_next(input)
    }
}

fn meta<'s>(input: &mut &'s str) -> ModalResult<Rule<'s>> {
    (
        preceded('@', take_while(1.., is_word_char)),
        opt(preceded(space1, rest)),
        eof,
    )
        .map(|(kind, title, _)| Rule::Meta {
            kind,
            title: title.and_then(unquote),
        })
        .parse_next(input)
}

fn labeled_edge<'s>(input: &mut &'s str) -> ModalResult<Rule<'s>> {
    (
        endpoint_before("--"),
        take_until(1.., "-->").verify_map(trimmed),
        "-->",
        preceded(space0, last_endpoint),
    )
        .map(|(source, label, _, target)| Rule::LabeledEdge {
            source,
            label,
            target,
        })
        .parse_next(input)
}

fn colon_edge<'s>(input: &mut &'s str) -> ModalResult<Rule<'s>> {
    (
        endpoint_before("->"),
        preceded(space0, endpoint_before(":")),
        rest.verify_map(trimmed),
    )
        .map(|(source, target, label)| Rule::ColonEdge {
            source,
            target,
            label,
        })
        .parse_next(input)
}

fn bare_edge<'s>(input: &mut &'s str) -> ModalResult<Rule<'s>> {
    (endpoint_before("->"), preceded(space0, last_endpoint))
        .map(|(source, target)| Rule::Edge { source, target })
        .parse_next(input)
}

fn block_start<'s>(input: &mut &'s str) -> ModalResult<Rule<'s>> {
    (
        take_while(1.., is_word_char),
        space1,
        endpoint_before("{"),
        space0,
        eof,
    )
        .map(|(node_type, _, label, _, _)| Rule::BlockStart { node_type, label })
        .parse_next(input)
}

fn quoted_node<'s>(input: &mut &'s str) -> ModalResult<Rule<'s>> {
    (
        take_while(1.., is_word_char),
        space1,
        delimited('"', take_till(1.., '"'), '"'),
        space0,
        eof,
    )
        .map(|(node_type, _, label, _, _)| Rule::QuotedNode { node_type, label })
        .parse_next(input)
}

fn bare_node<'s>(input: &mut &'s str) -> ModalResult<Rule<'s>> {
    (
        take_while(1.., is_word_char),
        space1,
        take_while(1.., is_bare_label_char),
        eof,
    )
        .map(|(node_type, _, label, _)| Rule::BareNode { node_type, label })
        .parse_next(input)
}
