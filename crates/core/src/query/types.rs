//! Types for store search expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store field a clause is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// Item name (the filename).
    Name,
    /// Indexed full document text, including the name.
    FullText,
}

impl SearchField {
    /// Keyword used by the store's query language.
    pub fn keyword(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::FullText => "fullText",
        }
    }
}

/// Boolean operator joining clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainOperator {
    #[default]
    And,
    Or,
}

impl ChainOperator {
    pub fn keyword(&self) -> &'static str {
        match self {
            ChainOperator::And => "and",
            ChainOperator::Or => "or",
        }
    }
}

/// One `field contains 'value'` clause.
///
/// `value` holds the raw token; quoting is applied when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub field: SearchField,
    pub value: String,
}

impl Clause {
    pub fn new(field: SearchField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} contains '{}'",
            self.field.keyword(),
            escape_literal(&self.value)
        )
    }
}

/// Escape a value for use inside a single-quoted store literal.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A synthesized search expression for one title variant.
///
/// Rendering is fully determined by the clause list, the chain operator and
/// the optional episode-marker clauses (always ORed together).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Title variant this query was built from.
    pub variant: String,
    /// Title token clauses.
    pub clauses: Vec<Clause>,
    /// Operator joining `clauses`.
    pub chain: ChainOperator,
    /// Episode marker alternatives, for series requests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Clause>,
}

impl Query {
    /// Render the expression submitted to the store.
    pub fn expression(&self) -> String {
        let title = join(&self.clauses, self.chain);
        if self.markers.is_empty() {
            title
        } else {
            format!(
                "({}) and ({})",
                title,
                join(&self.markers, ChainOperator::Or)
            )
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}

fn join(clauses: &[Clause], chain: ChainOperator) -> String {
    let separator = format!(" {} ", chain.keyword());
    clauses
        .iter()
        .map(Clause::to_string)
        .collect::<Vec<_>>()
        .join(&separator)
}
