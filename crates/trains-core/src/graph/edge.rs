use crate::graph::types::{EdgeSpec, Weight};

const GRAPH_LABEL: &str = "Graph:";

/// Parse one `<source><dest><weight>` token.
///
/// Source and destination are exactly one character each; everything after
/// them must parse as a base-10 integer (a leading `+` or `-` is accepted).
/// Returns `None` for tokens shorter than three characters or with a
/// non-numeric weight.
pub fn parse_edge(token: &str) -> Option<EdgeSpec> {
    let mut chars = token.chars();
    let source = chars.next()?;
    let dest = chars.next()?;
    let weight = chars.as_str();
    if weight.is_empty() {
        return None;
    }
    let weight = weight.parse::<Weight>().ok()?;
    Some(EdgeSpec::new(source, dest, weight))
}

/// Split a free-form graph spec into edge tokens.
///
/// Commas act as whitespace and every `Graph:` label is dropped.
pub fn tokenize_spec(spec: &str) -> Vec<String> {
    spec.replace(',', " ")
        .replace(GRAPH_LABEL, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
