use trains_core::format::OutputFormat;
use trains_core::graph::Node;

/// Parse `--format`, reporting unknown names with the accepted ones
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a town name, which must be exactly one character
pub fn parse_node(s: &str) -> std::result::Result<Node, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(node), None) => Ok(node),
        _ => Err(format!("town must be a single character, got {:?}", s)),
    }
}
