//! Graph input: a spec file (first line) or an inline `--graph` string

use std::fs;
use std::path::Path;

use trains_core::bail_usage;
use trains_core::error::{Result, TrainsError};
use trains_core::graph::WeightedDigraph;

/// Read the graph spec from exactly one of the two sources
pub fn read_spec(graph_file: Option<&Path>, inline: Option<&str>) -> Result<String> {
    match (graph_file, inline) {
        (Some(_), Some(_)) => bail_usage!("pass either GRAPHFILE or --graph, not both"),
        (None, None) => bail_usage!("no graph given: pass GRAPHFILE or --graph"),
        (None, Some(spec)) => Ok(spec.to_string()),
        (Some(path), None) => {
            let content = fs::read_to_string(path)
                .map_err(|e| TrainsError::io_operation("read graph file", path.display(), e))?;
            Ok(first_line(&content).to_string())
        }
    }
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}

/// Build the graph, permissively unless `strict` is set
pub fn build_graph(spec: &str, strict: bool) -> Result<WeightedDigraph> {
    if strict {
        WeightedDigraph::from_spec_strict(spec)
    } else {
        Ok(WeightedDigraph::from_spec(spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_line_only() {
        assert_eq!(first_line("AB5, BC4\nCD8\n"), "AB5, BC4");
        assert_eq!(first_line("AB5\r\nCD8"), "AB5");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_read_spec_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        fs::write(&path, "Graph: AB5, BC4\nignored\n").unwrap();
        assert_eq!(read_spec(Some(&path), None).unwrap(), "Graph: AB5, BC4");
    }

    #[test]
    fn test_read_spec_requires_one_source() {
        let both = read_spec(Some(Path::new("g.txt")), Some("AB5")).unwrap_err();
        assert!(matches!(both, TrainsError::UsageError(_)));
        let neither = read_spec(None, None).unwrap_err();
        assert!(matches!(neither, TrainsError::UsageError(_)));
    }

    #[test]
    fn test_read_spec_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_spec(Some(&dir.path().join("nope.txt")), None).unwrap_err();
        assert!(matches!(err, TrainsError::FailedOperationWithTarget { .. }));
    }

    #[test]
    fn test_build_graph_modes() {
        assert_eq!(build_graph("AB5 junk", false).unwrap().edge_count(), 1);
        assert!(build_graph("AB5 junk", true).is_err());
    }
}
