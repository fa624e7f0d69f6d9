use trains_core::error::Result;
use trains_core::format::{render_edges, OutputFormat};
use trains_core::graph::WeightedDigraph;

/// Print the parsed edges, sorted by source then destination
pub fn execute(format: OutputFormat, graph: &WeightedDigraph) -> Result<()> {
    print!("{}", render_edges(format, &graph.edges())?);
    Ok(())
}
