use trains_core::error::Result;
use trains_core::format::{build_records, render_report, OutputFormat};
use trains_core::graph::WeightedDigraph;
use trains_core::query::{evaluate_all, Query};

/// Evaluate queries and print a numbered report
pub fn execute(format: OutputFormat, graph: &WeightedDigraph, queries: &[Query]) -> Result<()> {
    let answers = evaluate_all(graph, queries);
    for (query, answer) in queries.iter().zip(&answers) {
        tracing::debug!(query = %query, answer = %answer, "evaluated");
    }
    print!("{}", render_report(format, build_records(queries, &answers))?);
    Ok(())
}
