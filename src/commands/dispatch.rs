//! Command dispatch logic for trains
use std::time::Instant;

use trains_core::config::ReportConfig;
use trains_core::error::Result;
use trains_core::query::Query;
use trains_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{edges, load, report};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = ReportConfig::resolve(cli.config.as_deref())?;
    let strict = cli.strict || config.strict;

    let spec = load::read_spec(cli.graph_file.as_deref(), cli.graph.as_deref())?;
    let graph = load::build_graph(&spec, strict)?;
    trace_time!(
        start,
        "load_graph",
        nodes = graph.node_count(),
        edges = graph.edge_count()
    );

    let format = cli.format;
    let single = |query: Query| report::execute(format, &graph, &[query]);

    match &cli.command {
        None | Some(Commands::Report) => report::execute(format, &graph, &config.queries),

        Some(Commands::Route { nodes }) => single(Query::Route {
            path: nodes.clone(),
        }),

        Some(Commands::Trips {
            start,
            end,
            max_stops,
            exact,
        }) => single(Query::Trips {
            start: *start,
            end: *end,
            max_stops: *max_stops,
            exact: *exact,
        }),

        Some(Commands::Within {
            start,
            end,
            distance,
        }) => single(Query::TripsWithin {
            start: *start,
            end: *end,
            distance: *distance,
        }),

        Some(Commands::Shortest { start, end }) => single(Query::Shortest {
            start: *start,
            end: *end,
        }),

        Some(Commands::Edges) => edges::execute(format, &graph),
    }
}
