use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use varco_graph::CoOccurrenceGraph;
use varco_io::{read_zygosity_report, write_edge_list};

pub fn run_graph(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A zygosity report is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let calls = read_zygosity_report(Path::new(input))?;
    let graph = CoOccurrenceGraph::build(&calls);

    write_edge_list(&graph.sorted_edges(), Path::new(output))?;
    println!(
        "Wrote co-occurrence graph ({} variants, {} edges) to {}",
        graph.node_count(),
        graph.edge_count(),
        output
    );

    Ok(())
}
