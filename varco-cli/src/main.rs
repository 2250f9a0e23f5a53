mod call;
mod graph;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "varco";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Call known variants and their zygosity in SRA datasets from Magic-BLAST tabular alignments, and build a variant co-occurrence graph across datasets.")
        .subcommand_required(true)
        .subcommand(call::cli::create_call_cli())
        .subcommand(graph::cli::create_graph_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ZYGOSITY CALLING
        //
        Some((call::cli::CALL_CMD, matches)) => {
            call::handlers::run_call(matches)?;
        }

        //
        // CO-OCCURRENCE GRAPH
        //
        Some((graph::cli::GRAPH_CMD, matches)) => {
            graph::handlers::run_graph(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
