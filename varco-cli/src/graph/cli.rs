use clap::{Arg, Command};

pub const GRAPH_CMD: &str = "graph";

pub fn create_graph_cli() -> Command {
    Command::new(GRAPH_CMD)
        .about("Build the variant co-occurrence graph from a zygosity report.")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .help("Zygosity report TSV produced by `varco call`"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .required(true)
                .help("Output path for the co-occurrence edge list TSV"),
        )
}
