use clap::{Arg, Command};

pub const CALL_CMD: &str = "call";

pub fn create_call_cli() -> Command {
    Command::new(CALL_CMD)
        .about("Call variant zygosity per SRA dataset from a directory of .mbo alignment files.")
        .arg(
            Arg::new("mbo-dir")
                .required(true)
                .help("Directory containing one Magic-BLAST .mbo file per SRA dataset"),
        )
        .arg(
            Arg::new("intervals")
                .short('f')
                .long("intervals")
                .required(true)
                .help("Variant-interval table (variant id, start, stop, allele length)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .required(true)
                .help("Output path for the zygosity report TSV"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("NUMBER")
                .value_parser(clap::value_parser!(usize))
                .help("Number of worker threads (default: 4)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML file with calling thresholds"),
        )
        .arg(
            Arg::new("hom-threshold")
                .long("hom-threshold")
                .value_parser(clap::value_parser!(f64))
                .help("Variant fraction above which a call is homozygous (default: 0.8)"),
        )
        .arg(
            Arg::new("het-threshold")
                .long("het-threshold")
                .value_parser(clap::value_parser!(f64))
                .help("Variant fraction above which a call is heterozygous (default: 0.3)"),
        )
}
