use clap::{Parser, Subcommand};
use upstat_core::cli::{self, analyze::AnalyzeArgs, config::ConfigCmd};
use upstat_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "upstat",
    version,
    about = "upstat: per-pool upstream latency statistics from proxy access logs",
    after_help = "Examples:\n  \
        upstat analyze --period PT5M access.log\n  \
        upstat analyze --period PT1H --format csv access.log\n  \
        upstat analyze --config upstat.hcl access.log"
)]
struct Cli {
    /// Log skipped and malformed lines to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate upstream timings into time buckets
    Analyze(AnalyzeArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Analyze(args) => cli::analyze::run(args),
        Command::Config { cmd } => cli::config::run(cmd),
    };

    if let Err(e) = result {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
