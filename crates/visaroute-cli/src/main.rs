mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use visaroute_cli::logging::{init_logging, LoggingConfig};
use visaroute_cli::output::OutputFormat;
use visaroute_lib::{Criterion, VisaPolicy};

use commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find flight routes under visa restrictions")]
struct Cli {
    /// CSV file with route records.
    #[arg(long)]
    data: PathBuf,

    /// How visa-gated flights restrict travellers without a visa.
    #[arg(long, value_enum, default_value_t = PolicyArg::EdgeGated)]
    policy: PolicyArg,

    /// Enable debug logging on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two airports.
    Route {
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// The traveller holds a visa.
        #[arg(long)]
        visa: bool,
        /// What to minimise.
        #[arg(long, value_enum, default_value_t = CriterionArg::Cost)]
        criterion: CriterionArg,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print every airport and flight in the loaded data.
    Graph {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Skip only the visa-gated flights.
    EdgeGated,
    /// Skip every airport touched by a visa-gated flight.
    NodeQuarantine,
}

impl From<PolicyArg> for VisaPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::EdgeGated => VisaPolicy::EdgeGated,
            PolicyArg::NodeQuarantine => VisaPolicy::NodeQuarantine,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CriterionArg {
    /// Lowest total price.
    Cost,
    /// Fewest flights.
    Hops,
}

impl From<CriterionArg> for Criterion {
    fn from(value: CriterionArg) -> Self {
        match value {
            CriterionArg::Cost => Criterion::Cost,
            CriterionArg::Hops => Criterion::Hops,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::from_env().verbose(cli.verbose));

    let policy = VisaPolicy::from(cli.policy);
    match cli.command {
        Command::Route {
            from,
            to,
            visa,
            criterion,
            format,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                visa,
                criterion: criterion.into(),
                format,
            };
            commands::route::handle_route_command(&cli.data, policy, &args)
        }
        Command::Graph { format } => {
            commands::graph::handle_graph_command(&cli.data, policy, format)
        }
    }
}
