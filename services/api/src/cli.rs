use crate::reports::{
    run_analytics_report, run_profile_report, run_search_report, AnalyticsArgs, ProfileArgs,
    SearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use staffboard::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Staff Dashboard",
    about = "Serve and inspect the staff dashboard's employee enrichment and analytics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the derived department, rating, projects, and feedback for an identifier
    Profile(ProfileArgs),
    /// Summarize a roster export by department
    Analytics(AnalyticsArgs),
    /// Filter a roster export by name, department, or rating
    Search(SearchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured roster JSON export
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Profile(args) => run_profile_report(args),
        Command::Analytics(args) => run_analytics_report(args),
        Command::Search(args) => run_search_report(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffboard::workforce::{Department, EmployeeId};

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["staffboard-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_profile_arguments() {
        let cli = Cli::try_parse_from(["staffboard-api", "profile", "--id", "7", "--today", "2025-06-15"])
            .expect("parses");
        match cli.command {
            Some(Command::Profile(args)) => {
                assert_eq!(args.id, EmployeeId::new(7));
                assert!(args.today.is_some());
            }
            other => panic!("expected profile command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_fractional_identifier() {
        assert!(Cli::try_parse_from(["staffboard-api", "profile", "--id", "7.5"]).is_err());
    }

    #[test]
    fn parses_repeated_search_filters() {
        let cli = Cli::try_parse_from([
            "staffboard-api",
            "search",
            "--roster",
            "users.json",
            "--department",
            "Human Resources",
            "--department",
            "sales",
            "--rating",
            "4",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(
                    args.departments,
                    vec![Department::HumanResources, Department::Sales]
                );
                assert_eq!(args.ratings.len(), 1);
            }
            other => panic!("expected search command, got {other:?}"),
        }
    }
}
