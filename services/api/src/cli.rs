use crate::demo::{run_demo, run_recommend, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use outfit_ai::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Outfit Matcher",
    about = "Recommend complementary catalog items for a base garment or accessory",
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
    /// Recommend an outfit around a single catalog item
    Recommend(RecommendArgs),
    /// Walk through recommendations for the showcase catalog items
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Catalog CSV export (defaults to OUTFIT_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn recommend_parses_overrides() {
        let cli = Cli::try_parse_from([
            "outfit-ai-api",
            "recommend",
            "--item-id",
            "15970",
            "--per-category",
            "3",
            "--seed",
            "9",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.item_id, 15970);
                assert_eq!(args.per_category, Some(3));
                assert_eq!(args.seed, Some(9));
                assert!(args.json);
                assert!(args.catalog.is_none());
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["outfit-ai-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
