use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talentapp::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "talentapp-api",
    about = "Run recruitment drives, score candidates and rank them",
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
    /// Compute a score breakdown for one set of evaluation inputs
    Score(ScoreArgs),
    /// Seed a drive with candidates, score them and print the ranking
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["talentapp"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_subcommand_parses_inputs() {
        let cli = Cli::try_parse_from([
            "talentapp",
            "score",
            "--relocate",
            "yes",
            "--experience",
            "5",
            "--attitude",
            "80",
            "--skill",
            "90",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.relocate, "yes");
                assert_eq!(args.experience, 5);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }
}
