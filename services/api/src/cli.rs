use crate::demo::{run_demo, run_evaluate, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gonogo::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Go/No-Go Partnership Scoring",
    about = "Score reform partnerships with real-estate developers from the command line",
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
    /// Evaluate a partnership inputs file and print the decision report
    Evaluate(EvaluateArgs),
    /// Run the canned healthy, conditional, and vetoed scenarios
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["gonogo-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_accepts_input_and_flags() {
        let cli = Cli::try_parse_from([
            "gonogo-api",
            "evaluate",
            "--input",
            "inputs.json",
            "--save",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.input.as_deref(), Some(std::path::Path::new("inputs.json")));
                assert!(args.save);
                assert!(args.json);
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn serve_rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["gonogo-api", "serve", "--port", "http"]).is_err());
    }
}
