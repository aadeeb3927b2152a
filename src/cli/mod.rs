pub mod args;
pub mod commands;

pub use args::{GenerateArgs, OutputFormat};
use crate::core::ConfigLoader;
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "workflowdoc")]
#[command(version = crate::VERSION)]
#[command(about = "Generate markdown documentation for GitHub Actions workflows")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: add <!--start--> and <!--end--> markers to your README, then run `workflowdoc generate <file> --update-readme` whenever the workflow changes."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "Render markdown documentation for a workflow file",
        long_about = "Generate reads a workflow or action metadata file and prints its description, inputs, outputs and triggers as markdown, optionally injecting the result into a README.",
        after_help = GENERATE_EXAMPLE,
        after_long_help = generate_long_help()
    )]
    Generate(GenerateArgs),
}

const GENERATE_EXAMPLE: &str =
    "Example:\n    workflowdoc generate .github/workflows/deploy.yml --update-readme";

fn generate_long_help() -> String {
    let mut help = format!("{}\n\nEnvironment:\n", GENERATE_EXAMPLE);
    for line in ConfigLoader::env_var_documentation() {
        help.push_str("    ");
        help.push_str(line);
        help.push('\n');
    }
    help
}

pub async fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Generate(generate_args) => commands::generate(generate_args).await,
    }
}
