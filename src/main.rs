use anyhow::Result;
use clap::{Parser, Subcommand};
use tridiff::areas::loader::DocumentLoader;
use tridiff::areas::orchestrator::Orchestrator;
use tridiff::areas::session::Session;
use tridiff::artifacts::core::Output;
use tridiff::commands::porcelain::compare::CompareOptions;

#[derive(Parser)]
#[command(
    name = "tridiff",
    version = "0.1.0",
    about = "Compare up to three text documents pairwise",
    long_about = "Compares every pair among two or three documents line by line and prints \
    an annotated, line-numbered listing. Long unchanged runs are collapsed.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, global = true, help = "Write directly to stdout instead of the pager")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Compare documents pairwise",
        long_about = "Compares File 1 with File 2 and, when a third document is given, \
        File 2 with File 3 and File 1 with File 3. Empty documents take no part."
    )]
    Compare {
        #[arg(num_args = 2..=3, required = true, help = "Paths of the documents")]
        files: Vec<String>,
        #[arg(short, long, help = "Show collapsed unchanged lines as well")]
        expand_all: bool,
    },
    #[command(
        name = "diff-lines",
        about = "Print the raw line diff of two documents",
        long_about = "Prints every diff part with a '+', '-' or ' ' prefix, without numbering or collapsing."
    )]
    DiffLines {
        #[arg(index = 1)]
        old: String,
        #[arg(index = 2)]
        new: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let output = Output::detect(cli.no_pager);
    let mut session = Session::new(
        output.writer(),
        DocumentLoader::default(),
        Orchestrator::spawn(),
    );

    match &cli.command {
        Commands::Compare { files, expand_all } => {
            let opts = CompareOptions {
                expand_all: *expand_all,
            };
            session.compare(files, &opts).await?
        }
        Commands::DiffLines { old, new } => session.diff_lines(old, new).await?,
    }

    drop(session);
    output.finish()
}
