use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use contact_form::{
    commands::{interactive::interactive, submit::submit, validate::validate, FieldArgs},
    environment::Provider,
};
use contact_form_config::DEFAULT_CONFIG_PATH;
use contact_form_utils::contact_form_version;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let paths = std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(cli.config)
        .collect::<Vec<_>>();
    debug!(?paths, "loading config");
    let config = contact_form_config::load(&paths).context("Failed to load config")?;
    let provider = Provider::new(config)?;

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Validate(args) => validate(&provider, args, &mut stdout)?,
        Command::Submit(args) => submit(&provider, args, &mut stdout)?,
        Command::Interactive => interactive(&provider, std::io::stdin().lock(), &mut stdout)?,
        Command::CheckConfig { verbose } => {
            if verbose {
                writeln!(stdout, "{:#?}", provider.config())?;
            }
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = contact_form_version())]
struct Cli {
    /// Additional config files, applied in order on top of the default config
    #[arg(
        short,
        long,
        global = true,
        env = "CONTACT_FORM_CONFIG",
        value_delimiter = ':'
    )]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the given field values and print all errors
    #[command(aliases(["check", "v"]))]
    Validate(FieldArgs),
    /// Submit the given field values if they are valid
    #[command(aliases(["send", "s"]))]
    Submit(FieldArgs),
    /// Fill in the contact form line by line
    #[command(aliases(["i"]))]
    Interactive,
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
