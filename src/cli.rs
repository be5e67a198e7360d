use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use tracing::debug;

use crate::{
    composer::{ComposeOptions, check_usage, compose_and_commit},
    config::{Config, load_defaults},
    domain::CommitType,
    errors::{CommitBuddyError, Result},
    git::{GitCommitter, find_git_root},
    prompt::TerminalPrompter,
    utils::print_success,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Config subcommand
    /// Save the default type and scope used by `-c`. Replaces any saved defaults.
    Config {
        /// Default commit type
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        commit_type: Option<String>,

        /// Default commit scope
        #[arg(short = 's', long = "scope", value_name = "SCOPE")]
        scope: Option<String>,
    },

    /// Print a shell completion script to stdout
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
#[command(about = "Compose a conventional commit message and commit it.\n\
\t- Missing fields are prompted for.\n\
\t- Saved defaults for type and scope can be reused with -c.")]
#[command(version)]
#[command(name = "commitbuddy")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Commit type (feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub commit_type: Option<String>,

    /// Commit scope
    #[arg(short = 's', long = "scope", value_name = "SCOPE")]
    pub scope: Option<String>,

    /// Commit message
    #[arg(short = 'm', long = "message", value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Use the saved defaults for type and scope
    #[arg(short = 'c', long = "use-config", default_value_t = false)]
    pub use_config: bool,

    /// Print the composed message instead of committing
    #[arg(long = "dry-run", default_value_t = false)]
    pub dry_run: bool,

    /// Verbose
    /// Print debug logs and a confirmation once the commit is created.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// # `run`
/// Runs the parsed command line.
///
/// ## Errors
/// Returns an error if the command fails.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        commit_type,
        scope,
        message,
        use_config,
        dry_run,
        verbose,
    } = cli;

    match command {
        Some(Commands::Config { commit_type, scope }) => save_config(
            commit_type.as_deref().unwrap_or_default(),
            scope.as_deref().unwrap_or_default(),
        ),
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "commitbuddy", &mut io::stdout());
            Ok(())
        }
        None => {
            let options = ComposeOptions {
                commit_type,
                scope,
                message,
                use_defaults: use_config,
                dry_run,
            };

            commit(&options, verbose)
        }
    }
}

/// Validates and persists new defaults.
///
/// # Errors
/// * `MissingConfigArgs` if both values are empty
/// * `InvalidType` if the type is not part of the vocabulary
/// * Any error while writing the file
fn save_config(commit_type: &str, scope: &str) -> Result<()> {
    let commit_type = commit_type.trim();
    let scope = scope.trim();

    if commit_type.is_empty() && scope.is_empty() {
        return Err(CommitBuddyError::MissingConfigArgs);
    }

    if !commit_type.is_empty() {
        commit_type.parse::<CommitType>()?;
    }

    let config = Config::new()?;
    config.save_defaults(commit_type, scope)?;

    print_success(
        "Config updated!",
        &format!("Defaults saved to {}", config.get_config_file_path().display()),
    );

    Ok(())
}

/// Composes the message and creates the commit.
///
/// Flag combinations are checked first, then the repository, so nothing is
/// prompted for when the commit could not happen anyway.
fn commit(options: &ComposeOptions, verbose: bool) -> Result<()> {
    let defaults = load_defaults();
    debug!(?defaults, ?options, "starting compose");

    check_usage(options, &defaults)?;

    if !options.dry_run {
        find_git_root()?;
    }

    let mut prompter = TerminalPrompter::new();
    let spec = compose_and_commit(options, &defaults, &mut prompter, &GitCommitter::default())?;

    if verbose && !options.dry_run {
        print_success("Commit created", &spec.to_string());
    }

    Ok(())
}
