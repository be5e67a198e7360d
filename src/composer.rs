//! Commit Composer
//!
//! Turns flags, saved defaults and prompt answers into a [`CommitSpec`] and
//! hands the resulting header to a [`Committer`].
//!
//! Resolution order for each field:
//! - type: flag, then defaults (with `-c`), then prompt until it is a known type
//! - scope: flag, then defaults (with `-c`), then a single prompt (empty is fine)
//! - message: flag, then prompt until non-empty

use tracing::debug;

use crate::{
    config::Defaults,
    domain::{CommitSpec, CommitType},
    errors::{CommitBuddyError, Result},
    git::Committer,
    prompt::Prompter,
    utils::print_warning,
};

pub const TYPE_LABEL: &str = "Commit type";
pub const SCOPE_LABEL: &str = "Commit scope";
pub const MESSAGE_LABEL: &str = "Commit message";

/// Everything the user passed on the command line for one commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    pub commit_type: Option<String>,
    pub scope: Option<String>,
    pub message: Option<String>,
    /// Take type and scope from the saved defaults (`-c`).
    pub use_defaults: bool,
    /// Print the message instead of committing.
    pub dry_run: bool,
}

impl ComposeOptions {
    fn provided_type(&self) -> Option<String> {
        provided(self.commit_type.as_deref())
    }

    fn provided_scope(&self) -> Option<String> {
        provided(self.scope.as_deref())
    }
}

/// Rejects flag combinations that can never succeed.
///
/// Runs before anything is prompted or spawned.
///
/// # Errors
/// * `ConflictingDefaults` if `-c` is combined with `-t` or `-s`
/// * `NoDefaults` if `-c` is given but nothing is saved
pub fn check_usage(options: &ComposeOptions, defaults: &Defaults) -> Result<()> {
    if !options.use_defaults {
        return Ok(());
    }

    if options.provided_type().is_some() || options.provided_scope().is_some() {
        return Err(CommitBuddyError::ConflictingDefaults);
    }

    if defaults.is_empty() {
        return Err(CommitBuddyError::NoDefaults);
    }

    Ok(())
}

/// Resolves every field of the commit, prompting for what is missing.
///
/// # Errors
/// * Any usage error from [`check_usage`]
/// * Any error from the prompter (cancelled, input closed)
pub fn compose_message(
    options: &ComposeOptions,
    defaults: &Defaults,
    prompter: &mut impl Prompter,
) -> Result<CommitSpec> {
    check_usage(options, defaults)?;

    let (default_type, default_scope) = if options.use_defaults {
        (defaults.commit_type.clone(), defaults.scope.clone())
    } else {
        (None, None)
    };

    let commit_type = resolve_type(options.provided_type().or(default_type), prompter)?;

    let scope = match options.provided_scope().or(default_scope) {
        Some(scope) => scope,
        None => prompter.ask(SCOPE_LABEL)?,
    };

    let message = match provided(options.message.as_deref()) {
        Some(message) => message,
        None => ask_until_non_empty(MESSAGE_LABEL, prompter)?,
    };

    Ok(CommitSpec::new(commit_type, scope, message))
}

/// Composes the message and commits it, or prints it in dry-run mode.
///
/// # Errors
/// * Anything [`compose_message`] returns
/// * The committer's failure, unchanged
pub fn compose_and_commit(
    options: &ComposeOptions,
    defaults: &Defaults,
    prompter: &mut impl Prompter,
    committer: &impl Committer,
) -> Result<CommitSpec> {
    let spec = compose_message(options, defaults, prompter)?;
    let message = spec.to_string();

    debug!(header = %message, dry_run = options.dry_run, "message composed");

    if options.dry_run {
        println!("Would commit with message:");
        println!("---");
        println!("{message}");
        println!("---");
    } else {
        committer.commit(&message)?;
    }

    Ok(spec)
}

fn resolve_type(initial: Option<String>, prompter: &mut impl Prompter) -> Result<CommitType> {
    let mut candidate = match initial {
        Some(value) => value,
        None => prompter.ask(TYPE_LABEL)?,
    };

    loop {
        if let Some(commit_type) = CommitType::parse(&candidate) {
            return Ok(commit_type);
        }

        print_warning(
            &format!("Invalid commit type '{candidate}'"),
            &format!("Valid types: {}", CommitType::list()),
        );

        candidate = prompter.ask(TYPE_LABEL)?;
    }
}

fn ask_until_non_empty(label: &str, prompter: &mut impl Prompter) -> Result<String> {
    loop {
        let answer = prompter.ask(label)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
    }
}

fn provided(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::{git::MockCommitter, prompt::MockPrompter};

    fn flags(commit_type: &str, scope: &str, message: &str) -> ComposeOptions {
        let some = |v: &str| (!v.is_empty()).then(|| v.to_string());
        ComposeOptions {
            commit_type: some(commit_type),
            scope: some(scope),
            message: some(message),
            ..ComposeOptions::default()
        }
    }

    fn saved(commit_type: &str, scope: &str) -> Defaults {
        Defaults::from_values(commit_type, scope)
    }

    /// Expects the given answers, in order, for the given labels.
    fn scripted(answers: &[(&'static str, &'static str)]) -> MockPrompter {
        let mut prompter = MockPrompter::new();
        let mut seq = Sequence::new();

        for &(label, answer) in answers {
            prompter
                .expect_ask()
                .with(eq(label))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(answer.to_string()));
        }

        prompter
    }

    #[test]
    fn test_all_flags_commit_without_prompting() {
        let mut prompter = scripted(&[]);
        let mut committer = MockCommitter::new();
        committer
            .expect_commit()
            .with(eq("feat(api): add endpoint"))
            .times(1)
            .returning(|_| Ok(()));

        let spec = compose_and_commit(
            &flags("feat", "api", "add endpoint"),
            &Defaults::default(),
            &mut prompter,
            &committer,
        )
        .unwrap();

        assert_eq!(spec, CommitSpec::new(CommitType::Feat, "api", "add endpoint"));
    }

    #[test]
    fn test_invalid_type_reprompts_until_valid() {
        let mut prompter = scripted(&[
            (TYPE_LABEL, "yolo"),
            (TYPE_LABEL, "FEAT"),
            (TYPE_LABEL, ""),
            (TYPE_LABEL, "fix"),
        ]);

        let spec = compose_message(
            &flags("", "core", "stop leaking"),
            &Defaults::default(),
            &mut prompter,
        )
        .unwrap();

        assert_eq!(spec.to_string(), "fix(core): stop leaking");
    }

    #[test]
    fn test_invalid_type_flag_falls_back_to_prompt() {
        let mut prompter = scripted(&[(TYPE_LABEL, "docs")]);

        let spec = compose_message(
            &flags("feature", "readme", "typo"),
            &Defaults::default(),
            &mut prompter,
        )
        .unwrap();

        assert_eq!(spec.commit_type, CommitType::Docs);
    }

    #[test]
    fn test_empty_scope_answer_is_accepted() {
        let mut prompter = scripted(&[
            (TYPE_LABEL, "chore"),
            (SCOPE_LABEL, ""),
            (MESSAGE_LABEL, "bump deps"),
        ]);

        let spec = compose_message(&ComposeOptions::default(), &Defaults::default(), &mut prompter)
            .unwrap();

        assert_eq!(spec.to_string(), "chore: bump deps");
    }

    #[test]
    fn test_message_reprompts_until_non_empty() {
        let mut prompter = scripted(&[
            (MESSAGE_LABEL, ""),
            (MESSAGE_LABEL, ""),
            (MESSAGE_LABEL, "finally"),
        ]);

        let spec =
            compose_message(&flags("test", "x", ""), &Defaults::default(), &mut prompter).unwrap();

        assert_eq!(spec.message, "finally");
    }

    #[test]
    fn test_whitespace_flags_count_as_missing() {
        let mut prompter = scripted(&[(MESSAGE_LABEL, "real message")]);
        let options = ComposeOptions {
            message: Some("   ".to_string()),
            ..flags("perf", "db", "")
        };

        let spec = compose_message(&options, &Defaults::default(), &mut prompter).unwrap();

        assert_eq!(spec.to_string(), "perf(db): real message");
    }

    #[test]
    fn test_use_defaults_with_type_flag_is_rejected_before_prompting() {
        let mut prompter = scripted(&[]);
        let committer = MockCommitter::new();
        let options = ComposeOptions {
            use_defaults: true,
            ..flags("feat", "", "")
        };

        let result = compose_and_commit(&options, &saved("fix", "api"), &mut prompter, &committer);

        assert!(matches!(result, Err(CommitBuddyError::ConflictingDefaults)));
    }

    #[test]
    fn test_use_defaults_with_scope_flag_is_rejected() {
        let options = ComposeOptions {
            use_defaults: true,
            ..flags("", "api", "")
        };

        assert!(matches!(
            check_usage(&options, &saved("fix", "")),
            Err(CommitBuddyError::ConflictingDefaults)
        ));
    }

    #[test]
    fn test_use_defaults_without_saved_defaults_is_rejected() {
        let mut prompter = scripted(&[]);
        let options = ComposeOptions {
            use_defaults: true,
            ..ComposeOptions::default()
        };

        assert!(matches!(
            compose_message(&options, &Defaults::default(), &mut prompter),
            Err(CommitBuddyError::NoDefaults)
        ));
    }

    #[test]
    fn test_use_defaults_fills_type_and_scope() {
        let mut prompter = scripted(&[(MESSAGE_LABEL, "retry on timeout")]);
        let options = ComposeOptions {
            use_defaults: true,
            ..ComposeOptions::default()
        };

        let spec = compose_message(&options, &saved("fix", "net"), &mut prompter).unwrap();

        assert_eq!(spec.to_string(), "fix(net): retry on timeout");
    }

    #[test]
    fn test_use_defaults_prompts_for_missing_fields() {
        let mut prompter = scripted(&[(TYPE_LABEL, "build")]);
        let options = ComposeOptions {
            use_defaults: true,
            ..flags("", "", "pin toolchain")
        };

        let spec = compose_message(&options, &saved("", "ci"), &mut prompter);

        // Scope comes from the defaults, only the type is asked for
        assert_eq!(spec.unwrap().to_string(), "build(ci): pin toolchain");
    }

    #[test]
    fn test_saved_invalid_type_is_reprompted() {
        let mut prompter = scripted(&[(TYPE_LABEL, "style")]);
        let options = ComposeOptions {
            use_defaults: true,
            ..flags("", "", "format")
        };

        let spec = compose_message(&options, &saved("bogus", "ui"), &mut prompter).unwrap();

        assert_eq!(spec.to_string(), "style(ui): format");
    }

    #[test]
    fn test_defaults_ignored_without_flag() {
        let mut prompter = scripted(&[(TYPE_LABEL, "ci"), (SCOPE_LABEL, "")]);

        let spec =
            compose_message(&flags("", "", "cache"), &saved("feat", "api"), &mut prompter).unwrap();

        assert_eq!(spec.to_string(), "ci: cache");
    }

    #[test]
    fn test_dry_run_does_not_commit() {
        let mut prompter = scripted(&[]);
        let mut committer = MockCommitter::new();
        committer.expect_commit().never();
        let options = ComposeOptions {
            dry_run: true,
            ..flags("revert", "", "undo 1a2b3c")
        };

        let spec =
            compose_and_commit(&options, &Defaults::default(), &mut prompter, &committer).unwrap();

        assert_eq!(spec.to_string(), "revert: undo 1a2b3c");
    }

    #[test]
    fn test_commit_failure_is_propagated() {
        let mut prompter = scripted(&[]);
        let mut committer = MockCommitter::new();
        committer.expect_commit().times(1).returning(|_| {
            Err(crate::errors::GitError::CommandFailed {
                command: "git commit".to_string(),
                status: "exit status: 1".to_string(),
            }
            .into())
        });

        let result = compose_and_commit(
            &flags("refactor", "", "split module"),
            &Defaults::default(),
            &mut prompter,
            &committer,
        );

        assert!(matches!(result, Err(CommitBuddyError::Git(_))));
    }

    #[test]
    fn test_cancelled_prompt_aborts() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_ask()
            .returning(|_| Err(CommitBuddyError::UserCancelled));

        assert!(matches!(
            compose_message(&ComposeOptions::default(), &Defaults::default(), &mut prompter),
            Err(CommitBuddyError::UserCancelled)
        ));
    }
}
