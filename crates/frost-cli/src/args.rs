//! Command-line grammar for `frost`.
//!
//! The surface is three short flags (`-h`, `-m`, `-d`) with getopt
//! semantics: flags cluster (`-md`), a literal `--` ends flag parsing, and
//! flags are still recognized after a positional argument. Parsing is a
//! pure function from the argument list to a [`ParsedCommand`]; printing
//! and exit-code decisions stay with the caller.

use frost_power::SuspendMode;
use thiserror::Error;

/// The outcome of parsing one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// `-h` was present. The user asked for help, so the process prints
    /// usage and exits successfully, whatever else the command line held.
    Help,
    /// The command line was rejected. Usage is printed and the process
    /// exits with the failure code.
    Invalid(InvalidReason),
    /// Exactly one suspend mode was selected.
    Suspend(SuspendMode),
}

/// The first reason a command line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("no options given")]
    NoArguments,
    #[error("no suspend mode selected")]
    NoModeSelected,
    #[error("suspend mode already selected")]
    ModeAlreadySelected,
    #[error("unknown option -- '{0}'")]
    UnknownOption(char),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse the arguments following the program name.
pub fn parse(args: &[String]) -> ParsedCommand {
    if args.is_empty() {
        return ParsedCommand::Invalid(InvalidReason::NoArguments);
    }

    let mut help = false;
    let mut mode = None;
    let mut rejected = None;
    let mut options_done = false;

    for arg in args {
        if options_done {
            reject(&mut rejected, InvalidReason::UnexpectedArgument(arg.clone()));
            continue;
        }
        if arg == "--" {
            options_done = true;
            continue;
        }
        match arg.strip_prefix('-') {
            Some(cluster) if !cluster.is_empty() => {
                for option in cluster.chars() {
                    match option {
                        'h' => help = true,
                        'm' => select(&mut mode, &mut rejected, SuspendMode::Memory),
                        'd' => select(&mut mode, &mut rejected, SuspendMode::Disk),
                        other => reject(&mut rejected, InvalidReason::UnknownOption(other)),
                    }
                }
            }
            // A bare `-` or a token without a dash is positional.
            _ => reject(&mut rejected, InvalidReason::UnexpectedArgument(arg.clone())),
        }
    }

    // Asking for help is a success, whatever else was rejected.
    if help {
        ParsedCommand::Help
    } else if let Some(reason) = rejected {
        ParsedCommand::Invalid(reason)
    } else {
        match mode {
            Some(mode) => ParsedCommand::Suspend(mode),
            None => ParsedCommand::Invalid(InvalidReason::NoModeSelected),
        }
    }
}

fn select(
    mode: &mut Option<SuspendMode>,
    rejected: &mut Option<InvalidReason>,
    wanted: SuspendMode,
) {
    if mode.is_some() {
        reject(rejected, InvalidReason::ModeAlreadySelected);
    } else {
        *mode = Some(wanted);
    }
}

fn reject(rejected: &mut Option<InvalidReason>, reason: InvalidReason) {
    if rejected.is_none() {
        *rejected = Some(reason);
    }
}

/// The usage message, with the program name interpolated.
pub fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [OPTION]...\n\
         Suspend the system, either to RAM or a swap partition.\n\
         \n\
         Options:\n\
         \t-h\tShow this message and quit\n\
         \t-m\tSuspend to RAM\n\
         \t-d\tSuspend to disk\n\
         \n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_strs(args: &[&str]) -> ParsedCommand {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        parse(&owned)
    }

    #[test]
    fn test_no_arguments_is_invalid() {
        assert_eq!(
            parse_strs(&[]),
            ParsedCommand::Invalid(InvalidReason::NoArguments)
        );
    }

    #[test]
    fn test_single_mode_selects_it() {
        assert_eq!(parse_strs(&["-m"]), ParsedCommand::Suspend(SuspendMode::Memory));
        assert_eq!(parse_strs(&["-d"]), ParsedCommand::Suspend(SuspendMode::Disk));
    }

    #[test]
    fn test_second_mode_is_rejected() {
        assert_eq!(
            parse_strs(&["-m", "-d"]),
            ParsedCommand::Invalid(InvalidReason::ModeAlreadySelected)
        );
        assert_eq!(
            parse_strs(&["-d", "-m"]),
            ParsedCommand::Invalid(InvalidReason::ModeAlreadySelected)
        );
        assert_eq!(
            parse_strs(&["-m", "-m"]),
            ParsedCommand::Invalid(InvalidReason::ModeAlreadySelected)
        );
    }

    #[test]
    fn test_clustered_options_split() {
        assert_eq!(
            parse_strs(&["-md"]),
            ParsedCommand::Invalid(InvalidReason::ModeAlreadySelected)
        );
        assert_eq!(parse_strs(&["-mh"]), ParsedCommand::Help);
    }

    #[test]
    fn test_help_flag_alone() {
        assert_eq!(parse_strs(&["-h"]), ParsedCommand::Help);
    }

    #[test]
    fn test_help_dominates_other_outcomes() {
        assert_eq!(parse_strs(&["-h", "-m"]), ParsedCommand::Help);
        assert_eq!(parse_strs(&["-x", "-h"]), ParsedCommand::Help);
        assert_eq!(parse_strs(&["-h", "extra"]), ParsedCommand::Help);
        assert_eq!(parse_strs(&["extra", "-h"]), ParsedCommand::Help);
    }

    // After `--` the token is positional, so it cannot ask for help.
    #[test]
    fn test_help_after_double_dash_is_positional() {
        assert_eq!(
            parse_strs(&["--", "-h"]),
            ParsedCommand::Invalid(InvalidReason::UnexpectedArgument("-h".into()))
        );
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        assert_eq!(
            parse_strs(&["-x"]),
            ParsedCommand::Invalid(InvalidReason::UnknownOption('x'))
        );
    }

    #[test]
    fn test_trailing_argument_is_rejected() {
        assert_eq!(
            parse_strs(&["-m", "extra"]),
            ParsedCommand::Invalid(InvalidReason::UnexpectedArgument("extra".into()))
        );
    }

    #[test]
    fn test_double_dash_ends_option_parsing() {
        assert_eq!(
            parse_strs(&["--"]),
            ParsedCommand::Invalid(InvalidReason::NoModeSelected)
        );
        assert_eq!(
            parse_strs(&["--", "-m"]),
            ParsedCommand::Invalid(InvalidReason::UnexpectedArgument("-m".into()))
        );
        assert_eq!(
            parse_strs(&["-m", "--"]),
            ParsedCommand::Suspend(SuspendMode::Memory)
        );
    }

    #[test]
    fn test_lone_dash_is_positional() {
        assert_eq!(
            parse_strs(&["-"]),
            ParsedCommand::Invalid(InvalidReason::UnexpectedArgument("-".into()))
        );
    }

    #[test]
    fn test_first_rejection_is_reported() {
        assert_eq!(
            parse_strs(&["-x", "-m", "-d"]),
            ParsedCommand::Invalid(InvalidReason::UnknownOption('x'))
        );
    }

    #[test]
    fn test_usage_interpolates_program_name() {
        let text = usage("frost");
        assert!(text.starts_with("Usage: frost [OPTION]..."));
        assert!(text.contains("-m\tSuspend to RAM"));
        assert!(text.contains("-d\tSuspend to disk"));
    }
}
