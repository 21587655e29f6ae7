use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::placeholder::TypePrecedence;

/// Generate a starting terraform.tfvars from variables.tf declarations
#[derive(Parser, Debug)]
#[command(
    name = "tfvars-gen",
    about = "Generate a starting terraform.tfvars from variables.tf declarations",
    version,
    author,
    long_about = "tfvars-gen scans a variables.tf file for variable declarations and \
                  writes a flat name = value assignment file. Each declared default is \
                  carried over verbatim; variables without one get a placeholder picked \
                  from their declared type.\n\n\
                  Examples:\n  \
                  tfvars-gen variables.tf\n  \
                  tfvars-gen variables.tf staging.tfvars\n  \
                  tfvars-gen variables.tf --type-precedence collections"
)]
pub struct CliArgs {
    #[arg(
        value_name = "VARIABLES_FILE",
        help = "Path to the variables.tf file to read"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        value_name = "OUTPUT_FILE",
        help = "Path of the tfvars file to write (defaults to ./terraform.tfvars)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        default_value = "scalars",
        help = "Which type keywords win when synthesizing a placeholder for a composite type"
    )]
    pub type_precedence: TypePrecedenceArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error logging"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePrecedenceArg {
    /// Scalar keywords checked first: list(string) gets the string placeholder ""
    Scalars,
    /// Collection keywords checked first: list(string) gets []
    Collections,
}

impl From<TypePrecedenceArg> for TypePrecedence {
    fn from(arg: TypePrecedenceArg) -> Self {
        match arg {
            TypePrecedenceArg::Scalars => TypePrecedence::Scalars,
            TypePrecedenceArg::Collections => TypePrecedence::Collections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        // Verify that CLI structure is valid
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::parse_from(&["tfvars-gen"]);
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert_eq!(args.type_precedence, TypePrecedenceArg::Scalars);
    }

    #[test]
    fn test_input_only() {
        let args = CliArgs::parse_from(&["tfvars-gen", "variables.tf"]);
        assert_eq!(args.input, Some(PathBuf::from("variables.tf")));
        assert!(args.output.is_none());
    }

    #[test]
    fn test_input_and_output() {
        let args = CliArgs::parse_from(&["tfvars-gen", "variables.tf", "staging.tfvars"]);
        assert_eq!(args.input, Some(PathBuf::from("variables.tf")));
        assert_eq!(args.output, Some(PathBuf::from("staging.tfvars")));
    }

    #[test]
    fn test_type_precedence_flag() {
        let args = CliArgs::parse_from(&[
            "tfvars-gen",
            "variables.tf",
            "--type-precedence",
            "collections",
        ]);
        assert_eq!(args.type_precedence, TypePrecedenceArg::Collections);
        assert_eq!(
            TypePrecedence::from(args.type_precedence),
            TypePrecedence::Collections
        );
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(&["tfvars-gen", "-v", "variables.tf"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_quiet_flag() {
        let args = CliArgs::parse_from(&["tfvars-gen", "-q", "variables.tf"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(&["tfvars-gen", "--log-level", "debug", "variables.tf"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
