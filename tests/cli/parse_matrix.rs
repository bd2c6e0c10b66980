use clap::{CommandFactory, Parser};
use workpad::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["workpad", "tree"],
        vec!["workpad", "tree", "--format", "json"],
        vec!["workpad", "cat", "README.md"],
        vec!["workpad", "search", "greet", "--format", "json"],
        vec!["workpad", "create", "/src", "util.py"],
        vec!["workpad", "create", "/"],
        vec!["workpad", "run", "App.ts"],
        vec!["workpad", "run"],
        vec!["workpad", "languages"],
        vec!["workpad", "open", "index.js"],
        vec!["workpad", "close"],
        vec!["workpad", "edit", "--", "-1", "is", "negative"],
        vec!["workpad", "tabs"],
        vec!["workpad", "pick", "root/src/App.ts"],
        vec!["workpad", "shell"],
        vec!["workpad", "--seed", "project.toml", "--log-level", "debug", "tree"],
        vec!["workpad", "tree", "--config", "custom.toml", "--verbose"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_arguments() {
    assert!(Cli::try_parse_from(["workpad"]).is_err());
    assert!(Cli::try_parse_from(["workpad", "cat"]).is_err());
    assert!(Cli::try_parse_from(["workpad", "search"]).is_err());
    assert!(Cli::try_parse_from(["workpad", "create"]).is_err());
    assert!(Cli::try_parse_from(["workpad", "exit"]).is_err());
}

#[test]
fn edit_collects_trailing_words() {
    let cli = Cli::try_parse_from(["workpad", "edit", "let", "y", "=", "1;"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Edit {
            text: vec!["let".into(), "y".into(), "=".into(), "1;".into()]
        }
    );
}

#[test]
fn global_flags_are_available_after_subcommand() {
    let cli = Cli::try_parse_from(["workpad", "search", "x", "--seed", "s.json"]).unwrap();
    assert_eq!(cli.seed.as_deref(), Some(std::path::Path::new("s.json")));
}

#[test]
fn help_lists_every_command() {
    let help = Cli::command().render_long_help().to_string();
    for name in [
        "tree", "cat", "search", "create", "run", "languages", "open", "close", "edit", "tabs",
        "pick", "shell",
    ] {
        assert!(help.contains(name), "help is missing '{name}'");
    }
}
