use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, arg, value_parser};
use rust_decimal::Decimal;
use std::path::PathBuf;

fn file_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .value_name(name)
        .help(help)
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

/// A command that combines the sets read from two files
fn binary_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(file_arg("LEFT", "File with the left-hand set"))
        .arg(file_arg("RIGHT", "File with the right-hand set"))
}

pub(crate) fn build_cli() -> Command {
    Command::new("numsets")
        .version("0.1")
        .about("Set operations on files of numeric intervals")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("normalize")
                .about("Sort and merge the intervals of a file")
                .arg(file_arg("FILE", "File with one interval per line")),
        )
        .subcommand(binary_command("union", "Values in either set"))
        .subcommand(binary_command("intersection", "Values in both sets"))
        .subcommand(binary_command(
            "difference",
            "Values of LEFT that are not in RIGHT",
        ))
        .subcommand(binary_command(
            "symmetric-difference",
            "Values in exactly one of the two sets",
        ))
        .subcommand(binary_command(
            "subset",
            "Whether every value of LEFT is also in RIGHT",
        ))
        .subcommand(binary_command(
            "superset",
            "Whether every value of RIGHT is also in LEFT",
        ))
        .subcommand(
            Command::new("contains")
                .about("Whether a value belongs to the set")
                .arg(file_arg("FILE", "File with one interval per line"))
                .arg(
                    arg!(<POINT> "The value to look for")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(Decimal)),
                ),
        )
        .subcommand(
            // Use    eval "$(numsets completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
