mod args;
mod global_settings;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use numeric_sets::NumericSet;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

/// Bounds are read as decimals, so that `0.1` is exactly 0.1
type Set = NumericSet<Decimal>;

fn path_arg<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path> {
    args.get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .with_context(|| format!("Missing argument {id}"))
}

fn load(path: &Path) -> Result<Set> {
    Set::read(path).with_context(|| format!("Cannot read {}", path.display()))
}

/// Load the LEFT and RIGHT sets of a binary command
fn operands(args: &ArgMatches) -> Result<(Set, Set)> {
    let left = load(path_arg(args, "LEFT")?)?;
    let right = load(path_arg(args, "RIGHT")?)?;
    Ok((left, right))
}

fn output(globals: &GlobalSettings, set: &Set) -> Result<()> {
    match &globals.output {
        Some(path) => set
            .save(path)
            .with_context(|| format!("Cannot write {}", path.display())),
        None => {
            for interval in set {
                println!("{interval}");
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let args = build_cli().get_matches();
    let globals = GlobalSettings::new(&args);
    globals.init_logger();

    match args.subcommand() {
        Some(("normalize", sub)) => {
            output(&globals, &load(path_arg(sub, "FILE")?)?)
        }
        Some(("union", sub)) => {
            let (left, right) = operands(sub)?;
            output(&globals, &left.union(&right))
        }
        Some(("intersection", sub)) => {
            let (left, right) = operands(sub)?;
            output(&globals, &left.intersection(&right))
        }
        Some(("difference", sub)) => {
            let (left, right) = operands(sub)?;
            output(&globals, &left.difference(&right))
        }
        Some(("symmetric-difference", sub)) => {
            let (left, right) = operands(sub)?;
            output(&globals, &left.symmetric_difference(&right))
        }
        Some(("subset", sub)) => {
            let (left, right) = operands(sub)?;
            println!("{}", left.is_subset(&right));
            Ok(())
        }
        Some(("superset", sub)) => {
            let (left, right) = operands(sub)?;
            println!("{}", left.is_superset(&right));
            Ok(())
        }
        Some(("contains", sub)) => {
            let set = load(path_arg(sub, "FILE")?)?;
            let point = sub
                .get_one::<Decimal>("POINT")
                .context("Missing argument POINT")?;
            println!("{}", set.contains(point));
            Ok(())
        }
        Some(("completions", sub)) => {
            let shell = sub
                .get_one::<clap_complete_command::Shell>("shell")
                .cloned()
                .context("Missing argument SHELL")?;
            shell.generate(&mut build_cli(), &mut std::io::stdout());
            Ok(())
        }
        Some((name, _)) => bail!("Unknown command {name}"),
        None => bail!("No command given"),
    }
}
