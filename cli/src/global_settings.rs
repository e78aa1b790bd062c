use clap::{Arg, ArgMatches, arg, value_parser};
use log::LevelFilter;
use std::path::PathBuf;

pub struct GlobalSettings {
    // Where to save the resulting set.  It is printed when None.
    pub output: Option<PathBuf>,

    // Number of --verbose switches
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(-o --output [FILE] "Save the resulting set to this file")
                .value_parser(value_parser!(PathBuf))
                .global(true),
            arg!(-v --verbose ... "Log more details (repeat for more)")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            output: args.get_one::<PathBuf>("output").cloned(),
            verbosity: args.get_count("verbose"),
        }
    }

    /// The log level selected by --verbose.  RUST_LOG, when set, takes
    /// precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level())
            .parse_default_env()
            .init();
    }
}
