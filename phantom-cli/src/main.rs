//! Phantom CLI - Command line interface
//!
//! Injects one script and prints the code that would be handed to the page.
//! Configuration comes from an optional JSON file, overlaid by flags.

use clap::{ArgAction, Parser};
use phantom_config::{LogLevel, PhantomConfig};
use phantom_log::{debug, LogConfig, Logger};
use phantom_script::{ExecutionSink, RecordingSink, ScriptContext, WriterSink};
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

mod config;
mod logging;
mod usage;

mod platform {
    pub mod cli;
    pub use cli::print_error;
}

use crate::config::Overrides;
use crate::platform::print_error;

#[derive(Parser, Debug)]
#[command(
    name = "phantom",
    about = "Inject a JavaScript or CoffeeScript file",
    version,
    disable_help_flag = true
)]
struct Cli {
    /// Script to inject (.js or .coffee)
    #[arg(value_name = "SCRIPT")]
    script: Option<String>,

    /// Directory searched when the script is not found in the working directory
    #[arg(long, value_name = "DIR")]
    lookup_dir: Option<String>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CoffeeScript compiler command line; empty passes sources through
    #[arg(long, value_name = "CMD")]
    coffee_command: Option<String>,

    /// Minimum message level: debug, warning, critical or fatal
    #[arg(long, value_name = "LEVEL", value_parser = config::parse_log_level)]
    log_level: Option<LogLevel>,

    /// Resolve and convert without printing the code
    #[arg(long)]
    check: bool,

    /// Print the bundled usage text
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            lookup_dir: self.lookup_dir.clone(),
            coffee_command: self.coffee_command.clone(),
            log_level: self.log_level,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Read configuration file
    let mut config = match config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    };
    cli.overrides().apply(&mut config);

    let (logger, _) = LogConfig::from(&config.logging).init();
    logging::init(Arc::clone(&logger));

    process::exit(run(&cli, config, logger));
}

/// Everything after configuration and logging are set up; returns the exit status
fn run(cli: &Cli, config: PhantomConfig, logger: Arc<Logger>) -> i32 {
    if cli.help {
        return print_usage(&logger, 0);
    }

    let Some(script) = cli.script.as_deref() else {
        return print_usage(&logger, 1);
    };

    // Global context for the process (the transpiler is created on first use)
    if phantom_script::init(ScriptContext::from_config(&config.injector)).is_err() {
        debug!(logger, "script context already installed");
    }

    let lookup_dir = &config.injector.lookup_dir;
    let injected = if cli.check {
        let mut sink = RecordingSink::new();
        let injected = inject(script, lookup_dir, &mut sink, &logger);
        if let Some(code) = sink.last() {
            debug!(logger, "'{}' prepared ({} bytes)", script, code.len());
        }
        injected
    } else {
        inject(script, lookup_dir, &mut WriterSink::stdout(), &logger)
    };

    if injected {
        0
    } else {
        1
    }
}

fn inject(
    script: &str,
    lookup_dir: &str,
    sink: &mut dyn ExecutionSink,
    logger: &Arc<Logger>,
) -> bool {
    phantom_script::inject(script, lookup_dir, sink, Arc::clone(logger))
}

fn print_usage(logger: &Logger, status: i32) -> i32 {
    match usage::show_usage(&mut io::stdout(), logger) {
        Ok(()) => status,
        Err(e) => {
            print_error(&e);
            1
        }
    }
}
