use std::process;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use stepline::styling::{ColorChoice, failure, important, link, success, symbols};
use stepline::{
    Confirmation, ConsoleOptions, OutputLevel, PrompterOptions, debugln, errorln, global, infoln,
};

/// Walks through a simulated installation to show steps and prompts.
#[derive(Parser)]
#[command(name = "stepline-demo", version)]
struct Cli {
    /// Show debug output
    #[arg(long)]
    debug: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Never prompt; answer every question with its default
    #[arg(short, long)]
    yes: bool,

    /// Make the installation step fail
    #[arg(long)]
    fail: bool,

    /// Log internal diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let colors = ColorChoice::from(cli.color);
    let mut console = ConsoleOptions::from_env().colors(colors);
    if cli.debug {
        console = console.debug(true);
    }
    global::configure(console);

    let mut prompter = PrompterOptions::from_env().colors(colors);
    if cli.yes {
        prompter = prompter.interactive(false);
    }
    global::configure_prompter(prompter);

    let out_colors = global::colors(OutputLevel::Info);
    let err_colors = global::colors(OutputLevel::Error);

    if let Err(err) = install(cli.fail) {
        errorln!(global::console(), failure(format!("{err:#}"), err_colors));
        infoln!(
            global::console(),
            failure(symbols::CROSS_MARK, out_colors),
            "Installation failed"
        );
        process::exit(1);
    }

    infoln!(
        global::console(),
        success(symbols::CHECK_MARK, out_colors),
        important("Installation successful", out_colors)
    );
}

fn install(fail: bool) -> anyhow::Result<()> {
    let out_colors = global::colors(OutputLevel::Info);
    let err_colors = global::colors(OutputLevel::Error);

    infoln!(
        global::console(),
        "Looking for remote database on",
        link("172.187.10.23", out_colors)
    );

    global::start_step("Accessing database");
    global::start_step("Checking database integrity");

    global::start_step("Synchronizing local store");
    infoln!(
        global::console(),
        "Local store up to date with remote database"
    );
    global::end_step();

    errorln!(
        global::console(),
        failure("Database connection lost", err_colors)
    );

    global::start_step("Connecting to fallback database");
    debugln!(global::console(), "Fallback selected from", 3, "candidates");
    global::end_step();

    debugln!(
        global::console(),
        "Dashboard deployed at",
        link("https://172.187.10.23:37356/dashboard", out_colors)
    );

    let proceed = global::confirm(
        Confirmation::new("Install with current database?")
            .choices(["Y", "n"])
            .default(true),
    )
    .context("Unexpected user input")?;

    global::start_step("Installation in progress");

    if !proceed || fail {
        return Err(global::fail_step_with(
            "unable to install without a database",
        ));
    }

    infoln!(global::console(), "Installing with current database");
    infoln!(global::console(), "Connection to 172.187.10.23 secure");
    infoln!(global::console(), "Found", 36, "dependency requirements");
    infoln!(global::console(), "Dependencies resolved");
    global::end_step();

    Ok(())
}
