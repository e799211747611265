use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wsupdate::backends::Session;
use wsupdate::config::Config;
use wsupdate::confirm::StdinConfirm;
use wsupdate::executor::RunMode;
use wsupdate::output::PresentationMode;
use wsupdate::pipeline;
use wsupdate::probe::SystemProbe;
use wsupdate::{Cli, RunContext};

fn main() -> ExitCode {
    // Diagnostics only, e.g. RUST_LOG=wsupdate=debug. Kept on stderr so they
    // never mix with the update log on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (config, notices) = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => (config, Vec::new()),
        Err(e) => (
            Config::default(),
            vec![format!("Ignoring configuration file: {e:#}")],
        ),
    };

    let logger = PresentationMode::from_flags(cli.plain || config.plain).logger();

    let mode = RunMode::from_flags(cli.brief || config.brief, cli.dryrun || config.dryrun);
    let executor = mode.executor();
    let probe = SystemProbe::from_env();
    let ctx = RunContext::from_sources(&cli, &config);

    tracing::debug!(?mode, ?ctx, arch_marker = %probe.arch_marker().display(), "Starting update");

    let session = Session::new(executor.as_ref(), logger.as_ref(), &probe);
    match pipeline::run_with_notices(&ctx, &session, &StdinConfirm, &notices) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{e}");
            ExitCode::FAILURE
        }
    }
}
