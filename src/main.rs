use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use refoodify_probe::cli::Cli;
use refoodify_probe::config::Credentials;
use refoodify_probe::core::checks;
use refoodify_probe::core::probe::{
    IsahcProbeClient, ProbeContext, ProbeHttpClient, ProbeRunner, Reporter,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let reporter = Reporter::new(!cli.no_color);

    let mut runner = ProbeRunner::new(checks::registry());

    if cli.list {
        for name in runner.probe_names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    if let Some(needle) = &cli.only {
        runner.retain_matching(needle);
        if runner.is_empty() {
            reporter.error(&format!("no probe name matches '{needle}'"));
            return ExitCode::from(1);
        }
    }

    let credentials = match Credentials::resolve(cli.secrets_file.as_deref()) {
        Ok(credentials) => credentials,
        Err(err) => {
            reporter.error(&err.to_string());
            return ExitCode::from(1);
        }
    };

    let client: Arc<dyn ProbeHttpClient> = match IsahcProbeClient::new() {
        Ok(client) => Arc::new(client),
        Err(err) => {
            reporter.error(&err.to_string());
            return ExitCode::from(1);
        }
    };

    let ctx = ProbeContext {
        credentials,
        client,
        reporter,
        timeout: Duration::from_secs(cli.timeout_secs),
    };

    let summary = runner.run(&ctx).await;
    ExitCode::from(summary.exit_code() as u8)
}
