use super::prompt::{ask_required, Prompter, StationPrompt, TermPrompter};
use super::render::print_messages;
use super::setup::Cli;
use clap::Parser;
use cocorahs::api::CocorahsApi;
use cocorahs::commands::report::{self, ReportRequest};
use cocorahs::config::{locate_config, Settings, CONFIG_ENV_VAR};
use cocorahs::error::{CocorahsError, Result};
use cocorahs::model::{parse_observation_time, Credentials, Precipitation};
use cocorahs::transport::http::HttpTransport;
use log::debug;
use std::process::ExitCode;

/// Everything gathered before the first request goes out.
#[derive(Debug)]
struct Inputs {
    report: ReportRequest,
    credentials: Credentials,
    api_url: Option<String>,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_file = locate_config(cli.config.clone(), std::env::var_os(CONFIG_ENV_VAR));
    let defaults = match &config_file {
        Some(config) => {
            debug!("reading defaults from {}", config.path.display());
            config.load()?
        }
        None => Default::default(),
    };
    let settings = Settings::from_process_env(defaults);

    let mut prompter = TermPrompter::new();
    let inputs = resolve_inputs(cli, &settings, &mut prompter)?;

    let transport = match &inputs.api_url {
        Some(url) => HttpTransport::with_base_url(url)?,
        None => HttpTransport::new()?,
    };
    let api = CocorahsApi::new(transport, inputs.credentials);

    let mut picker = StationPrompt::new(&mut prompter);
    let result = report::run(&api, inputs.report, &mut picker)?;
    debug!("station {}: {:?}", result.station, result.outcome);
    print_messages(&result.messages);

    Ok(if result.is_created() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "cocorahs=debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Fills every input from flags, environment, config file and prompts, in
/// that order. The amount is checked first so nothing is asked for when it
/// is unusable.
fn resolve_inputs<P: Prompter + ?Sized>(
    cli: Cli,
    settings: &Settings,
    prompter: &mut P,
) -> Result<Inputs> {
    let precipitation = match cli.precipitation {
        Some(amount) => amount,
        None => settings
            .value("precipitation", None)
            .ok_or(CocorahsError::Missing("precipitation amount"))?
            .parse::<Precipitation>()?,
    };

    let observed_at = match cli.observed_at {
        Some(at) => Some(at),
        None => settings
            .value("observed_at", None)
            .map(|v| parse_observation_time(&v))
            .transpose()?,
    };

    let station = settings.resolve("station", cli.station).map(|r| {
        debug!("station {} from {}", r.value, r.source);
        r.value
    });

    let username = match settings.resolve("username", cli.username) {
        Some(r) => {
            debug!("username from {}", r.source);
            r.value
        }
        None => ask_required(prompter, "Username", false)?,
    };
    let password = match settings.resolve("password", cli.password) {
        Some(r) => {
            debug!("password from {}", r.source);
            r.value
        }
        None => ask_required(prompter, "Password", true)?,
    };

    Ok(Inputs {
        report: ReportRequest {
            station,
            precipitation,
            observed_at,
        },
        credentials: Credentials::new(username, password),
        api_url: settings.value("api_url", cli.api_url),
    })
}
