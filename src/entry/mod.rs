mod commands;

use clap::Parser;

use crate::args::{CliArgs, Command};
use loadkit::config::load_config;
use loadkit::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let args = CliArgs::parse();

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let config = load_config(args.config.as_deref())?;
    let output = match &args.command {
        Command::Url(url_args) => commands::render_url(url_args, config.as_ref())?,
        Command::Payload(payload_args) => commands::render_payload(payload_args)?,
        Command::Headers(header_args) => commands::render_headers(header_args, config.as_ref())?,
        Command::Check(check_args) => {
            let report = commands::run_check(check_args, config.as_ref())?;
            println!("{}", report.rendered);
            return report.into_outcome();
        }
    };
    println!("{}", output);
    Ok(())
}
