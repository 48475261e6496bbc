// Flag surface and dispatch. The flags are mutually exclusive by dispatch
// order: the first recognized one wins and any others are ignored.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::api::LinkClient;
use crate::config;
use crate::format::format_redirects;
use crate::ui;

// `--version` reports the server's version, so clap's own version flag is
// disabled.
/// Command-line client for the link redirect service.
#[derive(Parser, Debug)]
#[command(name = "link-cli", disable_version_flag = true)]
pub struct Cli {
    /// Print the server version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Print the redirect listing as the server returns it
    #[arg(short = 'r', long = "redirects")]
    pub redirects: bool,

    /// Print the redirect listing as a table
    #[arg(short = 'f', long = "formatted")]
    pub formatted: bool,

    /// Create a new redirect interactively
    #[arg(short = 'n', long = "new")]
    pub new: bool,
}

/// Run the selected operation. Configuration is loaded once, one client is
/// built from it, and at most one request goes out before returning.
pub fn run(cli: Cli) -> Result<()> {
    let path = config::ensure_config()?;
    debug!(path = %path.display(), "using config");
    let config = config::load_config()?;
    let mut api = LinkClient::new(&config)?;

    if cli.version {
        println!("{}", api.version()?);
    } else if cli.redirects {
        println!("{}", api.redirects()?);
    } else if cli.formatted {
        println!("{}", format_redirects(&api.redirects()?)?);
    } else if cli.new {
        ui::create_redirect_flow(&api)?;
    } else {
        // No flag selected: show usage and exit cleanly.
        Cli::command().print_help()?;
    }
    Ok(())
}
