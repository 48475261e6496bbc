// UI layer: the interactive alias-creation flow, using `dialoguer` for
// prompts and `indicatif` for a spinner while the request runs.

use std::time::Duration;

use anyhow::Result;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::LinkClient;

/// Prompt for an alias and target URL, echo the pair back, and create the
/// redirect after confirmation.
///
/// The confirm defaults to yes: pressing enter proceeds, only an explicit
/// "n" aborts without sending anything.
pub fn create_redirect_flow(api: &LinkClient) -> Result<()> {
    let alias: String = Input::new().with_prompt("Alias").interact_text()?;
    let url: String = Input::new().with_prompt("Target URL").interact_text()?;

    println!("{} -> {}", alias, url);
    let confirmed = Confirm::new()
        .with_prompt("Create this redirect?")
        .default(true)
        .interact()?;
    if !confirmed {
        println!("Aborted, nothing sent.");
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Creating redirect...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = api.create_redirect(&alias, &url);
    spinner.finish_and_clear();

    let (status, body) = result?;
    println!("{}: {}", status, body);
    Ok(())
}
