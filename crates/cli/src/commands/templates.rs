//! `setupctl templates`

use anyhow::Result;

use crate::config::Config;
use crate::output;

pub fn execute(config: &Config, json: bool) -> Result<()> {
    let table = config.templates()?;
    output::print_template_list(table.entries(), json);
    Ok(())
}
