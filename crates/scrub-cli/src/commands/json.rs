use anyhow::Result;
use scrub_engine::Scrubber;
use serde_json::Value;

use super::read_stdin_string;

pub fn handle(scrubber: &Scrubber, all: bool, pretty: bool) -> Result<()> {
    let input = read_stdin_string()?;
    let document: Value = serde_json::from_str(&input)?;

    let scrubbed = match &document {
        Value::Object(map) if all => Value::Object(scrubber.scrub_dict(map, true)),
        other => scrubber.scrub_value(other),
    };

    let output = if pretty {
        serde_json::to_string_pretty(&scrubbed)?
    } else {
        serde_json::to_string(&scrubbed)?
    };
    println!("{}", output);

    Ok(())
}
