//! The request sequence: one fixed question, one answer.

use std::io::Write;

use tracing::warn;

use crate::config::Config;
use crate::{Error, LLMProvider, LLMRequest, Prompt};

/// Build the single request sent on every run.
pub fn build_request(config: &Config) -> LLMRequest {
    LLMRequest::from_prompt(config.model.clone(), &Prompt::recursion_question())
}

/// Ask the fixed question through `provider` and write the answer to `out`.
///
/// In debug mode the raw response body is written on its own line first. A
/// `null` answer prints as `None`. No answer line is written when the request
/// fails or the response has no choices.
pub async fn run<W>(config: &Config, provider: &dyn LLMProvider, out: &mut W) -> Result<(), Error>
where
    W: Write + ?Sized,
{
    let request = build_request(config);
    let completion = provider.complete(&request).await?;

    if config.debug {
        writeln!(out, "{}", completion.raw)?;
    }

    match completion.first_content()? {
        Some(content) => writeln!(out, "{content}")?,
        None => {
            warn!(id = %completion.id, "first choice has no content");
            writeln!(out, "None")?;
        }
    }
    out.flush()?;

    Ok(())
}
