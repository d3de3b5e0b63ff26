//! Copy the contents of a text field through the document copy command.

use web_sys::{HtmlDocument, HtmlInputElement};

use crate::error::DomError;

/// Select the whole field and run `execCommand('copy')`.
///
/// The command works inside iframes where the async clipboard API is blocked.
pub fn copy_input(document: &HtmlDocument, input: &HtmlInputElement) -> Result<(), DomError> {
    input.select();
    input
        .set_selection_range(0, 99_999)
        .map_err(|e| DomError::js("setSelectionRange", e))?;
    let copied = document
        .exec_command("copy")
        .map_err(|e| DomError::js("execCommand('copy')", e))?;
    if copied {
        Ok(())
    } else {
        Err(DomError::CopyRejected)
    }
}
