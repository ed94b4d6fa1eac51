use crate::cli::{output, CliError, LoopControl, ShellContext};

use super::CommandResult;

/// Literal the user must type before all data is wiped.
const CLEAR_CONFIRMATION: &str = "DELETE";

pub(super) fn clear_all(context: &mut ShellContext) -> CommandResult {
    output::warning("This removes every transaction and resets the balance to zero.");
    let answer = context
        .prompter
        .text(&format!("Type {CLEAR_CONFIRMATION} to confirm"))?;
    if answer.trim() != CLEAR_CONFIRMATION {
        output::info("Nothing was deleted.");
        return Ok(());
    }

    context.manager.clear_all();
    output::success("All data cleared.");
    context.report_save_status();
    Ok(())
}

pub(super) fn exit(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    if context.prompter.confirm("Exit Pocket Ledger?")? {
        output::info("Goodbye!");
        Ok(LoopControl::Exit)
    } else {
        Ok(LoopControl::Continue)
    }
}
