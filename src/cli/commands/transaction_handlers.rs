use crate::cli::{output, CliError, ShellContext};
use crate::currency::parse_positive_amount;
use crate::errors::LedgerError;
use crate::ledger::Transaction;

use super::report_handlers::render_transactions;
use super::CommandResult;

pub(super) fn add_income(context: &mut ShellContext) -> CommandResult {
    let raw = context
        .prompter
        .text("Income amount (Rp, dots and commas allowed)")?;
    let amount = parse_positive_amount(&raw)?;
    let note = context.prompter.text("Note (optional)")?;

    let added = context.manager.add_income(amount, &note)?;
    output::success(format!(
        "Income of {} recorded ({}).",
        context.format_amount(added.amount),
        added.note
    ));
    print_balance_line(context);
    context.report_save_status();
    Ok(())
}

pub(super) fn add_expense(context: &mut ShellContext) -> CommandResult {
    let raw = context
        .prompter
        .text("Expense amount (Rp, dots and commas allowed)")?;
    let amount = parse_positive_amount(&raw)?;
    context.manager.ledger().check_expense(amount)?;
    let note = context.prompter.text("Note (optional)")?;

    let added = context.manager.add_expense(amount, &note)?;
    output::success(format!(
        "Expense of {} recorded ({}).",
        context.format_amount(added.amount),
        added.note
    ));
    print_balance_line(context);
    context.report_save_status();
    Ok(())
}

pub(super) fn edit_transaction(context: &mut ShellContext) -> CommandResult {
    if context.manager.ledger().is_empty() {
        output::warning("There are no transactions to edit.");
        return Ok(());
    }
    list_all(context, "Transactions");
    let Some(index) = prompt_index(context, "Transaction number to edit (0 to cancel)")? else {
        output::info("Edit cancelled.");
        return Ok(());
    };
    let current = lookup(context, index)?;
    output::info(format!(
        "Editing #{index}: {} | {} | {}",
        current.kind,
        context.format_amount(current.amount),
        current.note
    ));

    let raw_amount = context
        .prompter
        .text("New amount (Enter to keep current)")?;
    let new_amount = match raw_amount.trim() {
        "" => None,
        raw => Some(parse_positive_amount(raw)?),
    };
    let raw_note = context.prompter.text("New note (Enter to keep current)")?;
    let new_note = Some(raw_note.trim()).filter(|note| !note.is_empty());

    if new_amount.is_none() && new_note.is_none() {
        output::info("Nothing changed.");
        return Ok(());
    }
    let edited = context
        .manager
        .edit_transaction(index, new_amount, new_note)?;
    output::success(format!(
        "Transaction #{index} updated: {} | {}.",
        context.format_amount(edited.amount),
        edited.note
    ));
    print_balance_line(context);
    context.report_save_status();
    Ok(())
}

pub(super) fn delete_transaction(context: &mut ShellContext) -> CommandResult {
    if context.manager.ledger().is_empty() {
        output::warning("There are no transactions to delete.");
        return Ok(());
    }
    list_all(context, "Transactions");
    let Some(index) = prompt_index(context, "Transaction number to delete (0 to cancel)")? else {
        output::info("Delete cancelled.");
        return Ok(());
    };
    let target = lookup(context, index)?;
    output::warning(format!(
        "About to delete: {} | {} | {}",
        target.kind,
        context.format_amount(target.amount),
        target.note
    ));
    if !context.prompter.confirm("Are you sure?")? {
        output::info("Delete cancelled.");
        return Ok(());
    }

    context.manager.delete_transaction(index)?;
    output::success(format!("Transaction #{index} deleted."));
    print_balance_line(context);
    context.report_save_status();
    Ok(())
}

fn list_all(context: &ShellContext, title: &str) {
    let ledger = context.manager.ledger();
    let rows = ledger
        .transactions()
        .iter()
        .enumerate()
        .map(|(position, txn)| (position + 1, txn));
    render_transactions(context, title, rows);
}

/// Reads a 1-based transaction number; `None` means the user cancelled.
fn prompt_index(context: &mut ShellContext, prompt: &str) -> Result<Option<usize>, CliError> {
    let raw = context.prompter.text(prompt)?;
    let index: usize = raw
        .trim()
        .parse()
        .map_err(|_| CliError::Input(format!("`{}` is not a transaction number", raw.trim())))?;
    Ok(Some(index).filter(|index| *index != 0))
}

fn lookup(context: &ShellContext, index: usize) -> Result<Transaction, LedgerError> {
    let ledger = context.manager.ledger();
    ledger
        .transaction(index)
        .cloned()
        .ok_or(LedgerError::IndexOutOfRange {
            index,
            len: ledger.len(),
        })
}

fn print_balance_line(context: &ShellContext) {
    let ledger = context.manager.ledger();
    output::info(format!(
        "Balance now: {}",
        context.format_amount(ledger.balance())
    ));
    if ledger.is_overdrawn() {
        output::warning("Balance is below zero: recorded expenses exceed income.");
    }
}
