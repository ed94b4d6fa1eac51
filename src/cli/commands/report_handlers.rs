use crate::cli::ui::{Table, TableColumn, TableRenderer};
use crate::cli::{output, ShellContext};
use crate::core::services::SummaryService;
use crate::ledger::Transaction;
use crate::storage;

use super::CommandResult;

pub(super) fn show_balance(context: &mut ShellContext) -> CommandResult {
    let ledger = context.manager.ledger();
    output::section("Balance");
    output::info(format!(
        "Current balance: {}",
        context.format_amount(ledger.balance())
    ));
    output::info(format!("Transactions recorded: {}", ledger.len()));
    Ok(())
}

pub(super) fn full_report(context: &mut ShellContext) -> CommandResult {
    let ledger = context.manager.ledger();
    let totals = SummaryService::totals(ledger.transactions());

    output::section("Report");
    output::info(format!("Total income:  {}", context.format_amount(totals.income)));
    output::info(format!("Total expense: {}", context.format_amount(totals.expense)));
    output::info(format!("Net:           {}", context.format_amount(totals.net)));
    output::info(format!("Balance:       {}", context.format_amount(ledger.balance())));

    if ledger.is_empty() {
        output::warning("No transactions yet.");
        return Ok(());
    }
    let rows = ledger
        .transactions()
        .iter()
        .enumerate()
        .map(|(position, txn)| (position + 1, txn));
    render_transactions(context, "All transactions", rows);
    Ok(())
}

pub(super) fn note_summary(context: &mut ShellContext) -> CommandResult {
    let groups = SummaryService::group_by_note(context.manager.ledger().transactions());
    output::section("Summary per note");
    if groups.is_empty() {
        output::warning("No transactions yet.");
        return Ok(());
    }

    let mut table = Table::new(
        None::<String>,
        vec![
            TableColumn::new("Note", 20),
            TableColumn::right("Income", 16),
            TableColumn::right("Expense", 16),
            TableColumn::right("Net", 16),
        ],
    );
    for group in &groups {
        table.add_row(vec![
            group.note.clone(),
            context.format_amount(group.income),
            context.format_amount(group.expense),
            context.format_amount(group.net()),
        ]);
    }
    TableRenderer::render(&table);
    Ok(())
}

pub(super) fn search(context: &mut ShellContext) -> CommandResult {
    let keyword = context
        .prompter
        .text("Keyword (type, note, time or amount)")?;
    if keyword.trim().is_empty() {
        output::warning("Enter a keyword to search for.");
        return Ok(());
    }

    let matches = SummaryService::search(context.manager.ledger().transactions(), &keyword);
    if matches.is_empty() {
        output::info(format!("No transactions match `{}`.", keyword.trim()));
        return Ok(());
    }
    let title = format!("{} match(es) for `{}`", matches.len(), keyword.trim());
    render_transactions(context, &title, matches);
    Ok(())
}

pub(super) fn recent(context: &mut ShellContext) -> CommandResult {
    let count = context.config.recent_count;
    let rows = SummaryService::recent(context.manager.ledger().transactions(), count);
    if rows.is_empty() {
        output::warning("No transactions yet.");
        return Ok(());
    }
    let title = format!("Last {} transaction(s)", rows.len());
    render_transactions(context, &title, rows);
    Ok(())
}

pub(super) fn export_csv(context: &mut ShellContext) -> CommandResult {
    let path = context.export_path();
    let written = storage::export_csv(context.manager.ledger().transactions(), &path)?;
    output::success(format!(
        "Exported {written} transaction(s) to {}.",
        path.display()
    ));
    Ok(())
}

/// Prints numbered transactions as a table.
pub(super) fn render_transactions<'a>(
    context: &ShellContext,
    title: &str,
    rows: impl IntoIterator<Item = (usize, &'a Transaction)>,
) {
    let mut table = Table::new(
        Some(title),
        vec![
            TableColumn::right("No", 4),
            TableColumn::new("Type", 11),
            TableColumn::right("Amount", 16),
            TableColumn::new("Note", 20),
            TableColumn::new("Time", 20),
        ],
    );
    for (position, txn) in rows {
        table.add_row(vec![
            position.to_string(),
            txn.kind.to_string(),
            context.format_amount(txn.amount),
            txn.note.clone(),
            txn.timestamp.clone(),
        ]);
    }
    TableRenderer::render(&table);
}
