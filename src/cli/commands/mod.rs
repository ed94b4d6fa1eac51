//! Menu handlers. Each takes the session context and returns whether the
//! loop should continue; ledger errors bubble up to [`ShellContext::handle`].
//!
//! [`ShellContext::handle`]: crate::cli::ShellContext

mod report_handlers;
mod system;
mod transaction_handlers;

use crate::cli::menus::MenuItem;
use crate::cli::{CliError, LoopControl, ShellContext};

pub(crate) type CommandResult = Result<(), CliError>;

pub(crate) fn dispatch(
    context: &mut ShellContext,
    item: MenuItem,
) -> Result<LoopControl, CliError> {
    match item {
        MenuItem::AddIncome => transaction_handlers::add_income(context)?,
        MenuItem::AddExpense => transaction_handlers::add_expense(context)?,
        MenuItem::EditTransaction => transaction_handlers::edit_transaction(context)?,
        MenuItem::DeleteTransaction => transaction_handlers::delete_transaction(context)?,
        MenuItem::ViewBalance => report_handlers::show_balance(context)?,
        MenuItem::FullReport => report_handlers::full_report(context)?,
        MenuItem::NoteSummary => report_handlers::note_summary(context)?,
        MenuItem::Search => report_handlers::search(context)?,
        MenuItem::Recent => report_handlers::recent(context)?,
        MenuItem::ExportCsv => report_handlers::export_csv(context)?,
        MenuItem::ClearAll => system::clear_all(context)?,
        MenuItem::Exit => return system::exit(context),
    }
    Ok(LoopControl::Continue)
}
