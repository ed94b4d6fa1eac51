use colored::Colorize;

use crate::cli::output;

/// Entries of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddIncome,
    AddExpense,
    ViewBalance,
    FullReport,
    NoteSummary,
    Search,
    EditTransaction,
    DeleteTransaction,
    ClearAll,
    Recent,
    ExportCsv,
    Exit,
}

impl MenuItem {
    /// Display order of the menu.
    pub const ALL: [MenuItem; 12] = [
        MenuItem::AddIncome,
        MenuItem::AddExpense,
        MenuItem::ViewBalance,
        MenuItem::FullReport,
        MenuItem::NoteSummary,
        MenuItem::Search,
        MenuItem::EditTransaction,
        MenuItem::DeleteTransaction,
        MenuItem::ClearAll,
        MenuItem::Recent,
        MenuItem::ExportCsv,
        MenuItem::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuItem::AddIncome => 1,
            MenuItem::AddExpense => 2,
            MenuItem::ViewBalance => 3,
            MenuItem::FullReport => 4,
            MenuItem::NoteSummary => 5,
            MenuItem::Search => 6,
            MenuItem::EditTransaction => 7,
            MenuItem::DeleteTransaction => 8,
            MenuItem::ClearAll => 9,
            MenuItem::Recent => 10,
            MenuItem::ExportCsv => 11,
            MenuItem::Exit => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::AddIncome => "Add income",
            MenuItem::AddExpense => "Add expense",
            MenuItem::ViewBalance => "View balance",
            MenuItem::FullReport => "Report (totals & list)",
            MenuItem::NoteSummary => "Summary per note",
            MenuItem::Search => "Search transactions",
            MenuItem::EditTransaction => "Edit transaction",
            MenuItem::DeleteTransaction => "Delete transaction",
            MenuItem::ClearAll => "Clear all data",
            MenuItem::Recent => "Recent transactions",
            MenuItem::ExportCsv => "Export to CSV",
            MenuItem::Exit => "Exit",
        }
    }

    /// Maps the user's typed choice to a menu entry.
    pub fn from_choice(choice: &str) -> Option<MenuItem> {
        let number: u8 = choice.trim().parse().ok()?;
        Self::ALL.into_iter().find(|item| item.number() == number)
    }
}

pub fn render() {
    output::section("Pocket Ledger");
    for item in MenuItem::ALL {
        let number = format!("{:>2}.", item.number());
        let number = match item {
            MenuItem::AddIncome | MenuItem::Search => number.bright_green(),
            MenuItem::AddExpense | MenuItem::DeleteTransaction => number.bright_red(),
            MenuItem::ClearAll | MenuItem::Exit | MenuItem::EditTransaction => {
                number.bright_yellow()
            }
            _ => number.bright_blue(),
        };
        output::line(format!("{} {}", number, item.label()));
    }
}
