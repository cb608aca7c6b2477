/// Top-level actions offered by the dispatcher, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Report,
    Sort,
    Filter,
    Monthly,
    Exit,
    ShowByType,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Delete,
        MenuChoice::Report,
        MenuChoice::Sort,
        MenuChoice::Filter,
        MenuChoice::Monthly,
        MenuChoice::Exit,
        MenuChoice::ShowByType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Transaction",
            MenuChoice::View => "View Transactions",
            MenuChoice::Delete => "Delete Transaction",
            MenuChoice::Report => "Generate Report",
            MenuChoice::Sort => "Sort Transactions",
            MenuChoice::Filter => "Filter Transactions (removes other types)",
            MenuChoice::Monthly => "Monthly Report",
            MenuChoice::Exit => "Exit",
            MenuChoice::ShowByType => "Show Transactions by Type",
        }
    }

    /// Accepts the menu number or a keyword.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(number) = raw.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| Self::ALL.get(idx))
                .copied();
        }
        match raw.to_ascii_lowercase().as_str() {
            "add" => Some(MenuChoice::Add),
            "view" | "list" => Some(MenuChoice::View),
            "delete" | "remove" => Some(MenuChoice::Delete),
            "report" => Some(MenuChoice::Report),
            "sort" => Some(MenuChoice::Sort),
            "filter" => Some(MenuChoice::Filter),
            "monthly" => Some(MenuChoice::Monthly),
            "exit" | "quit" => Some(MenuChoice::Exit),
            "show" => Some(MenuChoice::ShowByType),
            _ => None,
        }
    }
}
