//! Menu commands and their option tables.
//!
//! Each menu is a closed enum paired with a static table mapping the option
//! key typed by the user to a variant. Unknown keys map to `None` and the
//! caller decides how to report them.

/// Main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Edit,
    Delete,
    Search,
    ShowAll,
    DeleteAll,
    Exit,
}

impl MenuCommand {
    /// Options in display order. The option key is the 1-based position.
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::Search,
        Self::ShowAll,
        Self::DeleteAll,
        Self::Exit,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add series",
            Self::Edit => "Edit series",
            Self::Delete => "Delete series",
            Self::Search => "Search info",
            Self::ShowAll => "Show all series",
            Self::DeleteAll => "Delete all series",
            Self::Exit => "Exit program",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        option_from_key(&Self::ALL, key)
    }

    /// Full menu text, header included.
    #[must_use]
    pub fn render() -> String {
        render_menu("HOME MENU", Self::ALL.map(Self::label).as_slice())
    }
}

/// Search sub-menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCommand {
    AboveRating,
    BelowRating,
    Seen,
    NotSeen,
    Back,
}

impl SearchCommand {
    pub const ALL: [Self; 5] = [
        Self::AboveRating,
        Self::BelowRating,
        Self::Seen,
        Self::NotSeen,
        Self::Back,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AboveRating => "Search above rating",
            Self::BelowRating => "Search below rating",
            Self::Seen => "Search seen",
            Self::NotSeen => "Search not seen",
            Self::Back => "Back to menu",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        option_from_key(&Self::ALL, key)
    }

    #[must_use]
    pub fn render() -> String {
        render_menu("SEARCH MENU", Self::ALL.map(Self::label).as_slice())
    }
}

// Keys are matched exactly, so " 1" or "01" are unknown options.
fn option_from_key<T: Copy>(options: &[T], key: &str) -> Option<T> {
    options
        .iter()
        .enumerate()
        .find(|(i, _)| (i + 1).to_string() == key)
        .map(|(_, option)| *option)
}

fn render_menu(title: &str, labels: &[&str]) -> String {
    let mut out = format!(
        "\n--------------- {title} ---------------\nWhat do you want to do? (1-{}):\n\n",
        labels.len()
    );
    for (i, label) in labels.iter().enumerate() {
        out.push_str(&format!("\t{}. {label}\n", i + 1));
    }
    out
}
