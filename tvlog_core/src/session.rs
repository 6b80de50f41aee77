//! Interactive session driving the menus.
//!
//! A `Session` owns the store for one run and hands it to each menu handler.
//! All user mistakes are handled here by asking again; only console failures
//! leave a handler.

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::validate::{parse_rating, validate_fields};
use crate::{
    Console, ConsoleError, DisplayConfig, MenuCommand, RawFields, RecordId, SearchCommand,
    SearchFilter, SeriesDraft, SeriesStore,
};

const SELECT_OPTION: &str = "Select option: ";

/// One run of the series tracker.
pub struct Session<R, W> {
    store: SeriesStore,
    console: Console<R, W>,
    display: DisplayConfig,
    menu_end: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(console: Console<R, W>, display: DisplayConfig) -> Self {
        Self {
            store: SeriesStore::new(),
            console,
            display,
            menu_end: false,
        }
    }

    /// Start from an existing store instead of an empty one.
    #[must_use]
    pub fn with_store(mut self, store: SeriesStore) -> Self {
        self.store = store;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &SeriesStore {
        &self.store
    }

    /// Tear the session down into its store and output sink.
    pub fn into_parts(self) -> (SeriesStore, W) {
        (self.store, self.console.into_output())
    }

    /// Run the main menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        info!("Session started");

        while !self.menu_end {
            match self.menu_step() {
                Ok(()) => {}
                Err(ConsoleError::Closed) => {
                    warn!("Input closed, ending session");
                    self.menu_end = true;
                }
                Err(e) => return Err(e),
            }
        }

        self.console.say("\nProgram finished.")?;
        info!("Session finished with {} series", self.store.len());
        Ok(())
    }

    fn menu_step(&mut self) -> Result<(), ConsoleError> {
        self.console.write(&MenuCommand::render())?;
        let option = self.console.prompt(SELECT_OPTION)?;

        match MenuCommand::from_key(&option) {
            Some(command) => self.dispatch(command),
            None => self.option_not_found(&option),
        }
    }

    /// Run the handler for a main menu command.
    pub fn dispatch(&mut self, command: MenuCommand) -> Result<(), ConsoleError> {
        debug!("Dispatching {command:?}");
        match command {
            MenuCommand::Add => self.add_series(),
            MenuCommand::Edit => self.edit_series(),
            MenuCommand::Delete => self.delete_series(),
            MenuCommand::Search => self.search_info(),
            MenuCommand::ShowAll => self.show_all_series(),
            MenuCommand::DeleteAll => self.delete_all_series(),
            MenuCommand::Exit => self.exit_program(),
        }
    }

    fn add_series(&mut self) -> Result<(), ConsoleError> {
        self.console.say("Adding a new series...")?;
        let draft = self.read_series_info()?;

        let text = match self.store.add(draft) {
            Ok(record) => format!(
                "Series information stored: {}",
                self.display.render_record(record)
            ),
            Err(e) => e.to_string(),
        };
        self.console.say(&text)
    }

    fn edit_series(&mut self) -> Result<(), ConsoleError> {
        if !self.has_series()? {
            return Ok(());
        }
        self.console.say("Editing series...")?;
        self.show_all_series()?;

        let id = self.read_existing_id("edit")?;
        self.console
            .say("Please introduce the new series information:")?;
        let draft = self.read_series_info()?;

        let text = match self.store.replace(id, draft) {
            Ok(record) => format!(
                "Series updated with the following data: {}",
                self.display.render_record(record)
            ),
            Err(e) => e.to_string(),
        };
        self.console.say(&text)
    }

    fn delete_series(&mut self) -> Result<(), ConsoleError> {
        if !self.has_series()? {
            return Ok(());
        }
        self.console.say("Deleting series...")?;
        self.show_all_series()?;

        let id = self.read_existing_id("delete")?;
        let text = match self.store.remove(id) {
            Ok(_) => format!("Series with id \"{id}\" has been deleted."),
            Err(e) => e.to_string(),
        };
        self.console.say(&text)
    }

    fn search_info(&mut self) -> Result<(), ConsoleError> {
        if !self.has_series()? {
            return Ok(());
        }
        self.console.say("Searching series...")?;

        loop {
            self.console.write(&SearchCommand::render())?;
            let option = self.console.prompt(SELECT_OPTION)?;

            let filter = match SearchCommand::from_key(&option) {
                Some(SearchCommand::AboveRating) => {
                    self.console.say("Searching above rating...")?;
                    SearchFilter::MinRating(self.read_rating_bound("Insert rating lower limit: ")?)
                }
                Some(SearchCommand::BelowRating) => {
                    self.console.say("Searching below rating...")?;
                    SearchFilter::MaxRating(self.read_rating_bound("Insert rating upper limit: ")?)
                }
                Some(SearchCommand::Seen) => {
                    self.console.say("Searching series seen...")?;
                    SearchFilter::Seen
                }
                Some(SearchCommand::NotSeen) => {
                    self.console.say("Searching series not seen...")?;
                    SearchFilter::NotSeen
                }
                Some(SearchCommand::Back) => {
                    self.console.say("Back to home menu...")?;
                    break;
                }
                None => {
                    self.option_not_found(&option)?;
                    continue;
                }
            };

            self.print_matches(filter)?;
        }

        self.console.say("Exiting search menu...")
    }

    fn show_all_series(&mut self) -> Result<(), ConsoleError> {
        if !self.has_series()? {
            return Ok(());
        }
        self.console.say("Showing all series...")?;

        let records: Vec<_> = self.store.records().iter().collect();
        let text = self.display.render_records(&records);
        self.console.say(&text)
    }

    fn delete_all_series(&mut self) -> Result<(), ConsoleError> {
        if !self.has_series()? {
            return Ok(());
        }
        self.console.say("Deleting all series records...")?;
        self.store.clear();
        self.console.say("All series have been deleted.")
    }

    fn exit_program(&mut self) -> Result<(), ConsoleError> {
        self.menu_end = true;
        self.console.say("Exiting program...")
    }

    /// Ask for all four fields until every one of them is valid.
    ///
    /// Any invalid answer restarts the whole sequence.
    fn read_series_info(&mut self) -> Result<SeriesDraft, ConsoleError> {
        loop {
            let raw = RawFields {
                title: self.console.prompt("Insert series title: ")?,
                episodes: self.console.prompt("Insert the number of episodes: ")?,
                seen: self.console.prompt("Have you seen it? (yes/no): ")?,
                rating: self.console.prompt("Insert your rating (0-10): ")?,
            };
            self.console.say("\n")?;

            match validate_fields(&raw, &self.store) {
                Ok(draft) => return Ok(draft),
                Err(errors) => {
                    for error in &errors {
                        debug!("Rejected series field: {error}");
                        self.console.say(&error.to_string())?;
                    }
                    self.console.say("\nPlease enter valid values.\n")?;
                }
            }
        }
    }

    /// Ask for an id until it is an integer naming a stored record.
    fn read_existing_id(&mut self, action: &str) -> Result<RecordId, ConsoleError> {
        let prompt = format!("Select the id series to {action}: ");
        loop {
            let answer = self.console.prompt(&prompt)?;
            let Ok(value) = answer.trim().parse::<i64>() else {
                debug!("Rejected id {answer:?}");
                self.console.say("Id must be an integer number.")?;
                continue;
            };

            let id = u64::try_from(value)
                .ok()
                .map(RecordId)
                .filter(|id| self.store.locate(*id).is_some());
            match id {
                Some(id) => return Ok(id),
                None => self.console.say(&format!("Id \"{value}\" was not found."))?,
            }
        }
    }

    fn read_rating_bound(&mut self, prompt: &str) -> Result<f64, ConsoleError> {
        loop {
            let answer = self.console.prompt(prompt)?;
            match parse_rating(&answer) {
                Ok(bound) => return Ok(bound),
                Err(error) => self.console.say(&error.to_string())?,
            }
        }
    }

    fn print_matches(&mut self, filter: SearchFilter) -> Result<(), ConsoleError> {
        let found = filter.apply(self.store.records());
        info!("Search {filter:?} matched {} series", found.len());

        let text = if found.is_empty() {
            "No results found.".to_string()
        } else {
            self.display.render_records(&found)
        };
        self.console.say(&text)
    }

    fn has_series(&mut self) -> Result<bool, ConsoleError> {
        if self.store.is_empty() {
            self.console.say("There are no series stored yet.")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn option_not_found(&mut self, option: &str) -> Result<(), ConsoleError> {
        debug!("Unknown option {option:?}");
        self.console.say("Please enter a valid option.")
    }
}
