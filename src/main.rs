//! Terminal front-end and entry point.
//!
//! This binary is a thin line-oriented shell around the Spotfinder library.
//! Each line read from stdin becomes an [`Event`]; the returned [`Action`]s
//! are carried out by printing. The map is a [`TerminalMap`] narrating its
//! marker and camera commands.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse arguments into a [`Config`], initialize tracing, open the store
//! 2. **Render**: Print the list once
//! 3. **Update**: Map each command to an event and delegate to the library
//!
//! # Arguments
//!
//! ```text
//! spotfinder [key=value ...]
//! spotfinder --config <file.toml>
//! ```
//!
//! # Commands
//!
//! - `type <text>`: Live search, as if typing into the search field
//! - `search <text>`: Search button (exact name first, then substring)
//! - `select <n>`: Pick row `n` of the list
//! - `add <name>`: Open the details form for a new location
//! - `edit <name>`: Open the details form for an existing location
//! - `save <name>|<address>|<lat>|<lng>`: Submit the details form
//! - `delete <name>`: Delete the location with this name
//! - `all`: Show every location on the map
//! - `list`: Re-read and print the list
//! - `help`, `quit`

#![allow(clippy::multiple_crate_versions)]

use spotfinder::app::{handle_event, Action, AppState, Event, FormInput};
use spotfinder::ui::{render_list, ListViewModel, TerminalMap};
use spotfinder::{initialize, observability, Config, Result, SpotfinderError};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Stdout, Write};
use std::process::ExitCode;

const HELP: &str = "\
commands:
  type <text>                          live search
  search <text>                        exact name, then substring
  select <n>                           pick row n of the list
  add <name>                           start adding a location
  edit <name>                          start editing a location
  save <name>|<address>|<lat>|<lng>    submit the details form
  delete <name>                        delete a location
  all                                  show every location on the map
  list                                 print the list
  help                                 show this help
  quit                                 exit";

/// What a line of input asks for.
enum Command {
    Event(Event),
    Help,
    Quit,
}

struct Shell {
    app: AppState<TerminalMap<Stdout>>,
}

impl Shell {
    fn load(config: &Config) -> Result<Self> {
        observability::init_tracing(config);
        tracing::info!(path = %config.database_path().display(), "starting spotfinder");

        let store = initialize(config)?;
        let app = AppState::new(store, TerminalMap::stdout())?;
        Ok(Self { app })
    }

    /// Handles one input line. Returns `false` when the shell should exit.
    fn update(&mut self, line: &str) -> bool {
        let command = match self.map_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return true,
            Err(message) => {
                println!("{message}");
                return true;
            }
        };

        let event = match command {
            Command::Event(event) => event,
            Command::Help => {
                println!("{HELP}");
                return true;
            }
            Command::Quit => return false,
        };

        match handle_event(&mut self.app, &event) {
            Ok(actions) => {
                for action in &actions {
                    self.execute_action(action);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "event handling failed");
                eprintln!("error: {e}");
            }
        }
        true
    }

    fn map_line(&self, line: &str) -> std::result::Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let event = match verb {
            "type" => Event::SearchTextChanged(rest.to_string()),
            "search" => Event::SearchSubmitted(rest.to_string()),
            "select" => {
                let location = rest
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| self.app.list_item(index))
                    .ok_or_else(|| format!("no row {rest:?}; use a number from the list"))?;
                Event::LocationSelected(location.clone())
            }
            "add" => Event::BeginAdd(rest.to_string()),
            "edit" => Event::BeginUpdate(rest.to_string()),
            "save" => Event::Save(Self::parse_form(rest)),
            "delete" => Event::Delete(rest.to_string()),
            "all" => Event::ShowAll,
            "list" => Event::Refresh,
            "help" | "?" => return Ok(Some(Command::Help)),
            "quit" | "exit" | "q" => return Ok(Some(Command::Quit)),
            other => return Err(format!("unknown command {other:?}; type `help`")),
        };

        Ok(Some(Command::Event(event)))
    }

    /// Splits `name|address|lat|lng`; unparsable coordinates become `None`.
    fn parse_form(rest: &str) -> FormInput {
        let mut fields = rest.split('|').map(str::trim);
        let mut next = || fields.next().unwrap_or_default().to_string();

        let name = next();
        let address = next();
        let latitude = next().parse().ok();
        let longitude = next().parse().ok();

        FormInput {
            name,
            address,
            latitude,
            longitude,
        }
    }

    fn execute_action(&self, action: &Action) {
        match action {
            Action::Notify(notice) => {
                if notice.is_failure() {
                    tracing::warn!(notice = %notice, "write failed");
                }
                println!("» {notice}");
            }
            Action::ShowDetails(None) => {
                println!("details: save <name>|<address>|<lat>|<lng>");
            }
            Action::ShowDetails(Some(location)) => {
                println!(
                    "details #{}: {}|{}|{:?}|{:?}",
                    location.id, location.name, location.address, location.latitude, location.longitude
                );
                println!("edit and submit with: save <name>|<address>|<lat>|<lng>");
            }
            Action::HideDetails => println!("details closed"),
            Action::ClearInputs => {}
            Action::FillSearchField(name) => println!("search: {name}"),
            Action::RenderList => self.render(),
        }
    }

    fn render(&self) {
        let vm = ListViewModel::from_locations(self.app.view.locations());
        let mut out = io::stdout().lock();
        if let Err(e) = render_list(&mut out, &vm).and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to render list");
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Config> {
    let mut pairs = BTreeMap::new();
    let mut config_file = None;

    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| SpotfinderError::Config("--config needs a file path".to_string()))?;
            config_file = Some(path);
        } else if let Some((key, value)) = arg.split_once('=') {
            pairs.insert(key.trim().to_string(), value.to_string());
        } else {
            return Err(SpotfinderError::Config(format!(
                "unexpected argument {arg:?}; expected key=value or --config <file>"
            )));
        }
    }

    match config_file {
        Some(_) if !pairs.is_empty() => Err(SpotfinderError::Config(
            "--config cannot be combined with key=value pairs".to_string(),
        )),
        Some(path) => Config::from_file(path),
        None => Ok(Config::from_map(&pairs)),
    }
}

fn main() -> ExitCode {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("spotfinder: {e}");
            return ExitCode::from(2);
        }
    };

    let mut shell = match Shell::load(&config) {
        Ok(shell) => shell,
        Err(e) => {
            tracing::error!(error = %e, "failed to open location store");
            eprintln!("spotfinder: {e}");
            return ExitCode::FAILURE;
        }
    };

    shell.render();
    println!("type `help` for commands");

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if !shell.update(&line) {
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read input");
                eprintln!("spotfinder: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::info!("spotfinder exiting");
    ExitCode::SUCCESS
}
