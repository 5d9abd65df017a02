//! Command-line front end
//!
//! Each subcommand drives a [`FormSession`] the same way the terminal UI does,
//! so validation and save semantics are identical.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::data::{GenderFlag, Record, RecordStore};
use crate::form::{FormSession, SaveOutcome, TextField};

/// Employee record form
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about = "Employee record form", long_about = None)]
pub struct Cli {
    /// Data directory (default: ~/.roster)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Run a single command instead of the interactive form
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print saved records
    List(ListArgs),
    /// Save a new record
    Add(AddArgs),
    /// Edit the first saved record with the given name
    Edit(EditArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the stored JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_parser = parse_employee_id)]
    pub employee_id: Option<String>,
    /// New York, London or Tokyo
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub male: bool,
    #[arg(long)]
    pub female: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Name of the record to edit
    pub target: String,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_parser = parse_employee_id)]
    pub employee_id: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    /// Tick the Male checkbox
    #[arg(long, overrides_with = "no_male")]
    pub male: bool,
    /// Untick the Male checkbox
    #[arg(long, overrides_with = "male")]
    pub no_male: bool,
    /// Tick the Female checkbox
    #[arg(long, overrides_with = "no_female")]
    pub female: bool,
    /// Untick the Female checkbox
    #[arg(long, overrides_with = "female")]
    pub no_female: bool,
}

impl EditArgs {
    /// Requested state of a gender checkbox, `None` to leave it as stored
    fn wanted(&self, flag: GenderFlag) -> Option<bool> {
        let (on, off) = match flag {
            GenderFlag::Male => (self.male, self.no_male),
            GenderFlag::Female => (self.female, self.no_female),
        };
        match (on, off) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Employee IDs are numeric-only input
fn parse_employee_id(value: &str) -> Result<String, String> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err("employee ID must contain digits only".to_string())
    }
}

/// Run one subcommand against the configured store
pub fn run(command: Command, config: &Config, out: &mut impl Write) -> Result<()> {
    let mut store = config.open_store();

    match command {
        Command::List(args) => list(&store, args, out),
        Command::Add(args) => add(&mut store, args, out),
        Command::Edit(args) => edit(&mut store, args, out),
    }
}

fn list(store: &RecordStore, args: ListArgs, out: &mut impl Write) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(store.all())?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    if store.is_empty() {
        writeln!(out, "No saved records")?;
    }
    for record in store.all() {
        writeln!(out, "{}", summary_line(record))?;
    }
    Ok(())
}

fn add(store: &mut RecordStore, args: AddArgs, out: &mut impl Write) -> Result<()> {
    let mut session = FormSession::new();

    if let Some(name) = args.name {
        session.update_field(TextField::Name, name);
    }
    if let Some(employee_id) = args.employee_id {
        session.update_field(TextField::EmployeeId, employee_id);
    }
    if let Some(city) = args.city {
        session.update_field(TextField::City, city);
    }
    if args.male {
        session.toggle_gender(GenderFlag::Male);
    }
    if args.female {
        session.toggle_gender(GenderFlag::Female);
    }

    save(&mut session, store, out)
}

fn edit(store: &mut RecordStore, args: EditArgs, out: &mut impl Write) -> Result<()> {
    let mut session = FormSession::new();
    if !session.begin_edit(store, &args.target) {
        bail!("no saved record named '{}'", args.target);
    }

    for flag in [GenderFlag::Male, GenderFlag::Female] {
        if let Some(wanted) = args.wanted(flag) {
            if session.draft().gender.is_set(flag) != wanted {
                session.toggle_gender(flag);
            }
        }
    }
    if let Some(name) = args.name {
        session.update_field(TextField::Name, name);
    }
    if let Some(employee_id) = args.employee_id {
        session.update_field(TextField::EmployeeId, employee_id);
    }
    if let Some(city) = args.city {
        session.update_field(TextField::City, city);
    }

    save(&mut session, store, out)
}

fn save(session: &mut FormSession, store: &mut RecordStore, out: &mut impl Write) -> Result<()> {
    let outcome = session
        .save(store)
        .context("record saved in memory but could not be written to storage")?;

    match outcome {
        SaveOutcome::Invalid => {
            let messages: Vec<String> = session
                .errors()
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect();
            bail!("record not saved\n{}", messages.join("\n"));
        }
        SaveOutcome::Created(id) | SaveOutcome::Updated(id) => {
            let verb = if matches!(outcome, SaveOutcome::Created(_)) {
                "Saved"
            } else {
                "Updated"
            };
            let record = store.get(id).context("saved record missing from store")?;
            writeln!(out, "{verb}: {}", summary_line(record))?;
        }
        SaveOutcome::Unmatched(_) => {
            bail!("the record being edited no longer exists");
        }
    }
    Ok(())
}

/// One-line description used by the list views
pub fn summary_line(record: &Record) -> String {
    format!(
        "Name: {}, Employee ID: {}, City: {}, Gender: {}",
        record.name,
        record.employee_id,
        record.city,
        record.gender.summary()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::City;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> Config {
        Config::default().with_data_dir(dir.to_path_buf())
    }

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["roster"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command.unwrap()
    }

    #[test]
    fn test_add_then_list() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut out = Vec::new();

        let add = parse(&[
            "add", "--name", "Alice", "--employee-id", "42", "--city", "Tokyo", "--female",
        ]);
        run(add, &config, &mut out).unwrap();
        run(parse(&["list"]), &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Saved: Name: Alice, Employee ID: 42, City: Tokyo, Gender: Female"));
        assert!(text.ends_with("Name: Alice, Employee ID: 42, City: Tokyo, Gender: Female\n"));
    }

    #[test]
    fn test_add_reports_every_missing_field() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut out = Vec::new();

        let err = run(parse(&["add", "--name", "Alice"]), &config, &mut out).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("employeeId: Please enter your Employee ID."));
        assert!(message.contains("city: Please select your city."));
        assert!(message.contains("gender: Please select your gender."));
        assert!(!message.contains("name: Please enter your name."));
        assert!(config.open_store().is_empty());
    }

    #[test]
    fn test_edit_changes_record_in_place() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut out = Vec::new();

        run(
            parse(&["add", "--name", "Alice", "--employee-id", "42", "--city", "Tokyo", "--female"]),
            &config,
            &mut out,
        )
        .unwrap();
        run(
            parse(&["edit", "Alice", "--city", "London", "--male", "--no-female"]),
            &config,
            &mut out,
        )
        .unwrap();

        let store = config.open_store();
        assert_eq!(store.len(), 1);
        let record = &store.all()[0];
        assert_eq!(record.city, City::London);
        assert!(record.gender.male && !record.gender.female);
    }

    #[test]
    fn test_edit_gender_flags_last_one_wins() {
        let Command::Edit(args) = parse(&["edit", "Alice", "--no-male", "--male", "--female"]) else {
            panic!("expected edit command");
        };
        assert_eq!(args.wanted(GenderFlag::Male), Some(true));
        assert_eq!(args.wanted(GenderFlag::Female), Some(true));

        let Command::Edit(args) = parse(&["edit", "Alice", "--female", "--no-female"]) else {
            panic!("expected edit command");
        };
        assert_eq!(args.wanted(GenderFlag::Male), None);
        assert_eq!(args.wanted(GenderFlag::Female), Some(false));
    }

    #[test]
    fn test_edit_can_untick_gender() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut out = Vec::new();

        run(
            parse(&["add", "--name", "Bob", "--employee-id", "7", "--city", "London", "--male", "--female"]),
            &config,
            &mut out,
        )
        .unwrap();
        run(parse(&["edit", "Bob", "--no-male"]), &config, &mut out).unwrap();

        let store = config.open_store();
        let record = &store.all()[0];
        assert!(!record.gender.male && record.gender.female);

        let err = run(parse(&["edit", "Bob", "--no-female"]), &config, &mut out).unwrap_err();
        assert!(err.to_string().contains("gender: Please select your gender."));
        assert!(config.open_store().all()[0].gender.female);
    }

    #[test]
    fn test_edit_unknown_name_fails() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut out = Vec::new();
        let err = run(parse(&["edit", "Nobody"]), &config, &mut out).unwrap_err();
        assert!(err.to_string().contains("Nobody"));
    }

    #[test]
    fn test_employee_id_must_be_digits() {
        let result = Cli::try_parse_from(["roster", "add", "--employee-id", "4x2"]);
        assert!(result.is_err());
    }
}
