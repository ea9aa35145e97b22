//! Interactive menu loop
//!
//! One state (the menu) and seven transitions. Each choice performs a single
//! awaited round-trip against the repository before the next prompt. Input
//! validation failures are reported locally without touching the repository;
//! query failures are printed and the loop continues on the same session.

use std::io::{self, Write};

use chrono::NaiveDate;
use domain_students::{NewStudent, StudentRepository};
use uuid::Uuid;

use crate::config::LIST_LIMIT;
use crate::format::render_record;

/// The closed set of menu transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Insert,
    GetById,
    GetByRoll,
    UpdateEmail,
    Delete,
    List,
    Exit,
}

impl MenuCommand {
    /// Parse raw menu input; `None` means the choice is not recognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" => Some(Self::Insert),
            "2" => Some(Self::GetById),
            "3" => Some(Self::GetByRoll),
            "4" => Some(Self::UpdateEmail),
            "5" => Some(Self::Delete),
            "6" => Some(Self::List),
            "7" | "exit" | "quit" | "q" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
Student Record Management - Cassandra
Choose an option:
  1) Insert student
  2) Get student by UUID
  3) Get student by roll (filter scan)
  4) Update student email
  5) Delete student
  6) List students
  7) Exit";

/// Run the menu loop until the user exits or stdin closes.
pub async fn run(repository: &dyn StudentRepository) -> io::Result<()> {
    loop {
        println!("\n{MENU}\n");
        let Some(choice) = prompt("Enter choice: ")? else {
            break;
        };
        let Some(command) = MenuCommand::parse(&choice) else {
            println!("Invalid choice.");
            continue;
        };
        if command == MenuCommand::Exit {
            println!("Exiting.");
            break;
        }
        dispatch(command, repository).await?;
    }
    Ok(())
}

async fn dispatch(command: MenuCommand, repository: &dyn StudentRepository) -> io::Result<()> {
    match command {
        MenuCommand::Insert => insert(repository).await,
        MenuCommand::GetById => get_by_id(repository).await,
        MenuCommand::GetByRoll => get_by_roll(repository).await,
        MenuCommand::UpdateEmail => update_email(repository).await,
        MenuCommand::Delete => delete(repository).await,
        MenuCommand::List => list(repository).await,
        MenuCommand::Exit => Ok(()),
    }
}

async fn insert(repository: &dyn StudentRepository) -> io::Result<()> {
    let Some(student_roll) = prompt("Roll: ")? else {
        return Ok(());
    };
    let Some(first_name) = prompt("First name: ")? else {
        return Ok(());
    };
    let Some(last_name) = prompt("Last name: ")? else {
        return Ok(());
    };
    let Some(email) = prompt("Email: ")? else {
        return Ok(());
    };
    let Some(dob_raw) = prompt("DOB (YYYY-MM-DD) or blank: ")? else {
        return Ok(());
    };
    let dob = if dob_raw.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(&dob_raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                println!("Invalid date format.");
                return Ok(());
            }
        }
    };
    let Some(course) = prompt("Course: ")? else {
        return Ok(());
    };
    let Some(year_raw) = prompt("Year (int) or blank: ")? else {
        return Ok(());
    };
    let year = if year_raw.is_empty() {
        None
    } else {
        match year_raw.parse::<i32>() {
            Ok(year) => Some(year),
            Err(_) => {
                println!("Invalid year.");
                return Ok(());
            }
        }
    };

    let new = NewStudent {
        student_roll,
        first_name,
        last_name,
        email,
        dob,
        course,
        year,
    };
    match repository.insert(new).await {
        Ok(id) => println!("Inserted student with UUID: {id}"),
        Err(e) => println!("Operation failed: {e}"),
    }
    Ok(())
}

async fn get_by_id(repository: &dyn StudentRepository) -> io::Result<()> {
    let Some(id) = read_uuid("Student UUID: ")? else {
        return Ok(());
    };
    match repository.get_by_id(id).await {
        Ok(Some(record)) => println!("{}", render_record(&record)),
        Ok(None) => println!("No record found."),
        Err(e) => println!("Operation failed: {e}"),
    }
    Ok(())
}

async fn get_by_roll(repository: &dyn StudentRepository) -> io::Result<()> {
    let Some(roll) = prompt("Student roll: ")? else {
        return Ok(());
    };
    match repository.get_by_roll(&roll).await {
        Ok(Some(record)) => println!("{}", render_record(&record)),
        Ok(None) => println!("No record found."),
        Err(e) => println!("Operation failed: {e}"),
    }
    Ok(())
}

async fn update_email(repository: &dyn StudentRepository) -> io::Result<()> {
    let Some(id) = read_uuid("Student UUID: ")? else {
        return Ok(());
    };
    let Some(new_email) = prompt("New Email: ")? else {
        return Ok(());
    };
    match repository.update_email(id, &new_email).await {
        Ok(()) => println!("Updated email."),
        Err(e) => println!("Operation failed: {e}"),
    }
    Ok(())
}

async fn delete(repository: &dyn StudentRepository) -> io::Result<()> {
    let Some(id) = read_uuid("Student UUID: ")? else {
        return Ok(());
    };
    match repository.delete_by_id(id).await {
        Ok(()) => println!("Deleted (if existed)."),
        Err(e) => println!("Operation failed: {e}"),
    }
    Ok(())
}

async fn list(repository: &dyn StudentRepository) -> io::Result<()> {
    match repository.list(LIST_LIMIT).await {
        Ok(records) => {
            for record in &records {
                println!("------------------------------");
                println!("{}", render_record(record));
            }
            println!("Total shown: {}", records.len());
        }
        Err(e) => println!("Operation failed: {e}"),
    }
    Ok(())
}

/// Print a prompt and read one trimmed line. `None` means stdin closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a UUID; reports a malformed value and returns `None` so the
/// caller abandons the operation without touching the repository.
fn read_uuid(label: &str) -> io::Result<Option<Uuid>> {
    let Some(raw) = prompt(label)? else {
        return Ok(None);
    };
    match Uuid::parse_str(&raw) {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("Invalid UUID format.");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_choices() {
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::Insert));
        assert_eq!(MenuCommand::parse("2"), Some(MenuCommand::GetById));
        assert_eq!(MenuCommand::parse("3"), Some(MenuCommand::GetByRoll));
        assert_eq!(MenuCommand::parse("4"), Some(MenuCommand::UpdateEmail));
        assert_eq!(MenuCommand::parse("5"), Some(MenuCommand::Delete));
        assert_eq!(MenuCommand::parse("6"), Some(MenuCommand::List));
        assert_eq!(MenuCommand::parse("7"), Some(MenuCommand::Exit));
    }

    #[test]
    fn test_parse_exit_synonyms() {
        assert_eq!(MenuCommand::parse("exit"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("quit"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("q"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("EXIT"), Some(MenuCommand::Exit));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuCommand::parse("  1 \n"), Some(MenuCommand::Insert));
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert_eq!(MenuCommand::parse("8"), None);
        assert_eq!(MenuCommand::parse("insert"), None);
        assert_eq!(MenuCommand::parse(""), None);
    }
}
