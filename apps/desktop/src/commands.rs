use thiserror::Error;

pub const HELP: &str = "\
commands:
  search <text>   filter the list by title or genre (empty shows everything)
  add             add a movie
  edit <row>      edit the movie on that row
  delete <row>    delete the movie on that row
  refresh         reload the list from the API
  help            show this text
  quit            exit
answer '.' to cancel a prompt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Add,
    /// One-based row number in the current view.
    Edit(usize),
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs a row number")]
    MissingRow(&'static str),
    #[error("'{0}' is not a row number")]
    BadRow(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" | "/" => Command::Search(rest.to_string()),
        "add" | "a" => Command::Add,
        "edit" | "e" => Command::Edit(row(rest, "edit")?),
        "delete" | "d" | "rm" => Command::Delete(row(rest, "delete")?),
        "refresh" | "r" => Command::Refresh,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn row(arg: &str, verb: &'static str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingRow(verb));
    }
    match arg.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(CommandError::BadRow(arg.to_string())),
    }
}
