//! Shell command implementations organized by page.
//!
//! [`execute`] splits a line into a command word and its arguments and hands it to
//! the matching handler. Handlers answer user mistakes with a `❌` reply rather than
//! an error; `Err` is reserved for failures the shopper cannot fix.

/// Cart panel commands
pub mod cart;
/// Catalog browsing and search commands
pub mod catalog;
/// Contact page command
pub mod contact;
/// Help and other utility commands
pub mod general;

use super::ShellData;
use crate::errors::Result;

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text
    Text(String),
    /// Print nothing (blank input)
    Silent,
    /// End the session
    Quit,
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Parses and runs one command line.
///
/// # Errors
/// Returns an error if a handler fails for a reason other than bad input.
pub async fn execute(data: &mut ShellData, line: &str) -> Result<Reply> {
    let line = line.trim();
    let (command, args) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, args)| (command, args.trim()));

    let reply = match command.to_lowercase().as_str() {
        "" => return Ok(Reply::Silent),
        "quit" | "exit" => return Ok(Reply::Quit),
        "help" => general::help(),
        "list" => catalog::list(data, args),
        "top" => catalog::top(data),
        "trendy" => catalog::trendy(data),
        "categories" => catalog::categories(data),
        "category" => catalog::category(data, args),
        "show" => catalog::show(data, args),
        "search" => catalog::search(data, args).await,
        "add" => cart::add(data, args)?,
        "remove" => cart::remove(data, args),
        "qty" => cart::set_quantity(data, args)?,
        "inc" => cart::increment(data, args)?,
        "dec" => cart::decrement(data, args),
        "cart" => cart::view(data),
        "clear" => cart::clear(data),
        "contact" => contact::submit(data, args)?,
        other => format!("❌ Unknown command '{other}'. Type `help` for a list of commands."),
    };

    Ok(reply.into())
}

/// Parses a product id argument, or explains what is wrong with it.
pub(crate) fn parse_id(arg: Option<&str>) -> std::result::Result<i64, String> {
    let Some(arg) = arg else {
        return Err("❌ Missing product id.".to_string());
    };
    arg.parse()
        .map_err(|_| format!("❌ '{arg}' is not a valid product id."))
}

/// Parses a quantity argument, or explains what is wrong with it.
pub(crate) fn parse_quantity(arg: &str) -> std::result::Result<u32, String> {
    arg.parse()
        .map_err(|_| format!("❌ '{arg}' is not a valid quantity."))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::StoreSettings, test_utils::seeded_catalog};
    use std::sync::Arc;

    fn session() -> ShellData {
        ShellData::new(StoreSettings::default(), Arc::new(seeded_catalog()))
    }

    #[tokio::test]
    async fn test_execute_control_replies() -> Result<()> {
        let mut data = session();
        assert_eq!(execute(&mut data, "   ").await?, Reply::Silent);
        assert_eq!(execute(&mut data, "QUIT").await?, Reply::Quit);

        let Reply::Text(text) = execute(&mut data, "water 3").await? else {
            panic!("expected text reply");
        };
        assert!(text.starts_with("❌ Unknown command 'water'"));
        Ok(())
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_id(Some("12")), Ok(12));
        assert!(parse_id(None).unwrap_err().contains("Missing"));
        assert!(parse_id(Some("twelve")).unwrap_err().contains("'twelve'"));
        assert_eq!(parse_quantity("3"), Ok(3));
        assert!(parse_quantity("-1").is_err());
    }
}
