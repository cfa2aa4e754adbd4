//! Line-oriented interactive front end over [`RecipeBrowser`].

use std::io::Write;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::browser::RecipeBrowser;
use crate::render::{render, render_filters};

const HELP: &str = "\
Commands:
  search [term]     set the search term and search
  term <text>       set the search term without searching
  category [name]   filter by category (empty clears the filter)
  area [name]       filter by area (empty clears the filter)
  open <id|#n>      show a recipe by id or by list position
  close             close the recipe panel
  filters           list categories and areas
  help              show this help
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeRef {
    Id(String),
    /// 1-based position in the current result list
    Position(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Term(String),
    Category(String),
    Area(String),
    Open(RecipeRef),
    Close,
    Filters,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "term" => ShellCommand::Term(rest.to_string()),
        "category" | "c" => ShellCommand::Category(rest.to_string()),
        "area" | "a" => ShellCommand::Area(rest.to_string()),
        "open" | "o" => ShellCommand::Open(parse_recipe_ref(rest)?),
        "close" => ShellCommand::Close,
        "filters" => ShellCommand::Filters,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };

    Ok(Some(command))
}

fn parse_recipe_ref(arg: &str) -> Result<RecipeRef, String> {
    if arg.is_empty() {
        return Err("open needs a recipe id or #position".to_string());
    }
    match arg.strip_prefix('#') {
        Some(position) => position
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .map(RecipeRef::Position)
            .ok_or_else(|| format!("'{}' is not a list position", arg)),
        None => Ok(RecipeRef::Id(arg.to_string())),
    }
}

/// Read commands from `input` until EOF or `quit`, re-rendering after each.
pub async fn run_shell<R, W>(
    browser: &mut RecipeBrowser,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    browser.load_filters().await;
    render(browser.view(), out)?;
    writeln!(out, "Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };
        debug!("Shell command: {:?}", command);

        match command {
            ShellCommand::Search(term) => {
                browser.set_search_term(term);
                browser.submit_search().await;
            }
            ShellCommand::Term(term) => browser.set_search_term(term),
            ShellCommand::Category(name) => browser.set_category(name).await,
            ShellCommand::Area(name) => browser.set_area(name).await,
            ShellCommand::Open(RecipeRef::Id(id)) => browser.select_recipe(id).await,
            ShellCommand::Open(RecipeRef::Position(n)) => {
                let id = browser.view().recipes.get(n - 1).map(|r| r.id.clone());
                match id {
                    Some(id) => browser.select_recipe(id).await,
                    None => {
                        writeln!(out, "No recipe at position {}", n)?;
                        continue;
                    }
                }
            }
            ShellCommand::Close => browser.dismiss_detail(),
            ShellCommand::Filters => {
                let view = browser.view();
                render_filters(&view.categories, &view.areas, out)?;
                continue;
            }
            ShellCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            ShellCommand::Quit => break,
        }

        render(browser.view(), out)?;
    }

    Ok(())
}
