//! Interactive shell for a personal book library.
//!
//! # Responsibility
//! - Own one library session from start to exit.
//! - Read one command per line, dispatch it into the core and print the
//!   outcome.
//!
//! # Invariants
//! - No command failure ends the session; only `exit`, CTRL-C or CTRL-D do.

mod commands;
mod render;

use anyhow::{Context, Result};
use bookshelf_core::{
    core_version, init_logging, BookRepository, Genre, LibraryAction, LibraryConfig,
    LibraryService,
};
use clap::{CommandFactory, Parser};
use commands::{parse_line, ShellCli, ShellCommand};
use log::info;
use render::render_response;
use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};
use std::path::{Path, PathBuf};

const PROMPT: &str = ">> ";
const EMPTY_LIBRARY_MESSAGE: &str = "Your library is empty. Add some books first!";

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(version, about = "Personal library catalog shell")]
struct CliArgs {
    /// File used by `save` and `load` when no file is given.
    #[arg(long, value_name = "FILE")]
    pub library_file: Option<PathBuf>,

    /// trace, debug, info, warn or error.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, value_parser = parse_path)]
    pub log_dir: Option<PathBuf>,

    /// Loads the library file before the first prompt.
    #[arg(long)]
    pub load: bool,
}

enum CommandExecutionResult {
    Continue(String),
    Exit,
}

fn resolve_config(args: &CliArgs) -> Result<LibraryConfig> {
    let mut config = LibraryConfig::from_env().context("invalid BOOKSHELF_* environment")?;
    if let Some(path) = &args.library_file {
        config = config.with_library_path(path);
    }
    if let Some(level) = &args.log_level {
        config = config.with_log_level(level)?;
    }
    if let Some(dir) = &args.log_dir {
        config = config.with_log_dir(dir);
    }
    if let Some(dir) = config.log_dir.clone().filter(|dir| dir.is_relative()) {
        config = config.with_log_dir(std::env::current_dir()?.join(dir));
    }
    Ok(config)
}

fn execute_line<R: BookRepository>(
    line: &str,
    session: &mut LibraryService<R>,
    default_file: &Path,
) -> CommandExecutionResult {
    let command = match parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return CommandExecutionResult::Continue(String::new()),
        Err(err) => return CommandExecutionResult::Continue(err.to_string()),
    };

    let output = match command {
        ShellCommand::Exit => return CommandExecutionResult::Exit,
        ShellCommand::Titles => render_titles(&session.titles()),
        ShellCommand::Genres => render_genres(),
        command => match command.into_action(default_file) {
            Some(action) => {
                let detailed = matches!(action, LibraryAction::List { .. });
                render_response(&session.dispatch(action), detailed)
            }
            None => String::new(),
        },
    };
    CommandExecutionResult::Continue(output)
}

fn render_titles(titles: &[String]) -> String {
    if titles.is_empty() {
        return format!("[info] {EMPTY_LIBRARY_MESSAGE}\n");
    }
    titles.iter().map(|title| format!("  - {title}\n")).collect()
}

fn render_genres() -> String {
    Genre::ALL
        .iter()
        .map(|genre| format!("  - {genre}\n"))
        .collect()
}

#[derive(rustyline_derive::Hinter)]
struct ShellHelper {
    commands_names: Vec<String>,
}

impl ShellHelper {
    fn new() -> Self {
        let commands_names = ShellCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        ShellHelper { commands_names }
    }
}

impl Completer for ShellHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::new()));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .cloned()
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = resolve_config(&args)?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir).context("could not start logging")?;
    }

    let mut session = LibraryService::in_memory();
    info!("event=session_start module=cli status=ok");

    println!(
        "Bookshelf {} (library file: {})",
        core_version(),
        config.library_path.display()
    );
    if args.load {
        let response = session.dispatch(LibraryAction::Load {
            path: config.library_path.clone(),
        });
        print!("{}", render_response(&response, false));
    }
    ShellCli::command().print_long_help()?;

    let editor_config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl = Editor::<ShellHelper, FileHistory>::with_config(editor_config)?;
    rl.set_helper(Some(ShellHelper::new()));

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match execute_line(&line, &mut session, &config.library_path) {
                    CommandExecutionResult::Continue(output) => print!("{output}"),
                    CommandExecutionResult::Exit => break,
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }

    info!(
        "event=session_end module=cli status=ok books={}",
        session.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{execute_line, CommandExecutionResult};
    use bookshelf_core::{InMemoryBookRepository, LibraryService};
    use std::path::Path;

    fn run(line: &str, session: &mut LibraryService<InMemoryBookRepository>) -> String {
        match execute_line(line, session, Path::new("library.json")) {
            CommandExecutionResult::Continue(output) => output,
            CommandExecutionResult::Exit => panic!("unexpected exit for `{line}`"),
        }
    }

    #[test]
    fn session_survives_bad_input_and_tracks_books() {
        let mut session = LibraryService::in_memory();

        assert!(run("frobnicate", &mut session).contains("frobnicate"));
        assert!(run("add", &mut session).starts_with("[warn] Please fill in all required fields"));
        assert_eq!(
            run(r#"add "Dune" "Frank Herbert" 1965 -g "Science Fiction""#, &mut session),
            "[ok] Book 'Dune' added successfully!\n"
        );
        assert_eq!(run("titles", &mut session), "  - Dune\n");
        assert!(run("remove Emma", &mut session).starts_with("[warn]"));
        assert!(run("remove DUNE", &mut session).starts_with("[ok]"));
        assert!(run("titles", &mut session).contains("Your library is empty"));
    }

    #[test]
    fn unknown_genre_is_reported_as_a_warning() {
        let mut session = LibraryService::in_memory();

        assert_eq!(
            run("add Dune Herbert 1965 --genre poetry", &mut session),
            "[warn] Unknown genre 'poetry'.\n"
        );
        assert!(session.is_empty());
        assert!(run("add Dune Herbert 1965 -g science-fiction", &mut session).starts_with("[ok]"));
    }

    #[test]
    fn padded_title_is_removed_like_it_was_added() {
        let mut session = LibraryService::in_memory();

        run(r#"add " Dune " Herbert 1965"#, &mut session);
        assert_eq!(session.titles(), vec!["Dune"]);
        assert_eq!(
            run(r#"remove " Dune ""#, &mut session),
            "[ok] Book ' Dune ' removed successfully!\n"
        );
        assert!(session.is_empty());
    }

    #[test]
    fn exit_ends_the_session() {
        let mut session = LibraryService::in_memory();
        assert!(matches!(
            execute_line("exit", &mut session, Path::new("library.json")),
            CommandExecutionResult::Exit
        ));
    }

    #[test]
    fn genres_lists_every_genre() {
        let mut session = LibraryService::in_memory();
        let output = run("genres", &mut session);
        assert_eq!(output.lines().count(), 22);
        assert!(output.contains("  - Artificial Intelligence\n"));
    }
}
