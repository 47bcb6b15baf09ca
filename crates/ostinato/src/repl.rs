//! REPL (Read-Eval-Print Loop) for Ostinato.
//!
//! Provides an interactive environment with:
//! - Command history (saved to ~/.ostinato_history)
//! - Syntax highlighting of λ punctuation
//! - Queries of the form `term` or `term :: constraint`

use anyhow::Result;
use ostinato_syntax::{lexer::Lexer, token::Kind};
use rustyline::{
    Context, Editor, Helper,
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
};
use std::{borrow::Cow, path::PathBuf};

/// REPL helper that provides token-level syntax highlighting.
struct OstinatoHelper;

impl OstinatoHelper {
    fn new() -> Self {
        Self
    }
}

impl Helper for OstinatoHelper {}

impl Completer for OstinatoHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        _line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // identifiers are free-form; nothing useful to complete
        Ok((pos, Vec::new()))
    }
}

impl Hinter for OstinatoHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for OstinatoHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        // Tokenize the line with the ostinato lexer
        let tokens: Vec<_> = Lexer::new(line).collect();

        // Build a colored version of the line
        let mut result = String::new();
        let mut last_end = 0;

        for token in tokens {
            let start = token.span.start;
            let end = token.span.end;

            // Add any whitespace/comment text between tokens
            if start > last_end {
                result.push_str(&line[last_end..start]);
            }

            let text = &line[start..end];
            let colored = match token.kind {
                Kind::Lambda | Kind::Dot | Kind::Arrow => {
                    format!("\x1b[35m{}\x1b[0m", text) // Magenta
                }
                Kind::Colon | Kind::ColonColon | Kind::Underscore => {
                    format!("\x1b[36m{}\x1b[0m", text) // Cyan
                }
                Kind::Error => {
                    format!("\x1b[31m{}\x1b[0m", text) // Red
                }
                _ => text.to_string(),
            };
            result.push_str(&colored);
            last_end = end;
        }

        // Add any remaining text
        if last_end < line.len() {
            result.push_str(&line[last_end..]);
        }

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Validator for OstinatoHelper {}

/// Start the Ostinato REPL with interactive readline support.
pub fn start_repl() -> Result<()> {
    println!("Ostinato REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a λ-term to infer its type, or `term :: constraint`.");
    println!("Press Ctrl+D or Ctrl+C to exit.");
    println!();

    let helper = OstinatoHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    // Load history
    let history_path = dirs::home_dir()
        .map(|mut p| {
            p.push(".ostinato_history");
            p
        })
        .unwrap_or_else(|| PathBuf::from(".ostinato_history"));

    if rl.load_history(&history_path).is_ok() {
        tracing::debug!(path = %history_path.display(), "loaded repl history");
    }

    // REPL loop
    loop {
        match rl.readline("ostinato> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match crate::run_query(line) {
                    Ok(output) => println!("{output}"),
                    Err(report) => eprintln!("{report:?}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }

    // Save history
    let _ = rl.save_history(&history_path);

    Ok(())
}
