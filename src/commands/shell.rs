//! `algoviz shell` command - interactive session over stdin
//!
//! Keeps one session alive so the tree and the array persist between
//! commands. Each line is one command; errors are reported and the loop
//! continues. Type `help` for the command list.

use std::io::{self, BufRead, IsTerminal, Write};

use serde_json::json;
use tracing::debug;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_json_status};
use crate::commands::sort::format::values_line;
use crate::commands::{bst, nodes, path, sort};
use algoviz_core::bst::TraversalOrder;
use algoviz_core::error::{Result, VizError};
use algoviz_core::graph::Algorithm;
use algoviz_core::session::{parse_integer, Session};

const HELP: &str = "\
Commands:
  insert <v> [v...]          insert values into the tree
  sample <1-3>               insert a preset tree
  search <v>                 search the tree
  traverse <order>           inorder, preorder or postorder
  tree                       show the tree layout
  clear                      empty the tree
  nodes                      list campus locations
  path [bfs|dijkstra] <a> -> <b>
                             find a route between two locations
  array                      show the array
  sort [trace]               quicksort the array
  resize <n>                 new random array of n elements
  reset                      new random array
  help                       show this help
  quit                       leave the shell";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Insert(Vec<String>),
    Sample(usize),
    Search(String),
    Traverse(TraversalOrder),
    Tree,
    Clear,
    Nodes,
    Path {
        algorithm: Algorithm,
        start: String,
        destination: String,
    },
    Array,
    Sort { trace: bool },
    Resize(usize),
    Reset,
    Help,
    Quit,
}

/// Parse one input line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "insert" | "add" => {
            if rest.is_empty() {
                algoviz_core::bail_usage!("please enter a value");
            }
            ShellCommand::Insert(rest.split_whitespace().map(str::to_string).collect())
        }
        "sample" => ShellCommand::Sample(parse_count(rest, "sample number")?),
        "search" | "find" => ShellCommand::Search(rest.to_string()),
        "traverse" | "walk" => ShellCommand::Traverse(if rest.is_empty() {
            TraversalOrder::default()
        } else {
            rest.parse()?
        }),
        "tree" | "show" => ShellCommand::Tree,
        "clear" => ShellCommand::Clear,
        "nodes" => ShellCommand::Nodes,
        "path" => parse_path(rest)?,
        "array" => ShellCommand::Array,
        "sort" => ShellCommand::Sort {
            trace: rest.eq_ignore_ascii_case("trace"),
        },
        "resize" => ShellCommand::Resize(parse_count(rest, "array size")?),
        "reset" => ShellCommand::Reset,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => {
            return Err(VizError::UsageError(format!(
                "unknown command '{}' (try 'help')",
                other
            )))
        }
    };
    Ok(Some(command))
}

fn parse_count(raw: &str, context: &str) -> Result<usize> {
    let value = parse_integer(raw, context)?;
    usize::try_from(value).map_err(|_| VizError::invalid_value(context, value))
}

fn parse_path(rest: &str) -> Result<ShellCommand> {
    let (algorithm, rest) = match rest.split_once(char::is_whitespace) {
        Some((word, tail)) => match word.parse::<Algorithm>() {
            Ok(algorithm) => (algorithm, tail.trim()),
            Err(_) => (Algorithm::default(), rest),
        },
        None => (Algorithm::default(), rest),
    };

    let (start, destination) = rest.split_once("->").unwrap_or((rest, ""));
    Ok(ShellCommand::Path {
        algorithm,
        start: start.trim().to_string(),
        destination: destination.trim().to_string(),
    })
}

/// Execute the shell command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let mut session = ctx.session()?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if ctx.animated() {
        sort::install_cancel_handler(session.sort().cancel_handle());
    }
    if interactive && !ctx.cli.quiet {
        println!("algoviz shell - type 'help' for commands");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("algoviz> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let outcome = parse_line(&line).and_then(|parsed| match parsed {
            Some(ShellCommand::Quit) => Ok(false),
            Some(command) => apply(ctx, &mut session, command).map(|()| true),
            None => Ok(true),
        });

        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                debug!(error = %e, line = %line, "shell_command_failed");
                if ctx.json() {
                    eprintln!("{}", e.to_json());
                } else {
                    eprintln!("error: {}", e);
                }
            }
        }
    }
    Ok(())
}

/// Run one parsed command against the session
pub fn apply(ctx: &CommandContext, session: &mut Session, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::Insert(raws) => {
            let inserted = bst::insert_values(ctx, session, &raws)?;
            if ctx.json() {
                print_json_status("inserted", None, &[("inserted", json!(inserted))])?;
            }
        }
        ShellCommand::Sample(number) => {
            let inserted = bst::insert_sample(ctx, session, number)?;
            if ctx.json() {
                print_json_status("inserted", None, &[("inserted", json!(inserted))])?;
            }
        }
        ShellCommand::Search(raw) => bst::search(ctx, session, &raw)?,
        ShellCommand::Traverse(order) if ctx.json() => print_json(&json!({
            "order": order,
            "values": session.tree().values(order),
        }))?,
        ShellCommand::Traverse(order) => bst::traverse(ctx, session, order),
        ShellCommand::Tree if ctx.json() => print_json(&session.tree().layout())?,
        ShellCommand::Tree => bst::show_tree(session),
        ShellCommand::Clear => {
            session.clear_tree();
            report(ctx, "cleared", "BST cleared!", session)?;
        }
        ShellCommand::Nodes => nodes::show(ctx, session.graph())?,
        ShellCommand::Path {
            algorithm,
            start,
            destination,
        } => path::run(ctx, session, &start, &destination, algorithm)?,
        ShellCommand::Array => show_array(ctx, session)?,
        ShellCommand::Sort { trace } => sort::run(ctx, session, trace)?,
        ShellCommand::Resize(size) => {
            session.resize_array(size)?;
            show_array(ctx, session)?;
        }
        ShellCommand::Reset => {
            session.reset_array();
            report(ctx, "reset", "Array reset!", session)?;
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn report(ctx: &CommandContext, status: &str, message: &str, session: &Session) -> Result<()> {
    if ctx.json() {
        print_json_status(
            status,
            Some(message),
            &[
                ("tree_size", json!(session.tree().len())),
                ("array", json!(session.sort().values())),
            ],
        )
    } else {
        println!("{}", message);
        Ok(())
    }
}

fn show_array(ctx: &CommandContext, session: &Session) -> Result<()> {
    let values = session.sort().values();
    if ctx.json() {
        return print_json(&json!({ "array": values }));
    }
    println!("Array: {}", values_line(values));
    Ok(())
}
