//! `algoviz bst` command - build, search and traverse a binary search tree
//!
//! - `algoviz bst 50 30 70` - insert values (1-100) in order
//! - `--sample N` - insert preset N (1-3) before the values
//! - `--search V` - trace a search for V
//! - `--traverse ORDER` - walk the finished tree

pub mod format;

use serde_json::json;

use crate::cli::BstArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::print_json;
use algoviz_core::bst::{TraversalOrder, TreeNode};
use algoviz_core::error::Result;
use algoviz_core::pacing::StepKind;
use algoviz_core::session::{Inserted, Session};

use self::format::{
    inserted_message, search_message, search_step_line, traversal_done, traversal_line,
    tree_lines,
};

/// Execute the bst command
pub fn execute(ctx: &CommandContext, args: &BstArgs) -> Result<()> {
    let mut session = ctx.session()?;

    let mut inserted = Vec::new();
    if let Some(number) = args.sample {
        inserted.extend(insert_sample(ctx, &mut session, number)?);
    }
    inserted.extend(insert_values(ctx, &mut session, &args.values)?);
    trace_command!(ctx.cli, ctx.start, "bst_build");

    if ctx.json() {
        return output_json(&session, &inserted, args);
    }

    show_tree(&session);
    if let Some(raw) = &args.search {
        search(ctx, &session, raw)?;
    }
    if let Some(order) = args.traverse {
        traverse(ctx, &session, order);
    }
    Ok(())
}

/// Insert a preset, pausing between inserts when animated
pub fn insert_sample(
    ctx: &CommandContext,
    session: &mut Session,
    number: usize,
) -> Result<Vec<Inserted>> {
    let mut pacer = ctx.pacer();
    session.insert_sample_with(number, |_, inserted| {
        if !ctx.json() && !ctx.cli.quiet {
            println!("{}", inserted_message(&inserted));
        }
        pacer.pause(StepKind::SampleInsert);
    })
}

/// Validate and insert raw values; nothing is inserted if any is rejected
pub fn insert_values(
    ctx: &CommandContext,
    session: &mut Session,
    raws: &[String],
) -> Result<Vec<Inserted>> {
    let inserted = session.insert_many(raws)?;
    if !ctx.json() && !ctx.cli.quiet {
        for entry in &inserted {
            println!("{}", inserted_message(entry));
        }
    }
    Ok(inserted)
}

pub fn show_tree(session: &Session) {
    let layout = session.tree().layout();
    for line in tree_lines(&layout, &session.config().tree) {
        println!("{}", line);
    }
}

/// Trace a search, replaying its steps when animated
pub fn search(ctx: &CommandContext, session: &Session, raw: &str) -> Result<()> {
    let outcome = session.search(raw)?;
    if ctx.json() {
        return print_json(&outcome);
    }

    if ctx.animated() || ctx.cli.verbose {
        ctx.pacer().replay(outcome.steps.iter().copied(), |step| {
            println!("{}", search_step_line(step))
        });
    }
    println!("{}", search_message(&outcome));
    Ok(())
}

/// Walk the tree, printing each node as it is visited when animated
pub fn traverse(ctx: &CommandContext, session: &Session, order: TraversalOrder) {
    let walk = session.traverse(order);

    if ctx.animated() {
        let mut visited = Vec::new();
        ctx.pacer().replay(walk, |node: &&TreeNode| {
            visited.push(node.value());
            println!("  visit {}", node.value());
        });
        println!("{}", traversal_line(order, &visited));
    } else {
        let values: Vec<i64> = walk.map(TreeNode::value).collect();
        println!("{}", traversal_line(order, &values));
    }

    if !ctx.cli.quiet {
        println!("{}", traversal_done(order));
    }
}

fn output_json(session: &Session, inserted: &[Inserted], args: &BstArgs) -> Result<()> {
    let tree = session.tree();
    let search = match &args.search {
        Some(raw) => Some(session.search(raw)?),
        None => None,
    };
    let traversal = args.traverse.map(|order| {
        json!({
            "order": order,
            "values": tree.values(order),
        })
    });

    print_json(&json!({
        "inserted": inserted,
        "layout": tree.layout(),
        "search": search,
        "traversal": traversal,
    }))
}
