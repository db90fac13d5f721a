//! `algoviz nodes` command - list campus locations
//!
//! Prints every location with its drawing position and outgoing edges, in
//! declaration order.

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json;
use algoviz_core::error::Result;
use algoviz_core::graph::Graph;

/// Execute the nodes command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let session = ctx.session()?;
    show(ctx, session.graph())
}

/// Print the location list for an existing graph
pub fn show(ctx: &CommandContext, graph: &Graph) -> Result<()> {
    if ctx.json() {
        return print_json(&nodes_json(graph));
    }

    if !ctx.cli.quiet {
        println!("Campus locations ({}):", graph.len());
    }
    for node in graph.nodes() {
        let links: Vec<String> = graph
            .edges_from(&node.name)
            .iter()
            .map(|e| format!("{} ({}m)", e.to, e.weight))
            .collect();
        println!("  {} {} ({}, {})", node.icon, node.name, node.x, node.y);
        if !ctx.cli.quiet {
            println!("      -> {}", links.join(", "));
        }
    }
    Ok(())
}

fn nodes_json(graph: &Graph) -> serde_json::Value {
    let nodes: Vec<_> = graph
        .nodes()
        .iter()
        .map(|node| {
            json!({
                "name": node.name,
                "icon": node.icon,
                "x": node.x,
                "y": node.y,
                "edges": graph
                    .edges_from(&node.name)
                    .iter()
                    .map(|e| json!({ "to": e.to, "weight": e.weight }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({ "nodes": nodes, "edge_count": graph.edge_count() })
}
