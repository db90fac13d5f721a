//! `algoviz sort` command - quicksort an array and report its trace
//!
//! The array comes from `--values`, or is random (`--size`, `--seed`).
//! With `--animate` the steps are replayed in real time and Ctrl-C stops
//! the run at the next segment.

pub mod format;

use serde_json::json;
use tracing::debug;

use crate::cli::SortArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::print_json;
use algoviz_core::error::Result;
use algoviz_core::session::Session;
use algoviz_core::sort::{CancelHandle, SortEvent, SortFrame};

use self::format::{frame_line, outcome_line, values_line};

/// Execute the sort command
pub fn execute(ctx: &CommandContext, args: &SortArgs) -> Result<()> {
    let mut session = match args.seed {
        Some(seed) => ctx.seeded_session(seed)?,
        None => ctx.session()?,
    };

    if let Some(size) = args.size {
        match args.seed {
            Some(seed) => session.sort_mut().resize_seeded(size, seed)?,
            None => session.resize_array(size)?,
        }
    }
    if let Some(values) = &args.values {
        session.load_array(values.0.clone())?;
    }

    if ctx.animated() {
        install_cancel_handler(session.sort().cancel_handle());
    }

    run(ctx, &mut session, args.trace)?;
    trace_command!(ctx.cli, ctx.start, "sort");
    Ok(())
}

/// Route Ctrl-C to the sort's cancel flag; only the first handler per process sticks
pub fn install_cancel_handler(handle: CancelHandle) {
    if let Err(e) = ctrlc::set_handler(move || {
        if handle.is_sorting() {
            handle.cancel();
        } else {
            std::process::exit(130);
        }
    }) {
        debug!(error = %e, "ctrlc_handler_not_installed");
    }
}

/// Sort the session's current array, printing the trace as requested
pub fn run(ctx: &CommandContext, session: &mut Session, trace: bool) -> Result<()> {
    let initial = session.sort().values().to_vec();
    if ctx.json() {
        return output_json(session, initial, trace);
    }

    if !ctx.cli.quiet {
        println!("Array: {}", values_line(&initial));
    }

    let show_steps = trace || ctx.animated();
    let mut last = None;
    ctx.pacer()
        .replay(session.sort_mut().sort_frames(), |frame: &SortFrame| {
            if show_steps {
                println!("{}", frame_line(frame));
            }
            if frame.event.is_terminal() {
                last = Some(frame.event);
            }
        });

    println!("{}", outcome_line(last.as_ref()));
    if !ctx.cli.quiet {
        println!("Result: {}", values_line(session.sort().values()));
    }
    Ok(())
}

fn output_json(session: &mut Session, initial: Vec<i64>, trace: bool) -> Result<()> {
    let frames: Vec<SortFrame> = session.sort_mut().sort_frames().collect();
    let cancelled = matches!(
        frames.last().map(|f| f.event),
        Some(SortEvent::Cancelled { .. })
    );
    let state = session.sort();

    print_json(&json!({
        "initial": initial,
        "values": state.values(),
        "comparisons": state.comparisons(),
        "cancelled": cancelled,
        "elapsed_ms": state
            .last_elapsed()
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        "frames": if trace { Some(frames) } else { None },
    }))
}
