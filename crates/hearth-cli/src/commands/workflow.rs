use chrono::Utc;
use hearth_core::state::WorkflowBoard;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WorkflowCommands;
use crate::output::output;

/// Handle `hearth workflow`.
pub fn handle(action: &WorkflowCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = apply(WorkflowBoard::seeded(), action)?;
    output(board.cards(), flags.format)
}

fn apply(board: WorkflowBoard, action: &WorkflowCommands) -> anyhow::Result<WorkflowBoard> {
    let board = match action {
        WorkflowCommands::List => board,
        WorkflowCommands::Move { from, to } => board.reorder(*from, *to)?,
        WorkflowCommands::Done { id } => board.mark_done(id)?,
        WorkflowCommands::Remove { id } => board.remove(id)?,
        WorkflowCommands::Contract => board.with_generated_contract(Utc::now()),
    };
    Ok(board)
}
