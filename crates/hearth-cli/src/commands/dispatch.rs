use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Classify(args) => commands::classify::handle(&args, ctx, flags),
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Request(args) => commands::request::handle(&args, ctx, flags),
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags),
        Commands::Workflow { action } => commands::workflow::handle(&action, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
