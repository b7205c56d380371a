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
        Commands::Category { action } => commands::category::handle(&action, ctx, flags).await,
        Commands::Product { action } => commands::product::handle(&action, ctx, flags).await,
        Commands::Stats(args) => commands::stats::run(&args, ctx, flags).await,
        Commands::Export(args) => commands::export::run(&args, ctx, flags).await,
        Commands::Alert(args) => commands::alert::run(&args, ctx, flags).await,
    }
}
