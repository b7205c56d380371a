mod add;
mod delete;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;

/// Handle `mgz category`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::Add { name, description } => {
            add::run(name, description.as_deref(), ctx, flags).await
        }
        CategoryCommands::List => list::run(ctx, flags).await,
        CategoryCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
