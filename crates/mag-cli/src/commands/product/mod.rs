mod add;
mod delete;
mod list;
mod set_quantity;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductCommands;
use crate::context::AppContext;

/// Handle `mgz product`.
pub async fn handle(
    action: &ProductCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProductCommands::Add {
            name,
            category,
            quantity,
            price,
        } => add::run(name, *category, *quantity, *price, ctx, flags).await,
        ProductCommands::List {
            search,
            with_category,
        } => list::run(search.as_deref(), *with_category, ctx, flags).await,
        ProductCommands::SetQuantity { id, quantity } => {
            set_quantity::run(*id, *quantity, ctx, flags).await
        }
        ProductCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
