use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    quantity: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let product = ctx.service.update_product_quantity(id, quantity).await?;
    output(&product, flags.format)
}
