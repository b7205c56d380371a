use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    category_id: i64,
    quantity: i64,
    price: f64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let product = ctx
        .service
        .create_product(name, category_id, quantity, price)
        .await?;
    output(&product, flags.format)
}
