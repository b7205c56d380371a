use std::collections::HashMap;
use std::io::Write;

use anyhow::Context;
use mag_core::entities::Product;
use mag_core::metrics;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let products = ctx.service.list_products().await?;
    let categories = ctx.service.list_categories().await?;
    let names = metrics::category_name_index(&categories);

    let bytes = csv_bytes(&products, &names)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("failed to write CSV to {path}"))?;
            output(
                &serde_json::json!({ "exported": products.len(), "path": path }),
                flags.format,
            )
        }
        None => {
            std::io::stdout().write_all(&bytes)?;
            Ok(())
        }
    }
}

/// Render the export: header row plus one record per product, category
/// resolved through the id-keyed name map.
fn csv_bytes(products: &[Product], names: &HashMap<i64, String>) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "category", "quantity", "price"])?;
    for product in products {
        let quantity = product.quantity.to_string();
        let price = product.price.to_string();
        writer.write_record([
            product.name.as_str(),
            metrics::resolve_category_name(product, names),
            quantity.as_str(),
            price.as_str(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("failed to flush CSV buffer: {error}"))
}
