use mag_alert::LowStockMailer;
use mag_core::entities::Product;
use mag_core::metrics;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AlertArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &AlertArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let threshold = args
        .threshold
        .unwrap_or(ctx.config.general.low_stock_threshold);

    let snapshot = ctx.service.list_products().await?;
    let low: Vec<Product> = metrics::low_stock(&snapshot, threshold)
        .into_iter()
        .cloned()
        .collect();

    if low.is_empty() {
        return output(
            &serde_json::json!({
                "sent": false,
                "threshold": threshold,
                "reason": "no products at or below threshold",
            }),
            flags.format,
        );
    }

    // Mail settings are validated here, right before dispatch; a missing
    // secret fails without touching the network.
    let mailer = LowStockMailer::from_config(&ctx.config.mail)?;
    mailer.send_low_stock_alert(&low).await?;

    output(
        &serde_json::json!({
            "sent": true,
            "threshold": threshold,
            "items": low.len(),
            "recipient": ctx.config.mail.recipient,
        }),
        flags.format,
    )
}
