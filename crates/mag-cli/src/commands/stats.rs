use mag_core::entities::{Category, Product};
use mag_core::enums::StockStatus;
use mag_core::metrics;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Headline figures plus the low-stock set, computed from one snapshot.
#[derive(Debug, Serialize)]
struct StatsReport {
    products: usize,
    total_units: i64,
    inventory_value: f64,
    threshold: u32,
    low_stock: Vec<LowStockLine>,
}

#[derive(Debug, Serialize)]
struct LowStockLine {
    id: i64,
    name: String,
    category: String,
    quantity: i64,
    status: StockStatus,
}

pub async fn run(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let threshold = args
        .threshold
        .unwrap_or(ctx.config.general.low_stock_threshold);

    let products = ctx.service.list_products().await?;
    let categories = ctx.service.list_categories().await?;

    output(&build_report(&products, &categories, threshold), flags.format)
}

fn build_report(products: &[Product], categories: &[Category], threshold: u32) -> StatsReport {
    let names = metrics::category_name_index(categories);
    let low_stock = metrics::low_stock(products, threshold)
        .into_iter()
        .map(|product| LowStockLine {
            id: product.id,
            name: product.name.clone(),
            category: metrics::resolve_category_name(product, &names).to_string(),
            quantity: product.quantity,
            status: metrics::stock_status(product, threshold),
        })
        .collect();

    StatsReport {
        products: products.len(),
        total_units: metrics::total_units(products),
        inventory_value: metrics::inventory_value(products),
        threshold,
        low_stock,
    }
}

#[cfg(test)]
mod tests {
    use mag_core::entities::{Category, Product};
    use mag_core::enums::StockStatus;
    use pretty_assertions::assert_eq;

    use super::build_report;

    fn product(id: i64, quantity: i64, price: f64, category_id: i64) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            quantity,
            price,
            category_id,
        }
    }

    #[test]
    fn report_collects_headline_figures_and_low_stock() {
        let categories = [Category {
            id: 1,
            name: "Fruits".into(),
            description: None,
        }];
        let products = [
            product(1, 0, 2.0, 1),
            product(2, 3, 2.5, 1),
            product(3, 40, 1.0, 7),
        ];

        let report = build_report(&products, &categories, 5);
        assert_eq!(report.products, 3);
        assert_eq!(report.total_units, 43);
        assert_eq!(report.inventory_value, 47.5);
        assert_eq!(report.threshold, 5);

        assert_eq!(report.low_stock.len(), 2);
        assert_eq!(report.low_stock[0].status, StockStatus::OutOfStock);
        assert_eq!(report.low_stock[0].category, "Fruits");
        assert_eq!(report.low_stock[1].status, StockStatus::Low);
    }

    #[test]
    fn stale_category_reference_shows_unknown() {
        let report = build_report(&[product(1, 1, 1.0, 9)], &[], 5);
        assert_eq!(report.low_stock[0].category, "Unknown");
    }
}
