use mag_core::entities::ProductWithCategory;
use mag_core::metrics;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    search: Option<&str>,
    with_category: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    if !with_category {
        let mut products = match search {
            Some(query) => ctx.service.search_products(query).await?,
            None => ctx.service.list_products().await?,
        };
        products.truncate(limit);
        return output(&products, flags.format);
    }

    let mut rows = match search {
        // The join read covers the plain listing; a filtered search resolves
        // names client-side from the id-keyed map instead.
        Some(query) => {
            let categories = ctx.service.list_categories().await?;
            let names = metrics::category_name_index(&categories);
            ctx.service
                .search_products(query)
                .await?
                .into_iter()
                .map(|product| {
                    let category_name = names.get(&product.category_id).cloned();
                    ProductWithCategory {
                        product,
                        category_name,
                    }
                })
                .collect()
        }
        None => ctx.service.list_products_with_category().await?,
    };
    rows.truncate(limit);
    output(&rows, flags.format)
}
