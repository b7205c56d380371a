use clap::Subcommand;

/// Product entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductCommands {
    /// Add a product to an existing category.
    Add {
        #[arg(long)]
        name: String,
        /// Category id the product belongs to.
        #[arg(long)]
        category: i64,
        /// Units on hand.
        #[arg(long, default_value_t = 0)]
        quantity: i64,
        /// Unit price.
        #[arg(long, default_value_t = 0.0)]
        price: f64,
    },
    /// List products.
    List {
        /// Substring filter on product name.
        #[arg(long)]
        search: Option<String>,
        /// Include the resolved category name per row.
        #[arg(long)]
        with_category: bool,
    },
    /// Set a product's quantity.
    SetQuantity { id: i64, quantity: i64 },
    /// Delete a product by id (succeeds when already gone).
    Delete { id: i64 },
}
