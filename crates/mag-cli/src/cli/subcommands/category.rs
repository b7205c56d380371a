use clap::Subcommand;

/// Category entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// Add a category.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List categories.
    List,
    /// Delete a category by id. Fails while products still reference it.
    Delete { id: i64 },
}
