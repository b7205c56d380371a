use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_category(id).await?;
    output(&serde_json::json!({ "id": id, "deleted": true }), flags.format)
}
