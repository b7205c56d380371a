use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Idempotent on missing: report whether a row actually went away.
    let deleted = ctx.service.delete_product(id).await?;
    output(
        &serde_json::json!({ "id": id, "deleted": deleted }),
        flags.format,
    )
}
