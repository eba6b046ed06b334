use anyhow::Result;

use super::AppContext;

pub async fn run(ctx: &AppContext, id: &str) -> Result<()> {
    let model = ctx.open(id).await?;
    println!("{}", model.preview()?);
    Ok(())
}
