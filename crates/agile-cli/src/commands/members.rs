use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `agl members`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let members = ctx.members().await?;
    let rows = members
        .iter()
        .map(|member| {
            vec![
                member.member_id.to_string(),
                member.name.clone(),
                member.profile_image_url.clone().unwrap_or_else(|| String::from("-")),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(&members, &["id", "name", "profile"], &rows, flags.format)
}
