use agile_core::entities::Member;
use agile_core::view::BoardView;

use crate::cli::GlobalFlags;
use crate::commands::shared::rows::{ITEM_HEADERS, item_row};
use crate::context::{AppContext, view_filter};
use crate::output::output_rows;

/// Handle `agl board`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.open_session(flags.mine).await?;
    let Some(snapshot) = session.snapshot() else {
        anyhow::bail!("project snapshot was not loaded");
    };
    let view = snapshot.view(view_filter(&snapshot.context));
    let members = load_members(ctx).await;

    let mut headers = vec!["pane"];
    headers.extend(ITEM_HEADERS);
    output_rows(&view, &headers, &board_rows(&view, &members), flags.format)
}

/// Members for assignee names; a failed lookup only costs the names.
pub async fn load_members(ctx: &AppContext) -> Vec<Member> {
    ctx.members().await.unwrap_or_else(|error| {
        tracing::warn!(%error, "member lookup failed; showing assignee ids");
        Vec::new()
    })
}

/// One row per item: sprint panes in board order, then the backlog.
fn board_rows(view: &BoardView, members: &[Member]) -> Vec<Vec<String>> {
    let sprint_rows = view.sprints.iter().flat_map(|pane| {
        let label = format!("{} ({})", pane.sprint.display_title(), pane.phase);
        pane.items.iter().map(move |item| {
            let mut row = vec![label.clone()];
            row.extend(item_row(item, members));
            row
        })
    });
    let backlog_rows = view.backlog.iter().map(|item| {
        let mut row = vec![String::from("Backlog")];
        row.extend(item_row(item, members));
        row
    });
    sprint_rows.chain(backlog_rows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agile_core::entities::{BacklogItem, Sprint};
    use agile_core::view::ViewFilter;

    #[test]
    fn rows_list_sprints_before_backlog() {
        let mut active = Sprint::planned(5, 1, "Sprint 1");
        active.is_activate = true;
        let mut in_sprint = BacklogItem::new(2, 1, "in sprint");
        in_sprint.sprint_id = Some(5);
        let items = vec![BacklogItem::new(1, 1, "loose"), in_sprint];

        let view = BoardView::derive(&items, &[active], ViewFilter::all());
        let rows = board_rows(&view, &[]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Sprint 1 (active)");
        assert_eq!(rows[0][1], "2");
        assert_eq!(rows[1][0], "Backlog");
        assert_eq!(rows[1][1], "1");
    }
}
