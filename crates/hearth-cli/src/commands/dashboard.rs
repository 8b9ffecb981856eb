use hearth_core::enums::Role;
use hearth_core::responses::DashboardResponse;
use hearth_core::state::{TicketBoard, TicketFilter, WorkflowBoard};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::shared::parse::{parse_enum, parse_optional_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth dashboard`.
pub fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = match args.role.as_deref() {
        Some(raw) => parse_enum::<Role>(raw, "role")?,
        None => ctx.config.general.default_role,
    };
    let filter = TicketFilter {
        status: parse_optional_enum(args.status.as_deref(), "status")?,
        urgency: parse_optional_enum(args.urgency.as_deref(), "urgency")?,
        category: parse_optional_enum(args.category.as_deref(), "category")?,
    };
    // `dashboard --limit` beats the global `--limit`, which beats config.
    let limit = args
        .limit
        .or(flags.limit)
        .unwrap_or(ctx.config.general.default_limit);

    let response = build(role, &filter, &args.resolve, usize::try_from(limit)?)?;
    output(&response, flags.format)
}

/// Seed the board for `role`, resolve the listed tickets, then filter.
///
/// Stats always describe the whole board, not the filtered view.
fn build(
    role: Role,
    filter: &TicketFilter,
    resolve: &[String],
    limit: usize,
) -> anyhow::Result<DashboardResponse> {
    let mut board = TicketBoard::seeded(role);
    for id in resolve {
        board = board.mark_resolved(id)?;
    }

    let requests = board
        .filter(filter)
        .into_iter()
        .take(limit)
        .cloned()
        .collect();
    let workflow = (role == Role::Landlord).then(|| WorkflowBoard::seeded().into_cards());

    Ok(DashboardResponse {
        role,
        stats: board.stats(),
        requests,
        workflow,
    })
}
