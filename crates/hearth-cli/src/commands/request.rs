use chrono::Utc;
use hearth_core::state::RequestDraft;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RequestArgs;
use crate::commands::shared::parse::{parse_attachment_spec, parse_optional_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth request`.
pub fn handle(args: &RequestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = RequestDraft {
        description: args.description.clone(),
        urgency: parse_optional_enum(args.urgency.as_deref(), "urgency")?,
        category: parse_optional_enum(args.category.as_deref(), "category")?,
        photo: args.photo.as_deref().map(parse_attachment_spec).transpose()?,
    };

    let request = draft.into_request(ctx.classifier.id_prefix(), Utc::now())?;
    tracing::info!(id = %request.id, "request submitted from form");
    output(&request, flags.format)
}
