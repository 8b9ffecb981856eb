use chrono::Utc;
use hearth_core::responses::ClassifyResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::commands::shared::parse::parse_attachment_spec;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth classify`.
pub fn handle(args: &ClassifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let attachments = args
        .attach
        .iter()
        .map(|raw| parse_attachment_spec(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let classifier = ctx.classifier_with(args.id_prefix.as_deref())?;
    let request = classifier.classify_at(&args.text, &attachments, Utc::now());
    output(&ClassifyResponse::from(request), flags.format)
}
