use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
mod views;

pub use views::Tabular;

/// Render a response in the requested format.
///
/// Json and raw serialize the value as is; table renders its [`Tabular`] views
/// separated by blank lines.
pub fn render<T: Serialize + Tabular + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let options = ui::table_options();
            Ok(value
                .tables()
                .iter()
                .map(|table| table.render(options))
                .collect::<Vec<_>>()
                .join("\n\n"))
        }
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
