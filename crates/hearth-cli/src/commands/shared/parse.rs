use anyhow::{Context, bail};
use hearth_core::entities::Attachment;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional enum flag.
pub fn parse_optional_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|raw| parse_enum(raw, field)).transpose()
}

/// Parse an attachment descriptor of the form `NAME:SIZE:MIME[:URL]`.
///
/// The URL is everything after the third colon, so `https://...` survives.
pub fn parse_attachment_spec(raw: &str) -> anyhow::Result<Attachment> {
    let mut parts = raw.splitn(4, ':');
    let (Some(name), Some(size), Some(mime_type)) = (parts.next(), parts.next(), parts.next())
    else {
        bail!("invalid attachment '{raw}': expected NAME:SIZE:MIME[:URL]");
    };
    let url = parts.next().filter(|url| !url.is_empty()).map(str::to_string);

    if name.trim().is_empty() {
        bail!("invalid attachment '{raw}': name is empty");
    }
    if mime_type.trim().is_empty() {
        bail!("invalid attachment '{raw}': mime type is empty");
    }
    let size: u64 = size
        .trim()
        .parse()
        .with_context(|| format!("invalid attachment '{raw}': size must be a byte count"))?;

    Ok(Attachment::new(name.trim(), size, mime_type.trim(), url))
}
