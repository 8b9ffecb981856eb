use anyhow::bail;
use hearth_config::HearthConfig;
use hearth_core::{RequestClassifier, ids};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: HearthConfig,
    pub classifier: RequestClassifier,
}

impl AppContext {
    /// Build the context from validated configuration.
    #[must_use]
    pub fn new(config: HearthConfig) -> Self {
        let classifier = RequestClassifier::with_id_prefix(config.requests.id_prefix.clone());
        tracing::debug!(
            id_prefix = classifier.id_prefix(),
            default_role = %config.general.default_role,
            "application context ready"
        );
        Self { config, classifier }
    }

    /// Classifier honoring a per-command id prefix override.
    ///
    /// The override must pass the same check as `requests.id_prefix`.
    pub fn classifier_with(&self, id_prefix: Option<&str>) -> anyhow::Result<RequestClassifier> {
        let Some(prefix) = id_prefix else {
            return Ok(self.classifier.clone());
        };
        if !ids::is_valid_prefix(prefix) {
            bail!("invalid id prefix '{prefix}': must be one or more ASCII letters");
        }
        Ok(RequestClassifier::with_id_prefix(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_uses_configured_prefix() {
        let mut config = HearthConfig::default();
        config.requests.id_prefix = "TKT".to_string();
        let ctx = AppContext::new(config);
        assert_eq!(ctx.classifier.id_prefix(), "TKT");
        assert_eq!(ctx.classifier_with(None).expect("default").id_prefix(), "TKT");
        assert_eq!(
            ctx.classifier_with(Some("MNT")).expect("override").id_prefix(),
            "MNT"
        );
    }

    #[test]
    fn numeric_override_is_rejected() {
        let ctx = AppContext::new(HearthConfig::default());
        for prefix in ["12", "", "REQ-"] {
            let err = ctx
                .classifier_with(Some(prefix))
                .expect_err("prefix would fuse into the timestamp");
            assert!(err.to_string().contains("invalid id prefix"));
        }
    }
}
