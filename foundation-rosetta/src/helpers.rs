//! Handlebars helpers registered on the default engine

use crate::{MessageType, PrefixStyles};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderErrorReason,
};

/// Name the prefix helper is registered under.
pub const PREFIX_HELPER: &str = "prefix";

/// Renders the styled header for a [`MessageType`]: `{{prefix "info"}}`.
#[derive(Debug, Clone, Default)]
pub struct PrefixHelper {
    styles: PrefixStyles,
}

impl PrefixHelper {
    pub fn new(styles: PrefixStyles) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &PrefixStyles {
        &self.styles
    }
}

impl HelperDef for PrefixHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let param = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(PREFIX_HELPER, 0))?;

        let name = param.value().as_str().ok_or_else(|| {
            RenderErrorReason::Other(format!(
                "{} expects a message type name, got {}",
                PREFIX_HELPER,
                param.value()
            ))
        })?;

        let message_type: MessageType = name
            .parse()
            .map_err(|e: crate::RosettaError| RenderErrorReason::Other(e.to_string()))?;

        out.write(&self.styles.prefix(message_type))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry(styles: PrefixStyles) -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.register_helper(PREFIX_HELPER, Box::new(PrefixHelper::new(styles)));
        hbs
    }

    #[test]
    fn test_prefix_helper() {
        let hbs = registry(PrefixStyles::default());

        let out = hbs.render_template(r#"{{prefix "success"}}Done"#, &json!({})).unwrap();
        assert_eq!(out, "§aSuccess §8» §7Done");
    }

    #[test]
    fn test_prefix_helper_uses_overrides() {
        let hbs = registry(PrefixStyles::default().with_color(MessageType::Info, "§b"));

        let out = hbs.render_template(r#"{{prefix "INFO"}}"#, &json!({})).unwrap();
        assert!(out.starts_with("§bInfo"));
    }

    #[test]
    fn test_prefix_helper_rejects_unknown_type() {
        let hbs = registry(PrefixStyles::default());
        assert!(hbs.render_template(r#"{{prefix "fatal"}}"#, &json!({})).is_err());
    }

    #[test]
    fn test_prefix_helper_requires_parameter() {
        let hbs = registry(PrefixStyles::default());
        assert!(hbs.render_template("{{prefix}}", &json!({})).is_err());
    }
}
