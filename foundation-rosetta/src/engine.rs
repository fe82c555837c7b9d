//! Template engine seam.
//!
//! Lang values are template source. Turning them into text is delegated to a
//! [`TemplateEngine`]; [`HandlebarsEngine`] is the default.

use crate::helpers::{PREFIX_HELPER, PrefixHelper};
use crate::{PrefixStyles, Result};
use handlebars::{Handlebars, HelperDef};
use serde::Serialize;
use serde_json::{Map, Value};

/// Error type returned by template engines.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// Renders template source into a finished message.
pub trait TemplateEngine: Send + Sync {
    fn render(&self, template: &str, ctx: &RenderContext) -> std::result::Result<String, EngineError>;
}

/// A set of named substitution values.
///
/// ```
/// use foundation_rosetta::TagResolver;
///
/// let resolver = TagResolver::new().with("player", "Steve").with("count", 3);
/// assert_eq!(resolver.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagResolver {
    tags: Map<String, Value>,
}

impl TagResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver providing a single tag.
    pub fn single(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().with(name, value)
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.tags.insert(name.into(), value.into());
        self
    }

    /// Add a tag whose value is any serializable type.
    pub fn with_serialized<T: Serialize + ?Sized>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        self.tags.insert(name.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.tags.get(name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Everything an engine gets besides the template itself.
///
/// Resolvers apply in order, the last specified taking priority. The target,
/// if any, is available to templates as `target`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    resolvers: Vec<TagResolver>,
    target: Option<Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolvers(resolvers: &[TagResolver]) -> Self {
        Self {
            resolvers: resolvers.to_vec(),
            target: None,
        }
    }

    pub fn resolver(mut self, resolver: TagResolver) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Set the render target, serialized once up front.
    pub fn target<T: Serialize + ?Sized>(mut self, target: &T) -> Result<Self> {
        self.target = Some(serde_json::to_value(target)?);
        Ok(self)
    }

    pub fn resolvers(&self) -> &[TagResolver] {
        &self.resolvers
    }

    pub fn target_value(&self) -> Option<&Value> {
        self.target.as_ref()
    }

    /// Flatten into the data object handed to the engine.
    pub fn to_data(&self) -> Value {
        let mut data = Map::new();
        if let Some(target) = &self.target {
            data.insert("target".to_string(), target.clone());
        }
        for resolver in &self.resolvers {
            for (name, value) in &resolver.tags {
                data.insert(name.clone(), value.clone());
            }
        }
        Value::Object(data)
    }
}

/// Default engine, backed by Handlebars.
///
/// Escaping is disabled since output is chat markup rather than HTML, and
/// missing variables render as nothing. The `prefix` helper is always
/// registered.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn new() -> Self {
        Self::with_prefix_styles(PrefixStyles::default())
    }

    pub fn with_prefix_styles(styles: PrefixStyles) -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(false);
        registry.register_helper(PREFIX_HELPER, Box::new(PrefixHelper::new(styles)));
        Self { registry }
    }

    /// Register an additional helper, replacing any helper of the same name.
    pub fn register_helper(
        &mut self,
        name: &str,
        helper: impl HelperDef + Send + Sync + 'static,
    ) -> &mut Self {
        self.registry.register_helper(name, Box::new(helper));
        self
    }

    pub fn registry(&self) -> &Handlebars<'static> {
        &self.registry
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HandlebarsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlebarsEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, template: &str, ctx: &RenderContext) -> std::result::Result<String, EngineError> {
        Ok(self.registry.render_template(template, &ctx.to_data())?)
    }
}
