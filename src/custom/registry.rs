use std::collections::HashMap;
use std::path::Path;

use crate::{
    cards::data::CardData, foundation::error::CardwrightResult, render::canvas::RenderCanvas,
    theme::model::Component,
};

/// Render-time context handed to custom handlers.
pub struct HandlerContext<'a> {
    /// Card being rendered.
    pub card: &'a CardData,
    /// Theme root directory for resolving handler-relative assets.
    pub theme_dir: &'a Path,
    /// Directory for persisted intermediate results.
    pub cache_dir: &'a Path,
    /// Whether the premium (golden) variant is being rendered.
    pub premium: bool,
}

/// A named drawing strategy invoked from theme data.
///
/// Handlers draw directly onto the canvas; a returned error aborts only that
/// component's contribution, never the whole pipeline.
pub trait CustomHandler {
    /// Draw this handler's contribution for `component`.
    fn apply(
        &self,
        canvas: &mut RenderCanvas,
        component: &Component,
        ctx: &HandlerContext<'_>,
    ) -> CardwrightResult<()>;
}

/// Registry mapping custom-handler names to implementations.
///
/// Populated at startup; an unknown name in theme data is a data error
/// reported by the pipeline, not a type error.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn CustomHandler>>,
}

impl HandlerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in handlers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            "set_watermark",
            Box::new(crate::custom::watermark::SetWatermark),
        );
        registry
    }

    /// Register (or replace) a handler under `name`.
    pub fn register(&mut self, name: impl Into<String>, handler: Box<dyn CustomHandler>) {
        self.handlers.insert(name.into(), handler);
    }

    /// Look up a handler by name.
    pub fn get(&self, name: &str) -> Option<&dyn CustomHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/custom/registry.rs"]
mod tests;
