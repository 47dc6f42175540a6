//! Injected linguistic segmentation capability.
//!
//! The pipeline never depends on a specific engine, only on
//! [SegmentationEngine]; engines are resolved through an [EngineRegistry]
//! at pipeline start so a missing engine fails fast instead of per line.
use std::collections::HashMap;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

/// segment(text) -> tokens
pub trait SegmentationEngine: Send {
    fn segment(&self, text: &str) -> Vec<String>;
}

type Factory = Arc<dyn Fn() -> Box<dyn SegmentationEngine> + Send + Sync>;

/// Cheap-to-clone constructor for a per-worker engine instance.
#[derive(Clone)]
pub struct EngineHandle {
    factory: Factory,
}

impl EngineHandle {
    pub fn create(&self) -> Box<dyn SegmentationEngine> {
        (self.factory)()
    }
}

/// Maps normalized langcodes to engine factories.
pub struct EngineRegistry {
    engines: HashMap<String, Factory>,
    fallback: Option<Factory>,
}

impl EngineRegistry {
    /// A registry with no engines at all; every resolution fails.
    pub fn empty() -> Self {
        Self {
            engines: HashMap::new(),
            fallback: None,
        }
    }

    /// The built-in registry: UAX#29 word-boundary segmentation for any
    /// language not given a dedicated engine.
    pub fn builtin() -> Self {
        Self {
            engines: HashMap::new(),
            fallback: Some(Arc::new(|| Box::new(UnicodeEngine) as Box<dyn SegmentationEngine>)),
        }
    }

    /// Register a dedicated engine for a normalized langcode.
    pub fn register<F, E>(&mut self, lang: &str, factory: F)
    where
        F: Fn() -> E + Send + Sync + 'static,
        E: SegmentationEngine + 'static,
    {
        self.engines.insert(
            lang.to_string(),
            Arc::new(move || Box::new(factory()) as Box<dyn SegmentationEngine>),
        );
    }

    /// Engine lookup for a normalized langcode, falling back to the default
    /// engine if any. [Error::MissingEngine] aborts the run before any
    /// line is read.
    pub fn resolve(&self, lang: &str) -> Result<EngineHandle, Error> {
        self.engines
            .get(lang)
            .or(self.fallback.as_ref())
            .cloned()
            .map(|factory| EngineHandle { factory })
            .ok_or_else(|| Error::MissingEngine(lang.to_string()))
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Dictionary-less UAX#29 word-boundary segmentation.
pub struct UnicodeEngine;

impl SegmentationEngine for UnicodeEngine {
    fn segment(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}
