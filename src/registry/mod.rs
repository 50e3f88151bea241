// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Startup-time registry resolving `(category, name)` pairs to units.
//!
//! Implementations are registered as factories under a locator formed from
//! the category's base namespace and the implementation name
//! (`units::input::plain_text`, `observers::runtime_logger`). A per-category
//! alias table lets several logical names share one physical implementation.
//!
//! Successful resolutions are cached by `(category, name)`. The cache is
//! append-only and shared between runs; inserts go through
//! insert-if-absent so concurrent runs against one registry agree on a single
//! instance. Failures are never cached, so a name that fails now may resolve
//! once it is registered.

mod category;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

pub use category::{Category, UnknownCategory};

use crate::config::{EngineSettings, LoadError};
use crate::errors::{LookupFailure, ResolutionError, UnitError};
use crate::observability::messages::{registry::*, StructuredLog};
use crate::traits::{Observer, Unit};

/// Creates a unit instance on first resolution.
pub type UnitFactory = Arc<dyn Fn() -> Result<Arc<dyn Unit>, UnitError> + Send + Sync>;
/// Creates an observer instance on first resolution.
pub type ObserverFactory = Arc<dyn Fn() -> Result<Arc<dyn Observer>, UnitError> + Send + Sync>;

#[derive(Clone)]
enum Factory {
    Unit(UnitFactory),
    Observer(ObserverFactory),
}

#[derive(Clone)]
enum Resolved {
    Unit(Arc<dyn Unit>),
    Observer(Arc<dyn Observer>),
}

impl Resolved {
    fn kind(&self) -> &'static str {
        match self {
            Resolved::Unit(_) => "unit",
            Resolved::Observer(_) => "observer",
        }
    }
}

pub struct UnitRegistry {
    factories: HashMap<String, Factory>,
    aliases: HashMap<Category, HashMap<String, String>>,
    cache: RwLock<HashMap<(Category, String), Resolved>>,
    cache_resolved: bool,
}

impl UnitRegistry {
    /// Empty registry; nothing resolves until registered.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            aliases: HashMap::new(),
            cache: RwLock::new(HashMap::new()),
            cache_resolved: true,
        }
    }

    /// Registry pre-populated with the built-in units and observers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::backends::local::register_builtins(&mut registry);
        registry
    }

    /// Built-in registry adjusted by engine settings (cache toggle, extra aliases).
    pub fn from_settings(settings: &EngineSettings) -> Result<Self, LoadError> {
        let mut registry = Self::with_builtins();
        registry.cache_resolved = settings.cache_resolved;
        for (category, name, locator) in settings.parsed_aliases()? {
            registry.alias(category, name, locator);
        }
        Ok(registry)
    }

    pub fn set_cache_resolved(&mut self, enabled: bool) {
        self.cache_resolved = enabled;
    }

    /// Register a unit factory under `category`'s namespace.
    pub fn register_unit<F, U>(&mut self, category: Category, name: &str, factory: F)
    where
        F: Fn() -> Result<U, UnitError> + Send + Sync + 'static,
        U: Unit + 'static,
    {
        let factory: UnitFactory =
            Arc::new(move || factory().map(|unit| Arc::new(unit) as Arc<dyn Unit>));
        self.factories
            .insert(category.locator(name), Factory::Unit(factory));
    }

    /// Register an observer factory under the observer namespace.
    pub fn register_observer<F, O>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Result<O, UnitError> + Send + Sync + 'static,
        O: Observer + 'static,
    {
        let factory: ObserverFactory =
            Arc::new(move || factory().map(|observer| Arc::new(observer) as Arc<dyn Observer>));
        self.factories
            .insert(Category::Observer.locator(name), Factory::Observer(factory));
    }

    /// Route a logical `name` in `category` to a canonical locator.
    pub fn alias(&mut self, category: Category, name: impl Into<String>, locator: impl Into<String>) {
        self.aliases
            .entry(category)
            .or_default()
            .insert(name.into(), locator.into());
    }

    /// Locator a `(category, name)` pair resolves through.
    pub fn locator(&self, category: Category, name: &str) -> String {
        self.aliases
            .get(&category)
            .and_then(|table| table.get(name))
            .cloned()
            .unwrap_or_else(|| category.locator(name))
    }

    /// Whether a factory exists behind `(category, name)`, aliases included.
    pub fn is_registered(&self, category: Category, name: &str) -> bool {
        self.factories.contains_key(&self.locator(category, name))
    }

    /// All registered locators, sorted.
    pub fn locators(&self) -> Vec<&str> {
        let mut locators: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        locators.sort_unstable();
        locators
    }

    /// Number of cached resolutions.
    pub fn cached_len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Resolve a unit. `category` must be one of the fixed set; an unknown
    /// category fails before any lookup is attempted.
    pub fn resolve(&self, category: &str, name: &str) -> Result<Arc<dyn Unit>, ResolutionError> {
        let category = parse_category(category)?;
        match self.lookup(category, name)? {
            Resolved::Unit(unit) => Ok(unit),
            other => Err(ResolutionError::Lookup {
                locator: self.locator(category, name),
                cause: LookupFailure::KindMismatch {
                    expected: "unit",
                    found: other.kind(),
                },
            }),
        }
    }

    /// Resolve an observer by name in the observer category.
    pub fn resolve_observer(&self, name: &str) -> Result<Arc<dyn Observer>, ResolutionError> {
        match self.lookup(Category::Observer, name)? {
            Resolved::Observer(observer) => Ok(observer),
            other => Err(ResolutionError::Lookup {
                locator: self.locator(Category::Observer, name),
                cause: LookupFailure::KindMismatch {
                    expected: "observer",
                    found: other.kind(),
                },
            }),
        }
    }

    fn lookup(&self, category: Category, name: &str) -> Result<Resolved, ResolutionError> {
        let key = (category, name.to_string());

        if self.cache_resolved {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = cache.get(&key) {
                ResolutionCacheHit {
                    category: category.as_str(),
                    name,
                }
                .log();
                return Ok(hit.clone());
            }
        }

        let locator = self.locator(category, name);
        let result = self.instantiate(&locator);

        let resolved = match result {
            Ok(resolved) => resolved,
            Err(cause) => {
                let error = ResolutionError::Lookup { locator, cause };
                ResolutionFailed {
                    category: category.as_str(),
                    name,
                    error: &error,
                }
                .log();
                return Err(error);
            }
        };

        UnitResolved {
            category: category.as_str(),
            name,
            locator: &locator,
        }
        .log();

        if !self.cache_resolved {
            return Ok(resolved);
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(cache.entry(key).or_insert(resolved).clone())
    }

    fn instantiate(&self, locator: &str) -> Result<Resolved, LookupFailure> {
        match self.factories.get(locator) {
            None => Err(LookupFailure::NotRegistered),
            Some(Factory::Unit(factory)) => factory()
                .map(Resolved::Unit)
                .map_err(LookupFailure::Factory),
            Some(Factory::Observer(factory)) => factory()
                .map(Resolved::Observer)
                .map_err(LookupFailure::Factory),
        }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UnitRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitRegistry")
            .field("locators", &self.locators())
            .field("aliases", &self.aliases)
            .field("cache_resolved", &self.cache_resolved)
            .field("cached", &self.cached_len())
            .finish()
    }
}

fn parse_category(category: &str) -> Result<Category, ResolutionError> {
    category
        .parse()
        .map_err(|UnknownCategory(category)| ResolutionError::UnknownCategory { category })
}
