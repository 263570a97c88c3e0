pub mod analytics;
pub mod config;
pub mod content;
pub mod engine;
pub mod hash;
pub mod hub;
pub mod links;
pub mod metadata;
pub mod page;
pub mod quality;
pub mod sitemap;
pub mod taxonomy;
pub mod templates;

pub use config::Config;
pub use engine::{EngineError, PseoEngine};
pub use page::{LinkType, PageSection, PseoPage, RelatedLink};
pub use quality::{QualityCheckResult, QualityFailure, QualityRule, Severity};
pub use taxonomy::{Category, CategoryType, IntentType, IntentUnit, Taxonomy, TopicCluster};
