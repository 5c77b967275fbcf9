//! CLI command implementations.

pub(crate) mod blog;
pub(crate) mod budget;
pub(crate) mod check;
pub(crate) mod eligibility;
pub(crate) mod related;
pub(crate) mod resolve;
pub(crate) mod service;
pub(crate) mod tools;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use mdh_config::{CliSettings, Config, RelatedOrderSetting};
use mdh_locale::{Localizer, LookupTables, RelatedOrder};
use mdh_site::{Blog, ServiceCatalog, ToolLibrary, page_title};
use mdh_storage::{FsStorage, Storage};

use crate::error::CliError;

pub(crate) use blog::BlogArgs;
pub(crate) use budget::BudgetArgs;
pub(crate) use check::CheckArgs;
pub(crate) use eligibility::EligibilityArgs;
pub(crate) use related::RelatedArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use service::ServiceArgs;
pub(crate) use tools::ToolsArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover mdh.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data directory holding the JSON fixtures (overrides config).
    #[arg(short, long, global = true, env = "MDH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration and open the data directory.
    pub(crate) fn context(&self, related_limit: Option<usize>) -> Result<Context, CliError> {
        let settings = CliSettings {
            data_dir: self.data_dir.clone(),
            related_limit,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        tracing::info!(
            config = ?config.config_path,
            data_dir = %config.data_resolved.dir.display(),
            "Loaded configuration"
        );
        let storage = Arc::new(FsStorage::new(config.data_resolved.dir.clone()));
        Ok(Context::new(config, storage))
    }
}

/// Everything a command needs: configuration plus the data it points at.
pub(crate) struct Context {
    config: Config,
    storage: Arc<dyn Storage>,
    tables: Arc<LookupTables>,
}

impl Context {
    pub(crate) fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let tables = Arc::new(LookupTables::new(Arc::clone(&storage)));
        Self {
            config,
            storage,
            tables,
        }
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn tables(&self) -> &LookupTables {
        &self.tables
    }

    pub(crate) fn related_order(&self) -> RelatedOrder {
        match self.config.related.order {
            RelatedOrderSetting::Insertion => RelatedOrder::Insertion,
            RelatedOrderSetting::Alphabetical => RelatedOrder::Alphabetical,
        }
    }

    pub(crate) fn aliases(&self) -> HashMap<String, String> {
        self.config
            .questions
            .aliases
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub(crate) fn services(&self) -> ServiceCatalog {
        ServiceCatalog::new(Arc::clone(&self.storage), Arc::clone(&self.tables))
            .with_localizer(Localizer::new(self.config.site.default_location.clone()))
            .with_related(self.config.related.limit, self.related_order())
    }

    pub(crate) fn blog(&self) -> Blog {
        Blog::new(Arc::clone(&self.storage))
    }

    pub(crate) fn tools(&self) -> ToolLibrary {
        ToolLibrary::new(Arc::clone(&self.storage))
    }

    /// Document title with the configured site name.
    pub(crate) fn title(&self, title: &str) -> String {
        page_title(title, &self.config.site.name)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use std::sync::Arc;

    use mdh_config::Config;
    use mdh_storage::MockStorage;

    use super::Context;

    pub(crate) const SUBURBS: &str = r#"{
        "bondi": {"state": "NSW", "region": "Eastern Suburbs"},
        "coogee": {"state": "NSW", "region": "Eastern Suburbs"},
        "gold-coast": {"state": "QLD", "region": "Gold Coast Region"}
    }"#;

    pub(crate) const CHECKER: &str = r#"{
        "title": "NDIS Eligibility Checker",
        "slug": "ndis-eligibility-checker",
        "description": "Check if you qualify",
        "category": "NDIS",
        "questions": [
            {"id": "age", "text": "How old are you?", "type": "radio", "options": [
                {"value": "under65", "label": "Under 65", "nextQuestion": "q2"},
                {"value": "over65", "label": "65 or over", "result": {
                    "eligible": "unlikely", "title": "Aged care", "message": "Over 65"}}
            ]},
            {"id": "residence", "text": "Are you an Australian resident?", "type": "radio", "options": [
                {"value": "yes", "label": "Yes", "result": {
                    "eligible": "likely", "title": "You may be eligible", "message": "Apply"}},
                {"value": "no", "label": "No", "result": {
                    "eligible": "no", "title": "Not eligible", "message": "Residency required"}}
            ]}
        ]
    }"#;

    pub(crate) const BUDGET: &str = r#"{
        "title": "Budget Explorer",
        "slug": "budget-explorer",
        "description": "Explore categories",
        "category": "NDIS Planning",
        "budgetExplorer": {
            "introText": "Explore",
            "sections": [
                {"id": "goals", "title": "Your goals", "questions": [
                    {"id": "independence", "text": "Live independently", "type": "checkbox"},
                    {"id": "social", "text": "Join the community", "type": "checkbox"}
                ]},
                {"id": "core", "title": "Core Supports", "subcategories": [
                    {"id": "daily", "title": "Daily Activities", "supports": [
                        {"id": "personal-care", "title": "Personal care", "relatedGoals": ["independence"]},
                        {"id": "outings", "title": "Community outings", "relatedGoals": ["social"]}
                    ]}
                ]}
            ]
        }
    }"#;

    pub(crate) const INDEX: &str = r#"[
        {"title": "NDIS Eligibility Checker", "slug": "ndis-eligibility-checker",
         "description": "Check if you qualify", "category": "NDIS"},
        {"title": "Budget Explorer", "slug": "budget-explorer",
         "description": "Explore categories", "category": "NDIS Planning"}
    ]"#;

    pub(crate) fn storage() -> MockStorage {
        MockStorage::new()
            .with_file("australian-suburbs.json", SUBURBS)
            .with_file("service-mappings.json", "{}")
            .with_file("tools/tools.json", INDEX)
            .with_file("tools/ndis-eligibility-checker.json", CHECKER)
            .with_file("tools/budget-explorer.json", BUDGET)
    }

    pub(crate) fn context(storage: MockStorage) -> Context {
        Context::new(Config::default_with_base(Path::new("/site")), Arc::new(storage))
    }
}
