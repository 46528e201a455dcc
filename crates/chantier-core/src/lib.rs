pub mod budget;
pub mod config;
pub mod error;
pub mod i18n;
pub mod label;
pub mod normalize;
pub mod steps;

pub use budget::{reroute, BudgetCategory, BudgetItem, RerouteReport, RerouteRules};
pub use config::Config;
pub use error::{ChantierError, Result};
pub use i18n::{Catalog, Identity, LocaleTranslator, Translate};
pub use normalize::{normalize, normalize_opt};
pub use steps::{builtin_steps, ConstructionStep, Phase, StepTask};

// Label resolution
pub use label::{
    resolve_task_title, translate_category_name, translate_plan_description,
    translate_plan_features, translate_plan_name, translate_step_name, translate_trade_name,
    LabelResolver, TaskIdIndex,
};
