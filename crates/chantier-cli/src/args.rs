use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "chantier")]
#[command(about = "Localized labels and budget rerouting for construction projects")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.chantier)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Display language (overrides locale.language)
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LabelKind {
    Category,
    Trade,
    Step,
    Plan,
    PlanDescription,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the normalized (comparison) form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Resolve a canonical name to its display label
    Label {
        /// Kind of canonical name
        #[arg(value_enum)]
        kind: LabelKind,

        /// Canonical name (step id for steps)
        name: String,

        /// Text to show when no translation exists
        #[arg(short, long)]
        fallback: Option<String>,
    },

    /// Resolve a plan tier's feature list
    Features {
        /// Canonical plan tier (e.g., Essentiel)
        plan: String,

        /// Features to show when the catalog has none
        fallback: Vec<String>,
    },

    /// Resolve a task title within a budget category
    Task {
        /// Canonical budget category (e.g., Plomberie)
        category: String,

        /// Canonical task title (e.g., "Installation tuyauterie")
        title: String,
    },

    /// Move misclassified foundation items to their categories
    Reroute {
        /// Budget file (JSON array of categories)
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List construction steps with localized names
    Steps {
        /// Steps catalog (JSON) to use instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List translation keys missing from the active locale
    Coverage,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., locale.language)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., locale.fallback)
        key: String,

        /// Value to set (e.g., "en" or "[en, fr]")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
