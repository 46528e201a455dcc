use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chantier_core::budget::{load_budget, save_budget, total_cost};
use chantier_core::config::Config;
use chantier_core::i18n::{Catalog, LocaleTranslator, Translate};
use chantier_core::label::{
    all_label_keys, effective_category, translate_category_name, translate_plan_description,
    translate_plan_features, translate_step_name, TaskIdIndex, CATEGORY_LABELS, PLAN_NAMES,
    TRADE_LABELS,
};
use chantier_core::steps::{builtin_steps, load_steps, ConstructionStep};
use chantier_core::{normalize, resolve_task_title, ChantierError, RerouteRules, Result};

mod args;
use args::{Cli, Commands, ConfigAction, LabelKind, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let base_dir = Config::base_dir(cli.base_dir);
    let locale = cli.locale.as_deref();
    let quiet = cli.quiet;

    let result = match cli.command {
        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
            Ok(())
        }
        Commands::Label {
            kind,
            name,
            fallback,
        } => with_session(&base_dir, locale, |s| {
            println!("{}", resolve_label(&s.t(), kind, &name, fallback.as_deref()));
            Ok(())
        }),
        Commands::Features { plan, fallback } => with_session(&base_dir, locale, |s| {
            for feature in translate_plan_features(&s.t(), &plan, &fallback) {
                println!("- {}", feature);
            }
            Ok(())
        }),
        Commands::Task { category, title } => with_session(&base_dir, locale, |s| {
            println!("{}", resolve_task_title(&s.t(), &category, &title));
            Ok(())
        }),
        Commands::Reroute { input, output } => with_session(&base_dir, locale, |s| {
            handle_reroute(&s.t(), &input, output.as_deref(), quiet)
        }),
        Commands::Steps { catalog } => with_session(&base_dir, locale, |s| {
            let steps = match &catalog {
                Some(path) => load_steps(path)?,
                None => builtin_steps(),
            };
            print_steps(&s.t(), &steps);
            Ok(())
        }),
        Commands::Coverage => with_session(&base_dir, locale, handle_coverage),
        Commands::Config { action } => handle_config(action, &base_dir),
        Commands::Completions { shell } => {
            handle_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_completions(shell: Shell) {
    let target = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(target, &mut cmd, bin_name, &mut io::stdout());
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load(base_dir)?
                .get(&key)
                .ok_or(ChantierError::ConfigKeyNotFound { key })?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let entries = Config::load(base_dir)?.list();
            let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
            for (key, value) in entries {
                println!("{} = {}", format!("{key:width$}").cyan(), value);
            }
        }
        ConfigAction::Path => println!("{}", Config::path(base_dir).display()),
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

/// Loaded catalog plus the active display language
struct Session {
    catalog: Catalog,
    locale: String,
}

impl Session {
    fn open(base_dir: &Path, locale_override: Option<&str>) -> Result<Self> {
        let config = Config::load(base_dir)?;
        let catalog = config.load_catalog(base_dir)?;
        let locale = locale_override
            .map(str::to_string)
            .unwrap_or_else(|| config.locale.language.clone());

        if locale_override.is_some() && !catalog.has_locale(&locale) {
            return Err(ChantierError::LocaleNotFound { locale });
        }

        debug!(
            locale = %locale,
            catalog_dir = %config.catalog_dir(base_dir).display(),
            locales = ?catalog.locales(),
            "opened session"
        );
        Ok(Self { catalog, locale })
    }

    fn t(&self) -> LocaleTranslator<'_> {
        self.catalog.translator(&self.locale)
    }
}

fn with_session(
    base_dir: &Path,
    locale: Option<&str>,
    f: impl FnOnce(&Session) -> Result<()>,
) -> Result<()> {
    let session = Session::open(base_dir, locale)?;
    f(&session)
}

fn resolve_label(t: &dyn Translate, kind: LabelKind, name: &str, fallback: Option<&str>) -> String {
    let resolver = match kind {
        LabelKind::Step => return translate_step_name(t, name, fallback),
        LabelKind::PlanDescription => {
            return translate_plan_description(t, name, fallback.unwrap_or(name))
        }
        LabelKind::Category => &*CATEGORY_LABELS,
        LabelKind::Trade => &*TRADE_LABELS,
        LabelKind::Plan => &*PLAN_NAMES,
    };

    match fallback {
        Some(fallback) => resolver.resolve_or(t, name, fallback),
        None => resolver.resolve(t, name),
    }
}

fn handle_coverage(session: &Session) -> Result<()> {
    let missing = session
        .catalog
        .missing_keys(&session.locale, &all_label_keys());

    if missing.is_empty() {
        println!("{} all keys present for '{}'", "OK:".green(), session.locale);
    } else {
        println!(
            "{} {} keys missing for '{}'",
            "Missing:".yellow(),
            missing.len(),
            session.locale
        );
        for key in missing {
            println!("  {}", key);
        }
    }

    Ok(())
}

fn handle_reroute(
    t: &dyn Translate,
    input: &Path,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let categories = load_budget(input)?;
    let (rerouted, report) = RerouteRules::foundation().apply_with_report(&categories);

    if !quiet {
        if report.is_empty() {
            eprintln!("{} no items to reroute", "Unchanged:".yellow());
        } else {
            for moved in &report.moved {
                eprintln!(
                    "{} {} → {}",
                    "Moved:".green(),
                    moved.item,
                    translate_category_name(t, moved.to).cyan()
                );
            }
        }
        eprintln!("{} {:.2}", "Total:".bold(), total_cost(&rerouted));
    }

    match output {
        Some(path) => {
            save_budget(path, &rerouted)?;
            if !quiet {
                eprintln!("{} {}", "Written:".green(), path.display());
            }
        }
        None => println!("{}", serde_json::to_string_pretty(&*rerouted)?),
    }

    Ok(())
}

fn print_steps(t: &dyn Translate, steps: &[ConstructionStep]) {
    let index = TaskIdIndex::build(steps);

    println!();
    for step in steps {
        println!(
            "{} {} {}",
            format!("[{}]", step.phase.as_str()).dimmed(),
            step.id.cyan(),
            translate_step_name(t, &step.id, Some(&step.title)).bold()
        );
        let category = effective_category(step);
        for task in &step.tasks {
            println!("    - {}", index.resolve_title(t, category, &task.title));
        }
    }
    println!();
}
