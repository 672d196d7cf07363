//! Command implementations

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::args::{ConfigArgs, PropsArgs, RulesArgs};
use crate::config::SessionConfig;
use crate::domain::model::Category;
use crate::domain::rules::RuleSet;
use crate::output;
use crate::presenter::{Presenter, ViewMode};
use crate::resolver::{FrameSource, LibavSource};

/// Execute the props command
pub fn props(args: PropsArgs) -> Result<()> {
    info!("Starting props operation");
    info!("Input: {}", args.input);
    info!("Frame: {}", args.frame);

    crate::init().context("Failed to initialize FFmpeg")?;

    let config = SessionConfig::load(&SessionConfig::default_path()).unwrap_or_else(|e| {
        warn!("Falling back to default session config: {}", e);
        SessionConfig::default()
    });
    let mode = resolve_mode(&args, &config);

    let mut source =
        LibavSource::resolve(&args.input).context("Failed to resolve input file")?;
    if let Some(total) = source.frame_count() {
        if args.frame >= total {
            warn!(
                "Frame {} is beyond the reported frame count {}",
                args.frame, total
            );
        }
    }
    let props = source
        .frame_props(args.frame)
        .context("Failed to extract frame properties")?;

    let rules = RuleSet::builtin().context("Built-in rule tables are invalid")?;
    let presenter = Presenter::new(rules);
    let presentation = presenter.present(&props, mode);

    if args.json {
        let json = output::render_json(&presentation)
            .context("Failed to serialize presentation to JSON")?;
        println!("{}", json);
    } else {
        print!("{}", output::render_text(&presentation));
    }

    info!("Props operation completed successfully");
    Ok(())
}

/// Execute the rules command
pub fn rules(args: RulesArgs) -> Result<()> {
    let rules = RuleSet::builtin().context("Built-in rule tables are invalid")?;
    let summaries = rules.rule_summaries();

    if args.json {
        let json = serde_json::to_string_pretty(&summaries)
            .context("Failed to serialize rule summaries to JSON")?;
        println!("{}", json);
    } else {
        println!("Formatting rules");
        println!("================");
        for summary in &summaries {
            println!(
                "  {:<18} {:<30} {:<5} {}",
                summary.key, summary.title, summary.kind, summary.category
            );
        }
        println!();
        let categories: Vec<&str> = Category::ALL.iter().map(Category::name).collect();
        println!("Categories (display order): {}", categories.join(", "));
    }

    Ok(())
}

/// Execute the config command
pub fn config(args: ConfigArgs) -> Result<()> {
    let path = args
        .path
        .map(PathBuf::from)
        .unwrap_or_else(SessionConfig::default_path);
    let mut config = SessionConfig::load(&path).context("Failed to load session config")?;

    let mut changed = false;
    if let Some(raw) = args.raw {
        config.raw_props = raw;
        changed = true;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
        changed = true;
    }

    if changed {
        config.save(&path).context("Failed to save session config")?;
    }

    println!("Config file: {}", path.display());
    println!("  raw_props = {}", config.raw_props);
    println!("  log_level = {}", config.log_level);

    Ok(())
}

/// Resolve the presentation mode from flags and the session default.
fn resolve_mode(args: &PropsArgs, config: &SessionConfig) -> ViewMode {
    if args.raw {
        ViewMode::Raw
    } else if args.pretty {
        ViewMode::Prettified
    } else if config.raw_props {
        ViewMode::Raw
    } else {
        ViewMode::Prettified
    }
}
