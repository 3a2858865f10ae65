//! Tips browsing commands

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::app_data::embedded_tips;
use crate::cli::output::{indent, print_formatted, print_success, OutputFormat};
use crate::config::Config;
use crate::tips::{self, strip_markup, ExpansionState, Tip, TipSection};

#[derive(Subcommand, Debug)]
pub enum TipsCommands {
    /// List tip titles
    List,

    /// Show one tip
    Show {
        /// Tip number (as printed by `tips list`)
        index: usize,

        /// Show the expanded view (description, result, code)
        #[arg(short, long)]
        expand: bool,
    },

    /// Validate a tips JSON file
    Check {
        /// Path to the file
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct TipListEntry<'a> {
    index: usize,
    title: &'a str,
    has_code: bool,
    has_result: bool,
}

#[derive(Serialize)]
struct TipView<'a> {
    index: usize,
    expanded: bool,
    #[serde(flatten)]
    tip: &'a Tip,
}

pub async fn run(command: TipsCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        TipsCommands::List => list(format),
        TipsCommands::Show { index, expand } => show(index, expand, format),
        TipsCommands::Check { file } => check(&file, format, quiet),
    }
}

/// Tips as configured: the user's file if set, otherwise the built-in list
fn configured_tips() -> Result<Vec<Tip>> {
    let config = Config::load()?;
    match config.tips.file {
        Some(file) => Ok(tips::load_tips_file(Path::new(&file))?),
        None => Ok(embedded_tips().to_vec()),
    }
}

fn list(format: OutputFormat) -> Result<()> {
    let tips = configured_tips()?;
    let entries: Vec<TipListEntry> = tips
        .iter()
        .enumerate()
        .map(|(index, tip)| TipListEntry {
            index,
            title: &tip.title,
            has_code: tip.code.is_some(),
            has_result: tip.result_html.is_some(),
        })
        .collect();

    print_formatted(&entries, format, |entries| {
        entries
            .iter()
            .map(|e| format!("{:>3}  {}", e.index, e.title))
            .collect::<Vec<_>>()
            .join("\n")
    });

    Ok(())
}

fn show(index: usize, expand: bool, format: OutputFormat) -> Result<()> {
    let tips = configured_tips()?;
    let tip = tips
        .get(index)
        .with_context(|| format!("No tip {} (there are {})", index, tips.len()))?;

    let mut expansion = ExpansionState::new(tips.len());
    if expand {
        expansion.toggle(index);
    }

    let view = TipView {
        index,
        expanded: expansion.is_expanded(index),
        tip,
    };
    print_formatted(&view, format, |v| render_text(v.tip, v.expanded));

    Ok(())
}

/// Plain-text rendering of a tip, following the same rules as the Tips tab
fn render_text(tip: &Tip, expanded: bool) -> String {
    let indicator = if expanded { "▼" } else { "▶" };
    let mut out = format!("{} {}", indicator, tip.title);
    if !expanded {
        return out;
    }

    for section in tip.sections() {
        out.push('\n');
        match section {
            TipSection::Description(text) => {
                out.push('\n');
                out.push_str(&indent(text, 2));
            }
            TipSection::ResultPreview(html) => {
                out.push_str("\n  Result:\n");
                out.push_str(&indent(&strip_markup(html), 4));
            }
            TipSection::Code(code) => {
                out.push_str("\n  Code:\n");
                out.push_str(&indent(code, 4));
            }
        }
    }
    out
}

#[derive(Serialize)]
struct CheckResult {
    file: String,
    tips: usize,
    with_code: usize,
    with_result: usize,
}

fn check(file: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let tips = tips::load_tips_file(file)?;

    let result = CheckResult {
        file: file.display().to_string(),
        tips: tips.len(),
        with_code: tips.iter().filter(|t| t.code.is_some()).count(),
        with_result: tips.iter().filter(|t| t.result_html.is_some()).count(),
    };

    if format == OutputFormat::Json {
        print_formatted(&result, format, |_| String::new());
    } else {
        print_success(
            &format!(
                "{}: {} tips ({} with code, {} with result preview)",
                result.file, result.tips, result.with_code, result.with_result
            ),
            quiet,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tip(code: Option<&str>, result_html: Option<&str>) -> Tip {
        Tip {
            title: "Flexbox".to_string(),
            description: "Center things.".to_string(),
            code: code.map(String::from),
            result_html: result_html.map(String::from),
        }
    }

    #[test]
    fn test_render_collapsed_shows_title_only() {
        let t = tip(Some("display: flex;"), Some("<p>ok</p>"));
        assert_eq!(render_text(&t, false), "▶ Flexbox");
    }

    #[test]
    fn test_render_code_without_result() {
        let out = render_text(&tip(Some("display: flex;"), None), true);
        assert!(out.starts_with("▼ Flexbox"));
        assert!(out.contains("  Center things."));
        assert!(out.contains("Code:\n    display: flex;"));
        assert!(!out.contains("Result:"));
    }

    #[test]
    fn test_render_description_only() {
        let out = render_text(&tip(None, None), true);
        assert_eq!(out, "▼ Flexbox\n\n  Center things.");
    }

    #[test]
    fn test_render_result_before_code() {
        let out = render_text(&tip(Some("x"), Some("<p>ok</p>")), true);
        let result_at = out.find("Result:").unwrap();
        let code_at = out.find("Code:").unwrap();
        assert!(result_at < code_at);
        assert!(out.contains("    ok"));
    }
}
