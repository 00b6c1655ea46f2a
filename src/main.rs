// SPDX-License-Identifier: PMPL-1.0-or-later

//! napoletani-index: inspect, export and preview the overlay's localized text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use napoletani_index::diagnostics;
use napoletani_index::export::{self, ExportFormat};
use napoletani_index::i18n::{dictionary, host_language_signal, LanguageStore, Locale};
use napoletani_index::legend::{Legend, BIN_THRESHOLDS};
use napoletani_index::overlay::{self, OverlayGui, OverlayTui, TextMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "napoletani-index")]
#[command(version)]
#[command(about = "Localized text and language switching for the Napoletani Index overlay")]
#[command(long_about = None)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the overlay text in the active language
    Show {
        /// Language to use instead of the host language
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Print a single string, e.g. overlay.title or overlay.bins[0].label
        #[arg(short, long)]
        key: Option<String>,

        /// Strip markup instead of styling it
        #[arg(long)]
        plain: bool,
    },

    /// Switch language once and show both states
    Toggle {
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,
    },

    /// Resolve a preferred-language signal (default: the environment)
    Detect {
        #[arg(value_name = "SIGNAL")]
        signal: Option<String>,
    },

    /// Print the legend, or the bin a score falls into
    Legend {
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        #[arg(short, long, allow_negative_numbers = true)]
        score: Option<f64>,
    },

    /// Export the dictionary for the web overlay
    Export {
        /// Export one language only
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Output format (default: from the output extension, else json)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that both languages have the same keys and legend
    Check,

    /// Interactive terminal overlay
    Tui {
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,
    },

    /// Desktop overlay window
    Gui {
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    It,
    En,
}

impl From<LangArg> for Locale {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::It => Locale::It,
            LangArg::En => Locale::En,
        }
    }
}

/// Explicit `--lang` wins; otherwise detect from the host.
fn open_store(lang: Option<LangArg>) -> LanguageStore {
    match lang {
        Some(lang) => LanguageStore::new(lang.into()),
        None => LanguageStore::from_host(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show { lang, key, plain } => {
            let store = open_store(lang);
            let mode = if plain { TextMode::Plain } else { TextMode::Ansi };
            match key {
                Some(key) => {
                    let value = store
                        .active_tree()
                        .get(&key)
                        .with_context(|| format!("no string at '{}'", key))?;
                    println!("{}", mode.render(&value));
                }
                None => overlay::print_overlay(&store, mode),
            }
        }

        Commands::Toggle { lang } => {
            let mut store = open_store(lang);
            let before = store.locale();
            println!("{}  {}", before.code().yellow(), store.active_tree().overlay.title);
            let after = store.toggle();
            println!("{}  {}", after.code().yellow(), store.active_tree().overlay.title);
        }

        Commands::Detect { signal } => {
            let signal = signal.or_else(host_language_signal);
            let locale = Locale::detect(signal.as_deref());
            println!(
                "{} -> {} ({})",
                signal.as_deref().unwrap_or("<none>"),
                locale.code().bold(),
                locale.native_name()
            );
        }

        Commands::Legend { lang, score } => {
            let store = open_store(lang);
            let tree = store.active_tree();
            let legend = Legend::for_locale(store.locale());
            match score {
                Some(score) => {
                    let bin = legend.bin_for(score);
                    println!("{}: {} {}", score, bin.color, bin.label);
                }
                None => {
                    println!("{}", tree.overlay.legend_title.bold());
                    for (bin, threshold) in legend.bins().iter().zip(BIN_THRESHOLDS) {
                        println!(
                            "  {} {:>4} {}",
                            overlay::swatch(bin.color, TextMode::Ansi),
                            threshold,
                            bin.label
                        );
                    }
                }
            }
        }

        Commands::Export {
            lang,
            format,
            output,
        } => {
            let locale = lang.map(Locale::from);
            let format = ExportFormat::resolve(format, output.as_deref());
            match output {
                Some(path) => {
                    export::write_export(&path, format, locale)?;
                    println!("Dictionary saved to: {}", path.display());
                }
                None => {
                    let content = match locale {
                        Some(locale) => format.serialize(dictionary(locale))?,
                        None => export::export_dictionary(format)?,
                    };
                    println!("{}", content);
                }
            }
        }

        Commands::Check => diagnostics::run_self_diagnostics()?,

        Commands::Tui { lang } => {
            let mut store = open_store(lang);
            OverlayTui::run(&mut store)?;
        }

        Commands::Gui { lang } => {
            OverlayGui::run(open_store(lang))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_score_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["napoletani-index", "legend", "--score", "-3"])
            .expect("negative score should parse");
        match cli.command {
            Commands::Legend { score, .. } => assert_eq!(score, Some(-3.0)),
            _ => panic!("expected legend command"),
        }
    }

    #[test]
    fn export_format_defaults_to_none() {
        let cli = Cli::try_parse_from(["napoletani-index", "export", "-o", "dict.yaml"])
            .expect("export should parse");
        match cli.command {
            Commands::Export { format, output, .. } => {
                assert_eq!(format, None);
                assert_eq!(
                    ExportFormat::resolve(format, output.as_deref()),
                    ExportFormat::Yaml
                );
            }
            _ => panic!("expected export command"),
        }
    }
}
