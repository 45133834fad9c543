// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Switchcraft CLI
//!
//! Terminal front-end for a switcher: reads a JSON config, persists the
//! selection under the platform config directory (or `--store-dir`), and
//! renders the picker as plain text.
#![allow(clippy::print_stdout)]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};

use switchcraft_core::{
    is_valid_endpoint_url, normalize_custom_url, Config, Endpoint, PickerChoice, PickerItem,
    PickerOutcome, Switchcraft,
};
use switchcraft_store_fs::FsStore;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// JSON config describing the endpoints
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the persisted selection (defaults to the user config dir)
    #[clap(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Log reconciliation details to stderr
    #[clap(short, long, global = true)]
    verbose: bool,

    /// Command to execute
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the current endpoint
    Show,
    /// Print the picker: endpoints, custom entry, actions
    List,
    /// Select the endpoint at INDEX
    Select {
        /// Zero-based catalog index
        index: usize,
    },
    /// Select a custom endpoint URL (requires `allow_custom`)
    Custom {
        /// URL or bare host; `https://` is added when no scheme is given
        url: String,
    },
    /// Tap the configured action at INDEX
    Action {
        /// Zero-based action index
        index: usize,
    },
    /// Check whether TEXT would be accepted as a custom endpoint
    CheckUrl {
        /// Text to validate
        text: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match args.cmd {
        Command::CheckUrl { text } => check_url(&text),
        cmd => run(args.config.as_deref(), args.store_dir.as_deref(), cmd),
    }
}

fn run(config_path: Option<&Path>, store_dir: Option<&Path>, cmd: Command) -> Result<()> {
    let config_path = config_path.context("--config is required for this command")?;
    let config = load_config(config_path)?;
    let store = match store_dir {
        Some(dir) => FsStore::at(dir),
        None => FsStore::new("Switchcraft"),
    }
    .context("opening selection store")?;

    let mut switcher = Switchcraft::new(config, store)?;
    info!(outcome = ?switcher.reconciliation(), "config installed");
    switcher.subscribe(|endpoint: &Endpoint| info!(%endpoint, "selection changed"));

    match cmd {
        Command::Show => show(&switcher),
        Command::List => list(&switcher),
        Command::Select { index } => choose(&mut switcher, PickerChoice::Endpoint(index))?,
        Command::Custom { url } => choose(&mut switcher, PickerChoice::Custom(url))?,
        Command::Action { index } => choose(&mut switcher, PickerChoice::Action(index))?,
        Command::CheckUrl { text } => check_url(&text)?,
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
}

fn show(switcher: &Switchcraft<FsStore>) {
    match switcher.endpoint() {
        Some(endpoint) => {
            let marker = if switcher.is_default_endpoint() {
                " (default)"
            } else {
                ""
            };
            println!("{}\t{}{}", endpoint.name(), endpoint.url, marker);
        }
        None => println!("no endpoint selected"),
    }
}

fn list(switcher: &Switchcraft<FsStore>) {
    let sheet = switcher.picker();
    println!("{}", sheet.title);
    if let Some(message) = &sheet.message {
        println!("{message}");
    }
    for item in &sheet.items {
        match item {
            PickerItem::Endpoint {
                index,
                label,
                checked,
            } => {
                let mark = if *checked { '*' } else { ' ' };
                println!("{mark} [{index}] {label}");
            }
            PickerItem::Custom {
                placeholder,
                done_title,
                ..
            } => println!("  [custom] {done_title}: <{placeholder}>"),
            PickerItem::Action { index, title } => println!("  [action {index}] {title}"),
            PickerItem::Cancel { .. } => {}
        }
    }
}

fn choose(switcher: &mut Switchcraft<FsStore>, choice: PickerChoice) -> Result<()> {
    match switcher.handle_choice(choice)? {
        PickerOutcome::Selected {
            endpoint,
            restart_required,
        } => {
            println!("selected {}\t{}", endpoint.name(), endpoint.url);
            if restart_required {
                let notice = switchcraft_core::picker::RESTART_NOTICE;
                println!("{}: {}", notice.title, notice.message);
            }
        }
        PickerOutcome::ActionTapped(action) => println!("action {}", action.title),
        PickerOutcome::Dismissed => {}
    }
    Ok(())
}

fn check_url(text: &str) -> Result<()> {
    let normalized = normalize_custom_url(text);
    if !is_valid_endpoint_url(&normalized) {
        bail!("rejected {normalized}");
    }
    println!("{normalized}");
    Ok(())
}
