//! Modal command implementation
//!
//! Drives the export modal from a terminal: the batch file is handed over
//! through a session store exactly as the host would, the modal view is
//! printed, and the chosen flow runs against the configured services.

use crate::adapters::{ConsoleHost, HttpFragmentActions};
use crate::config::load_config;
use crate::core::modal::{
    BatchStore, ExportChoice, ExportModal, ExportOutcome, ModalView, SessionStore,
};
use crate::domain::BatchId;
use clap::{Args, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;

/// Button pressed in the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModalChoice {
    Cancel,
    Export,
    PublishAndExport,
}

/// Arguments for the modal command
#[derive(Args, Debug)]
pub struct ModalArgs {
    /// JSON file holding the selected fragments (`[{id, title, status}]`)
    #[arg(short, long, value_name = "FILE")]
    pub batch: String,

    /// Choice to make; prompts when omitted
    #[arg(long, value_enum)]
    pub choice: Option<ModalChoice>,
}

impl ModalArgs {
    /// Execute the modal command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let host = Arc::new(ConsoleHost::new(config.host.clone()));
        let actions = Arc::new(HttpFragmentActions::new(&config.aem, &config.target)?);

        let store = SessionStore::new();
        let batch_id = BatchId::generate();
        store.put(&batch_id, fs::read_to_string(&self.batch)?);

        let mut modal = ExportModal::new(host, actions);
        if let Err(e) = modal.load(&store, Some(&batch_id)) {
            eprintln!("❌ {e}");
        }

        print_view(&modal.view());

        let choice = match self.choice {
            Some(choice) => choice,
            None => match prompt_choice()? {
                Some(choice) => choice,
                None => ModalChoice::Cancel,
            },
        };

        let outcome = match choice {
            ModalChoice::Cancel => {
                modal.cancel().await?;
                println!("Export cancelled.");
                return Ok(0);
            }
            ModalChoice::Export => modal.confirm(ExportChoice::ExportOnly).await?,
            ModalChoice::PublishAndExport => modal.confirm(ExportChoice::PublishAndExport).await?,
        };

        match outcome {
            ExportOutcome::Succeeded => Ok(0),
            ExportOutcome::Failed => Ok(1),
        }
    }
}

fn print_view(view: &ModalView) {
    println!("Select Workspace: {}", view.workspaces.join(" | "));
    println!();
    println!("{}", view.prompt.replace("<br>", "\n"));
    println!();
    if !view.unpublished.is_empty() {
        println!("{}", view.unpublished_heading);
        for link in &view.unpublished {
            println!("  - {} ({})", link.title, link.href);
        }
        println!();
    }
    println!("{}", view.warning);
    println!();
}

fn prompt_choice() -> io::Result<Option<ModalChoice>> {
    print!("[c]ancel, [e]xport (no publishing), [p]ublish and export: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(parse_choice(&input))
}

fn parse_choice(input: &str) -> Option<ModalChoice> {
    match input.trim().to_lowercase().as_str() {
        "c" | "cancel" => Some(ModalChoice::Cancel),
        "e" | "export" => Some(ModalChoice::Export),
        "p" | "publish" | "publish-and-export" => Some(ModalChoice::PublishAndExport),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("c", Some(ModalChoice::Cancel))]
    #[test_case(" E \n", Some(ModalChoice::Export))]
    #[test_case("publish", Some(ModalChoice::PublishAndExport))]
    #[test_case("", None)]
    #[test_case("x", None)]
    fn test_parse_choice(input: &str, expected: Option<ModalChoice>) {
        assert_eq!(parse_choice(input), expected);
    }

    #[tokio::test]
    async fn test_missing_config_file_is_config_error() {
        let args = ModalArgs {
            batch: "batch.json".to_string(),
            choice: Some(ModalChoice::Cancel),
        };
        assert_eq!(args.execute("/nonexistent/cf-offers.toml").await.unwrap(), 2);
    }
}
