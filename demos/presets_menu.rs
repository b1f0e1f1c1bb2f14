//! Menu over the pre-built developer forms.
//!
//! Shows a list dialog of preset names, opens the chosen form and prints
//! the typed result as JSON. Loops until the menu is dismissed.

use clap::Parser;
use zendialog::options::{CommonOptions, ListOptions};
use zendialog::{presets, Zenity};

#[derive(Debug, Parser)]
#[command(name = "presets_menu", about = "Try the pre-built developer forms")]
struct Args {
    /// Dialog binary to use.
    #[arg(long, default_value = "zenity")]
    program: String,
}

const MENU: &[&str] = &[
    "Git Commit",
    "Bug Report",
    "SSH Host",
    "Database Config",
    "Release Version",
    "API Credentials",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let zenity = Zenity::with_program(&args.program);

    loop {
        let options = ListOptions {
            common: CommonOptions {
                title: Some("Developer Forms".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let rows: Vec<&[&str]> = MENU.iter().map(std::slice::from_ref).collect();
        let Some(choice) = zenity
            .list("Pick a form:", &["Form"], &rows, &options)
            .await?
        else {
            return Ok(());
        };

        let result = match choice.as_str() {
            "Git Commit" => to_json(presets::git_commit(&zenity, &choice).await)?,
            "Bug Report" => to_json(presets::bug_report(&zenity, &choice).await)?,
            "SSH Host" => to_json(presets::ssh_host(&zenity, &choice).await)?,
            "Database Config" => to_json(presets::database_config(&zenity, &choice).await)?,
            "Release Version" => to_json(presets::release_version(&zenity, &choice).await)?,
            "API Credentials" => to_json(presets::api_credentials(&zenity, &choice).await)?,
            other => format!("unknown menu entry: {other}"),
        };
        println!("{result}");
    }
}

fn to_json<T: serde::Serialize>(value: Option<T>) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(serde_json::to_string_pretty(&value)?),
        None => Ok("(cancelled)".to_string()),
    }
}
