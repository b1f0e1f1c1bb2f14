//! Walks each dialog kind against a real zenity binary.
//!
//! Run with `cargo run --example tour -- --kind forms` (or `all`).

use std::time::Duration;

use clap::{Parser, ValueEnum};
use zendialog::options::{
    CalendarOptions, ColorSelectionOptions, CommonOptions, EntryOptions, FileSelectionOptions,
    FormsOptions, ListOptions, MessageOptions, PasswordOptions, ProgressOptions, QuestionOptions,
    ScaleOptions, TextInfoOptions,
};
use zendialog::{FormField, FormsOutcome, Zenity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    All,
    Info,
    Question,
    Entry,
    Password,
    Scale,
    Calendar,
    Checklist,
    File,
    Color,
    TextInfo,
    Forms,
    Progress,
}

#[derive(Debug, Parser)]
#[command(name = "tour", about = "Walk each zenity dialog kind")]
struct Args {
    /// Dialog kind to show.
    #[arg(long, value_enum, default_value_t = Kind::All)]
    kind: Kind,
    /// Dialog binary to use.
    #[arg(long, default_value = "zenity")]
    program: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let zenity = Zenity::with_program(&args.program);

    println!("zenity: {}", zenity.version().await?);

    let all = args.kind == Kind::All;
    if all || args.kind == Kind::Info {
        show_info(&zenity).await?;
    }
    if all || args.kind == Kind::Question {
        show_question(&zenity).await?;
    }
    if all || args.kind == Kind::Entry {
        show_entry(&zenity).await?;
    }
    if all || args.kind == Kind::Password {
        show_password(&zenity).await?;
    }
    if all || args.kind == Kind::Scale {
        show_scale(&zenity).await?;
    }
    if all || args.kind == Kind::Calendar {
        show_calendar(&zenity).await?;
    }
    if all || args.kind == Kind::Checklist {
        show_checklist(&zenity).await?;
    }
    if all || args.kind == Kind::File {
        show_file(&zenity).await?;
    }
    if all || args.kind == Kind::Color {
        show_color(&zenity).await?;
    }
    if all || args.kind == Kind::TextInfo {
        show_text_info(&zenity).await?;
    }
    if all || args.kind == Kind::Forms {
        show_forms(&zenity).await?;
    }
    if all || args.kind == Kind::Progress {
        show_progress(&zenity).await?;
    }
    Ok(())
}

fn titled(title: &str) -> CommonOptions {
    CommonOptions {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

async fn show_info(zenity: &Zenity) -> anyhow::Result<()> {
    let options = MessageOptions {
        common: titled("Tour"),
        ..Default::default()
    };
    let acknowledged = zenity.info("Welcome to the dialog tour.", &options).await?;
    println!("info acknowledged: {acknowledged}");
    Ok(())
}

async fn show_question(zenity: &Zenity) -> anyhow::Result<()> {
    let options = QuestionOptions {
        common: titled("Deploy"),
        default_cancel: true,
        ..Default::default()
    };
    let deploy = zenity.question("Deploy to production?", &options).await?;
    println!("deploy: {deploy}");
    Ok(())
}

async fn show_entry(zenity: &Zenity) -> anyhow::Result<()> {
    let options = EntryOptions {
        common: titled("Name"),
        entry_text: Some("guest".to_string()),
        ..Default::default()
    };
    match zenity.entry("What is your name?", &options).await? {
        Some(name) => println!("hello, {name}"),
        None => println!("entry dismissed"),
    }
    Ok(())
}

async fn show_password(zenity: &Zenity) -> anyhow::Result<()> {
    let options = PasswordOptions {
        common: titled("Sign in"),
        username: true,
    };
    match zenity.password(&options).await? {
        Some(secret) => println!("credentials: {secret}"),
        None => println!("password dismissed"),
    }
    Ok(())
}

async fn show_scale(zenity: &Zenity) -> anyhow::Result<()> {
    let options = ScaleOptions {
        common: titled("Volume"),
        value: Some(50),
        min_value: Some(0),
        max_value: Some(100),
        step: Some(5),
        ..Default::default()
    };
    match zenity.scale("Adjust volume:", &options).await? {
        Some(volume) => println!("volume: {volume}"),
        None => println!("scale dismissed"),
    }
    Ok(())
}

async fn show_calendar(zenity: &Zenity) -> anyhow::Result<()> {
    let options = CalendarOptions {
        common: titled("Release date"),
        date_format: Some("%Y-%m-%d".to_string()),
        ..Default::default()
    };
    match zenity.calendar("Pick the release date:", &options).await? {
        Some(date) => println!("date: {date}"),
        None => println!("calendar dismissed"),
    }
    Ok(())
}

async fn show_checklist(zenity: &Zenity) -> anyhow::Result<()> {
    let options = ListOptions {
        common: titled("Tasks"),
        checklist: true,
        separator: Some("|".to_string()),
        print_column: Some(2),
        ..Default::default()
    };
    let rows: &[&[&str]] = &[
        &["TRUE", "Run tests"],
        &["FALSE", "Update changelog"],
        &["FALSE", "Tag release"],
    ];
    match zenity
        .list("Select tasks to run:", &["Run", "Task"], rows, &options)
        .await?
    {
        Some(picked) => println!("tasks: {picked}"),
        None => println!("checklist dismissed"),
    }
    Ok(())
}

async fn show_file(zenity: &Zenity) -> anyhow::Result<()> {
    let options = FileSelectionOptions {
        common: titled("Open"),
        ..Default::default()
    };
    match zenity.file_selection(&options).await? {
        Some(path) => println!("picked: {}", path.display()),
        None => println!("file selection dismissed"),
    }
    Ok(())
}

async fn show_color(zenity: &Zenity) -> anyhow::Result<()> {
    let options = ColorSelectionOptions {
        common: titled("Accent"),
        color: Some("#FF5733".to_string()),
        show_palette: true,
    };
    match zenity.color_selection(&options).await? {
        Some(color) => println!("color: {color}"),
        None => println!("color selection dismissed"),
    }
    Ok(())
}

async fn show_text_info(zenity: &Zenity) -> anyhow::Result<()> {
    let options = TextInfoOptions {
        common: titled("License"),
        editable: true,
        checkbox: Some("I have read the terms".to_string()),
        ..Default::default()
    };
    let body = "These are the terms.\nScroll, edit, then confirm.";
    match zenity.text_info(Some(body), &options).await? {
        Some(text) => println!("accepted text ({} bytes)", text.len()),
        None => println!("text viewer dismissed"),
    }
    Ok(())
}

async fn show_forms(zenity: &Zenity) -> anyhow::Result<()> {
    let fields = [
        FormField::entry("Username"),
        FormField::password("Password"),
        FormField::combo("Role", ["Admin", "Developer", "Viewer"]),
    ];
    let options = FormsOptions {
        common: CommonOptions {
            extra_button: Some("Help".to_string()),
            ..titled("Sign in")
        },
        text: Some("Enter your credentials".to_string()),
        ..Default::default()
    };
    match zenity.forms(&fields, &options).await {
        FormsOutcome::Submitted { values } => println!("signed in as {}", values[0]),
        FormsOutcome::Cancelled => println!("sign-in cancelled"),
        FormsOutcome::ExtraAction => println!("help requested"),
    }
    Ok(())
}

async fn show_progress(zenity: &Zenity) -> anyhow::Result<()> {
    let options = ProgressOptions {
        common: titled("Working"),
        percentage: Some(0),
        auto_close: true,
        ..Default::default()
    };
    let mut handle = zenity.progress("Preparing...", &options).await?;
    for percent in (0..=100).step_by(10) {
        handle
            .update_with_message(percent as u8, &format!("Step {}/10", percent / 10))
            .await?;
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    let outcome = handle.finish().await?;
    println!("progress: {outcome:?}");
    Ok(())
}
