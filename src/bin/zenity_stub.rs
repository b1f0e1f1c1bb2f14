//! Fake zenity for integration tests.
//!
//! Behavior is selected through the `--title` flag so the real argument
//! pipeline stays exercised end to end:
//!
//!   stub:submit:<text>        print <text>, exit 0
//!   stub:cancel               exit 1, silent
//!   stub:extra                echo the --extra-button label, exit 1
//!   stub:leak:<text>          print <text>, exit 1
//!   stub:exit:<code>[:<text>] print <text> if given, exit <code>
//!   stub:check-env            exit 0 only when the GTK workaround arrived
//!   stub:echo-args            print every received arg on its own line
//!   stub:stdin                echo stdin back, exit 0
//!
//! `--progress` consumes the stdin feed instead: it honors `--auto-close`
//! at 100 and `stub:cancel-early` quits after the first line like a user
//! hitting Cancel.

use std::io::Read;

fn flag_value(args: &[String], name: &str) -> Option<String> {
    let prefix = format!("--{name}=");
    args.iter()
        .find_map(|a| a.strip_prefix(&prefix).map(ToOwned::to_owned))
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version") {
        println!("4.0.1-stub");
        return;
    }

    if args.iter().any(|a| a == "--progress") {
        run_progress(&args);
        return;
    }

    let directive = flag_value(&args, "title").unwrap_or_default();
    let Some(rest) = directive.strip_prefix("stub:") else {
        std::process::exit(0);
    };
    let (mode, payload) = match rest.split_once(':') {
        Some((mode, payload)) => (mode, payload),
        None => (rest, ""),
    };

    match mode {
        "submit" => {
            println!("{payload}");
            std::process::exit(0);
        }
        "cancel" => std::process::exit(1),
        "extra" => {
            println!("{}", flag_value(&args, "extra-button").unwrap_or_default());
            std::process::exit(1);
        }
        "leak" => {
            println!("{payload}");
            std::process::exit(1);
        }
        "exit" => {
            let (code, text) = match payload.split_once(':') {
                Some((code, text)) => (code, text),
                None => (payload, ""),
            };
            if !text.is_empty() {
                println!("{text}");
            }
            std::process::exit(code.parse().unwrap_or(0));
        }
        "check-env" => {
            let ok = std::env::var("GSETTINGS_BACKEND").as_deref() == Ok("memory")
                && std::env::var("GSETTINGS_SCHEMA_DIR").as_deref() == Ok("/dev/null")
                && std::env::var("G_MESSAGES_DEBUG").as_deref() == Ok("");
            if ok {
                println!("env-ok");
                std::process::exit(0);
            }
            std::process::exit(2);
        }
        "echo-args" => {
            for arg in &args {
                println!("{arg}");
            }
            std::process::exit(0);
        }
        "stdin" => {
            let mut input = String::new();
            if std::io::stdin().read_to_string(&mut input).is_err() {
                std::process::exit(1);
            }
            print!("{input}");
            std::process::exit(0);
        }
        _ => std::process::exit(0),
    }
}

fn run_progress(args: &[String]) {
    use std::io::BufRead;

    let auto_close = args.iter().any(|a| a == "--auto-close");
    let cancel_early = flag_value(args, "title").as_deref() == Some("stub:cancel-early");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if let Ok(percent) = line.parse::<i32>() {
            if auto_close && percent >= 100 {
                std::process::exit(0);
            }
        }
        if cancel_early {
            std::process::exit(1);
        }
    }
    // Feed closed cleanly.
    std::process::exit(0);
}
