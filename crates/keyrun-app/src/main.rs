//! keyrun interactive entry point.
//!
//! Line-oriented front end for the command resolution pipeline: each line is
//! dispatched as a command, a direct URL/path, or a special command
//! (`!reload`, `!version`, `!exit`). A line starting with `?` previews the
//! autocomplete candidates for the rest of the line instead of launching.

mod launcher;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use keyrun_config::{DEFAULT_CONFIG_PATH, YamlConfigLoader};
use keyrun_core::{Application, Outcome};
use launcher::SystemLauncher;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config path from CLI arg, falling back to commands.yaml.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let app = Application::new(
        Box::new(YamlConfigLoader::new()),
        Arc::new(SystemLauncher),
    );
    let count = app.initialize(&config_path)?;
    log::info!("keyrun {} ready: {count} commands from {config_path}", app.version());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(prefix) = input.strip_prefix('?') {
            print_completions(&app, prefix.trim());
            continue;
        }

        match app.dispatch(input) {
            Ok(Outcome::Exit) => {
                log::info!("exit requested");
                break;
            },
            Ok(Outcome::Message(text)) => println!("{text}"),
            Ok(Outcome::Launched(execution)) => println!("launched {}", execution.target),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}

/// Show candidates and the longest common completion for `prefix`.
fn print_completions(app: &Application, prefix: &str) {
    let candidates = app.candidates(prefix);
    if candidates.is_empty() {
        println!("(no matches)");
        return;
    }
    println!("{}", candidates.join("  "));
    let completed = app.complete(prefix);
    if completed.len() > prefix.len() {
        println!("-> {completed}");
    }
}
