//! Line-oriented interactive session.
//!
//! Any line not starting with `:` is a prompt and builds a cake. A blank
//! line rebuilds the current draft, which `:chip` extends.

use crate::report;
use anyhow::Result;
use cake::presets::{apply_chip, chip};
use cake::Session;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  <prompt>      build a cake from a description
  <enter>       rebuild the current draft
  :chip NAME    add a suggestion chip to the draft
  :rotate       start spinning the cake
  :stop         stop spinning
  :tick [N]     advance N frames (default 1)
  :help         this text
  :quit         leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Build(String),
    Rebuild,
    Chip(String),
    Rotate,
    Stop,
    Tick(u32),
    Help,
    Quit,
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(if line.is_empty() {
            Command::Rebuild
        } else {
            Command::Build(line.to_string())
        });
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    Ok(match name {
        "chip" if !arg.is_empty() => Command::Chip(arg.to_string()),
        "chip" => anyhow::bail!(":chip needs a name"),
        "rotate" => Command::Rotate,
        "stop" => Command::Stop,
        "tick" if arg.is_empty() => Command::Tick(1),
        "tick" => Command::Tick(arg.parse()?),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => anyhow::bail!("unknown command :{other}"),
    })
}

pub fn run(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut draft = String::new();

    println!("{HELP}");
    loop {
        print!("cake> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Build(prompt) => {
                draft = prompt;
                visualize(&mut session, &draft);
            }
            Command::Rebuild if draft.is_empty() => {}
            Command::Rebuild => visualize(&mut session, &draft),
            Command::Chip(name) => match chip(&name) {
                Some(c) => {
                    draft = apply_chip(&draft, c.value);
                    println!("draft: {draft}");
                }
                None => println!("no chip named {name}"),
            },
            Command::Rotate => session.start_rotation(),
            Command::Stop => session.stop_rotation(),
            Command::Tick(frames) => {
                for _ in 0..frames {
                    session.tick();
                }
                report_rotation(&session);
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }
    Ok(())
}

fn visualize(session: &mut Session, prompt: &str) {
    println!("Designing your cake...");
    std::thread::sleep(session.loading_delay());
    let outcome = session.visualize(prompt);
    report::print_outcome(session.scene(), &outcome);
}

fn report_rotation(session: &Session) {
    let Some(cake) = session.cake() else {
        println!("no cake yet");
        return;
    };
    if let Some(node) = session.scene().node(cake) {
        let state = if session.is_rotating() {
            "rotating"
        } else {
            "still"
        };
        println!("rotation {:.2} rad ({state})", node.transform.rotation.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_prompts() {
        assert_eq!(
            parse("  chocolate cake \n").unwrap(),
            Command::Build("chocolate cake".into())
        );
        assert_eq!(parse("\n").unwrap(), Command::Rebuild);
    }

    #[test]
    fn colon_commands() {
        assert_eq!(parse(":rotate").unwrap(), Command::Rotate);
        assert_eq!(parse(":stop").unwrap(), Command::Stop);
        assert_eq!(parse(":tick").unwrap(), Command::Tick(1));
        assert_eq!(parse(":tick 30").unwrap(), Command::Tick(30));
        assert_eq!(parse(":chip with roses").unwrap(), Command::Chip("with roses".into()));
        assert_eq!(parse(":q").unwrap(), Command::Quit);
    }

    #[test]
    fn bad_commands_are_errors() {
        assert!(parse(":chip").is_err());
        assert!(parse(":tick many").is_err());
        assert!(parse(":bake").is_err());
    }
}
