//! Interactive collection of planner settings.
//!
//! Every question shows the current value as its default; an empty answer
//! keeps it.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use jumptour_lib::PlannerConfig;

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: &str,
) -> Result<String> {
    write!(output, "{question} [{default}]: ").context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read answer")?;
    let answer = line.trim();
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Ask for each setting in turn, starting from `defaults`.
///
/// Looping back is enabled only by an explicit `yes`; ending at the last
/// system is asked only for open routes and disabled only by `no`.
pub fn prompt_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: &PlannerConfig,
) -> Result<PlannerConfig> {
    let range_text = ask(
        input,
        output,
        "Maximum jump range (ly)",
        &defaults.max_jump_range.to_string(),
    )?;
    let max_jump_range: f64 = match range_text.parse() {
        Ok(value) => value,
        Err(_) => bail!("invalid jump range '{range_text}'; expected a number of light-years"),
    };

    let filename = ask(
        input,
        output,
        "Systems CSV file",
        &defaults.filename.display().to_string(),
    )?;

    let loop_answer = ask(
        input,
        output,
        "Loop back to the starting system? (yes/no)",
        yes_no(defaults.loop_back),
    )?;
    let loop_back = matches!(loop_answer.to_ascii_lowercase().as_str(), "yes" | "y");

    let final_is_last = if loop_back {
        defaults.final_is_last
    } else {
        let answer = ask(
            input,
            output,
            "End at the last system in the file? (yes/no)",
            yes_no(defaults.final_is_last),
        )?;
        !matches!(answer.to_ascii_lowercase().as_str(), "no" | "n")
    };

    Ok(PlannerConfig {
        max_jump_range,
        filename: PathBuf::from(filename),
        loop_back,
        final_is_last,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(answers: &str) -> Result<PlannerConfig> {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        prompt_config(&mut input, &mut output, &PlannerConfig::default())
    }

    #[test]
    fn empty_answers_keep_defaults() {
        let config = run("\n\n\n\n").expect("prompts");
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn answers_override_defaults() {
        let config = run("42.5\nmap.csv\nno\nno\n").expect("prompts");
        assert_eq!(config.max_jump_range, 42.5);
        assert_eq!(config.filename, PathBuf::from("map.csv"));
        assert!(!config.loop_back);
        assert!(!config.final_is_last);
    }

    #[test]
    fn looping_skips_the_final_system_question() {
        let mut input = Cursor::new(b"\n\nYES\n".to_vec());
        let mut output = Vec::new();
        let config =
            prompt_config(&mut input, &mut output, &PlannerConfig::default()).expect("prompts");
        assert!(config.loop_back);
        assert!(config.final_is_last);

        let transcript = String::from_utf8(output).expect("utf8");
        assert!(transcript.contains("Maximum jump range (ly) [65]"));
        assert!(!transcript.contains("End at the last system"));
    }

    #[test]
    fn anything_but_yes_keeps_an_open_route() {
        let config = run("\n\nsure\nmaybe\n").expect("prompts");
        assert!(!config.loop_back);
        assert!(config.final_is_last);
    }

    #[test]
    fn non_numeric_range_is_rejected() {
        let err = run("far\n").expect_err("invalid range");
        assert!(err.to_string().contains("invalid jump range 'far'"));
    }
}
