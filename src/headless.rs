// Headless mode - the calculator without a terminal UI
//
// Two entry points share one keymap and output format:
// - `tally eval KEYS` runs a key string through a fresh engine
// - `TALLY_NO_TUI=1 tally` reads stdin line by line into one engine,
//   printing the display after every line

use crate::config::Config;
use crate::engine::{CalculatorEngine, Display, DisplayFormat, EngineConfig, Mode, Operator};
use crate::keymap::parse_keys;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Final engine state after `tally eval`, as printed with `--json`
#[derive(Debug, Serialize)]
pub struct EvalReport {
    #[serde(flatten)]
    pub display: Display,
    /// Unformatted operands
    pub operand: String,
    pub left_operand: String,
    pub pending_operator: Option<Operator>,
    pub mode: Mode,
}

impl EvalReport {
    fn new(engine: &CalculatorEngine, format: &DisplayFormat) -> Self {
        Self {
            display: engine.render_with(format),
            operand: engine.current_operand().to_string(),
            left_operand: engine.previous_operand().to_string(),
            pending_operator: engine.pending_operator(),
            mode: engine.mode(),
        }
    }
}

/// Run a key string through a fresh engine
pub fn eval_keys(keys: &str, engine: EngineConfig, format: &DisplayFormat) -> Result<EvalReport> {
    let inputs = parse_keys(keys)?;
    let mut engine = CalculatorEngine::new(engine);
    for input in inputs {
        engine.apply(input);
    }
    Ok(EvalReport::new(&engine, format))
}

/// Display as text: the pending line (when there is one) above the current value
pub fn display_text(display: &Display) -> String {
    if display.previous.is_empty() {
        display.current.clone()
    } else {
        format!("{}\n{}", display.previous, display.current)
    }
}

/// Feed each input line to one engine, writing the display after each
///
/// A line with an unmapped key is reported and skipped; the engine keeps
/// its state.
pub fn run_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    engine: &mut CalculatorEngine,
    format: &DisplayFormat,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let inputs = match parse_keys(&line) {
            Ok(inputs) => inputs,
            Err(e) => {
                tracing::warn!(line = %line, "Skipping line: {}", e);
                continue;
            }
        };

        for input in inputs {
            engine.apply(input);
        }
        writeln!(writer, "{}", display_text(&engine.render_with(format)))
            .context("Failed to write output")?;
        writer.flush().context("Failed to flush output")?;
    }
    Ok(())
}

/// Interactive line mode on stdin/stdout
pub fn run_headless(config: &Config) -> Result<()> {
    let mut engine = CalculatorEngine::new(config.engine.engine_config());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_lines(
        stdin.lock(),
        stdout.lock(),
        &mut engine,
        &config.display.format(),
    )
}
