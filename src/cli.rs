/*
 * ==========================================================================
 * TIB - TI-BASIC Syntax Analyzer
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the TIB syntax analyzer project.
 *
 * TIB is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, info};

use tib::ast::{render_tree, StmtKind};
use tib::diagnostics::DiagnosticPrinter;
use tib::lexer::Lexer;
use tib::{Grammar, ParseOutput};

#[derive(Parser, Debug)]
#[command(name = "tib", version, about = "Syntax analyzer for TI-BASIC style programs")]
pub struct Cli {
    /// Program source file
    pub input: PathBuf,

    /// Output form for the syntax tree
    #[arg(short, long, value_enum, default_value_t = Emit::Tree)]
    pub emit: Emit,

    /// Print the token stream before parsing
    #[arg(short, long)]
    pub tokens: bool,

    /// Don't write to standard output
    #[arg(short, long)]
    pub quiet: bool,

    /// Save the output next to the input as `<INPUT>.out`
    #[arg(short, long)]
    pub write: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Indented tree
    Tree,
    /// One parenthesized prefix form per statement
    Sexpr,
    /// Re-serialized program text
    Source,
    /// Program and diagnostics as JSON
    Json,
}

/// Runs the analyzer as configured on the command line.
///
/// # Exit Codes
/// - `0` → parsed without diagnostics
/// - `1` → at least one diagnostic
/// - `2` → the input (or the `--write` target) could not be accessed
pub fn run(cli: &Cli) -> ExitCode {
    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read {}: {}", cli.input.display(), err);
            return ExitCode::from(2);
        }
    };

    let grammar = Grammar::default();
    let file_name = cli.input.display().to_string();
    info!("analyzing {}", file_name);

    let mut rendered = String::new();

    if cli.tokens {
        rendered.push_str(&render_tokens(&source, &grammar));
        rendered.push('\n');
    }

    let output = tib::parse_with(&source, &grammar);
    debug!(
        "{} statements, {} diagnostics",
        output.program.len(),
        output.diagnostics.len()
    );

    match render(&output, cli.emit) {
        Ok(text) => rendered.push_str(&text),
        Err(err) => {
            eprintln!("error: could not render output: {}", err);
            return ExitCode::from(2);
        }
    }

    if !cli.quiet {
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
    }

    if cli.write {
        let target = output_path(&cli.input);
        if let Err(err) = fs::write(&target, &rendered) {
            eprintln!("error: could not write {}: {}", target.display(), err);
            return ExitCode::from(2);
        }
        info!("wrote {}", target.display());
    }

    if output.has_errors() {
        let printer = DiagnosticPrinter::new(file_name, source.as_str());
        eprint!("{}", printer.render_all(&output.diagnostics));
    }

    if output.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Renders the parse result in the requested form.
pub fn render(output: &ParseOutput, emit: Emit) -> Result<String, serde_json::Error> {
    let text = match emit {
        Emit::Tree => render_tree(&output.program),
        Emit::Source => output.program.to_source(),
        Emit::Json => serde_json::to_string_pretty(output)?,
        Emit::Sexpr => output
            .program
            .iter()
            .map(|stmt| match &stmt.kind {
                StmtKind::Expression(expr) => expr.to_sexpr(),
                StmtKind::Command(command) => {
                    let mut line = format!("({}", command.name.trim_end_matches('('));
                    if let Some(label) = &command.label {
                        line.push(' ');
                        line.push_str(label);
                    }
                    for arg in &command.arguments {
                        line.push(' ');
                        line.push_str(&arg.to_sexpr());
                    }
                    line.push(')');
                    line
                }
                StmtKind::Empty => String::new(),
                StmtKind::Invalid(_) => "<invalid>".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(text)
}

/// Lists every token as `line:column kind lexeme`, continuing past
/// lexical errors.
pub fn render_tokens(source: &str, grammar: &Grammar) -> String {
    let mut out = String::new();
    let mut lexer = Lexer::new(source, grammar);
    let mut count = 0;

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                count += 1;
                let _ = writeln!(out, "{} {:?} {:?}", token.span, token.kind, token.lexeme);
            }
            Err(err) => {
                let _ = writeln!(out, "{} error: {}", err.span, err.message);
                lexer.recover();
            }
        }
    }

    let _ = writeln!(out, "Total Tokens = {}", count);
    out
}

fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".out");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_parse() {
        let cli = Cli::try_parse_from(["tib", "prgm.tib", "--emit", "json", "-q", "-w"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("prgm.tib"));
        assert_eq!(cli.emit, Emit::Json);
        assert!(cli.quiet);
        assert!(cli.write);
        assert!(!cli.tokens);
    }

    #[test]
    fn emit_defaults_to_tree() {
        let cli = Cli::try_parse_from(["tib", "prgm.tib"]).unwrap();
        assert_eq!(cli.emit, Emit::Tree);
    }

    #[test]
    fn sexpr_output_has_one_line_per_statement() {
        let output = tib::parse("2+3*4::Disp 1\n$");
        let text = render(&output, Emit::Sexpr).unwrap();

        assert_eq!(text, "(+ 2 (* 3 4))\n\n(Disp 1)\n<invalid>");
    }

    #[test]
    fn json_output_carries_diagnostics() {
        let output = tib::parse("$:5");
        let text = render(&output, Emit::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["diagnostics"].as_array().unwrap().len(), 1);
        assert_eq!(value["diagnostics"][0]["code"], "E_LEX");
        assert_eq!(value["program"]["statements"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn token_listing_survives_bad_characters() {
        let grammar = Grammar::default();
        let listing = render_tokens("1 $ 2\n3", &grammar);

        assert!(listing.contains("error: unrecognized character '$'"));
        assert!(listing.contains("\"3\""));
        assert!(listing.ends_with("Total Tokens = 4\n"));
    }

    #[test]
    fn output_file_sits_next_to_input() {
        assert_eq!(output_path(Path::new("dir/prgm.tib")), PathBuf::from("dir/prgm.tib.out"));
    }
}
