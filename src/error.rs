//! Diagnostic formatting for the CLI shell. The core itself (scanner,
//! parser, evaluator) never writes to stdout/stderr or touches global
//! state — parser errors come back as a plain `Vec<String>` and
//! evaluation failures are `Value::Error` values, so that both stay
//! total, side-effect-free functions. This module is where the two
//! are turned into what a human reads.

/// Writes the embedding contract's parser-error format: one message
/// per line, indented with a tab, to the given writer.
pub fn print_parse_errors(errors: &[String], out: &mut impl std::io::Write) -> std::io::Result<()> {
    for message in errors {
        writeln!(out, "\t{message}")?;
    }
    Ok(())
}
