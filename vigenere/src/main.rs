use std::fmt::Write;
use std::process::ExitCode;

use clap::Parser;
use textbook_ciphers::{vigenere, Result, Table, Verbosity};
use tracing::{error, info};

/// Command-line arguments for the Vigenère worked example.
///
/// Without arguments the homework plaintext ASPRAKGANTENG and key ADEL are used.
#[derive(Parser, Debug)]
#[command(name = "vigenere", version)]
struct Cli {
    /// Plaintext to encrypt (letters A-Z, case-insensitive)
    #[arg(long, default_value = "ASPRAKGANTENG")]
    plaintext: String,

    /// Keyword; non-letters are ignored
    #[arg(short, long, default_value = "ADEL")]
    key: String,

    #[command(flatten)]
    verbosity: Verbosity,
}

/// Builds one table from the per-letter steps.
fn steps_table(headers: [&str; 7], steps: &[vigenere::VigenereStep]) -> Table {
    let mut table = Table::new(headers);
    for step in steps {
        table.push_row([
            step.index.to_string(),
            step.input.to_string(),
            step.input_index.to_string(),
            step.key.to_string(),
            step.key_index.to_string(),
            step.output_index.to_string(),
            step.output.to_string(),
        ]);
    }
    table
}

/// Renders the encryption table, ciphertext, decryption table and recovered plaintext.
fn render_report(plaintext: &str, key: &str) -> Result<String> {
    let encryption = vigenere::encryption_steps(plaintext, key)?;
    let ciphertext: String = encryption.iter().map(|step| step.output).collect();
    let decryption = vigenere::decryption_steps(&ciphertext, key)?;
    let recovered: String = decryption.iter().map(|step| step.output).collect();

    // Writing into a String cannot fail
    let mut out = String::new();
    let _ = writeln!(out, "=== VIGENÈRE — ENKRIPSI ===");
    out.push_str(&steps_table(["i", "PT", "n(PT)", "K", "n(K)", "(PT+K) mod26", "CT"], &encryption).render());
    let _ = writeln!(out, "Ciphertext: {ciphertext}\n");

    let _ = writeln!(out, "=== VIGENÈRE — DEKRIPSI ===");
    out.push_str(&steps_table(["i", "CT", "n(CT)", "K", "n(K)", "(CT−K) mod26", "PT"], &decryption).render());
    let _ = writeln!(out, "Plaintext hasil dekripsi: {recovered}");

    Ok(out)
}

/// Main entry point for the Vigenère worked example.
fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.verbosity.setup_logging();
    info!(key = %cli.key, "running Vigenère worked example");

    match render_report(&cli.plaintext, &cli.key) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Vigenère demo aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textbook_ciphers::CipherError;

    const EXPECTED: &str = "\
=== VIGENÈRE — ENKRIPSI ===
 i | PT | n(PT) | K | n(K) | (PT+K) mod26 | CT
---+----+-------+---+------+--------------+---
 1 |  A |     0 | A |    0 |            0 |  A
 2 |  S |    18 | D |    3 |           21 |  V
 3 |  P |    15 | E |    4 |           19 |  T
 4 |  R |    17 | L |   11 |            2 |  C
 5 |  A |     0 | A |    0 |            0 |  A
 6 |  K |    10 | D |    3 |           13 |  N
 7 |  G |     6 | E |    4 |           10 |  K
 8 |  A |     0 | L |   11 |           11 |  L
 9 |  N |    13 | A |    0 |           13 |  N
10 |  T |    19 | D |    3 |           22 |  W
11 |  E |     4 | E |    4 |            8 |  I
12 |  N |    13 | L |   11 |           24 |  Y
13 |  G |     6 | A |    0 |            6 |  G

Ciphertext: AVTCANKLNWIYG

=== VIGENÈRE — DEKRIPSI ===
 i | CT | n(CT) | K | n(K) | (CT−K) mod26 | PT
---+----+-------+---+------+--------------+---
 1 |  A |     0 | A |    0 |            0 |  A
 2 |  V |    21 | D |    3 |           18 |  S
 3 |  T |    19 | E |    4 |           15 |  P
 4 |  C |     2 | L |   11 |           17 |  R
 5 |  A |     0 | A |    0 |            0 |  A
 6 |  N |    13 | D |    3 |           10 |  K
 7 |  K |    10 | E |    4 |            6 |  G
 8 |  L |    11 | L |   11 |            0 |  A
 9 |  N |    13 | A |    0 |           13 |  N
10 |  W |    22 | D |    3 |           19 |  T
11 |  I |     8 | E |    4 |            4 |  E
12 |  Y |    24 | L |   11 |           13 |  N
13 |  G |     6 | A |    0 |            6 |  G

Plaintext hasil dekripsi: ASPRAKGANTENG
";

    #[test]
    fn test_worked_example_report() {
        assert_eq!(render_report("ASPRAKGANTENG", "ADEL").unwrap(), EXPECTED);
    }

    #[test]
    fn test_defaults_match_worked_example() {
        let cli = Cli::parse_from(["vigenere"]);
        assert_eq!(cli.plaintext, "ASPRAKGANTENG");
        assert_eq!(cli.key, "ADEL");
    }

    #[test]
    fn test_lowercase_and_dirty_key() {
        let cli = Cli::parse_from(["vigenere", "--plaintext", "asprakganteng", "-k", "a-d-e-l", "-q"]);
        assert_eq!(render_report(&cli.plaintext, &cli.key).unwrap(), EXPECTED);
    }

    #[test]
    fn test_empty_plaintext() {
        let report = render_report("", "ADEL").unwrap();
        assert!(report.contains("Ciphertext: \n"));
        assert!(report.ends_with("Plaintext hasil dekripsi: \n"));
    }

    #[test]
    fn test_errors_abort() {
        assert_eq!(render_report("ASPRAK", "!!"), Err(CipherError::EmptyKey));
        assert_eq!(
            render_report("ASPRAK GANTENG", "ADEL"),
            Err(CipherError::InvalidCharacter(' '))
        );
    }
}
