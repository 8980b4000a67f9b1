use std::fmt::Write;
use std::process::ExitCode;

use clap::Parser;
use num_bigint::BigUint;
use textbook_ciphers::{elgamal, ElGamalParams, Result, Table, Verbosity};
use tracing::{error, info};

/// ElGamal worked example: encrypts a message letter by letter (A=0..Z=25)
/// with one ephemeral key for the whole message and prints every step.
///
/// Without arguments the homework values p=37, g=3, x=2, k=15 and
/// plaintext EZKRIPTOGRAFI are used.
#[derive(Parser, Debug)]
#[command(name = "elgamal", version)]
struct Args {
    /// Prime modulus
    #[arg(long, default_value = "37")]
    p: BigUint,

    /// Generator
    #[arg(long, default_value = "3")]
    g: BigUint,

    /// Private exponent, 1 <= x < p-1
    #[arg(long, default_value = "2")]
    x: BigUint,

    /// Ephemeral key reused for every letter, 1 <= k < p-1
    #[arg(long, default_value = "15")]
    k: BigUint,

    /// Message to encrypt (letters A-Z, case-insensitive)
    #[arg(long, default_value = "EZKRIPTOGRAFI")]
    plaintext: String,

    #[command(flatten)]
    verbosity: Verbosity,
}

/// Renders the full report: parameters, encryption table, ciphertext line,
/// decryption table and recovered plaintext.
fn render_report(params: &ElGamalParams, plaintext: &str) -> Result<String> {
    let ElGamalParams { p, g, x, k } = params;
    let y = params.public_key();
    let c1 = params.c1();
    let shared = params.shared_secret();

    let encryption = elgamal::encryption_steps(plaintext, params)?;
    let pairs: Vec<_> = encryption.iter().map(|step| step.pair.clone()).collect();
    let decryption = elgamal::decryption_steps(&pairs, p, x)?;

    // Writing into a String cannot fail
    let mut out = String::new();
    let _ = writeln!(out, "=== ELGAMAL — PARAMETER & RUMUS ===");
    let _ = writeln!(out, "p={p}, g={g}, x={x}, k={k}");
    let _ = writeln!(out, "y = g^x mod p = {g}^{x} mod {p} = {y}");
    let _ = writeln!(out, "c1 = g^k mod p = {g}^{k} mod {p} = {c1}");
    let _ = writeln!(out, "shared = y^k mod p = {y}^{k} mod {p} = {shared}\n");

    let _ = writeln!(out, "=== ELGAMAL — ENKRIPSI (per huruf) ===");
    let mut table = Table::new(["i", "PT", "M", "c1", "shared (y^k mod p)", "CT (c1,c2)"]);
    for step in &encryption {
        table.push_row([
            step.index.to_string(),
            step.letter.to_string(),
            step.m.to_string(),
            step.pair.c1.to_string(),
            step.shared.to_string(),
            step.pair.tuple(),
        ]);
    }
    out.push_str(&table.render());

    let _ = writeln!(out, "Ciphertext (barisan pasangan):");
    let line: Vec<String> = pairs.iter().map(ToString::to_string).collect();
    let _ = writeln!(out, "{}\n", line.join(" "));

    let _ = writeln!(out, "=== ELGAMAL — DEKRIPSI (per huruf) ===");
    let mut table = Table::new(["i", "CT", "s=c1^x mod p", "s^{-1}", "m", "PT"]);
    for step in &decryption {
        table.push_row([
            step.index.to_string(),
            step.pair.tuple(),
            step.shared.to_string(),
            step.shared_inverse.to_string(),
            step.m.to_string(),
            step.letter.to_string(),
        ]);
    }
    out.push_str(&table.render());

    let recovered: String = decryption.iter().map(|step| step.letter).collect();
    let _ = writeln!(out, "Plaintext hasil dekripsi: {recovered}");

    Ok(out)
}

fn run(args: Args) -> Result<()> {
    let params = ElGamalParams::new(args.p, args.g, args.x, args.k)?;
    info!(p = %params.p, g = %params.g, "running ElGamal worked example");

    let report = render_report(&params, &args.plaintext)?;
    print!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.verbosity.setup_logging();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "ElGamal demo aborted");
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
=== ELGAMAL — PARAMETER & RUMUS ===
p=37, g=3, x=2, k=15
y = g^x mod p = 3^2 mod 37 = 9
c1 = g^k mod p = 3^15 mod 37 = 11
shared = y^k mod p = 9^15 mod 37 = 10

=== ELGAMAL — ENKRIPSI (per huruf) ===
 i | PT |  M | c1 | shared (y^k mod p) | CT (c1,c2)
---+----+----+----+--------------------+-----------
 1 |  E |  4 | 11 |                 10 |    (11, 3)
 2 |  Z | 25 | 11 |                 10 |   (11, 28)
 3 |  K | 10 | 11 |                 10 |   (11, 26)
 4 |  R | 17 | 11 |                 10 |   (11, 22)
 5 |  I |  8 | 11 |                 10 |    (11, 6)
 6 |  P | 15 | 11 |                 10 |    (11, 2)
 7 |  T | 19 | 11 |                 10 |    (11, 5)
 8 |  O | 14 | 11 |                 10 |   (11, 29)
 9 |  G |  6 | 11 |                 10 |   (11, 23)
10 |  R | 17 | 11 |                 10 |   (11, 22)
11 |  A |  0 | 11 |                 10 |    (11, 0)
12 |  F |  5 | 11 |                 10 |   (11, 13)
13 |  I |  8 | 11 |                 10 |    (11, 6)

Ciphertext (barisan pasangan):
11:3 11:28 11:26 11:22 11:6 11:2 11:5 11:29 11:23 11:22 11:0 11:13 11:6

=== ELGAMAL — DEKRIPSI (per huruf) ===
 i |       CT | s=c1^x mod p | s^{-1} |  m | PT
---+----------+--------------+--------+----+---
 1 |  (11, 3) |           10 |     26 |  4 |  E
 2 | (11, 28) |           10 |     26 | 25 |  Z
 3 | (11, 26) |           10 |     26 | 10 |  K
 4 | (11, 22) |           10 |     26 | 17 |  R
 5 |  (11, 6) |           10 |     26 |  8 |  I
 6 |  (11, 2) |           10 |     26 | 15 |  P
 7 |  (11, 5) |           10 |     26 | 19 |  T
 8 | (11, 29) |           10 |     26 | 14 |  O
 9 | (11, 23) |           10 |     26 |  6 |  G
10 | (11, 22) |           10 |     26 | 17 |  R
11 |  (11, 0) |           10 |     26 |  0 |  A
12 | (11, 13) |           10 |     26 |  5 |  F
13 |  (11, 6) |           10 |     26 |  8 |  I

Plaintext hasil dekripsi: EZKRIPTOGRAFI
";

    #[test]
    fn test_worked_example_report() {
        let report = render_report(&ElGamalParams::worked_example(), "EZKRIPTOGRAFI").unwrap();
        assert_eq!(report, EXPECTED);
    }

    #[test]
    fn test_defaults_match_worked_example() {
        let args = Args::parse_from(["elgamal"]);
        let params = ElGamalParams::new(args.p, args.g, args.x, args.k).unwrap();
        assert_eq!(params, ElGamalParams::worked_example());
        assert_eq!(args.plaintext, "EZKRIPTOGRAFI");
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["elgamal", "--p", "41", "--k", "7", "--plaintext", "abc", "-vv"]);
        assert_eq!(args.p, BigUint::from(41u32));
        assert_eq!(args.k, BigUint::from(7u32));
        let params = ElGamalParams::new(args.p, args.g, args.x, args.k).unwrap();
        let report = render_report(&params, &args.plaintext).unwrap();
        assert!(report.ends_with("Plaintext hasil dekripsi: ABC\n"));
    }

    #[test]
    fn test_invalid_plaintext_aborts() {
        let params = ElGamalParams::worked_example();
        assert_eq!(
            render_report(&params, "EZ-KRIP"),
            Err(CipherError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn test_invalid_parameters_abort() {
        let args = Args::parse_from(["elgamal", "--x", "0"]);
        assert!(matches!(run(args), Err(CipherError::InvalidParameter(_))));
    }
}
