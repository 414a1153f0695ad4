//! Command-line arguments and dispatch for the `des` binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use crate::frontend;

/// Command-line arguments for the DES-style ECB cipher program.
#[derive(Parser, Debug)]
#[command(name = "des", version, about = "Toy 64-bit block cipher in ECB mode with PKCS#7 padding")]
pub struct Cli {
    /// Mode of operation (enc/dec).
    #[arg(value_enum)]
    pub mode: OperationMode,

    /// Key for the cipher.
    #[arg(short, long, env = "DES_KEY", hide_env_values = true, help = "16 hex chars (8 bytes)")]
    pub key: String,

    /// Text to encrypt.
    #[arg(long, help = "Text to encrypt (enc)")]
    pub text: Option<String>,

    /// Hex ciphertext to decrypt.
    #[arg(long, help = "Hex ciphertext to decrypt (dec)")]
    pub hex: Option<String>,

    /// Path to the input file.
    #[arg(long, help = "Path to the input file")]
    pub infile: Option<PathBuf>,

    /// Path to the output file.
    #[arg(long, help = "Path to the output file")]
    pub outfile: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OperationMode {
    /// Encrypt mode.
    Enc,
    /// Decrypt mode.
    Dec,
}

/// Run one invocation, writing anything meant for the terminal to `out`.
///
/// Missing or empty input options only produce a usage hint; they are not
/// an error.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let key = frontend::parse_key_hex(&cli.key).context("Invalid --key")?;
    info!("mode: {:?}", cli.mode);

    match cli.mode {
        OperationMode::Enc => {
            if let Some(text) = cli.text.as_deref().filter(|t| !t.is_empty()) {
                debug!("encrypting {} bytes of inline text", text.len());
                let ciphertext = des_ecb::encrypt_bytes(text.as_bytes(), &key)?;
                writeln!(out, "{}", hex::encode(ciphertext))?;
            } else if let (Some(infile), Some(outfile)) = (&cli.infile, &cli.outfile) {
                transform_file(infile, outfile, |data| des_ecb::encrypt_bytes(data, &key))?;
            } else {
                writeln!(out, "Provide --text or --infile/--outfile")?;
            }
        }
        OperationMode::Dec => {
            if let Some(hex_input) = cli.hex.as_deref().filter(|h| !h.is_empty()) {
                let ciphertext = frontend::decode_hex(hex_input).context("Invalid --hex")?;
                debug!("decrypting {} bytes of inline ciphertext", ciphertext.len());
                let plaintext = des_ecb::decrypt_bytes(&ciphertext, &key)?;
                writeln!(out, "{}", frontend::display_text(&plaintext))?;
            } else if let (Some(infile), Some(outfile)) = (&cli.infile, &cli.outfile) {
                transform_file(infile, outfile, |data| des_ecb::decrypt_bytes(data, &key))?;
            } else {
                writeln!(out, "Provide --hex or --infile/--outfile")?;
            }
        }
    }

    Ok(())
}

fn transform_file<F>(infile: &Path, outfile: &Path, op: F) -> Result<()>
where
    F: FnOnce(&[u8]) -> des_ecb::Result<Vec<u8>>,
{
    let data = fs::read(infile)
        .with_context(|| format!("Failed to read the input file {}", infile.display()))?;
    info!("read {} bytes from {}", data.len(), infile.display());

    let result = op(&data)?;

    fs::write(outfile, &result)
        .with_context(|| format!("Failed to write the output file {}", outfile.display()))?;
    info!("wrote {} bytes to {}", result.len(), outfile.display());
    Ok(())
}
