//! Command-line interface for `rijndael-cbc`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_cbc::{Padding, Pkcs7Padding, RijndaelCbc, ZeroPadding, VALID_SIZES};

/// Rijndael-CBC CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Rijndael (128/192/256-bit blocks and keys) in CBC mode"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PaddingKind {
    /// PKCS#7 padding (always adds 1..=block_size bytes).
    Pkcs7,
    /// Zero fill to the block boundary.
    Zero,
}

/// Cipher parameters shared by `enc` and `dec`.
#[derive(clap::Args)]
struct CipherArgs {
    /// Key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// IV as hex, exactly one block long.
    #[arg(long, value_name = "HEX")]
    iv_hex: String,
    /// Block size in bytes (16, 24 or 32).
    #[arg(long, default_value_t = 16)]
    block_size: usize,
    /// Padding scheme.
    #[arg(long, value_enum, default_value_t = PaddingKind::Pkcs7)]
    padding: PaddingKind,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Enc {
        #[command(flatten)]
        cipher: CipherArgs,
        /// Plaintext input path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Ciphertext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file.
    Dec {
        #[command(flatten)]
        cipher: CipherArgs,
        /// Ciphertext input path (a multiple of the block size).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Plaintext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run a local demo: random key, IV and message, encrypt and decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Block size in bytes (16, 24 or 32).
        #[arg(long, default_value_t = 32)]
        block_size: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            cipher,
            input,
            output,
        } => cmd_enc(&cipher, &input, &output),
        Commands::Dec {
            cipher,
            input,
            output,
        } => cmd_dec(&cipher, &input, &output),
        Commands::Demo { seed, block_size } => cmd_demo(seed, block_size),
    }
}

fn cmd_enc(args: &CipherArgs, input_path: &Path, output_path: &Path) -> Result<()> {
    let cbc = build_cbc(args)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = cbc.encrypt(&data).context("encrypt")?;
    fs::write(output_path, &ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        "encrypted {} bytes into {} bytes ({})",
        data.len(),
        ciphertext.len(),
        output_path.display()
    );
    Ok(())
}

fn cmd_dec(args: &CipherArgs, input_path: &Path, output_path: &Path) -> Result<()> {
    let cbc = build_cbc(args)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plaintext = cbc.decrypt(&data).context("decrypt")?;
    fs::write(output_path, &plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        "decrypted {} bytes into {} bytes ({})",
        data.len(),
        plaintext.len(),
        output_path.display()
    );
    Ok(())
}

fn cmd_demo(seed: Option<u64>, block_size: usize) -> Result<()> {
    let padding = make_padding(PaddingKind::Pkcs7, block_size)?;
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 32];
    let mut iv = vec![0u8; block_size];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    let mut message = vec![0u8; rng.gen_range(1..=3 * block_size)];
    rng.fill_bytes(&mut message);

    let cbc = RijndaelCbc::new(&key, &iv, padding, block_size).context("build cipher")?;
    debug!("demo: block size {block_size}, {} rounds", cbc.cipher().rounds());

    let ciphertext = cbc.encrypt(&message).context("encrypt")?;
    let decrypted = cbc.decrypt(&ciphertext).context("decrypt")?;

    println!("demo key: {}", hex::encode(key));
    println!("iv: {}", hex::encode(&iv));
    println!("plaintext: {}", hex::encode(&message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn build_cbc(args: &CipherArgs) -> Result<RijndaelCbc<Box<dyn Padding>>> {
    let key = parse_hex(&args.key_hex, "key")?;
    let iv = parse_hex(&args.iv_hex, "IV")?;
    let padding = make_padding(args.padding, args.block_size)?;
    debug!(
        "key {} bytes, block {} bytes, padding {:?}",
        key.len(),
        args.block_size,
        args.padding
    );
    RijndaelCbc::new(&key, &iv, padding, args.block_size).context("build cipher")
}

fn make_padding(kind: PaddingKind, block_size: usize) -> Result<Box<dyn Padding>> {
    if !VALID_SIZES.contains(&block_size) {
        bail!("block size must be 16, 24 or 32 bytes, got {block_size}");
    }
    Ok(match kind {
        PaddingKind::Pkcs7 => Box::new(Pkcs7Padding::new(block_size)),
        PaddingKind::Zero => Box::new(ZeroPadding::new(block_size)),
    })
}

fn parse_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
