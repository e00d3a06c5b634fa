//! Command-line interface for `aes256-core`.

#![forbid(unsafe_code)]

use aes256_core::{encrypt_block, expand_key, Aes256Key, Block, BLOCK_BYTES, KEY_BYTES, ROUNDS};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroizing;

/// Encrypt-only AES-256 CLI.
#[derive(Parser)]
#[command(
    name = "aes256",
    version,
    author,
    about = "Encrypt-only AES-256 block primitive"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block and print the ciphertext as hex.
    Enc {
        /// AES-256 key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the 15 round keys of the expanded key schedule.
    Schedule {
        /// AES-256 key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Flip every key bit for random keys and report output bit diffusion.
    Avalanche {
        /// Number of random keys to sample.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Schedule { key_hex } => cmd_schedule(&key_hex),
        Commands::Avalanche { samples, seed } => cmd_avalanche(samples, seed),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let ciphertext = encrypt_block(&key, &block);
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_schedule(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let schedule = expand_key(&key);
    for round in 0..=usize::from(ROUNDS) {
        let round_key = Zeroizing::new(schedule.round_key(round));
        println!("round {round:2}: {}", hex::encode(*round_key));
    }
    Ok(())
}

fn cmd_avalanche(samples: usize, seed: Option<u64>) -> Result<()> {
    if samples == 0 {
        bail!("samples must be at least 1");
    }
    log::info!("sampling {samples} keys (seed: {seed:?})");
    let mut rng = seeded_rng(seed);
    let report = measure_avalanche(&mut rng, samples)?;
    println!("keys: {}", report.keys);
    println!("bit flips: {}", report.flips);
    println!("mean changed output bits: {:.2}%", report.mean_fraction() * 100.0);
    println!(
        "changed bits per flip: min {} / max {}",
        report.min_changed, report.max_changed
    );
    Ok(())
}

/// Aggregate diffusion statistics over single-bit key flips.
#[derive(Debug)]
struct AvalancheReport {
    keys: usize,
    flips: u64,
    changed_bits: u64,
    min_changed: u32,
    max_changed: u32,
}

impl AvalancheReport {
    fn mean_fraction(&self) -> f64 {
        self.changed_bits as f64 / (self.flips * (BLOCK_BYTES as u64) * 8) as f64
    }
}

fn measure_avalanche(rng: &mut impl RngCore, samples: usize) -> Result<AvalancheReport> {
    let mut plaintext = [0u8; BLOCK_BYTES];
    rng.fill_bytes(&mut plaintext);

    let mut report = AvalancheReport {
        keys: samples,
        flips: 0,
        changed_bits: 0,
        min_changed: u32::MAX,
        max_changed: 0,
    };

    for sample in 0..samples {
        let mut key_bytes = Zeroizing::new([0u8; KEY_BYTES]);
        rng.fill_bytes(&mut key_bytes[..]);
        let baseline = encrypt_block(&Aes256Key::from(*key_bytes), &plaintext);

        for bit in 0..KEY_BYTES * 8 {
            let mut flipped = Aes256Key::from(*key_bytes);
            flipped.0[bit / 8] ^= 1 << (bit % 8);
            let ciphertext = encrypt_block(&flipped, &plaintext);
            let changed: u32 = ciphertext
                .iter()
                .zip(baseline.iter())
                .map(|(a, b)| (a ^ b).count_ones())
                .sum();
            if changed == 0 {
                bail!("sample {sample}: flipping key bit {bit} left the ciphertext unchanged");
            }
            report.flips += 1;
            report.changed_bits += u64::from(changed);
            report.min_changed = report.min_changed.min(changed);
            report.max_changed = report.max_changed.max(changed);
        }
        log::debug!("sample {sample}: {} flips so far", report.flips);
    }

    log::info!(
        "avalanche over {} flips: mean {:.4}",
        report.flips,
        report.mean_fraction()
    );
    Ok(report)
}

fn parse_key_hex(hex_str: &str) -> Result<Aes256Key> {
    let bytes = Zeroizing::new(hex::decode(hex_str.trim()).context("decode key hex")?);
    if bytes.len() != KEY_BYTES {
        bail!("AES-256 key must be 32 bytes (64 hex characters)");
    }
    let mut key = Aes256Key::from([0u8; KEY_BYTES]);
    key.0.copy_from_slice(&bytes);
    Ok(key)
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != BLOCK_BYTES {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; BLOCK_BYTES];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_key_accepts_64_hex_chars() {
        let key = parse_key_hex(
            " 000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f\n",
        )
        .expect("valid key");
        assert_eq!(key.as_bytes()[31], 0x1f);
    }

    #[test]
    fn parse_key_rejects_wrong_length() {
        assert!(parse_key_hex("000102030405060708090a0b0c0d0e0f").is_err());
        assert!(parse_key_hex("zz").is_err());
    }

    #[test]
    fn parse_block_rejects_wrong_length() {
        assert!(parse_block_hex("00112233").is_err());
        assert_eq!(
            parse_block_hex("00112233445566778899aabbccddeeff").expect("valid block")[15],
            0xff
        );
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(9));
        let mut b = seeded_rng(Some(9));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn avalanche_report_is_near_half() {
        let mut rng = seeded_rng(Some(1));
        let report = measure_avalanche(&mut rng, 4).expect("no fixed points");
        assert_eq!(report.flips, 4 * 256);
        let mean = report.mean_fraction();
        assert!((0.45..0.55).contains(&mean), "mean {mean}");
        assert!(report.min_changed > 0);
        assert!(report.max_changed <= 128);
    }
}
