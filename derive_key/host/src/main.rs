//!     cargo run -p derive_key -- --ikm 0b0b0b0b --salt 000102 --info-str "session ticket" --length 48

#![warn(rust_2018_idioms)]

use nifty_ssl::{decode_hex, encode_hex, hkdf};
use std::error::Error;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
struct Cli {
    /// Input keying material, hex encoded
    #[structopt(name = "ikm", long = "--ikm")]
    ikm: String,

    /// Optional salt, hex encoded
    #[structopt(name = "salt", long = "--salt")]
    salt: Option<String>,

    /// Optional context info, hex encoded
    #[structopt(name = "info", long = "--info")]
    info: Option<String>,

    /// Optional context info, taken as UTF-8 text
    #[structopt(name = "info-str", long = "--info-str", conflicts_with = "info")]
    info_str: Option<String>,

    /// Number of bytes to derive
    #[structopt(name = "length", long = "--length", default_value = "32")]
    length: usize,

    /// Pass an log config file path
    #[structopt(name = "log", long = "--log", default_value = "./log/derive_key_log.yaml")]
    log: String,
}

impl Cli {
    fn info_bytes(&self) -> Result<Option<Vec<u8>>, Box<dyn Error>> {
        match (&self.info, &self.info_str) {
            (Some(_), Some(_)) => Err("--info and --info-str are mutually exclusive".into()),
            (Some(hex), None) => Ok(Some(decode_hex(hex)?)),
            (None, Some(text)) => Ok(Some(text.as_bytes().to_vec())),
            (None, None) => Ok(None),
        }
    }
}

/// Derive the key described by `cli` and return it hex encoded.
fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let ikm = decode_hex(&cli.ikm)?;
    let salt = match &cli.salt {
        Some(salt) => Some(decode_hex(salt)?),
        None => None,
    };
    let info = cli.info_bytes()?;

    log::debug!(
        "deriving {} bytes (ikm {} bytes, salt {}, info {})",
        cli.length,
        ikm.len(),
        salt.as_ref().map_or("default".to_string(), |s| format!("{} bytes", s.len())),
        info.as_ref().map_or("empty".to_string(), |i| format!("{} bytes", i.len())),
    );

    let okm = hkdf(&ikm, salt.as_deref(), info.as_deref(), cli.length)?;
    Ok(encode_hex(&okm))
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command line arguments
    let cli = Cli::from_args();

    log4rs::init_file(&cli.log, Default::default())?;

    match run(&cli) {
        Ok(key) => {
            println!("{}", key);
            Ok(())
        }
        Err(err) => {
            log::error!("derive key error: {}", err);
            Err(err)
        }
    }
}
