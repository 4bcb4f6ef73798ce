use std::io::{self, BufWriter, Read, Write};

use checksum_algo::{Algorithm, UnknownAlgorithm};
use clap::Parser;
use log::{debug, trace};
use thiserror::Error;

/// The opening digits of pi, hashed prefix by prefix in pi mode.
pub const PI_DIGITS: &str =
    "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170";

const PI_DIGITS_LEN: usize = 99;
const _: () = assert!(PI_DIGITS.len() == PI_DIGITS_LEN);

// entries per output line in pi mode
const PI_ROW: usize = 8;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Algorithm(#[from] UnknownAlgorithm),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Prints a checksum of stdin's bytes, or of the opening digits of pi.
#[derive(Parser, Debug)]
#[command(name = "checksum", version)]
struct Cli {
    /// Checksum algorithm: adler32, crc32/ieee, xxhash32 or xxhash64
    #[arg(long, default_value = "adler32")]
    algorithm: String,

    /// Checksum the digits of pi instead of stdin
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pi: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub pi: bool,
}

impl Config {
    /// Parses the full argument list, program name included.
    pub fn new<I>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let cli = Cli::try_parse_from(long_flags(args))?;
        let algorithm = cli.algorithm.parse::<Algorithm>()?;

        Ok(Config {
            algorithm,
            pi: cli.pi,
        })
    }
}

/// Rewrites single-dash long flags (`-algorithm=crc32/ieee`, `-pi`) into the
/// double-dash form clap expects. Short flags and everything after `--` are
/// passed through.
fn long_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut out: Vec<String> = args.next().into_iter().collect();
    let mut raw = false;

    for arg in args {
        if raw || arg == "--" {
            raw = true;
            out.push(arg);
            continue;
        }

        let name = arg.split('=').next().unwrap_or_default();
        let single_dash_long = name.len() > 2 && name.starts_with('-') && !name.starts_with("--");

        if single_dash_long {
            out.push(format!("-{arg}"));
        } else {
            out.push(arg);
        }
    }

    out
}

/// The 100 prefixes of [`PI_DIGITS`], from empty up to the whole string.
pub fn pi_prefixes() -> impl Iterator<Item = &'static [u8]> {
    assert_eq!(PI_DIGITS.len(), PI_DIGITS_LEN, "bad PI_DIGITS length");

    (0..=PI_DIGITS_LEN).map(|len| &PI_DIGITS.as_bytes()[..len])
}

pub fn run<R: Read, W: Write>(config: Config, input: R, output: W) -> Result<(), Error> {
    debug!(
        "algorithm={} ({}-bit) pi={}",
        config.algorithm,
        config.algorithm.bits(),
        config.pi
    );

    let mut out = BufWriter::new(output);

    if config.pi {
        write_pi_table(config.algorithm, &mut out)?;
    } else {
        let mut counted = CountingReader { inner: input, bytes: 0 };
        let digest = checksum_algo::digest_reader(config.algorithm, &mut counted)?;
        debug!("hashed {} bytes from input", counted.bytes);

        writeln!(out, "{digest}")?;
    }

    out.flush()?;

    Ok(())
}

fn write_pi_table<W: Write>(algorithm: Algorithm, out: &mut W) -> io::Result<()> {
    for (i, prefix) in pi_prefixes().enumerate() {
        debug!("pi prefix length {}", prefix.len());
        let digest = checksum_algo::digest_reader(algorithm, prefix)?;
        trace!("{digest}");

        write!(out, "{digest},")?;
        if i % PI_ROW == PI_ROW - 1 {
            writeln!(out)?;
        }
    }

    Ok(())
}

struct CountingReader<R> {
    inner: R,
    bytes: u64,
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }
}
