use checksum::{Config, Error};
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let config = Config::new(env::args()).unwrap_or_else(|err| {
        if let Error::Usage(usage) = &err {
            // --help and --version are not failures
            if !usage.use_stderr() {
                usage.exit();
            }
        }
        fail(err)
    });

    if let Err(err) = checksum::run(config, io::stdin().lock(), io::stdout().lock()) {
        fail(err);
    }
}

fn fail(err: Error) -> ! {
    let msg = err.to_string();
    eprintln!("{}", msg.lines().next().unwrap_or_default());
    process::exit(1);
}
