//! Server Configuration
//!
//! Settings are resolved in three layers: built-in defaults, then
//! environment variables, then command-line flags.
//!
//! | Setting   | Env                     | Flag                            | Default        |
//! |-----------|-------------------------|---------------------------------|----------------|
//! | bind      | `BIND_ADDR` or `PORT`   | `--bind <addr:port>`, `--port`  | `0.0.0.0:5000` |
//! | seed      | `SEED`                  | `--seed`                        | off            |
//! | log level | `LOG_LEVEL`             | `--log-level <level>`           | `info`         |
//! | CORS      | `CORS_ORIGIN`           | `--cors-origin <origins>`       | `*`            |
//!
//! Unknown flags are rejected so that typos do not go unnoticed.

use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::net::SocketAddr;
use tracing::Level;


pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CORS_ORIGIN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub seed: bool,
    pub log_level: Level,
    /// `*` or a comma-separated list of allowed origins.
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            seed: false,
            log_level: Level::INFO,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads the process environment and arguments.
    pub fn load() -> Result<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::resolve(&env, &args)
    }

    pub fn resolve(env: &HashMap<String, String>, args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(env)?;
        config.apply_args(args)?;
        Ok(config)
    }

    fn apply_env(&mut self, env: &HashMap<String, String>) -> Result<()> {
        if let Some(port) = env.get("PORT") {
            self.bind_addr.set_port(parse_port(port).context("Invalid PORT")?);
        }
        if let Some(addr) = env.get("BIND_ADDR") {
            self.bind_addr = addr
                .parse()
                .with_context(|| format!("Invalid BIND_ADDR {:?}", addr))?;
        }
        if let Some(seed) = env.get("SEED") {
            self.seed = parse_flag(seed);
        }
        if let Some(level) = env.get("LOG_LEVEL") {
            self.log_level = parse_level(level).context("Invalid LOG_LEVEL")?;
        }
        if let Some(origin) = env.get("CORS_ORIGIN") {
            self.cors_origin = origin.clone();
        }
        Ok(())
    }

    fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bind" => {
                    let value = required_value(&mut args, "--bind")?;
                    self.bind_addr = value
                        .parse()
                        .with_context(|| format!("Invalid --bind {:?}", value))?;
                }
                "--port" => {
                    let value = required_value(&mut args, "--port")?;
                    self.bind_addr
                        .set_port(parse_port(value).context("Invalid --port")?);
                }
                "--seed" => self.seed = true,
                "--log-level" => {
                    let value = required_value(&mut args, "--log-level")?;
                    self.log_level = parse_level(value).context("Invalid --log-level")?;
                }
                "--cors-origin" => {
                    self.cors_origin = required_value(&mut args, "--cors-origin")?.to_string();
                }
                other => return Err(anyhow!("Unknown argument {}", other)),
            }
        }
        Ok(())
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--bind <addr:port>] [--port <port>] [--seed] [--log-level <level>] [--cors-origin <origins>]\n\
         Example: {program} --port 5000 --seed"
    )
}

fn required_value<'a>(
    args: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str> {
    args.next()
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("{:?} is not a valid port", raw))
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn parse_level(raw: &str) -> Result<Level> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| anyhow!("{:?} is not one of trace, debug, info, warn, error", raw))
}
