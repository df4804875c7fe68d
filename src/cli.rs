//=========================================================================
// Command Line
//=========================================================================
//
//   tiny_rooms [--config <path.json>] [--tps <ticks per second>]
//
//=========================================================================

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::config::GameConfigOverrides;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub tps: Option<f64>,
}

impl CliArgs {
    pub fn parse_from_env() -> Result<Self> {
        Self::parse(env::args())
    }

    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = CliArgs::default();
        let mut iter = args.into_iter();
        let _ = iter.next(); // program name
        while let Some(raw_flag) = iter.next() {
            let flag = raw_flag.as_ref();
            let Some(key) = flag.strip_prefix("--") else {
                bail!("Unexpected argument '{flag}'. Use --config <path> or --tps <value>.");
            };
            let value = iter.next().ok_or_else(|| anyhow!("Expected a value after '{flag}'"))?.as_ref().to_string();
            match key {
                "config" => parsed.config = Some(PathBuf::from(value)),
                "tps" => {
                    let tps = value.parse::<f64>().with_context(|| format!("Invalid tps '{value}'"))?;
                    if !(tps.is_finite() && tps > 0.0) {
                        bail!("Invalid tps '{value}': must be a positive number");
                    }
                    parsed.tps = Some(tps);
                }
                _ => bail!("Unknown flag '{flag}'. Supported flags: --config, --tps."),
            }
        }
        Ok(parsed)
    }

    pub fn config_overrides(&self) -> GameConfigOverrides {
        GameConfigOverrides { tps: self.tps }
    }
}
