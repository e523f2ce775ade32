//! Environment-based configuration.

use std::env::{self, VarError};

use anyhow::{anyhow, bail, Context};
use itertools::Itertools;
use prism_linalg::{vec3, Vec3f};

const ENV_VAR_SCALE: &str = "PRISM_DEMO_SCALE";
const ENV_VAR_OFFSET: &str = "PRISM_DEMO_OFFSET";

#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Uniform scale factor applied to the model.
    pub scale: f32,
    /// Translation applied after scaling.
    pub offset: Vec3f,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: 2.0,
            offset: vec3(1.0, 2.0, 3.0),
        }
    }
}

impl Config {
    /// Reads the configuration from `PRISM_DEMO_SCALE` and `PRISM_DEMO_OFFSET`, falling back to
    /// the [`Default`] for unset variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(scale) = var(ENV_VAR_SCALE)? {
            config.scale = parse_scale(&scale)
                .with_context(|| format!("invalid value set for `{ENV_VAR_SCALE}`: '{scale}'"))?;
        }
        if let Some(offset) = var(ENV_VAR_OFFSET)? {
            config.offset = parse_offset(&offset)
                .with_context(|| format!("invalid value set for `{ENV_VAR_OFFSET}`: '{offset}'"))?;
        }
        Ok(config)
    }
}

fn var(name: &str) -> anyhow::Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(s)) => bail!(
            "invalid value set for `{name}`: {}",
            s.to_string_lossy()
        ),
    }
}

fn parse_scale(s: &str) -> anyhow::Result<f32> {
    let scale: f32 = s.trim().parse()?;
    if !scale.is_finite() || scale == 0.0 {
        bail!("scale must be finite and non-zero");
    }
    Ok(scale)
}

fn parse_offset(s: &str) -> anyhow::Result<Vec3f> {
    let (x, y, z) = s
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected 3 comma-separated components"))?;
    Ok(vec3(x?, y?, z?))
}
