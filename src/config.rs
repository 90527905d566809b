//! INI render configuration: where to read the scene, where to write the image, the canvas size,
//! and which optional features to enable.

use anyhow::{anyhow, Context, Result};
use configparser::ini::Ini;
use std::num::NonZeroU16;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub scene: PathBuf,
    pub output: PathBuf,
    pub width: NonZeroU16,
    pub height: NonZeroU16,
    pub features: Features,
}

/// Feature toggles from the `[Feature]` section; anything unset is off.
///
/// `texture`, `parallel`, `acceleration`, and `depthoffield` are accepted for forward
/// compatibility but have no effect on the render.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Features {
    pub shadows: bool,
    pub reflect: bool,
    pub refract: bool,
    pub texture: bool,
    pub parallel: bool,
    pub super_sample: bool,
    pub acceleration: bool,
    pub depth_of_field: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;

        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self> {
        let mut ini = Ini::new();
        ini.read(source.to_owned())
            .map_err(|error| anyhow!("could not parse config file: {error}"))?;

        Ok(Config {
            scene: require(&ini, "IO", "scene")?.into(),
            output: require(&ini, "IO", "output")?.into(),
            width: dimension(&ini, "width")?,
            height: dimension(&ini, "height")?,
            features: Features {
                shadows: feature(&ini, "shadows")?,
                reflect: feature(&ini, "reflect")?,
                refract: feature(&ini, "refract")?,
                texture: feature(&ini, "texture")?,
                parallel: feature(&ini, "parallel")?,
                super_sample: feature(&ini, "super-sample")?,
                acceleration: feature(&ini, "acceleration")?,
                depth_of_field: feature(&ini, "depthoffield")?,
            },
        })
    }
}

fn require(ini: &Ini, section: &str, key: &str) -> Result<String> {
    ini.get(section, key)
        .with_context(|| format!("missing required key {section}/{key}"))
}

fn dimension(ini: &Ini, key: &str) -> Result<NonZeroU16> {
    let value = ini
        .getuint("Canvas", key)
        .map_err(|error| anyhow!("invalid Canvas/{key}: {error}"))?
        .with_context(|| format!("missing required key Canvas/{key}"))?;

    u16::try_from(value)
        .ok()
        .and_then(NonZeroU16::new)
        .with_context(|| format!("Canvas/{key} must be between 1 and {}", u16::MAX))
}

fn feature(ini: &Ini, key: &str) -> Result<bool> {
    let value = ini
        .getboolcoerce("Feature", key)
        .map_err(|error| anyhow!("invalid Feature/{key}: {error}"))?;

    Ok(value.unwrap_or(false))
}
