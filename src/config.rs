//! Configuration for artifact paths and the demo message.
//!
//! The original tool hardcoded its file paths and sample text; here they
//! are configuration values with the same defaults, loadable from a TOML
//! file so the transforms stay callable against any filesystem layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Built-in sample paragraph embedded by the no-argument demo run.
pub const DEMO_TEXT: &str = "For a number of years now, work has been proceeding in order to bring perfection to the crudely conceived idea of a transmission that would not only supply inverse reactive current for use in unilateral phase detractors, but would also be capable of automatically synchronizing cardinal grammeters. Such an instrument is the turbo encabulator. Now basically the only new principle involved is that instead of power being generated by the relative motion of conductors and fluxes, it is produced by the modial interaction of magneto-reluctance and capacitive diractance. The original machine had a base plate of pre-famulated amulite surmounted by a malleable logarithmic casing in such a way that the two spurving bearings were in a direct line with the panametric fan. The latter consisted simply of six hydrocoptic marzlevanes, so fitted to the ambifacient lunar waneshaft that side fumbling was effectively prevented. The main winding was of the normal lotus-o-delta type placed in panendermic semi-boloid slots of the stator, every seventh conductor being connected by a non-reversible tremie pipe to the differential girdle spring on the up end of the grammeters. The turbo-encabulator has now reached a high level of development, and it's being successfully used in the operation of novertrunnions. Moreover, whenever a forescent skor motion is required, it may also be employed in conjunction with a drawn reciprocation dingle arm, to reduce sinusoidal repleneration. It's not cheap, but I'm sure the government will buy it.";

/// Artifact paths and demo text, with the original tool's defaults.
///
/// Every field has a default, so a TOML config file may override any
/// subset of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    /// Encoded image read by the decode demo.
    pub decode_input: PathBuf,
    /// Where the decoded black/white visualization is written.
    pub decode_output: PathBuf,
    /// Cover image used as the encoding substrate.
    pub cover_image: PathBuf,
    /// Where the intermediate rendered-text mask is written.
    pub rendered_text_output: PathBuf,
    /// Where the final encoded image is written.
    pub encode_output: PathBuf,
    /// Text embedded by the encode demo.
    pub demo_text: String,
}

impl Default for StegoConfig {
    fn default() -> Self {
        Self {
            decode_input: PathBuf::from("images/encoded_sample.png"),
            decode_output: PathBuf::from("images/decoded_image.png"),
            cover_image: PathBuf::from("images/samoyed.jpg"),
            rendered_text_output: PathBuf::from("images/written_text.png"),
            encode_output: PathBuf::from("images/encoded_image.png"),
            demo_text: DEMO_TEXT.to_string(),
        }
    }
}

/// Load a TOML configuration file and deserialize it into [`StegoConfig`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StegoConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config = toml::from_str(&content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(config)
}
