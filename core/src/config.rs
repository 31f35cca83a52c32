use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Regler for hvordan importen tolker sammendragsdata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportCfg {
    /// `pwr.max <= 0` betyr at måleren ikke logget topp-effekt.
    pub zero_max_as_absent: bool,
    /// Samme regel for normalisert effekt.
    pub zero_normalized_as_absent: bool,
}

impl Default for ImportCfg {
    fn default() -> Self {
        Self {
            zero_max_as_absent: true,
            zero_normalized_as_absent: true,
        }
    }
}

impl ImportCfg {
    pub fn from_json(s: &str) -> Result<Self> {
        let de = &mut serde_json::Deserializer::from_str(s);
        Ok(serde_path_to_error::deserialize(de)?)
    }
}

/// Leser import-konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_cfg<P: AsRef<Path>>(path: P) -> Result<ImportCfg> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg = ImportCfg::from_json(&contents)?;
        info!("import-konfig lastet fra {} ({:?})", path.display(), cfg);
        Ok(cfg)
    } else {
        warn!(
            "fant ikke import-konfig på {}, bruker default",
            path.display()
        );
        Ok(ImportCfg::default())
    }
}

/// Lagrer import-konfig som JSON (pretty-print).
pub fn save_cfg<P: AsRef<Path>>(cfg: &ImportCfg, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg).map_err(std::io::Error::from)?;
    std::fs::write(path, json)?;
    info!("import-konfig lagret til {}", path.display());
    Ok(())
}
