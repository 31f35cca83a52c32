use log::{debug, trace};
use serde::Deserialize;

use crate::config::ImportCfg;
use crate::error::{PowerError, Result};
use crate::power::{PowerSummary, Watts};

/// Min/maks/snitt-triplet fra en sammendragsnode (f.eks. `pwr` i watt).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MinMaxAvg {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    pub avg: f64,
}

/// Effekt-delen av et øktsammendrag. Ukjente nøkler ignoreres.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SummaryData {
    #[serde(default, alias = "power")]
    pub pwr: Option<MinMaxAvg>,
    #[serde(default, alias = "normalizedPower", alias = "np")]
    pub normalized_power: Option<f64>,
}

impl SummaryData {
    pub fn from_json(s: &str) -> Result<Self> {
        let de = &mut serde_json::Deserializer::from_str(s);
        Ok(serde_path_to_error::deserialize(de)?)
    }

    /// `Ok(None)` når sammendraget mangler `pwr` (noen klokker logger ingen statistikk).
    pub fn power_summary(&self, cfg: &ImportCfg) -> Result<Option<PowerSummary>> {
        match &self.pwr {
            Some(pwr) => PowerSummary::from_summary(pwr, self.normalized_power, cfg).map(Some),
            None => {
                debug!("sammendrag uten pwr-node, ingen effektdata");
                Ok(None)
            }
        }
    }
}

/// Float-watt -> heltall, kuttet mot null (som short-casten i importen).
fn to_watts(field: &'static str, value: f64) -> Result<Watts> {
    if !value.is_finite() {
        return Err(PowerError::NonFinite { field });
    }
    let t = value.trunc();
    if t < f64::from(Watts::MIN) || t > f64::from(Watts::MAX) {
        return Err(PowerError::OutOfRange { field, value });
    }
    Ok(t as Watts)
}

fn optional_watts(field: &'static str, value: f64, zero_as_absent: bool) -> Result<Option<Watts>> {
    if !value.is_finite() {
        return Err(PowerError::NonFinite { field });
    }
    if zero_as_absent && value <= 0.0 {
        trace!("{field}={value} tolkes som fraværende");
        return Ok(None);
    }
    to_watts(field, value).map(Some)
}

impl PowerSummary {
    /// Bygger sammendraget fra en `pwr`-node og ev. normalisert effekt.
    pub fn from_summary(
        pwr: &MinMaxAvg,
        normalized_power: Option<f64>,
        cfg: &ImportCfg,
    ) -> Result<Self> {
        let average_power = to_watts("average_power", pwr.avg)?;
        let maximum_power = optional_watts("maximum_power", pwr.max, cfg.zero_max_as_absent)?;
        let normalized_power = match normalized_power {
            Some(np) => optional_watts("normalized_power", np, cfg.zero_normalized_as_absent)?,
            None => None,
        };

        let out = Self::with_all(average_power, maximum_power, normalized_power);
        debug!("effekt-sammendrag bygget: {out}");
        Ok(out)
    }
}
