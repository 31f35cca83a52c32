use std::fmt;

use serde::{Deserialize, Serialize};

/// Effekt i watt. Kort heltall, samme bredde som watt-feltene i øktmodellen.
pub type Watts = i16;

/// Effekt-sammendrag for en registrert økt.
///
/// Ren verdibeholder: ingen validering, negative verdier godtas som de er.
/// Produsenten (import/parser) er ansvarlig for at tallene gir mening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowerSummary {
    pub average_power: Watts,              // W, alltid satt
    pub maximum_power: Option<Watts>,      // W, ikke alle målere logger topp-effekt
    pub normalized_power: Option<Watts>,   // W, beregnet oppstrøms
}

impl PowerSummary {
    /// Kun snitteffekt; maks og NP er fraværende.
    pub const fn new(average_power: Watts) -> Self {
        Self {
            average_power,
            maximum_power: None,
            normalized_power: None,
        }
    }

    pub const fn with_all(
        average_power: Watts,
        maximum_power: Option<Watts>,
        normalized_power: Option<Watts>,
    ) -> Self {
        Self {
            average_power,
            maximum_power,
            normalized_power,
        }
    }

    #[must_use]
    pub const fn with_maximum_power(mut self, watts: Watts) -> Self {
        self.maximum_power = Some(watts);
        self
    }

    #[must_use]
    pub const fn with_normalized_power(mut self, watts: Watts) -> Self {
        self.normalized_power = Some(watts);
        self
    }
}

fn fmt_opt(f: &mut fmt::Formatter<'_>, label: &str, w: Option<Watts>) -> fmt::Result {
    match w {
        Some(v) => write!(f, "{label} {v} W"),
        None => write!(f, "{label} -"),
    }
}

impl fmt::Display for PowerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "avg {} W, ", self.average_power)?;
        fmt_opt(f, "max", self.maximum_power)?;
        f.write_str(", ")?;
        fmt_opt(f, "NP", self.normalized_power)
    }
}
