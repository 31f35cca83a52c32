use pyo3::basic::CompareOp;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::config::ImportCfg;
use crate::power::{PowerSummary, Watts};
use crate::summary::SummaryData;

// ──────────────────────────────────────────────────────────────────────────────
// PowerSummary som Python-klasse (les/skriv-attributter, ==, repr)
// ──────────────────────────────────────────────────────────────────────────────

#[pyclass(name = "PowerSummary")]
#[derive(Debug, Clone, Copy)]
struct PyPowerSummary {
    #[pyo3(get, set)]
    average_power: Watts,
    #[pyo3(get, set)]
    maximum_power: Option<Watts>,
    #[pyo3(get, set)]
    normalized_power: Option<Watts>,
}

impl From<PowerSummary> for PyPowerSummary {
    fn from(p: PowerSummary) -> Self {
        Self {
            average_power: p.average_power,
            maximum_power: p.maximum_power,
            normalized_power: p.normalized_power,
        }
    }
}

impl From<PyPowerSummary> for PowerSummary {
    fn from(p: PyPowerSummary) -> Self {
        PowerSummary::with_all(p.average_power, p.maximum_power, p.normalized_power)
    }
}

#[pymethods]
impl PyPowerSummary {
    #[new]
    #[pyo3(signature = (average_power, maximum_power=None, normalized_power=None))]
    fn new(
        average_power: Watts,
        maximum_power: Option<Watts>,
        normalized_power: Option<Watts>,
    ) -> Self {
        PowerSummary::with_all(average_power, maximum_power, normalized_power).into()
    }

    fn __richcmp__(&self, other: PyRef<'_, Self>, op: CompareOp, py: Python<'_>) -> PyObject {
        let (a, b) = (PowerSummary::from(*self), PowerSummary::from(*other));
        match op {
            CompareOp::Eq => (a == b).into_py(py),
            CompareOp::Ne => (a != b).into_py(py),
            _ => py.NotImplemented(),
        }
    }

    fn __repr__(&self) -> String {
        let opt = |w: Option<Watts>| w.map_or_else(|| "None".to_string(), |v| v.to_string());
        format!(
            "PowerSummary(average_power={}, maximum_power={}, normalized_power={})",
            self.average_power,
            opt(self.maximum_power),
            opt(self.normalized_power)
        )
    }

    fn __str__(&self) -> String {
        PowerSummary::from(*self).to_string()
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// JSON-inngang: sammendragsdata (+ valgfri konfig) → PowerSummary | None
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
#[pyo3(signature = (summary_json, cfg_json=None))]
fn power_summary_from_json(
    summary_json: &str,
    cfg_json: Option<&str>,
) -> PyResult<Option<PyPowerSummary>> {
    let cfg = match cfg_json {
        Some(s) => ImportCfg::from_json(s).map_err(|e| PyValueError::new_err(e.to_string()))?,
        None => ImportCfg::default(),
    };
    let data = SummaryData::from_json(summary_json)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let out = data
        .power_summary(&cfg)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(out.map(PyPowerSummary::from))
}

#[pymodule]
fn exercise_power_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyPowerSummary>()?;
    m.add_function(wrap_pyfunction!(power_summary_from_json, m)?)?;
    Ok(())
}
