// File: crates/vitals-core/src/vitals.rs
// Summary: The three vital-sign series (syst, dias, pulse) and the one-shot plot handler.

use tracing::debug;

use crate::error::Result;
use crate::options::PlotOptions;
use crate::sample::{sample, Domain, SeriesFn};
use crate::series::Series;
use crate::target::PlotTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VitalSign {
    Systolic,
    Diastolic,
    Pulse,
}

impl VitalSign {
    /// Plotting order.
    pub const ALL: [VitalSign; 3] = [VitalSign::Systolic, VitalSign::Diastolic, VitalSign::Pulse];

    pub fn name(self) -> &'static str {
        match self {
            VitalSign::Systolic => "syst",
            VitalSign::Diastolic => "dias",
            VitalSign::Pulse => "pulse",
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            VitalSign::Systolic => "syst(x)",
            VitalSign::Diastolic => "dias(x)",
            VitalSign::Pulse => "pulse(x)",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name().eq_ignore_ascii_case(name))
    }
}

/// Caller-supplied function for each vital sign.
#[derive(Clone, Copy)]
pub struct VitalFunctions<'a> {
    pub syst: &'a dyn SeriesFn,
    pub dias: &'a dyn SeriesFn,
    pub pulse: &'a dyn SeriesFn,
}

impl<'a> VitalFunctions<'a> {
    pub fn get(&self, sign: VitalSign) -> &'a dyn SeriesFn {
        match sign {
            VitalSign::Systolic => self.syst,
            VitalSign::Diastolic => self.dias,
            VitalSign::Pulse => self.pulse,
        }
    }
}

/// Sample syst, dias and pulse over `domain`, in that order.
pub fn generate(domain: &Domain, fns: &VitalFunctions<'_>) -> Result<Vec<Series>> {
    VitalSign::ALL
        .iter()
        .map(|&sign| sample(sign.label(), domain, fns.get(sign)))
        .collect()
}

/// Generate the three series and hand them to `target` in a single plot call.
pub fn plot_vitals(
    target: &mut dyn PlotTarget,
    domain: &Domain,
    fns: &VitalFunctions<'_>,
    options: &PlotOptions,
) -> Result<()> {
    let series = generate(domain, fns)?;
    debug!(series = series.len(), points = domain.len(), "plotting vitals");
    target.plot(&series, options)
}
