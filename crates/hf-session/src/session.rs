//! Analysis session: dataset, roles, selection and flow results in one place.

use std::collections::BTreeMap;

use hf_data::{DataSource, Dataset, Selection};
use hf_flow::{FlowCalculator, FlowError, FlowResult, Propellant};
use hf_metrics::stats::mean;
use hf_metrics::{ComputedMetrics, compute_metrics, moving_average, window_mean};
use hf_roles::{Role, RoleError, RoleMapping, classify_dataset};
use tracing::{debug, info, warn};

use crate::config::{SessionConfig, VenturiDef, default_taps};
use crate::controller::{Emission, Interaction, SelectionController};
use crate::error::{SessionError, SessionResult};

/// Venturi result for one propellant line.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    Computed(FlowResult),
    /// Inputs missing or non-physical for this window.
    Unavailable(FlowError),
    /// The window violated venturi preconditions; the last good result is kept.
    Rejected {
        error: FlowError,
        retained: Option<FlowResult>,
    },
}

impl FlowOutcome {
    /// Current or retained result.
    pub fn result(&self) -> Option<&FlowResult> {
        match self {
            FlowOutcome::Computed(r) => Some(r),
            FlowOutcome::Rejected { retained, .. } => retained.as_ref(),
            FlowOutcome::Unavailable(_) => None,
        }
    }
}

/// Everything computed for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSnapshot {
    /// `None` means the whole dataset.
    pub selection: Option<Selection>,
    pub metrics: ComputedMetrics,
    pub flows: BTreeMap<Propellant, FlowOutcome>,
    /// Average of the per-row venturi mass flow (kg/s) over the window.
    /// Differs from `flows` whenever ΔP varies inside the window, since
    /// ṁ goes with sqrt(ΔP). Rows with reversed or missing pressures are skipped.
    pub row_mean_flows: BTreeMap<Propellant, Result<f64, FlowError>>,
    /// Mid-drag result; never stored as the latest snapshot.
    pub provisional: bool,
}

#[derive(Debug, Clone)]
struct FlowLine {
    calculator: FlowCalculator,
    upstream: Role,
    downstream: Role,
}

impl FlowLine {
    fn from_def(propellant: Propellant, def: &VenturiDef) -> SessionResult<Self> {
        let (upstream, downstream) = def.taps(propellant);
        Ok(Self {
            calculator: FlowCalculator::new(propellant, def.to_parameters()?),
            upstream,
            downstream,
        })
    }
}

#[derive(Debug)]
pub struct AnalysisSession {
    config: SessionConfig,
    dataset: Option<Dataset>,
    mapping: RoleMapping,
    controller: SelectionController,
    lines: BTreeMap<Propellant, FlowLine>,
    latest: Option<AnalysisSnapshot>,
}

impl AnalysisSession {
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let mut lines = BTreeMap::new();
        for propellant in Propellant::ALL {
            if let Some(def) = config.venturi(propellant) {
                lines.insert(propellant, FlowLine::from_def(propellant, def)?);
            }
        }
        Ok(Self {
            config,
            dataset: None,
            mapping: RoleMapping::new(),
            controller: SelectionController::new(0),
            lines,
            latest: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn mapping(&self) -> &RoleMapping {
        &self.mapping
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Latest authoritative (non-provisional) snapshot.
    pub fn latest(&self) -> Option<&AnalysisSnapshot> {
        self.latest.as_ref()
    }

    pub fn calculator(&self, propellant: Propellant) -> Option<&FlowCalculator> {
        self.lines.get(&propellant).map(|line| &line.calculator)
    }

    /// Replace the dataset. The selection is reset before anything is
    /// recomputed against the new rows.
    pub fn load_dataset(&mut self, dataset: Dataset) -> SessionResult<()> {
        self.controller.reset_for(dataset.row_count());
        self.latest = None;
        self.mapping = classify_dataset(&dataset, &self.config.keywords);
        info!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            roles = self.mapping.len(),
            "dataset loaded"
        );
        for role in self.mapping.unassigned(&Role::ALL) {
            debug!(role = %role, "no column matched role");
        }
        self.dataset = Some(dataset);
        self.recompute()
    }

    pub fn load_source<D: DataSource + ?Sized>(&mut self, source: &D) -> SessionResult<()> {
        self.load_dataset(Dataset::from_source(source)?)
    }

    /// Feed one pointer interaction through the controller.
    ///
    /// Returns the snapshot for the emission, if the interaction produced one.
    pub fn handle(&mut self, interaction: Interaction) -> SessionResult<Option<AnalysisSnapshot>> {
        if self.dataset.is_none() {
            return Err(SessionError::NoDataset);
        }
        match self.controller.apply(interaction)? {
            Some(emission) => self.on_emission(emission).map(Some),
            None => Ok(None),
        }
    }

    /// Programmatic selection; invalid selections leave everything unchanged.
    pub fn select(&mut self, selection: Selection) -> SessionResult<AnalysisSnapshot> {
        if self.dataset.is_none() {
            return Err(SessionError::NoDataset);
        }
        let emission = self.controller.select(selection)?;
        self.on_emission(emission)
    }

    fn on_emission(&mut self, emission: Emission) -> SessionResult<AnalysisSnapshot> {
        debug!(?emission, "selection changed");
        let snapshot = self.compute(emission.selection(), emission.is_provisional())?;
        if !snapshot.provisional {
            self.latest = Some(snapshot.clone());
        }
        Ok(snapshot)
    }

    /// Replace one venturi definition. Invalid parameters are rejected and the
    /// previous calculator stays in place.
    pub fn set_venturi(&mut self, propellant: Propellant, def: VenturiDef) -> SessionResult<()> {
        let line = FlowLine::from_def(propellant, &def)?;
        self.lines.insert(propellant, line);
        // results from the old geometry must not be retained
        if let Some(latest) = self.latest.as_mut() {
            latest.flows.remove(&propellant);
            latest.row_mean_flows.remove(&propellant);
        }
        *self.config.venturi_mut(propellant) = Some(def);
        self.recompute()
    }

    pub fn assign_role(&mut self, role: Role, header: &str) -> SessionResult<()> {
        let dataset = self.dataset.as_ref().ok_or(SessionError::NoDataset)?;
        if !dataset.has_column(header) {
            return Err(RoleError::UnknownHeader {
                header: header.to_string(),
            }
            .into());
        }
        self.mapping.assign(role, header)?;
        self.recompute()
    }

    pub fn unassign_role(&mut self, role: Role) -> SessionResult<Option<String>> {
        let previous = self.mapping.unassign(role);
        self.recompute()?;
        Ok(previous)
    }

    /// Recompute the latest snapshot for the current committed selection.
    fn recompute(&mut self) -> SessionResult<()> {
        let Some(dataset) = &self.dataset else {
            return Ok(());
        };
        if dataset.is_empty() {
            self.latest = None;
            return Ok(());
        }
        let selection = self.latest.as_ref().and_then(|s| s.selection);
        let snapshot = self.compute(selection, false)?;
        self.latest = Some(snapshot);
        Ok(())
    }

    fn compute(&self, selection: Option<Selection>, provisional: bool) -> SessionResult<AnalysisSnapshot> {
        let dataset = self.dataset.as_ref().ok_or(SessionError::NoDataset)?;
        let metrics = compute_metrics(dataset, &self.mapping, selection.as_ref())?;

        let flows = Propellant::ALL
            .into_iter()
            .map(|p| (p, self.flow_outcome(dataset, p, selection.as_ref(), &metrics)))
            .collect();

        let row_mean_flows = Propellant::ALL
            .into_iter()
            .map(|p| (p, self.row_mean_flow(dataset, p, &metrics)))
            .collect();

        Ok(AnalysisSnapshot {
            selection,
            metrics,
            flows,
            row_mean_flows,
            provisional,
        })
    }

    fn flow_outcome(
        &self,
        dataset: &Dataset,
        propellant: Propellant,
        selection: Option<&Selection>,
        metrics: &ComputedMetrics,
    ) -> FlowOutcome {
        let Some(line) = self.lines.get(&propellant) else {
            return FlowOutcome::Unavailable(FlowError::MissingInput {
                what: format!("{propellant} venturi parameters"),
            });
        };

        let tap = |role: Role| -> Result<f64, FlowError> {
            let header = self.mapping.get(role).ok_or_else(|| FlowError::MissingInput {
                what: format!("column for role '{role}'"),
            })?;
            window_mean(dataset, header, selection).map_err(|e| FlowError::MissingInput {
                what: format!("{role} pressure: {e}"),
            })
        };
        let pressures = tap(line.upstream).and_then(|up| tap(line.downstream).map(|down| (up, down)));
        let (up, down) = match pressures {
            Ok(p) => p,
            Err(e) => return FlowOutcome::Unavailable(e),
        };

        let unit = self.config.units.pressure;
        let (p_up, p_down) = (unit.to_pressure(up), unit.to_pressure(down));
        let measured = metrics
            .regressed_mass_flow
            .as_ref()
            .ok()
            .filter(|_| self.config.weighed_propellant == Some(propellant))
            .map(|&rate| self.config.units.mass.to_mass_rate(rate));

        let result = match measured {
            Some(mdot) => line.calculator.solve_cda(p_up, p_down, mdot),
            None => line.calculator.mass_flow(p_up, p_down),
        };

        match result {
            Ok(r) => FlowOutcome::Computed(r),
            Err(error) if error.is_rejection() => {
                let retained = self
                    .latest
                    .as_ref()
                    .and_then(|s| s.flows.get(&propellant))
                    .and_then(FlowOutcome::result)
                    .copied();
                warn!(%propellant, %error, "venturi evaluation rejected");
                FlowOutcome::Rejected { error, retained }
            }
            Err(error) => FlowOutcome::Unavailable(error),
        }
    }

    fn row_mean_flow(
        &self,
        dataset: &Dataset,
        propellant: Propellant,
        metrics: &ComputedMetrics,
    ) -> Result<f64, FlowError> {
        let series = self.row_series(dataset, propellant).map_err(|e| match e {
            SessionError::Flow(e) => e,
            other => FlowError::MissingInput {
                what: other.to_string(),
            },
        })?;
        mean(metrics.window.slice(series.as_slice()), "venturi mass flow").map_err(|_| {
            FlowError::NonPhysical {
                what: "no forward-flow samples in window",
            }
        })
    }

    fn row_series(&self, dataset: &Dataset, propellant: Propellant) -> SessionResult<Vec<Option<f64>>> {
        let line = self.lines.get(&propellant).ok_or_else(|| FlowError::MissingInput {
            what: format!("{propellant} venturi parameters"),
        })?;
        let upstream = dataset.column(self.mapping.require(line.upstream)?)?;
        let downstream = dataset.column(self.mapping.require(line.downstream)?)?;

        Ok(line
            .calculator
            .mass_flow_series(upstream, downstream, self.config.units.pressure)?)
    }

    /// Per-row mass flow (kg/s) through one venturi, optionally smoothed.
    ///
    /// `smoothing` overrides the configured window; a window of 0 or 1
    /// returns the raw series.
    pub fn flow_series(
        &self,
        propellant: Propellant,
        smoothing: Option<usize>,
    ) -> SessionResult<Vec<Option<f64>>> {
        let dataset = self.dataset.as_ref().ok_or(SessionError::NoDataset)?;
        let series = self.row_series(dataset, propellant)?;

        match smoothing.or(self.config.smoothing_window) {
            Some(window) if window > 1 => Ok(moving_average(&series, window)),
            _ => Ok(series),
        }
    }

    /// (upstream, downstream) pressure roles read for a propellant.
    pub fn taps(&self, propellant: Propellant) -> (Role, Role) {
        self.lines
            .get(&propellant)
            .map(|line| (line.upstream, line.downstream))
            .unwrap_or_else(|| default_taps(propellant))
    }
}
