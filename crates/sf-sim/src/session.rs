//! A run session: one store layout, repeated runs, and proposed changes.
//!
//! The session keeps the layout between runs, the results of the most recent
//! run, and at most one pending layout proposal.  Every run starts from a
//! fresh model (new shoppers, empty heatmap) seeded from the session's root
//! RNG, so back-to-back runs differ but a whole session replays from its seed.

use log::{debug, info};

use sf_agent::AgentSnapshot;
use sf_core::{SimConfig, SimRng};
use sf_layout::{FloorPlan, reference_layout};

use crate::{
    AdvisoryRequest, Heatmap, LayoutAdvisor, LayoutProposal, SimError, SimObserver, SimResult,
    StoreModelBuilder, TrafficReport,
};

/// Results of one completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// 1-based run number within the session.
    pub run:          u64,
    pub heatmap:      Heatmap,
    pub report:       TrafficReport,
    pub interactions: u64,
    /// Ticks executed.
    pub ticks:        u64,
    /// Shopper state at the end of the run.
    pub shoppers:     Vec<AgentSnapshot>,
}

pub struct Session {
    config:   SimConfig,
    plan:     FloorPlan,
    proposal: Option<LayoutProposal>,
    last:     Option<RunSummary>,
    runs:     u64,
    rng:      SimRng,
}

impl Session {
    /// A session on the reference layout at the configured dimensions.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let plan = reference_layout(config.width, config.height);
        Ok(Self::from_parts(config, plan))
    }

    /// A session on a caller-supplied layout, repaired to the configured
    /// dimensions.
    pub fn with_plan<S: AsRef<str>>(config: SimConfig, rows: &[S]) -> SimResult<Self> {
        config.validate()?;
        let plan = FloorPlan::sanitize(rows, config.width, config.height);
        Ok(Self::from_parts(config, plan))
    }

    fn from_parts(config: SimConfig, plan: FloorPlan) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, plan, proposal: None, last: None, runs: 0, rng }
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run a full simulation on the current layout.
    ///
    /// Replaces the previous run's results and drops any pending proposal.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<&RunSummary> {
        let rng = self.rng.child(self.runs);
        let mut model = StoreModelBuilder::new(self.config.clone(), self.plan.rows())
            .rng(rng)
            .build()?;
        model.run(observer);

        self.runs += 1;
        self.proposal = None;
        info!("session run {} complete: {}", self.runs, model.traffic_report());

        let summary = RunSummary {
            run:          self.runs,
            heatmap:      model.heatmap().clone(),
            report:       model.traffic_report(),
            interactions: model.total_interactions(),
            ticks:        model.current_tick().0,
            shoppers:     model.snapshots(),
        };
        Ok(&*self.last.insert(summary))
    }

    // ── Layout ────────────────────────────────────────────────────────────

    /// Replace the layout (e.g. after an edit).  Clears results and any
    /// pending proposal.
    pub fn set_plan<S: AsRef<str>>(&mut self, rows: &[S]) {
        self.plan = FloorPlan::sanitize(rows, self.config.width, self.config.height);
        self.clear_results();
    }

    /// Go back to the reference layout.  Clears results and any pending
    /// proposal.
    pub fn reset_layout(&mut self) {
        self.plan = reference_layout(self.config.width, self.config.height);
        self.clear_results();
        debug!("session layout reset to reference");
    }

    // ── Proposals ─────────────────────────────────────────────────────────

    /// Ask `advisor` for a proposal based on the last run.
    ///
    /// Fails with [`SimError::NoReport`] before the first run.  An advisor
    /// error is returned as-is and leaves any earlier proposal in place.
    pub fn request_proposal<A: LayoutAdvisor>(&mut self, advisor: &A) -> SimResult<&LayoutProposal> {
        let report = self.last.as_ref().map(|s| s.report).ok_or(SimError::NoReport)?;
        let request = AdvisoryRequest::new(&self.plan, report);
        let proposal = advisor.propose(&request)?;
        Ok(self.set_proposal(proposal))
    }

    /// Store a proposal, repaired to the session dimensions.
    pub fn set_proposal(&mut self, proposal: LayoutProposal) -> &LayoutProposal {
        let proposal = proposal.sanitized(self.config.width, self.config.height);
        debug!("layout proposal stored ({} suggestions)", proposal.rationale.len());
        self.proposal.insert(proposal)
    }

    /// Drop the pending proposal without applying it.
    pub fn discard_proposal(&mut self) -> Option<LayoutProposal> {
        self.proposal.take()
    }

    /// Make the pending proposal the current layout and clear the previous
    /// run's results.  Returns `false` if nothing was pending.
    pub fn apply_proposal(&mut self) -> bool {
        let Some(proposal) = self.proposal.take() else {
            return false;
        };
        self.plan = proposal.to_plan(self.config.width, self.config.height);
        self.last = None;
        debug!("layout proposal applied");
        true
    }

    fn clear_results(&mut self) {
        self.last = None;
        self.proposal = None;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    pub fn proposal(&self) -> Option<&LayoutProposal> {
        self.proposal.as_ref()
    }

    pub fn last_run(&self) -> Option<&RunSummary> {
        self.last.as_ref()
    }

    /// Completed runs so far.
    pub fn runs(&self) -> u64 {
        self.runs
    }
}
