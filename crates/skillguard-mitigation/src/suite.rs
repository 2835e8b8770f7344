//! The set of enabled detectors, prepared once against a corpus snapshot.
//!
//! Preparation of independent detectors runs in parallel; the suite itself is
//! immutable afterwards and can score every agent of the snapshot from any
//! thread.

use rayon::prelude::*;
use skillguard_core::models::{Feedback, MitigationKind, MitigationResult, Timestamp};
use skillguard_core::traits::IMitigation;
use skillguard_core::MitigationConfig;
use tracing::debug;

use crate::anomaly::AnomalyMitigation;
use crate::corpus::Corpus;
use crate::decay::TemporalDecayMitigation;
use crate::graph_analysis::GraphMitigation;
use crate::jaccard::JaccardMitigation;
use crate::recency::SubmitterRecencyMitigation;
use crate::sybil_rank::SybilRankMitigation;
use crate::temporal::TemporalCorrelationMitigation;
use crate::velocity::VelocityMitigation;

pub struct MitigationSuite {
    config: MitigationConfig,
    /// Enabled detectors in [`MitigationKind::ALL`] order.
    mitigations: Vec<Box<dyn IMitigation>>,
}

impl MitigationSuite {
    pub fn prepare(corpus: &Corpus<'_>, config: &MitigationConfig, now: Timestamp) -> Self {
        let kinds = config.enabled_kinds();
        let mitigations: Vec<Box<dyn IMitigation>> = kinds
            .into_par_iter()
            .map(|kind| build(kind, corpus, config, now))
            .collect();

        debug!(
            corpus_size = corpus.len(),
            enabled = mitigations.len(),
            "mitigation suite prepared"
        );

        Self {
            config: *config,
            mitigations,
        }
    }

    pub fn config(&self) -> &MitigationConfig {
        &self.config
    }

    pub fn kinds(&self) -> Vec<MitigationKind> {
        self.mitigations.iter().map(|m| m.kind()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn IMitigation> {
        self.mitigations.iter().map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.mitigations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mitigations.is_empty()
    }

    /// Every detector's results for `target`, in evaluation order.
    pub fn evaluate(&self, target: &[&Feedback]) -> Vec<(MitigationKind, Vec<MitigationResult>)> {
        self.iter().map(|m| (m.kind(), m.evaluate(target))).collect()
    }
}

impl std::fmt::Debug for MitigationSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MitigationSuite")
            .field("kinds", &self.kinds())
            .finish()
    }
}

fn build(
    kind: MitigationKind,
    corpus: &Corpus<'_>,
    config: &MitigationConfig,
    now: Timestamp,
) -> Box<dyn IMitigation> {
    match kind {
        MitigationKind::GraphAnalysis => Box::new(GraphMitigation::prepare(corpus, &config.graph)),
        MitigationKind::Velocity => Box::new(VelocityMitigation::new(&config.velocity)),
        MitigationKind::Anomaly => Box::new(AnomalyMitigation::prepare(corpus, &config.anomaly)),
        MitigationKind::TemporalDecay => {
            Box::new(TemporalDecayMitigation::new(&config.temporal_decay, now))
        }
        MitigationKind::SubmitterRecency => Box::new(SubmitterRecencyMitigation::prepare(
            corpus,
            &config.submitter_recency,
        )),
        MitigationKind::SybilRank => Box::new(SybilRankMitigation::prepare(corpus, &config.sybil_rank)),
        MitigationKind::Jaccard => Box::new(JaccardMitigation::prepare(corpus, &config.jaccard)),
        MitigationKind::TemporalCorrelation => Box::new(TemporalCorrelationMitigation::prepare(
            corpus,
            &config.temporal_correlation,
        )),
    }
}
