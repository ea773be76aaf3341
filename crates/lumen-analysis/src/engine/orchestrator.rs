//! `ScanEngine`, the orchestrator.
//!
//! Phases: collect nodes in pre-order, filter the catalog by surface once,
//! evaluate node by node (optionally on a rayon pool), then emit events.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use lumen_core::config::LumenConfig;
use lumen_core::errors::{ConfigError, EvaluationError, ScanError};
use lumen_core::events::{
    EventDispatcher, RuleFaultEvent, ScanCompleteEvent, ScanEventHandler, ScanStartedEvent,
};
use lumen_core::{Cancellable, CancellationToken, EvaluationContext, Finding, UiNode};

use super::traversal::pre_order;
use super::types::{RuleFault, ScanOutcome};
use crate::rules::{Rule, RuleCatalog};

/// Findings and faults for a single node, in catalog order.
#[derive(Default)]
struct NodeResult {
    findings: Vec<Finding>,
    faults: Vec<RuleFault>,
}

/// Runs a rule catalog over UI trees. Holds no per-scan state, so one engine
/// can scan many trees, including concurrently.
#[derive(Clone)]
pub struct ScanEngine {
    catalog: RuleCatalog,
    parallel: bool,
    pool: Option<Arc<rayon::ThreadPool>>,
    cancellation: Option<CancellationToken>,
    events: EventDispatcher,
}

impl ScanEngine {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog,
            parallel: false,
            pool: None,
            cancellation: None,
            events: EventDispatcher::new(),
        }
    }

    /// Build an engine from resolved configuration: catalogs, disabled rules,
    /// parallelism and thread count.
    pub fn from_config(config: &LumenConfig) -> Result<Self, ConfigError> {
        let catalog = RuleCatalog::from_config(&config.rules)?;
        let mut engine = Self::new(catalog).with_parallelism(config.scan.effective_parallel());
        if let Some(threads) = config.scan.threads {
            engine = engine
                .with_threads(threads)
                .map_err(|e| ConfigError::InvalidValue {
                    field: "scan.threads".to_string(),
                    message: e.to_string(),
                })?;
        }
        Ok(engine)
    }

    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Evaluate on a dedicated pool of `threads` workers instead of rayon's
    /// global pool. Implies parallel evaluation.
    pub fn with_threads(mut self, threads: usize) -> Result<Self, ScanError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lumen-scan-{i}"))
            .build()
            .map_err(|e| ScanError::ThreadPool {
                message: e.to_string(),
            })?;
        self.pool = Some(Arc::new(pool));
        self.parallel = true;
        Ok(self)
    }

    /// Poll `token` between nodes and stop early once it is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn with_event_handler(mut self, handler: Arc<dyn ScanEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Scan the tree rooted at `root`. Always completes; rule faults are
    /// reported in the outcome rather than aborting the walk.
    pub fn scan(&self, root: &UiNode, ctx: &EvaluationContext) -> ScanOutcome {
        let start = Instant::now();

        // Phase 1: traversal order.
        let nodes = pre_order(root);

        // Phase 2: the context is fixed for the scan, so filter once.
        let rules: Vec<&Arc<dyn Rule>> = self
            .catalog
            .rules()
            .iter()
            .filter(|rule| rule.is_applicable(ctx.surface))
            .collect();
        debug!(
            app = %ctx.app_name,
            surface = %ctx.surface,
            nodes = nodes.len(),
            rules = rules.len(),
            parallel = self.parallel,
            "scan started"
        );
        self.events.emit_scan_started(&ScanStartedEvent {
            app_name: ctx.app_name.clone(),
            surface: ctx.surface,
            rule_count: rules.len(),
        });

        // Phase 3: evaluation.
        let results = if self.parallel {
            match &self.pool {
                Some(pool) => pool.install(|| self.evaluate_parallel(&nodes, &rules, ctx)),
                None => self.evaluate_parallel(&nodes, &rules, ctx),
            }
        } else {
            self.evaluate_sequential(&nodes, &rules, ctx)
        };

        let nodes_visited = results.len();
        let cancelled = nodes_visited < nodes.len();
        let mut outcome = ScanOutcome {
            nodes_visited,
            cancelled,
            ..ScanOutcome::default()
        };
        for result in results {
            outcome.findings.extend(result.findings);
            outcome.faults.extend(result.faults);
        }

        // Phase 4: report.
        for fault in &outcome.faults {
            self.events.emit_rule_fault(&RuleFaultEvent {
                rule_id: fault.rule_id.clone(),
                node_id: fault.node_id.clone(),
                message: fault.error.to_string(),
            });
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        if cancelled {
            warn!(
                nodes_visited,
                nodes_total = nodes.len(),
                "scan cancelled; findings are partial"
            );
        }
        info!(
            app = %ctx.app_name,
            nodes_visited,
            findings = outcome.findings.len(),
            faults = outcome.faults.len(),
            duration_ms,
            "scan complete"
        );
        self.events.emit_scan_complete(&ScanCompleteEvent {
            nodes_visited,
            findings: outcome.findings.len(),
            faults: outcome.faults.len(),
            cancelled,
            duration_ms,
        });

        outcome
    }

    fn evaluate_sequential(
        &self,
        nodes: &[&UiNode],
        rules: &[&Arc<dyn Rule>],
        ctx: &EvaluationContext,
    ) -> Vec<NodeResult> {
        let mut results = Vec::with_capacity(nodes.len());
        for node in nodes {
            if self.is_cancelled() {
                break;
            }
            results.push(evaluate_node(node, rules, ctx));
        }
        results
    }

    /// Nodes are tagged with their traversal index and sorted back into
    /// order. Once cancellation is observed, only the unbroken prefix of
    /// evaluated nodes is kept, so a partial result is still a pre-order prefix.
    fn evaluate_parallel(
        &self,
        nodes: &[&UiNode],
        rules: &[&Arc<dyn Rule>],
        ctx: &EvaluationContext,
    ) -> Vec<NodeResult> {
        let mut tagged: Vec<(usize, Option<NodeResult>)> = nodes
            .par_iter()
            .enumerate()
            .map(|(index, node)| {
                if self.is_cancelled() {
                    (index, None)
                } else {
                    (index, Some(evaluate_node(node, rules, ctx)))
                }
            })
            .collect();
        tagged.sort_unstable_by_key(|(index, _)| *index);

        tagged
            .into_iter()
            .map_while(|(_, result)| result)
            .collect()
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}

/// Run every rule against one node, isolating panics per rule.
fn evaluate_node(node: &UiNode, rules: &[&Arc<dyn Rule>], ctx: &EvaluationContext) -> NodeResult {
    let mut result = NodeResult::default();
    for rule in rules {
        match catch_unwind(AssertUnwindSafe(|| rule.evaluate(node, ctx))) {
            Ok(findings) => result.findings.extend(findings),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(
                    rule = rule.id(),
                    node = %node.id,
                    error = %message,
                    "rule faulted; continuing scan"
                );
                result.faults.push(RuleFault {
                    rule_id: rule.id().to_string(),
                    node_id: node.id.clone(),
                    error: EvaluationError::RulePanic { message },
                });
            }
        }
    }
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl std::fmt::Debug for ScanEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanEngine")
            .field("catalog", &self.catalog)
            .field("parallel", &self.parallel)
            .field("threads", &self.pool.as_ref().map(|p| p.current_num_threads()))
            .field("cancellable", &self.cancellation.is_some())
            .field("events", &self.events)
            .finish()
    }
}
