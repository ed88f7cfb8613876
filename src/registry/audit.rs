//! Loading-time consistency checks over the registry.
//!
//! A failing check never stops the dashboard from rendering; findings are
//! logged once per process and reported by the `audit` command.

use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Once;

use dioxus::logger::tracing::{error, info, warn};

use super::{
    schema_rows, Dataset, CHURN_TIERS, CRITICAL_ALERTS, CUSTOMER_STATUS, FRAUD_SEVERITY,
    FRAUD_STATUS, FUNNEL, LEAD_SOURCES, LIFECYCLE_STAGES, MDM_MATCH_TIERS, SALES_REPS, SEGMENTS,
    SENTIMENT,
};
use crate::shared::theme::PALETTE;
use crate::shared::types::{CategoryRecord, CriticalAlert, RankedEntity};

/// Largest gap, in percentage points, tolerated between a stored rate and won/deals.
pub const RATE_TOLERANCE: f64 = 0.5;

/// Valid fraud risk scores.
pub const RISK_RANGE: RangeInclusive<u32> = 1..=100;

pub const SEGMENT_NAMES: &[&str] = &["Enterprise", "Mid-Market", "SMB", "Startup"];
pub const CUSTOMER_STATUS_NAMES: &[&str] = &["Active", "Churned", "At-Risk", "New"];
pub const LIFECYCLE_STAGE_NAMES: &[&str] = &[
    "Champion",
    "Loyal",
    "Growing",
    "Onboarding",
    "Activated",
    "At-Risk",
    "Dormant",
    "Churned",
];
pub const CHURN_TIER_NAMES: &[&str] = &["High", "Medium", "Low"];
pub const FRAUD_SEVERITY_NAMES: &[&str] = &["Critical", "High", "Medium", "Low"];
pub const MATCH_TIER_NAMES: &[&str] = &["AUTO_MERGE", "REVIEW", "NO_MATCH"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FindingKind {
    Empty,
    DuplicateName,
    InvalidMeasure(f64),
    UnknownName,
    RiskOutOfRange(u32),
    WonExceedsDeals {
        won: u32,
        deals: u32,
    },
    TotalMismatch {
        expected: u32,
        actual: f64,
        table: &'static str,
    },
    RateDrift {
        stored: f64,
        implied: f64,
    },
    FunnelPctDrift {
        stored: u32,
        implied: u32,
    },
    PaletteWrap {
        records: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub dataset: Dataset,
    pub record: Option<&'static str>,
    pub kind: FindingKind,
}

impl Finding {
    fn new(dataset: Dataset, record: Option<&'static str>, kind: FindingKind) -> Self {
        Self {
            dataset,
            record,
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            FindingKind::RateDrift { .. }
            | FindingKind::FunnelPctDrift { .. }
            | FindingKind::PaletteWrap { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dataset.name())?;
        if let Some(rec) = self.record {
            write!(f, "[{rec}]")?;
        }
        match &self.kind {
            FindingKind::Empty => write!(f, ": dataset is empty"),
            FindingKind::DuplicateName => write!(f, ": duplicate name"),
            FindingKind::InvalidMeasure(v) => write!(f, ": invalid measure {v}"),
            FindingKind::UnknownName => write!(f, ": name outside the allowed set"),
            FindingKind::RiskOutOfRange(risk) => write!(
                f,
                ": risk {risk} outside {}..={}",
                RISK_RANGE.start(),
                RISK_RANGE.end()
            ),
            FindingKind::WonExceedsDeals { won, deals } => {
                write!(f, ": won {won} exceeds deals {deals}")
            }
            FindingKind::TotalMismatch {
                expected,
                actual,
                table,
            } => write!(
                f,
                ": total {actual} does not match {table} rows ({expected})"
            ),
            FindingKind::RateDrift { stored, implied } => {
                write!(f, ": stored rate {stored} vs won/deals {implied:.1}")
            }
            FindingKind::FunnelPctDrift { stored, implied } => {
                write!(f, ": stored pct {stored} vs visitors ratio {implied}")
            }
            FindingKind::PaletteWrap { records } => write!(
                f,
                ": {records} records share a {}-color palette",
                PALETTE.len()
            ),
        }
    }
}

fn check_categories(dataset: Dataset, records: &[CategoryRecord], out: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for rec in records {
        if !seen.insert(rec.name) {
            out.push(Finding::new(dataset, Some(rec.name), FindingKind::DuplicateName));
        }
        if !rec.value.is_finite() || rec.value < 0.0 {
            out.push(Finding::new(
                dataset,
                Some(rec.name),
                FindingKind::InvalidMeasure(rec.value),
            ));
        }
    }
    let uncolored = records.iter().filter(|r| r.color.is_none()).count();
    if uncolored > PALETTE.len() {
        out.push(Finding::new(
            dataset,
            None,
            FindingKind::PaletteWrap { records: uncolored },
        ));
    }
}

fn check_names(
    dataset: Dataset,
    names: impl IntoIterator<Item = &'static str>,
    allowed: &[&str],
    out: &mut Vec<Finding>,
) {
    for name in names {
        if !allowed.contains(&name) {
            out.push(Finding::new(dataset, Some(name), FindingKind::UnknownName));
        }
    }
}

fn category_names(records: &'static [CategoryRecord]) -> impl Iterator<Item = &'static str> {
    records.iter().map(|r| r.name)
}

fn check_risk(alerts: &[CriticalAlert], out: &mut Vec<Finding>) {
    for alert in alerts {
        if !RISK_RANGE.contains(&alert.risk) {
            out.push(Finding::new(
                Dataset::CriticalAlerts,
                Some(alert.id),
                FindingKind::RiskOutOfRange(alert.risk),
            ));
        }
    }
}

fn check_total(
    dataset: Dataset,
    records: &[CategoryRecord],
    table: &'static str,
    out: &mut Vec<Finding>,
) {
    let Some(expected) = schema_rows(table) else {
        return;
    };
    let actual: f64 = records.iter().map(|r| r.value).sum();
    if (actual - expected as f64).abs() > f64::EPSILON {
        out.push(Finding::new(
            dataset,
            None,
            FindingKind::TotalMismatch {
                expected,
                actual,
                table,
            },
        ));
    }
}

fn check_ranked<T: RankedEntity>(dataset: Dataset, rows: &[T], out: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.id()) {
            out.push(Finding::new(dataset, Some(row.id()), FindingKind::DuplicateName));
        }
        if row.won() > row.deals() {
            out.push(Finding::new(
                dataset,
                Some(row.id()),
                FindingKind::WonExceedsDeals {
                    won: row.won(),
                    deals: row.deals(),
                },
            ));
        }
        let stored = row.stored_rate();
        if !stored.is_finite() || !(0.0..=100.0).contains(&stored) {
            out.push(Finding::new(
                dataset,
                Some(row.id()),
                FindingKind::InvalidMeasure(stored),
            ));
            continue;
        }
        let implied = row.implied_rate();
        if (stored - implied).abs() > RATE_TOLERANCE {
            out.push(Finding::new(
                dataset,
                Some(row.id()),
                FindingKind::RateDrift { stored, implied },
            ));
        }
    }
}

fn check_funnel(out: &mut Vec<Finding>) {
    let Some(first) = FUNNEL.first() else {
        return;
    };
    if first.visitors == 0 {
        return;
    }
    for step in FUNNEL {
        let implied = (step.visitors as f64 / first.visitors as f64 * 100.0).round() as u32;
        if implied != step.pct {
            out.push(Finding::new(
                Dataset::Funnel,
                Some(step.step),
                FindingKind::FunnelPctDrift {
                    stored: step.pct,
                    implied,
                },
            ));
        }
    }
}

/// Runs every check and returns the findings, errors first.
pub fn audit() -> Vec<Finding> {
    let mut out = Vec::new();

    for ds in Dataset::ALL {
        if ds.is_empty() {
            out.push(Finding::new(ds, None, FindingKind::Empty));
        }
        if let Some(records) = ds.categories() {
            check_categories(ds, records, &mut out);
        }
    }

    // Distributions must account for every row of their source table
    let totals = [
        (Dataset::LifecycleStages, LIFECYCLE_STAGES, "dim_customer_lifecycle"),
        (Dataset::ChurnTiers, CHURN_TIERS, "dim_customer_lifecycle"),
        (Dataset::CustomerStatus, CUSTOMER_STATUS, "dim_customer"),
        (Dataset::Sentiment, SENTIMENT, "fact_interactions"),
        (Dataset::FraudSeverity, FRAUD_SEVERITY, "fact_fraud_signals"),
        (Dataset::FraudStatus, FRAUD_STATUS, "fact_fraud_signals"),
        (Dataset::MdmMatchTiers, MDM_MATCH_TIERS, "mdm_match_pairs"),
    ];
    for (ds, records, table) in totals {
        check_total(ds, records, table, &mut out);
    }

    check_names(
        Dataset::Segments,
        SEGMENTS.iter().map(|s| s.name),
        SEGMENT_NAMES,
        &mut out,
    );
    let domains = [
        (Dataset::CustomerStatus, CUSTOMER_STATUS, CUSTOMER_STATUS_NAMES),
        (Dataset::LifecycleStages, LIFECYCLE_STAGES, LIFECYCLE_STAGE_NAMES),
        (Dataset::ChurnTiers, CHURN_TIERS, CHURN_TIER_NAMES),
        (Dataset::FraudSeverity, FRAUD_SEVERITY, FRAUD_SEVERITY_NAMES),
        (Dataset::MdmMatchTiers, MDM_MATCH_TIERS, MATCH_TIER_NAMES),
    ];
    for (ds, records, allowed) in domains {
        check_names(ds, category_names(records), allowed, &mut out);
    }
    check_risk(CRITICAL_ALERTS, &mut out);

    check_ranked(Dataset::SalesReps, SALES_REPS, &mut out);
    check_ranked(Dataset::LeadSources, LEAD_SOURCES, &mut out);
    check_funnel(&mut out);

    out.sort_by(|a, b| b.severity().cmp(&a.severity()));
    out
}

static LOGGED: Once = Once::new();

/// Logs the findings on the first call in this process. Returns whether this
/// call did the logging.
pub fn log_findings_once() -> bool {
    let mut ran = false;
    LOGGED.call_once(|| {
        log_findings();
        ran = true;
    });
    ran
}

/// Logs every finding. Returns the number of errors.
pub fn log_findings() -> usize {
    let findings = audit();
    let mut errors = 0;
    for finding in &findings {
        match finding.severity() {
            Severity::Error => {
                errors += 1;
                error!("[registry] {finding}");
            }
            Severity::Warning => warn!("[registry] {finding}"),
        }
    }
    info!(
        "[registry] audit done: {} dataset(s), {} error(s), {} warning(s)",
        Dataset::ALL.len(),
        errors,
        findings.len() - errors
    );
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_no_errors() {
        let errors: Vec<_> = audit()
            .into_iter()
            .filter(|f| f.severity() == Severity::Error)
            .collect();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn rep_rates_drift_from_counts_and_are_only_warned() {
        let findings = audit();
        let rep12 = findings
            .iter()
            .find(|f| f.dataset == Dataset::SalesReps && f.record == Some("Rep 12"))
            .expect("Rep 12 drift reported");
        assert_eq!(rep12.severity(), Severity::Warning);
        match rep12.kind {
            FindingKind::RateDrift { stored, implied } => {
                assert_eq!(stored, 84.6);
                assert!((implied - 22.0).abs() < 1e-9);
            }
            ref other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn consistent_lead_source_is_not_flagged() {
        // 22 / 161 = 13.66, stored 13.7
        let flagged = audit()
            .iter()
            .any(|f| f.dataset == Dataset::LeadSources && f.record == Some("Product-Led"));
        assert!(!flagged);
    }

    #[test]
    fn funnel_pcts_match_visitors() {
        assert!(!audit().iter().any(|f| f.dataset == Dataset::Funnel));
    }

    #[test]
    fn duplicate_and_negative_records_are_errors() {
        let records = [
            CategoryRecord::new("A", 1.0),
            CategoryRecord::new("A", -2.0),
            CategoryRecord::new("B", f64::NAN),
        ];
        let mut out = Vec::new();
        check_categories(Dataset::Categories, &records, &mut out);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|f| f.severity() == Severity::Error));
        assert_eq!(out[0].kind, FindingKind::DuplicateName);
    }

    #[test]
    fn palette_wrap_is_a_warning() {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"];
        let records: Vec<_> = names.iter().map(|n| CategoryRecord::new(*n, 1.0)).collect();
        let mut out = Vec::new();
        check_categories(Dataset::SourceLinkage, &records, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, FindingKind::PaletteWrap { records: 11 });
        assert_eq!(out[0].severity(), Severity::Warning);
    }

    #[test]
    fn total_mismatch_names_the_table() {
        let records = [CategoryRecord::new("only", 10.0)];
        let mut out = Vec::new();
        check_total(
            Dataset::MdmMatchTiers,
            &records,
            "mdm_match_pairs",
            &mut out,
        );
        assert_eq!(
            out[0].to_string(),
            "mdm_match_tiers: total 10 does not match mdm_match_pairs rows (200)"
        );
    }

    #[test]
    fn out_of_domain_names_are_errors() {
        let severity = [CategoryRecord::new("Severe", 450.0)];
        let tiers = [CategoryRecord::new("MAYBE", 200.0)];
        let mut out = Vec::new();
        check_names(
            Dataset::FraudSeverity,
            severity.iter().map(|r| r.name),
            FRAUD_SEVERITY_NAMES,
            &mut out,
        );
        check_names(
            Dataset::MdmMatchTiers,
            tiers.iter().map(|r| r.name),
            MATCH_TIER_NAMES,
            &mut out,
        );
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|f| f.kind == FindingKind::UnknownName));
        assert!(out.iter().all(|f| f.severity() == Severity::Error));
        assert_eq!(
            out[0].to_string(),
            "fraud_severity[Severe]: name outside the allowed set"
        );
    }

    #[test]
    fn registry_names_stay_in_their_domains() {
        assert!(!audit().iter().any(|f| f.kind == FindingKind::UnknownName));
    }

    #[test]
    fn risk_scores_outside_1_to_100_are_errors() {
        let alert = |id, risk| CriticalAlert {
            id,
            fraud_type: "Phantom Vendor",
            amount: "$1K",
            risk,
            system: "SAP",
        };
        let alerts = [
            alert("FRD-1", 0),
            alert("FRD-2", 1),
            alert("FRD-3", 100),
            alert("FRD-4", 101),
        ];
        let mut out = Vec::new();
        check_risk(&alerts, &mut out);
        let flagged: Vec<_> = out.iter().map(|f| f.record).collect();
        assert_eq!(flagged, vec![Some("FRD-1"), Some("FRD-4")]);
        assert_eq!(out[0].severity(), Severity::Error);
        assert_eq!(
            out[0].to_string(),
            "critical_alerts[FRD-1]: risk 0 outside 1..=100"
        );
    }

    #[test]
    fn registry_alerts_pass_the_risk_check() {
        let findings = audit();
        assert!(findings.iter().all(|f| f.dataset != Dataset::CriticalAlerts));
    }

    #[test]
    fn findings_are_logged_once_per_process() {
        // Whichever caller got here first did the logging
        log_findings_once();
        assert!(!log_findings_once());
        assert!(!log_findings_once());
    }

    #[test]
    fn errors_sort_before_warnings() {
        let findings = audit();
        let first_warning = findings
            .iter()
            .position(|f| f.severity() == Severity::Warning)
            .unwrap_or(findings.len());
        assert!(findings[first_warning..]
            .iter()
            .all(|f| f.severity() == Severity::Warning));
    }
}
