//! Compiled-in datasets backing every tab.
//!
//! All records are `'static` and `Copy`; consumers get shared slices and can
//! not mutate them.

pub mod audit;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::shared::theme::{
    Color, ACCENT, BLUE, CRIMSON, CYAN, GOLD, GREEN, LIME, NEUTRAL, PINK, PURPLE, RED, SLATE, TEAL,
};
use crate::shared::types::{
    Campaign, CategoryRecord, CountryRevenue, CriticalAlert, FunnelStep, HourlyTraffic,
    LeadSource, LifecycleDefinition, MonthlyRevenue, PipelineStage, Referrer, SalesRep,
    SchemaTable, SegmentRevenue,
};

const fn month(month: &'static str, revenue: f64, profit: f64, orders: u32) -> MonthlyRevenue {
    MonthlyRevenue {
        month,
        revenue,
        profit,
        orders,
    }
}

pub static MONTHLY_REVENUE: &[MonthlyRevenue] = &[
    month("Jan'24", 484.8, 267.4, 169),
    month("Feb", 392.0, 165.8, 147),
    month("Mar", 380.1, 206.2, 133),
    month("Apr", 361.3, 142.4, 141),
    month("May", 450.8, 209.8, 157),
    month("Jun", 346.1, 163.2, 126),
    month("Jul", 450.1, 228.3, 149),
    month("Aug", 434.0, 226.7, 144),
    month("Sep", 410.8, 194.2, 153),
    month("Oct", 364.0, 168.1, 140),
    month("Nov", 360.0, 169.9, 132),
    month("Dec'24", 391.2, 175.6, 143),
    month("Jan'25", 441.2, 233.0, 145),
    month("Feb", 343.1, 164.9, 126),
    month("Mar", 417.5, 199.4, 151),
    month("Apr", 395.2, 202.9, 135),
    month("May", 397.9, 203.1, 146),
    month("Jun", 389.0, 195.6, 130),
    month("Jul", 381.4, 191.0, 138),
    month("Aug", 418.4, 204.4, 159),
    month("Sep", 396.0, 189.4, 133),
    month("Oct", 375.9, 198.1, 131),
    month("Nov", 341.1, 154.9, 115),
    month("Dec'25", 401.9, 241.5, 117),
    month("Jan'26", 379.3, 176.2, 140),
];

#[rustfmt::skip]
pub static SEGMENTS: &[SegmentRevenue] = &[
    SegmentRevenue { name: "Mid-Market", revenue: 2796.9, customers: 142 },
    SegmentRevenue { name: "Startup", revenue: 2615.4, customers: 129 },
    SegmentRevenue { name: "SMB", revenue: 2412.6, customers: 120 },
    SegmentRevenue { name: "Enterprise", revenue: 2078.1, customers: 107 },
];

#[rustfmt::skip]
pub static COUNTRIES: &[CountryRevenue] = &[
    CountryRevenue { code: "US", revenue: 2883.1, customers: 142 },
    CountryRevenue { code: "UK", revenue: 1277.1, customers: 65 },
    CountryRevenue { code: "JP", revenue: 883.9, customers: 43 },
    CountryRevenue { code: "DE", revenue: 847.5, customers: 43 },
    CountryRevenue { code: "FR", revenue: 829.8, customers: 42 },
    CountryRevenue { code: "SG", revenue: 794.1, customers: 41 },
    CountryRevenue { code: "AU", revenue: 671.5, customers: 34 },
    CountryRevenue { code: "IN", revenue: 598.0, customers: 28 },
    CountryRevenue { code: "BR", revenue: 589.1, customers: 32 },
    CountryRevenue { code: "CA", revenue: 528.7, customers: 28 },
];

pub static CATEGORIES: &[CategoryRecord] = &[
    CategoryRecord::new("Hardware", 1522.3),
    CategoryRecord::new("Security", 1358.5),
    CategoryRecord::new("Analytics", 1346.3),
    CategoryRecord::new("Support", 1338.0),
    CategoryRecord::new("Cloud", 1209.5),
    CategoryRecord::new("Training", 1194.1),
    CategoryRecord::new("Services", 1072.2),
    CategoryRecord::new("License", 862.0),
];

pub static LIFECYCLE_STAGES: &[CategoryRecord] = &[
    CategoryRecord::colored("Dormant", 231.0, SLATE),
    CategoryRecord::colored("Activated", 70.0, BLUE),
    CategoryRecord::colored("At-Risk", 69.0, GOLD),
    CategoryRecord::colored("Champion", 68.0, GREEN),
    CategoryRecord::colored("Churned", 53.0, RED),
    CategoryRecord::colored("Loyal", 9.0, PURPLE),
];

pub static CHURN_TIERS: &[CategoryRecord] = &[
    CategoryRecord::colored("High", 313.0, RED),
    CategoryRecord::colored("Low", 130.0, GREEN),
    CategoryRecord::colored("Medium", 57.0, GOLD),
];

pub static CUSTOMER_STATUS: &[CategoryRecord] = &[
    CategoryRecord::colored("Active", 311.0, GREEN),
    CategoryRecord::colored("New", 70.0, CYAN),
    CategoryRecord::colored("At-Risk", 66.0, GOLD),
    CategoryRecord::colored("Churned", 53.0, RED),
];

pub static SENTIMENT: &[CategoryRecord] = &[
    CategoryRecord::colored("Positive", 3063.0, GREEN),
    CategoryRecord::colored("Neutral", 2006.0, NEUTRAL),
    CategoryRecord::colored("Negative", 931.0, RED),
];

const fn stage(stage: &'static str, deals: u32, value_musd: f64) -> PipelineStage {
    PipelineStage {
        stage,
        deals,
        value_musd,
        color: None,
    }
}

#[rustfmt::skip]
pub static PIPELINE: &[PipelineStage] = &[
    stage("Lead", 70, 38.6),
    stage("MQL", 152, 87.2),
    stage("SQL", 197, 108.5),
    stage("Discovery", 211, 101.4),
    stage("Proposal", 178, 89.3),
    stage("Negotiation", 169, 91.0),
    PipelineStage { color: Some(GREEN), ..stage("Won", 133, 69.7) },
    PipelineStage { color: Some(RED), ..stage("Lost", 90, 39.9) },
];

#[rustfmt::skip]
pub static SALES_REPS: &[SalesRep] = &[
    SalesRep { rep: "Rep 12", deals: 50, won: 11, win_rate: 84.6, pipeline_musd: 25.7 },
    SalesRep { rep: "Rep 19", deals: 52, won: 9, win_rate: 81.8, pipeline_musd: 27.7 },
    SalesRep { rep: "Rep 1", deals: 49, won: 8, win_rate: 80.0, pipeline_musd: 17.6 },
    SalesRep { rep: "Rep 5", deals: 50, won: 6, win_rate: 75.0, pipeline_musd: 33.8 },
    SalesRep { rep: "Rep 3", deals: 48, won: 8, win_rate: 72.7, pipeline_musd: 23.4 },
    SalesRep { rep: "Rep 2", deals: 54, won: 9, win_rate: 64.3, pipeline_musd: 26.4 },
    SalesRep { rep: "Rep 10", deals: 51, won: 8, win_rate: 57.1, pipeline_musd: 23.3 },
    SalesRep { rep: "Rep 17", deals: 46, won: 6, win_rate: 54.5, pipeline_musd: 29.8 },
];

#[rustfmt::skip]
pub static LEAD_SOURCES: &[LeadSource] = &[
    LeadSource { source: "Product-Led", deals: 161, won: 22, win_rate: 13.7 },
    LeadSource { source: "Existing Customer", deals: 136, won: 18, win_rate: 13.2 },
    LeadSource { source: "Content Download", deals: 146, won: 18, win_rate: 12.3 },
    LeadSource { source: "Partner Referral", deals: 146, won: 18, win_rate: 12.3 },
    LeadSource { source: "Inbound Web", deals: 149, won: 16, win_rate: 10.7 },
    LeadSource { source: "Outbound SDR", deals: 134, won: 14, win_rate: 10.4 },
    LeadSource { source: "Paid Campaign", deals: 167, won: 16, win_rate: 9.6 },
    LeadSource { source: "Event/Conference", deals: 161, won: 11, win_rate: 6.8 },
];

pub static LOSS_REASONS: &[CategoryRecord] = &[
    CategoryRecord::new("Price", 22.0),
    CategoryRecord::new("Feature Gap", 21.0),
    CategoryRecord::new("No Decision", 19.0),
    CategoryRecord::new("Timing", 15.0),
    CategoryRecord::new("Competition", 13.0),
];

pub static FRAUD_SEVERITY: &[CategoryRecord] = &[
    CategoryRecord::colored("Medium", 207.0, GOLD),
    CategoryRecord::colored("Low", 157.0, GREEN),
    CategoryRecord::colored("High", 75.0, RED),
    CategoryRecord::colored("Critical", 11.0, CRIMSON),
];

pub static FRAUD_STATUS: &[CategoryRecord] = &[
    CategoryRecord::colored("False Positive", 134.0, SLATE),
    CategoryRecord::colored("Resolved", 126.0, GREEN),
    CategoryRecord::colored("Investigating", 86.0, GOLD),
    CategoryRecord::colored("Confirmed", 56.0, RED),
    CategoryRecord::colored("Open", 48.0, BLUE),
];

pub static FRAUD_TYPES: &[CategoryRecord] = &[
    CategoryRecord::new("Split Txn", 47.0),
    CategoryRecord::new("Round Amt", 43.0),
    CategoryRecord::new("After-Hrs", 41.0),
    CategoryRecord::new("Phantom Vendor", 38.0),
    CategoryRecord::new("Geo Mismatch", 38.0),
    CategoryRecord::new("PO Mismatch", 37.0),
    CategoryRecord::new("Amount Spike", 36.0),
    CategoryRecord::new("ID Mismatch", 36.0),
];

pub static DETECTION_METHODS: &[CategoryRecord] = &[
    CategoryRecord::new("Pattern Match", 98.0),
    CategoryRecord::new("ML Anomaly", 92.0),
    CategoryRecord::new("Claude AI", 89.0),
    CategoryRecord::new("Manual", 86.0),
    CategoryRecord::new("Rule-Based", 85.0),
];

const fn hour(
    hour: &'static str,
    users: u32,
    page_views: u32,
    api_calls: u32,
    latency_ms: u32,
) -> HourlyTraffic {
    HourlyTraffic {
        hour,
        users,
        page_views,
        api_calls,
        latency_ms,
    }
}

pub static REALTIME_HOURLY: &[HourlyTraffic] = &[
    hour("09:00", 436, 2922, 16132, 160),
    hour("10:00", 473, 3529, 22209, 218),
    hour("11:00", 719, 3679, 23513, 191),
    hour("12:00", 834, 3422, 24605, 187),
    hour("13:00", 808, 3548, 27508, 254),
    hour("14:00", 582, 2251, 16744, 140),
    hour("15:00", 755, 3188, 24396, 157),
    hour("16:00", 399, 3650, 22101, 215),
    hour("17:00", 902, 2998, 31894, 150),
];

#[rustfmt::skip]
pub static FUNNEL: &[FunnelStep] = &[
    FunnelStep { step: "Homepage", visitors: 1348, pct: 100 },
    FunnelStep { step: "Products", visitors: 1408, pct: 104 },
    FunnelStep { step: "Pricing", visitors: 1402, pct: 104 },
    FunnelStep { step: "Demo Req", visitors: 1420, pct: 105 },
    FunnelStep { step: "Checkout", visitors: 1358, pct: 101 },
];

#[rustfmt::skip]
pub static REFERRERS: &[Referrer] = &[
    Referrer { source: "Email", conversion_pct: 5.53, visits: 2621 },
    Referrer { source: "Paid LinkedIn", conversion_pct: 5.78, visits: 2508 },
    Referrer { source: "Bing", conversion_pct: 5.82, visits: 2561 },
    Referrer { source: "Organic Social", conversion_pct: 5.55, visits: 2433 },
    Referrer { source: "Google", conversion_pct: 5.29, visits: 2477 },
    Referrer { source: "Direct", conversion_pct: 5.09, visits: 2552 },
    Referrer { source: "LinkedIn", conversion_pct: 5.14, visits: 2527 },
    Referrer { source: "Partner", conversion_pct: 4.73, visits: 2493 },
];

pub static MDM_MATCH_TIERS: &[CategoryRecord] = &[
    CategoryRecord::colored("AUTO_MERGE", 117.0, GREEN),
    CategoryRecord::colored("REVIEW", 53.0, GOLD),
    CategoryRecord::colored("NO_MATCH", 30.0, RED),
];

pub static SOURCE_LINKAGE: &[CategoryRecord] = &[
    CategoryRecord::new("SAP+SFDC+Oracle", 94.0),
    CategoryRecord::new("SAP+Salesforce", 93.0),
    CategoryRecord::new("SAP only", 83.0),
    CategoryRecord::new("SFDC+Oracle", 82.0),
    CategoryRecord::new("Salesforce only", 75.0),
    CategoryRecord::new("SAP+Oracle", 73.0),
];

pub static LIFECYCLE_DEFINITIONS: &[LifecycleDefinition] = &[
    LifecycleDefinition {
        stage: "Champion",
        color: GREEN,
        tenure: "24+ mo",
        description: "Highest LTV, lowest churn risk. Upsell opportunities.",
        action: "VIP programs, case studies, referral incentives",
    },
    LifecycleDefinition {
        stage: "Loyal",
        color: PURPLE,
        tenure: "12-24 mo",
        description: "Consistent buyers, good health. Expansion candidates.",
        action: "Cross-sell, feature adoption, NPS surveys",
    },
    LifecycleDefinition {
        stage: "Growing",
        color: BLUE,
        tenure: "3-12 mo",
        description: "Active engagement, building relationship.",
        action: "Onboarding complete, product training, success plans",
    },
    LifecycleDefinition {
        stage: "At-Risk",
        color: GOLD,
        tenure: "45-90d gap",
        description: "Engagement declining. Intervention needed.",
        action: "CSM outreach, health check, incentive offers",
    },
    LifecycleDefinition {
        stage: "Dormant",
        color: SLATE,
        tenure: "90+ day gap",
        description: "No recent activity. Reactivation campaigns.",
        action: "Win-back emails, special offers, executive outreach",
    },
    LifecycleDefinition {
        stage: "Churned",
        color: RED,
        tenure: "Cancelled",
        description: "Lost customer. Post-mortem analysis.",
        action: "Exit surveys, loss analysis, future re-engagement",
    },
];

#[rustfmt::skip]
pub static CAMPAIGNS: &[Campaign] = &[
    Campaign { name: "spring_launch", leads: 180, conversion_pct: 8.2, color: GREEN },
    Campaign { name: "q4_push", leads: 165, conversion_pct: 7.1, color: ACCENT },
    Campaign { name: "partner_webinar", leads: 142, conversion_pct: 6.8, color: PURPLE },
    Campaign { name: "product_update", leads: 130, conversion_pct: 5.9, color: BLUE },
    Campaign { name: "brand_awareness", leads: 120, conversion_pct: 4.2, color: CYAN },
    Campaign { name: "retarget_q1", leads: 155, conversion_pct: 9.1, color: GOLD },
];

#[rustfmt::skip]
pub static CRITICAL_ALERTS: &[CriticalAlert] = &[
    CriticalAlert { id: "FRD-00234", fraud_type: "Phantom Vendor", amount: "$487K", risk: 95, system: "SAP" },
    CriticalAlert { id: "FRD-00412", fraud_type: "Geo Mismatch", amount: "$123K", risk: 92, system: "Payment" },
    CriticalAlert { id: "FRD-00089", fraud_type: "Amount Spike", amount: "$1.2M", risk: 89, system: "Oracle" },
    CriticalAlert { id: "FRD-00445", fraud_type: "Split Txn", amount: "$67K", risk: 87, system: "E-Commerce" },
];

const fn table(
    name: &'static str,
    kind: &'static str,
    rows: u32,
    color: Color,
    fields: &'static [&'static str],
) -> SchemaTable {
    SchemaTable {
        name,
        kind,
        rows,
        color,
        fields,
    }
}

#[rustfmt::skip]
pub static STAR_SCHEMA: &[SchemaTable] = &[
    table("dim_customer", "Dimension SCD2", 500, GREEN, &["customer_uid (PK)", "full_name, email", "segment, status", "lifetime_value"]),
    table("dim_product", "Dimension", 80, GOLD, &["product_id (PK)", "category, subcategory", "unit_price, margin", "is_recurring"]),
    table("dim_customer_lifecycle", "Dimension", 500, PURPLE, &["customer_uid (FK)", "lifecycle_stage", "churn_risk_score", "cohort, tenure"]),
    table("dim_date", "Dimension", 762, CYAN, &["date_key (PK)", "year, quarter, month", "day_of_week"]),
    table("fact_sales", "Fact", 3500, ACCENT, &["order_id (PK)", "customer_uid → dim", "product_id → dim", "line_total, profit"]),
    table("fact_interactions", "Fact", 6000, BLUE, &["interaction_id (PK)", "customer_uid → dim", "channel, sentiment", "csat_score"]),
    table("fact_clickstream", "Fact", 25000, TEAL, &["event_id (PK)", "session_id, page_url", "event_type, device", "referrer, is_converted"]),
    table("fact_pipeline", "Fact", 1200, PINK, &["deal_id (PK)", "customer_uid → dim", "stage, lead_source", "deal_amount, is_won"]),
    table("fact_realtime_metrics", "Fact (Time-Series)", 168, LIME, &["timestamp (PK)", "active_users, page_views", "api_calls, latency", "dq_pass_rate"]),
    table("fact_fraud_signals", "Fact", 450, RED, &["alert_id (PK)", "fraud_type, severity", "risk_score, status", "financial_impact"]),
    table("mdm_match_pairs", "Audit", 200, SLATE, &["pair_id (PK)", "customer_a, customer_b", "match_score, tier", "name/email/phone sim"]),
];

/// Row count of a star-schema table, by name.
pub fn schema_rows(name: &str) -> Option<u32> {
    STAR_SCHEMA.iter().find(|t| t.name == name).map(|t| t.rows)
}

/// Every named dataset in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    MonthlyRevenue,
    Segments,
    Countries,
    Categories,
    LifecycleStages,
    ChurnTiers,
    CustomerStatus,
    Sentiment,
    Pipeline,
    SalesReps,
    LeadSources,
    LossReasons,
    FraudSeverity,
    FraudStatus,
    FraudTypes,
    DetectionMethods,
    RealtimeHourly,
    Funnel,
    Referrers,
    MdmMatchTiers,
    SourceLinkage,
    LifecycleDefinitions,
    Campaigns,
    CriticalAlerts,
    StarSchema,
}

impl Dataset {
    pub const ALL: [Dataset; 25] = [
        Dataset::MonthlyRevenue,
        Dataset::Segments,
        Dataset::Countries,
        Dataset::Categories,
        Dataset::LifecycleStages,
        Dataset::ChurnTiers,
        Dataset::CustomerStatus,
        Dataset::Sentiment,
        Dataset::Pipeline,
        Dataset::SalesReps,
        Dataset::LeadSources,
        Dataset::LossReasons,
        Dataset::FraudSeverity,
        Dataset::FraudStatus,
        Dataset::FraudTypes,
        Dataset::DetectionMethods,
        Dataset::RealtimeHourly,
        Dataset::Funnel,
        Dataset::Referrers,
        Dataset::MdmMatchTiers,
        Dataset::SourceLinkage,
        Dataset::LifecycleDefinitions,
        Dataset::Campaigns,
        Dataset::CriticalAlerts,
        Dataset::StarSchema,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::MonthlyRevenue => "monthly_revenue",
            Dataset::Segments => "segments",
            Dataset::Countries => "countries",
            Dataset::Categories => "categories",
            Dataset::LifecycleStages => "lifecycle_stages",
            Dataset::ChurnTiers => "churn_tiers",
            Dataset::CustomerStatus => "customer_status",
            Dataset::Sentiment => "sentiment",
            Dataset::Pipeline => "pipeline",
            Dataset::SalesReps => "sales_reps",
            Dataset::LeadSources => "lead_sources",
            Dataset::LossReasons => "loss_reasons",
            Dataset::FraudSeverity => "fraud_severity",
            Dataset::FraudStatus => "fraud_status",
            Dataset::FraudTypes => "fraud_types",
            Dataset::DetectionMethods => "detection_methods",
            Dataset::RealtimeHourly => "realtime_hourly",
            Dataset::Funnel => "funnel",
            Dataset::Referrers => "referrers",
            Dataset::MdmMatchTiers => "mdm_match_tiers",
            Dataset::SourceLinkage => "source_linkage",
            Dataset::LifecycleDefinitions => "lifecycle_definitions",
            Dataset::Campaigns => "campaigns",
            Dataset::CriticalAlerts => "critical_alerts",
            Dataset::StarSchema => "star_schema",
        }
    }

    /// The category-shaped datasets, for checks that apply to all of them.
    pub fn categories(self) -> Option<&'static [CategoryRecord]> {
        match self {
            Dataset::Categories => Some(CATEGORIES),
            Dataset::LifecycleStages => Some(LIFECYCLE_STAGES),
            Dataset::ChurnTiers => Some(CHURN_TIERS),
            Dataset::CustomerStatus => Some(CUSTOMER_STATUS),
            Dataset::Sentiment => Some(SENTIMENT),
            Dataset::LossReasons => Some(LOSS_REASONS),
            Dataset::FraudSeverity => Some(FRAUD_SEVERITY),
            Dataset::FraudStatus => Some(FRAUD_STATUS),
            Dataset::FraudTypes => Some(FRAUD_TYPES),
            Dataset::DetectionMethods => Some(DETECTION_METHODS),
            Dataset::MdmMatchTiers => Some(MDM_MATCH_TIERS),
            Dataset::SourceLinkage => Some(SOURCE_LINKAGE),
            _ => None,
        }
    }

    pub fn len(self) -> usize {
        if let Some(records) = self.categories() {
            return records.len();
        }
        match self {
            Dataset::MonthlyRevenue => MONTHLY_REVENUE.len(),
            Dataset::Segments => SEGMENTS.len(),
            Dataset::Countries => COUNTRIES.len(),
            Dataset::Pipeline => PIPELINE.len(),
            Dataset::SalesReps => SALES_REPS.len(),
            Dataset::LeadSources => LEAD_SOURCES.len(),
            Dataset::RealtimeHourly => REALTIME_HOURLY.len(),
            Dataset::Funnel => FUNNEL.len(),
            Dataset::Referrers => REFERRERS.len(),
            Dataset::LifecycleDefinitions => LIFECYCLE_DEFINITIONS.len(),
            Dataset::Campaigns => CAMPAIGNS.len(),
            Dataset::CriticalAlerts => CRITICAL_ALERTS.len(),
            Dataset::StarSchema => STAR_SCHEMA.len(),
            _ => 0,
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    fn to_json(self) -> Value {
        fn rows<T: Serialize>(records: &[T]) -> Value {
            serde_json::to_value(records).unwrap_or(Value::Null)
        }
        if let Some(records) = self.categories() {
            return rows(records);
        }
        match self {
            Dataset::MonthlyRevenue => rows(MONTHLY_REVENUE),
            Dataset::Segments => rows(SEGMENTS),
            Dataset::Countries => rows(COUNTRIES),
            Dataset::Pipeline => rows(PIPELINE),
            Dataset::SalesReps => rows(SALES_REPS),
            Dataset::LeadSources => rows(LEAD_SOURCES),
            Dataset::RealtimeHourly => rows(REALTIME_HOURLY),
            Dataset::Funnel => rows(FUNNEL),
            Dataset::Referrers => rows(REFERRERS),
            Dataset::LifecycleDefinitions => rows(LIFECYCLE_DEFINITIONS),
            Dataset::Campaigns => rows(CAMPAIGNS),
            Dataset::CriticalAlerts => rows(CRITICAL_ALERTS),
            Dataset::StarSchema => rows(STAR_SCHEMA),
            _ => Value::Null,
        }
    }
}

/// The whole registry as one JSON object keyed by dataset name.
pub fn snapshot() -> Value {
    let mut map = Map::new();
    for ds in Dataset::ALL {
        map.insert(ds.name().to_string(), ds.to_json());
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dataset_names_are_unique() {
        let names: HashSet<_> = Dataset::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names.len(), Dataset::ALL.len());
    }

    #[test]
    fn no_dataset_is_empty() {
        for ds in Dataset::ALL {
            assert!(!ds.is_empty(), "{} is empty", ds.name());
        }
    }

    #[test]
    fn snapshot_has_every_dataset_with_its_rows() {
        let snap = snapshot();
        for ds in Dataset::ALL {
            let rows = snap[ds.name()].as_array().expect("array");
            assert_eq!(rows.len(), ds.len(), "{}", ds.name());
        }
        assert_eq!(snap["lifecycle_stages"][0]["name"], "Dormant");
        assert_eq!(snap["lifecycle_stages"][0]["color"], "#6B7280");
        assert!(snap["categories"][0].get("color").is_none());
        assert_eq!(snap["sales_reps"][0]["win_rate"], 84.6);
    }

    #[test]
    fn pipeline_outcome_stages_are_pinned() {
        let won = PIPELINE.iter().find(|s| s.stage == "Won").unwrap();
        let lost = PIPELINE.iter().find(|s| s.stage == "Lost").unwrap();
        assert_eq!(won.color, Some(GREEN));
        assert_eq!(lost.color, Some(RED));
        assert!(PIPELINE[..6].iter().all(|s| s.color.is_none()));
    }

    #[test]
    fn schema_rows_lookup() {
        assert_eq!(schema_rows("dim_customer"), Some(500));
        assert_eq!(schema_rows("fact_fraud_signals"), Some(450));
        assert_eq!(schema_rows("nope"), None);
    }
}
