use serde::Serialize;

use crate::shared::theme::Color;

/// One month of the revenue time series ($M, order count).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub revenue: f64,
    pub profit: f64,
    pub orders: u32,
}

/// One hour of today's real-time traffic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyTraffic {
    pub hour: &'static str,
    pub users: u32,
    pub page_views: u32,
    pub api_calls: u32,
    pub latency_ms: u32,
}

/// A named category with a single measure and an optional pinned color.
///
/// Used for every distribution the dashboard draws as a donut or a bar list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryRecord {
    pub name: &'static str,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl CategoryRecord {
    pub const fn new(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value,
            color: None,
        }
    }

    pub const fn colored(name: &'static str, value: f64, color: Color) -> Self {
        Self {
            name,
            value,
            color: Some(color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentRevenue {
    pub name: &'static str,
    pub revenue: f64,
    pub customers: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountryRevenue {
    pub code: &'static str,
    pub revenue: f64,
    pub customers: u32,
}

/// Pipeline stage; array order is funnel order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipelineStage {
    pub stage: &'static str,
    pub deals: u32,
    pub value_musd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Clickstream funnel step; `pct` is relative to the first step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FunnelStep {
    pub step: &'static str,
    pub visitors: u32,
    pub pct: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Referrer {
    pub source: &'static str,
    pub conversion_pct: f64,
    pub visits: u32,
}

/// A row ranked by a stored rate.
///
/// The stored rate is what the dashboard shows. It is never recomputed from the
/// counts; `implied_rate` exists only so the registry audit can report drift.
pub trait RankedEntity {
    fn id(&self) -> &'static str;
    fn deals(&self) -> u32;
    fn won(&self) -> u32;
    fn stored_rate(&self) -> f64;

    fn implied_rate(&self) -> f64 {
        if self.deals() == 0 {
            0.0
        } else {
            self.won() as f64 / self.deals() as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesRep {
    pub rep: &'static str,
    pub deals: u32,
    pub won: u32,
    pub win_rate: f64,
    pub pipeline_musd: f64,
}

impl RankedEntity for SalesRep {
    fn id(&self) -> &'static str {
        self.rep
    }
    fn deals(&self) -> u32 {
        self.deals
    }
    fn won(&self) -> u32 {
        self.won
    }
    fn stored_rate(&self) -> f64 {
        self.win_rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadSource {
    pub source: &'static str,
    pub deals: u32,
    pub won: u32,
    pub win_rate: f64,
}

impl RankedEntity for LeadSource {
    fn id(&self) -> &'static str {
        self.source
    }
    fn deals(&self) -> u32 {
        self.deals
    }
    fn won(&self) -> u32 {
        self.won
    }
    fn stored_rate(&self) -> f64 {
        self.win_rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifecycleDefinition {
    pub stage: &'static str,
    pub color: Color,
    pub tenure: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

/// UTM campaign attribution card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Campaign {
    pub name: &'static str,
    pub leads: u32,
    pub conversion_pct: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalAlert {
    pub id: &'static str,
    pub fraud_type: &'static str,
    pub amount: &'static str,
    pub risk: u32,
    pub system: &'static str,
}

/// A table of the lakehouse star schema, shown as a descriptive card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SchemaTable {
    pub name: &'static str,
    pub kind: &'static str,
    pub rows: u32,
    pub color: Color,
    pub fields: &'static [&'static str],
}

/// Props for one metric tile. `value` is pre-formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricTileSpec {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: Option<&'static str>,
    pub trend: Option<f64>,
    pub color: Color,
}

impl MetricTileSpec {
    pub const fn new(label: &'static str, value: &'static str, color: Color) -> Self {
        Self {
            label,
            value,
            sub: None,
            trend: None,
            color,
        }
    }

    pub const fn sub(mut self, sub: &'static str) -> Self {
        self.sub = Some(sub);
        self
    }

    pub const fn trend(mut self, trend: f64) -> Self {
        self.trend = Some(trend);
        self
    }
}
