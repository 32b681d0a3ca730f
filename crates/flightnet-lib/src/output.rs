use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::FlightNetwork;
use crate::path::{PathMetric, PathTotals};
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

/// Single flight within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub cost: f64,
    pub distance: f64,
    pub duration: f64,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub metric: PathMetric,
    pub direct_only: bool,
    pub hops: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub legs: Vec<RouteLeg>,
    pub totals: PathTotals,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved airport names.
    pub fn from_plan(network: &FlightNetwork, plan: &RoutePlan) -> Result<Self> {
        if plan.legs.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let endpoint = |code: &str| RouteEndpoint {
            code: code.to_string(),
            name: network.airport(code).map(|airport| airport.name.clone()),
        };

        let legs = plan
            .legs
            .iter()
            .enumerate()
            .map(|(index, route)| RouteLeg {
                index: index + 1,
                from: route.from.clone(),
                to: route.to.clone(),
                cost: route.cost,
                distance: route.distance,
                duration: route.duration,
            })
            .collect();

        Ok(Self {
            metric: plan.metric,
            direct_only: plan.direct_only,
            hops: plan.hop_count(),
            start: endpoint(&plan.start),
            goal: endpoint(&plan.goal),
            legs,
            totals: plan.totals,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} {}, metric: {}{})",
            self.start.code,
            self.goal.code,
            self.hops,
            hop_label(self.hops),
            self.metric,
            if self.direct_only { ", direct only" } else { "" }
        );
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "{:>3}: {} -> {} | ${:.2} | {:.1} km | {:.1} h",
                leg.index, leg.from, leg.to, leg.cost, leg.distance, leg.duration
            );
        }
        let _ = writeln!(buffer, "{}", self.totals_line());
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} {}, metric: `{}`)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            hop_label(self.hops),
            self.metric
        );
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** → **{}** (${:.2}, {:.1} km, {:.1} h)",
                leg.index, leg.from, leg.to, leg.cost, leg.distance, leg.duration
            );
        }
        let _ = writeln!(buffer, "_{}_", self.totals_line());
        buffer
    }

    fn totals_line(&self) -> String {
        format!(
            "Total: ${:.2}, {:.1} km, {:.1} h",
            self.totals.cost, self.totals.distance, self.totals.duration
        )
    }
}

fn hop_label(hops: usize) -> &'static str {
    if hops == 1 {
        "hop"
    } else {
        "hops"
    }
}
