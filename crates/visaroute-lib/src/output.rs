use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::routing::{Criterion, RouteMetric, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Json,
}

/// Flight taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub airport: String,
    /// Price of the flight that arrives at this airport; `None` for the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub requires_visa: bool,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub criterion: Criterion,
    pub origin: String,
    pub destination: String,
    pub hops: usize,
    pub total_cost: f64,
    pub metric: RouteMetric,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a presentable summary.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let mut steps = Vec::with_capacity(plan.path.len());
        for (index, airport) in plan.path.iter().enumerate() {
            let leg = index.checked_sub(1).and_then(|i| plan.legs.get(i));
            steps.push(RouteStep {
                index,
                airport: airport.clone(),
                cost: leg.map(|leg| leg.cost),
                requires_visa: leg.is_some_and(|leg| leg.requires_visa),
            });
        }

        Self {
            criterion: plan.criterion,
            origin: plan.path.first().cloned().unwrap_or_default(),
            destination: plan.path.last().cloned().unwrap_or_default(),
            hops: plan.hop_count(),
            total_cost: plan.total_cost(),
            metric: plan.metric,
            steps,
        }
    }

    /// Render the summary using the requested mode.
    pub fn render(&self, mode: RouteRenderMode) -> Result<String> {
        match mode {
            RouteRenderMode::PlainText => Ok(self.render_plain()),
            RouteRenderMode::Json => {
                serde_json::to_string_pretty(self).map_err(|err| Error::Io(err.into()))
            }
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let label = match self.criterion {
            Criterion::Cost => "Cheapest route",
            Criterion::Hops => "Fewest-stops route",
        };
        let joined = self
            .steps
            .iter()
            .map(|step| step.airport.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(
            buffer,
            "{label} from {} to {}: {joined}",
            self.origin, self.destination
        );

        match self.metric {
            RouteMetric::Cost(cost) => {
                let _ = writeln!(
                    buffer,
                    "Total cost: ${cost:.2} ({} {})",
                    self.hops,
                    plural_hops(self.hops)
                );
            }
            RouteMetric::Hops(hops) => {
                let _ = writeln!(
                    buffer,
                    "{hops} {} (total cost: ${:.2})",
                    plural_hops(hops),
                    self.total_cost
                );
            }
        }

        for step in self.steps.iter().skip(1) {
            let visa = if step.requires_visa {
                "visa required"
            } else {
                "visa-free"
            };
            let _ = writeln!(
                buffer,
                "{:>3}: {} (${:.2}, {visa})",
                step.index,
                step.airport,
                step.cost.unwrap_or_default()
            );
        }

        buffer
    }
}

fn plural_hops(hops: usize) -> &'static str {
    if hops == 1 {
        "hop"
    } else {
        "hops"
    }
}
