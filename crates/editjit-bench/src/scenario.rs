//! Interaction workloads.

use std::fmt;
use std::str::FromStr;

use editjit_core::errors::BenchError;
use editjit_sim::{SimSolver, SimWorld};
use serde::{Deserialize, Serialize};

/// Which of the two mutated fields a step writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    X,
    Y,
}

/// One mutation: assign `value` to `field`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub field: Field,
    pub value: f64,
}

/// A deterministic mutation workload over a solver with a fixed constraint count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// `x + y == z` on a simplex solver, writing `x`.
    Add,
    /// Same sum on a local-propagation planner, which has no edit constraints.
    DbAdd,
    /// Thermometer drag: nine constraints, writing the mouse y position.
    Drag,
    /// Window resize: six constraints, writing mouse x and y together.
    Drag2d,
    /// Resize where y only moves every third step.
    Drag2dFastX,
    /// Resize along x for the first half, then along y.
    Drag2dChangeHalf,
    /// Resize along x for the first tenth, then along y.
    Drag2dChangeTenth,
    /// Resize along x for five steps, then along y.
    Drag2dFreqChange5,
    /// Resize alternating between x and y every five steps.
    Drag2dAlternate5,
}

impl Scenario {
    pub const ALL: [Scenario; 9] = [
        Scenario::Add,
        Scenario::DbAdd,
        Scenario::Drag,
        Scenario::Drag2d,
        Scenario::Drag2dFastX,
        Scenario::Drag2dChangeHalf,
        Scenario::Drag2dChangeTenth,
        Scenario::Drag2dFreqChange5,
        Scenario::Drag2dAlternate5,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::DbAdd => "db_add",
            Self::Drag => "drag",
            Self::Drag2d => "drag2d",
            Self::Drag2dFastX => "drag2d_fast_x",
            Self::Drag2dChangeHalf => "drag2d_change_half",
            Self::Drag2dChangeTenth => "drag2d_change_tenth",
            Self::Drag2dFreqChange5 => "drag2d_freq_change5",
            Self::Drag2dAlternate5 => "drag2d_alternate5",
        }
    }

    /// Constraints a full re-solve touches.
    pub fn constraints(&self) -> usize {
        match self {
            Self::Add => 1,
            Self::DbAdd => 3,
            Self::Drag => 9,
            _ => 6,
        }
    }

    /// A fresh simulated world with the scenario's solver.
    pub fn world(&self) -> SimWorld {
        match self {
            Self::DbAdd => SimWorld::new(
                SimSolver::without_edit_support("deltablue"),
                self.constraints(),
            ),
            _ => SimWorld::with_constraints(self.constraints()),
        }
    }

    /// Object and field names of the variables the scenario writes.
    pub fn fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Add | Self::DbAdd => &[("o", "x")],
            Self::Drag => &[("mouse", "location_y")],
            _ => &[("mouse", "x"), ("mouse", "y")],
        }
    }

    /// The mutations of step `i` out of `iterations`.
    pub fn step(&self, i: usize, iterations: usize) -> Vec<Step> {
        let at = |field, value: usize| Step {
            field,
            value: value as f64,
        };
        match self {
            Self::Add | Self::DbAdd | Self::Drag => vec![at(Field::X, i)],
            Self::Drag2d => drag_2d(i, 1),
            Self::Drag2dFastX => drag_2d(i, 3),
            Self::Drag2dChangeHalf => change_axis(i, iterations / 2),
            Self::Drag2dChangeTenth => change_axis(i, iterations / 10),
            Self::Drag2dFreqChange5 => change_axis(i, 5),
            Self::Drag2dAlternate5 => {
                if i % 10 < 5 {
                    vec![at(Field::X, 100 + i)]
                } else {
                    vec![at(Field::Y, 100 + i)]
                }
            }
        }
    }

    /// The whole mutation stream.
    pub fn steps(&self, iterations: usize) -> Vec<Step> {
        (0..iterations)
            .flat_map(|i| self.step(i, iterations))
            .collect()
    }
}

fn drag_2d(i: usize, sheer: usize) -> Vec<Step> {
    let mut steps = vec![Step {
        field: Field::X,
        value: (100 + i) as f64,
    }];
    if i % sheer == 0 {
        steps.push(Step {
            field: Field::Y,
            value: (100 + i) as f64,
        });
    }
    steps
}

fn change_axis(i: usize, switch_at: usize) -> Vec<Step> {
    if i < switch_at {
        vec![Step {
            field: Field::X,
            value: (100 + i) as f64,
        }]
    } else {
        vec![Step {
            field: Field::Y,
            value: (100 + i - switch_at) as f64,
        }]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|sc| sc.name() == wanted)
            .ok_or_else(|| BenchError::UnknownScenario {
                name: s.to_string(),
            })
    }
}
