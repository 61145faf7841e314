//! Named resize scenarios with an expected outcome

use crate::output::OutputSink;
use crate::shapes::{ShapeSpec, draw, resize};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Consistent,
    Violation,
}

/// Starting shape, resize targets and what the resize should produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub shape: ShapeSpec,
    pub new_height: i64,
    pub new_width: i64,
    pub expect: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub name: String,
    pub expected: Outcome,
    pub outcome: Outcome,
    pub final_width: i64,
    pub final_height: i64,
    pub error: Option<String>,
}

impl ScenarioReport {
    pub fn matches_expectation(&self) -> bool {
        self.expected == self.outcome
    }
}

impl Scenario {
    /// Rectangle 20x10 resized to height 5, width 10
    pub fn rectangle_resize() -> Self {
        Self {
            name: "rectangle-resize".to_string(),
            shape: ShapeSpec::Rectangle { width: 20, height: 10 },
            new_height: 5,
            new_width: 10,
            expect: Outcome::Consistent,
        }
    }

    /// Square of side 5 resized to height 10, width 20
    pub fn square_resize() -> Self {
        Self {
            name: "square-resize".to_string(),
            shape: ShapeSpec::Square { side: 5 },
            new_height: 10,
            new_width: 20,
            expect: Outcome::Violation,
        }
    }

    pub fn builtin() -> Vec<Self> {
        vec![Self::rectangle_resize(), Self::square_resize()]
    }

    /// Draw the shape, resize it, draw it again
    pub fn run(&self, sink: &mut dyn OutputSink) -> ScenarioReport {
        let mut shape = self.shape.build();
        sink.report(&format!("== {}", self.name));
        draw(shape.as_ref(), sink);

        let result = resize(shape.as_mut(), self.new_height, self.new_width);
        let (outcome, error) = match result {
            Ok(()) => (Outcome::Consistent, None),
            Err(e) => {
                sink.report(&e.to_string());
                (Outcome::Violation, Some(e.to_string()))
            }
        };
        draw(shape.as_ref(), sink);

        info!(scenario = %self.name, ?outcome, expected = ?self.expect, "scenario finished");

        ScenarioReport {
            name: self.name.clone(),
            expected: self.expect,
            outcome,
            final_width: shape.width(),
            final_height: shape.height(),
            error,
        }
    }
}
