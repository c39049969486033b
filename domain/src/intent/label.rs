//! Intent label value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The arithmetic operation a question asks for (Value Object)
///
/// This is the closed set of labels the classifier is trained to emit.
/// Any other label string fails to parse and is routed to the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    AreaRectangle,
    PerimeterSquare,
    EvenOdd,
    PlaceValue,
    Table,
    Lcm,
    Hcf,
    PrimeCheck,
    Square,
    Cube,
    Factorial,
    AreaCircle,
    VolumeCube,
    VolumeCuboid,
}

impl IntentLabel {
    /// Every label, in the order the classifier dataset lists them
    pub const ALL: [IntentLabel; 18] = [
        IntentLabel::Addition,
        IntentLabel::Subtraction,
        IntentLabel::Multiplication,
        IntentLabel::Division,
        IntentLabel::AreaRectangle,
        IntentLabel::PerimeterSquare,
        IntentLabel::EvenOdd,
        IntentLabel::PlaceValue,
        IntentLabel::Table,
        IntentLabel::Lcm,
        IntentLabel::Hcf,
        IntentLabel::PrimeCheck,
        IntentLabel::Square,
        IntentLabel::Cube,
        IntentLabel::Factorial,
        IntentLabel::AreaCircle,
        IntentLabel::VolumeCube,
        IntentLabel::VolumeCuboid,
    ];

    /// Get the wire identifier for this label
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::Addition => "addition",
            IntentLabel::Subtraction => "subtraction",
            IntentLabel::Multiplication => "multiplication",
            IntentLabel::Division => "division",
            IntentLabel::AreaRectangle => "area_rectangle",
            IntentLabel::PerimeterSquare => "perimeter_square",
            IntentLabel::EvenOdd => "even_odd",
            IntentLabel::PlaceValue => "place_value",
            IntentLabel::Table => "table",
            IntentLabel::Lcm => "lcm",
            IntentLabel::Hcf => "hcf",
            IntentLabel::PrimeCheck => "prime_check",
            IntentLabel::Square => "square",
            IntentLabel::Cube => "cube",
            IntentLabel::Factorial => "factorial",
            IntentLabel::AreaCircle => "area_circle",
            IntentLabel::VolumeCube => "volume_cube",
            IntentLabel::VolumeCuboid => "volume_cuboid",
        }
    }

    /// Minimum number of operands the computation needs.
    ///
    /// Fewer extracted numbers than this means the dispatcher declines
    /// the question, exactly as if the label were unknown.
    pub fn arity(&self) -> usize {
        match self {
            IntentLabel::VolumeCuboid => 3,
            IntentLabel::Addition
            | IntentLabel::Subtraction
            | IntentLabel::Multiplication
            | IntentLabel::Division
            | IntentLabel::AreaRectangle
            | IntentLabel::PlaceValue
            | IntentLabel::Lcm
            | IntentLabel::Hcf => 2,
            IntentLabel::PerimeterSquare
            | IntentLabel::EvenOdd
            | IntentLabel::Table
            | IntentLabel::PrimeCheck
            | IntentLabel::Square
            | IntentLabel::Cube
            | IntentLabel::Factorial
            | IntentLabel::AreaCircle
            | IntentLabel::VolumeCube => 1,
        }
    }
}

impl std::fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IntentLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::EmptyIntent);
        }
        IntentLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| DomainError::UnknownIntent(s.to_string()))
    }
}
