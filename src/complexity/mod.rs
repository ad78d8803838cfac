//! Heuristic static complexity estimation.
//!
//! Both estimators classify the textual shape of a submission through an
//! ordered decision cascade. They never execute code and always return one
//! of the documented labels; `Unknown` is an answer, not an error.

pub mod markers;
pub mod space;
pub mod time;

pub use space::estimate_space_complexity;
pub use time::estimate_time_complexity;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeComplexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    /// `O(n^k)` for k >= 3
    Polynomial(u32),
    Exponential,
    /// Graph traversal, `O(V + E)`
    Graph,
    Unknown,
}

impl TimeComplexity {
    /// Label for `d` nested dimensions or loops of size n.
    pub fn from_degree(degree: usize) -> Self {
        match degree {
            0 => TimeComplexity::Constant,
            1 => TimeComplexity::Linear,
            2 => TimeComplexity::Quadratic,
            k => TimeComplexity::Polynomial(u32::try_from(k).unwrap_or(u32::MAX)),
        }
    }
}

impl fmt::Display for TimeComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeComplexity::Constant => f.write_str("O(1)"),
            TimeComplexity::Logarithmic => f.write_str("O(log n)"),
            TimeComplexity::Linear => f.write_str("O(n)"),
            TimeComplexity::Linearithmic => f.write_str("O(n log n)"),
            TimeComplexity::Quadratic => f.write_str("O(n²)"),
            TimeComplexity::Polynomial(k) => write!(f, "O(n^{k})"),
            TimeComplexity::Exponential => f.write_str("O(2ⁿ)"),
            TimeComplexity::Graph => f.write_str("O(V + E)"),
            TimeComplexity::Unknown => f.write_str("Unknown"),
        }
    }
}

impl FromStr for TimeComplexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "O(1)" => TimeComplexity::Constant,
            "O(log n)" => TimeComplexity::Logarithmic,
            "O(n)" => TimeComplexity::Linear,
            "O(n log n)" => TimeComplexity::Linearithmic,
            "O(n²)" => TimeComplexity::Quadratic,
            "O(2ⁿ)" => TimeComplexity::Exponential,
            "O(V + E)" => TimeComplexity::Graph,
            "Unknown" => TimeComplexity::Unknown,
            other => TimeComplexity::from_degree(parse_degree(other)?),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceComplexity {
    Constant,
    Linear,
    Quadratic,
    /// `O(n^k)` for k >= 3
    Polynomial(u32),
    /// Linear space held by the recursion stack
    RecursionStack,
    /// Linear space held by a backtracking call stack
    CallStack,
    /// Per-vertex bookkeeping of a graph traversal
    Vertices,
    Unknown,
}

impl SpaceComplexity {
    pub fn from_degree(degree: usize) -> Self {
        match degree {
            0 => SpaceComplexity::Constant,
            1 => SpaceComplexity::Linear,
            2 => SpaceComplexity::Quadratic,
            k => SpaceComplexity::Polynomial(u32::try_from(k).unwrap_or(u32::MAX)),
        }
    }
}

impl fmt::Display for SpaceComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceComplexity::Constant => f.write_str("O(1)"),
            SpaceComplexity::Linear => f.write_str("O(n)"),
            SpaceComplexity::Quadratic => f.write_str("O(n²)"),
            SpaceComplexity::Polynomial(k) => write!(f, "O(n^{k})"),
            SpaceComplexity::RecursionStack => f.write_str("O(n) (recursion stack)"),
            SpaceComplexity::CallStack => f.write_str("O(n) (call stack)"),
            SpaceComplexity::Vertices => f.write_str("O(V)"),
            SpaceComplexity::Unknown => f.write_str("Unknown"),
        }
    }
}

impl FromStr for SpaceComplexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "O(1)" => SpaceComplexity::Constant,
            "O(n)" => SpaceComplexity::Linear,
            "O(n²)" => SpaceComplexity::Quadratic,
            "O(n) (recursion stack)" => SpaceComplexity::RecursionStack,
            "O(n) (call stack)" => SpaceComplexity::CallStack,
            "O(V)" => SpaceComplexity::Vertices,
            "Unknown" => SpaceComplexity::Unknown,
            other => SpaceComplexity::from_degree(parse_degree(other)?),
        })
    }
}

/// Degree of an `O(n^k)` label. Callers map it through `from_degree`, so
/// `O(n^2)` reads back as the quadratic label.
fn parse_degree(label: &str) -> Result<usize, String> {
    label
        .strip_prefix("O(n^")
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(|k| k.parse().ok())
        .ok_or_else(|| format!("unrecognized complexity label '{label}'"))
}

// Labels travel as their display strings ("O(n log n)"), matching what
// callers persist and render.
macro_rules! label_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

label_serde!(TimeComplexity);
label_serde!(SpaceComplexity);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_strings() {
        for label in [
            TimeComplexity::Constant,
            TimeComplexity::Linearithmic,
            TimeComplexity::Polynomial(4),
            TimeComplexity::Exponential,
            TimeComplexity::Graph,
        ] {
            assert_eq!(label.to_string().parse::<TimeComplexity>().unwrap(), label);
        }
        assert_eq!(
            "O(n) (recursion stack)".parse::<SpaceComplexity>().unwrap(),
            SpaceComplexity::RecursionStack
        );
        assert!("O(n!)".parse::<TimeComplexity>().is_err());
    }

    #[test]
    fn test_caret_labels_normalize_to_named_degrees() {
        assert_eq!("O(n^1)".parse::<TimeComplexity>().unwrap(), TimeComplexity::Linear);
        assert_eq!("O(n^2)".parse::<TimeComplexity>().unwrap(), TimeComplexity::Quadratic);
        assert_eq!("O(n^0)".parse::<TimeComplexity>().unwrap(), TimeComplexity::Constant);
        assert_eq!("O(n^2)".parse::<SpaceComplexity>().unwrap(), SpaceComplexity::Quadratic);
        assert_eq!("O(n^3)".parse::<SpaceComplexity>().unwrap(), SpaceComplexity::Polynomial(3));
    }

    #[test]
    fn test_degree_mapping() {
        assert_eq!(TimeComplexity::from_degree(2).to_string(), "O(n²)");
        assert_eq!(TimeComplexity::from_degree(3).to_string(), "O(n^3)");
        assert_eq!(SpaceComplexity::from_degree(1), SpaceComplexity::Linear);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&TimeComplexity::Quadratic).unwrap();
        assert_eq!(json, "\"O(n²)\"");
    }
}
