//! Repetition bounds for quantifiers

use super::error::GrammarError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Brace notation: `{N}`, `{,M}`, `{N,}` and `{N,M}`
static BRACE_NOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\s*(\d*)\s*(,?)\s*(\d*)\s*\}$").unwrap());

/// Inclusive repetition bounds, `max` of `None` meaning unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: usize,
    max: Option<usize>,
}

impl Bounds {
    pub fn new(min: usize, max: Option<usize>) -> Result<Self, GrammarError> {
        match max {
            Some(max) if min > max => Err(GrammarError::InvalidBounds { min, max }),
            _ => Ok(Bounds { min, max }),
        }
    }

    /// `?`
    pub fn optional() -> Self {
        Bounds {
            min: 0,
            max: Some(1),
        }
    }

    /// `*`
    pub fn any() -> Self {
        Bounds { min: 0, max: None }
    }

    /// `+`
    pub fn at_least_one() -> Self {
        Bounds { min: 1, max: None }
    }

    /// `{N}`
    pub fn exactly(n: usize) -> Self {
        Bounds {
            min: n,
            max: Some(n),
        }
    }

    /// `{,M}`
    pub fn at_most(max: usize) -> Self {
        Bounds {
            min: 0,
            max: Some(max),
        }
    }

    /// `{N,}`
    pub fn at_least(min: usize) -> Self {
        Bounds { min, max: None }
    }

    /// `{N,M}`
    pub fn between(min: usize, max: usize) -> Result<Self, GrammarError> {
        Self::new(min, Some(max))
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Whether `count` repetitions satisfy the bounds
    pub fn admits(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }

    /// Whether `count` repetitions leave no room for another one
    pub fn is_saturated(&self, count: usize) -> bool {
        self.max.map_or(false, |max| count >= max)
    }
}

impl FromStr for Bounds {
    type Err = GrammarError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        match notation.trim() {
            "?" => return Ok(Bounds::optional()),
            "*" => return Ok(Bounds::any()),
            "+" => return Ok(Bounds::at_least_one()),
            _ => {}
        }

        let unknown = || GrammarError::UnknownQuantifier(notation.to_string());
        let captures = BRACE_NOTATION.captures(notation.trim()).ok_or_else(unknown)?;
        let number = |index: usize| -> Result<Option<usize>, GrammarError> {
            match captures.get(index).map(|m| m.as_str()) {
                None | Some("") => Ok(None),
                Some(digits) => digits.parse().map(Some).map_err(|_| unknown()),
            }
        };

        let low = number(1)?;
        let has_comma = !captures[2].is_empty();
        let high = number(3)?;

        match (low, has_comma, high) {
            (Some(n), false, None) => Ok(Bounds::exactly(n)),
            (None, true, Some(m)) => Ok(Bounds::at_most(m)),
            (Some(n), true, None) => Ok(Bounds::at_least(n)),
            (Some(n), true, Some(m)) => Bounds::between(n, m),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (0, Some(1)) => write!(f, "?"),
            (0, None) => write!(f, "*"),
            (1, None) => write!(f, "+"),
            (min, Some(max)) if min == max => write!(f, "{{{}}}", min),
            (0, Some(max)) => write!(f, "{{,{}}}", max),
            (min, None) => write!(f, "{{{},}}", min),
            (min, Some(max)) => write!(f, "{{{},{}}}", min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_respects_both_ends() {
        let bounds = Bounds::between(2, 3).unwrap();
        assert!(!bounds.admits(1));
        assert!(bounds.admits(2));
        assert!(bounds.admits(3));
        assert!(!bounds.admits(4));
    }

    #[test]
    fn test_unbounded_is_never_saturated() {
        let bounds = Bounds::at_least_one();
        assert!(!bounds.is_saturated(0));
        assert!(!bounds.is_saturated(10_000));
        assert!(bounds.admits(10_000));
    }

    #[test]
    fn test_optional_saturates_after_one() {
        let bounds = Bounds::optional();
        assert!(bounds.admits(0));
        assert!(!bounds.is_saturated(0));
        assert!(bounds.is_saturated(1));
    }

    #[test]
    fn test_min_greater_than_max_is_rejected() {
        assert_eq!(
            Bounds::between(3, 2),
            Err(GrammarError::InvalidBounds { min: 3, max: 2 })
        );
        assert_eq!(
            "{5,1}".parse::<Bounds>(),
            Err(GrammarError::InvalidBounds { min: 5, max: 1 })
        );
    }

    #[test]
    fn test_display_uses_shortest_notation() {
        assert_eq!(Bounds::optional().to_string(), "?");
        assert_eq!(Bounds::any().to_string(), "*");
        assert_eq!(Bounds::at_least_one().to_string(), "+");
        assert_eq!(Bounds::exactly(3).to_string(), "{3}");
        assert_eq!(Bounds::at_most(4).to_string(), "{,4}");
        assert_eq!(Bounds::at_least(2).to_string(), "{2,}");
        assert_eq!(Bounds::between(2, 5).unwrap().to_string(), "{2,5}");
    }
}
