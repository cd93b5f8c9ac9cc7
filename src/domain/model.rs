use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 定理的一個條件，由負責的 task 設定 `verified`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: u32,
    pub description: String,
    #[serde(default)]
    pub verified: bool,
}

impl Condition {
    pub fn new(id: u32, description: &str) -> Self {
        Self {
            id,
            description: description.to_string(),
            verified: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring {
    pub name: String,
    pub noetherian: bool,
    pub maximals: Vec<String>,
    pub primes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub rank: i64,
    pub projective: bool,
}

/// Ideal represented only by its generator labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ideal {
    pub generators: Vec<String>,
}

impl Ideal {
    pub fn new<S: AsRef<str>>(generators: &[S]) -> Self {
        Self {
            generators: generators.iter().map(|g| g.as_ref().to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Decorates every generator `g` as `√(g)`.
    pub fn radical(&self) -> Ideal {
        Ideal {
            generators: self.generators.iter().map(|g| format!("√({})", g)).collect(),
        }
    }

    /// Generators common to every ideal, duplicates collapsed.
    ///
    /// Result order follows the first ideal. An empty slice yields the empty ideal.
    pub fn intersection(ideals: &[Ideal]) -> Ideal {
        let Some((first, rest)) = ideals.split_first() else {
            return Ideal::default();
        };

        let mut common: HashSet<&str> = first.generators.iter().map(String::as_str).collect();
        for ideal in rest {
            let current: HashSet<&str> = ideal.generators.iter().map(String::as_str).collect();
            common.retain(|g| current.contains(g));
        }

        let mut emitted = HashSet::new();
        let generators = first
            .generators
            .iter()
            .filter(|g| common.contains(g.as_str()) && emitted.insert(g.as_str()))
            .cloned()
            .collect();

        Ideal { generators }
    }

    /// Order-insensitive comparison of generator sets.
    pub fn same_generators(&self, other: &Ideal) -> bool {
        let lhs: HashSet<&String> = self.generators.iter().collect();
        let rhs: HashSet<&String> = other.generators.iter().collect();
        lhs == rhs
    }
}

impl fmt::Display for Ideal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.generators.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_of_two_primes() {
        let result = Ideal::intersection(&[Ideal::new(&["x", "y"]), Ideal::new(&["y", "z"])]);
        assert!(result.same_generators(&Ideal::new(&["y"])));
        assert_eq!(result.generators.len(), 1);
    }

    #[test]
    fn test_intersection_of_nothing_is_empty() {
        assert!(Ideal::intersection(&[]).is_empty());
    }

    #[test]
    fn test_intersection_collapses_duplicates() {
        let result = Ideal::intersection(&[Ideal::new(&["x", "x", "y"]), Ideal::new(&["x"])]);
        assert_eq!(result.generators, vec!["x".to_string()]);
    }

    #[test]
    fn test_intersection_single_ideal() {
        let result = Ideal::intersection(&[Ideal::new(&["a", "b"])]);
        assert!(result.same_generators(&Ideal::new(&["b", "a"])));
    }

    #[test]
    fn test_intersection_disjoint() {
        let result = Ideal::intersection(&[
            Ideal::new(&["x", "y"]),
            Ideal::new(&["y", "z"]),
            Ideal::new(&["z"]),
        ]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_radical_decorates_generators() {
        let ann = Ideal::new(&["ann(M)"]);
        assert_eq!(ann.radical().generators, vec!["√(ann(M))".to_string()]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Ideal::new(&["x", "y"]).to_string(), "{x, y}");
        assert_eq!(Ideal::default().to_string(), "{}");
    }
}
