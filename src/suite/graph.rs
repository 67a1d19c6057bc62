//! Suite construction and dependency ordering
//!
//! The prerequisite edges form a directed graph over case names. `build()`
//! validates the graph and computes a topological execution order up front:
//! a cycle is a suite-definition error, never a run-time condition.

use std::collections::{BTreeSet, HashMap};

use crate::common::{Error, Result};

use super::case::TestCase;

/// Collects test cases before validation
pub struct SuiteBuilder<C> {
    cases: Vec<TestCase<C>>,
}

impl<C> SuiteBuilder<C> {
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Add a test case to the registry
    pub fn case(mut self, case: TestCase<C>) -> Self {
        self.cases.push(case);
        self
    }

    /// Validate the registry and compute the execution order
    ///
    /// Fails on duplicate names, prerequisites naming unknown cases, and
    /// dependency cycles. Among cases whose prerequisites are satisfied,
    /// registration order is preserved.
    pub fn build(self) -> Result<Suite<C>> {
        let cases = self.cases;

        let mut index: HashMap<&'static str, usize> = HashMap::new();
        for (i, case) in cases.iter().enumerate() {
            if index.insert(case.name(), i).is_some() {
                return Err(Error::SuiteDefinition(format!(
                    "duplicate test case name '{}'",
                    case.name()
                )));
            }
        }

        let mut indegree = vec![0usize; cases.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); cases.len()];

        for (i, case) in cases.iter().enumerate() {
            for prereq in case.prerequisites() {
                let Some(&j) = index.get(prereq) else {
                    return Err(Error::SuiteDefinition(format!(
                        "test case '{}' depends on unknown case '{}'",
                        case.name(),
                        prereq
                    )));
                };
                dependents[j].push(i);
                indegree[i] += 1;
            }
        }

        // Kahn's algorithm; the BTreeSet keeps registration order among
        // cases that are simultaneously ready.
        let mut ready: BTreeSet<usize> = indegree
            .iter()
            .enumerate()
            .filter(|(_, &d)| d == 0)
            .map(|(i, _)| i)
            .collect();

        let mut order = Vec::with_capacity(cases.len());

        while let Some(i) = ready.pop_first() {
            order.push(i);
            for &dep in &dependents[i] {
                indegree[dep] -= 1;
                if indegree[dep] == 0 {
                    ready.insert(dep);
                }
            }
        }

        if order.len() != cases.len() {
            let stuck: Vec<&str> = cases
                .iter()
                .enumerate()
                .filter(|(i, _)| indegree[*i] > 0)
                .map(|(_, c)| c.name())
                .collect();
            return Err(Error::SuiteDefinition(format!(
                "dependency cycle involving: {}",
                stuck.join(", ")
            )));
        }

        Ok(Suite { cases, order })
    }
}

impl<C> Default for SuiteBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated test suite with a fixed execution order
#[derive(Debug)]
pub struct Suite<C> {
    cases: Vec<TestCase<C>>,
    order: Vec<usize>,
}

impl<C> Suite<C> {
    pub fn builder() -> SuiteBuilder<C> {
        SuiteBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate the cases in dependency-consistent execution order
    pub fn cases_in_order(&self) -> impl Iterator<Item = &TestCase<C>> {
        self.order.iter().map(move |&i| &self.cases[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Result;
    use futures_util::future::LocalBoxFuture;

    fn noop(_: &()) -> LocalBoxFuture<'_, Result<()>> {
        Box::pin(async { Ok(()) })
    }

    fn names<C>(suite: &Suite<C>) -> Vec<&'static str> {
        suite.cases_in_order().map(|c| c.name()).collect()
    }

    #[test]
    fn test_registration_order_preserved_without_edges() {
        let suite = SuiteBuilder::new()
            .case(TestCase::new("a", &[], noop))
            .case(TestCase::new("b", &[], noop))
            .case(TestCase::new("c", &[], noop))
            .build()
            .unwrap();

        assert_eq!(names(&suite), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_prerequisites_precede_dependents() {
        // "login" is registered last but everything depends on it.
        let suite = SuiteBuilder::new()
            .case(TestCase::new("save", &["editor"], noop))
            .case(TestCase::new("editor", &["login"], noop))
            .case(TestCase::new("login", &[], noop))
            .build()
            .unwrap();

        let order = names(&suite);
        let pos = |n: &str| order.iter().position(|&x| x == n).unwrap();
        assert!(pos("login") < pos("editor"));
        assert!(pos("editor") < pos("save"));
    }

    #[test]
    fn test_cycle_is_a_definition_error() {
        let err = SuiteBuilder::new()
            .case(TestCase::new("a", &["b"], noop))
            .case(TestCase::new("b", &["a"], noop))
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let err = SuiteBuilder::new()
            .case(TestCase::new("a", &["a"], noop))
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_unknown_prerequisite_rejected() {
        let err = SuiteBuilder::new()
            .case(TestCase::new("a", &["missing"], noop))
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("unknown case 'missing'"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = SuiteBuilder::new()
            .case(TestCase::new("a", &[], noop))
            .case(TestCase::new("a", &[], noop))
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("duplicate"));
    }
}
