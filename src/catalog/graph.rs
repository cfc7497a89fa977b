// src/catalog/graph.rs

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::catalog::course::Course;

/// Internal node structure: stores immediate prerequisites and dependents.
#[derive(Debug, Clone, Default)]
struct GraphNode {
    /// Courses referenced anywhere in this course's prerequisite tree.
    prereqs: Vec<String>,
    /// Courses whose prerequisite tree references this one.
    dependents: Vec<String>,
}

/// Prerequisite graph of a catalog, keyed by canonical course code.
///
/// Edges are conservative: every leaf of a course's tree counts, whether it
/// sits under an `And` or an `Or`. Cycles are not rejected; they are
/// recorded so the evaluator and scheduler can report them.
#[derive(Debug, Clone, Default)]
pub struct PrereqGraph {
    nodes: HashMap<String, GraphNode>,
    /// Each cycle's members, sorted.
    cycles: Vec<Vec<String>>,
    /// Course code -> index into `cycles`.
    cycle_of: HashMap<String, usize>,
}

impl PrereqGraph {
    /// Build the graph from catalog courses. References to codes outside the
    /// catalog are kept in `prereqs_of` but do not become nodes.
    pub fn from_courses(courses: &[Course]) -> Self {
        let mut nodes: HashMap<String, GraphNode> = courses
            .iter()
            .map(|c| {
                let node = GraphNode {
                    prereqs: c.prereqs.course_codes().iter().map(|s| s.to_string()).collect(),
                    dependents: Vec::new(),
                };
                (c.code.clone(), node)
            })
            .collect();

        // Edge direction: prereq -> course.
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for course in courses {
            graph.add_node(course.code.as_str());
        }
        for course in courses {
            for prereq in course.prereqs.course_codes() {
                if graph.contains_node(prereq) {
                    graph.add_edge(prereq, course.code.as_str(), ());
                }
            }
        }

        let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut members: Vec<String> = scc.into_iter().map(str::to_string).collect();
                members.sort();
                members
            })
            .collect();
        cycles.sort();

        let mut cycle_of = HashMap::new();
        for (idx, members) in cycles.iter().enumerate() {
            for code in members {
                cycle_of.insert(code.clone(), idx);
            }
        }

        // Second pass: populate dependents from the prereq lists.
        for course in courses {
            for prereq in course.prereqs.course_codes() {
                if let Some(node) = nodes.get_mut(prereq) {
                    node.dependents.push(course.code.clone());
                }
            }
        }

        Self {
            nodes,
            cycles,
            cycle_of,
        }
    }

    /// Codes referenced by the prerequisite tree of `code`.
    pub fn prereqs_of(&self, code: &str) -> &[String] {
        self.nodes
            .get(code)
            .map(|n| n.prereqs.as_slice())
            .unwrap_or(&[])
    }

    /// Catalog courses whose prerequisite tree references `code`.
    pub fn dependents_of(&self, code: &str) -> &[String] {
        self.nodes
            .get(code)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// All prerequisite cycles found in the catalog.
    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }

    /// Members of the cycle `code` belongs to, if any.
    pub fn cycle_containing(&self, code: &str) -> Option<&[String]> {
        self.cycle_of
            .get(code)
            .map(|&idx| self.cycles[idx].as_slice())
    }

    /// Whether `a` and `b` sit on the same prerequisite cycle.
    pub fn in_same_cycle(&self, a: &str, b: &str) -> bool {
        match (self.cycle_of.get(a), self.cycle_of.get(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}
