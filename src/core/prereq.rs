//! Prerequisite ordering of courses
//!
//! Courses are sorted depth-first so that every prerequisite present in the
//! input comes before the courses that require it. Cycles are tolerated: an
//! edge that leads back into a course still being expanded is ignored.
//! Prerequisites that name no course in the input are emitted as leaves.

use crate::core::models::CourseNode;
use std::collections::HashMap;

/// Traversal state of a course. Unvisited courses have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Order course ids so prerequisites come first
///
/// Courses are expanded in input order and prerequisites in listed order, so
/// courses with no dependency between them keep their input order. Every
/// input id and every referenced prerequisite id appears exactly once.
///
/// Malformed graphs never fail:
/// - a prerequisite that leads back into a course being expanded (a cycle,
///   including a self reference) is skipped
/// - a prerequisite id with no entry in `courses` is a leaf: it is emitted
///   at its first reference and has nothing to expand
/// - for duplicate ids, the first entry's prerequisites are the ones used
///
/// Traversal uses an explicit stack, so long chains cannot overflow the call
/// stack.
#[must_use]
pub fn sort_by_prerequisites(courses: &[CourseNode]) -> Vec<String> {
    let mut by_id: HashMap<&str, &CourseNode> = HashMap::with_capacity(courses.len());
    for course in courses {
        by_id.entry(course.id.as_str()).or_insert(course);
    }

    let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(by_id.len());
    let mut order = Vec::with_capacity(by_id.len());
    // (course, index of its next prerequisite to visit)
    let mut stack: Vec<(&CourseNode, usize)> = Vec::new();

    for entry in courses {
        if marks.contains_key(entry.id.as_str()) {
            continue;
        }
        let Some(&root) = by_id.get(entry.id.as_str()) else {
            continue;
        };
        marks.insert(root.id.as_str(), Mark::InProgress);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let course = frame.0;
            let next = frame.1;
            frame.1 += 1;

            let Some(prereq) = course.prerequisites.get(next) else {
                marks.insert(course.id.as_str(), Mark::Done);
                order.push(course.id.clone());
                stack.pop();
                continue;
            };

            match marks.get(prereq.as_str()) {
                Some(Mark::Done) => {}
                Some(Mark::InProgress) => {
                    crate::debug!(
                        "Ignoring cyclic prerequisite edge {} -> {prereq}",
                        course.id
                    );
                }
                None => match by_id.get(prereq.as_str()) {
                    Some(&node) => {
                        marks.insert(node.id.as_str(), Mark::InProgress);
                        stack.push((node, 0));
                    }
                    None => {
                        marks.insert(prereq.as_str(), Mark::Done);
                        order.push(prereq.clone());
                    }
                },
            }
        }
    }

    order
}

/// Prerequisite references that name no course in `courses`
///
/// Returns `(course id, missing prerequisite id)` pairs in input order.
#[must_use]
pub fn dangling_prerequisites(courses: &[CourseNode]) -> Vec<(String, String)> {
    let known: std::collections::HashSet<&str> = courses.iter().map(|c| c.id.as_str()).collect();

    courses
        .iter()
        .flat_map(|course| {
            course
                .prerequisites
                .iter()
                .filter(|p| !known.contains(p.as_str()))
                .map(|p| (course.id.clone(), p.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, prereqs: &[&str]) -> CourseNode {
        CourseNode::with_prerequisites(id, prereqs.iter().copied())
    }

    fn position(order: &[String], id: &str) -> usize {
        order.iter().position(|c| c == id).unwrap()
    }

    #[test]
    fn test_chain() {
        let courses = vec![node("A", &["B"]), node("B", &["C"]), node("C", &[])];
        assert_eq!(sort_by_prerequisites(&courses), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_two_cycle() {
        let courses = vec![node("A", &["B"]), node("B", &["A"])];
        let order = sort_by_prerequisites(&courses);
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_self_reference() {
        let courses = vec![node("A", &["A", "B"]), node("B", &[])];
        assert_eq!(sort_by_prerequisites(&courses), vec!["B", "A"]);
    }

    #[test]
    fn test_longer_cycle_terminates() {
        let courses = vec![
            node("A", &["B"]),
            node("B", &["C"]),
            node("C", &["A"]),
            node("D", &["C"]),
        ];
        let order = sort_by_prerequisites(&courses);
        assert_eq!(order.len(), 4);
        assert_eq!(order, vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn test_missing_prerequisite_is_leaf() {
        let courses = vec![node("CS 240", &["MA 999"])];
        assert_eq!(sort_by_prerequisites(&courses), vec!["MA 999", "CS 240"]);

        let courses = vec![node("CS 240", &["CS 182", "MA 999"]), node("CS 182", &[])];
        assert_eq!(
            sort_by_prerequisites(&courses),
            vec!["CS 182", "MA 999", "CS 240"]
        );
    }

    #[test]
    fn test_shared_missing_prerequisite_emitted_once() {
        let courses = vec![
            node("CS 251", &["MA 261"]),
            node("CS 240", &["MA 261", "CS 180"]),
            node("CS 180", &[]),
        ];
        assert_eq!(
            sort_by_prerequisites(&courses),
            vec!["MA 261", "CS 251", "CS 180", "CS 240"]
        );
    }

    #[test]
    fn test_independent_courses_keep_input_order() {
        let courses = vec![node("X", &[]), node("A", &[]), node("M", &[])];
        assert_eq!(sort_by_prerequisites(&courses), vec!["X", "A", "M"]);
    }

    #[test]
    fn test_diamond() {
        let courses = vec![
            node("D", &["B", "C"]),
            node("B", &["A"]),
            node("C", &["A"]),
            node("A", &[]),
        ];
        let order = sort_by_prerequisites(&courses);
        assert_eq!(order, vec!["A", "B", "C", "D"]);
        assert!(position(&order, "A") < position(&order, "C"));
    }

    #[test]
    fn test_duplicate_ids_emitted_once() {
        let courses = vec![node("A", &["B"]), node("B", &[]), node("A", &["C"]), node("C", &[])];
        let order = sort_by_prerequisites(&courses);
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty() {
        assert!(sort_by_prerequisites(&[]).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let courses = vec![
            node("CS 251", &["CS 182", "CS 240"]),
            node("CS 240", &["CS 180"]),
            node("CS 182", &["CS 180"]),
            node("CS 180", &[]),
            node("CS 250", &["CS 251", "CS 250"]),
        ];
        let first = sort_by_prerequisites(&courses);
        let second = sort_by_prerequisites(&courses);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_order_is_stable_when_fed_back() {
        let courses = vec![
            node("CS 251", &["CS 182", "CS 240"]),
            node("CS 240", &["CS 180"]),
            node("MA 261", &["MA 162"]),
            node("CS 182", &["CS 180", "MA 162"]),
            node("CS 180", &[]),
            node("MA 162", &[]),
        ];
        let order = sort_by_prerequisites(&courses);

        let reordered: Vec<CourseNode> = order
            .iter()
            .map(|id| courses.iter().find(|c| &c.id == id).unwrap().clone())
            .collect();
        assert_eq!(sort_by_prerequisites(&reordered), order);
    }

    #[test]
    fn test_prerequisites_precede_dependents() {
        let courses = vec![
            node("CS 381", &["CS 251", "CS 182"]),
            node("CS 251", &["CS 182", "CS 240"]),
            node("CS 240", &["CS 180"]),
            node("CS 182", &["CS 180"]),
            node("CS 180", &[]),
        ];
        let order = sort_by_prerequisites(&courses);
        for course in &courses {
            for prereq in &course.prerequisites {
                assert!(position(&order, prereq) < position(&order, &course.id));
            }
        }
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let depth = 100_000;
        let courses: Vec<CourseNode> = (0..depth)
            .map(|i| {
                let prereqs: Vec<String> = if i + 1 < depth {
                    vec![format!("C{}", i + 1)]
                } else {
                    Vec::new()
                };
                CourseNode::with_prerequisites(format!("C{i}"), prereqs)
            })
            .collect();
        let order = sort_by_prerequisites(&courses);
        assert_eq!(order.len(), depth);
        assert_eq!(order.first().map(String::as_str), Some("C99999"));
        assert_eq!(order.last().map(String::as_str), Some("C0"));
    }

    #[test]
    fn test_dangling_prerequisites() {
        let courses = vec![node("A", &["B", "Z"]), node("B", &["Y"])];
        assert_eq!(
            dangling_prerequisites(&courses),
            vec![
                ("A".to_string(), "Z".to_string()),
                ("B".to_string(), "Y".to_string())
            ]
        );
    }
}
