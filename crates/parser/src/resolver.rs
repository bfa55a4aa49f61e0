//! Shape dependency resolution
//!
//! Computes the set of shape IDs transitively reachable from a root set.

use crate::smithy::SmithyModel;
use std::collections::BTreeSet;

/// Depth-first walker over shape references
///
/// The visited set is owned by the caller so several roots can accumulate
/// into one closure. Cycles and dangling targets both end the walk quietly.
pub struct DependencyResolver<'a> {
    model: &'a SmithyModel,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(model: &'a SmithyModel) -> Self {
        Self { model }
    }

    /// Add `shape_id` and everything it references to `visited`
    pub fn resolve(&self, shape_id: &str, visited: &mut BTreeSet<String>) {
        if visited.contains(shape_id) {
            return;
        }
        let Some(shape) = self.model.get_shape(shape_id) else {
            tracing::trace!(shape_id, "skipping target missing from model");
            return;
        };

        visited.insert(shape_id.to_string());
        tracing::debug!(shape_id, kind = shape.kind(), "visit");

        for target in shape.references() {
            self.resolve(target, visited);
        }
    }

    /// Closure of all `roots`, in one fresh set
    pub fn resolve_all<I, S>(&self, roots: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut visited = BTreeSet::new();
        for root in roots {
            self.resolve(root.as_ref(), &mut visited);
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SmithyParser;

    fn model(json: &str) -> SmithyModel {
        SmithyParser::from_json(json).unwrap().into_model()
    }

    #[test]
    fn test_self_referential_structure() {
        let model = model(
            r#"{
                "smithy": "2.0",
                "shapes": {
                    "ns#Node": {
                        "type": "structure",
                        "members": {
                            "next": { "target": "ns#Node" },
                            "children": { "target": "ns#NodeList" }
                        }
                    },
                    "ns#NodeList": {
                        "type": "list",
                        "member": { "target": "ns#Node" }
                    }
                }
            }"#,
        );

        let ids = DependencyResolver::new(&model).resolve_all(["ns#Node"]);
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["ns#Node", "ns#NodeList"]);
    }

    #[test]
    fn test_missing_root_and_target() {
        let model = model(
            r#"{
                "smithy": "2.0",
                "shapes": {
                    "ns#Holder": {
                        "type": "structure",
                        "members": { "value": { "target": "smithy.api#String" } }
                    }
                }
            }"#,
        );

        let resolver = DependencyResolver::new(&model);
        let mut visited = BTreeSet::new();
        resolver.resolve("ns#Absent", &mut visited);
        assert!(visited.is_empty());

        resolver.resolve("ns#Holder", &mut visited);
        assert_eq!(visited.len(), 1);
        assert!(visited.contains("ns#Holder"));
    }

    #[test]
    fn test_incremental_equals_batch() {
        let model = model(
            r#"{
                "smithy": "2.0",
                "shapes": {
                    "ns#A": { "type": "list", "member": { "target": "ns#B" } },
                    "ns#B": { "type": "string" },
                    "ns#C": { "type": "map", "key": { "target": "ns#B" }, "value": { "target": "ns#D" } },
                    "ns#D": { "type": "long" }
                }
            }"#,
        );

        let resolver = DependencyResolver::new(&model);
        let mut incremental = BTreeSet::new();
        resolver.resolve("ns#A", &mut incremental);
        resolver.resolve("ns#C", &mut incremental);

        assert_eq!(incremental, resolver.resolve_all(["ns#A", "ns#C"]));
        assert_eq!(incremental.len(), 4);
    }

    #[test]
    fn test_walks_through_unlisted_shape_types() {
        let model = model(
            r#"{
                "smithy": "1.0",
                "shapes": {
                    "ns#Holder": {
                        "type": "structure",
                        "members": { "tags": { "target": "ns#TagSet" } }
                    },
                    "ns#TagSet": {
                        "type": "set",
                        "member": { "target": "ns#Tag" }
                    },
                    "ns#Tag": {
                        "type": "structure",
                        "members": { "k": { "target": "ns#Key" } }
                    },
                    "ns#Key": { "type": "string" }
                }
            }"#,
        );

        let ids = DependencyResolver::new(&model).resolve_all(["ns#Holder"]);
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["ns#Holder", "ns#Key", "ns#Tag", "ns#TagSet"]);
    }
}
