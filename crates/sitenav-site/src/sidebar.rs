//! Sidebar navigation tree.
//!
//! The external site tool describes its sidebar as nested literal data:
//!
//! ```json
//! [
//!   { "title": "VUE", "collapsable": true, "children": [
//!       ["vue/", "介绍"],
//!       ["vue/reactive", "响应式"]
//!   ]}
//! ]
//! ```
//!
//! A leaf is a `[path, label]` pair and a group is an object with `title`,
//! `collapsable` and `children`. [`parse_sidebar`] turns that untyped shape
//! into a [`SidebarTree`] of [`SidebarNode`] variants, [`validate_unique_paths`]
//! rejects repeated leaf paths, and [`render`] projects the tree back to the
//! literal format.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use sitenav_site::{parse_sidebar, render, validate_unique_paths};
//!
//! let raw = json!([
//!     { "title": "VUE", "collapsable": true, "children": [["vue/", "介绍"]] }
//! ]);
//! let tree = parse_sidebar(&raw).unwrap();
//! validate_unique_paths(&tree).unwrap();
//! assert_eq!(render(&tree), raw);
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Default bound on group nesting accepted by the parser.
///
/// `sitenav_config::DEFAULT_MAX_DEPTH` mirrors this value.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Deepest sidebar a descriptor file can carry.
///
/// JSON and YAML parsers stop at 128 nested containers. A descriptor spends
/// three on the root object, `themeConfig` and the sidebar array, then two per
/// group (object and `children` array) and one for the innermost leaf pair.
/// `sitenav_config` caps `sidebar.max_depth` at this value.
pub const MAX_SUPPORTED_DEPTH: usize = 60;

/// Location label used for the root of a standalone sidebar.
const ROOT_LOCATION: &str = "sidebar";

/// Keys accepted on a group object.
const GROUP_KEYS: [&str; 3] = ["title", "collapsable", "children"];

/// A single sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarNode {
    /// Page reference, written as `[path, label]`.
    Leaf {
        /// Relative document identifier.
        path: String,
        /// Navigation text.
        label: String,
    },
    /// Named section of further entries.
    Group {
        /// Section heading.
        title: String,
        /// Whether the section can be collapsed (defaults to `true`).
        collapsable: bool,
        /// Ordered child entries.
        children: Vec<SidebarNode>,
    },
}

impl SidebarNode {
    /// Create a leaf entry.
    pub fn leaf(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Leaf {
            path: path.into(),
            label: label.into(),
        }
    }

    /// Create a group entry.
    pub fn group(title: impl Into<String>, collapsable: bool, children: Vec<SidebarNode>) -> Self {
        Self::Group {
            title: title.into(),
            collapsable,
            children,
        }
    }

    /// Nesting depth of this node (a leaf or an empty group is 1).
    fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Group { children, .. } => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Ordered sequence of sidebar entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarTree {
    nodes: Vec<SidebarNode>,
}

impl SidebarTree {
    /// Create a tree from top-level nodes.
    #[must_use]
    pub fn new(nodes: Vec<SidebarNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[SidebarNode] {
        &self.nodes
    }

    /// Check if the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate leaves as `(path, label)` in depth-first, left-to-right order.
    #[must_use]
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![self.nodes.iter()],
        }
    }

    /// Number of leaf entries at any level.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Number of group entries at any level.
    #[must_use]
    pub fn group_count(&self) -> usize {
        fn count(nodes: &[SidebarNode]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    SidebarNode::Leaf { .. } => 0,
                    SidebarNode::Group { children, .. } => 1 + count(children),
                })
                .sum()
        }
        count(&self.nodes)
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.leaf_count() + self.group_count()
    }

    /// Maximum nesting depth (0 for an empty tree).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(SidebarNode::depth).max().unwrap_or(0)
    }
}

/// Depth-first iterator over leaf entries.
pub struct Leaves<'a> {
    stack: Vec<std::slice::Iter<'a, SidebarNode>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(SidebarNode::Leaf { path, label }) => {
                    return Some((path.as_str(), label.as_str()));
                }
                Some(SidebarNode::Group { children, .. }) => self.stack.push(children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Reason a sidebar node was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaErrorKind {
    /// A sequence was required.
    #[error("expected a sequence, found {0}")]
    NotASequence(&'static str),
    /// An object was required.
    #[error("expected an object, found {0}")]
    NotAnObject(&'static str),
    /// Node is neither a leaf pair nor a group object.
    #[error("expected a [path, label] pair or a group object, found {0}")]
    InvalidNode(&'static str),
    /// Leaf array does not have exactly two elements.
    #[error("leaf entry must have exactly 2 elements, found {0}")]
    LeafArity(usize),
    /// Leaf element is not a string.
    #[error("leaf {element} must be a string, found {found}")]
    LeafNotString {
        /// `path` or `label`.
        element: &'static str,
        /// JSON type that was found.
        found: &'static str,
    },
    /// Required field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// Field has the wrong type.
    #[error("field `{field}` must be {expected}, found {found}")]
    FieldType {
        /// Field name.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type that was found.
        found: &'static str,
    },
    /// Group carries a key outside `title`, `collapsable`, `children`.
    ///
    /// Theme extensions such as `sidebarDepth` or a group-level `path` are
    /// rejected deliberately: a group is fully described by its three keys.
    #[error("unknown group field `{0}`")]
    UnknownField(String),
    /// Group nesting is deeper than the configured bound.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthExceeded(usize),
}

/// Malformed sidebar node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Schema error at {location}: {kind}")]
pub struct SchemaError {
    /// Location of the offending node (e.g. `sidebar[0].children[1]`).
    pub location: String,
    /// What was wrong with it.
    pub kind: SchemaErrorKind,
}

impl SchemaError {
    pub(crate) fn new(location: impl Into<String>, kind: SchemaErrorKind) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }
}

/// A leaf path that appears more than once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Duplicate sidebar path '{path}' at {duplicate} (first defined at {first})")]
pub struct DuplicatePathError {
    /// The repeated path.
    pub path: String,
    /// Location of the first occurrence.
    pub first: String,
    /// Location of the repeated occurrence.
    pub duplicate: String,
}

/// Parse a raw sidebar with the default depth bound.
///
/// # Errors
///
/// Returns [`SchemaError`] if any node has the wrong shape.
pub fn parse_sidebar(raw: &Value) -> Result<SidebarTree, SchemaError> {
    SidebarParser::new().parse(raw)
}

/// Parse a raw sidebar with an explicit depth bound.
///
/// # Errors
///
/// Returns [`SchemaError`] if any node has the wrong shape or nesting is
/// deeper than `max_depth`.
pub fn parse_sidebar_with_depth(raw: &Value, max_depth: usize) -> Result<SidebarTree, SchemaError> {
    SidebarParser::new().max_depth(max_depth).parse(raw)
}

/// Configurable sidebar parser.
#[derive(Debug, Clone)]
pub struct SidebarParser {
    max_depth: usize,
    root: String,
}

impl Default for SidebarParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarParser {
    /// Create a parser with the default depth bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            root: ROOT_LOCATION.to_owned(),
        }
    }

    /// Set the maximum group nesting depth (top-level nodes are depth 1).
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the location label reported for the root in errors.
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Parse the raw structure into a typed tree.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] for the first malformed node found.
    pub fn parse(&self, raw: &Value) -> Result<SidebarTree, SchemaError> {
        let nodes = self.parse_nodes(raw, &self.root, 1)?;
        Ok(SidebarTree::new(nodes))
    }

    fn parse_nodes(
        &self,
        raw: &Value,
        location: &str,
        depth: usize,
    ) -> Result<Vec<SidebarNode>, SchemaError> {
        let items = raw.as_array().ok_or_else(|| {
            SchemaError::new(location, SchemaErrorKind::NotASequence(value_kind(raw)))
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.parse_node(item, &format!("{location}[{i}]"), depth))
            .collect()
    }

    fn parse_node(
        &self,
        raw: &Value,
        location: &str,
        depth: usize,
    ) -> Result<SidebarNode, SchemaError> {
        if depth > self.max_depth {
            return Err(SchemaError::new(
                location,
                SchemaErrorKind::DepthExceeded(self.max_depth),
            ));
        }

        match raw {
            Value::Array(items) => parse_leaf(items, location),
            Value::Object(fields) => self.parse_group(fields, location, depth),
            other => Err(SchemaError::new(
                location,
                SchemaErrorKind::InvalidNode(value_kind(other)),
            )),
        }
    }

    fn parse_group(
        &self,
        fields: &Map<String, Value>,
        location: &str,
        depth: usize,
    ) -> Result<SidebarNode, SchemaError> {
        if let Some(unknown) = fields.keys().find(|k| !GROUP_KEYS.contains(&k.as_str())) {
            return Err(SchemaError::new(
                location,
                SchemaErrorKind::UnknownField(unknown.clone()),
            ));
        }

        let title = match fields.get("title") {
            Some(Value::String(title)) => title.clone(),
            Some(other) => {
                return Err(SchemaError::new(
                    location,
                    SchemaErrorKind::FieldType {
                        field: "title",
                        expected: "a string",
                        found: value_kind(other),
                    },
                ));
            }
            None => {
                return Err(SchemaError::new(
                    location,
                    SchemaErrorKind::MissingField("title"),
                ));
            }
        };

        let collapsable = match fields.get("collapsable") {
            Some(Value::Bool(collapsable)) => *collapsable,
            Some(other) => {
                return Err(SchemaError::new(
                    location,
                    SchemaErrorKind::FieldType {
                        field: "collapsable",
                        expected: "a boolean",
                        found: value_kind(other),
                    },
                ));
            }
            None => true,
        };

        let children = fields.get("children").ok_or_else(|| {
            SchemaError::new(location, SchemaErrorKind::MissingField("children"))
        })?;
        if !children.is_array() {
            return Err(SchemaError::new(
                location,
                SchemaErrorKind::FieldType {
                    field: "children",
                    expected: "a sequence",
                    found: value_kind(children),
                },
            ));
        }
        let children = self.parse_nodes(children, &format!("{location}.children"), depth + 1)?;

        Ok(SidebarNode::Group {
            title,
            collapsable,
            children,
        })
    }
}

fn parse_leaf(items: &[Value], location: &str) -> Result<SidebarNode, SchemaError> {
    let [path, label] = items else {
        return Err(SchemaError::new(
            location,
            SchemaErrorKind::LeafArity(items.len()),
        ));
    };

    let as_string = |value: &Value, element: &'static str| {
        value.as_str().map(str::to_owned).ok_or_else(|| {
            SchemaError::new(
                location,
                SchemaErrorKind::LeafNotString {
                    element,
                    found: value_kind(value),
                },
            )
        })
    };

    Ok(SidebarNode::Leaf {
        path: as_string(path, "path")?,
        label: as_string(label, "label")?,
    })
}

/// Human-readable JSON type name.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}

/// Check that every leaf path appears only once.
///
/// Walks the tree depth-first, left to right, and reports the first path
/// seen twice.
///
/// # Errors
///
/// Returns [`DuplicatePathError`] naming the repeated path.
pub fn validate_unique_paths(tree: &SidebarTree) -> Result<(), DuplicatePathError> {
    validate_unique_paths_at(tree, ROOT_LOCATION)
}

/// Same as [`validate_unique_paths`], reporting locations under `root`.
pub(crate) fn validate_unique_paths_at(
    tree: &SidebarTree,
    root: &str,
) -> Result<(), DuplicatePathError> {
    fn walk<'a>(
        nodes: &'a [SidebarNode],
        location: &str,
        seen: &mut HashMap<&'a str, String>,
    ) -> Result<(), DuplicatePathError> {
        for (i, node) in nodes.iter().enumerate() {
            let here = format!("{location}[{i}]");
            match node {
                SidebarNode::Leaf { path, .. } => {
                    if let Some(first) = seen.get(path.as_str()) {
                        return Err(DuplicatePathError {
                            path: path.clone(),
                            first: first.clone(),
                            duplicate: here,
                        });
                    }
                    seen.insert(path.as_str(), here);
                }
                SidebarNode::Group { children, .. } => {
                    walk(children, &format!("{here}.children"), seen)?;
                }
            }
        }
        Ok(())
    }

    walk(tree.nodes(), root, &mut HashMap::new())
}

/// Project the tree back to the external literal format.
#[must_use]
pub fn render(tree: &SidebarTree) -> Value {
    Value::Array(tree.nodes().iter().map(render_node).collect())
}

fn render_node(node: &SidebarNode) -> Value {
    match node {
        SidebarNode::Leaf { path, label } => {
            Value::Array(vec![Value::String(path.clone()), Value::String(label.clone())])
        }
        SidebarNode::Group {
            title,
            collapsable,
            children,
        } => {
            let mut fields = Map::new();
            fields.insert("title".to_owned(), Value::String(title.clone()));
            fields.insert("collapsable".to_owned(), Value::Bool(*collapsable));
            fields.insert(
                "children".to_owned(),
                Value::Array(children.iter().map(render_node).collect()),
            );
            Value::Object(fields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn vue_sidebar() -> Value {
        json!([
            {
                "title": "VUE",
                "collapsable": true,
                "children": [
                    ["vue/", "介绍"],
                    ["vue/reactive", "响应式"]
                ]
            }
        ])
    }

    fn runtime_sidebar() -> Value {
        json!([
            {
                "title": "VUE",
                "collapsable": true,
                "children": [
                    ["vue/", "介绍"],
                    {
                        "title": "runtime包源码解析",
                        "collapsable": false,
                        "children": [
                            ["vue/runtime-core", "runtime-core"],
                            ["vue/runtime-dom", "runtime-dom"]
                        ]
                    },
                    ["vue/reactive", "响应式"]
                ]
            },
            {
                "title": "React",
                "collapsable": true,
                "children": [["react/", "介绍"]]
            }
        ])
    }

    fn assert_schema_error(raw: &Value, location: &str, kind: &SchemaErrorKind) {
        let err = parse_sidebar(raw).unwrap_err();
        assert_eq!(err.location, location);
        assert_eq!(&err.kind, kind);
    }

    #[test]
    fn test_parse_vue_group() {
        let tree = parse_sidebar(&vue_sidebar()).unwrap();

        assert_eq!(
            tree,
            SidebarTree::new(vec![SidebarNode::group(
                "VUE",
                true,
                vec![
                    SidebarNode::leaf("vue/", "介绍"),
                    SidebarNode::leaf("vue/reactive", "响应式"),
                ],
            )])
        );
    }

    #[test]
    fn test_vue_group_renders_identically() {
        let raw = vue_sidebar();
        let tree = parse_sidebar(&raw).unwrap();

        assert_eq!(tree.nodes().len(), 1);
        assert_eq!(tree.group_count(), 1);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(render(&tree), raw);
    }

    #[test]
    fn test_nested_group_preserves_two_levels() {
        let raw = runtime_sidebar();
        let tree = parse_sidebar(&raw).unwrap();

        assert_eq!(tree.depth(), 3);
        let SidebarNode::Group { children, .. } = &tree.nodes()[0] else {
            panic!("expected group");
        };
        let SidebarNode::Group {
            title,
            collapsable,
            children: nested,
        } = &children[1]
        else {
            panic!("expected nested group");
        };
        assert_eq!(title, "runtime包源码解析");
        assert!(!collapsable);
        assert_eq!(nested.len(), 2);
        assert_eq!(render(&tree), raw);
    }

    #[test]
    fn test_round_trip_preserves_counts_and_order() {
        let raw = runtime_sidebar();
        let tree = parse_sidebar(&raw).unwrap();
        let reparsed = parse_sidebar(&render(&tree)).unwrap();

        assert_eq!(reparsed.node_count(), tree.node_count());
        assert_eq!(reparsed.depth(), tree.depth());
        let paths: Vec<_> = reparsed.leaves().map(|(path, _)| path).collect();
        assert_eq!(
            paths,
            vec![
                "vue/",
                "vue/runtime-core",
                "vue/runtime-dom",
                "vue/reactive",
                "react/"
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let once = render(&parse_sidebar(&runtime_sidebar()).unwrap());
        let twice = render(&parse_sidebar(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_collapsable_defaults_to_true() {
        let raw = json!([{ "title": "Guide", "children": [] }]);
        let tree = parse_sidebar(&raw).unwrap();

        assert_eq!(tree.nodes()[0], SidebarNode::group("Guide", true, vec![]));
        assert_eq!(
            render(&tree),
            json!([{ "title": "Guide", "collapsable": true, "children": [] }])
        );
    }

    #[test]
    fn test_top_level_leaves_allowed() {
        let raw = json!([["/", "Home"], ["about", "About"]]);
        let tree = parse_sidebar(&raw).unwrap();
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_empty_sidebar() {
        let tree = parse_sidebar(&json!([])).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
        assert_eq!(render(&tree), json!([]));
    }

    #[test]
    fn test_rendered_group_key_order() {
        let tree = parse_sidebar(&json!([{ "children": [], "collapsable": false, "title": "A" }]))
            .unwrap();
        let rendered = serde_json::to_string(&render(&tree)).unwrap();
        assert_eq!(
            rendered,
            r#"[{"title":"A","collapsable":false,"children":[]}]"#
        );
    }

    #[test]
    fn test_root_must_be_sequence() {
        assert_schema_error(
            &json!({ "title": "VUE" }),
            "sidebar",
            &SchemaErrorKind::NotASequence("an object"),
        );
    }

    #[test]
    fn test_leaf_single_string_rejected() {
        assert_schema_error(
            &json!(["vue/"]),
            "sidebar[0]",
            &SchemaErrorKind::InvalidNode("a string"),
        );
    }

    #[test]
    fn test_leaf_wrong_arity_rejected() {
        assert_schema_error(
            &json!([["vue/"]]),
            "sidebar[0]",
            &SchemaErrorKind::LeafArity(1),
        );
        assert_schema_error(
            &json!([["vue/", "Vue", "extra"]]),
            "sidebar[0]",
            &SchemaErrorKind::LeafArity(3),
        );
    }

    #[test]
    fn test_leaf_non_string_label_rejected() {
        assert_schema_error(
            &json!([{ "title": "VUE", "children": [["vue/", 42]] }]),
            "sidebar[0].children[0]",
            &SchemaErrorKind::LeafNotString {
                element: "label",
                found: "a number",
            },
        );
    }

    #[test]
    fn test_group_missing_children_rejected() {
        assert_schema_error(
            &json!([{ "title": "VUE", "collapsable": true }]),
            "sidebar[0]",
            &SchemaErrorKind::MissingField("children"),
        );
    }

    #[test]
    fn test_group_missing_title_rejected() {
        assert_schema_error(
            &json!([{ "children": [] }]),
            "sidebar[0]",
            &SchemaErrorKind::MissingField("title"),
        );
    }

    #[test]
    fn test_group_non_bool_collapsable_rejected() {
        assert_schema_error(
            &json!([{ "title": "VUE", "collapsable": "yes", "children": [] }]),
            "sidebar[0]",
            &SchemaErrorKind::FieldType {
                field: "collapsable",
                expected: "a boolean",
                found: "a string",
            },
        );
    }

    #[test]
    fn test_group_children_not_sequence_rejected() {
        assert_schema_error(
            &json!([{ "title": "VUE", "children": "vue/" }]),
            "sidebar[0]",
            &SchemaErrorKind::FieldType {
                field: "children",
                expected: "a sequence",
                found: "a string",
            },
        );
    }

    #[test]
    fn test_group_unknown_field_rejected() {
        assert_schema_error(
            &json!([{ "title": "VUE", "children": [], "sidebarDepth": 2 }]),
            "sidebar[0]",
            &SchemaErrorKind::UnknownField("sidebarDepth".to_owned()),
        );
    }

    #[test]
    fn test_depth_limit() {
        let raw = json!([{ "title": "A", "children": [{ "title": "B", "children": [["b", "B"]] }] }]);

        assert!(parse_sidebar_with_depth(&raw, 3).is_ok());
        let err = parse_sidebar_with_depth(&raw, 2).unwrap_err();
        assert_eq!(err.location, "sidebar[0].children[0].children[0]");
        assert_eq!(err.kind, SchemaErrorKind::DepthExceeded(2));
    }

    #[test]
    fn test_custom_root_location() {
        let err = SidebarParser::new()
            .root("themeConfig.sidebar")
            .parse(&json!([null]))
            .unwrap_err();
        assert_eq!(err.location, "themeConfig.sidebar[0]");
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn test_unique_paths_pass() {
        let tree = parse_sidebar(&runtime_sidebar()).unwrap();
        assert!(validate_unique_paths(&tree).is_ok());
    }

    #[test]
    fn test_duplicate_path_reported_with_locations() {
        let raw = json!([
            ["vue/", "介绍"],
            { "title": "VUE", "children": [["vue/reactive", "响应式"], ["vue/", "again"]] }
        ]);
        let tree = parse_sidebar(&raw).unwrap();

        let err = validate_unique_paths(&tree).unwrap_err();

        assert_eq!(
            err,
            DuplicatePathError {
                path: "vue/".to_owned(),
                first: "sidebar[0]".to_owned(),
                duplicate: "sidebar[1].children[1]".to_owned(),
            }
        );
        assert!(err.to_string().contains("'vue/'"));
    }

    #[test]
    fn test_first_duplicate_in_traversal_order_wins() {
        let tree = SidebarTree::new(vec![
            SidebarNode::leaf("a", "A"),
            SidebarNode::leaf("b", "B"),
            SidebarNode::leaf("b", "B2"),
            SidebarNode::leaf("a", "A2"),
        ]);
        let err = validate_unique_paths(&tree).unwrap_err();
        assert_eq!(err.path, "b");
    }

    #[test]
    fn test_same_label_different_paths_allowed() {
        let tree = SidebarTree::new(vec![
            SidebarNode::leaf("vue/", "介绍"),
            SidebarNode::leaf("react/", "介绍"),
        ]);
        assert!(validate_unique_paths(&tree).is_ok());
    }
}
