use std::{collections::BTreeMap, fmt};

use serde_json::Value;

use super::language::LanguageCode;

/// A translation tree: string leaves under nested named nodes.
///
/// JSON arrays are stored as nodes keyed by index (`"0"`, `"1"`, ...), so
/// `features.chatbot.bullets.0` walks like any other path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationTree {
    Leaf(String),
    Node(BTreeMap<String, TranslationTree>),
}

/// A JSON value left out of the tree because no dotted key can reach it
/// as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    /// Dotted key path of the value.
    pub key: String,
    pub problem: ValueProblem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueProblem {
    /// A leaf that is not a string; holds the JSON kind found.
    NotAString(&'static str),
    /// An object key containing `.`, which lookup would split.
    DottedKey,
    /// The document itself is not an object.
    NotAnObject(&'static str),
}

impl fmt::Display for ValueProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueProblem::NotAString(kind) => write!(f, "expected a string, found {kind}"),
            ValueProblem::DottedKey => {
                write!(f, "key contains `.` and cannot be reached by a dotted path")
            }
            ValueProblem::NotAnObject(kind) => {
                write!(f, "expected an object at the top level, found {kind}")
            }
        }
    }
}

impl Default for TranslationTree {
    fn default() -> Self {
        TranslationTree::Node(BTreeMap::new())
    }
}

impl TranslationTree {
    /// Convert a parsed JSON object into a tree.
    ///
    /// Non-string scalars and keys containing `.` are left out of the tree
    /// and reported back so callers can surface them; resolution then
    /// treats those paths as missing. A root that is not an object yields
    /// an empty tree.
    pub fn from_json(value: &Value) -> (Self, Vec<InvalidValue>) {
        let mut invalid = Vec::new();
        let tree = match value {
            Value::Object(_) => convert(value, String::new(), &mut invalid).unwrap_or_default(),
            other => {
                invalid.push(InvalidValue {
                    key: String::new(),
                    problem: ValueProblem::NotAnObject(json_kind(other)),
                });
                TranslationTree::default()
            }
        };
        (tree, invalid)
    }

    /// Walk `segments` and return the string leaf at the end, if any.
    ///
    /// Returns `None` when a segment is missing, when a leaf is reached
    /// before the last segment, or when the path ends on a node.
    pub fn lookup<'a, I>(&self, segments: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self;
        for segment in segments {
            match current {
                TranslationTree::Node(children) => current = children.get(segment)?,
                TranslationTree::Leaf(_) => return None,
            }
        }
        match current {
            TranslationTree::Leaf(text) => Some(text),
            TranslationTree::Node(_) => None,
        }
    }

    /// Flatten into `dotted.key -> value` pairs, sorted by key.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        flatten_into(self, String::new(), &mut out);
        out
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn convert(value: &Value, path: String, invalid: &mut Vec<InvalidValue>) -> Option<TranslationTree> {
    match value {
        Value::String(s) => Some(TranslationTree::Leaf(s.clone())),
        Value::Object(map) => {
            let children = map
                .iter()
                .filter_map(|(key, val)| {
                    let child_path = join_key(&path, key);
                    if key.contains('.') {
                        invalid.push(InvalidValue {
                            key: child_path,
                            problem: ValueProblem::DottedKey,
                        });
                        return None;
                    }
                    convert(val, child_path, invalid).map(|tree| (key.clone(), tree))
                })
                .collect();
            Some(TranslationTree::Node(children))
        }
        Value::Array(items) => {
            let children = items
                .iter()
                .enumerate()
                .filter_map(|(index, val)| {
                    let segment = index.to_string();
                    convert(val, join_key(&path, &segment), invalid).map(|tree| (segment, tree))
                })
                .collect();
            Some(TranslationTree::Node(children))
        }
        Value::Number(_) | Value::Bool(_) | Value::Null => {
            invalid.push(InvalidValue {
                key: path,
                problem: ValueProblem::NotAString(json_kind(value)),
            });
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn flatten_into(tree: &TranslationTree, prefix: String, out: &mut BTreeMap<String, String>) {
    match tree {
        TranslationTree::Leaf(text) => {
            out.insert(prefix, text.clone());
        }
        TranslationTree::Node(children) => {
            for (key, child) in children {
                flatten_into(child, join_key(&prefix, key), out);
            }
        }
    }
}

/// The translation tree of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    language: LanguageCode,
    root: TranslationTree,
}

impl TranslationTable {
    pub fn new(language: LanguageCode, root: TranslationTree) -> Self {
        Self { language, root }
    }

    /// Build a table from a JSON document, discarding invalid values.
    pub fn from_json(language: LanguageCode, value: &Value) -> Self {
        let (root, _) = TranslationTree::from_json(value);
        Self::new(language, root)
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Look up a dotted key such as `pricing.cards.website.bullets.2`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.root.lookup(key.split('.'))
    }
}
