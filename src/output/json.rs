//! JSON output formatting
//!
//! `JsonTreeBuilder` folds the entry stream back into nested mappings. The root
//! directory itself is not a key: the top-level mapping holds its immediate
//! contents.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::tree::{self, Entry, StreamingOutput, TreeWalker};

use super::config::JsonSchema;

/// Insertion-ordered mapping from entry name to entry mapping.
pub type TreeMap = Map<String, Value>;

const SIZE_KEY: &str = "size";
const TYPE_KEY: &str = "type";
const CHILDREN_KEY: &str = "children";

impl JsonSchema {
    fn node(self, entry: &Entry) -> TreeMap {
        let mut node = TreeMap::new();
        if self == JsonSchema::Nested {
            node.insert(TYPE_KEY.to_string(), Value::from(entry.kind.as_str()));
        }
        if let Some(bytes) = entry.size {
            node.insert(SIZE_KEY.to_string(), Value::from(bytes));
        }
        node
    }

    fn finish(self, mut node: TreeMap, children: Option<TreeMap>) -> Value {
        match (self, children) {
            (JsonSchema::Flat, Some(children)) => {
                for (name, child) in children {
                    if name == SIZE_KEY && node.contains_key(SIZE_KEY) {
                        tracing::warn!("entry named 'size' replaces the directory size in flat JSON");
                    }
                    node.insert(name, child);
                }
            }
            (JsonSchema::Nested, Some(children)) => {
                node.insert(CHILDREN_KEY.to_string(), Value::Object(children));
            }
            (_, None) => {}
        }
        Value::Object(node)
    }
}

/// A directory whose children are still arriving.
struct OpenDir {
    name: String,
    node: TreeMap,
    children: TreeMap,
}

/// Builds the nested mapping from entries in traversal order.
pub struct JsonTreeBuilder {
    schema: JsonSchema,
    root: TreeMap,
    open: Vec<OpenDir>,
}

impl JsonTreeBuilder {
    pub fn new(schema: JsonSchema) -> Self {
        Self {
            schema,
            root: TreeMap::new(),
            open: Vec::new(),
        }
    }

    /// Close open directories until `depth` levels remain.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            let Some(dir) = self.open.pop() else { break };
            let value = self.schema.finish(dir.node, Some(dir.children));
            self.insert(dir.name, value);
        }
    }

    fn insert(&mut self, name: String, value: Value) {
        let level = match self.open.last_mut() {
            Some(dir) => &mut dir.children,
            None => &mut self.root,
        };
        level.insert(name, value);
    }

    /// Finish the build and return the mapping for the root's contents.
    pub fn into_map(mut self) -> TreeMap {
        self.close_to(0);
        self.root
    }
}

impl StreamingOutput for JsonTreeBuilder {
    fn output_entry(&mut self, entry: &Entry) -> io::Result<()> {
        self.close_to(entry.depth);
        let node = self.schema.node(entry);
        if entry.is_dir() {
            self.open.push(OpenDir {
                name: entry.name.clone(),
                node,
                children: TreeMap::new(),
            });
        } else {
            let value = self.schema.finish(node, None);
            self.insert(entry.name.clone(), value);
        }
        Ok(())
    }
}

/// Walk `root` and build its mapping.
pub fn build_tree(walker: &TreeWalker, root: &Path, schema: JsonSchema) -> tree::Result<TreeMap> {
    let mut builder = JsonTreeBuilder::new(schema);
    walker.walk_streaming(root, &mut builder)?;
    Ok(builder.into_map())
}

/// Serialize with four-space indentation, keys in insertion order.
pub fn write_json<W: Write>(writer: W, map: &TreeMap) -> tree::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    map.serialize(&mut serializer)?;
    Ok(())
}

pub fn to_json_string(map: &TreeMap) -> tree::Result<String> {
    let mut buf = Vec::new();
    write_json(&mut buf, map)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Print the mapping as pretty-printed JSON to stdout.
pub fn print_json(map: &TreeMap) -> tree::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, map)?;
    writeln!(lock)?;
    Ok(())
}
