use termtree::Tree;

use crate::domain::section::ConfigTree;
use crate::domain::value::Value;

pub trait SectionConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl SectionConvert for ConfigTree {
    /// Sections become branches labelled with their key, scalars become
    /// `key = value` leaves. The root is labelled with its full path, or `.`.
    fn to_tree_string(&self) -> Tree<String> {
        let label = if self.full_path().is_empty() {
            ".".to_string()
        } else {
            self.full_path().to_string()
        };
        Tree::new(label).with_leaves(leaves(self))
    }
}

fn leaves(section: &ConfigTree) -> Vec<Tree<String>> {
    section
        .iter()
        .map(|(key, value)| match value {
            Value::Scalar(scalar) => Tree::new(format!("{key} = {scalar}")),
            Value::Section(child) => Tree::new(key.to_string()).with_leaves(leaves(child)),
        })
        .collect()
}
