use arbor_common::NodeAddress;
use arbor_storage::NodeStore;

use crate::{ArborTreeError, Tree};

impl<Store, Clock> Tree<Store, Clock>
where
    Store: NodeStore,
    Clock: arbor_common::Clock,
{
    /// Renders the tree in parenthesized preorder form.
    ///
    /// A node is written as its value, then `(left)` if it has a left child,
    /// then `()` if it has a right child but no left child, then `(right)` if
    /// it has a right child. A lone node is just its value; an empty tree
    /// renders as the empty string.
    ///
    /// `5, 3, 7` renders as `5(3)(7)`, while `5, 7` renders as `5()(7)`.
    pub fn serialize(&self) -> Result<String, ArborTreeError> {
        let mut output = String::new();
        if self.is_empty() {
            return Ok(output);
        }

        let mut pending = vec![Step::Node(self.root)];
        while let Some(step) = pending.pop() {
            let address = match step {
                Step::Text(text) => {
                    output.push_str(text);
                    continue;
                }
                Step::Node(address) => address,
            };

            let node = self.node(&address)?;
            output.push_str(&node.value.to_string());

            // Steps are pushed in reverse of the order they are written
            if !node.right.is_empty() {
                pending.extend([Step::Text(")"), Step::Node(node.right), Step::Text("(")]);
                if node.left.is_empty() {
                    pending.push(Step::Text("()"));
                }
            }
            if !node.left.is_empty() {
                pending.extend([Step::Text(")"), Step::Node(node.left), Step::Text("(")]);
            }
        }

        Ok(output)
    }
}

enum Step {
    Node(NodeAddress),
    Text(&'static str),
}
