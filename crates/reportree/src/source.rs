//! The recursively enumerable source contract.

/// A value that can list its direct children as values of the same type.
///
/// Returning no children is valid: such a source is treated as a leaf when
/// the engine decides whether to branch.
///
/// Sources are cloned whenever the engine binds them to a query, so cheap
/// handles (`&Node`, `Rc<Node>`, a path) make good implementors.
///
/// # Example
///
/// ```
/// use reportree::Enumerable;
///
/// struct Node {
///     name: &'static str,
///     children: Vec<Node>,
/// }
///
/// #[derive(Clone, Copy)]
/// struct NodeRef<'a>(&'a Node);
///
/// impl<'a> Enumerable for NodeRef<'a> {
///     type Children = Vec<NodeRef<'a>>;
///
///     fn children(&self) -> Self::Children {
///         self.0.children.iter().map(NodeRef).collect()
///     }
/// }
///
/// let tree = Node { name: "root", children: vec![Node { name: "leaf", children: vec![] }] };
/// let names: Vec<_> = NodeRef(&tree).children().into_iter().map(|n| n.0.name).collect();
/// assert_eq!(names, ["leaf"]);
/// ```
pub trait Enumerable: Sized {
    /// Iterator over direct children, in their natural order.
    type Children: IntoIterator<Item = Self>;

    /// Enumerates the direct children of this source.
    fn children(&self) -> Self::Children;
}
