//! Reordering finalizer: from the mixed AST stack to the Javadoc node.
//!
//! Nodes of all three categories share one stack in source order. Each
//! category's output array is sized from the group counts, then filled from
//! its last slot towards the first while the group stack unwinds
//! newest-first, which leaves every array in source order.

use tracing::{debug, trace};

use super::context::{DocNode, ParseContext, TagCategory};
use super::errors::JavadocError;
use super::javadoc_parser::{JavadocParser, ParseState};
use crate::syntax::Javadoc;

const OP: &str = "finalize";

impl JavadocParser {
    /// Move everything collected for this comment into the Javadoc node.
    ///
    /// Runs once per comment, after the dispatcher consumed the whole text.
    pub fn finalize(&mut self) -> Result<(), JavadocError> {
        if self.state != ParseState::Scanning {
            return Err(JavadocError::contract(
                OP,
                format!("comment already in state {:?}", self.state),
            ));
        }
        let javadoc = self
            .javadoc
            .as_mut()
            .ok_or_else(|| JavadocError::contract(OP, "no javadoc node to fill"))?;
        finalize_javadoc(javadoc, &mut self.context)?;
        self.state = ParseState::Finalized;
        Ok(())
    }
}

/// Fill `javadoc` from the flags, return slot and AST stack of `context`.
///
/// Output arrays are sized exactly from the group counts before any node is
/// moved. A group referring to more nodes than the stack holds, nodes left
/// over, or a node of the wrong kind for its category all fail fast.
pub fn finalize_javadoc(
    javadoc: &mut Javadoc,
    context: &mut ParseContext,
) -> Result<(), JavadocError> {
    javadoc.inherited = context.inherited;
    if let Some(statement) = context.return_statement {
        javadoc.return_statement = Some(statement);
    }

    if context.groups().is_empty() {
        if context.node_depth() != 0 {
            return Err(JavadocError::contract(
                OP,
                format!("{} nodes without a group", context.node_depth()),
            ));
        }
        return Ok(());
    }

    let mut sizes = [0usize; 3];
    for group in context.groups() {
        sizes[group.category.index()] += group.count;
    }
    let total: usize = sizes.iter().sum();
    if total != context.node_depth() {
        return Err(JavadocError::contract(
            OP,
            format!(
                "groups account for {total} nodes, stack holds {}",
                context.node_depth()
            ),
        ));
    }

    let mut references = Slots::new(sizes[TagCategory::CrossReference.index()]);
    let mut thrown_exceptions = Slots::new(sizes[TagCategory::ThrownType.index()]);
    let mut parameters = Slots::new(sizes[TagCategory::Parameter.index()]);

    while let Some(group) = context.pop_group() {
        trace!(?group, "unwinding group");
        for _ in 0..group.count {
            let node = context
                .pop_node()
                .ok_or_else(|| JavadocError::contract(OP, "node stack underflow"))?;
            match group.category {
                TagCategory::CrossReference => references.place(
                    node.into_reference()
                        .map_err(|node| mismatch(&node, group.category))?,
                )?,
                TagCategory::ThrownType => thrown_exceptions.place(
                    node.into_type()
                        .map_err(|node| mismatch(&node, group.category))?,
                )?,
                TagCategory::Parameter => parameters.place(
                    node.into_name()
                        .map_err(|node| mismatch(&node, group.category))?,
                )?,
            }
        }
    }

    javadoc.references = references.finish()?;
    javadoc.thrown_exceptions = thrown_exceptions.finish()?;
    javadoc.parameters = parameters.finish()?;

    debug!(
        references = javadoc.references.len(),
        thrown = javadoc.thrown_exceptions.len(),
        parameters = javadoc.parameters.len(),
        inherited = javadoc.inherited,
        "finalized javadoc"
    );
    Ok(())
}

/// Output array of one category, sized up front and written from the back
/// while the group stack unwinds newest-first.
struct Slots<T> {
    items: Vec<Option<T>>,
    cursor: usize,
}

impl<T> Slots<T> {
    fn new(len: usize) -> Self {
        Self {
            items: std::iter::repeat_with(|| None).take(len).collect(),
            cursor: len,
        }
    }

    fn place(&mut self, item: T) -> Result<(), JavadocError> {
        self.cursor = self
            .cursor
            .checked_sub(1)
            .ok_or_else(|| JavadocError::contract(OP, "category holds more nodes than counted"))?;
        self.items[self.cursor] = Some(item);
        Ok(())
    }

    fn finish(self) -> Result<Box<[T]>, JavadocError> {
        if self.cursor != 0 {
            return Err(JavadocError::contract(
                OP,
                format!("{} slots left unfilled", self.cursor),
            ));
        }
        self.items
            .into_iter()
            .collect::<Option<Box<[T]>>>()
            .ok_or_else(|| JavadocError::contract(OP, "unfilled slot"))
    }
}

fn mismatch(node: &DocNode, category: TagCategory) -> JavadocError {
    JavadocError::contract(
        OP,
        format!("{} in a {:?} group", node.kind_name(), category),
    )
}
