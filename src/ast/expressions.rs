/// Expression node.
///
/// The node set is closed, so consumers match exhaustively instead of
/// downcasting. Every node owns its children outright; the tree has no
/// sharing and no back-references.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A reference to a variable. Name resolution happens in later stages.
    Variable(String),
    /// A binary operation with exactly two operands.
    Binary {
        operator: char,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// A call to a named function. The argument list may be empty.
    Call { callee: String, args: Vec<Expr> },
}
