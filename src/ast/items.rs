use super::expressions::Expr;

/// Function Prototype
///
/// The name and parameter list of a function, independent of whether a body
/// follows. Used both for `extern` declarations and as the head of a `def`.
/// Parameter names are pairwise distinct, enforced at parse time.
#[derive(Debug, PartialEq, Clone)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    /// Whether this is the synthetic prototype wrapped around a bare
    /// top-level expression.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// Function Definition
///
/// A complete definition: a prototype plus a single expression body.
#[derive(Debug, PartialEq, Clone)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

/// Top-level item, one per `def`, `extern`, or bare expression, in source
/// order. Bare expressions are wrapped in an anonymous `Function` so every
/// item is uniformly executable by the consumer.
#[derive(Debug, PartialEq, Clone)]
pub enum Item {
    Definition(Function),
    Extern(Prototype),
}
