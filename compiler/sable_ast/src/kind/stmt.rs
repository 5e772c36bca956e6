//! Statements.

/// Statement variants. Bodies are plain parent/child nesting.
///
/// `Expression` and `SetLocation` wrap one expression, `Declaration` wraps
/// one declaration, `Return` has an optional expression, the rest have no
/// children.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    Break,
    Continue,
    Expression,
    Declaration,
    SetLocation,
    /// Suspension point.
    Yield,
    Return,
}

impl Statement {
    pub const fn variant_name(self) -> &'static str {
        match self {
            Statement::Break => "statement::Break",
            Statement::Continue => "statement::Continue",
            Statement::Expression => "statement::Expression",
            Statement::Declaration => "statement::Declaration",
            Statement::SetLocation => "statement::SetLocation",
            Statement::Yield => "statement::Yield",
            Statement::Return => "statement::Return",
        }
    }
}
