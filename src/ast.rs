/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models one syntactic construct and records the source line it
/// was parsed from. Every node owns its children, so a tree is dropped as a
/// whole once the statement that produced it has been evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Number {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A quoted string, kept together with its delimiters (`"hi"`).
    StringLiteral {
        /// The string as written, quotes included.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable or to a reserved command by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Unary minus.
    Negate {
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    const fn has_children(&self) -> bool {
        matches!(self, Self::BinaryOp { .. } | Self::Negate { .. })
    }

    /// Moves every operand that has operands of its own into `pending`,
    /// leaving a literal in its place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        let placeholder = || Self::Number { value: 0, line: 0 };
        match self {
            Self::BinaryOp { left, right, .. } => {
                for child in [left, right] {
                    if child.has_children() {
                        pending.push(std::mem::replace(&mut **child, placeholder()));
                    }
                }
            },
            Self::Negate { expr, .. } => {
                if expr.has_children() {
                    pending.push(std::mem::replace(&mut **expr, placeholder()));
                }
            },
            Self::Number { .. } | Self::StringLiteral { .. } | Self::Variable { .. } => {},
        }
    }
}

/// Long operator chains nest one node per operator, so a tree is taken apart
/// on the heap instead of through recursive drop glue.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// A single parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A blank line, or one holding only whitespace and comments.
    Empty,
    /// `name = expression` or `name = "string"`.
    Assignment {
        /// Name of the variable being bound.
        name:  String,
        /// The right-hand side.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A bare expression whose value is echoed.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// A short name for the statement form, for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Assignment { .. } => "assignment",
            Self::Expression { .. } => "expression",
        }
    }
}

/// The binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Binding power of the operator; higher binds tighter.
    ///
    /// Both levels are left-associative. Unary minus binds tighter than either
    /// and is handled outside this table.
    ///
    /// # Example
    /// ```
    /// use ether::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
