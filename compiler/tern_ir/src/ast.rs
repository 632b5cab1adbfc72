//! Expression tree.
//!
//! Everything in Tern is an expression: declarations, loops and class
//! definitions all produce a value (often `none`). The tree is owned and
//! immutable once parsed. Function and class definitions are reference
//! counted so closures and classes created at run time can share them.

use std::fmt;
use std::rc::Rc;

use crate::{Name, Span};

/// A parsed source file: a sequence of top-level expressions.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub body: Vec<Expr>,
}

/// Expression node with its source location.
#[derive(Clone, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug)]
pub enum ExprKind {
    // Literals
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    None,
    /// Backtick symbol: `` `name ``.
    Atom(Name),
    List(Vec<Expr>),
    /// `#{k: v, ...}`
    Dict(Vec<(Expr, Expr)>),
    /// `{field: v, ...}`
    Record(Vec<(Name, Expr)>),

    Ident(Name),
    This,
    Attr {
        receiver: Box<Expr>,
        name: Name,
    },
    Index {
        receiver: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Arg>,
    },

    /// Parenthesized `(a; b)`: evaluated in the enclosing scope.
    Seq(Vec<Expr>),
    /// Braced `{ a; b }`: evaluated in a fresh child scope.
    Block(Vec<Expr>),

    /// `target = value` where target is an identifier, attribute or index.
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `var name = value`
    Declare {
        name: Name,
        value: Box<Expr>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    /// `a < b <= c`: each operand evaluated at most once.
    Compare {
        first: Box<Expr>,
        rest: Vec<(CompareOp, Expr)>,
    },

    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    While {
        cond: Box<Expr>,
        body: Box<Expr>,
    },
    For {
        binding: Name,
        iterable: Box<Expr>,
        body: Box<Expr>,
    },

    /// Anonymous function literal (`x -> e`, `fn(a) { .. }`).
    Lambda(Rc<FunctionDef>),
    /// Named function declaration (`f(x) = e`, `fn f(x) { .. }`).
    FnDecl(Rc<FunctionDef>),
    Class(Rc<ClassDef>),

    Return(Option<Box<Expr>>),
    Break,
    Continue,
    Throw(Box<Expr>),
    Try {
        body: Box<Expr>,
        binding: Name,
        handler: Box<Expr>,
    },

    Print(Vec<Expr>),

    /// Placeholder left by parser recovery.
    Error,
}

impl ExprKind {
    /// Short description for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            ExprKind::Int(_) => "integer literal",
            ExprKind::Str(_) => "string literal",
            ExprKind::Bool(_) => "boolean literal",
            ExprKind::None => "none",
            ExprKind::Atom(_) => "atom",
            ExprKind::List(_) => "list literal",
            ExprKind::Dict(_) => "dict literal",
            ExprKind::Record(_) => "record literal",
            ExprKind::Ident(_) => "identifier",
            ExprKind::This => "this",
            ExprKind::Attr { .. } => "attribute access",
            ExprKind::Index { .. } => "index access",
            ExprKind::Call { .. } => "call",
            ExprKind::Seq(_) => "sequence",
            ExprKind::Block(_) => "block",
            ExprKind::Assign { .. } => "assignment",
            ExprKind::Declare { .. } => "declaration",
            ExprKind::Unary { .. } => "unary operation",
            ExprKind::Binary { .. } => "binary operation",
            ExprKind::And(..) => "and",
            ExprKind::Or(..) => "or",
            ExprKind::Compare { .. } => "comparison",
            ExprKind::If { .. } => "if",
            ExprKind::While { .. } => "while",
            ExprKind::For { .. } => "for",
            ExprKind::Lambda(_) => "function literal",
            ExprKind::FnDecl(_) => "function declaration",
            ExprKind::Class(_) => "class declaration",
            ExprKind::Return(_) => "return",
            ExprKind::Break => "break",
            ExprKind::Continue => "continue",
            ExprKind::Throw(_) => "throw",
            ExprKind::Try { .. } => "try",
            ExprKind::Print(_) => "print",
            ExprKind::Error => "invalid expression",
        }
    }
}

/// Call argument, positional or `name=value`.
#[derive(Clone, Debug)]
pub struct Arg {
    pub name: Option<Name>,
    pub value: Expr,
    pub span: Span,
}

/// Declared parameter with an optional default expression.
#[derive(Clone, Debug)]
pub struct Param {
    pub name: Name,
    pub default: Option<Expr>,
    pub span: Span,
}

/// Function, method or property accessor definition.
#[derive(Debug)]
pub struct FunctionDef {
    pub name: Option<Name>,
    pub params: Vec<Param>,
    pub body: Expr,
    pub span: Span,
}

#[derive(Debug)]
pub struct ClassDef {
    pub name: Name,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

/// Class body member, in declaration order.
#[derive(Debug)]
pub enum ClassMember {
    /// `var name = init`
    Field { name: Name, init: Expr, span: Span },
    /// `fn name(params) { body }`
    Method(Rc<FunctionDef>),
    /// `fn this.name { body }`, zero parameters.
    Getter(Rc<FunctionDef>),
    /// `fn this.name = param { body }`, one parameter.
    Setter(Rc<FunctionDef>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
