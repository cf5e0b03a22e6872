//! Grammar parameters and the statement position a statement is parsed in

use bitflags::bitflags;

bitflags! {
    /// Parameters threaded through every parse function. Productions that
    /// change a parameter install a new context for their children and the
    /// previous one is restored on exit, including on error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Context: u16 {
        /// Strict mode code
        const STRICT = 1 << 0;
        /// Module goal
        const MODULE = 1 << 1;
        /// [In]: the `in` operator is allowed (cleared in `for` heads)
        const IN = 1 << 2;
        /// [Yield]: `yield` is an operator
        const YIELD = 1 << 3;
        /// [Await]: `await` is an operator
        const AWAIT = 1 << 4;
        /// [Return]: inside a function body
        const RETURN = 1 << 5;
        /// `continue` and unlabeled `break` are allowed
        const IN_ITERATION = 1 << 6;
        /// Unlabeled `break` is allowed
        const IN_SWITCH = 1 << 7;
        /// `super(...)` is allowed (derived class constructors)
        const SUPER_CALL = 1 << 8;
        /// `super.x` is allowed (methods)
        const SUPER_PROPERTY = 1 << 9;
        /// `new.target` is allowed
        const NEW_TARGET = 1 << 10;
        /// Class field initializer, where `arguments` is forbidden
        const IN_CLASS_FIELD = 1 << 11;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::IN
    }
}

impl Context {
    #[inline]
    pub(crate) fn is_strict(self) -> bool {
        self.contains(Self::STRICT)
    }

    #[inline]
    pub(crate) fn is_module(self) -> bool {
        self.contains(Self::MODULE)
    }

    #[inline]
    pub(crate) fn has_in(self) -> bool {
        self.contains(Self::IN)
    }

    #[inline]
    pub(crate) fn has_yield(self) -> bool {
        self.contains(Self::YIELD)
    }

    #[inline]
    pub(crate) fn has_await(self) -> bool {
        self.contains(Self::AWAIT)
    }

    #[inline]
    pub(crate) fn and_in(self, include: bool) -> Self {
        self.and(Self::IN, include)
    }

    #[inline]
    pub(crate) fn and_yield(self, include: bool) -> Self {
        self.and(Self::YIELD, include)
    }

    #[inline]
    pub(crate) fn and_await(self, include: bool) -> Self {
        self.and(Self::AWAIT, include)
    }

    #[inline]
    pub(crate) fn and_strict(self, include: bool) -> Self {
        self.and(Self::STRICT, include)
    }

    #[inline]
    pub(crate) fn and(self, flag: Self, set: bool) -> Self {
        if set {
            self | flag
        } else {
            self - flag
        }
    }

    /// Context for a non-arrow function's parameters and body. Only the
    /// goal and strictness survive the function boundary.
    pub(crate) fn function_body(self, is_async: bool, is_generator: bool) -> Self {
        ((self & (Self::STRICT | Self::MODULE)) | Self::IN | Self::RETURN | Self::NEW_TARGET)
            .and_await(is_async)
            .and_yield(is_generator)
    }

    /// Context for an arrow function body: `this`, `super` and `new.target`
    /// are inherited from the enclosing function, loop and switch are not
    pub(crate) fn arrow_body(self, is_async: bool) -> Self {
        let inherited = self
            & (Self::STRICT
                | Self::MODULE
                | Self::SUPER_CALL
                | Self::SUPER_PROPERTY
                | Self::NEW_TARGET
                | Self::IN_CLASS_FIELD);
        (inherited | Self::IN | Self::RETURN).and_await(is_async)
    }
}

/// Where a statement appears, which decides what declarations it may be
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum StatementContext {
    /// Script, module or function top level
    TopLevel,
    /// Block, switch case or other statement list
    StatementList,
    /// Consequent or alternate of `if`
    If,
    /// Body of a labeled statement outside a loop body
    Label,
    /// Body of a loop, `with`, or a label inside a loop body
    Loop,
}
