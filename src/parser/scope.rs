//! Declaration bookkeeping for redeclaration early errors
//!
//! Only names are tracked: the parser never resolves ordinary references,
//! it just needs to know which names each open scope has declared, and how.
//! Private names are the exception, since every `#name` must be declared by
//! an enclosing class body.

use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScopeKind {
    /// Script, module or function top level
    Function,
    /// Block, switch body, `for` head or class static context
    Block,
    /// Catch clause; `simple` when the parameter is a plain identifier
    Catch { simple: bool },
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    lexical: FxHashSet<String>,
    /// Function declarations among `lexical` (sloppy blocks may repeat them)
    functions: FxHashSet<String>,
    var: FxHashSet<String>,
    params: FxHashSet<String>,
}

impl Scope {
    fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            lexical: FxHashSet::default(),
            functions: FxHashSet::default(),
            var: FxHashSet::default(),
            params: FxHashSet::default(),
        }
    }
}

/// Stack of open scopes, innermost last
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    scopes: Vec<Scope>,
}

/// How a name is being declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingKind {
    Var,
    Lexical,
    /// Function declaration in a block
    BlockFunction { sloppy: bool },
    /// Function declaration at function or script top level
    TopLevelFunction,
    Param,
}

impl ScopeStack {
    pub(crate) fn push(&mut self, kind: ScopeKind) {
        self.scopes.push(Scope::new(kind));
    }

    pub(crate) fn pop(&mut self) {
        self.scopes.pop();
    }

    /// Declare `name`. Returns `false` when it clashes with an earlier
    /// declaration visible from the current scope.
    pub(crate) fn declare(&mut self, name: &str, kind: BindingKind) -> bool {
        match kind {
            BindingKind::Var | BindingKind::TopLevelFunction => self.declare_var(name),
            BindingKind::Lexical => self.declare_lexical(name, false, false),
            BindingKind::BlockFunction { sloppy } => self.declare_lexical(name, true, sloppy),
            BindingKind::Param => match self.scopes.last_mut() {
                Some(scope) => {
                    scope.params.insert(name.to_string());
                    true
                }
                None => true,
            },
        }
    }

    fn declare_lexical(&mut self, name: &str, is_function: bool, sloppy: bool) -> bool {
        let Some(scope) = self.scopes.last_mut() else {
            return true;
        };
        if scope.lexical.contains(name) && !(is_function && sloppy && scope.functions.contains(name)) {
            return false;
        }
        if scope.var.contains(name) || scope.params.contains(name) {
            return false;
        }
        scope.lexical.insert(name.to_string());
        if is_function {
            scope.functions.insert(name.to_string());
        }
        true
    }

    fn declare_var(&mut self, name: &str) -> bool {
        for scope in self.scopes.iter_mut().rev() {
            let clashes = scope.lexical.contains(name)
                && match scope.kind {
                    ScopeKind::Catch { simple } => !simple,
                    ScopeKind::Function | ScopeKind::Block => true,
                };
            if clashes {
                return false;
            }
            scope.var.insert(name.to_string());
            if scope.kind == ScopeKind::Function {
                break;
            }
        }
        true
    }

    /// Number of open scopes; 1 at script or module top level
    pub(crate) fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Whether `name` was declared in the outermost scope
    pub(crate) fn is_declared_at_top_level(&self, name: &str) -> bool {
        self.scopes
            .first()
            .is_some_and(|scope| scope.lexical.contains(name) || scope.var.contains(name))
    }
}

/// How a class body declares a private name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrivateKind {
    Field,
    Method,
    Getter { is_static: bool },
    Setter { is_static: bool },
    /// Both halves of an accessor; nothing more may share the name
    AccessorPair,
}

#[derive(Debug, Default)]
struct ClassPrivateNames {
    declared: FxHashMap<String, PrivateKind>,
    /// `#name` uses not declared (yet) by this class, with their offsets
    unresolved: Vec<(String, u32)>,
}

/// Private names of the open class bodies, innermost last.
///
/// A reference may precede its declaration within a class, so references
/// are only checked once the class body closes; whatever it does not
/// declare is handed to the enclosing class.
#[derive(Debug, Default)]
pub(crate) struct PrivateNameStack {
    classes: Vec<ClassPrivateNames>,
}

impl PrivateNameStack {
    pub(crate) fn enter_class(&mut self) {
        self.classes.push(ClassPrivateNames::default());
    }

    /// Declare `#name` in the innermost class. Returns `false` for a
    /// duplicate, unless it completes a getter/setter pair with the same
    /// placement.
    pub(crate) fn declare(&mut self, name: &str, kind: PrivateKind) -> bool {
        let Some(class) = self.classes.last_mut() else {
            return false;
        };
        let Some(previous) = class.declared.get_mut(name) else {
            class.declared.insert(name.to_string(), kind);
            return true;
        };
        match (*previous, kind) {
            (PrivateKind::Getter { is_static: a }, PrivateKind::Setter { is_static: b })
            | (PrivateKind::Setter { is_static: a }, PrivateKind::Getter { is_static: b })
                if a == b =>
            {
                *previous = PrivateKind::AccessorPair;
                true
            }
            _ => false,
        }
    }

    /// Record a use of `#name`. Returns `false` outside any class body.
    pub(crate) fn reference(&mut self, name: &str, offset: u32) -> bool {
        let Some(class) = self.classes.last_mut() else {
            return false;
        };
        if !class.declared.contains_key(name) {
            class.unresolved.push((name.to_string(), offset));
        }
        true
    }

    /// Close the innermost class body. Returns the earliest reference that
    /// no class encloses a declaration for.
    pub(crate) fn exit_class(&mut self) -> Option<(String, u32)> {
        let ClassPrivateNames { declared, unresolved } = self.classes.pop()?;
        let pending = unresolved.into_iter().filter(|(name, _)| !declared.contains_key(name));
        match self.classes.last_mut() {
            Some(outer) => {
                outer.unresolved.extend(pending);
                None
            }
            None => pending.min_by_key(|(_, offset)| *offset),
        }
    }
}
