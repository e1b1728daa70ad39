//! Per-type tables of derived methods.

use rustc_hash::FxHashMap;
use synth_ir::{Name, TypeId};

/// A constructor parameter as seen by a derived `copy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyParameter {
    pub name: Name,
    /// Whether an omitted argument defaults to the receiver's property.
    pub property: bool,
}

/// A synthesized member, evaluated directly over field values rather than
/// through an expression body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DerivedMethod {
    /// Return the named field.
    Component { field: Name },
    /// Build a new instance from per-parameter arguments.
    Copy { parameters: Vec<CopyParameter> },
    /// Render `Type(f1=v1, f2=v2)`.
    ToString { fields: Vec<Name> },
    /// Fold field hashes with multiplier 31.
    Hash { fields: Vec<Name> },
    /// Identity, then runtime type, then pairwise fields.
    Equals { fields: Vec<Name> },
}

/// Derived methods of one type, in registration order.
#[derive(Clone, Debug)]
pub struct DerivedMethodTable {
    pub ty: TypeId,
    pub type_name: Name,
    methods: Vec<(Name, DerivedMethod)>,
    index: FxHashMap<Name, usize>,
}

impl DerivedMethodTable {
    pub fn new(ty: TypeId, type_name: Name) -> Self {
        DerivedMethodTable {
            ty,
            type_name,
            methods: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Register `method` under `name`, replacing an earlier registration.
    pub fn insert(&mut self, name: Name, method: DerivedMethod) {
        match self.index.get(&name) {
            Some(&i) => self.methods[i].1 = method,
            None => {
                self.index.insert(name, self.methods.len());
                self.methods.push((name, method));
            }
        }
    }

    pub fn get(&self, name: Name) -> Option<&DerivedMethod> {
        self.index.get(&name).map(|&i| &self.methods[i].1)
    }

    /// The first registered method matching `pred`.
    pub fn find(&self, pred: impl Fn(&DerivedMethod) -> bool) -> Option<&DerivedMethod> {
        self.methods.iter().map(|(_, m)| m).find(|m| pred(m))
    }

    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.methods.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
