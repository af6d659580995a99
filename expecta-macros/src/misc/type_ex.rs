use quote::quote;
use syn::{
    visit::{visit_path, Visit},
    Path, Type,
};

pub(crate) trait TypeEx {
    fn contains_self_type(&self) -> bool;

    /// Type the argument is stored as inside the engine. References are
    /// converted into their owned counterpart.
    fn to_owned_arg(&self) -> Type;
}

impl TypeEx for Type {
    fn contains_self_type(&self) -> bool {
        let mut visitor = ContainsSelfType(false);
        visitor.visit_type(self);

        visitor.0
    }

    fn to_owned_arg(&self) -> Type {
        match self {
            Type::Reference(r) => {
                let elem = &r.elem;

                Type::Verbatim(quote!(<#elem as ::std::borrow::ToOwned>::Owned))
            }
            t => t.clone(),
        }
    }
}

struct ContainsSelfType(bool);

impl<'ast> Visit<'ast> for ContainsSelfType {
    fn visit_path(&mut self, p: &'ast Path) {
        if p.segments.iter().any(|s| s.ident == "Self") {
            self.0 = true;
        }

        visit_path(self, p);
    }
}
