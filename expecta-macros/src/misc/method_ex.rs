use syn::{spanned::Spanned, Error, FnArg, ReturnType, Signature, Type};

use super::TypeEx;

pub(crate) trait MethodEx {
    fn is_associated_fn(&self) -> bool;

    /// Returns an error for signatures the generated mock can not forward.
    fn check_mockable(&self) -> Result<(), Error>;
}

impl MethodEx for Signature {
    fn is_associated_fn(&self) -> bool {
        !self.inputs.iter().any(|i| matches!(i, FnArg::Receiver(_)))
    }

    fn check_mockable(&self) -> Result<(), Error> {
        if self.is_associated_fn() {
            return Err(Error::new(
                self.span(),
                "Mocking associated functions without receiver is not supported!",
            ));
        }

        if !self.generics.params.is_empty() {
            return Err(Error::new(
                self.generics.span(),
                "Mocking generic methods is not supported!",
            ));
        }

        if self.asyncness.is_some() {
            return Err(Error::new(
                self.asyncness.span(),
                "Mocking async methods is not supported!",
            ));
        }

        for input in &self.inputs {
            let FnArg::Typed(t) = input else {
                continue;
            };

            if let Type::Reference(r) = &*t.ty {
                if r.mutability.is_some() {
                    return Err(Error::new(
                        t.ty.span(),
                        "Mocking methods with mutable reference arguments is not supported!",
                    ));
                }
            }

            if t.ty.contains_self_type() {
                return Err(Error::new(
                    t.ty.span(),
                    "Mocking methods with `Self` in the argument types is not supported!",
                ));
            }
        }

        if let ReturnType::Type(_, t) = &self.output {
            if matches!(&**t, Type::Reference(_)) {
                return Err(Error::new(
                    t.span(),
                    "Mocking methods that return a reference is not supported!",
                ));
            }

            if t.contains_self_type() {
                return Err(Error::new(
                    t.span(),
                    "Mocking methods with `Self` in the return type is not supported!",
                ));
            }
        }

        Ok(())
    }
}
