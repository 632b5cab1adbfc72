//! Evaluating a `class` declaration.

use tern_ir::{ClassDef, ClassMember, FunctionDef, Name};

use super::Interpreter;
use crate::binder::make_function;
use crate::environment::ScopeRef;
use crate::errors::{not_implemented, EvalError};
use crate::object::{ClassBuilder, ClassValue, PropertyHalf};

impl Interpreter<'_> {
    /// One pass over the members in order. Methods and accessors close over
    /// the declaring scope.
    pub(super) fn eval_class(
        &mut self,
        def: &ClassDef,
        scope: &ScopeRef,
    ) -> Result<ClassValue, EvalError> {
        let mut builder = ClassBuilder::new(def.name, self.interner);
        for member in &def.members {
            match member {
                ClassMember::Field { name, init, span } => builder.add_field(*name, init, *span)?,
                ClassMember::Method(method) => {
                    let name = member_name(method)?;
                    builder.add_method(name, make_function(method, scope, self.interner)?)?;
                }
                ClassMember::Getter(accessor) => {
                    let name = member_name(accessor)?;
                    let getter = make_function(accessor, scope, self.interner)?;
                    builder.add_accessor(name, PropertyHalf::Getter, getter)?;
                }
                ClassMember::Setter(accessor) => {
                    let name = member_name(accessor)?;
                    let setter = make_function(accessor, scope, self.interner)?;
                    builder.add_accessor(name, PropertyHalf::Setter, setter)?;
                }
            }
        }
        Ok(builder.finish(scope, def.span))
    }
}

fn member_name(def: &FunctionDef) -> Result<Name, EvalError> {
    def.name
        .ok_or_else(|| not_implemented("anonymous class member").with_span(def.span))
}
