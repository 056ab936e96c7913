use std::{fmt, sync::Arc};

use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Interface,
    Class,
}

/// Name, parameter types and return type of a method declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    name: String,
    params: Vec<String>,
    returns: String,
}

impl MethodSignature {
    pub fn new<I, S>(name: impl Into<String>, params: I, returns: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            returns: returns.into(),
        }
    }

    /// A method without parameters.
    pub fn accessor(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self::new(name, std::iter::empty::<String>(), returns)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn returns(&self) -> &str {
        &self.returns
    }

    pub fn is_accessor(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}({})",
            self.returns,
            self.name,
            self.params.iter().join(", ")
        )
    }
}

/// Runtime description of an interface or a class implementing interfaces.
///
/// The natural-ordering contract is carried as a marker rather than as a method, so its
/// three-way comparison never shows up among the accessors.
#[derive(Debug)]
pub struct TypeDescriptor {
    name: String,
    kind: TypeKind,
    methods: Vec<MethodSignature>,
    supertypes: Vec<Arc<TypeDescriptor>>,
    orderable: bool,
}

impl TypeDescriptor {
    pub fn interface(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name.into(), TypeKind::Interface)
    }

    pub fn class(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name.into(), TypeKind::Class)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn declared_methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    pub fn supertypes(&self) -> &[Arc<TypeDescriptor>] {
        &self.supertypes
    }

    pub fn is_orderable(&self) -> bool {
        self.orderable || self.supertypes.iter().any(|s| s.is_orderable())
    }

    /// Every method reachable through this type: own declarations first, then
    /// inherited ones depth first. A signature declared closer to this type hides
    /// the same signature further up; overloads with other parameters stay visible.
    pub fn methods(&self) -> Vec<MethodSignature> {
        self.lineage()
            .into_iter()
            .flat_map(|t| t.methods.iter())
            .unique_by(|m| (m.name(), m.params()))
            .cloned()
            .collect()
    }

    /// Whether an instance of `other` can be used where this type is expected.
    ///
    /// Types are identified by descriptor instance, never by name: two descriptors built
    /// separately are distinct types even when their names agree.
    pub fn is_assignable_from(&self, other: &TypeDescriptor) -> bool {
        std::ptr::eq(self, other)
            || other
                .supertypes
                .iter()
                .any(|s| self.is_assignable_from(s))
    }

    fn lineage(&self) -> Vec<&TypeDescriptor> {
        let mut out = vec![self];
        for s in &self.supertypes {
            out.extend(s.lineage());
        }
        out
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: String,
    kind: TypeKind,
    methods: Vec<MethodSignature>,
    supertypes: Vec<Arc<TypeDescriptor>>,
    orderable: bool,
}

impl TypeDescriptorBuilder {
    fn new(name: String, kind: TypeKind) -> Self {
        Self {
            name,
            kind,
            methods: Vec::new(),
            supertypes: Vec::new(),
            orderable: false,
        }
    }

    pub fn method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    pub fn accessor(self, name: impl Into<String>, returns: impl Into<String>) -> Self {
        self.method(MethodSignature::accessor(name, returns))
    }

    pub fn extends(mut self, parent: &Arc<TypeDescriptor>) -> Self {
        self.supertypes.push(Arc::clone(parent));
        self
    }

    pub fn implements(self, interface: &Arc<TypeDescriptor>) -> Self {
        self.extends(interface)
    }

    /// Marks the type as extending the natural-ordering contract.
    pub fn orderable(mut self) -> Self {
        self.orderable = true;
        self
    }

    pub fn build(self) -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor {
            name: self.name,
            kind: self.kind,
            methods: self.methods,
            supertypes: self.supertypes,
            orderable: self.orderable,
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{MethodSignature, TypeDescriptor, TypeKind};

    #[test]
    fn signature_display() {
        let illegal = MethodSignature::new("illegal", ["String"], "int");
        assert_eq!(illegal.to_string(), "int illegal(String)");
        assert!(!illegal.is_accessor());

        let name = MethodSignature::accessor("name", "String");
        assert_eq!(name.to_string(), "String name()");
        assert!(name.is_accessor());
    }

    #[test]
    fn methods_include_inherited() {
        let simple = TypeDescriptor::interface("SimpleInterface")
            .accessor("value", "int")
            .build();
        let extension = TypeDescriptor::interface("EmptyExtension")
            .extends(&simple)
            .build();

        assert!(extension.declared_methods().is_empty());
        let names = extension.methods().iter().map(|m| m.name().to_owned()).collect_vec();
        assert_eq!(names, vec!["value"]);
    }

    #[test]
    fn own_declaration_hides_inherited_signature() {
        let parent = TypeDescriptor::interface("Parent")
            .accessor("value", "Object")
            .accessor("name", "String")
            .build();
        let child = TypeDescriptor::interface("Child")
            .accessor("value", "int")
            .extends(&parent)
            .build();

        let methods = child.methods();
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].returns(), "int");
        assert_eq!(methods[1].name(), "name");
    }

    #[test]
    fn overloads_with_parameters_stay_visible() {
        let parent = TypeDescriptor::interface("InterfaceWithIllegalMethod")
            .accessor("legal", "String")
            .method(MethodSignature::new("illegal", ["String"], "int"))
            .build();
        let child = TypeDescriptor::interface("ExtendingIllegalInterface")
            .accessor("illegal", "int")
            .extends(&parent)
            .build();

        let signatures = child.methods().iter().map(|m| m.to_string()).collect_vec();
        assert_eq!(
            signatures,
            vec!["int illegal()", "String legal()", "int illegal(String)"]
        );
    }

    #[test]
    fn diamond_inheritance_is_deduplicated() {
        let base = TypeDescriptor::interface("Base").accessor("id", "long").build();
        let left = TypeDescriptor::interface("Left").extends(&base).build();
        let right = TypeDescriptor::interface("Right").extends(&base).build();
        let both = TypeDescriptor::interface("Both")
            .extends(&left)
            .extends(&right)
            .build();

        assert_eq!(both.methods().len(), 1);
    }

    #[test]
    fn assignability() {
        let named = TypeDescriptor::interface("Named").accessor("name", "String").build();
        let sub = TypeDescriptor::interface("Labelled").extends(&named).build();
        let class = TypeDescriptor::class("Person").implements(&sub).build();
        let other = TypeDescriptor::class("Other").build();

        assert_eq!(class.kind(), TypeKind::Class);
        assert!(named.is_assignable_from(&named));
        assert!(named.is_assignable_from(&class));
        assert!(sub.is_assignable_from(&class));
        assert!(!class.is_assignable_from(&named));
        assert!(!named.is_assignable_from(&other));
    }

    #[test]
    fn same_name_is_not_same_type() {
        let named = TypeDescriptor::interface("Named").accessor("name", "String").build();
        let lookalike = TypeDescriptor::interface("Named").accessor("label", "String").build();
        let class = TypeDescriptor::class("Person").implements(&lookalike).build();

        assert!(!named.is_assignable_from(&lookalike));
        assert!(!named.is_assignable_from(&class));
        assert!(lookalike.is_assignable_from(&class));
    }

    #[test]
    fn orderable_is_inherited() {
        let sample = TypeDescriptor::interface("Sample").accessor("name", "String").build();
        let comparable = TypeDescriptor::interface("ComparableSample")
            .accessor("foo", "int")
            .extends(&sample)
            .orderable()
            .build();
        let child = TypeDescriptor::interface("Child").extends(&comparable).build();

        assert!(!sample.is_orderable());
        assert!(comparable.is_orderable());
        assert!(child.is_orderable());
    }
}
