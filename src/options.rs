/// What the interface comparator does when an accessor fails to produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Keep comparing the remaining accessors and report the failures in the verdict.
    #[default]
    Degrade,

    /// Stop at the first failing accessor and return it as an error.
    Abort,
}

/// Order in which cached accessors are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessorOrder {
    /// Own methods in declaration order, then inherited ones, depth first.
    #[default]
    Declaration,

    /// Sorted by method name, then by parameter list.
    Name,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub failure_policy: FailurePolicy,
    pub accessor_order: AccessorOrder,
}

impl Options {
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn accessor_order(mut self, order: AccessorOrder) -> Self {
        self.accessor_order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessorOrder, FailurePolicy, Options};

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.failure_policy, FailurePolicy::Degrade);
        assert_eq!(options.accessor_order, AccessorOrder::Declaration);
    }

    #[test]
    fn builder_overrides() {
        let options = Options::default()
            .failure_policy(FailurePolicy::Abort)
            .accessor_order(AccessorOrder::Name);
        assert_eq!(options.failure_policy, FailurePolicy::Abort);
        assert_eq!(options.accessor_order, AccessorOrder::Name);
    }
}
