use tracing::trace;

use crate::capability::{Addressable, Connectable};

/// A deferred mutation of some target `T`.
///
/// Building an option never touches anything; the mutation only happens
/// when `apply` is called. `apply` takes `&self`, so one option value can
/// configure any number of targets.
///
/// `T` is usually left generic and bounded by a capability trait, which
/// turns "this option does not fit this type" into a compile error.
pub trait Configure<T: ?Sized> {
    fn apply(&self, target: &mut T);

    /// Erase the concrete option type so options of different kinds can
    /// live in one `Vec`.
    fn boxed<'a>(self) -> BoxedOption<'a, T>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

pub type BoxedOption<'a, T> = Box<dyn Configure<T> + 'a>;

impl<T: ?Sized, O: Configure<T> + ?Sized> Configure<T> for &O {
    fn apply(&self, target: &mut T) {
        (**self).apply(target)
    }
}

impl<T: ?Sized, O: Configure<T> + ?Sized> Configure<T> for Box<O> {
    fn apply(&self, target: &mut T) {
        (**self).apply(target)
    }
}

/// An ad-hoc option wrapping a closure. Built by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

/// Turn any `Fn(&mut T)` closure into an option.
pub fn from_fn<T: ?Sized, F>(f: F) -> FromFn<F>
where
    F: Fn(&mut T),
{
    FromFn { f }
}

impl<T: ?Sized, F> Configure<T> for FromFn<F>
where
    F: Fn(&mut T),
{
    fn apply(&self, target: &mut T) {
        (self.f)(target)
    }
}

/// Sets the address on anything `Addressable`. Built by [`with_address`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithAddress {
    address: String,
}

/// Sets the connection limit on anything `Connectable`. Built by
/// [`with_max_connections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithMaxConnections {
    max_connections: i64,
}

/// Option for the bind address. The value is taken as-is: no host:port
/// validation.
pub fn with_address(address: impl Into<String>) -> WithAddress {
    WithAddress {
        address: address.into(),
    }
}

/// Option for the connection limit. Zero and negative values are accepted.
pub fn with_max_connections(max_connections: i64) -> WithMaxConnections {
    WithMaxConnections { max_connections }
}

impl<T: Addressable + ?Sized> Configure<T> for WithAddress {
    fn apply(&self, target: &mut T) {
        trace!(address = %self.address, "applying address option");
        target.set_address(self.address.clone());
    }
}

impl<T: Connectable + ?Sized> Configure<T> for WithMaxConnections {
    fn apply(&self, target: &mut T) {
        trace!(max_connections = self.max_connections, "applying max connections option");
        target.set_max_connections(self.max_connections);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Only has an address. Connection-limit options must not compile
    /// against it, so the tests below only use address options.
    #[derive(Default)]
    struct Endpoint {
        address: String,
    }

    impl Addressable for Endpoint {
        fn set_address(&mut self, address: String) {
            self.address = address;
        }

        fn address(&self) -> &str {
            &self.address
        }
    }

    #[derive(Default)]
    struct Pool {
        limit: i64,
    }

    impl Connectable for Pool {
        fn set_max_connections(&mut self, max_connections: i64) {
            self.limit = max_connections;
        }

        fn max_connections(&self) -> i64 {
            self.limit
        }
    }

    #[test]
    fn address_option_applies_to_any_addressable() {
        let mut endpoint = Endpoint::default();
        with_address("10.0.0.1:9000").apply(&mut endpoint);
        assert_eq!(endpoint.address(), "10.0.0.1:9000");
    }

    #[test]
    fn limit_option_applies_to_any_connectable() {
        let mut pool = Pool::default();
        with_max_connections(-4).apply(&mut pool);
        assert_eq!(pool.max_connections(), -4);
    }

    #[test]
    fn one_option_configures_many_targets() {
        let option = with_address("localhost:1");
        let mut a = Endpoint::default();
        let mut b = Endpoint::default();

        option.apply(&mut a);
        option.apply(&mut b);

        assert_eq!(a.address(), "localhost:1");
        assert_eq!(b.address(), "localhost:1");
    }

    #[test]
    fn closures_are_options() {
        let mut pool = Pool::default();
        let double = from_fn(|p: &mut Pool| p.set_max_connections(p.max_connections() * 2));

        with_max_connections(7).apply(&mut pool);
        double.apply(&mut pool);

        assert_eq!(pool.max_connections(), 14);
    }

    #[test]
    fn boxed_options_apply_in_order() {
        let options: Vec<BoxedOption<'_, Endpoint>> = vec![
            with_address("first").boxed(),
            from_fn(|e: &mut Endpoint| e.address.push_str("+closure")).boxed(),
            with_address("second").boxed(),
        ];

        let mut endpoint = Endpoint::default();
        for option in &options {
            option.apply(&mut endpoint);
        }

        assert_eq!(endpoint.address(), "second");
    }

    #[test]
    fn options_only_mutate_when_applied() {
        let mut endpoint = Endpoint {
            address: "untouched".to_string(),
        };
        let mut pool = Pool { limit: 1 };

        let address = with_address("applied:1");
        let limit = with_max_connections(50);
        let grow = from_fn(|p: &mut Pool| p.limit += 1);

        assert_eq!(endpoint.address(), "untouched");
        assert_eq!(pool.max_connections(), 1);

        address.apply(&mut endpoint);
        limit.apply(&mut pool);
        grow.apply(&mut pool);

        assert_eq!(endpoint.address(), "applied:1");
        assert_eq!(pool.max_connections(), 51);
    }

    #[test]
    fn references_and_boxes_forward_to_the_option() {
        fn apply_to<O: Configure<Pool>>(option: O, pool: &mut Pool) {
            option.apply(pool);
        }

        let mut pool = Pool::default();
        let limit = with_max_connections(9);

        apply_to(&limit, &mut pool);
        assert_eq!(pool.max_connections(), 9);

        apply_to(Box::new(with_max_connections(10)), &mut pool);
        assert_eq!(pool.max_connections(), 10);

        let boxed: BoxedOption<'_, Pool> = with_max_connections(11).boxed();
        apply_to(&boxed, &mut pool);
        apply_to(boxed, &mut pool);
        assert_eq!(pool.max_connections(), 11);
    }
}
