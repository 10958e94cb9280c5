//! Capabilities: one narrow trait per configurable attribute.
//!
//! An option that sets the address only asks for `Addressable`, not for
//! a concrete `Server`. Any type exposing the capability can reuse the
//! same option constructors: polymorphism over what a type can do,
//! not over a shared base type.

/// Something with a bind address.
pub trait Addressable {
    fn set_address(&mut self, address: String);
    fn address(&self) -> &str;
}

/// Something with a connection limit.
pub trait Connectable {
    fn set_max_connections(&mut self, max_connections: i64);
    fn max_connections(&self) -> i64;
}
