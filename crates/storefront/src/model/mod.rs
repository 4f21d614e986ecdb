//! Storefront data types. The resource types implement
//! [`ActorEntity`](resource_actor::ActorEntity) in their actor modules.

pub mod cart;
pub mod checkout;
pub mod inventory;
pub mod money;
pub mod order;
pub mod product;

pub use cart::*;
pub use checkout::*;
pub use inventory::*;
pub use money::*;
pub use order::*;
pub use product::*;
