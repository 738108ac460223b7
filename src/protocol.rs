//! Wire-level model for the handshake: extras payload, request/response data, and the codec.

pub mod codec;
pub mod extras;
pub mod request;
pub mod response;

pub use codec::*;
pub use extras::*;
pub use request::*;
pub use response::*;
